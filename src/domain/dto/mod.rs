//! # Data Transfer Objects (DTO) Module
//!
//! HTTP 경계에서 주고받는 요청/응답 계약을 정의합니다.
//! 내부 표현(`UserRecord`, `PlaceEntry`)과 외부 표현을 분리해
//! 좌표처럼 화면마다 노출 범위가 다른 필드를 응답마다 제어합니다.
//!
//! ```text
//! dto/
//! ├── users/
//! │   ├── request/    # 프로필 수정 요청, 원격 API 업데이트 본문
//! │   └── response/   # 내 프로필, 디렉터리 요약
//! └── places/         # 지도 조회 쿼리 파라미터
//! ```
//!
//! 검증은 `validator` crate로 수행하며, 실패는 `AppError::ValidationError`(400)로 변환됩니다.

pub mod users;
pub mod places;

pub use users::*;
pub use places::*;
