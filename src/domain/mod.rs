//! # Domain Layer Module
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── entities  - 원격 프로필 API의 사용자 문서와 정규화된 레코드
//! ├── models    - 지도 장소(PlaceEntry), 그룹핑 설정, GeoJSON, 세션
//! └── dto       - HTTP 요청/응답 계약
//!      │
//!      ▼
//! Application Layer (services)
//!      │
//!      ▼
//! Infrastructure Layer (repositories, caching)
//! ```
//!
//! `entities`와 `models`의 하위 모듈은 `crate::domain::users`, `crate::domain::places` 처럼
//! 바로 접근할 수 있도록 재export 됩니다.

pub mod entities;
pub mod dto;
pub mod models;

pub use entities::*;
pub use models::*;
