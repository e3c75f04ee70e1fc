//! 캠퍼스 커넥트 백엔드
//!
//! 동문/동기 네트워크의 사용자 프로필을 지도에 표시하기 위한 HTTP 서비스입니다.
//! 같은 위치에 있는 사용자들을 하나의 장소(마커)로 묶어 GeoJSON으로 제공하고,
//! 프로필 수정 시 지역명을 좌표로 변환해 원격 프로필 API에 저장합니다.
//!
//! # Features
//!
//! - **위치 그룹핑**: 좌표(기본) 또는 `"area, city"` 기준으로 사용자 묶기
//! - **GeoJSON**: 지도 라이브러리용 FeatureCollection 렌더링
//! - **프로필 관리**: 검증, 지오코딩, 원격 API 저장
//! - **세션 검증**: 외부 인증 제공자가 발급한 JWT 검증
//! - **싱글톤 DI**: 매크로 기반 자동 의존성 주입
//! - **Redis**: 대시보드 목록과 지오코딩 결과 캐싱
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트 + SessionMiddleware
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 그룹핑, 프로필, 지오코딩, 세션
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 원격 프로필 API 클라이언트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────────────┐
//! │ Profile API + Redis     │
//! └─────────────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use campus_connect_backend::domain::places::{GroupingStrategy, MemberProjection};
//! use campus_connect_backend::services::places::LocationGrouper;
//!
//! let grouper = LocationGrouper::new(GroupingStrategy::Coordinates, MemberProjection::name_only());
//! let places = grouper.group(&records);
//! ```

pub mod core;
pub mod config;
pub mod caching;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod middlewares;
