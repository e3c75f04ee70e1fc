//! 캐싱 계층 모듈
//!
//! Redis를 백엔드로 하는 JSON 캐시를 제공합니다.
//!
//! # 캐시 키
//!
//! | 키 | 값 | TTL |
//! |----|----|-----|
//! | `dashboard:users` | 원격 API의 대시보드 사용자 문서 목록 | `DASHBOARD_CACHE_TTL_SECONDS` |
//! | `geocode:{sha256}` | 지오코딩 결과 좌표 | `GEOCODE_CACHE_TTL_SECONDS` |
//!
//! # 환경 설정
//!
//! ```bash
//! REDIS_URL=redis://localhost:6379  # 기본값
//! ```

pub mod dashboard_cache;
pub mod redis;

pub use dashboard_cache::{DashboardCache, DASHBOARD_CACHE_KEY};
