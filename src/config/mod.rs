//! 애플리케이션 설정
//!
//! 설정은 환경변수 기반의 단위 구조체 접근자(`ServerConfig::port()` 등)로 제공됩니다.
//!
//! - [`data_config`]: 실행 환경, 서버, 캐시, Rate Limiting, CORS
//! - [`api_config`]: 원격 프로필 API, 지오코딩 API, 지도 그룹핑 기본값
//! - [`auth_config`]: 세션 토큰 검증 키

pub mod data_config;
pub mod api_config;
pub mod auth_config;

pub use data_config::*;
pub use api_config::*;
pub use auth_config::*;
