//! # Core
//!
//! 서비스 전반이 공유하는 기반 기능입니다.
//!
//! - [`errors`]: `AppError` 단일 에러 타입과 HTTP 응답 매핑
//! - [`registry`]: `#[service]` 싱글톤을 해석하는 `ServiceLocator`

pub mod errors;
pub mod registry;

pub use errors::*;
pub use registry::*;
