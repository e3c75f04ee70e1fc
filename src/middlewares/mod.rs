//! # HTTP 미들웨어
//!
//! [`SessionMiddleware`]는 `Authorization: Bearer <token>` 헤더의 세션 토큰을 검증하고,
//! 성공하면 `AuthenticatedUser`를 request extensions에 넣습니다.
//! 유효한 세션이 없으면 핸들러까지 가지 않고 401 `{"error": ...}`로 응답합니다.
//! 핸들러는 `Session` 추출기로 그 값을 받습니다.
//!
//! ```rust,ignore
//! web::scope("/api/v1")
//!     .wrap(SessionMiddleware::required())
//!     .service(places::get_places)
//! ```

pub mod session_middleware;
mod session_inner;

pub use session_middleware::SessionMiddleware;
