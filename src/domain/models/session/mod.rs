//! # Session
//!
//! 외부 인증 제공자가 발급한 세션 토큰을 검증한 결과를 표현합니다.
//!
//! ```rust,ignore
//! #[get("")]
//! pub async fn get_me(session: Session) -> Result<HttpResponse, AppError> {
//!     let user = session.require_user()?;
//!     Ok(HttpResponse::Ok().json(user))
//! }
//! ```

pub mod session;

pub use session::{AuthenticatedUser, Session, SessionClaims};
