//! HTTP 핸들러
//!
//! 모든 핸들러는 `Result<HttpResponse, AppError>`를 반환하며,
//! 에러는 `AppError`의 `ResponseError` 구현으로 JSON 응답이 됩니다.

pub mod places;
pub mod users;
pub mod profiles;
