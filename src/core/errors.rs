//! # Application Error Handling
//!
//! 서비스 전역에서 사용하는 단일 에러 타입입니다.
//! `thiserror`로 메시지를 정의하고 `actix_web::ResponseError`를 구현하여
//! 핸들러에서 `?`로 전파된 에러가 곧바로 JSON 응답이 됩니다.
//!
//! ## 상태 코드 매핑
//!
//! | 변형 | HTTP |
//! |------|------|
//! | `ValidationError` | 400 Bad Request |
//! | `AuthenticationError` | 401 Unauthorized |
//! | `NotFound` | 404 Not Found |
//! | `ExternalServiceError` | 502 Bad Gateway |
//! | `RedisError`, `InternalError` | 500 Internal Server Error |
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use crate::core::errors::AppError;
//!
//! async fn load_profile(email: &str) -> Result<ProfileResponse, AppError> {
//!     let document = profile_repo.find_by_email(email).await?
//!         .ok_or_else(|| AppError::NotFound("프로필을 찾을 수 없습니다".to_string()))?;
//!     Ok(ProfileResponse::from(document))
//! }
//! ```
//!
//! 응답 본문은 항상 다음 형태입니다.
//!
//! ```json
//! { "error": "Not found: 프로필을 찾을 수 없습니다" }
//! ```

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
#[derive(Error, Debug, Clone)]
pub enum AppError {
    /// Redis 캐시 관련 에러
    ///
    /// 캐시는 보조 저장소이므로 대부분의 호출부는 이 에러를 로그만 남기고 무시합니다.
    #[error("Redis error: {0}")]
    RedisError(String),

    /// 입력값 검증 실패 또는 지오코딩 결과 없음
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    /// 세션 토큰이 없거나, 만료되었거나, 서명이 올바르지 않음
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 프로필 API, 지오코딩 API 등 외부 서비스 호출 실패
    ///
    /// 업스트림 장애이므로 502 Bad Gateway로 응답합니다.
    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            AppError::ExternalServiceError(_) => StatusCode::BAD_GATEWAY,
            AppError::RedisError(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// 에러를 `{"error": "..."}` JSON 응답으로 변환합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        actix_web::HttpResponse::build(self.status_code())
            .json(serde_json::json!({
                "error": self.to_string()
            }))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::ValidationError(errors.to_string())
    }
}

impl From<redis::RedisError> for AppError {
    fn from(error: redis::RedisError) -> Self {
        AppError::RedisError(error.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;

/// 임의의 에러에 문맥 메시지를 붙여 `AppError::InternalError`로 변환합니다.
pub trait ErrorContext<T> {
    fn context(self, msg: &str) -> AppResult<T>;

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}
