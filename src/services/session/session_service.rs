//! 세션 토큰 검증 서비스
//!
//! 외부 인증 제공자가 발급한 JWT를 검증해 `AuthenticatedUser`로 변환합니다.
//! 이 서비스는 토큰을 발급하지 않습니다.

use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use jsonwebtoken::errors::ErrorKind;
use once_cell::sync::Lazy;
use singleton_macro::service;
use crate::config::{SessionConfig, SessionKey};
use crate::core::errors::AppError;
use crate::domain::models::session::{AuthenticatedUser, SessionClaims};

/// 검증 설정은 프로세스 시작 후 처음 사용할 때 한 번 읽습니다.
static SESSION_KEY: Lazy<Result<SessionKey, AppError>> = Lazy::new(SessionConfig::key);
static SESSION_ISSUER: Lazy<Option<String>> = Lazy::new(SessionConfig::issuer);

#[service(name = "session")]
pub struct SessionService {
    // 외부 의존성 없음
}

impl SessionService {
    /// 환경 설정의 키와 발급자로 세션 토큰을 검증합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 만료, 서명 불일치, 형식 오류, 이메일 클레임 없음
    /// * `AppError::InternalError` - 검증 키가 없거나, 설정된 공개키를 해석할 수 없음
    pub fn verify(&self, token: &str) -> Result<AuthenticatedUser, AppError> {
        let key = session_key()?;
        verify_with(token, key, SESSION_ISSUER.as_deref(), SessionConfig::leeway_seconds())
    }
}

/// 설정된 세션 검증 키. `main`은 시작할 때 호출해 설정 누락을 바로 드러냅니다.
pub fn session_key() -> Result<&'static SessionKey, AppError> {
    Lazy::force(&SESSION_KEY).as_ref().map_err(Clone::clone)
}

/// 주어진 키로 세션 토큰을 검증합니다.
pub fn verify_with(
    token: &str,
    key: &SessionKey,
    issuer: Option<&str>,
    leeway_seconds: u64,
) -> Result<AuthenticatedUser, AppError> {
    let (decoding_key, algorithm) = match key {
        SessionKey::Secret(secret) => (DecodingKey::from_secret(secret.as_bytes()), Algorithm::HS256),
        SessionKey::RsaPublicPem(pem) => (
            DecodingKey::from_rsa_pem(pem.as_bytes())
                .map_err(|e| AppError::InternalError(format!("세션 공개키 해석 실패: {}", e)))?,
            Algorithm::RS256,
        ),
    };

    let mut validation = Validation::new(algorithm);
    validation.leeway = leeway_seconds;
    validation.validate_aud = false;
    if let Some(issuer) = issuer {
        validation.set_issuer(&[issuer]);
    }

    let claims = decode::<SessionClaims>(token, &decoding_key, &validation)
        .map(|token_data| token_data.claims)
        .map_err(|e| match e.kind() {
            ErrorKind::ExpiredSignature => {
                AppError::AuthenticationError("세션이 만료되었습니다".to_string())
            }
            ErrorKind::InvalidIssuer => {
                AppError::AuthenticationError("세션 발급자가 올바르지 않습니다".to_string())
            }
            _ => {
                log::debug!("세션 토큰 검증 실패: {}", e);
                AppError::AuthenticationError("유효하지 않은 세션 토큰입니다".to_string())
            }
        })?;

    AuthenticatedUser::try_from(claims)
}

/// `"Bearer {token}"`에서 토큰 부분을 꺼냅니다. 스킴 이름은 대소문자를 구분하지 않습니다.
pub fn extract_bearer_token(auth_header: &str) -> Result<&str, AppError> {
    let header = auth_header.trim();
    let (scheme, token) = header
        .split_once(' ')
        .ok_or_else(|| AppError::AuthenticationError("Bearer 토큰 형식이 아닙니다".to_string()))?;

    let token = token.trim();
    if !scheme.eq_ignore_ascii_case("bearer") || token.is_empty() {
        return Err(AppError::AuthenticationError("Bearer 토큰 형식이 아닙니다".to_string()));
    }
    Ok(token)
}
