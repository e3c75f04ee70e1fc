//! 세션 토큰 검증 설정
//!
//! 로그인과 회원가입은 외부 인증 제공자가 처리합니다.
//! 이 서비스는 제공자가 발급한 JWT 세션 토큰의 서명만 검증하므로
//! 검증 키와 발급자 정보만 필요합니다.
//!
//! # Environment Variables
//!
//! * `SESSION_JWT_PUBLIC_KEY` - RS256 공개키 (PEM). 설정되면 우선 사용
//! * `SESSION_JWT_SECRET` - HS256 공유 비밀키
//!
//! 두 키가 모두 없으면 개발과 테스트 환경에서만 고정된 개발용 비밀키로 대신하고,
//! 그 밖의 환경(스테이징, 운영, `ENVIRONMENT` 미설정)에서는 서버가 시작되지 않습니다.
//! * `SESSION_JWT_ISSUER` - 설정 시 `iss` 클레임을 검증
//! * `SESSION_LEEWAY_SECONDS` - 만료 시각 허용 오차 (기본 30초)

use std::env;
use crate::core::errors::AppError;
use super::data_config::Environment;

/// 개발/테스트 전용 HS256 비밀키
const DEV_SESSION_SECRET: &str = "campus-connect-dev-session-secret";

/// 세션 토큰 서명 검증 방식
#[derive(Debug, Clone, PartialEq)]
pub enum SessionKey {
    /// HS256 공유 비밀키
    Secret(String),
    /// RS256 PEM 공개키
    RsaPublicPem(String),
}

pub struct SessionConfig;

impl SessionConfig {
    /// 환경변수에서 검증 키를 읽습니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 개발/테스트가 아닌 환경에서 키가 하나도 설정되지 않음
    pub fn key() -> Result<SessionKey, AppError> {
        Self::resolve_key(
            &Environment::current(),
            env::var("SESSION_JWT_PUBLIC_KEY").ok(),
            env::var("SESSION_JWT_SECRET").ok(),
        )
    }

    /// PEM 공개키, 공유 비밀키 순으로 고릅니다. 공백뿐인 값은 없는 것으로 봅니다.
    pub fn resolve_key(
        environment: &Environment,
        public_pem: Option<String>,
        secret: Option<String>,
    ) -> Result<SessionKey, AppError> {
        if let Some(pem) = public_pem.filter(|pem| !pem.trim().is_empty()) {
            // .env 파일에서는 줄바꿈을 \n 으로 적는 경우가 많음
            return Ok(SessionKey::RsaPublicPem(pem.replace("\\n", "\n")));
        }

        if let Some(secret) = secret.filter(|secret| !secret.trim().is_empty()) {
            return Ok(SessionKey::Secret(secret));
        }

        if !environment.is_local() {
            return Err(AppError::InternalError(
                "SESSION_JWT_PUBLIC_KEY 또는 SESSION_JWT_SECRET이 설정되지 않았습니다".to_string(),
            ));
        }

        log::warn!("SESSION_JWT_SECRET not set, using development secret ({:?})", environment);
        Ok(SessionKey::Secret(DEV_SESSION_SECRET.to_string()))
    }

    pub fn issuer() -> Option<String> {
        env::var("SESSION_JWT_ISSUER")
            .ok()
            .filter(|issuer| !issuer.trim().is_empty())
    }

    pub fn leeway_seconds() -> u64 {
        env::var("SESSION_LEEWAY_SECONDS")
            .unwrap_or_else(|_| "30".to_string())
            .parse()
            .unwrap_or(30)
    }
}
