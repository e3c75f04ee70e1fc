use std::future::{ready, Ready};
use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use serde::{Deserialize, Serialize};
use crate::core::errors::AppError;

/// 인증 제공자가 발급한 세션 토큰의 클레임
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    /// 제공자 측 사용자 ID
    pub sub: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iss: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
    pub exp: i64,
}

/// 검증된 세션의 사용자 정보
///
/// 프로필은 이메일로 식별되므로 `email` 클레임이 없는 토큰은 인증 실패로 처리합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    pub user_id: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl TryFrom<SessionClaims> for AuthenticatedUser {
    type Error = AppError;

    fn try_from(claims: SessionClaims) -> Result<Self, Self::Error> {
        let email = claims
            .email
            .map(|email| email.trim().to_lowercase())
            .filter(|email| !email.is_empty())
            .ok_or_else(|| AppError::AuthenticationError("세션 토큰에 이메일 정보가 없습니다".to_string()))?;

        Ok(Self {
            user_id: claims.sub,
            email,
            name: claims.name.filter(|name| !name.trim().is_empty()),
        })
    }
}

/// 요청의 세션 상태
///
/// 전역 상태를 조회하는 대신 핸들러 인자로 명시적으로 전달됩니다.
/// 핸들러는 `require_user()`로 사용자를 꺼내며, 세션 미들웨어 밖에서 호출되면 401이 됩니다.
/// `SessionMiddleware`가 토큰을 검증해 `AuthenticatedUser`를 request extensions에 넣고,
/// 이 추출기가 그것을 읽습니다.
#[derive(Debug, Clone, PartialEq)]
pub enum Session {
    Authenticated(AuthenticatedUser),
    Anonymous,
}

impl Session {
    pub fn user(&self) -> Option<&AuthenticatedUser> {
        match self {
            Session::Authenticated(user) => Some(user),
            Session::Anonymous => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated(_))
    }

    /// 인증된 사용자를 요구합니다. 익명이면 401 에러입니다.
    pub fn require_user(&self) -> Result<&AuthenticatedUser, AppError> {
        self.user()
            .ok_or_else(|| AppError::AuthenticationError("로그인이 필요합니다".to_string()))
    }
}

impl FromRequest for Session {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        let session = match req.extensions().get::<AuthenticatedUser>() {
            Some(user) => Session::Authenticated(user.clone()),
            None => Session::Anonymous,
        };
        ready(Ok(session))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims(email: Option<&str>) -> SessionClaims {
        SessionClaims {
            sub: "user_2abc".to_string(),
            email: email.map(str::to_string),
            name: Some("Asha".to_string()),
            iss: None,
            iat: None,
            exp: 4_102_444_800,
        }
    }

    #[test]
    fn test_claims_to_user_normalizes_email() {
        let user = AuthenticatedUser::try_from(claims(Some(" Asha@Example.com "))).unwrap();

        assert_eq!(user.user_id, "user_2abc");
        assert_eq!(user.email, "asha@example.com");
        assert_eq!(user.name.as_deref(), Some("Asha"));
    }

    #[test]
    fn test_claims_without_email_are_rejected() {
        assert!(matches!(
            AuthenticatedUser::try_from(claims(None)),
            Err(AppError::AuthenticationError(_))
        ));
        assert!(AuthenticatedUser::try_from(claims(Some("  "))).is_err());
    }

    #[test]
    fn test_session_require_user() {
        let user = AuthenticatedUser::try_from(claims(Some("asha@example.com"))).unwrap();

        assert!(Session::Authenticated(user).require_user().is_ok());
        assert!(Session::Anonymous.require_user().is_err());
        assert!(!Session::Anonymous.is_authenticated());
    }

    #[actix_web::test]
    async fn test_session_extractor_reads_extensions() {
        let req = actix_web::test::TestRequest::default().to_http_request();
        let anonymous = Session::extract(&req).await.unwrap();
        assert_eq!(anonymous, Session::Anonymous);

        let user = AuthenticatedUser::try_from(claims(Some("asha@example.com"))).unwrap();
        req.extensions_mut().insert(user.clone());

        let session = Session::extract(&req).await.unwrap();
        assert_eq!(session, Session::Authenticated(user));
    }
}
