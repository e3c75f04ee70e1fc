//! # 원격 프로필 API 리포지토리
//!
//! 사용자 프로필의 영구 저장은 외부 REST API가 담당합니다.
//! 이 리포지토리는 그 API에 대한 타입 있는 `reqwest` 클라이언트입니다.
//!
//! | 메서드 | 원격 엔드포인트 | 응답 |
//! |--------|-----------------|------|
//! | `list_dashboard_users` | `GET /user/dashboard` | 사용자 문서 배열 (또는 `{ "users": [...] }`) |
//! | `find_by_email` | `GET /user/profile?email=` | `{ "user": {...} }` |
//! | `update_profile` | `PUT /user/update` | 임의의 JSON |
//!
//! 네트워크 실패, 2xx가 아닌 응답, 파싱 실패는 모두
//! `AppError::ExternalServiceError`(502)로 변환됩니다.
//! 대시보드 목록은 항목 단위로 해석하므로 문서 하나가 이상해도 목록 전체가 실패하지 않습니다.

use std::time::Duration;
use async_trait::async_trait;
use serde::Deserialize;
use crate::config::ProfileApiConfig;
use crate::core::errors::{AppError, ErrorContext};
use crate::domain::dto::users::ProfileUpdatePayload;
use crate::domain::entities::users::{DashboardUsers, RawUserDocument};
use super::profile_store::ProfileStore;

/// `GET /user/profile` 응답
#[derive(Debug, Deserialize)]
struct ProfileEnvelope {
    #[serde(default)]
    user: Option<RawUserDocument>,
}

/// 원격 프로필 API 클라이언트
///
/// `main`에서 한 번 생성되어 `ServiceLocator::set`으로 등록되고,
/// 서비스들은 `Arc<ProfileRepository>` 필드로 주입받습니다.
#[derive(Debug, Clone)]
pub struct ProfileRepository {
    client: reqwest::Client,
    base_url: String,
}

impl ProfileRepository {
    /// `PROFILE_API_URL`, `PROFILE_API_TIMEOUT_SECONDS` 설정으로 생성합니다.
    pub fn new() -> Result<Self, AppError> {
        Self::with_base_url(
            ProfileApiConfig::base_url(),
            Duration::from_secs(ProfileApiConfig::timeout_seconds()),
        )
    }

    pub fn with_base_url(base_url: impl Into<String>, timeout: Duration) -> Result<Self, AppError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("HTTP 클라이언트 생성 실패")?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn dashboard_url(&self) -> String {
        format!("{}/user/dashboard", self.base_url)
    }

    fn profile_url(&self, email: &str) -> String {
        format!("{}/user/profile?email={}", self.base_url, urlencoding::encode(email))
    }

    fn update_url(&self) -> String {
        format!("{}/user/update", self.base_url)
    }
}

#[async_trait]
impl ProfileStore for ProfileRepository {
    /// 대시보드에 표시할 전체 사용자 문서를 가져옵니다.
    async fn list_dashboard_users(&self) -> Result<DashboardUsers, AppError> {
        let response = self
            .client
            .get(self.dashboard_url())
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("대시보드 사용자 요청 실패: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalServiceError(format!(
                "대시보드 사용자 조회 실패 ({}): {}", status, error_text
            )));
        }

        let payload = response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("대시보드 응답 파싱 실패: {}", e)))?;

        let users = DashboardUsers::from_payload(payload).ok_or_else(|| {
            AppError::ExternalServiceError("대시보드 응답에 사용자 목록이 없습니다".to_string())
        })?;

        if users.malformed > 0 {
            log::warn!("대시보드 항목 {}건 중 {}건을 해석하지 못함", users.len(), users.malformed);
        }
        log::debug!("대시보드 사용자 {}명 수신", users.documents.len());
        Ok(users)
    }

    /// 이메일로 프로필을 조회합니다.
    ///
    /// 원격 API가 404를 주거나 `user`가 비어 있으면 `Ok(None)`입니다.
    async fn find_by_email(&self, email: &str) -> Result<Option<RawUserDocument>, AppError> {
        let response = self
            .client
            .get(self.profile_url(email))
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("프로필 요청 실패: {}", e)))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalServiceError(format!(
                "프로필 조회 실패 ({}): {}", status, error_text
            )));
        }

        let envelope = response
            .json::<ProfileEnvelope>()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("프로필 응답 파싱 실패: {}", e)))?;

        Ok(envelope.user)
    }

    /// 프로필을 저장합니다. 원격 API의 응답 본문은 사용하지 않습니다.
    async fn update_profile(&self, payload: &ProfileUpdatePayload) -> Result<(), AppError> {
        let response = self
            .client
            .put(self.update_url())
            .json(payload)
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("프로필 업데이트 요청 실패: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalServiceError(format!(
                "프로필 업데이트 실패 ({}): {}", status, error_text
            )));
        }

        log::info!("프로필 업데이트 완료: {}", payload.email);
        Ok(())
    }
}
