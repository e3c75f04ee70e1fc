//! # 프로필 서비스
//!
//! 로그인한 사용자의 프로필 조회와 수정을 담당합니다.
//! 요청의 공백 제거와 validator 검증은 핸들러가 끝낸 상태로 들어옵니다.
//!
//! 수정 흐름:
//!
//! ```text
//! UpdateProfileRequest (검증됨)
//!   │ 1. "{area} {city}" 지오코딩              결과 없음 → 400, API 실패 → 502
//!   │ 2. PUT /user/update                      실패 → 502
//!   │ 3. 대시보드 캐시 무효화
//!   ▼
//! ProfileResponse (원격 API에서 다시 조회)
//! ```

use std::sync::Arc;
use singleton_macro::service;
use crate::caching::DashboardCache;
use crate::caching::redis::RedisClient;
use crate::core::errors::AppError;
use crate::domain::dto::users::{ProfileResponse, ProfileUpdatePayload, UpdateProfileRequest};
use crate::repositories::profiles::{ProfileRepository, ProfileStore};
use crate::services::geocoding::{Geocoder, GeocodingService};
use crate::services::places::invalidate_dashboard;

#[service(name = "profile")]
pub struct ProfileService {
    redis: Arc<RedisClient>,
    profile_repo: Arc<ProfileRepository>,
    geocoding_service: Arc<GeocodingService>,
}

impl ProfileService {
    /// 이메일로 프로필을 조회합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 원격 API에 프로필이 없음
    /// * `AppError::ExternalServiceError` - 원격 API 호출 실패
    pub async fn get_profile(&self, email: &str) -> Result<ProfileResponse, AppError> {
        fetch_profile(self.profile_repo.as_ref(), email).await
    }

    pub async fn update_profile(
        &self,
        email: &str,
        request: UpdateProfileRequest,
    ) -> Result<ProfileResponse, AppError> {
        apply_profile_update(
            self.profile_repo.as_ref(),
            self.geocoding_service.as_ref(),
            self.redis.as_ref(),
            email,
            request,
        )
        .await
    }
}

pub async fn fetch_profile(store: &dyn ProfileStore, email: &str) -> Result<ProfileResponse, AppError> {
    store
        .find_by_email(email)
        .await?
        .map(ProfileResponse::from)
        .ok_or_else(|| AppError::NotFound(format!("프로필을 찾을 수 없습니다: {}", email)))
}

/// 지오코딩한 좌표와 함께 프로필을 저장하고, 저장된 프로필을 다시 읽어 돌려줍니다.
///
/// 지오코딩 결과가 없으면 아무것도 저장하지 않고 `ValidationError`(400)입니다.
pub async fn apply_profile_update(
    store: &dyn ProfileStore,
    geocoder: &dyn Geocoder,
    cache: &dyn DashboardCache,
    email: &str,
    request: UpdateProfileRequest,
) -> Result<ProfileResponse, AppError> {
    let point = geocoder
        .geocode(&request.area, &request.city)
        .await?
        .ok_or_else(|| {
            AppError::ValidationError(format!(
                "Could not find location: {}, {}",
                request.area, request.city
            ))
        })?;

    let payload = ProfileUpdatePayload::new(email, request, point.latitude, point.longitude);
    store.update_profile(&payload).await?;

    invalidate_dashboard(cache).await;

    fetch_profile(store, email).await
}
