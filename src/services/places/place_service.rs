//! # 장소 서비스
//!
//! 대시보드 사용자 목록을 가져와 지도용 GeoJSON과 디렉터리 목록을 만듭니다.
//!
//! ```text
//! DashboardCache ("dashboard:users") ──miss──► ProfileStore::list_dashboard_users
//!                 │
//!                 ▼
//! LocationGrouper::group_documents ──► FeatureCollection
//! ```
//!
//! 원격 API 실패는 그룹핑 전에 `AppError::ExternalServiceError`(502)로 끝납니다.
//! 캐시 실패는 로그만 남기고 원격 API로 진행합니다.

use std::sync::Arc;
use singleton_macro::service;
use crate::caching::DashboardCache;
use crate::caching::redis::RedisClient;
use crate::core::errors::AppError;
use crate::domain::dto::users::UserSummary;
use crate::domain::entities::users::DashboardUsers;
use crate::domain::models::places::{FeatureCollection, GroupingStrategy, MemberProjection};
use crate::repositories::profiles::{ProfileRepository, ProfileStore};
use super::location_grouper::LocationGrouper;

#[service(name = "place")]
pub struct PlaceService {
    redis: Arc<RedisClient>,
    profile_repo: Arc<ProfileRepository>,
}

impl PlaceService {
    /// 지도에 표시할 장소 목록을 GeoJSON FeatureCollection으로 돌려줍니다.
    ///
    /// ```rust,ignore
    /// let collection = PlaceService::instance()
    ///     .get_places(GroupingStrategy::Coordinates, MemberProjection::name_and_batch())
    ///     .await?;
    /// ```
    pub async fn get_places(
        &self,
        strategy: GroupingStrategy,
        projection: MemberProjection,
    ) -> Result<FeatureCollection, AppError> {
        let grouper = LocationGrouper::new(strategy, projection);
        build_places(self.redis.as_ref(), self.profile_repo.as_ref(), &grouper).await
    }

    /// 대시보드 사이드바의 사용자 디렉터리. 이름이 없는 문서는 제외됩니다.
    pub async fn list_members(&self) -> Result<Vec<UserSummary>, AppError> {
        collect_members(self.redis.as_ref(), self.profile_repo.as_ref()).await
    }
}

/// 캐시된 목록이 있으면 그대로 쓰고, 없으면 원격 API에서 가져와 캐시에 넣습니다.
pub async fn load_dashboard(
    cache: &dyn DashboardCache,
    store: &dyn ProfileStore,
) -> Result<DashboardUsers, AppError> {
    match cache.load().await {
        Ok(Some(users)) => {
            log::debug!("대시보드 캐시 적중: {}건", users.documents.len());
            return Ok(users);
        }
        Ok(None) => {}
        Err(e) => log::warn!("대시보드 캐시 조회 실패 (무시): {}", e),
    }

    let users = store.list_dashboard_users().await?;

    if let Err(e) = cache.store(&users).await {
        log::warn!("대시보드 캐시 저장 실패 (무시): {}", e);
    }

    Ok(users)
}

pub async fn build_places(
    cache: &dyn DashboardCache,
    store: &dyn ProfileStore,
    grouper: &LocationGrouper,
) -> Result<FeatureCollection, AppError> {
    let users = load_dashboard(cache, store).await?;

    let outcome = grouper.group_documents(users);
    log::info!(
        "🗺️ 장소 {}개, 사용자 {}명 (제외 {}건)",
        outcome.places.len(),
        outcome.member_count(),
        outcome.skipped
    );

    Ok(FeatureCollection::from(&outcome))
}

pub async fn collect_members(
    cache: &dyn DashboardCache,
    store: &dyn ProfileStore,
) -> Result<Vec<UserSummary>, AppError> {
    let users = load_dashboard(cache, store).await?;

    Ok(users.documents.iter().filter_map(UserSummary::from_document).collect())
}

/// 프로필이 바뀌었을 때 캐시된 사용자 목록을 버립니다.
pub async fn invalidate_dashboard(cache: &dyn DashboardCache) {
    if let Err(e) = cache.invalidate().await {
        log::warn!("대시보드 캐시 삭제 실패 (무시): {}", e);
    }
}
