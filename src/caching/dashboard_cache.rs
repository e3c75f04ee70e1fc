use async_trait::async_trait;
use crate::config::CacheConfig;
use crate::domain::entities::users::DashboardUsers;
use super::redis::RedisClient;

/// 대시보드 사용자 목록 캐시 키
pub const DASHBOARD_CACHE_KEY: &str = "dashboard:users";

/// 대시보드 사용자 목록 캐시
///
/// 실패는 호출부가 로그로만 남기고 무시합니다.
#[async_trait]
pub trait DashboardCache: Send + Sync {
    async fn load(&self) -> Result<Option<DashboardUsers>, redis::RedisError>;

    async fn store(&self, users: &DashboardUsers) -> Result<(), redis::RedisError>;

    async fn invalidate(&self) -> Result<(), redis::RedisError>;
}

#[async_trait]
impl DashboardCache for RedisClient {
    async fn load(&self) -> Result<Option<DashboardUsers>, redis::RedisError> {
        self.get(DASHBOARD_CACHE_KEY).await
    }

    async fn store(&self, users: &DashboardUsers) -> Result<(), redis::RedisError> {
        self.set_with_expiry(DASHBOARD_CACHE_KEY, users, CacheConfig::dashboard_ttl_seconds())
            .await
    }

    async fn invalidate(&self) -> Result<(), redis::RedisError> {
        self.del(DASHBOARD_CACHE_KEY).await
    }
}
