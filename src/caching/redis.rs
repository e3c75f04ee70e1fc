//! # Redis 캐시 클라이언트
//!
//! 외부 API 응답(대시보드 사용자 목록, 지오코딩 결과)을 JSON으로 캐싱합니다.
//! 캐시는 보조 수단이므로 호출부는 실패를 로그로만 남기고 원본 API로 진행합니다.
//!
//! 연결은 `ConnectionManager` 하나를 복제해 사용합니다.
//! 멀티플렉싱된 단일 연결이며 끊기면 자동으로 재연결합니다.

use redis::AsyncCommands;
use redis::aio::ConnectionManager;
use serde::{Serialize, de::DeserializeOwned};
use crate::config::CacheConfig;

fn serialization_error(message: &'static str, error: serde_json::Error) -> redis::RedisError {
    redis::RedisError::from((redis::ErrorKind::TypeError, message, error.to_string()))
}

/// Redis 캐시 클라이언트 래퍼
///
/// ```rust,ignore
/// let cache = RedisClient::new().await?;
/// cache.set_with_expiry("geocode:ab12", &point, 86_400).await?;
/// let cached: Option<GeoPoint> = cache.get("geocode:ab12").await?;
/// ```
#[derive(Clone)]
pub struct RedisClient {
    manager: ConnectionManager,
}

impl RedisClient {
    /// `REDIS_URL`로 연결하고 PING으로 가용성을 확인합니다.
    pub async fn new() -> Result<Self, redis::RedisError> {
        let client = redis::Client::open(CacheConfig::redis_url())?;
        let mut manager = ConnectionManager::new(client).await?;

        redis::cmd("PING").query_async::<()>(&mut manager).await?;
        log::info!("✅ Redis 연결 성공");

        Ok(Self { manager })
    }

    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, redis::RedisError> {
        let mut conn = self.manager.clone();
        let value: Option<String> = conn.get(key).await?;

        value
            .map(|json| serde_json::from_str(&json).map_err(|e| serialization_error("Deserialization failed", e)))
            .transpose()
    }

    pub async fn set_with_expiry<T: Serialize>(&self, key: &str, value: &T, seconds: u64) -> Result<(), redis::RedisError> {
        let json = serde_json::to_string(value).map_err(|e| serialization_error("Serialization failed", e))?;

        let mut conn = self.manager.clone();
        conn.set_ex(key, json, seconds).await
    }

    pub async fn del(&self, key: &str) -> Result<(), redis::RedisError> {
        let mut conn = self.manager.clone();
        conn.del(key).await
    }
}
