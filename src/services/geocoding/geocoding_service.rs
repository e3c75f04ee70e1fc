//! # 지오코딩 서비스
//!
//! `"{area} {city}"` 검색어를 위도/경도로 변환합니다.
//! geocode.maps.co 호환 API의 `/search` 엔드포인트를 사용하며,
//! 응답은 좌표가 문자열로 들어 있는 후보 배열입니다.
//!
//! ```json
//! [{ "lat": "12.9352", "lon": "77.6245", "display_name": "Koramangala, Bengaluru, ..." }]
//! ```
//!
//! 같은 지역을 반복해서 조회하지 않도록 결과를 Redis에 캐싱합니다.
//! 캐시 키는 `geocode:{소문자 검색어의 SHA-256}` 입니다.

use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use singleton_macro::service;
use crate::caching::redis::RedisClient;
use crate::config::{CacheConfig, GeocodingConfig};
use crate::core::errors::AppError;
use crate::domain::entities::users::user_record::{deserialize_lenient_coordinate, Coordinate};
use crate::utils::string_utils::{geocode_query, is_valid_string};

/// 지오코딩 결과 좌표
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Deserialize)]
struct GeocodeHit {
    #[serde(default, deserialize_with = "deserialize_lenient_coordinate")]
    lat: Option<Coordinate>,
    #[serde(default, deserialize_with = "deserialize_lenient_coordinate")]
    lon: Option<Coordinate>,
}

/// 지역/도시 → 좌표 변환
#[async_trait]
pub trait Geocoder: Send + Sync {
    /// # Returns
    ///
    /// * `Ok(Some(GeoPoint))` - 첫 번째 유효한 후보의 좌표
    /// * `Ok(None)` - 검색 결과가 없음
    /// * `Err(AppError::ExternalServiceError)` - API 호출 또는 응답 파싱 실패
    async fn geocode(&self, area: &str, city: &str) -> Result<Option<GeoPoint>, AppError>;
}

#[service(name = "geocoding")]
pub struct GeocodingService {
    redis: Arc<RedisClient>,
}

#[async_trait]
impl Geocoder for GeocodingService {
    async fn geocode(&self, area: &str, city: &str) -> Result<Option<GeoPoint>, AppError> {
        let query = geocode_query(area, city);
        if !is_valid_string(&query) {
            return Ok(None);
        }

        let cache_key = cache_key(&query);
        match self.redis.get::<GeoPoint>(&cache_key).await {
            Ok(Some(point)) => {
                log::debug!("📍 지오코딩 캐시 적중: {}", query);
                return Ok(Some(point));
            }
            Ok(None) => {}
            Err(e) => log::warn!("지오코딩 캐시 조회 실패 (무시): {}", e),
        }

        let point = self.search(&query).await?;

        if let Some(point) = &point {
            if let Err(e) = self
                .redis
                .set_with_expiry(&cache_key, point, CacheConfig::geocode_ttl_seconds())
                .await
            {
                log::warn!("지오코딩 캐시 저장 실패 (무시): {}", e);
            }
        }

        Ok(point)
    }
}

impl GeocodingService {
    async fn search(&self, query: &str) -> Result<Option<GeoPoint>, AppError> {
        let client = reqwest::Client::new();
        let url = format!("{}/search", GeocodingConfig::base_url());
        let api_key = GeocodingConfig::api_key();

        let response = client
            .get(&url)
            .query(&[("q", query), ("api_key", api_key.as_str())])
            .send()
            .await
            .map_err(|e| {
                log::warn!("📍 지오코딩 API 연결 실패: {}", e);
                AppError::ExternalServiceError(format!("지오코딩 요청 실패: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            log::warn!("📍 지오코딩 API 비정상 응답: {}", status);
            return Err(AppError::ExternalServiceError(format!("지오코딩 실패: {}", status)));
        }

        let hits = response
            .json::<Vec<GeocodeHit>>()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("지오코딩 응답 파싱 실패: {}", e)))?;

        let point = first_point(&hits);
        if point.is_none() {
            log::info!("📍 지오코딩 결과 없음: {}", query);
        }
        Ok(point)
    }
}

/// 좌표가 모두 해석되는 첫 번째 후보를 고릅니다.
fn first_point(hits: &[GeocodeHit]) -> Option<GeoPoint> {
    hits.iter().find_map(|hit| {
        let latitude = hit.lat.as_ref().and_then(Coordinate::to_f64)?;
        let longitude = hit.lon.as_ref().and_then(Coordinate::to_f64)?;
        Some(GeoPoint { latitude, longitude })
    })
}

fn cache_key(query: &str) -> String {
    let digest = Sha256::digest(query.to_lowercase().as_bytes());
    format!("geocode:{:x}", digest)
}
