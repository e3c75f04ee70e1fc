//! 외부 API 및 지도 설정
//!
//! 프로필 저장소(원격 REST API)와 지오코딩 API의 주소, 지도 그룹핑 기본값을 제공합니다.

use std::env;
use crate::domain::models::places::GroupingStrategy;

/// 원격 프로필 API 설정
///
/// 사용자 프로필의 저장과 조회는 이 API가 담당합니다.
/// 이 서비스는 `/user/dashboard`, `/user/profile`, `/user/update` 만 호출합니다.
pub struct ProfileApiConfig;

impl ProfileApiConfig {
    pub fn base_url() -> String {
        env::var("PROFILE_API_URL")
            .unwrap_or_else(|_| "https://server-campus-connections.onrender.com".to_string())
            .trim_end_matches('/')
            .to_string()
    }

    /// 업스트림 요청 타임아웃 (초, 기본 10)
    pub fn timeout_seconds() -> u64 {
        env::var("PROFILE_API_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10)
    }
}

/// 지오코딩 API 설정 (geocode.maps.co 호환 `/search` 엔드포인트)
pub struct GeocodingConfig;

impl GeocodingConfig {
    pub fn base_url() -> String {
        env::var("GEOCODING_API_URL")
            .unwrap_or_else(|_| "https://geocode.maps.co".to_string())
            .trim_end_matches('/')
            .to_string()
    }

    pub fn api_key() -> String {
        env::var("GEOCODING_API_KEY").unwrap_or_else(|_| {
            log::warn!("GEOCODING_API_KEY not set, geocoding requests will likely be rejected");
            String::new()
        })
    }
}

/// 지도 그룹핑 기본값
pub struct MapConfig;

impl MapConfig {
    /// 요청에 `group_by`가 없을 때 사용할 그룹핑 기준 (`MAP_GROUPING_STRATEGY`, 기본 `coordinates`)
    pub fn default_strategy() -> GroupingStrategy {
        env::var("MAP_GROUPING_STRATEGY")
            .ok()
            .and_then(|value| GroupingStrategy::from_str(&value).ok())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_api_default_has_no_trailing_slash() {
        if env::var("PROFILE_API_URL").is_err() {
            assert!(!ProfileApiConfig::base_url().ends_with('/'));
        }
    }

    #[test]
    fn test_map_default_strategy_is_coordinates() {
        if env::var("MAP_GROUPING_STRATEGY").is_err() {
            assert_eq!(MapConfig::default_strategy(), GroupingStrategy::Coordinates);
        }
    }
}
