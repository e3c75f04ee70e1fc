//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! `#[service]` 매크로로 선언된 싱글톤 서비스들입니다.
//! `Arc<T>` 필드는 `ServiceLocator`가 자동으로 주입합니다.
//! 캐시, 원격 API, 지오코딩을 거치는 흐름은 `DashboardCache` / `ProfileStore` / `Geocoder`
//! 트레이트에만 의존하는 함수로 두고, 서비스는 주입받은 구현을 넘겨 호출합니다.
//!
//! - [`places`]: 사용자 위치 그룹핑과 지도 데이터 (`PlaceService`)
//! - [`profiles`]: 내 프로필 조회/수정 (`ProfileService`)
//! - [`geocoding`]: 지역명 → 좌표 변환 (`GeocodingService`)
//! - [`session`]: 세션 토큰 검증 (`SessionService`)
//!
//! ```rust,ignore
//! use crate::services::places::PlaceService;
//!
//! let collection = PlaceService::instance().get_places(strategy, projection).await?;
//! ```

pub mod places;
pub mod profiles;
pub mod geocoding;
pub mod session;

#[cfg(test)]
pub(crate) mod fakes;
