//! 지도 장소 그룹핑과 조회

pub mod location_grouper;
pub mod place_service;

pub use location_grouper::{group_by_location, LocationGrouper};
pub use place_service::{build_places, collect_members, invalidate_dashboard, load_dashboard, PlaceService};
