//! 지도 라이브러리가 소비하는 GeoJSON FeatureCollection
//!
//! ```json
//! {
//!   "type": "FeatureCollection",
//!   "features": [{
//!     "type": "Feature",
//!     "geometry": { "type": "Point", "coordinates": [77.6, 12.9] },
//!     "properties": { "id": "12.9,77.6", "location": "Bengaluru", "users": [{ "name": "Asha" }] }
//!   }],
//!   "skipped": 0
//! }
//! ```
//!
//! GeoJSON 좌표 순서는 `[경도, 위도]`입니다.

use serde::Serialize;
use super::place_entry::{GroupingOutcome, PlaceEntry};
use super::projection::MemberSummary;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PointGeometry {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub coordinates: [f64; 2],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaceProperties {
    pub id: String,
    pub location: String,
    pub users: Vec<MemberSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Feature {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub geometry: PointGeometry,
    pub properties: PlaceProperties,
}

impl From<&PlaceEntry> for Feature {
    fn from(place: &PlaceEntry) -> Self {
        Self {
            kind: "Feature",
            geometry: PointGeometry {
                kind: "Point",
                coordinates: [place.longitude, place.latitude],
            },
            properties: PlaceProperties {
                id: place.key.clone(),
                location: place.label.clone(),
                users: place.members.clone(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureCollection {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub features: Vec<Feature>,
    /// GeoJSON foreign member: 좌표가 없어 제외된 문서 수
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skipped: Option<usize>,
}

impl FeatureCollection {
    pub fn from_places(places: &[PlaceEntry]) -> Self {
        Self {
            kind: "FeatureCollection",
            features: places.iter().map(Feature::from).collect(),
            skipped: None,
        }
    }
}

impl From<&GroupingOutcome> for FeatureCollection {
    fn from(outcome: &GroupingOutcome) -> Self {
        Self {
            skipped: Some(outcome.skipped),
            ..Self::from_places(&outcome.places)
        }
    }
}
