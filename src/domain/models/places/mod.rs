//! # Places
//!
//! 지도에 표시되는 장소(마커)와 그룹핑 설정을 정의합니다.
//!
//! - [`grouping`]: 그룹핑 기준(`GroupingStrategy`)과 좌표 키
//! - [`projection`]: 멤버 요약에 남길 속성(`MemberProjection`)
//! - [`place_entry`]: 그룹핑 결과(`PlaceEntry`, `GroupingOutcome`)
//! - [`geojson`]: 지도 라이브러리용 FeatureCollection

pub mod grouping;
pub mod projection;
pub mod place_entry;
pub mod geojson;

pub use grouping::{coordinate_key, GroupingStrategy};
pub use projection::{MemberProjection, MemberSummary};
pub use place_entry::{GroupingOutcome, PlaceEntry};
pub use geojson::FeatureCollection;
