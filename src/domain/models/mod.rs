//! # Domain Models
//!
//! - [`places`]: 지도 장소, 그룹핑 설정, GeoJSON
//! - [`session`]: 세션 토큰 클레임과 요청 세션 상태

pub mod places;
pub mod session;
