use serde::{Deserialize, Serialize};
use crate::domain::entities::users::UserRecord;

/// 장소 그룹핑 기준
///
/// * `Coordinates` - 위도/경도가 정확히 같은 사용자끼리 묶습니다. (허용 오차 없음)
/// * `AreaCity` - `"{area}, {city}"` 라벨이 같은 사용자끼리 묶고,
///   좌표는 그 키를 처음 가진 사용자에게서 가져옵니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupingStrategy {
    #[default]
    Coordinates,
    AreaCity,
}

impl GroupingStrategy {
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.trim().to_lowercase().as_str() {
            "coordinates" | "coords" => Ok(GroupingStrategy::Coordinates),
            "area" | "area_city" | "area-city" => Ok(GroupingStrategy::AreaCity),
            _ => Err(format!("Unsupported grouping strategy: {}", s)),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GroupingStrategy::Coordinates => "coordinates",
            GroupingStrategy::AreaCity => "area_city",
        }
    }

    /// 레코드의 그룹핑 키를 계산합니다.
    pub fn key_for(&self, record: &UserRecord) -> String {
        match self {
            GroupingStrategy::Coordinates => coordinate_key(record.latitude, record.longitude),
            GroupingStrategy::AreaCity => record.location_label(),
        }
    }
}

/// `"{latitude},{longitude}"` 좌표 키를 만듭니다.
///
/// 각 값은 왕복 가능한 가장 짧은 10진 표기로 출력되므로 (`12.9` → `"12.9"`, `77.0` → `"77"`)
/// 두 키가 같다는 것은 두 좌표가 `==`로 같다는 것과 동치입니다.
/// 이를 위해 `-0.0`은 `0.0`으로 바꿔 출력합니다.
pub fn coordinate_key(latitude: f64, longitude: f64) -> String {
    format!("{},{}", without_negative_zero(latitude), without_negative_zero(longitude))
}

fn without_negative_zero(value: f64) -> f64 {
    if value == 0.0 { 0.0 } else { value }
}
