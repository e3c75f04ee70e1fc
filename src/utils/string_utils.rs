//! 문자열 정규화 유틸리티
//!
//! 원격 프로필 API의 문서는 필드가 비어 있거나, 공백만 있거나,
//! 숫자로 저장된 경우(`"batch": 2021`)가 섞여 있습니다.
//! 경계에서 이런 값을 `Option<String>`으로 정규화합니다.

use serde::Deserialize;

/// 위치 라벨에 사용할 값이 전혀 없을 때의 표시 문자열
pub const UNKNOWN_LOCATION: &str = "Unknown location";

pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

pub fn is_valid_string(value: &str) -> bool {
    !value.trim().is_empty()
}

/// 문자열, 숫자, 불리언을 모두 받아 공백 제거된 `Option<String>`으로 역직렬화합니다.
///
/// 객체나 배열처럼 표시할 수 없는 값은 `None`이 됩니다.
pub fn deserialize_lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;

    let text = match value {
        Some(serde_json::Value::String(s)) => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        Some(serde_json::Value::Bool(b)) => Some(b.to_string()),
        _ => None,
    };

    Ok(clean_optional_string(text))
}

/// 지도 팝업에 표시할 위치 라벨을 만듭니다.
///
/// `"{area}, {city}"`, 한쪽만 있으면 그 값, 둘 다 없으면 [`UNKNOWN_LOCATION`].
pub fn location_label(area: Option<&str>, city: Option<&str>) -> String {
    let parts: Vec<&str> = [area, city]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect();

    if parts.is_empty() {
        UNKNOWN_LOCATION.to_string()
    } else {
        parts.join(", ")
    }
}

/// 지오코딩 검색어를 만듭니다. (`"Koramangala Bengaluru"`)
///
/// 연속 공백은 하나로 합칩니다.
pub fn geocode_query(area: &str, city: &str) -> String {
    format!("{} {}", area, city)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
