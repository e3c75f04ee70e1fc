use std::collections::BTreeMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use thiserror::Error;
use crate::utils::string_utils::{clean_optional_string, deserialize_lenient_string, location_label};

/// 지도와 디렉터리에 노출되는 프로필 보조 속성
///
/// 그룹핑 로직은 `Area`/`City`를 라벨에만 사용하고 나머지 값은 해석하지 않습니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileAttribute {
    Company,
    Role,
    College,
    Batch,
    Contact,
    City,
    Area,
}

impl ProfileAttribute {
    pub const ALL: [ProfileAttribute; 7] = [
        ProfileAttribute::Company,
        ProfileAttribute::Role,
        ProfileAttribute::College,
        ProfileAttribute::Batch,
        ProfileAttribute::Contact,
        ProfileAttribute::City,
        ProfileAttribute::Area,
    ];

    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.trim().to_lowercase().as_str() {
            "company" => Ok(ProfileAttribute::Company),
            "role" => Ok(ProfileAttribute::Role),
            "college" => Ok(ProfileAttribute::College),
            "batch" => Ok(ProfileAttribute::Batch),
            "contact" => Ok(ProfileAttribute::Contact),
            "city" => Ok(ProfileAttribute::City),
            "area" => Ok(ProfileAttribute::Area),
            _ => Err(format!("Unsupported profile attribute: {}", s)),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ProfileAttribute::Company => "company",
            ProfileAttribute::Role => "role",
            ProfileAttribute::College => "college",
            ProfileAttribute::Batch => "batch",
            ProfileAttribute::Contact => "contact",
            ProfileAttribute::City => "city",
            ProfileAttribute::Area => "area",
        }
    }
}

/// 원격 문서의 좌표 값
///
/// 지오코딩 API가 좌표를 문자열(`"12.9716"`)로 돌려주고 프로필 API가 그대로 저장하므로
/// 숫자와 문자열을 모두 받습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Coordinate {
    Number(f64),
    Text(String),
}

impl Coordinate {
    /// 유한한 `f64`로 해석합니다. 파싱 실패, NaN, 무한대는 `None`입니다.
    pub fn to_f64(&self) -> Option<f64> {
        let value = match self {
            Coordinate::Number(n) => *n,
            Coordinate::Text(s) => s.trim().parse::<f64>().ok()?,
        };

        value.is_finite().then_some(value)
    }

    fn from_json(value: Value) -> Option<Self> {
        match value {
            Value::Number(n) => n.as_f64().map(Coordinate::Number),
            Value::String(s) => Some(Coordinate::Text(s)),
            // 확장 JSON 숫자 ({"$numberDouble": "12.9"})
            Value::Object(map) => ["$numberDouble", "$numberDecimal", "$numberInt", "$numberLong"]
                .iter()
                .find_map(|tag| match map.get(*tag) {
                    Some(Value::String(s)) => Some(Coordinate::Text(s.clone())),
                    Some(Value::Number(n)) => n.as_f64().map(Coordinate::Number),
                    _ => None,
                }),
            _ => None,
        }
    }
}

/// 좌표를 관대하게 역직렬화합니다. 해석할 수 없는 형태는 실패 대신 `None`이 됩니다.
pub fn deserialize_lenient_coordinate<'de, D>(deserializer: D) -> Result<Option<Coordinate>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(Coordinate::from_json))
}

/// 원격 문서의 `_id`. 문자열, 숫자, 확장 JSON(`{"$oid": "..."}`) 형태를 받습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DocumentId {
    Plain(String),
    Object {
        #[serde(rename = "$oid")]
        oid: String,
    },
}

impl DocumentId {
    pub fn as_str(&self) -> &str {
        match self {
            DocumentId::Plain(id) => id,
            DocumentId::Object { oid } => oid,
        }
    }

    fn from_json(value: Value) -> Option<Self> {
        match value {
            Value::String(id) => Some(DocumentId::Plain(id)),
            Value::Number(n) => Some(DocumentId::Plain(n.to_string())),
            Value::Object(map) => match map.get("$oid") {
                Some(Value::String(oid)) => Some(DocumentId::Object { oid: oid.clone() }),
                _ => None,
            },
            _ => None,
        }
    }
}

/// `_id`를 관대하게 역직렬화합니다. 숫자 id는 문자열로 바꾸고, 그 밖의 형태는 `None`입니다.
pub fn deserialize_lenient_document_id<'de, D>(deserializer: D) -> Result<Option<DocumentId>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(DocumentId::from_json))
}

/// 원격 프로필 API가 돌려주는 사용자 문서 (와이어 형태)
///
/// 모든 필드가 선택적이고, 필드 하나의 형태가 이상해도 문서 전체의 역직렬화는 실패하지 않습니다.
/// 그룹핑에 넘기기 전에 반드시 `UserRecord::try_from`으로 정규화해야 합니다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawUserDocument {
    #[serde(
        rename = "_id",
        default,
        deserialize_with = "deserialize_lenient_document_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<DocumentId>,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub company: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub role: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub college: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub batch: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub contact: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub city: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub area: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_coordinate")]
    pub lat: Option<Coordinate>,
    #[serde(default, deserialize_with = "deserialize_lenient_coordinate")]
    pub lon: Option<Coordinate>,
}

impl RawUserDocument {
    pub fn attribute(&self, attribute: ProfileAttribute) -> Option<&str> {
        let value = match attribute {
            ProfileAttribute::Company => &self.company,
            ProfileAttribute::Role => &self.role,
            ProfileAttribute::College => &self.college,
            ProfileAttribute::Batch => &self.batch,
            ProfileAttribute::Contact => &self.contact,
            ProfileAttribute::City => &self.city,
            ProfileAttribute::Area => &self.area,
        };
        value.as_deref()
    }

    /// 문서 식별자. `_id`가 없으면 이메일을 사용합니다.
    pub fn identifier(&self) -> Option<String> {
        self.id
            .as_ref()
            .map(|id| id.as_str().to_string())
            .and_then(|id| clean_optional_string(Some(id)))
            .or_else(|| self.email.clone())
    }
}

/// 문서를 `UserRecord`로 만들 수 없는 이유
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecordRejection {
    #[error("document has neither _id nor email")]
    MissingId,

    #[error("document {0} has no name")]
    MissingName(String),

    #[error("document {0} has missing or invalid coordinates")]
    MissingCoordinates(String),
}

/// 정규화된 사용자 레코드
///
/// 필수 필드(`id`, `name`, 유한한 좌표)가 보장됩니다.
/// 생성 이후에는 읽기 전용으로만 다룹니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub attributes: BTreeMap<ProfileAttribute, String>,
}

impl UserRecord {
    pub fn new(id: impl Into<String>, name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            latitude,
            longitude,
            attributes: BTreeMap::new(),
        }
    }

    /// 속성을 추가한 레코드를 돌려줍니다. 공백뿐인 값은 무시됩니다.
    pub fn with_attribute(mut self, attribute: ProfileAttribute, value: impl Into<String>) -> Self {
        if let Some(value) = clean_optional_string(Some(value.into())) {
            self.attributes.insert(attribute, value);
        }
        self
    }

    pub fn attribute(&self, attribute: ProfileAttribute) -> Option<&str> {
        self.attributes.get(&attribute).map(String::as_str)
    }

    /// `"{area}, {city}"` 형태의 위치 라벨
    pub fn location_label(&self) -> String {
        location_label(
            self.attribute(ProfileAttribute::Area),
            self.attribute(ProfileAttribute::City),
        )
    }
}

impl TryFrom<RawUserDocument> for UserRecord {
    type Error = RecordRejection;

    fn try_from(document: RawUserDocument) -> Result<Self, Self::Error> {
        let id = document.identifier().ok_or(RecordRejection::MissingId)?;

        let name = document
            .name
            .clone()
            .ok_or_else(|| RecordRejection::MissingName(id.clone()))?;

        let latitude = document.lat.as_ref().and_then(Coordinate::to_f64);
        let longitude = document.lon.as_ref().and_then(Coordinate::to_f64);
        let (Some(latitude), Some(longitude)) = (latitude, longitude) else {
            return Err(RecordRejection::MissingCoordinates(id));
        };

        let attributes = ProfileAttribute::ALL
            .into_iter()
            .filter_map(|attribute| {
                document
                    .attribute(attribute)
                    .map(|value| (attribute, value.to_string()))
            })
            .collect();

        Ok(Self {
            id,
            name,
            latitude,
            longitude,
            attributes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn document(value: serde_json::Value) -> RawUserDocument {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_profile_attribute_from_str() {
        assert_eq!(ProfileAttribute::from_str("batch").unwrap(), ProfileAttribute::Batch);
        assert_eq!(ProfileAttribute::from_str(" Company ").unwrap(), ProfileAttribute::Company);
        assert!(ProfileAttribute::from_str("email").is_err());

        for attribute in ProfileAttribute::ALL {
            assert_eq!(ProfileAttribute::from_str(attribute.as_str()).unwrap(), attribute);
        }
    }

    #[test]
    fn test_coordinate_accepts_numbers_and_strings() {
        assert_eq!(Coordinate::Number(12.9).to_f64(), Some(12.9));
        assert_eq!(Coordinate::Text(" 77.6 ".to_string()).to_f64(), Some(77.6));
        assert_eq!(Coordinate::Text("north".to_string()).to_f64(), None);
        assert_eq!(Coordinate::Text("NaN".to_string()).to_f64(), None);
        assert_eq!(Coordinate::Number(f64::INFINITY).to_f64(), None);
    }

    #[test]
    fn test_full_document_converts() {
        let raw = document(json!({
            "_id": "65a1",
            "name": "Asha",
            "email": "asha@example.com",
            "company": "Acme",
            "batch": 2019,
            "city": "Bengaluru",
            "area": "Koramangala",
            "lat": "12.9",
            "lon": 77.6
        }));

        let record = UserRecord::try_from(raw).unwrap();

        assert_eq!(record.id, "65a1");
        assert_eq!(record.name, "Asha");
        assert_eq!(record.latitude, 12.9);
        assert_eq!(record.longitude, 77.6);
        assert_eq!(record.attribute(ProfileAttribute::Batch), Some("2019"));
        assert_eq!(record.attribute(ProfileAttribute::Role), None);
        assert_eq!(record.location_label(), "Koramangala, Bengaluru");
    }

    #[test]
    fn test_object_id_and_email_fallback() {
        let with_oid = document(json!({"_id": {"$oid": "abc"}, "name": "Ravi", "lat": 1, "lon": 2}));
        let with_email = document(json!({"email": "meera@example.com", "name": "Meera", "lat": 1, "lon": 2}));

        assert_eq!(UserRecord::try_from(with_oid).unwrap().id, "abc");
        assert_eq!(UserRecord::try_from(with_email).unwrap().id, "meera@example.com");
    }

    #[test]
    fn test_rejections() {
        let no_id = document(json!({"name": "Ghost", "lat": 1, "lon": 2}));
        let no_name = document(json!({"_id": "1", "name": "  ", "lat": 1, "lon": 2}));
        let no_lat = document(json!({"_id": "2", "name": "Nomad", "lon": 2}));
        let bad_lon = document(json!({"_id": "3", "name": "Lost", "lat": 1, "lon": "n/a"}));

        assert_eq!(UserRecord::try_from(no_id), Err(RecordRejection::MissingId));
        assert_eq!(
            UserRecord::try_from(no_name),
            Err(RecordRejection::MissingName("1".to_string()))
        );
        assert_eq!(
            UserRecord::try_from(no_lat),
            Err(RecordRejection::MissingCoordinates("2".to_string()))
        );
        assert_eq!(
            UserRecord::try_from(bad_lon),
            Err(RecordRejection::MissingCoordinates("3".to_string()))
        );
    }

    #[test]
    fn test_odd_field_shapes_do_not_fail_the_document() {
        let numeric_id = document(json!({"_id": 42, "name": "Ravi", "lat": 12.9, "lon": 77.6}));
        let extended_double = document(json!({
            "_id": "7",
            "name": "Meera",
            "lat": {"$numberDouble": "28.6"},
            "lon": {"$numberInt": "77"}
        }));
        let object_lat = document(json!({"_id": "8", "name": "Kiran", "lat": {"deg": 12}, "lon": 77.6}));
        let bool_lon = document(json!({"_id": "9", "name": "Dev", "lat": 12.9, "lon": true}));
        let array_id = document(json!({"_id": [1], "email": "anu@example.com", "name": "Anu", "lat": 1, "lon": 2}));

        let ravi = UserRecord::try_from(numeric_id).unwrap();
        assert_eq!(ravi.id, "42");

        let meera = UserRecord::try_from(extended_double).unwrap();
        assert_eq!((meera.latitude, meera.longitude), (28.6, 77.0));

        assert_eq!(
            UserRecord::try_from(object_lat),
            Err(RecordRejection::MissingCoordinates("8".to_string()))
        );
        assert_eq!(
            UserRecord::try_from(bool_lon),
            Err(RecordRejection::MissingCoordinates("9".to_string()))
        );
        assert_eq!(UserRecord::try_from(array_id).unwrap().id, "anu@example.com");
    }

    #[test]
    fn test_cached_document_reads_back() {
        let original = document(json!({"_id": {"$oid": "abc"}, "name": "Asha", "lat": "12.9", "lon": 77.6}));

        let cached = serde_json::to_value(&original).unwrap();

        assert_eq!(document(cached), original);
    }

    #[test]
    fn test_with_attribute_ignores_blank_values() {
        let record = UserRecord::new("1", "Asha", 1.0, 1.0)
            .with_attribute(ProfileAttribute::Company, "Acme")
            .with_attribute(ProfileAttribute::Role, "   ");

        assert_eq!(record.attribute(ProfileAttribute::Company), Some("Acme"));
        assert_eq!(record.attribute(ProfileAttribute::Role), None);
    }
}
