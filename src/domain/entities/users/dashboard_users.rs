use serde::{Deserialize, Serialize};
use serde_json::Value;
use super::user_record::RawUserDocument;

/// `GET /user/dashboard` 응답을 문서 단위로 해석한 결과
///
/// 원격 API는 배열을 그대로 주거나 `{ "users": [...] }`로 감싸서 줍니다.
/// 항목 하나가 사용자 문서로 해석되지 않아도 나머지는 그대로 살리고,
/// 버린 항목 수를 `malformed`에 셉니다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardUsers {
    pub documents: Vec<RawUserDocument>,
    #[serde(default)]
    pub malformed: usize,
}

impl DashboardUsers {
    pub fn new(documents: Vec<RawUserDocument>) -> Self {
        Self { documents, malformed: 0 }
    }

    /// 응답 본문을 해석합니다. 목록 자체를 찾을 수 없으면 `None`입니다.
    pub fn from_payload(payload: Value) -> Option<Self> {
        let items = match payload {
            Value::Array(items) => items,
            Value::Object(mut map) => match map.remove("users") {
                Some(Value::Array(items)) => items,
                _ => return None,
            },
            _ => return None,
        };

        let mut documents = Vec::with_capacity(items.len());
        let mut malformed = 0;

        for item in items {
            match serde_json::from_value::<RawUserDocument>(item) {
                Ok(document) => documents.push(document),
                Err(e) => {
                    log::debug!("해석할 수 없는 대시보드 항목: {}", e);
                    malformed += 1;
                }
            }
        }

        Some(Self { documents, malformed })
    }

    pub fn len(&self) -> usize {
        self.documents.len() + self.malformed
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_list_and_wrapped_shapes() {
        let list = DashboardUsers::from_payload(json!([
            { "_id": "1", "name": "Asha" },
            { "_id": "2", "name": "Ravi" }
        ]))
        .unwrap();
        assert_eq!(list.documents.len(), 2);
        assert_eq!(list.malformed, 0);

        let wrapped = DashboardUsers::from_payload(json!({
            "users": [{ "_id": "1", "name": "Asha" }]
        }))
        .unwrap();
        assert_eq!(wrapped.documents.len(), 1);
    }

    #[test]
    fn test_unrecognized_payload() {
        assert!(DashboardUsers::from_payload(json!({ "error": "down" })).is_none());
        assert!(DashboardUsers::from_payload(json!("nope")).is_none());
        assert!(DashboardUsers::from_payload(json!({ "users": 3 })).is_none());
    }

    #[test]
    fn test_one_bad_document_does_not_drop_the_list() {
        let users = DashboardUsers::from_payload(json!([
            { "_id": "1", "name": "Asha", "lat": 12.9, "lon": 77.6 },
            { "_id": 42, "name": "Ravi", "lat": 12.9, "lon": 77.6 },
            { "_id": "3", "name": "Meera", "lat": {"$numberDouble": "12.9"}, "lon": 77.6 },
            "not a document",
            null,
            { "_id": "4", "name": { "first": "Kiran" }, "lat": true, "lon": [77.6] }
        ]))
        .unwrap();

        assert_eq!(users.documents.len(), 4);
        assert_eq!(users.malformed, 2);
        assert_eq!(users.len(), 6);
        assert_eq!(users.documents[1].identifier().as_deref(), Some("42"));
        assert_eq!(users.documents[3].name, None);
    }
}
