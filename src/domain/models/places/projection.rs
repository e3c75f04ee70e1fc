use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};
use crate::domain::entities::users::{ProfileAttribute, UserRecord};

/// 장소 팝업에 표시되는 사용자 요약
///
/// 평평한 JSON 객체로 직렬화됩니다. (`{"name": "Asha", "batch": "2019"}`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberSummary {
    pub name: String,
    #[serde(flatten)]
    pub attributes: BTreeMap<ProfileAttribute, String>,
}

impl MemberSummary {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: BTreeMap::new(),
        }
    }

    pub fn with(mut self, attribute: ProfileAttribute, value: impl Into<String>) -> Self {
        self.attributes.insert(attribute, value.into());
        self
    }
}

/// 멤버 요약에 남길 속성 목록
///
/// `name`은 항상 포함되며, 사용자에게 없는 속성은 빈 문자열 대신 생략됩니다.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MemberProjection {
    attributes: Vec<ProfileAttribute>,
}

impl MemberProjection {
    /// 중복을 제거하고 입력 순서를 유지합니다.
    pub fn new(attributes: Vec<ProfileAttribute>) -> Self {
        let mut unique = Vec::with_capacity(attributes.len());
        for attribute in attributes {
            if !unique.contains(&attribute) {
                unique.push(attribute);
            }
        }
        Self { attributes: unique }
    }

    pub fn name_only() -> Self {
        Self::default()
    }

    pub fn name_and_batch() -> Self {
        Self::new(vec![ProfileAttribute::Batch])
    }

    pub fn name_and_company() -> Self {
        Self::new(vec![ProfileAttribute::Company])
    }

    /// 쉼표로 구분된 속성 이름을 해석합니다. (`"batch,company"`)
    ///
    /// 빈 문자열과 `name`은 무시되므로 `"name"`은 `name_only()`와 같습니다.
    pub fn parse(raw: &str) -> Result<Self, String> {
        let attributes = raw
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty() && !part.eq_ignore_ascii_case("name"))
            .map(ProfileAttribute::from_str)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::new(attributes))
    }

    pub fn attributes(&self) -> &[ProfileAttribute] {
        &self.attributes
    }

    pub fn project(&self, record: &UserRecord) -> MemberSummary {
        let attributes = self
            .attributes
            .iter()
            .filter_map(|&attribute| {
                record
                    .attribute(attribute)
                    .map(|value| (attribute, value.to_string()))
            })
            .collect();

        MemberSummary {
            name: record.name.clone(),
            attributes,
        }
    }
}
