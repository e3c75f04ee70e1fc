use serde::Deserialize;
use crate::core::errors::AppError;
use crate::domain::models::places::{GroupingStrategy, MemberProjection};

/// `GET /api/v1/places` 쿼리 파라미터
///
/// - `group_by`: `coordinates`(기본값, `MAP_GROUPING_STRATEGY`로 변경 가능) 또는 `area`
/// - `members`: 멤버 요약에 포함할 속성 목록 (`batch,company`). 생략하면 `batch`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlacesQuery {
    pub group_by: Option<String>,
    pub members: Option<String>,
}

impl PlacesQuery {
    /// 쿼리를 그룹핑 기준으로 해석합니다. 없으면 `default`를 사용합니다.
    pub fn strategy(&self, default: GroupingStrategy) -> Result<GroupingStrategy, AppError> {
        match self.group_by.as_deref().filter(|raw| !raw.trim().is_empty()) {
            Some(raw) => GroupingStrategy::from_str(raw).map_err(AppError::ValidationError),
            None => Ok(default),
        }
    }

    pub fn projection(&self) -> Result<MemberProjection, AppError> {
        match self.members.as_deref() {
            Some(raw) => MemberProjection::parse(raw).map_err(AppError::ValidationError),
            None => Ok(MemberProjection::name_and_batch()),
        }
    }
}
