use serde::{Deserialize, Serialize};
use super::projection::MemberSummary;

/// 지도 마커 하나에 해당하는 장소
///
/// 같은 그룹핑 키를 가진 사용자들을 모읍니다.
/// 좌표와 라벨은 그 키를 처음 가진 사용자에게서 가져오고,
/// `members`는 입력에서 처음 만난 순서를 유지합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceEntry<M = MemberSummary> {
    pub key: String,
    pub latitude: f64,
    pub longitude: f64,
    pub label: String,
    pub members: Vec<M>,
}

/// 경계 정규화와 그룹핑을 거친 결과
///
/// `skipped`는 id, 이름, 좌표가 없어 지도에서 제외된 문서 수입니다.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GroupingOutcome {
    pub places: Vec<PlaceEntry>,
    pub skipped: usize,
}

impl GroupingOutcome {
    pub fn member_count(&self) -> usize {
        self.places.iter().map(|place| place.members.len()).sum()
    }
}
