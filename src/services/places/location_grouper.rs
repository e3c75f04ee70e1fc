//! # 위치 그룹핑
//!
//! 사용자 레코드를 그룹핑 키별로 묶어 지도 마커(`PlaceEntry`) 목록을 만듭니다.
//!
//! ```text
//! [Asha@(12.9,77.6), Ravi@(12.9,77.6), Meera@(28.6,77.2)]
//!        │
//!        ▼  key_fn (기본: "{lat},{lon}")
//! ["12.9,77.6" → {Asha, Ravi}, "28.6,77.2" → {Meera}]
//! ```
//!
//! - 장소 순서는 각 키가 입력에서 처음 나타난 순서입니다.
//! - 장소 안의 멤버 순서도 입력 순서를 따릅니다.
//! - 좌표와 라벨은 그 키를 처음 가진 레코드에서 가져옵니다.
//! - 키 비교는 문자열 동등성이며 허용 오차가 없습니다.
//!
//! 그룹핑 자체는 I/O가 없는 동기 함수이므로 어느 스레드에서나 호출할 수 있습니다.

use std::collections::HashMap;
use crate::domain::entities::users::{DashboardUsers, UserRecord};
use crate::domain::models::places::{GroupingOutcome, GroupingStrategy, MemberProjection, PlaceEntry};

/// 레코드를 `key_fn`이 돌려주는 키로 묶습니다.
///
/// 한 번의 순회로 처리하며, 키 → 결과 인덱스 맵으로 첫 등장 순서를 유지합니다.
/// 모든 입력 레코드는 정확히 하나의 장소에 멤버로 들어갑니다.
pub fn group_by_location<M, K, P>(records: &[UserRecord], key_fn: K, projection_fn: P) -> Vec<PlaceEntry<M>>
where
    K: Fn(&UserRecord) -> String,
    P: Fn(&UserRecord) -> M,
{
    let mut places: Vec<PlaceEntry<M>> = Vec::new();
    let mut index_by_key: HashMap<String, usize> = HashMap::new();

    for record in records {
        let key = key_fn(record);
        let member = projection_fn(record);

        match index_by_key.get(&key) {
            Some(&index) => places[index].members.push(member),
            None => {
                index_by_key.insert(key.clone(), places.len());
                places.push(PlaceEntry {
                    key,
                    latitude: record.latitude,
                    longitude: record.longitude,
                    label: record.location_label(),
                    members: vec![member],
                });
            }
        }
    }

    places
}

/// 그룹핑 기준과 멤버 투영을 묶은 설정
///
/// ```rust,ignore
/// let grouper = LocationGrouper::new(GroupingStrategy::Coordinates, MemberProjection::name_and_batch());
/// let outcome = grouper.group_documents(dashboard_users);
/// let collection = FeatureCollection::from(&outcome);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocationGrouper {
    strategy: GroupingStrategy,
    projection: MemberProjection,
}

impl LocationGrouper {
    pub fn new(strategy: GroupingStrategy, projection: MemberProjection) -> Self {
        Self { strategy, projection }
    }

    pub fn strategy(&self) -> GroupingStrategy {
        self.strategy
    }

    pub fn projection(&self) -> &MemberProjection {
        &self.projection
    }

    pub fn group(&self, records: &[UserRecord]) -> Vec<PlaceEntry> {
        group_by_location(
            records,
            |record| self.strategy.key_for(record),
            |record| self.projection.project(record),
        )
    }

    /// 원격 문서를 정규화한 뒤 그룹핑합니다.
    ///
    /// 문서로 해석되지 않은 항목과 id, 이름, 유효한 좌표가 없는 문서는 제외하고 `skipped`로 셉니다.
    pub fn group_documents(&self, users: DashboardUsers) -> GroupingOutcome {
        let total = users.len();
        let mut records = Vec::with_capacity(users.documents.len());
        let mut skipped = users.malformed;

        for document in users.documents {
            match UserRecord::try_from(document) {
                Ok(record) => records.push(record),
                Err(rejection) => {
                    log::debug!("지도에서 제외된 문서: {}", rejection);
                    skipped += 1;
                }
            }
        }

        if skipped > 0 {
            log::warn!("📍 사용자 문서 {}건 중 {}건이 좌표 또는 필수 필드 누락으로 제외됨", total, skipped);
        }

        let places = self.group(&records);
        log::debug!(
            "📍 {}명을 {}개 장소로 그룹핑 (기준: {})",
            records.len(),
            places.len(),
            self.strategy.as_str()
        );

        GroupingOutcome { places, skipped }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use crate::domain::entities::users::ProfileAttribute;
    use crate::domain::models::places::{coordinate_key, MemberSummary};

    fn record(id: &str, name: &str, latitude: f64, longitude: f64) -> UserRecord {
        UserRecord::new(id, name, latitude, longitude)
    }

    fn in_city(record: UserRecord, city: &str) -> UserRecord {
        record.with_attribute(ProfileAttribute::City, city)
    }

    fn names(place: &PlaceEntry) -> Vec<&str> {
        place.members.iter().map(|member| member.name.as_str()).collect()
    }

    fn by_coordinates() -> LocationGrouper {
        LocationGrouper::new(GroupingStrategy::Coordinates, MemberProjection::name_only())
    }

    #[test]
    fn test_scenario_two_cities() {
        let records = vec![
            in_city(record("1", "Asha", 12.9, 77.6), "Bengaluru"),
            in_city(record("2", "Ravi", 12.9, 77.6), "Bengaluru"),
            in_city(record("3", "Meera", 28.6, 77.2), "Delhi"),
        ];

        let places = by_coordinates().group(&records);

        assert_eq!(places.len(), 2);
        assert_eq!(places[0].key, "12.9,77.6");
        assert_eq!(places[0].label, "Bengaluru");
        assert_eq!(places[0].members, vec![MemberSummary::named("Asha"), MemberSummary::named("Ravi")]);
        assert_eq!(places[1].key, "28.6,77.2");
        assert_eq!(places[1].label, "Delhi");
        assert_eq!(places[1].members, vec![MemberSummary::named("Meera")]);
    }

    #[test]
    fn test_order_follows_first_appearance() {
        let records = vec![
            record("a", "A", 1.0, 1.0),
            record("b", "B", 2.0, 2.0),
            record("c", "C", 1.0, 1.0),
        ];

        let places = by_coordinates().group(&records);

        assert_eq!(places.len(), 2);
        assert_eq!(places[0].key, coordinate_key(1.0, 1.0));
        assert_eq!(names(&places[0]), vec!["A", "C"]);
        assert_eq!(places[1].key, coordinate_key(2.0, 2.0));
        assert_eq!(names(&places[1]), vec!["B"]);
    }

    #[test]
    fn test_nearby_coordinates_are_not_merged() {
        let records = vec![record("a", "A", 1.0, 1.0), record("b", "B", 1.0000001, 1.0)];

        let places = by_coordinates().group(&records);

        assert_eq!(places.len(), 2);
        assert!(places.iter().all(|place| place.members.len() == 1));
    }

    #[test]
    fn test_empty_and_single() {
        assert!(by_coordinates().group(&[]).is_empty());

        let places = by_coordinates().group(&[record("a", "A", 10.0, 20.0)]);
        assert_eq!(places.len(), 1);
        assert_eq!(places[0].latitude, 10.0);
        assert_eq!(places[0].longitude, 20.0);
        assert_eq!(names(&places[0]), vec!["A"]);
    }

    #[test]
    fn test_every_record_lands_in_exactly_one_place() {
        let records: Vec<UserRecord> = (0..50)
            .map(|i| record(&i.to_string(), &format!("user{}", i), (i % 7) as f64, (i % 3) as f64))
            .collect();

        let places = by_coordinates().group(&records);

        let member_count: usize = places.iter().map(|place| place.members.len()).sum();
        assert_eq!(member_count, records.len());

        let mut keys: Vec<&str> = places.iter().map(|place| place.key.as_str()).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), places.len());

        for place in &places {
            assert!(!place.members.is_empty());
            for member in &place.members {
                let source = records.iter().find(|r| r.name == member.name).unwrap();
                assert_eq!(coordinate_key(source.latitude, source.longitude), place.key);
            }
        }
    }

    #[test]
    fn test_grouping_is_deterministic() {
        let records = vec![
            in_city(record("1", "Asha", 12.9, 77.6), "Bengaluru"),
            record("2", "Ravi", 28.6, 77.2),
            in_city(record("3", "Meera", 12.9, 77.6), "Bengaluru"),
        ];
        let grouper = LocationGrouper::new(GroupingStrategy::Coordinates, MemberProjection::name_and_batch());

        assert_eq!(grouper.group(&records), grouper.group(&records));
    }

    #[test]
    fn test_place_takes_coordinates_and_label_from_first_member() {
        let records = vec![
            record("1", "Asha", 12.9, 77.6)
                .with_attribute(ProfileAttribute::Area, "Koramangala")
                .with_attribute(ProfileAttribute::City, "Bengaluru"),
            record("2", "Ravi", 12.95, 77.64)
                .with_attribute(ProfileAttribute::Area, "Koramangala")
                .with_attribute(ProfileAttribute::City, "Bengaluru"),
        ];
        let grouper = LocationGrouper::new(GroupingStrategy::AreaCity, MemberProjection::name_and_company());

        let places = grouper.group(&records);

        assert_eq!(places.len(), 1);
        assert_eq!(places[0].key, "Koramangala, Bengaluru");
        assert_eq!(places[0].label, "Koramangala, Bengaluru");
        assert_eq!((places[0].latitude, places[0].longitude), (12.9, 77.6));
        assert_eq!(names(&places[0]), vec!["Asha", "Ravi"]);
    }

    #[test]
    fn test_unknown_location_label() {
        let places = by_coordinates().group(&[record("1", "Asha", 0.0, 0.0)]);

        assert_eq!(places[0].label, "Unknown location");
    }

    #[test]
    fn test_custom_key_and_member_functions() {
        let records = vec![
            record("1", "Asha", 12.91, 77.61),
            record("2", "Ravi", 12.94, 77.58),
            record("3", "Meera", 28.6, 77.2),
        ];

        let places = group_by_location(
            &records,
            |r| format!("{:.1},{:.1}", r.latitude, r.longitude),
            |r| r.id.clone(),
        );

        assert_eq!(places.len(), 2);
        assert_eq!(places[0].members, vec!["1".to_string(), "2".to_string()]);
        assert_eq!(places[1].members, vec!["3".to_string()]);
    }

    #[test]
    fn test_group_documents_counts_skipped() {
        let documents = DashboardUsers::from_payload(json!([
            { "_id": "1", "name": "Asha", "lat": 12.9, "lon": 77.6, "city": "Bengaluru", "batch": 2019 },
            { "_id": "2", "name": "NoCoords", "city": "Pune" },
            { "_id": "3", "name": "BadCoords", "lat": "north", "lon": "77.6" },
            { "_id": "4", "lat": 1.0, "lon": 1.0 },
            { "_id": "5", "name": "Ravi", "lat": "12.9", "lon": "77.6", "city": "Bengaluru", "batch": "2020" }
        ]))
        .unwrap();
        let grouper = LocationGrouper::new(GroupingStrategy::Coordinates, MemberProjection::name_and_batch());

        let outcome = grouper.group_documents(documents);

        assert_eq!(outcome.skipped, 3);
        assert_eq!(outcome.places.len(), 1);
        assert_eq!(outcome.member_count(), 2);
        assert_eq!(
            outcome.places[0].members,
            vec![
                MemberSummary::named("Asha").with(ProfileAttribute::Batch, "2019"),
                MemberSummary::named("Ravi").with(ProfileAttribute::Batch, "2020"),
            ]
        );
    }

    #[test]
    fn test_bad_documents_among_good_ones_are_skipped() {
        let users = DashboardUsers::from_payload(json!([
            { "_id": "1", "name": "Asha", "lat": 12.9, "lon": 77.6 },
            { "_id": 42, "name": "Ravi", "lat": 12.9, "lon": 77.6 },
            { "_id": "3", "name": "Meera", "lat": {"$numberDouble": "28.6"}, "lon": "77.2" },
            { "_id": "4", "name": "Kiran", "lat": {"deg": 12}, "lon": 77.6 },
            { "_id": "5", "name": "Dev", "lat": false, "lon": 77.6 },
            ["not", "a", "document"]
        ]))
        .unwrap();

        let outcome = by_coordinates().group_documents(users);

        assert_eq!(outcome.skipped, 3);
        assert_eq!(outcome.places.len(), 2);
        assert_eq!(names(&outcome.places[0]), vec!["Asha", "Ravi"]);
        assert_eq!(names(&outcome.places[1]), vec!["Meera"]);
        assert_eq!(outcome.member_count() + outcome.skipped, 6);
    }
}
