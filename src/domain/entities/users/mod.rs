//! Users Entity Module
//!
//! 원격 프로필 API의 사용자 문서와, 경계에서 정규화된 사용자 레코드를 정의합니다.
//!
//! ```text
//! DashboardUsers::from_payload (항목 단위 해석, 실패 항목은 malformed)
//!        │
//!        ▼
//! RawUserDocument (JSON, 모든 필드 선택적)
//!        │  UserRecord::try_from
//!        ▼
//! UserRecord (id, name, 유한한 좌표 보장)  ──▶  LocationGrouper
//! ```
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::users::{RawUserDocument, UserRecord};
//!
//! let raw: RawUserDocument = serde_json::from_str(body)?;
//! match UserRecord::try_from(raw) {
//!     Ok(record) => records.push(record),
//!     Err(rejection) => log::debug!("skipping document: {}", rejection),
//! }
//! ```

pub mod dashboard_users;
pub mod user_record;

pub use dashboard_users::DashboardUsers;
pub use user_record::{Coordinate, DocumentId, ProfileAttribute, RawUserDocument, RecordRejection, UserRecord};
