//! 사용자 프로필 응답 DTO
//!
//! 원격 API의 문서(`RawUserDocument`)를 클라이언트용 형태로 바꿉니다.
//! 좌표가 없는 프로필(온보딩 전)도 조회할 수 있어야 하므로
//! `UserRecord`가 아닌 원본 문서에서 변환합니다.

use serde::{Deserialize, Serialize};
use crate::domain::entities::users::{Coordinate, ProfileAttribute, RawUserDocument};
use crate::domain::models::session::AuthenticatedUser;

/// 내 프로필 응답
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub email: Option<String>,
    pub name: Option<String>,
    pub company: Option<String>,
    pub role: Option<String>,
    pub college: Option<String>,
    pub batch: Option<String>,
    pub contact: Option<String>,
    pub area: Option<String>,
    pub city: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,

    /// 지도에 표시되기 위한 필드가 모두 채워졌는지 여부
    ///
    /// 클라이언트는 `false`이면 온보딩 폼으로 보냅니다.
    pub is_complete: bool,
}

impl From<RawUserDocument> for ProfileResponse {
    fn from(document: RawUserDocument) -> Self {
        let latitude = document.lat.as_ref().and_then(Coordinate::to_f64);
        let longitude = document.lon.as_ref().and_then(Coordinate::to_f64);

        let is_complete = latitude.is_some()
            && longitude.is_some()
            && ProfileAttribute::ALL
                .into_iter()
                .all(|attribute| document.attribute(attribute).is_some());

        let RawUserDocument {
            name,
            email,
            company,
            role,
            college,
            batch,
            contact,
            city,
            area,
            ..
        } = document;

        Self {
            email,
            name,
            company,
            role,
            college,
            batch,
            contact,
            area,
            city,
            latitude,
            longitude,
            is_complete,
        }
    }
}

/// 대시보드 디렉터리 목록의 한 항목
///
/// 로그인한 회원에게만 보여지며, 지도 팝업(`?members=contact`)과 같은 기준으로 연락처를 포함합니다.
/// 좌표는 포함하지 않습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub college: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub batch: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
}

impl UserSummary {
    /// 식별자나 이름이 없는 문서는 목록에 올리지 않습니다.
    pub fn from_document(document: &RawUserDocument) -> Option<Self> {
        let owned = |attribute| document.attribute(attribute).map(str::to_string);

        Some(Self {
            id: document.identifier()?,
            name: document.name.clone()?,
            company: owned(ProfileAttribute::Company),
            role: owned(ProfileAttribute::Role),
            college: owned(ProfileAttribute::College),
            batch: owned(ProfileAttribute::Batch),
            contact: owned(ProfileAttribute::Contact),
            area: owned(ProfileAttribute::Area),
            city: owned(ProfileAttribute::City),
        })
    }
}

/// `GET /api/v1/me` 응답
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeResponse {
    pub user_id: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl From<AuthenticatedUser> for MeResponse {
    fn from(user: AuthenticatedUser) -> Self {
        let AuthenticatedUser { user_id, email, name } = user;
        Self { user_id, email, name }
    }
}
