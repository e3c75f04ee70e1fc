use async_trait::async_trait;
use crate::core::errors::AppError;
use crate::domain::dto::users::ProfileUpdatePayload;
use crate::domain::entities::users::{DashboardUsers, RawUserDocument};

/// 사용자 프로필 저장소에 대한 공통 인터페이스
///
/// 운영에서는 원격 REST API를 감싸는 `ProfileRepository`가 구현하고,
/// 서비스의 흐름 테스트에서는 메모리 구현으로 바꿔 끼웁니다.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// 대시보드에 표시할 전체 사용자 문서
    async fn list_dashboard_users(&self) -> Result<DashboardUsers, AppError>;

    /// 이메일로 프로필을 찾습니다. 없으면 `Ok(None)`입니다.
    async fn find_by_email(&self, email: &str) -> Result<Option<RawUserDocument>, AppError>;

    async fn update_profile(&self, payload: &ProfileUpdatePayload) -> Result<(), AppError>;
}
