use actix_web::{HttpResponse, get};
use crate::core::errors::AppError;
use crate::domain::models::session::Session;
use crate::services::places::PlaceService;

/// 대시보드 사용자 디렉터리
#[get("")]
pub async fn list_users(
    session: Session,
) -> Result<HttpResponse, AppError> {
    session.require_user()?;
    let service = PlaceService::instance();
    let users = service.list_members().await?;

    Ok(HttpResponse::Ok().json(users))
}
