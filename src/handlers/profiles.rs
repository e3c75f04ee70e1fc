use actix_web::{web, HttpResponse, get, put};
use validator::Validate;
use crate::core::errors::AppError;
use crate::domain::dto::users::{MeResponse, UpdateProfileRequest};
use crate::domain::models::session::Session;
use crate::services::profiles::ProfileService;

/// 현재 세션의 사용자 정보
#[get("")]
pub async fn get_me(
    session: Session,
) -> Result<HttpResponse, AppError> {
    let user = session.require_user()?;

    Ok(HttpResponse::Ok().json(MeResponse::from(user.clone())))
}

#[get("/profile")]
pub async fn get_my_profile(
    session: Session,
) -> Result<HttpResponse, AppError> {
    let user = session.require_user()?;
    let service = ProfileService::instance();
    let profile = service.get_profile(&user.email).await?;

    Ok(HttpResponse::Ok().json(profile))
}

/// 프로필 수정 (온보딩 폼 제출 포함)
///
/// 공백 제거와 검증은 여기서만 하고, 서비스는 검증된 요청을 받습니다.
#[put("/profile")]
pub async fn update_my_profile(
    session: Session,
    payload: web::Json<UpdateProfileRequest>,
) -> Result<HttpResponse, AppError> {
    let user = session.require_user()?;

    // 유효성 검사
    let request = payload.into_inner().normalized();
    request.validate()?;

    let service = ProfileService::instance();
    let profile = service.update_profile(&user.email, request).await?;

    Ok(HttpResponse::Ok().json(profile))
}
