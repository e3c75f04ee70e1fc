use actix_web::{web, HttpResponse, get};
use crate::config::MapConfig;
use crate::core::errors::AppError;
use crate::domain::dto::places::PlacesQuery;
use crate::domain::models::session::Session;
use crate::services::places::PlaceService;

/// 지도용 GeoJSON FeatureCollection
///
/// `GET /api/v1/places?group_by=coordinates&members=batch`
#[get("")]
pub async fn get_places(
    session: Session,
    query: web::Query<PlacesQuery>,
) -> Result<HttpResponse, AppError> {
    session.require_user()?;
    let strategy = query.strategy(MapConfig::default_strategy())?;
    let projection = query.projection()?;

    let service = PlaceService::instance();
    let collection = service.get_places(strategy, projection).await?;

    Ok(HttpResponse::Ok().json(collection))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{dev::Service, http::StatusCode, test, App, HttpMessage};
    use crate::domain::models::session::AuthenticatedUser;

    fn user() -> AuthenticatedUser {
        AuthenticatedUser {
            user_id: "user_2abc".to_string(),
            email: "asha@example.com".to_string(),
            name: None,
        }
    }

    #[actix_web::test]
    async fn test_invalid_query_is_bad_request() {
        let app = test::init_service(
            App::new()
                .wrap_fn(|req, srv| {
                    req.extensions_mut().insert(user());
                    srv.call(req)
                })
                .service(web::scope("/api/v1/places").service(get_places)),
        )
        .await;

        for uri in ["/api/v1/places?group_by=radius", "/api/v1/places?members=password"] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let res = test::call_service(&app, req).await;
            assert_eq!(res.status(), StatusCode::BAD_REQUEST, "{}", uri);
        }
    }

    #[actix_web::test]
    async fn test_missing_session_is_unauthorized() {
        let app = test::init_service(
            App::new().service(web::scope("/api/v1/places").service(get_places)),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/v1/places").to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }
}
