//! 라우트 구성
//!
//! ```text
//! GET  /health                 상태 확인 (인증 없음)
//! GET  /api/v1/places          지도 GeoJSON           ┐
//! GET  /api/v1/users           사용자 디렉터리         │ SessionMiddleware::required()
//! GET  /api/v1/me              세션 사용자 정보        │
//! GET  /api/v1/me/profile      내 프로필              │
//! PUT  /api/v1/me/profile      프로필 수정            ┘
//! ```

use crate::handlers;
use crate::middlewares::SessionMiddleware;
use actix_web::web;
use serde_json::json;

pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    configure_place_routes(cfg);
    configure_user_routes(cfg);
    configure_profile_routes(cfg);
}

fn configure_place_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/places")
            .wrap(SessionMiddleware::required())
            .service(handlers::places::get_places)
    );
}

fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/users")
            .wrap(SessionMiddleware::required())
            .service(handlers::users::list_users)
    );
}

fn configure_profile_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/me")
            .wrap(SessionMiddleware::required())
            .service(handlers::profiles::get_me)
            .service(handlers::profiles::get_my_profile)
            .service(handlers::profiles::update_my_profile)
    );
}

#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "campus_connect_backend",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "profiles": "Remote REST API",
            "cache": "Redis",
            "dependency_injection": "Singleton Macro"
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};

    #[actix_web::test]
    async fn test_health_check() {
        let app = test::init_service(App::new().configure(configure_all_routes)).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], "healthy");
        assert_eq!(body["service"], "campus_connect_backend");
    }

    #[actix_web::test]
    async fn test_api_routes_require_session() {
        let app = test::init_service(App::new().configure(configure_all_routes)).await;

        for uri in ["/api/v1/places", "/api/v1/users", "/api/v1/me", "/api/v1/me/profile"] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let res = test::call_service(&app, req).await;
            assert_eq!(res.status(), StatusCode::UNAUTHORIZED, "{}", uri);
        }
    }
}
