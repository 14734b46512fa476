//! CORS middleware configuration for cross-origin requests.
//!
//! With no configured origins any origin is accepted, which suits local
//! development. Once `server.allowed_origins` lists anything, only those
//! origins may call the API.

use actix_cors::Cors;
use actix_web::http::{header, Method};

use sv_shared::config::ServerConfig;

/// Max age for the preflight cache, in seconds
const CORS_MAX_AGE: usize = 3600;

/// Creates a CORS middleware instance for the configured origins.
pub fn create_cors(config: &ServerConfig) -> Cors {
    let cors = Cors::default()
        .allowed_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .max_age(CORS_MAX_AGE);

    let origins: Vec<&str> = config
        .allowed_origins
        .iter()
        .map(|origin| origin.trim())
        .filter(|origin| !origin.is_empty())
        .collect();

    if origins.is_empty() {
        log::info!("Configuring permissive CORS (no allowed origins configured)");
        return cors.allow_any_origin();
    }

    origins.into_iter().fold(cors, |cors, origin| {
        log::info!("Adding allowed origin: {}", origin);
        cors.allowed_origin(origin)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, web, App, HttpResponse};

    async fn preflight_status(config: &ServerConfig, origin: &str) -> StatusCode {
        let app = test::init_service(
            App::new()
                .wrap(create_cors(config))
                .route("/ping", web::get().to(|| async { HttpResponse::Ok().finish() })),
        )
        .await;

        let req = test::TestRequest::default()
            .method(Method::OPTIONS)
            .uri("/ping")
            .insert_header((header::ORIGIN, origin))
            .insert_header((header::ACCESS_CONTROL_REQUEST_METHOD, "GET"))
            .to_request();

        test::call_service(&app, req).await.status()
    }

    #[actix_web::test]
    async fn test_any_origin_without_configuration() {
        let config = ServerConfig::default();

        assert_eq!(preflight_status(&config, "https://anything.example").await, StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_configured_origins_only() {
        let mut config = ServerConfig::default();
        config.allowed_origins = vec!["https://app.example".to_string()];

        assert_eq!(preflight_status(&config, "https://app.example").await, StatusCode::OK);
        assert_ne!(preflight_status(&config, "https://evil.example").await, StatusCode::OK);
    }
}
