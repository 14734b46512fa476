//! Application state and factory
//!
//! This module holds the shared services and builds the Actix-web
//! application around them.

use std::sync::Arc;

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    middleware::Logger,
    web, App, Error, HttpResponse,
};

use sv_core::repositories::SessionStore;
use sv_core::services::auth::{AuthService, CredentialVerifier};
use sv_core::services::session::SessionManager;
use sv_shared::config::ServerConfig;
use sv_shared::errors::{error_codes, ErrorResponse};

use crate::handlers::error::json_error_handler;
use crate::middleware::{auth::SessionValidator, cors::create_cors, SessionAuth};
use crate::routes::auth::{current_session, login};

/// Application state that holds shared services
pub struct AppState<S, V>
where
    S: SessionStore,
    V: CredentialVerifier,
{
    pub auth_service: Arc<AuthService<S, V>>,
    pub session_manager: Arc<SessionManager<S>>,
}

impl<S, V> AppState<S, V>
where
    S: SessionStore,
    V: CredentialVerifier,
{
    pub fn new(session_manager: Arc<SessionManager<S>>, verifier: Arc<V>) -> Self {
        Self {
            auth_service: Arc::new(AuthService::new(session_manager.clone(), verifier)),
            session_manager,
        }
    }
}

/// Create and configure the application with all dependencies
pub fn create_app<S, V>(
    app_state: web::Data<AppState<S, V>>,
    server: &ServerConfig,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
>
where
    S: SessionStore + 'static,
    V: CredentialVerifier + 'static,
{
    let validator: Arc<dyn SessionValidator> = app_state.session_manager.clone();

    App::new()
        // Add application state
        .app_data(app_state)
        .app_data(web::Data::new(validator))
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        // Add middleware
        .wrap(Logger::default())
        .wrap(create_cors(server))
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // API v1 routes
        .service(
            web::scope("/api/v1").service(
                web::scope("/auth")
                    .route("/login", web::post().to(login::<S, V>))
                    .service(
                        web::resource("/session")
                            .wrap(SessionAuth::new())
                            .route(web::get().to(current_session)),
                    ),
            ),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "session-vault",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        error_codes::NOT_FOUND,
        "The requested resource was not found",
    ))
}
