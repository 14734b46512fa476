use std::sync::Arc;

use actix_web::{web, HttpServer};
use log::{info, warn};

use sv_api::{config, create_app, AppState};
use sv_core::services::session::{SessionConfig, SessionManager};
use sv_core::services::token::{TokenCodec, TokenCodecConfig};
use sv_infra::{connect_session_store, StaticCredentialVerifier};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load .env and configuration
    let app_config = config::load()?;

    // Initialize logger
    let mut logger = env_logger::Builder::from_env(
        env_logger::Env::new().default_filter_or(app_config.logging.level.as_str()),
    );
    if !app_config.logging.timestamp {
        logger.format_timestamp(None);
    }
    logger.init();
    config::log_warnings(&app_config);

    info!("Starting SessionVault API Server ({})", app_config.environment);

    let store = Arc::new(connect_session_store(&app_config.cache).await?);
    if !store.health_check().await {
        warn!("Session store '{}' did not answer the health check", store.name());
    }

    let codec = TokenCodec::new(TokenCodecConfig::from(&app_config.auth.jwt));
    let session_manager = Arc::new(SessionManager::new(
        store,
        codec,
        SessionConfig::from(&app_config.auth.jwt),
    ));
    let verifier = Arc::new(StaticCredentialVerifier::from_config(&app_config.auth)?);

    let state = web::Data::new(AppState::new(session_manager, verifier));

    let bind_address = app_config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let server_config = app_config.server.clone();
    let mut server = HttpServer::new(move || create_app(state.clone(), &server_config));
    if app_config.server.workers > 0 {
        server = server.workers(app_config.server.workers);
    }

    server.bind(&bind_address)?.run().await?;
    Ok(())
}
