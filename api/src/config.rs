//! Configuration loading for the API server
//!
//! Layers, later ones winning:
//! 1. Built-in defaults for the detected environment
//! 2. `config/{environment}.toml`, if present
//! 3. Environment variables prefixed `SESSION_VAULT__`, with `__` nesting
//!    (e.g. `SESSION_VAULT__AUTH__JWT__TTL_MINUTES=5`)

use ::config::{Config, Environment as EnvSource, File, Source};
use sv_shared::config::{AppConfig, Environment, MAX_TTL_MINUTES};
use thiserror::Error;

/// Prefix for configuration environment variables
pub const ENV_PREFIX: &str = "SESSION_VAULT";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] ::config::ConfigError),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Load configuration for the environment named by `ENVIRONMENT`
pub fn load() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_for(Environment::from_env())
}

/// Load configuration for a specific environment
pub fn load_for(environment: Environment) -> Result<AppConfig, ConfigError> {
    assemble(
        environment,
        File::with_name(environment.config_file()).required(false),
    )
}

/// Merge the defaults, one file source and the environment, then validate
pub(crate) fn assemble<F>(environment: Environment, file: F) -> Result<AppConfig, ConfigError>
where
    F: Source + Send + Sync + 'static,
{
    let baseline = AppConfig::for_environment(environment);

    let config: AppConfig = Config::builder()
        .add_source(Config::try_from(&baseline)?)
        .add_source(file)
        .add_source(
            EnvSource::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?
        .try_deserialize()?;

    validate(&config)?;
    Ok(config)
}

/// Reject configurations the server must not start with
pub fn validate(config: &AppConfig) -> Result<(), ConfigError> {
    let jwt = &config.auth.jwt;

    if !jwt.has_valid_ttl() {
        return Err(ConfigError::Invalid(format!(
            "auth.jwt.ttl_minutes must be between 1 and {}, got {}",
            MAX_TTL_MINUTES, jwt.ttl_minutes
        )));
    }

    if jwt.secret.is_empty() {
        return Err(ConfigError::Invalid("auth.jwt.secret must not be empty".to_string()));
    }

    if jwt.is_using_default_secret() && config.environment.is_production() {
        return Err(ConfigError::Invalid(
            "the default JWT secret cannot be used in production".to_string(),
        ));
    }

    Ok(())
}

/// Log settings that are accepted but probably unintended.
///
/// Kept apart from [`validate`] so it can run once the logger is up.
pub fn log_warnings(config: &AppConfig) {
    if config.auth.jwt.is_using_default_secret() {
        log::warn!(
            "Using the default JWT secret; set {}__AUTH__JWT__SECRET before deploying",
            ENV_PREFIX
        );
    }
}
