use actix_web::{web, HttpResponse};
use validator::Validate;

use sv_core::repositories::SessionStore;
use sv_core::services::auth::CredentialVerifier;

use crate::app::AppState;
use crate::dto::auth::{LoginRequest, LoginResponse};
use crate::handlers::error::{handle_domain_error, validation_error_response};

/// Handler for POST /api/v1/auth/login
///
/// Authenticates the user and returns their session token. A user who
/// already holds a live session gets that same token back.
///
/// # Request Body
///
/// ```json
/// {
///     "username": "alice",
///     "password": "wonderland"
/// }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "token": "eyJ0eXAiOiJKV1QiLCJhbGciOiJIUzUxMiJ9...",
///     "token_type": "Bearer",
///     "expires_in": 60,
///     "username": "alice"
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: username or password missing or empty
/// - 401 Unauthorized: credentials rejected
/// - 503 Service Unavailable: session store unreachable
pub async fn login<S, V>(
    state: web::Data<AppState<S, V>>,
    request: web::Json<LoginRequest>,
) -> HttpResponse
where
    S: SessionStore + 'static,
    V: CredentialVerifier + 'static,
{
    if let Err(errors) = request.validate() {
        return validation_error_response(&errors);
    }

    let request = request.into_inner();

    match state
        .auth_service
        .login(request.username.as_deref(), request.password.as_deref())
        .await
    {
        Ok(result) => HttpResponse::Ok().json(LoginResponse::from(result)),
        Err(error) => handle_domain_error(&error),
    }
}
