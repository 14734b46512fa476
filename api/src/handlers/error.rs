//! Mapping from domain failures to HTTP responses

use actix_web::{error::JsonPayloadError, HttpRequest, HttpResponse};
use validator::ValidationErrors;

use sv_core::errors::{AuthError, DomainError};
use sv_shared::errors::{error_codes, ErrorResponse, IntoErrorResponse};

/// Handle domain errors and convert them to appropriate HTTP responses
///
/// - 400: missing credentials, invalid input
/// - 401: bad credentials, unusable token
/// - 503: session store unavailable
/// - 500: anything else
pub fn handle_domain_error(error: &DomainError) -> HttpResponse {
    let body = error.to_error_response();

    match error {
        DomainError::Auth(AuthError::MissingCredentials) | DomainError::Validation { .. } => {
            HttpResponse::BadRequest().json(body)
        }
        DomainError::Auth(AuthError::AuthenticationFailed) | DomainError::Token(_) => {
            HttpResponse::Unauthorized().json(body)
        }
        DomainError::StoreUnavailable { .. } => {
            log::error!("Session store failure: {}", error);
            HttpResponse::ServiceUnavailable().json(body)
        }
        DomainError::Internal { .. } => {
            log::error!("Internal error: {}", error);
            HttpResponse::InternalServerError().json(body)
        }
    }
}

/// 401 response for requests without a live session. Carries no reason.
pub fn unauthorized() -> HttpResponse {
    HttpResponse::Unauthorized().json(ErrorResponse::new(error_codes::UNAUTHORIZED, "Unauthorized"))
}

/// 400 response listing the fields that failed validation
pub fn validation_error_response(errors: &ValidationErrors) -> HttpResponse {
    let mut fields: Vec<String> = errors.field_errors().keys().map(|field| field.to_string()).collect();
    fields.sort_unstable();

    HttpResponse::BadRequest().json(
        ErrorResponse::new(error_codes::VALIDATION_ERROR, "Invalid request data")
            .add_detail("fields", fields),
    )
}

/// Replaces actix's plain-text body for unreadable JSON payloads
pub fn json_error_handler(error: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    log::debug!("Rejected request body: {}", error);

    let response = HttpResponse::BadRequest().json(ErrorResponse::new(
        error_codes::VALIDATION_ERROR,
        "Request body must be a JSON object",
    ));
    actix_web::error::InternalError::from_response(error, response).into()
}
