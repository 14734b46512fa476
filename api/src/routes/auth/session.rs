use actix_web::HttpResponse;

use crate::dto::auth::SessionResponse;
use crate::middleware::auth::SessionContext;

/// Handler for GET /api/v1/auth/session
///
/// Requires a live session token in the `Authorization: Bearer` header; the
/// session middleware rejects everything else with 401 before this runs.
///
/// ## Success (200 OK)
/// ```json
/// {
///     "username": "alice",
///     "expire_at": "2025-01-01T00:01:00Z"
/// }
/// ```
pub async fn current_session(session: SessionContext) -> HttpResponse {
    HttpResponse::Ok().json(SessionResponse::from(session))
}
