//! Session authentication middleware for protecting API endpoints.
//!
//! Extracts the bearer token from the Authorization header, asks the session
//! manager whether it currently grants access, and injects the session owner
//! into the request. Every rejection is the same bare 401.

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    error::ErrorUnauthorized,
    http::header::AUTHORIZATION,
    web, Error, FromRequest, HttpMessage, HttpRequest, HttpResponse,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
};

use sv_core::domain::entities::session::SessionRecord;
use sv_core::errors::DomainResult;
use sv_core::repositories::SessionStore;
use sv_core::services::session::SessionManager;
use sv_shared::errors::{error_codes, ErrorResponse};

use crate::handlers::error::{handle_domain_error, unauthorized};

/// Session owner injected into authenticated requests
#[derive(Debug, Clone)]
pub struct SessionContext {
    pub username: String,
    pub expire_at: DateTime<Utc>,
}

impl From<SessionRecord> for SessionContext {
    fn from(record: SessionRecord) -> Self {
        Self {
            username: record.username,
            expire_at: record.expire_at,
        }
    }
}

/// Trait for wrapping the session manager to allow dynamic dispatch
#[async_trait]
pub trait SessionValidator: Send + Sync {
    /// The live record for `token`, or `None` if it grants no access
    async fn authorize(&self, token: &str) -> DomainResult<Option<SessionRecord>>;
}

#[async_trait]
impl<S: SessionStore + 'static> SessionValidator for SessionManager<S> {
    async fn authorize(&self, token: &str) -> DomainResult<Option<SessionRecord>> {
        self.session_for_access(token).await
    }
}

/// Session authentication middleware factory
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionAuth;

impl SessionAuth {
    pub fn new() -> Self {
        Self
    }
}

impl<S, B> Transform<S, ServiceRequest> for SessionAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = SessionAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(SessionAuthMiddleware {
            service: Rc::new(service),
        }))
    }
}

/// Session authentication middleware service
pub struct SessionAuthMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for SessionAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            let Some(token) = extract_bearer_token(&req) else {
                return Ok(req.into_response(unauthorized()).map_into_right_body());
            };

            let Some(validator) = req
                .app_data::<web::Data<Arc<dyn SessionValidator>>>()
                .cloned()
            else {
                log::error!("Session validator is not registered in app data");
                let response = HttpResponse::InternalServerError().json(ErrorResponse::new(
                    error_codes::INTERNAL_ERROR,
                    "An internal error occurred",
                ));
                return Ok(req.into_response(response).map_into_right_body());
            };

            match validator.authorize(&token).await {
                Ok(Some(record)) => {
                    req.extensions_mut().insert(SessionContext::from(record));
                    service
                        .call(req)
                        .await
                        .map(ServiceResponse::map_into_left_body)
                }
                Ok(None) => Ok(req.into_response(unauthorized()).map_into_right_body()),
                Err(error) => {
                    let response = handle_domain_error(&error);
                    Ok(req.into_response(response).map_into_right_body())
                }
            }
        })
    }
}

/// Extracts Bearer token from Authorization header
fn extract_bearer_token(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|s| s.to_string())
}

/// Extractor for required authentication
impl FromRequest for SessionContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<SessionContext>()
            .cloned()
            .ok_or_else(|| ErrorUnauthorized("Authentication required"));

        ready(result)
    }
}
