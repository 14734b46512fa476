//! Integration tests for the login and session endpoints

use std::sync::Arc;

use actix_web::{http::StatusCode, test, web};
use chrono::{Duration, TimeZone, Utc};
use serde_json::{json, Value};

use sv_api::{create_app, AppState};
use sv_core::services::clock::ManualClock;
use sv_core::services::session::{SessionConfig, SessionManager};
use sv_core::services::token::{TokenCodec, TokenCodecConfig};
use sv_infra::{InMemorySessionStore, StaticCredentialVerifier};
use sv_shared::config::{ServerConfig, UserCredential};

type TestState = AppState<InMemorySessionStore, StaticCredentialVerifier>;

fn create_state() -> (web::Data<TestState>, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::new(Utc.timestamp_opt(1_700_000_000, 0).unwrap()));
    let codec = TokenCodec::with_clock(TokenCodecConfig::new("api-test-secret"), clock.clone());
    let session_manager = Arc::new(SessionManager::new(
        Arc::new(InMemorySessionStore::new()),
        codec,
        SessionConfig::with_ttl(Duration::minutes(1)),
    ));

    let verifier = StaticCredentialVerifier::new(vec![UserCredential {
        username: "alice".to_string(),
        password_hash: bcrypt::hash("wonderland", 4).unwrap(),
    }])
    .unwrap();

    (
        web::Data::new(AppState::new(session_manager, Arc::new(verifier))),
        clock,
    )
}

macro_rules! init_app {
    ($state:expr) => {
        test::init_service(create_app($state, &ServerConfig::default())).await
    };
}

fn login_request(body: Value) -> test::TestRequest {
    test::TestRequest::post()
        .uri("/api/v1/auth/login")
        .set_json(body)
}

#[actix_web::test]
async fn test_login_success() {
    let (state, _) = create_state();
    let app = init_app!(state);

    let req = login_request(json!({"username": "alice", "password": "wonderland"})).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["token_type"], "Bearer");
    assert_eq!(body["username"], "alice");
    assert_eq!(body["expires_in"], 60);
    assert!(body["token"].as_str().is_some_and(|token| !token.is_empty()));
}

#[actix_web::test]
async fn test_login_missing_credentials() {
    let (state, _) = create_state();
    let app = init_app!(state);

    for body in [
        json!({}),
        json!({"username": "alice"}),
        json!({"password": "wonderland"}),
        json!({"username": "", "password": "p"}),
    ] {
        let resp = test::call_service(&app, login_request(body).to_request()).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "MISSING_CREDENTIALS");
    }
}

#[actix_web::test]
async fn test_login_bad_credentials() {
    let (state, _) = create_state();
    let app = init_app!(state);

    for body in [
        json!({"username": "alice", "password": "looking-glass"}),
        json!({"username": "mallory", "password": "wonderland"}),
    ] {
        let resp = test::call_service(&app, login_request(body).to_request()).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "AUTHENTICATION_FAILED");
    }
}

#[actix_web::test]
async fn test_login_rejects_unreadable_body() {
    let (state, _) = create_state();
    let app = init_app!(state);

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/login")
        .insert_header(("content-type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_login_rejects_oversized_username() {
    let (state, _) = create_state();
    let app = init_app!(state);

    let resp = test::call_service(
        &app,
        login_request(json!({"username": "a".repeat(200), "password": "p"})).to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "VALIDATION_ERROR");
}

#[actix_web::test]
async fn test_repeated_login_reuses_token() {
    let (state, clock) = create_state();
    let app = init_app!(state);
    let credentials = json!({"username": "alice", "password": "wonderland"});

    let first: Value =
        test::call_and_read_body_json(&app, login_request(credentials.clone()).to_request()).await;
    clock.advance(Duration::seconds(15));
    let second: Value =
        test::call_and_read_body_json(&app, login_request(credentials).to_request()).await;

    assert_eq!(first["token"], second["token"]);
    assert_eq!(second["expires_in"], 45);
}

#[actix_web::test]
async fn test_session_endpoint_with_live_token() {
    let (state, _) = create_state();
    let app = init_app!(state);

    let login: Value = test::call_and_read_body_json(
        &app,
        login_request(json!({"username": "alice", "password": "wonderland"})).to_request(),
    )
    .await;
    let token = login["token"].as_str().unwrap();

    let req = test::TestRequest::get()
        .uri("/api/v1/auth/session")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["username"], "alice");
    assert_eq!(body["expire_at"], "2023-11-14T22:14:20Z");
}

#[actix_web::test]
async fn test_session_endpoint_requires_token() {
    let (state, _) = create_state();
    let app = init_app!(state);

    let req = test::TestRequest::get().uri("/api/v1/auth/session").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "UNAUTHORIZED");
}

#[actix_web::test]
async fn test_session_endpoint_rejects_unknown_token() {
    let (state, _) = create_state();
    let app = init_app!(state);

    let req = test::TestRequest::get()
        .uri("/api/v1/auth/session")
        .insert_header(("Authorization", "Bearer not-a-session-token"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_session_endpoint_rejects_expired_token() {
    let (state, clock) = create_state();
    let app = init_app!(state);

    let login: Value = test::call_and_read_body_json(
        &app,
        login_request(json!({"username": "alice", "password": "wonderland"})).to_request(),
    )
    .await;
    let token = login["token"].as_str().unwrap().to_string();

    clock.advance(Duration::seconds(70));

    let req = test::TestRequest::get()
        .uri("/api/v1/auth/session")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    // A new login after expiry mints a different token
    let relogin: Value = test::call_and_read_body_json(
        &app,
        login_request(json!({"username": "alice", "password": "wonderland"})).to_request(),
    )
    .await;
    assert_ne!(relogin["token"].as_str().unwrap(), token);
}

#[actix_web::test]
async fn test_health_check() {
    let (state, _) = create_state();
    let app = init_app!(state);

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "healthy");
}

#[actix_web::test]
async fn test_unknown_route() {
    let (state, _) = create_state();
    let app = init_app!(state);

    let req = test::TestRequest::get().uri("/nope").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
