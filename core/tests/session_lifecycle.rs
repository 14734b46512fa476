//! End-to-end session lifecycle through the public core API

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{Duration, TimeZone, Utc};

use sv_core::{
    AuthError, AuthService, CredentialVerifier, DomainError, ManualClock, Principal,
    SessionConfig, SessionManager, SessionRecord, SessionStore, TokenCodec, TokenCodecConfig,
};

/// Minimal two-index store
#[derive(Default)]
struct MapStore {
    by_token: Mutex<HashMap<String, SessionRecord>>,
    by_username: Mutex<HashMap<String, String>>,
}

#[async_trait]
impl SessionStore for MapStore {
    async fn get_by_token(&self, token: &str) -> Result<Option<SessionRecord>, DomainError> {
        Ok(self.by_token.lock().unwrap().get(token).cloned())
    }

    async fn get_by_username(&self, username: &str) -> Result<Option<SessionRecord>, DomainError> {
        let token = self.by_username.lock().unwrap().get(username).cloned();
        Ok(token.and_then(|token| self.by_token.lock().unwrap().get(&token).cloned()))
    }

    async fn put(&self, record: SessionRecord) -> Result<(), DomainError> {
        self.by_username
            .lock()
            .unwrap()
            .insert(record.username.clone(), record.token.clone());
        self.by_token.lock().unwrap().insert(record.token.clone(), record);
        Ok(())
    }

    async fn delete_by_token(&self, token: &str) -> Result<bool, DomainError> {
        let Some(record) = self.by_token.lock().unwrap().remove(token) else {
            return Ok(false);
        };
        let mut by_username = self.by_username.lock().unwrap();
        if by_username.get(&record.username).map(String::as_str) == Some(token) {
            by_username.remove(&record.username);
        }
        Ok(true)
    }
}

struct SingleUser;

#[async_trait]
impl CredentialVerifier for SingleUser {
    async fn authenticate(&self, username: &str, password: &str) -> Result<Principal, AuthError> {
        if username == "alice" && password == "wonderland" {
            Ok(Principal::new(username))
        } else {
            Err(AuthError::AuthenticationFailed)
        }
    }
}

fn setup() -> (AuthService<MapStore, SingleUser>, Arc<SessionManager<MapStore>>, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::new(Utc.timestamp_opt(1_700_000_000, 0).unwrap()));
    let codec = TokenCodec::with_clock(TokenCodecConfig::new("lifecycle-secret"), clock.clone());
    let manager = Arc::new(SessionManager::new(
        Arc::new(MapStore::default()),
        codec,
        SessionConfig::with_ttl(Duration::minutes(1)),
    ));
    let service = AuthService::new(manager.clone(), Arc::new(SingleUser));
    (service, manager, clock)
}

#[tokio::test]
async fn test_login_validate_expire_relogin() {
    let (service, manager, clock) = setup();

    let first = service.login(Some("alice"), Some("wonderland")).await.unwrap();
    assert!(manager.validate_for_access(&first.token).await.unwrap());

    clock.advance(Duration::seconds(30));
    assert!(manager.validate_for_access(&first.token).await.unwrap());
    let again = service.login(Some("alice"), Some("wonderland")).await.unwrap();
    assert_eq!(again.token, first.token);

    clock.advance(Duration::seconds(40));
    assert!(!manager.validate_for_access(&first.token).await.unwrap());

    let second = service.login(Some("alice"), Some("wonderland")).await.unwrap();
    assert_ne!(second.token, first.token);
    assert_eq!(second.expires_in, 60);
    assert!(manager.validate_for_access(&second.token).await.unwrap());
}

#[tokio::test]
async fn test_failed_logins_leave_no_session() {
    let (service, manager, _) = setup();

    assert!(matches!(
        service.login(Some("alice"), None).await,
        Err(DomainError::Auth(AuthError::MissingCredentials))
    ));
    assert!(matches!(
        service.login(Some("alice"), Some("nope")).await,
        Err(DomainError::Auth(AuthError::AuthenticationFailed))
    ));

    assert!(manager.fetch_record("alice").await.unwrap().is_none());
}
