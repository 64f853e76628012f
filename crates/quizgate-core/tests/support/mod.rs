// Shared helpers for the HTTP integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use chrono::Utc;
use quizgate_core::storage::TOKEN_KEY;
use quizgate_core::{
    ApiGateway, KeyValueStore, MemoryNavigator, MemoryStore, QuizClient, SessionManager,
};
use wiremock::MockServer;

// Builds `h.<base64 payload>.s` with an `exp` offset from now.
pub fn token_expiring_in(seconds: i64) -> String {
    let payload = format!(r#"{{"exp": {}}}"#, Utc::now().timestamp() + seconds);
    format!("h.{}.s", STANDARD.encode(payload))
}

pub struct Harness {
    pub store: Arc<MemoryStore>,
    pub navigator: Arc<MemoryNavigator>,
    pub client: QuizClient,
}

impl Harness {
    // Client pointed at the mock server, starting on `location`.
    pub fn new(server: &MockServer, location: &str, token: Option<&str>) -> Self {
        let store = Arc::new(MemoryStore::new());
        if let Some(token) = token {
            store.set(TOKEN_KEY, token).expect("seed token");
        }
        let navigator = Arc::new(MemoryNavigator::new(location));
        let gateway = ApiGateway::new(server.uri()).expect("gateway");
        let client = QuizClient::new(gateway, SessionManager::new(store.clone()), navigator.clone());
        Self {
            store,
            navigator,
            client,
        }
    }

    pub fn stored_token(&self) -> Option<String> {
        self.store.get(TOKEN_KEY).expect("read token")
    }
}
