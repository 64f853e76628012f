use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use crate::api::ApiGateway;
use crate::models::LoginResponse;
use crate::storage::{KeyValueStore, TOKEN_KEY};

use super::token::{
    is_token_valid_at, parse_token, token_status_at, ParsedToken, TokenClaims, TokenStatus,
};

/// Authentication lifecycle as seen from the client.
///
/// `Expired` gates exactly like `Anonymous`; it only tells the UI that a
/// token is still lying around.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthState {
    Anonymous,
    Authenticated,
    Expired,
}

/// Owns the stored token and answers "are we logged in".
///
/// Constructed once at startup and handed to the API coordinator and the
/// navigation guard. Clone is cheap and every clone sees the same store.
#[derive(Clone)]
pub struct SessionManager {
    store: Arc<dyn KeyValueStore>,
}

impl SessionManager {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Authenticate against the backend and store the returned token.
    ///
    /// Every failure comes back as `false` and leaves the stored token alone.
    pub async fn login(&self, gateway: &ApiGateway, password: &str) -> bool {
        let response = match gateway.login(password).await {
            Ok(response) => response,
            Err(e) => {
                warn!(error = %e, "Login failed");
                return false;
            }
        };

        let login: LoginResponse = match response.json().await {
            Ok(login) => login,
            Err(e) => {
                warn!(error = %e, "Failed to parse login response");
                return false;
            }
        };

        if let Err(e) = self.store.set(TOKEN_KEY, &login.token) {
            warn!(error = %e, "Failed to store token");
            return false;
        }

        info!("Login successful");
        true
    }

    /// Forget the token. Safe to call when already logged out.
    pub fn logout(&self) {
        match self.store.remove(TOKEN_KEY) {
            Ok(()) => debug!("Session cleared"),
            Err(e) => warn!(error = %e, "Failed to clear token"),
        }
    }

    /// Raw stored token, without validation
    pub fn current_token(&self) -> Option<String> {
        match self.store.get(TOKEN_KEY) {
            Ok(token) => token,
            Err(e) => {
                warn!(error = %e, "Failed to read token");
                None
            }
        }
    }

    pub fn state(&self) -> AuthState {
        self.state_at(Utc::now())
    }

    pub fn state_at(&self, now: DateTime<Utc>) -> AuthState {
        let Some(token) = self.current_token() else {
            return AuthState::Anonymous;
        };
        match token_status_at(&token, now) {
            TokenStatus::Usable(_) => AuthState::Authenticated,
            TokenStatus::Expired(_) => AuthState::Expired,
            TokenStatus::Malformed(reason) => {
                debug!(?reason, "Stored token is malformed");
                AuthState::Expired
            }
        }
    }

    /// Never fails: malformed and expired tokens both yield `false`
    pub fn is_authenticated(&self) -> bool {
        self.current_token()
            .is_some_and(|token| is_token_valid_at(&token, Utc::now()))
    }

    /// Claims of the stored token, if it parses
    pub fn token_claims(&self) -> Option<TokenClaims> {
        match parse_token(&self.current_token()?) {
            ParsedToken::Valid(claims) => Some(claims),
            ParsedToken::Malformed(_) => None,
        }
    }
}
