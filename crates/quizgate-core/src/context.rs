//! Startup wiring of the client services.
//!
//! `ClientContext` is built once when the client starts and lives for the
//! whole process. Every service in it shares the same store, so the
//! session seen by the API client and by the navigation guard is one and
//! the same.

use std::sync::Arc;

use anyhow::{Context as _, Result};
use tracing::{debug, info};

use crate::api::{ApiGateway, QuizClient};
use crate::auth::SessionManager;
use crate::config::Config;
use crate::navigation::{NavigationGuard, Navigator};
use crate::participation::ParticipationStore;
use crate::settings::SettingsStore;
use crate::storage::{FileStore, KeyValueStore};

#[derive(Clone)]
pub struct ClientContext {
    pub config: Config,
    pub session: SessionManager,
    pub api: QuizClient,
    pub guard: NavigationGuard,
    pub participation: ParticipationStore,
    pub settings: SettingsStore,
}

impl ClientContext {
    /// Wire all services over an explicit store
    pub fn new(
        config: Config,
        store: Arc<dyn KeyValueStore>,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self> {
        let session = SessionManager::new(store.clone());
        let gateway = ApiGateway::from_config(&config).context("Failed to build HTTP client")?;
        debug!(api_url = %gateway.base_url(), state = ?session.state(), "Client context ready");

        Ok(Self {
            api: QuizClient::new(gateway, session.clone(), navigator),
            guard: NavigationGuard::new(session.clone()),
            participation: ParticipationStore::new(store.clone()),
            settings: SettingsStore::new(store),
            session,
            config,
        })
    }

    /// Load configuration and open the durable store from its default location
    pub fn open(navigator: Arc<dyn Navigator>) -> Result<Self> {
        let config = Config::load()?;
        let store = FileStore::open_default(&config)?;
        info!(path = %store.path().display(), "Using durable store");
        Self::new(config, Arc::new(store), navigator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::AuthState;
    use crate::navigation::MemoryNavigator;
    use crate::storage::MemoryStore;

    #[test]
    fn test_services_share_one_store() {
        let store = Arc::new(MemoryStore::new());
        let ctx = ClientContext::new(
            Config::default(),
            store,
            Arc::new(MemoryNavigator::new("/")),
        )
        .unwrap();

        ctx.participation.save_player_name("Ada").unwrap();
        assert_eq!(ctx.participation.player_name().unwrap(), "Ada");
        assert_eq!(ctx.session.state(), AuthState::Anonymous);
        assert_eq!(ctx.api.session().state(), AuthState::Anonymous);
        assert_eq!(ctx.api.gateway().base_url(), crate::config::DEFAULT_API_URL);
    }
}
