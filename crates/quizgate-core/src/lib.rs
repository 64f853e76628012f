//! Quizgate core - session and API gateway layer of the quiz client.
//!
//! This crate owns everything the quiz UI needs besides rendering:
//! the admin token and its validation, every call to the quiz backend,
//! the global reaction to auth rejections, and the small pieces of state
//! kept on the client between runs (player name, score, theme).

pub mod api;
pub mod auth;
pub mod config;
pub mod context;
pub mod logging;
pub mod models;
pub mod navigation;
pub mod participation;
pub mod settings;
pub mod storage;

pub use api::{Access, ApiError, ApiGateway, QuizClient};
pub use auth::{AuthState, SessionManager};
pub use config::Config;
pub use context::ClientContext;
pub use navigation::{Destination, GuardDecision, MemoryNavigator, NavigationGuard, Navigator};
pub use participation::ParticipationStore;
pub use settings::{SettingsStore, Theme};
pub use storage::{FileStore, KeyValueStore, MemoryStore};
