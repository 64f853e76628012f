//! Durable client-local key-value storage.
//!
//! This module provides the `KeyValueStore` contract that every piece of
//! persisted client state goes through, with two implementations:
//! - `FileStore`: a JSON file on disk, survives restarts
//! - `MemoryStore`: process-local, for tests and ephemeral sessions
//!
//! All values are strings stored under the fixed key names below.

pub mod store;

pub use store::{FileStore, KeyValueStore, MemoryStore};

/// Raw authentication token
pub const TOKEN_KEY: &str = "quiz-auth-token";

/// Participant display name
pub const PLAYER_NAME_KEY: &str = "quiz-player-name";

/// Participant score, stored as decimal text
pub const PLAYER_SCORE_KEY: &str = "quiz-player-score";

/// Per-question outcome summary, stored as JSON text
pub const PARTICIPATION_SUMMARY_KEY: &str = "quiz-participation-summary";

/// UI theme identifier
pub const THEME_KEY: &str = "quiz-settings-theme";
