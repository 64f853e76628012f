//! Client-local state of the current quiz run.
//!
//! Holds the player name, the running score and the per-question summary of
//! the last scored run. Absent values read back as defaults: empty name,
//! zero score, empty summary.

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::warn;

use crate::models::AnswerSummary;
use crate::storage::{KeyValueStore, PARTICIPATION_SUMMARY_KEY, PLAYER_NAME_KEY, PLAYER_SCORE_KEY};

#[derive(Clone)]
pub struct ParticipationStore {
    store: Arc<dyn KeyValueStore>,
}

impl ParticipationStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Called when a new quiz run starts
    pub fn clear(&self) -> Result<()> {
        self.store.remove(PLAYER_NAME_KEY)?;
        self.store.remove(PLAYER_SCORE_KEY)?;
        self.store.remove(PARTICIPATION_SUMMARY_KEY)?;
        Ok(())
    }

    pub fn save_player_name(&self, player_name: &str) -> Result<()> {
        self.store.set(PLAYER_NAME_KEY, player_name)
    }

    pub fn player_name(&self) -> Result<String> {
        Ok(self.store.get(PLAYER_NAME_KEY)?.unwrap_or_default())
    }

    pub fn save_participation_score(&self, score: u32) -> Result<()> {
        self.store.set(PLAYER_SCORE_KEY, &score.to_string())
    }

    pub fn participation_score(&self) -> Result<u32> {
        let Some(raw) = self.store.get(PLAYER_SCORE_KEY)? else {
            return Ok(0);
        };
        Ok(raw.trim().parse().unwrap_or_else(|_| {
            warn!(value = %raw, "Stored score is not a number, using 0");
            0
        }))
    }

    pub fn save_participation_summary(&self, summary: &[AnswerSummary]) -> Result<()> {
        let json = serde_json::to_string(summary).context("Failed to encode participation summary")?;
        self.store.set(PARTICIPATION_SUMMARY_KEY, &json)
    }

    pub fn participation_summary(&self) -> Result<Vec<AnswerSummary>> {
        let Some(raw) = self.store.get(PARTICIPATION_SUMMARY_KEY)? else {
            return Ok(Vec::new());
        };
        Ok(serde_json::from_str(&raw).unwrap_or_else(|e| {
            warn!(error = %e, "Stored participation summary is unreadable, using empty");
            Vec::new()
        }))
    }
}
