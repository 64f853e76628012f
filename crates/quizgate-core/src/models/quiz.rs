use serde::{Deserialize, Serialize};

/// Quiz metadata: number of questions and the leaderboard, best first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizInfo {
    pub size: u32,
    #[serde(default)]
    pub scores: Vec<Score>,
}

impl QuizInfo {
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn best_score(&self) -> Option<&Score> {
        self.scores.iter().max_by_key(|s| s.score)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    #[serde(rename = "playerName")]
    pub player_name: String,
    pub score: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}
