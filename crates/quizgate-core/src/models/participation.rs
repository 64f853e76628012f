use serde::{Deserialize, Serialize};

/// A full quiz run submitted at the end: one answer per question, in
/// question order, each a 1-based index into `possible_answers`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participation {
    #[serde(rename = "playerName")]
    pub player_name: String,
    pub answers: Vec<u32>,
}

/// Outcome of one question in a scored run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerSummary {
    #[serde(rename = "correctAnswerPosition")]
    pub correct_answer_position: u32,
    #[serde(rename = "wasCorrect")]
    pub was_correct: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipationResponse {
    #[serde(rename = "playerName")]
    pub player_name: String,
    pub score: u32,
    #[serde(default)]
    pub summary: Vec<AnswerSummary>,
}

impl ParticipationResponse {
    pub fn correct_count(&self) -> usize {
        self.summary.iter().filter(|s| s.was_correct).count()
    }
}
