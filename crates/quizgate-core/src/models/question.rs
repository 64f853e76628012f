use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Assigned by the backend; absent when creating
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub title: String,
    pub text: String,
    #[serde(default)]
    pub image: String,
    /// 0-indexed ordinal within the quiz
    pub position: u32,
    #[serde(rename = "possibleAnswers", default)]
    pub possible_answers: Vec<Answer>,
}

impl Question {
    /// 1-based position of the correct answer, as the backend scores it.
    /// With several flagged answers the last one wins.
    pub fn correct_answer_position(&self) -> Option<u32> {
        self.possible_answers
            .iter()
            .rposition(|a| a.is_correct)
            .map(|i| i as u32 + 1)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub text: String,
    #[serde(rename = "isCorrect", default)]
    pub is_correct: bool,
}

impl Answer {
    pub fn new(text: impl Into<String>, is_correct: bool) -> Self {
        Self {
            id: None,
            text: text.into(),
            is_correct,
        }
    }
}

/// Body returned when a question is created
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionId {
    pub id: i64,
}
