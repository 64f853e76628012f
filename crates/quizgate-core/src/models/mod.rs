//! Wire models for the quiz backend.
//!
//! This module contains the request and response bodies exchanged with
//! the quiz REST service:
//!
//! - `Question`, `Answer`, `QuestionId`: question management
//! - `QuizInfo`, `Score`: quiz metadata and the leaderboard
//! - `Participation`, `ParticipationResponse`, `AnswerSummary`: quiz runs
//! - `LoginRequest`, `LoginResponse`: admin authentication

pub mod auth;
pub mod participation;
pub mod question;
pub mod quiz;

pub use auth::{LoginRequest, LoginResponse};
pub use participation::{AnswerSummary, Participation, ParticipationResponse};
pub use question::{Answer, Question, QuestionId};
pub use quiz::{QuizInfo, Score};
