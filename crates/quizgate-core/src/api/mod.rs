//! REST API module for the quiz backend.
//!
//! This module provides:
//! - `ApiGateway`: the single egress point, attaching bearer tokens and
//!   classifying responses into `ApiError`
//! - `QuizClient`: typed endpoint wrappers that also react to auth
//!   rejections by logging out and redirecting to login

pub mod client;
pub mod error;
pub mod gateway;

pub use client::{Access, QuizClient};
pub use error::ApiError;
pub use gateway::ApiGateway;
