//! Authentication module for the admin session.
//!
//! This module provides:
//! - `SessionManager`: stores the token, logs in/out, derives `AuthState`
//! - `token`: structural parsing and expiry checks for stored tokens
//!
//! Validation is local only. A token revoked server-side is caught when the
//! backend answers 401.

pub mod session;
pub mod token;

pub use session::{AuthState, SessionManager};
pub use token::{
    parse_token, token_status_at, MalformedReason, ParsedToken, TokenClaims, TokenStatus,
};
