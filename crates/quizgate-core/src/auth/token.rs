//! Structural parsing of bearer tokens.
//!
//! Tokens are JWT-shaped: `header.payload.signature`, where the payload is
//! base64-encoded JSON carrying an `exp` claim in epoch seconds. The
//! signature is never checked here; the backend is the authority.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::{DateTime, Duration, Utc};
use serde_json::Value as JsonValue;

/// Outcome of the parse step. Anything that is not `Valid` is unusable.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedToken {
    Valid(TokenClaims),
    Malformed(MalformedReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedReason {
    MissingPayload,
    PayloadNotBase64,
    PayloadNotJson,
    MissingExp,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TokenClaims {
    /// Expiration, epoch seconds
    pub exp: f64,
}

impl TokenClaims {
    /// A token expiring exactly now is already expired. `now` keeps its
    /// sub-second part so a fractional `exp` is honoured.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.exp <= epoch_seconds(now)
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp.floor() as i64, 0)
    }

    pub fn time_until_expiry(&self) -> Duration {
        // Clamped well inside chrono's range
        let remaining = (self.exp - epoch_seconds(Utc::now())).clamp(-1e9, 1e9);
        Duration::milliseconds((remaining * 1000.0).floor() as i64)
    }

    /// Get minutes remaining until expiry (for display)
    pub fn minutes_until_expiry(&self) -> i64 {
        self.time_until_expiry().num_minutes().max(0)
    }
}

fn epoch_seconds(instant: DateTime<Utc>) -> f64 {
    instant.timestamp_millis() as f64 / 1000.0
}

/// Where a stored token stands at a given instant
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TokenStatus {
    Usable(TokenClaims),
    Expired(TokenClaims),
    Malformed(MalformedReason),
}

/// Parse a raw token into its claims.
pub fn parse_token(raw: &str) -> ParsedToken {
    let mut segments = raw.split('.');
    let payload = match (segments.next(), segments.next()) {
        (Some(_), Some(payload)) => payload,
        _ => return ParsedToken::Malformed(MalformedReason::MissingPayload),
    };

    let Some(bytes) = decode_segment(payload) else {
        return ParsedToken::Malformed(MalformedReason::PayloadNotBase64);
    };

    let json: JsonValue = match serde_json::from_slice(&bytes) {
        Ok(json) => json,
        Err(_) => return ParsedToken::Malformed(MalformedReason::PayloadNotJson),
    };

    match json.get("exp").and_then(JsonValue::as_f64) {
        Some(exp) => ParsedToken::Valid(TokenClaims { exp }),
        None => ParsedToken::Malformed(MalformedReason::MissingExp),
    }
}

/// Accepts both url-safe and standard alphabets, with or without padding
fn decode_segment(segment: &str) -> Option<Vec<u8>> {
    let normalized: String = segment
        .trim_end_matches('=')
        .chars()
        .map(|c| match c {
            '+' => '-',
            '/' => '_',
            other => other,
        })
        .collect();
    URL_SAFE_NO_PAD.decode(normalized).ok()
}

pub fn token_status_at(raw: &str, now: DateTime<Utc>) -> TokenStatus {
    match parse_token(raw) {
        ParsedToken::Valid(claims) if claims.is_expired_at(now) => TokenStatus::Expired(claims),
        ParsedToken::Valid(claims) => TokenStatus::Usable(claims),
        ParsedToken::Malformed(reason) => TokenStatus::Malformed(reason),
    }
}

/// True iff `raw` parses and is unexpired at `now`
pub fn is_token_valid_at(raw: &str, now: DateTime<Utc>) -> bool {
    matches!(token_status_at(raw, now), TokenStatus::Usable(_))
}

#[cfg(test)]
pub(crate) fn make_token(payload: &str) -> String {
    use base64::engine::general_purpose::STANDARD;
    format!("h.{}.s", STANDARD.encode(payload))
}
