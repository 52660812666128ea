//! Decoded bearer token payload.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The two facts the session ledger needs from a bearer token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodedToken {
    /// Subject username the token was issued to.
    pub subject: String,
    /// Expiry instant, or `None` when the token never expires.
    pub expires_at: Option<DateTime<Utc>>,
}

impl DecodedToken {
    /// Whether the token has expired at `now`. Expiry is inclusive.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|exp| exp <= now)
    }
}
