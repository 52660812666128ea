//! JWT claims read from gateway bearer tokens.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use sessiongate_core::error::AppError;
use sessiongate_core::types::DecodedToken;

/// Claims payload consumed by the session verifier.
///
/// Only `sub` is mandatory. A token without `exp` never expires.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the username.
    pub sub: String,
    /// Expiration timestamp (seconds since epoch).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
    /// Issued-at timestamp (seconds since epoch).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
    /// Issuer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iss: Option<String>,
}

impl Claims {
    /// Returns the expiration as a `DateTime<Utc>`, if the token has one.
    pub fn expires_at(&self) -> Result<Option<DateTime<Utc>>, AppError> {
        match self.exp {
            None => Ok(None),
            Some(exp) => DateTime::from_timestamp(exp, 0)
                .map(Some)
                .ok_or_else(|| AppError::malformed_token(format!("Expiry {exp} is out of range"))),
        }
    }

    /// Reduces the claims to the subject and expiry tracked by the ledger.
    pub fn into_decoded(self) -> Result<DecodedToken, AppError> {
        if self.sub.trim().is_empty() {
            return Err(AppError::malformed_token("Token subject is empty"));
        }
        let expires_at = self.expires_at()?;
        Ok(DecodedToken {
            subject: self.sub,
            expires_at,
        })
    }
}
