//! Token decoding configuration.

use serde::{Deserialize, Serialize};

/// Settings for decoding bearer tokens handed to the verifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for HS256 signature checks.
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    /// Check the signature before trusting the payload. Disable only when an
    /// upstream filter has already verified the token.
    #[serde(default = "default_true")]
    pub verify_signature: bool,
    /// Required `iss` claim, if any.
    #[serde(default)]
    pub issuer: Option<String>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: default_jwt_secret(),
            verify_signature: true,
            issuer: None,
        }
    }
}

fn default_jwt_secret() -> String {
    "CHANGE_ME_IN_PRODUCTION".to_string()
}

fn default_true() -> bool {
    true
}
