//! JWT payload decoding for the session verifier.

use jsonwebtoken::errors::ErrorKind as JwtErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use sessiongate_core::config::AuthConfig;
use sessiongate_core::error::{AppError, ErrorKind};
use sessiongate_core::result::AppResult;
use sessiongate_core::traits::TokenAuthority;
use sessiongate_core::types::DecodedToken;

use super::claims::Claims;

/// Decodes bearer tokens into [`Claims`].
///
/// Expiry is deliberately not validated here: an expired token still
/// decodes, and the session ledger decides what its expiry means.
#[derive(Clone)]
pub struct JwtDecoder {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.validate_aud = false;
        validation.required_spec_claims.clear();

        if let Some(issuer) = &config.issuer {
            validation.set_issuer(&[issuer]);
        }
        if !config.verify_signature {
            validation.insecure_disable_signature_validation();
        }

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }

    /// Decodes a token string into its claims.
    pub fn decode_claims(&self, token: &str) -> AppResult<Claims> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| {
                let message = match e.kind() {
                    JwtErrorKind::InvalidToken => "Invalid token format".to_string(),
                    JwtErrorKind::InvalidSignature => "Invalid token signature".to_string(),
                    JwtErrorKind::InvalidIssuer => "Unexpected token issuer".to_string(),
                    JwtErrorKind::InvalidAlgorithm => "Unsupported token algorithm".to_string(),
                    JwtErrorKind::Base64(_) | JwtErrorKind::Json(_) | JwtErrorKind::Utf8(_) => {
                        "Invalid token payload".to_string()
                    }
                    _ => format!("Token decoding failed: {e}"),
                };
                AppError::with_source(ErrorKind::MalformedToken, message, e)
            })?;

        Ok(token_data.claims)
    }
}

impl TokenAuthority for JwtDecoder {
    fn decode(&self, token: &str) -> AppResult<DecodedToken> {
        self.decode_claims(token)?.into_decoded()
    }
}
