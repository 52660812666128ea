//! Token authority trait for reading bearer token payloads.

use crate::result::AppResult;
use crate::types::token::DecodedToken;

/// Decodes bearer tokens into the subject and expiry the verifier tracks.
///
/// The verifier trusts whatever an implementation returns; any signature
/// checking belongs here, not in the session ledger.
pub trait TokenAuthority: Send + Sync + 'static {
    /// Decode `token`, failing with a `MalformedToken` error when the token
    /// cannot be read.
    fn decode(&self, token: &str) -> AppResult<DecodedToken>;
}
