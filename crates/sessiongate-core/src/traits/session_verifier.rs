//! Session verifier trait consumed by authentication filters.

use crate::config::SessionControlConfig;
use crate::result::AppResult;

/// Per-user concurrent session admission control.
///
/// Implementations must be safe to call from many request threads at once
/// and must make each `verify_session_for_user` decision atomic per user.
pub trait SessionVerifier: Send + Sync + 'static {
    /// Load or reload the session control configuration.
    ///
    /// Calls already past their configuration read are unaffected.
    fn initialize(&self, config: &SessionControlConfig) -> AppResult<()>;

    /// Decide whether `token` may open another session for `username`.
    ///
    /// Returns `Ok(false)` when the user's quota is exhausted. Errors are
    /// reserved for malformed tokens and use before initialization.
    fn verify_session_for_user(&self, username: &str, token: &str) -> AppResult<bool>;

    /// Forget the session opened with `token`. Unknown sessions are ignored.
    fn session_ended_for_user(&self, username: &str, token: &str);

    /// Number of active sessions for `username`, or `None` when it has none.
    fn user_concurrent_session_count(&self, username: &str) -> AppResult<Option<usize>>;
}
