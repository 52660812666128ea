//! Verifier used when session limits are switched off.

use tracing::debug;

use sessiongate_core::config::SessionControlConfig;
use sessiongate_core::result::AppResult;
use sessiongate_core::traits::SessionVerifier;

/// Admits every session and tracks nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnlimitedSessionVerifier;

impl UnlimitedSessionVerifier {
    /// Creates the verifier.
    pub fn new() -> Self {
        Self
    }
}

impl SessionVerifier for UnlimitedSessionVerifier {
    fn initialize(&self, _config: &SessionControlConfig) -> AppResult<()> {
        debug!("Session limits disabled, ignoring configuration");
        Ok(())
    }

    fn verify_session_for_user(&self, _username: &str, _token: &str) -> AppResult<bool> {
        Ok(true)
    }

    fn session_ended_for_user(&self, _username: &str, _token: &str) {}

    fn user_concurrent_session_count(&self, _username: &str) -> AppResult<Option<usize>> {
        Ok(None)
    }
}
