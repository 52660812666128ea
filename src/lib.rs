//! # sessiongate
//!
//! Per-user concurrent session admission control for API gateway
//! authentication filters.
//!
//! An authentication filter calls
//! [`SessionVerifier::verify_session_for_user`] once a bearer token has been
//! validated, [`SessionVerifier::session_ended_for_user`] when it sees the
//! session end, and may query
//! [`SessionVerifier::user_concurrent_session_count`] for diagnostics.
//! Sessions whose token expiry has passed stop counting on their own.

pub mod telemetry;

use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;

pub use sessiongate_auth::{
    ActiveSession, Claims, ExpiredSessionSweeper, InMemorySessionVerifier, JwtDecoder,
    LedgerStats, SessionLedger, SessionVerifierDispatch, UnlimitedSessionVerifier, resolve_limit,
};
pub use sessiongate_core::config::{AppConfig, AuthConfig, LoggingConfig, SessionControlConfig};
pub use sessiongate_core::error::{AppError, ErrorKind};
pub use sessiongate_core::result::AppResult;
pub use sessiongate_core::traits::{SessionVerifier, TokenAuthority};
pub use sessiongate_core::types::{DecodedToken, SessionLimit};

/// Builds the verifier selected by `config`, decoding tokens with a
/// [`JwtDecoder`] configured from `config.auth`.
pub fn build_verifier(config: &AppConfig) -> AppResult<SessionVerifierDispatch> {
    let authority: Arc<dyn TokenAuthority> = Arc::new(JwtDecoder::new(&config.auth));
    SessionVerifierDispatch::new(&config.session_control, authority)
}

/// Spawns the expired-session sweeper for `verifier` on the current Tokio
/// runtime.
///
/// Returns `None` when the verifier keeps no ledger or sweeping is disabled.
pub fn spawn_sweeper(
    verifier: &SessionVerifierDispatch,
    config: &SessionControlConfig,
    cancel: watch::Receiver<bool>,
) -> Option<JoinHandle<()>> {
    let ledger = verifier.ledger()?;
    let sweeper = ExpiredSessionSweeper::from_config(ledger, config)?;
    Some(tokio::spawn(async move { sweeper.run(cancel).await }))
}
