//! Verifier selection from configuration.

use std::sync::Arc;

use sessiongate_core::config::SessionControlConfig;
use sessiongate_core::result::AppResult;
use sessiongate_core::traits::{SessionVerifier, TokenAuthority};

use super::ledger::SessionLedger;
use super::unlimited::UnlimitedSessionVerifier;
use super::verifier::InMemorySessionVerifier;

/// Dispatcher for session verifier strategies.
///
/// The strategy is fixed at construction from `enabled`; later calls to
/// `initialize` reload limits but do not switch strategy.
#[derive(Debug)]
pub enum SessionVerifierDispatch {
    /// Per-user limits enforced in memory.
    InMemory(InMemorySessionVerifier),
    /// Limits switched off.
    Unlimited(UnlimitedSessionVerifier),
}

impl SessionVerifierDispatch {
    /// Builds and initializes the verifier selected by `config`.
    pub fn new(
        config: &SessionControlConfig,
        authority: Arc<dyn TokenAuthority>,
    ) -> AppResult<Self> {
        if config.enabled {
            let verifier = InMemorySessionVerifier::with_config(authority, config)?;
            Ok(Self::InMemory(verifier))
        } else {
            tracing::info!("Concurrent session limits disabled");
            Ok(Self::Unlimited(UnlimitedSessionVerifier::new()))
        }
    }

    /// The backing ledger, if this strategy keeps one.
    pub fn ledger(&self) -> Option<Arc<SessionLedger>> {
        match self {
            Self::InMemory(inner) => Some(inner.ledger()),
            Self::Unlimited(_) => None,
        }
    }
}

impl SessionVerifier for SessionVerifierDispatch {
    fn initialize(&self, config: &SessionControlConfig) -> AppResult<()> {
        match self {
            Self::InMemory(inner) => inner.initialize(config),
            Self::Unlimited(inner) => inner.initialize(config),
        }
    }

    fn verify_session_for_user(&self, username: &str, token: &str) -> AppResult<bool> {
        match self {
            Self::InMemory(inner) => inner.verify_session_for_user(username, token),
            Self::Unlimited(inner) => inner.verify_session_for_user(username, token),
        }
    }

    fn session_ended_for_user(&self, username: &str, token: &str) {
        match self {
            Self::InMemory(inner) => inner.session_ended_for_user(username, token),
            Self::Unlimited(inner) => inner.session_ended_for_user(username, token),
        }
    }

    fn user_concurrent_session_count(&self, username: &str) -> AppResult<Option<usize>> {
        match self {
            Self::InMemory(inner) => inner.user_concurrent_session_count(username),
            Self::Unlimited(inner) => inner.user_concurrent_session_count(username),
        }
    }
}
