//! In-memory session verifier.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use tracing::{debug, info, warn};

use sessiongate_core::config::SessionControlConfig;
use sessiongate_core::error::AppError;
use sessiongate_core::result::AppResult;
use sessiongate_core::traits::{SessionVerifier, TokenAuthority};
use sessiongate_core::types::SessionLimit;

use super::ledger::{ActiveSession, SessionLedger};
use super::resolver::resolve_limit;

/// Enforces per-user concurrent session limits in process memory.
///
/// Configuration is held as a shared snapshot and swapped wholesale on
/// [`initialize`](SessionVerifier::initialize); each decision reads the
/// snapshot once, so a concurrent reload never splits a decision.
pub struct InMemorySessionVerifier {
    /// Current configuration snapshot, `None` until initialized.
    config: RwLock<Option<Arc<SessionControlConfig>>>,
    /// Admitted sessions per user.
    ledger: Arc<SessionLedger>,
    /// Decodes tokens into subject and expiry.
    authority: Arc<dyn TokenAuthority>,
}

impl std::fmt::Debug for InMemorySessionVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemorySessionVerifier")
            .field("initialized", &self.config.read().is_some())
            .field("ledger", &self.ledger.stats())
            .finish()
    }
}

impl InMemorySessionVerifier {
    /// Creates an uninitialized verifier.
    pub fn new(authority: Arc<dyn TokenAuthority>) -> Self {
        Self {
            config: RwLock::new(None),
            ledger: Arc::new(SessionLedger::new()),
            authority,
        }
    }

    /// Creates a verifier and initializes it with `config`.
    pub fn with_config(
        authority: Arc<dyn TokenAuthority>,
        config: &SessionControlConfig,
    ) -> AppResult<Self> {
        let verifier = Self::new(authority);
        verifier.initialize(config)?;
        Ok(verifier)
    }

    /// The ledger backing this verifier, for sweeping and diagnostics.
    pub fn ledger(&self) -> Arc<SessionLedger> {
        Arc::clone(&self.ledger)
    }

    /// Effective limit for `username` under the current configuration.
    pub fn effective_limit(&self, username: &str) -> AppResult<SessionLimit> {
        let config = self.current_config()?;
        Ok(resolve_limit(username, &config))
    }

    /// Drops every tracked session and the loaded configuration.
    ///
    /// Until `initialize` is called again, `verify` and `count` fail with an
    /// initialization error.
    pub fn shutdown(&self) {
        *self.config.write() = None;
        self.ledger.clear();
        info!("Session verifier shut down");
    }

    fn current_config(&self) -> AppResult<Arc<SessionControlConfig>> {
        self.config
            .read()
            .clone()
            .ok_or_else(|| AppError::initialization("Session verifier has not been initialized"))
    }

    pub(crate) fn verify_at(&self, username: &str, token: &str, now: DateTime<Utc>) -> AppResult<bool> {
        let config = self.current_config()?;
        let decoded = self.authority.decode(token)?;

        if decoded.subject != username {
            warn!(
                username = %username,
                subject = %decoded.subject,
                "Token subject does not match the session user"
            );
        }

        let limit = resolve_limit(username, &config);
        let session = ActiveSession::new(token, &decoded, now);
        let decision = self.ledger.try_admit(username, session, limit, now);

        if decision.reclaimed > 0 {
            debug!(
                username = %username,
                reclaimed = decision.reclaimed,
                "Reclaimed expired sessions"
            );
        }

        if decision.admitted {
            debug!(
                username = %username,
                active = decision.active,
                limit = %limit,
                "Session admitted"
            );
        } else {
            info!(
                username = %username,
                active = decision.active,
                limit = %limit,
                "Concurrent session limit reached, session rejected"
            );
        }

        Ok(decision.admitted)
    }

    pub(crate) fn end_at(&self, username: &str, token: &str, now: DateTime<Utc>) {
        let ended = self.ledger.end(username, token, now);
        if ended > 0 {
            debug!(username = %username, ended, "Session ended");
        }
    }

    pub(crate) fn count_at(&self, username: &str, now: DateTime<Utc>) -> AppResult<Option<usize>> {
        self.current_config()?;
        Ok(self.ledger.count(username, now))
    }
}

impl SessionVerifier for InMemorySessionVerifier {
    fn initialize(&self, config: &SessionControlConfig) -> AppResult<()> {
        config.validate()?;
        *self.config.write() = Some(Arc::new(config.clone()));

        info!(
            privileged_users = config.privileged_users.len(),
            non_privileged_users = config.non_privileged_users.len(),
            privileged_limit = config.privileged_users_limit,
            non_privileged_limit = config.non_privileged_users_limit,
            "Session control configuration loaded"
        );
        Ok(())
    }

    fn verify_session_for_user(&self, username: &str, token: &str) -> AppResult<bool> {
        self.verify_at(username, token, Utc::now())
    }

    fn session_ended_for_user(&self, username: &str, token: &str) {
        self.end_at(username, token, Utc::now());
    }

    fn user_concurrent_session_count(&self, username: &str) -> AppResult<Option<usize>> {
        self.count_at(username, Utc::now())
    }
}
