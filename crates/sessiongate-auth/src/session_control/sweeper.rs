//! Periodic removal of expired sessions.
//!
//! Admission decisions never depend on this: every ledger operation prunes
//! the user it touches. The sweep only releases memory held by users who
//! stop making requests.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio::sync::watch;
use tokio::time;

use sessiongate_core::config::SessionControlConfig;

use super::ledger::SessionLedger;

/// Background task that purges expired sessions from a ledger.
#[derive(Debug)]
pub struct ExpiredSessionSweeper {
    /// Ledger to sweep.
    ledger: Arc<SessionLedger>,
    /// Time between sweeps.
    interval: Duration,
}

impl ExpiredSessionSweeper {
    /// Create a sweeper running every `interval_seconds` (at least one).
    pub fn new(ledger: Arc<SessionLedger>, interval_seconds: u64) -> Self {
        Self {
            ledger,
            interval: Duration::from_secs(interval_seconds.max(1)),
        }
    }

    /// Create a sweeper from configuration, or `None` when sweeping is off.
    pub fn from_config(ledger: Arc<SessionLedger>, config: &SessionControlConfig) -> Option<Self> {
        (config.cleanup_interval_seconds > 0)
            .then(|| Self::new(ledger, config.cleanup_interval_seconds))
    }

    /// Run one sweep, returning the number of sessions removed.
    pub fn sweep_once(&self) -> usize {
        let removed = self.ledger.purge_expired(Utc::now());
        if removed > 0 {
            tracing::debug!(removed, "Purged expired sessions");
        } else {
            tracing::trace!("No expired sessions to purge");
        }
        removed
    }

    /// Start the sweep loop (runs until the cancel signal is received)
    pub async fn run(&self, mut cancel: watch::Receiver<bool>) {
        tracing::info!(
            "Expired session sweeper started, interval={}s",
            self.interval.as_secs()
        );

        let mut interval = time::interval(self.interval);

        loop {
            tokio::select! {
                _ = interval.tick() => {
                    self.sweep_once();
                }
                _ = cancel.changed() => {
                    if *cancel.borrow() {
                        tracing::info!("Expired session sweeper shutting down");
                        break;
                    }
                }
            }
        }
    }
}
