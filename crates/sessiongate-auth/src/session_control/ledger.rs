//! Per-user ledger of admitted sessions.
//!
//! Sessions are keyed by username in a sharded [`DashMap`]. Every operation
//! on one user runs inside that user's shard lock, so prune, compare, and
//! insert happen as a single step while unrelated users proceed in parallel.
//!
//! A username is present in the map only while it holds at least one
//! session. Expired sessions are dropped lazily by whichever operation
//! touches the user next.

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use serde::{Deserialize, Serialize};

use sessiongate_core::types::{DecodedToken, SessionLimit};

/// One admitted session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveSession {
    /// The raw bearer token; its identity within the ledger.
    pub token: String,
    /// Expiry decoded from the token, `None` if it never expires.
    pub expires_at: Option<DateTime<Utc>>,
    /// When the session was admitted.
    pub admitted_at: DateTime<Utc>,
}

impl ActiveSession {
    /// Creates a session record for a decoded token admitted at `now`.
    pub fn new(token: &str, decoded: &DecodedToken, now: DateTime<Utc>) -> Self {
        Self {
            token: token.to_string(),
            expires_at: decoded.expires_at,
            admitted_at: now,
        }
    }

    /// Whether the session has expired at `now`. Expiry is inclusive.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|exp| exp <= now)
    }
}

/// Outcome of a single admission attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdmissionDecision {
    /// Whether the session was recorded.
    pub admitted: bool,
    /// Active sessions for the user once the decision was applied.
    pub active: usize,
    /// Expired sessions dropped while deciding.
    pub reclaimed: usize,
}

/// Aggregate ledger figures for diagnostics.
///
/// Counts may include expired sessions that no operation has pruned yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerStats {
    /// Users holding at least one session.
    pub users: usize,
    /// Sessions across all users.
    pub sessions: usize,
}

/// Concurrency-safe map from username to its admitted sessions.
#[derive(Debug, Default)]
pub struct SessionLedger {
    sessions: DashMap<String, Vec<ActiveSession>>,
}

/// Drops every session expired at `now`, returning how many were removed.
fn prune(sessions: &mut Vec<ActiveSession>, now: DateTime<Utc>) -> usize {
    let before = sessions.len();
    sessions.retain(|session| !session.is_expired_at(now));
    before - sessions.len()
}

impl SessionLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Prunes `username`, then records `session` if `limit` admits one more.
    ///
    /// A rejected attempt changes nothing beyond the pruning.
    pub fn try_admit(
        &self,
        username: &str,
        session: ActiveSession,
        limit: SessionLimit,
        now: DateTime<Utc>,
    ) -> AdmissionDecision {
        match self.sessions.entry(username.to_string()) {
            Entry::Occupied(mut entry) => {
                let reclaimed = prune(entry.get_mut(), now);
                let active = entry.get().len();

                if limit.admits(active) {
                    entry.get_mut().push(session);
                    AdmissionDecision {
                        admitted: true,
                        active: active + 1,
                        reclaimed,
                    }
                } else {
                    if active == 0 {
                        entry.remove();
                    }
                    AdmissionDecision {
                        admitted: false,
                        active,
                        reclaimed,
                    }
                }
            }
            Entry::Vacant(entry) => {
                let admitted = limit.admits(0);
                if admitted {
                    entry.insert(vec![session]);
                }
                AdmissionDecision {
                    admitted,
                    active: usize::from(admitted),
                    reclaimed: 0,
                }
            }
        }
    }

    /// Removes every session of `username` identified by `token`.
    ///
    /// Also prunes the user's expired sessions and drops the user once
    /// nothing is left. Returns the number of sessions ended; ending an
    /// unknown session is a no-op.
    pub fn end(&self, username: &str, token: &str, now: DateTime<Utc>) -> usize {
        let mut ended = 0;
        self.sessions.remove_if_mut(username, |_, sessions| {
            let before = sessions.len();
            sessions.retain(|session| session.token != token);
            ended = before - sessions.len();
            prune(sessions, now);
            sessions.is_empty()
        });
        ended
    }

    /// Prunes `username` and returns its remaining session count, or `None`
    /// when the user holds no sessions.
    pub fn count(&self, username: &str, now: DateTime<Utc>) -> Option<usize> {
        let mut remaining = None;
        self.sessions.remove_if_mut(username, |_, sessions| {
            prune(sessions, now);
            if !sessions.is_empty() {
                remaining = Some(sessions.len());
            }
            sessions.is_empty()
        });
        remaining
    }

    /// Prunes every user, dropping users left without sessions.
    ///
    /// Returns the number of sessions removed.
    pub fn purge_expired(&self, now: DateTime<Utc>) -> usize {
        let mut removed = 0;
        self.sessions.retain(|_, sessions| {
            removed += prune(sessions, now);
            !sessions.is_empty()
        });
        removed
    }

    /// Current aggregate figures.
    pub fn stats(&self) -> LedgerStats {
        self.sessions
            .iter()
            .fold(LedgerStats::default(), |mut stats, entry| {
                stats.users += 1;
                stats.sessions += entry.value().len();
                stats
            })
    }

    /// Forgets every session.
    pub fn clear(&self) {
        self.sessions.clear();
    }
}
