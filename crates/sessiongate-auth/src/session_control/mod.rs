//! Concurrent session admission control.
//!
//! The [`resolver`] maps a username to its effective limit against the
//! current configuration, and the [`ledger`] tracks admitted sessions per
//! user with lazy expiry pruning. The verifiers put the two together behind
//! the [`SessionVerifier`](sessiongate_core::traits::SessionVerifier) trait.

pub mod dispatch;
pub mod ledger;
pub mod resolver;
pub mod sweeper;
pub mod unlimited;
pub mod verifier;

pub use dispatch::SessionVerifierDispatch;
pub use ledger::{ActiveSession, AdmissionDecision, LedgerStats, SessionLedger};
pub use resolver::resolve_limit;
pub use sweeper::ExpiredSessionSweeper;
pub use unlimited::UnlimitedSessionVerifier;
pub use verifier::InMemorySessionVerifier;
