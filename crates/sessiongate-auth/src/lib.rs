//! # sessiongate-auth
//!
//! Concurrent session admission control for gateway authentication filters.
//!
//! ## Modules
//!
//! - `jwt`: bearer token decoding into subject and expiry
//! - `session_control`: limit resolution, the session ledger, verifiers,
//!   and the expired-session sweeper

pub mod jwt;
pub mod session_control;

pub use jwt::{Claims, JwtDecoder};
pub use session_control::{
    ActiveSession, ExpiredSessionSweeper, InMemorySessionVerifier, LedgerStats, SessionLedger,
    SessionVerifierDispatch, UnlimitedSessionVerifier, resolve_limit,
};
