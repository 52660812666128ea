//! Core type definitions used across the SessionGate workspace.

pub mod session_limit;
pub mod token;

pub use session_limit::SessionLimit;
pub use token::DecodedToken;
