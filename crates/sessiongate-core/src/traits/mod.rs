//! Core traits defined in `sessiongate-core` and implemented by other crates.

pub mod session_verifier;
pub mod token_authority;

pub use session_verifier::SessionVerifier;
pub use token_authority::TokenAuthority;
