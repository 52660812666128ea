//! # sessiongate-core
//!
//! Core crate for SessionGate. Contains the seam traits, configuration
//! schemas, the session limit and decoded token types, and the unified
//! error system.
//!
//! This crate has **no** internal dependencies on other SessionGate crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
