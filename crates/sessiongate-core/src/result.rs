//! Convenience result type alias for SessionGate.

use crate::error::AppError;

/// A specialized `Result` type for SessionGate operations.
pub type AppResult<T> = Result<T, AppError>;
