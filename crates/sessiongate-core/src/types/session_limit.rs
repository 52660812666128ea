//! Effective concurrent-session limit types.

use serde::{Deserialize, Serialize};

/// Effective concurrent-session cap for one user.
///
/// Configured limits are signed: any negative value means unlimited, while
/// zero is a real cap that admits nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionLimit {
    /// At most this many concurrently active sessions.
    Fixed(u32),
    /// No cap is enforced.
    Unlimited,
}

impl SessionLimit {
    /// Convert a configured signed limit. Negative means unlimited.
    pub fn from_configured(value: i64) -> Self {
        if value < 0 {
            Self::Unlimited
        } else {
            Self::Fixed(u32::try_from(value).unwrap_or(u32::MAX))
        }
    }

    /// Whether one more session may be admitted on top of `active_count`.
    pub fn admits(&self, active_count: usize) -> bool {
        match self {
            Self::Fixed(max) => active_count < *max as usize,
            Self::Unlimited => true,
        }
    }

    /// The tighter of two limits. A fixed cap always beats unlimited.
    pub fn most_restrictive(self, other: Self) -> Self {
        match (self, other) {
            (Self::Fixed(a), Self::Fixed(b)) => Self::Fixed(a.min(b)),
            (Self::Fixed(a), Self::Unlimited) | (Self::Unlimited, Self::Fixed(a)) => Self::Fixed(a),
            (Self::Unlimited, Self::Unlimited) => Self::Unlimited,
        }
    }

    /// Return the numeric limit, or `None` for unlimited.
    pub fn as_max(&self) -> Option<u32> {
        match self {
            Self::Fixed(max) => Some(*max),
            Self::Unlimited => None,
        }
    }
}

impl std::fmt::Display for SessionLimit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fixed(max) => write!(f, "{max}"),
            Self::Unlimited => write!(f, "unlimited"),
        }
    }
}
