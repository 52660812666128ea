//! Concurrent session control configuration.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Concurrent session control configuration.
///
/// The two cohorts are plain membership sets and may overlap. Limits are
/// signed; a negative limit means unlimited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionControlConfig {
    /// Whether per-user session limits are enforced at all.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Usernames in the privileged cohort.
    #[serde(default)]
    pub privileged_users: HashSet<String>,
    /// Usernames in the non-privileged cohort.
    #[serde(default)]
    pub non_privileged_users: HashSet<String>,
    /// Concurrent session cap for privileged users.
    #[serde(default = "default_privileged_limit")]
    pub privileged_users_limit: i64,
    /// Concurrent session cap for non-privileged users.
    #[serde(default = "default_non_privileged_limit")]
    pub non_privileged_users_limit: i64,
    /// Interval of the background expired-session sweep. `0` disables it.
    #[serde(default = "default_cleanup_interval")]
    pub cleanup_interval_seconds: u64,
}

impl Default for SessionControlConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            privileged_users: HashSet::new(),
            non_privileged_users: HashSet::new(),
            privileged_users_limit: default_privileged_limit(),
            non_privileged_users_limit: default_non_privileged_limit(),
            cleanup_interval_seconds: default_cleanup_interval(),
        }
    }
}

impl SessionControlConfig {
    /// Rejects blank usernames in either cohort.
    pub fn validate(&self) -> Result<(), AppError> {
        let blank = self
            .privileged_users
            .iter()
            .chain(self.non_privileged_users.iter())
            .any(|name| name.trim().is_empty());

        if blank {
            return Err(AppError::configuration(
                "Session control user lists must not contain blank usernames",
            ));
        }
        Ok(())
    }
}

fn default_true() -> bool {
    true
}

fn default_privileged_limit() -> i64 {
    3
}

fn default_non_privileged_limit() -> i64 {
    2
}

fn default_cleanup_interval() -> u64 {
    1800
}
