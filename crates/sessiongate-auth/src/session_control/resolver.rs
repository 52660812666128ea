//! Effective session limit resolution.
//!
//! Resolution rules:
//! 1. In neither cohort: unlimited
//! 2. In exactly one cohort: that cohort's limit as configured
//! 3. In both cohorts: the more restrictive limit, where any fixed cap beats
//!    unlimited

use sessiongate_core::config::SessionControlConfig;
use sessiongate_core::types::SessionLimit;

/// Resolves the effective concurrent-session limit for `username`.
///
/// Must be called against the configuration in force for each decision;
/// the result is never cached per user.
pub fn resolve_limit(username: &str, config: &SessionControlConfig) -> SessionLimit {
    let privileged = config.privileged_users.contains(username);
    let non_privileged = config.non_privileged_users.contains(username);

    let privileged_limit = SessionLimit::from_configured(config.privileged_users_limit);
    let non_privileged_limit = SessionLimit::from_configured(config.non_privileged_users_limit);

    match (privileged, non_privileged) {
        (false, false) => SessionLimit::Unlimited,
        (true, false) => privileged_limit,
        (false, true) => non_privileged_limit,
        (true, true) => privileged_limit.most_restrictive(non_privileged_limit),
    }
}
