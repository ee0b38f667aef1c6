#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! Environment-driven configuration for grading runs.
//!
//! The binary loads `.env` files via `dotenvy` before any of this is read,
//! so both real environment variables and checked-in `.env` entries work.

use std::env;

use crate::constants::DEFAULT_ANT_TARGET;

/// Environment variable holding a single extra JVM option passed to the
/// external test runner, e.g. `-Xmx256m`.
pub const JVM_ARGS_ENV: &str = "RUBRIC_JVM_ARGS";

/// Environment variable overriding the Ant build target.
pub const ANT_TARGET_ENV: &str = "RUBRIC_ANT_TARGET";

#[derive(Debug, Clone)]
/// Runtime knobs for a grading run.
pub struct RunnerConfig {
    /// Optional runtime option token inserted verbatim into the runner
    /// argument vector, directly after the program token.
    pub jvm_args:   Option<String>,
    /// Ant target used to build an exercise and its tests.
    pub ant_target: String,
}

impl RunnerConfig {
    /// Reads the configuration from the process environment, applying
    /// defaults for anything unset or empty.
    pub fn from_env() -> Self {
        let non_empty = |name: &str| env::var(name).ok().filter(|value| !value.trim().is_empty());

        Self {
            jvm_args:   non_empty(JVM_ARGS_ENV),
            ant_target: non_empty(ANT_TARGET_ENV).unwrap_or_else(|| DEFAULT_ANT_TARGET.to_string()),
        }
    }
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            jvm_args:   None,
            ant_target: DEFAULT_ANT_TARGET.to_string(),
        }
    }
}
