//! # rubric
//!
//! A language-agnostic exercise grader: discovers exercise projects, runs
//! their backend build/test process, normalizes the output into a canonical
//! run result with per-test point awards, optionally style-checks, and
//! prepares stub/solution variants for distribution.

#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// The Ant/Java backend plugin
pub mod ant;
/// Stub and solution preparation for distributable exercises
pub mod builder;
/// The Cargo/Rust backend plugin
pub mod cargo;
/// Environment-driven configuration for grading runs
pub mod config;
/// A module defining a bunch of constant values to be used throughout
pub mod constants;
/// Canonical value types for exercises, tests, and run results
pub mod domain;
/// The language plugin contract and exercise discovery
pub mod plugin;
/// Student-file classification policies
pub mod policy;
/// Blocking child-process execution helpers
pub mod process;
/// Normalization of raw backend test records into run results
pub mod results;
/// The argument protocol for the external test-runner process
pub mod runner;
/// The style-checker collaborator seam
pub mod style;
/// Toolchain discovery and filesystem helpers
pub mod util;

/// Capture-name to capture-text mappings returned by tree-sitter queries.
pub(crate) type Dict = std::collections::HashMap<String, String>;

use plugin::LanguagePlugin;

/// Every backend this build knows about, in detection order.
pub fn plugins() -> Vec<Box<dyn LanguagePlugin>> {
    vec![Box::new(ant::AntPlugin::new()), Box::new(cargo::CargoPlugin::new())]
}

/// Selects the first backend whose project-type detection accepts `path`.
pub fn plugin_for(path: &std::path::Path) -> Option<Box<dyn LanguagePlugin>> {
    plugins()
        .into_iter()
        .find(|plugin| plugin.is_exercise_type_correct(path))
}
