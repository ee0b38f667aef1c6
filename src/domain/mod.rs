#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! Canonical value types shared by every backend: exercise descriptions,
//! raw test-case records, normalized run results, and style-check findings.
//!
//! All of these are plain immutable values, created fresh per invocation and
//! handed by value between pipeline stages. Nothing in here touches the
//! filesystem or spawns processes.

/// Exercise and test descriptions produced by scanning.
pub mod exercise;
/// Raw test-case records and the normalized run-result model.
pub mod run;
/// Style-check findings grouped per source file.
pub mod validation;

pub use exercise::{ExerciseDesc, TestDesc};
pub use run::{CaseStatus, CaughtException, RunResult, RunStatus, StackFrame, TestCase, TestResult};
pub use validation::{ValidationError, ValidationResult};
