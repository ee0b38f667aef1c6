#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{collections::BTreeMap, fmt::Display};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
/// Outcome of a single executed test case, as reported by a backend.
pub enum CaseStatus {
    /// The test case passed.
    Passed,
    /// The test case failed.
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// One frame of a recorded exception backtrace.
pub struct StackFrame {
    /// Class the frame executes in.
    pub declaring_class: String,
    /// Method the frame executes in.
    pub method_name:     String,
    /// Source file, when the runtime knows it.
    #[serde(default)]
    pub file_name:       Option<String>,
    /// 1-based source line, when the runtime knows it.
    #[serde(default)]
    pub line_number:     Option<u32>,
}

impl Display for StackFrame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.file_name, self.line_number) {
            (Some(file), Some(line)) => {
                write!(f, "{}.{}({file}:{line})", self.declaring_class, self.method_name)
            }
            (Some(file), None) => {
                write!(f, "{}.{}({file})", self.declaring_class, self.method_name)
            }
            _ => write!(f, "{}.{}(Unknown Source)", self.declaring_class, self.method_name),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Exception attached to a failed test-case record.
pub struct CaughtException {
    /// Backtrace frames, innermost first.
    #[serde(default)]
    pub stack_trace: Vec<StackFrame>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Raw, untrusted per-test record as written by a backend's test runner.
/// One record per executed test; decoded with decode-or-fail semantics.
pub struct TestCase {
    /// Class the test method belongs to.
    pub class_name:  String,
    /// Name of the test method.
    pub method_name: String,
    /// Whether the test passed or failed.
    pub status:      CaseStatus,
    /// Failure message, when the backend recorded one.
    #[serde(default)]
    pub message:     Option<String>,
    /// Point labels attached to the test, in the runner's order.
    #[serde(default)]
    pub point_names: Vec<String>,
    /// Exception recorded for the failure, when one was thrown.
    #[serde(default)]
    pub exception:   Option<CaughtException>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Normalized outcome of a single test, part of a [`RunResult`].
pub struct TestResult {
    /// Canonical name, `<className> <methodName>`.
    pub name:          String,
    /// Whether the test passed.
    pub passed:        bool,
    /// Point labels the test awards when passing, in source order.
    pub points:        Vec<String>,
    /// Failure message; empty when there is none.
    pub error_message: String,
    /// Rendered backtrace frames; empty when the test passed or no
    /// exception was recorded.
    pub backtrace:     Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
/// Overall status of one grading run.
pub enum RunStatus {
    /// Every executed test passed.
    Passed,
    /// At least one executed test failed.
    TestsFailed,
    /// The backend's build step failed before any test ran.
    CompileFailed,
    /// The test-runner child crashed or left no decodable results.
    TestrunInterrupted,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Canonical outcome of executing an exercise's tests.
pub struct RunResult {
    /// Overall run status.
    pub status:       RunStatus,
    /// Per-test outcomes in execution order. Always empty for
    /// [`RunStatus::CompileFailed`] and [`RunStatus::TestrunInterrupted`].
    pub test_results: Vec<TestResult>,
    /// Raw log payloads keyed by log kind, e.g.
    /// [`COMPILER_OUTPUT`](crate::constants::COMPILER_OUTPUT).
    pub logs:         BTreeMap<String, Vec<u8>>,
}

impl RunResult {
    /// Creates a new run result.
    pub fn new(
        status: RunStatus,
        test_results: Vec<TestResult>,
        logs: BTreeMap<String, Vec<u8>>,
    ) -> Self {
        Self {
            status,
            test_results,
            logs,
        }
    }
}
