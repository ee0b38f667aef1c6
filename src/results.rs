#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! Normalization of raw backend test records into canonical run results.
//!
//! Backends hand over a sequence of [`TestCase`] records -- either in memory
//! or as a JSON results file written by an external runner -- and get back a
//! [`RunResult`]. Expected grading outcomes (failed tests, crashed runners)
//! are always represented as data here, never as errors.

use std::{collections::BTreeMap, fs, path::Path};

use tracing::warn;

use crate::{
    constants::COMPILER_OUTPUT,
    domain::{CaseStatus, RunResult, RunStatus, TestCase, TestResult},
};

/// Converts a sequence of raw test-case records into a run result.
///
/// Record order is preserved. The overall status is
/// [`RunStatus::Passed`] only when every record passed.
pub fn parse_test_cases(cases: &[TestCase]) -> RunResult {
    let mut test_results = Vec::with_capacity(cases.len());
    let mut all_passed = true;

    for case in cases {
        if case.status == CaseStatus::Failed {
            all_passed = false;
        }
        test_results.push(convert_case(case));
    }

    let status = if all_passed {
        RunStatus::Passed
    } else {
        RunStatus::TestsFailed
    };

    RunResult::new(status, test_results, BTreeMap::new())
}

/// Reads and decodes a results file written by an external test runner.
///
/// Any read or decode failure yields [`RunStatus::TestrunInterrupted`] with
/// empty test results and empty logs: the expected failure mode is a runner
/// child that died before writing well-formed results (for instance because
/// the tested code terminated the process), and the core never invents a
/// plausible but wrong result in its place. Malformed payloads are a total
/// failure -- there is no per-record skipping.
pub fn parse_results_file(results_file: &Path) -> RunResult {
    let contents = match fs::read_to_string(results_file) {
        Ok(contents) => contents,
        Err(e) => {
            warn!("could not read results from {}: {e}", results_file.display());
            return interrupted();
        }
    };

    match serde_json::from_str::<Vec<TestCase>>(&contents) {
        Ok(cases) => parse_test_cases(&cases),
        Err(e) => {
            warn!("could not decode results from {}: {e}", results_file.display());
            interrupted()
        }
    }
}

/// Constructs the run result for a build that failed before any test ran.
/// The build output lands under the compiler-output log key.
pub fn compile_failure(build_output: Vec<u8>) -> RunResult {
    let mut logs = BTreeMap::new();
    logs.insert(COMPILER_OUTPUT.to_string(), build_output);
    RunResult::new(RunStatus::CompileFailed, Vec::new(), logs)
}

/// The result standing in for a crashed or abnormally exited runner.
fn interrupted() -> RunResult {
    RunResult::new(RunStatus::TestrunInterrupted, Vec::new(), BTreeMap::new())
}

/// Derives one normalized test result from a raw record.
fn convert_case(case: &TestCase) -> TestResult {
    let backtrace = case
        .exception
        .as_ref()
        .map(|exception| {
            exception
                .stack_trace
                .iter()
                .map(|frame| frame.to_string())
                .collect()
        })
        .unwrap_or_default();

    TestResult {
        name: format!("{} {}", case.class_name, case.method_name),
        passed: case.status == CaseStatus::Passed,
        points: case.point_names.clone(),
        error_message: case.message.clone().unwrap_or_default(),
        backtrace,
    }
}
