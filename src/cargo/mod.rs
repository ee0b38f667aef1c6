#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! The Cargo/Rust backend.
//!
//! A Cargo exercise is a directory with a `Cargo.toml` regular file at its
//! root (a directory of that name does not count). Tests are run through
//! `cargo test` and its line-oriented harness output is converted into raw
//! test-case records for the shared normalizer; style checks go through
//! `cargo clippy` with JSON diagnostics.

/// Parsers for `cargo test` harness output.
pub mod parsers;

use std::{
    ffi::OsString,
    path::Path,
};

use serde::Deserialize;
use tracing::debug;

use crate::{
    domain::{ExerciseDesc, RunResult, TestDesc, ValidationError, ValidationResult},
    plugin::{EnvironmentError, LanguagePlugin},
    policy::{StudentFilePolicy, first_component_under},
    process::run_collect,
    results,
    style::StyleChecker,
    util,
};

/// Language plugin for Cargo-built Rust exercises.
#[derive(Debug, Clone, Copy, Default)]
pub struct CargoPlugin;

impl CargoPlugin {
    /// Creates the plugin.
    pub fn new() -> Self {
        Self
    }

    /// Name used as the class part of canonical test names: the exercise
    /// directory name.
    fn exercise_class_name(path: &Path) -> String {
        path.file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| "exercise".to_string())
    }
}

impl LanguagePlugin for CargoPlugin {
    fn language_name(&self) -> &'static str {
        "cargo"
    }

    fn is_exercise_type_correct(&self, path: &Path) -> bool {
        path.join("Cargo.toml").is_file()
    }

    fn student_file_policy(&self, _project_root: &Path) -> Box<dyn StudentFilePolicy> {
        Box::new(CargoStudentFilePolicy)
    }

    fn scan_exercise(
        &self,
        path: &Path,
        exercise_name: &str,
    ) -> Result<Option<ExerciseDesc>, EnvironmentError> {
        if !self.is_exercise_type_correct(path) {
            return Ok(None);
        }

        let cargo = util::cargo_path()?;
        let args: Vec<OsString> = ["test", "--", "--list"]
            .into_iter()
            .map(OsString::from)
            .collect();
        let listed = run_collect(&cargo, &args, Some(path))?;
        if !listed.success() {
            return Err(anyhow::anyhow!(
                "cargo could not list tests in {}: {}",
                path.display(),
                String::from_utf8_lossy(&listed.stderr)
            )
            .into());
        }

        let stdout = String::from_utf8_lossy(&listed.stdout);
        let tests = stdout
            .lines()
            .filter_map(|line| parsers::parser::list_line(line).ok())
            .map(|name| TestDesc::new(name, Vec::new()))
            .collect();

        Ok(Some(ExerciseDesc::new(exercise_name, tests)))
    }

    fn run_tests(&self, path: &Path) -> Result<RunResult, EnvironmentError> {
        let cargo = util::cargo_path()?;

        let build_args: Vec<OsString> = ["build"].into_iter().map(OsString::from).collect();
        let build = run_collect(&cargo, &build_args, Some(path))?;
        if !build.success() {
            return Ok(results::compile_failure(build.stderr));
        }

        let test_args: Vec<OsString> = ["test"].into_iter().map(OsString::from).collect();
        let tested = run_collect(&cargo, &test_args, Some(path))?;
        debug!("cargo test exited with {}", tested.status);

        let stdout = String::from_utf8_lossy(&tested.stdout);
        let cases = parsers::collect_test_cases(&stdout, &Self::exercise_class_name(path));

        // A failing exit with no per-test lines means the test targets
        // themselves did not compile.
        if !tested.success() && cases.is_empty() {
            return Ok(results::compile_failure(tested.stderr));
        }

        Ok(results::parse_test_cases(&cases))
    }

    fn check_code_style(
        &self,
        path: &Path,
    ) -> Result<Option<ValidationResult>, EnvironmentError> {
        if !self.is_exercise_type_correct(path) {
            return Ok(None);
        }
        ClippyStyleChecker.check(path).map(Some)
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// Student files in a Cargo exercise live under `src/`; `tests/`, manifest
/// files and build output stay instructor-owned.
pub struct CargoStudentFilePolicy;

impl StudentFilePolicy for CargoStudentFilePolicy {
    fn is_student_file(&self, path: &Path, project_root: &Path) -> bool {
        first_component_under(path, project_root) == Some("src")
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// Style checker backed by `cargo clippy --message-format=json`.
pub struct ClippyStyleChecker;

/// One line of clippy's JSON output; non-diagnostic lines fail to decode
/// and are skipped.
#[derive(Debug, Deserialize)]
struct DiagnosticLine {
    /// Kind of the line, `compiler-message` for diagnostics.
    reason:  String,
    /// The rendered diagnostic, when present.
    message: Option<DiagnosticMessage>,
}

/// The diagnostic payload of a compiler message.
#[derive(Debug, Deserialize)]
struct DiagnosticMessage {
    /// Human-readable description.
    message: String,
    /// `warning`, `error`, `note`, ...
    level:   String,
    /// Source locations; the first primary-ish span is used.
    #[serde(default)]
    spans:   Vec<DiagnosticSpan>,
}

/// One source span of a diagnostic.
#[derive(Debug, Deserialize)]
struct DiagnosticSpan {
    /// File the span points into, relative to the project root.
    file_name:    String,
    /// 1-based starting line.
    line_start:   usize,
    /// 1-based starting column.
    column_start: usize,
}

impl StyleChecker for ClippyStyleChecker {
    fn applies_to(&self, project_root: &Path) -> bool {
        project_root.join("Cargo.toml").is_file()
    }

    fn check(&self, project_root: &Path) -> Result<ValidationResult, EnvironmentError> {
        let cargo = util::cargo_path()?;
        let args: Vec<OsString> = ["clippy", "--message-format=json"]
            .into_iter()
            .map(OsString::from)
            .collect();
        let collected = run_collect(&cargo, &args, Some(project_root))?;

        let stdout = String::from_utf8_lossy(&collected.stdout);
        let mut result = ValidationResult::default();

        for line in stdout.lines() {
            let Ok(diagnostic) = serde_json::from_str::<DiagnosticLine>(line) else {
                continue;
            };
            if diagnostic.reason != "compiler-message" {
                continue;
            }
            let Some(message) = diagnostic.message else {
                continue;
            };
            if message.level != "warning" && message.level != "error" {
                continue;
            }
            let Some(span) = message.spans.first() else {
                continue;
            };

            result.add(ValidationError {
                source_file: span.file_name.clone().into(),
                line:        span.line_start,
                column:      span.column_start,
                message:     message.message.clone(),
            });
        }

        Ok(result)
    }
}
