#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! The Ant/Java backend.
//!
//! An Ant exercise is a directory with a `build.xml` at its root. Running
//! tests is a three-step orchestration: build with Ant, launch the external
//! test-runner JVM with the wire-format argument vector, then normalize the
//! results file it wrote. The build's own output is preserved as logs when
//! it fails; the runner child's exit status is ignored because the results
//! file is authoritative.

/// Tree-sitter wrapper over one Java source file.
pub mod parser;
/// Annotation-text grammar for point labels.
pub mod parsers;
/// Tree-sitter query strings used by the scanner.
pub mod queries;
/// JUnit test discovery in Java sources.
pub mod scanner;

use std::{
    ffi::OsString,
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use tracing::debug;
use uuid::Uuid;

use crate::{
    config::RunnerConfig,
    domain::{ExerciseDesc, RunResult, ValidationResult},
    plugin::{EnvironmentError, LanguagePlugin},
    policy::{StudentFilePolicy, first_component_under},
    process::{Collected, run_collect},
    results,
    runner::TestRunnerArguments,
    style::StyleChecker,
    util,
};

/// Language plugin for Ant-built Java exercises.
#[derive(Default)]
pub struct AntPlugin {
    /// Optional style-checking collaborator; absent means style checks
    /// report "no applicable checker".
    style_checker: Option<Box<dyn StyleChecker>>,
}

impl AntPlugin {
    /// Creates the plugin without a style checker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the plugin with a style-checking collaborator.
    pub fn with_style_checker(style_checker: Box<dyn StyleChecker>) -> Self {
        Self {
            style_checker: Some(style_checker),
        }
    }

    /// Runs the configured Ant build target in `path`, collecting output.
    fn build(&self, path: &Path) -> Result<Collected, EnvironmentError> {
        let ant = util::ant_path()?;
        let target = RunnerConfig::from_env().ant_target;
        debug!("building {} with ant target {target}", path.display());
        run_collect(ant, &[OsString::from(target)], Some(path)).map_err(EnvironmentError::Other)
    }

    /// Launches the external test runner for `exercise` and returns the
    /// results file it was told to write.
    fn execute_runner(
        &self,
        path: &Path,
        exercise: &ExerciseDesc,
    ) -> Result<PathBuf, EnvironmentError> {
        let build_dir = path.join("build");
        fs::create_dir_all(&build_dir)
            .with_context(|| format!("could not create {}", build_dir.display()))?;
        let result_file = build_dir.join(format!("results-{}.json", Uuid::new_v4()));

        let arguments = TestRunnerArguments::builder()
            .runtime_options(RunnerConfig::from_env().jvm_args)
            .project_base_path(path)
            .test_directory(build_dir.join("test").join("classes"))
            .result_file(result_file.clone())
            .classpath(util::ant_classpath(path)?)
            .exercise(exercise.clone())
            .build()
            .arguments();

        let java = util::java_path()?;
        let argv: Vec<OsString> = arguments[1..].iter().map(OsString::from).collect();
        // The runner's exit status is deliberately not inspected; a missing
        // or undecodable results file already signals an interrupted run.
        let collected = run_collect(java, &argv, Some(path))?;
        debug!("test runner exited with {}", collected.status);

        Ok(result_file)
    }
}

impl LanguagePlugin for AntPlugin {
    fn language_name(&self) -> &'static str {
        "apache-ant"
    }

    fn is_exercise_type_correct(&self, path: &Path) -> bool {
        path.join("build.xml").is_file()
    }

    fn student_file_policy(&self, _project_root: &Path) -> Box<dyn StudentFilePolicy> {
        Box::new(AntStudentFilePolicy)
    }

    fn scan_exercise(
        &self,
        path: &Path,
        exercise_name: &str,
    ) -> Result<Option<ExerciseDesc>, EnvironmentError> {
        if !self.is_exercise_type_correct(path) {
            return Ok(None);
        }

        let tests = scanner::scan_test_sources(&path.join("test"))?;
        Ok(Some(ExerciseDesc::new(exercise_name, tests)))
    }

    fn run_tests(&self, path: &Path) -> Result<RunResult, EnvironmentError> {
        let build = self.build(path)?;
        if !build.success() {
            return Ok(results::compile_failure(build.combined_output()));
        }

        let exercise_name = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| "exercise".to_string());
        let exercise = self
            .scan_exercise(path, &exercise_name)?
            .ok_or_else(|| anyhow::anyhow!("{} is not an Ant exercise", path.display()))?;

        let result_file = self.execute_runner(path, &exercise)?;
        let run = results::parse_results_file(&result_file);
        let _ = fs::remove_file(&result_file);

        Ok(run)
    }

    fn check_code_style(
        &self,
        path: &Path,
    ) -> Result<Option<ValidationResult>, EnvironmentError> {
        match &self.style_checker {
            Some(checker) if checker.applies_to(path) => checker.check(path).map(Some),
            _ => Ok(None),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// Student files in an Ant exercise live under `src/`; `test/`, `lib/`, and
/// build metadata stay instructor-owned.
pub struct AntStudentFilePolicy;

impl StudentFilePolicy for AntStudentFilePolicy {
    fn is_student_file(&self, path: &Path, project_root: &Path) -> bool {
        first_component_under(path, project_root) == Some("src")
    }
}
