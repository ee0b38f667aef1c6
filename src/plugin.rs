#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! The language plugin contract.
//!
//! A plugin wraps one build/test ecosystem behind a fixed capability set:
//! project-type detection, test scanning, test running, style checking, and
//! the student-file policy. Exercise discovery and stub/solution preparation
//! are provided generically here and never overridden per backend.

use std::path::{Path, PathBuf};

use glob::glob;
use tracing::debug;

use crate::{
    builder,
    domain::{ExerciseDesc, RunResult, ValidationResult},
    policy::StudentFilePolicy,
};

/// A fault meaning the tool itself cannot proceed -- as opposed to expected
/// grading outcomes (failed tests, failed builds, style violations), which
/// are always data in the canonical model.
#[derive(thiserror::Error, Debug)]
pub enum EnvironmentError {
    /// A required toolchain binary is not installed.
    #[error("cannot find `{tool}` on PATH")]
    MissingTool {
        /// Name of the missing binary.
        tool:   &'static str,
        /// Lookup failure reported by `which`.
        #[source]
        source: which::Error,
    },
    /// A project file could not be read.
    #[error("could not read {}", path.display())]
    UnreadablePath {
        /// The unreadable path.
        path:   PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Any other fault, with context attached.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// One build/test backend, e.g. Ant/Java or Cargo/Rust.
pub trait LanguagePlugin {
    /// Identifier of the backend, e.g. `apache-ant`.
    fn language_name(&self) -> &'static str;

    /// True when the directory at `path` is an exercise root of this
    /// backend's kind.
    fn is_exercise_type_correct(&self, path: &Path) -> bool;

    /// The student-file policy used when preparing stub and solution
    /// variants of an exercise rooted at `project_root`.
    fn student_file_policy(&self, project_root: &Path) -> Box<dyn StudentFilePolicy>;

    /// Discovers the tests of the exercise at `path`.
    ///
    /// Returns `Ok(None)` when the path is not of this plugin's project
    /// type -- a negative result, not an error.
    fn scan_exercise(
        &self,
        path: &Path,
        exercise_name: &str,
    ) -> Result<Option<ExerciseDesc>, EnvironmentError>;

    /// Builds the exercise at `path` and executes its tests.
    ///
    /// Always returns a [`RunResult`] for ordinary grading outcomes; errs
    /// only on environment-level faults such as a missing toolchain.
    fn run_tests(&self, path: &Path) -> Result<RunResult, EnvironmentError>;

    /// Runs the backend's static style check over the project at `path`.
    ///
    /// Returns `Ok(None)` when no style checker applies to the project, and
    /// otherwise a [`ValidationResult`] possibly containing zero errors.
    fn check_code_style(
        &self,
        path: &Path,
    ) -> Result<Option<ValidationResult>, EnvironmentError>;

    /// Walks the tree rooted at `root` and collects every directory this
    /// backend recognizes as an exercise root.
    ///
    /// The walk does not prune after a match: a multi-module project whose
    /// root matches may legitimately nest further exercises, and both are
    /// reported. A nonexistent root, a plain-file root, or a tree with no
    /// matches all yield an empty list, never an error.
    fn find_exercises(&self, root: &Path) -> Vec<PathBuf> {
        if !root.is_dir() {
            return Vec::new();
        }

        let mut exercises = Vec::new();
        if self.is_exercise_type_correct(root) {
            exercises.push(root.to_path_buf());
        }

        let pattern = root.join("**").display().to_string();
        if let Ok(entries) = glob(&pattern) {
            for entry in entries.filter_map(Result::ok) {
                if entry.as_path() != root
                    && entry.is_dir()
                    && self.is_exercise_type_correct(&entry)
                {
                    exercises.push(entry);
                }
            }
        }

        debug!("found {} {} exercises under {}", exercises.len(), self.language_name(), root.display());
        exercises
    }

    /// Prepares the distributable stub variant of the exercise at `path` by
    /// delegating to the exercise builder with this backend's policy.
    fn prepare_stub(&self, path: &Path) -> Result<(), EnvironmentError> {
        let policy = self.student_file_policy(path);
        builder::prepare_stub(path, policy.as_ref())
    }

    /// Prepares the solution variant of the exercise at `path`.
    fn prepare_solution(&self, path: &Path) -> Result<(), EnvironmentError> {
        let policy = self.student_file_policy(path);
        builder::prepare_solution(path, policy.as_ref())
    }
}
