#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! Student-file classification policies.
//!
//! A policy is a pure predicate over paths: it decides whether a file inside
//! an exercise project is owned by the student (and therefore subject to
//! stub/solution rewriting) or instructor-only scaffolding. Policies are
//! stateless and never touch the filesystem beyond the path values they are
//! given.

use std::path::{Component, Path};

/// Classifies a path within a project as student-owned or not.
pub trait StudentFilePolicy {
    /// Returns true when `path` is a student file of the project rooted at
    /// `project_root`.
    fn is_student_file(&self, path: &Path, project_root: &Path) -> bool;
}

#[derive(Debug, Clone, Copy, Default)]
/// The coarsest policy: every path is a student file. Used when a backend
/// has no finer classification.
pub struct EverythingIsStudentFilePolicy;

impl StudentFilePolicy for EverythingIsStudentFilePolicy {
    fn is_student_file(&self, _path: &Path, _project_root: &Path) -> bool {
        true
    }
}

/// Returns the first path component of `path` relative to `root`, or `None`
/// when `path` does not live under `root`.
pub(crate) fn first_component_under<'a>(path: &'a Path, root: &Path) -> Option<&'a str> {
    let relative = path.strip_prefix(root).ok()?;
    match relative.components().next()? {
        Component::Normal(part) => part.to_str(),
        _ => None,
    }
}
