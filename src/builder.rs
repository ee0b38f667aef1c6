#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! Stub and solution preparation for distributable exercises.
//!
//! The builder copies an exercise tree into a sibling directory and rewrites
//! the student files the backend's policy points it at. Instructor-only
//! files are copied verbatim, as are files that are not valid UTF-8.
//!
//! Markers recognized inside student files:
//! - lines between `// BEGIN SOLUTION` and `// END SOLUTION` (inclusive)
//!   are removed from stubs; an unterminated block extends to end of file;
//! - `// STUB:` lines are un-commented in stubs and dropped from solutions;
//! - solutions keep everything else, minus the marker lines themselves.

use std::{fs, path::Path};

use anyhow::{Context, anyhow};
use tracing::debug;

use crate::{
    constants::{SOLUTION_BEGIN_MARKER, SOLUTION_END_MARKER, SOLUTION_SUFFIX, STUB_MARKER,
                STUB_SUFFIX},
    plugin::EnvironmentError,
    policy::StudentFilePolicy,
};

/// Which distributable variant a preparation run produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Variant {
    /// Student-facing variant with solution blocks removed.
    Stub,
    /// Instructor variant with markers stripped and solutions kept.
    Solution,
}

/// Prepares the stub variant of the exercise at `project_root`, writing it
/// to a sibling `<name>-stub` directory.
pub fn prepare_stub(
    project_root: &Path,
    policy: &dyn StudentFilePolicy,
) -> Result<(), EnvironmentError> {
    prepare_variant(project_root, policy, Variant::Stub, STUB_SUFFIX)
}

/// Prepares the solution variant of the exercise at `project_root`, writing
/// it to a sibling `<name>-solution` directory.
pub fn prepare_solution(
    project_root: &Path,
    policy: &dyn StudentFilePolicy,
) -> Result<(), EnvironmentError> {
    prepare_variant(project_root, policy, Variant::Solution, SOLUTION_SUFFIX)
}

/// Copies the tree and rewrites student files according to `variant`.
fn prepare_variant(
    project_root: &Path,
    policy: &dyn StudentFilePolicy,
    variant: Variant,
    suffix: &str,
) -> Result<(), EnvironmentError> {
    let name = project_root
        .file_name()
        .ok_or_else(|| anyhow!("{} has no directory name", project_root.display()))?
        .to_string_lossy();
    let parent = project_root
        .parent()
        .ok_or_else(|| anyhow!("{} has no parent directory", project_root.display()))?;
    let target_root = parent.join(format!("{name}{suffix}"));

    for source in walk_files(project_root)? {
        let relative = source
            .strip_prefix(project_root)
            .map_err(|e| anyhow::Error::from(e).context("walked outside the project root"))?;
        let destination = target_root.join(relative);

        if let Some(dir) = destination.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("could not create {}", dir.display()))?;
        }

        if policy.is_student_file(&source, project_root) {
            match fs::read_to_string(&source) {
                Ok(contents) => {
                    let rewritten = filter_lines(&contents, variant);
                    fs::write(&destination, rewritten)
                        .with_context(|| format!("could not write {}", destination.display()))?;
                    continue;
                }
                // Binary student files are copied as-is below.
                Err(e) if e.kind() == std::io::ErrorKind::InvalidData => {}
                Err(e) => {
                    return Err(EnvironmentError::UnreadablePath {
                        path:   source.clone(),
                        source: e,
                    });
                }
            }
        }

        fs::copy(&source, &destination)
            .with_context(|| format!("could not copy {}", source.display()))?;
    }

    debug!("prepared {variant:?} variant at {}", target_root.display());
    Ok(())
}

/// Collects every regular file under `root`, in deterministic glob order.
fn walk_files(root: &Path) -> Result<Vec<std::path::PathBuf>, EnvironmentError> {
    let pattern = root.join("**").join("*").display().to_string();
    let entries = glob::glob(&pattern)
        .context("could not build the project walk pattern")
        .map_err(EnvironmentError::Other)?;
    Ok(entries.filter_map(Result::ok).filter(|p| p.is_file()).collect())
}

/// Applies the marker rules of `variant` to one student file's contents.
fn filter_lines(contents: &str, variant: Variant) -> String {
    let mut kept = Vec::new();
    let mut in_solution = false;

    for line in contents.lines() {
        let trimmed = line.trim_start();

        if trimmed.starts_with(SOLUTION_BEGIN_MARKER) {
            in_solution = true;
            continue;
        }
        if trimmed.starts_with(SOLUTION_END_MARKER) {
            in_solution = false;
            continue;
        }
        if in_solution {
            if variant == Variant::Solution {
                kept.push(line.to_string());
            }
            continue;
        }
        if let Some(position) = line.find(STUB_MARKER) {
            if trimmed.starts_with(STUB_MARKER) && variant == Variant::Stub {
                let indent = &line[..position];
                let stubbed = line[position + STUB_MARKER.len()..].trim_start();
                kept.push(format!("{indent}{stubbed}"));
            }
            continue;
        }

        kept.push(line.to_string());
    }

    let mut result = kept.join("\n");
    if contents.ends_with('\n') {
        result.push('\n');
    }
    result
}
