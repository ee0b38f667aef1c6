#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! Toolchain discovery and filesystem helpers.

use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use glob::glob;
use which::which;

use crate::plugin::EnvironmentError;

/// Finds and returns the path to the java binary.
pub fn java_path() -> Result<OsString, EnvironmentError> {
    tool_path("java")
}

/// Finds and returns the path to the ant binary.
pub fn ant_path() -> Result<OsString, EnvironmentError> {
    tool_path("ant")
}

/// Finds and returns the path to the cargo binary.
pub fn cargo_path() -> Result<OsString, EnvironmentError> {
    tool_path("cargo")
}

/// Looks a tool up on PATH, mapping absence to the typed environment fault.
fn tool_path(tool: &'static str) -> Result<OsString, EnvironmentError> {
    which(tool)
        .map(PathBuf::into_os_string)
        .map_err(|source| EnvironmentError::MissingTool { tool, source })
}

/// A glob utility function to find paths to files with certain extension
///
/// * `extension`: the file extension to find paths for
/// * `search_depth`: how many folders deep to search for
/// * `root_dir`: the root directory where search starts
pub fn find_files(extension: &str, search_depth: i8, root_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut pattern = root_dir.to_path_buf();

    for _ in 0..search_depth {
        pattern.push("**");
    }

    pattern.push(format!("*.{extension}"));
    let pattern = pattern
        .to_str()
        .context("Could not convert root_dir to string")?
        .to_string();

    Ok(glob(&pattern)
        .context("Could not create glob")?
        .filter_map(Result::ok)
        .collect())
}

/// Returns the platform specific separator character for classpath entries.
pub fn separator() -> &'static str {
    if cfg!(windows) { ";" } else { ":" }
}

/// Assembles the classpath for an Ant exercise: the library directory, both
/// compiled-class directories, and every jar under `lib/`, joined with the
/// platform separator.
pub fn ant_classpath(project_root: &Path) -> Result<String> {
    let mut entries: Vec<String> = vec![
        project_root.join("lib").display().to_string(),
        project_root.join("build").join("classes").display().to_string(),
        project_root.join("build").join("test").join("classes").display().to_string(),
    ];

    entries.append(
        &mut find_files("jar", 3, &project_root.join("lib"))?
            .iter()
            .map(|p| p.as_path().display().to_string())
            .collect(),
    );

    Ok(entries.join(separator()))
}
