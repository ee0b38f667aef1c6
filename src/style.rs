#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! The style-checker collaborator seam.
//!
//! Style engines are external collaborators: the core hands them a project
//! path and gets back canonical findings. A backend with no applicable
//! checker simply reports `None` from its
//! [`check_code_style`](crate::plugin::LanguagePlugin::check_code_style).

use std::path::Path;

use crate::{domain::ValidationResult, plugin::EnvironmentError};

/// A pluggable static style checker for one project flavor.
pub trait StyleChecker {
    /// True when this checker knows how to check the project at
    /// `project_root`.
    fn applies_to(&self, project_root: &Path) -> bool;

    /// Runs the check and returns the findings, possibly zero of them.
    fn check(&self, project_root: &Path) -> Result<ValidationResult, EnvironmentError>;
}
