#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{collections::BTreeMap, path::PathBuf};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One style violation reported by a backend's style checker.
pub struct ValidationError {
    /// Source file the violation was found in, relative to the project root
    /// when the checker reports relative paths.
    pub source_file: PathBuf,
    /// 1-based line of the violation.
    pub line:        usize,
    /// 1-based column of the violation.
    pub column:      usize,
    /// Human-readable description of the violation.
    pub message:     String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
/// Style-check findings grouped per source file, in report order.
///
/// A backend with no applicable checker returns no `ValidationResult` at all
/// (`None` at the plugin boundary); an empty result means the checker ran and
/// found nothing.
pub struct ValidationResult {
    /// Violations keyed by source file.
    pub errors: BTreeMap<PathBuf, Vec<ValidationError>>,
}

impl ValidationResult {
    /// Records a violation under its source file.
    pub fn add(&mut self, error: ValidationError) {
        self.errors
            .entry(error.source_file.clone())
            .or_default()
            .push(error);
    }

    /// True when the checker ran but found no violations.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}
