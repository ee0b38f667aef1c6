#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// A discoverable test case and the point labels it awards when passing.
pub struct TestDesc {
    /// Canonical test name, `<ClassName> <methodName>` for JVM backends and
    /// the bare test path for Cargo.
    pub name:   String,
    /// Point labels this test contributes toward, in source order. Duplicate
    /// test names with differing point sets are both kept.
    pub points: Vec<String>,
}

impl TestDesc {
    /// Creates a new test description.
    pub fn new(name: impl Into<String>, points: Vec<String>) -> Self {
        Self {
            name: name.into(),
            points,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// The gradable unit produced by scanning one exercise project.
pub struct ExerciseDesc {
    /// Display name of the exercise.
    pub name:  String,
    /// Tests discovered in the exercise, in scan order.
    pub tests: Vec<TestDesc>,
}

impl ExerciseDesc {
    /// Creates a new exercise description.
    pub fn new(name: impl Into<String>, tests: Vec<TestDesc>) -> Self {
        Self {
            name: name.into(),
            tests,
        }
    }
}
