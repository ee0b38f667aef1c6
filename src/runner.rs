#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! The argument protocol for launching the external test-runner process.
//!
//! The runner is an independently evolving program; the token order and
//! punctuation assembled here are a wire format it parses, not free-form
//! text. Any deviation breaks the runner, so assembly is purely mechanical
//! and covered by exact-order tests.

use std::path::PathBuf;

use itertools::Itertools;
use typed_builder::TypedBuilder;

use crate::{
    constants::{
        CLASSPATH_FLAG, ENDORSED_LIBS_PARAM_PREFIX, JAVA_RUNTIME, RESULT_FILE_PARAM_PREFIX,
        RUNNER_MAIN_CLASS, TEST_DIR_PARAM_PREFIX,
    },
    domain::ExerciseDesc,
};

#[derive(Debug, Clone, TypedBuilder)]
/// Everything needed to assemble the runner's argument vector.
pub struct TestRunnerArguments {
    /// Optional runtime option inserted verbatim after the program token.
    #[builder(default)]
    runtime_options:   Option<String>,
    /// Project root; probed for `lib/endorsed` at build time.
    #[builder(setter(into))]
    project_base_path: PathBuf,
    /// Directory holding the compiled test classes.
    #[builder(setter(into))]
    test_directory:    PathBuf,
    /// File the runner writes its results to.
    #[builder(setter(into))]
    result_file:       PathBuf,
    /// Classpath string handed to the JVM.
    #[builder(setter(into))]
    classpath:         String,
    /// The exercise whose tests the runner executes.
    exercise:          ExerciseDesc,
}

impl TestRunnerArguments {
    /// Assembles the argument vector in wire order.
    pub fn arguments(&self) -> Vec<String> {
        let mut arguments = vec![JAVA_RUNTIME.to_string()];

        if let Some(options) = &self.runtime_options {
            arguments.push(options.clone());
        }

        arguments.push(format!("{TEST_DIR_PARAM_PREFIX}{}", self.test_directory.display()));
        arguments.push(format!("{RESULT_FILE_PARAM_PREFIX}{}", self.result_file.display()));

        let endorsed = self.project_base_path.join("lib").join("endorsed");
        if endorsed.is_dir() {
            arguments.push(format!("{ENDORSED_LIBS_PARAM_PREFIX}{}", endorsed.display()));
        }

        arguments.push(CLASSPATH_FLAG.to_string());
        arguments.push(self.classpath.clone());
        arguments.push(RUNNER_MAIN_CLASS.to_string());

        for test in &self.exercise.tests {
            arguments.push(Self::test_case_token(test));
        }

        arguments
    }

    /// Encodes one test as `<ClassName>.<methodName>{p1,p2,...}`: the space
    /// in the canonical name becomes a dot, points are comma-joined in their
    /// original order, and a test with zero points gets empty braces.
    fn test_case_token(test: &crate::domain::TestDesc) -> String {
        format!("{}{{{}}}", test.name.replace(' ', "."), test.points.iter().join(","))
    }
}
