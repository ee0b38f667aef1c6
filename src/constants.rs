#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! Constant values used throughout: well-known log keys, the wire tokens of
//! the test-runner argument protocol, and the markers recognized by the
//! exercise builder.

/// Log key under which build/compile output is stored in a
/// [`RunResult`](crate::domain::RunResult).
pub const COMPILER_OUTPUT: &str = "compiler_output";

/// Log key for raw standard output captured from a child process.
pub const STDOUT: &str = "stdout";

/// Log key for raw standard error captured from a child process.
pub const STDERR: &str = "stderr";

/// Program invocation token placed first in the runner argument vector.
pub const JAVA_RUNTIME: &str = "java";

/// Prefix of the parameter token naming the compiled test-class directory.
pub const TEST_DIR_PARAM_PREFIX: &str = "-Drubric.test_class_dir=";

/// Prefix of the parameter token naming the results file the runner writes.
pub const RESULT_FILE_PARAM_PREFIX: &str = "-Drubric.results_file=";

/// Prefix of the endorsed-libraries parameter token, emitted only when the
/// project carries a `lib/endorsed` directory.
pub const ENDORSED_LIBS_PARAM_PREFIX: &str = "-Djava.endorsed.dirs=";

/// Classpath flag token, followed by the classpath string as its own token.
pub const CLASSPATH_FLAG: &str = "-cp";

/// Fully qualified entry point of the external test-runner process.
pub const RUNNER_MAIN_CLASS: &str = "edu.rubric.testrunner.Main";

/// Default Ant target invoked to build an exercise and its tests.
pub const DEFAULT_ANT_TARGET: &str = "compile-test";

/// Marker opening an instructor-only solution block in a student file.
pub const SOLUTION_BEGIN_MARKER: &str = "// BEGIN SOLUTION";

/// Marker closing an instructor-only solution block.
pub const SOLUTION_END_MARKER: &str = "// END SOLUTION";

/// Marker prefixing a line that should be un-commented in the stub variant.
pub const STUB_MARKER: &str = "// STUB:";

/// Directory-name suffix for the prepared stub variant of an exercise.
pub const STUB_SUFFIX: &str = "-stub";

/// Directory-name suffix for the prepared solution variant of an exercise.
pub const SOLUTION_SUFFIX: &str = "-solution";
