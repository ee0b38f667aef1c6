//! Tree-sitter query strings used by the Java test scanner.

/// Tree-sitter query that returns name of the package
/// * `name`: name of the package
pub const PACKAGE_QUERY: &str = include_str!("package.scm");

/// Tree-sitter query that returns class declarations
/// * `name`: name of the class
/// * `modifiers`: annotations and modifiers, when present
pub const CLASS_QUERY: &str = include_str!("class.scm");

/// Tree-sitter query that returns method declarations
/// * `name`: name of the method
/// * `modifiers`: annotations and modifiers, when present
pub const METHOD_QUERY: &str = include_str!("method.scm");
