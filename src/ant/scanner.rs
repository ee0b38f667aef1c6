#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! Discovers JUnit tests and their point labels in Java test sources.
//!
//! Scanning never compiles anything: sources are parsed with tree-sitter
//! and test methods are recognized by their `@Test` annotation. Point
//! labels come from `@Points("a b")` annotations, class-level labels first,
//! then method-level ones, preserving source order within each.

use std::{fs, path::Path};

use anyhow::{Context, Result};

use super::{parser::JavaSource, parsers, queries::{CLASS_QUERY, METHOD_QUERY, PACKAGE_QUERY}};
use crate::{domain::TestDesc, util::find_files};

/// Scans every Java source under `test_dir` and returns the discovered
/// tests sorted by name. A directory with no Java sources scans to an
/// empty list.
pub fn scan_test_sources(test_dir: &Path) -> Result<Vec<TestDesc>> {
    let mut tests = Vec::new();

    if test_dir.is_dir() {
        for path in find_files("java", 4, test_dir)? {
            let source = fs::read_to_string(&path)
                .with_context(|| format!("Could not read file: {:?}", &path))?;
            tests.extend(
                scan_source(&source)
                    .with_context(|| format!("Could not scan {}", path.display()))?,
            );
        }
    }

    tests.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(tests)
}

/// Extracts the `@Test` methods of the first class declared in `source`.
///
/// Test names take the canonical `<ClassName> <methodName>` form, with the
/// class name package-qualified when the file declares a package.
pub fn scan_source(source: &str) -> Result<Vec<TestDesc>> {
    let parsed = JavaSource::new(source.to_string())?;

    let package = parsed
        .query(PACKAGE_QUERY)?
        .first()
        .and_then(|m| m.get("name").cloned());

    let classes = parsed.query(CLASS_QUERY)?;
    let Some(class) = classes.first() else {
        return Ok(Vec::new());
    };
    let Some(class_name) = class.get("name") else {
        return Ok(Vec::new());
    };

    let qualified_name = match package {
        Some(package) => format!("{package}.{class_name}"),
        None => class_name.clone(),
    };
    let class_points = class.get("modifiers").map(|m| point_labels(m)).unwrap_or_default();

    let mut tests = Vec::new();
    for method in parsed.query(METHOD_QUERY)? {
        let Some(modifiers) = method.get("modifiers") else {
            continue;
        };
        if !has_marker_annotation(modifiers, "Test") {
            continue;
        }
        let Some(method_name) = method.get("name") else {
            continue;
        };

        let mut points = class_points.clone();
        points.extend(point_labels(modifiers));
        tests.push(TestDesc::new(format!("{qualified_name} {method_name}"), points));
    }

    Ok(tests)
}

/// Parses the labels of the first points annotation in `modifiers`, if any.
fn point_labels(modifiers: &str) -> Vec<String> {
    modifiers
        .find("@Points")
        .and_then(|at| parsers::parser::points_annotation(&modifiers[at..]).ok())
        .unwrap_or_default()
}

/// True when `modifiers` carries the annotation `@<name>` as a whole word,
/// so `@Test` does not match `@TestFactory`.
fn has_marker_annotation(modifiers: &str, name: &str) -> bool {
    let needle = format!("@{name}");
    let mut rest = modifiers;

    while let Some(at) = rest.find(&needle) {
        let after = rest[at + needle.len()..].chars().next();
        if !matches!(after, Some(c) if c.is_alphanumeric() || c == '_') {
            return true;
        }
        rest = &rest[at + needle.len()..];
    }
    false
}
