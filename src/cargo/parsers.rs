#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! Parsers for the output of the libtest harness behind `cargo test`.

use std::collections::HashMap;

use crate::domain::{CaseStatus, TestCase};

peg::parser! {
    /// Grammar for the line-oriented parts of `cargo test` output.
    pub grammar parser() for str {
        /// a test path token: anything up to the first space
        rule test_name() -> String
            = n:$((!" " [_])+) { n.to_string() }

        /// outcome keyword printed by the harness for one test
        rule outcome() -> &'input str
            = $("ok" / "FAILED" / "ignored")

        /// parses a per-test line, e.g. `test tests::adds ... ok`
        pub rule test_line() -> (String, String)
            = "test " n:test_name() " ... " o:outcome() [_]*
            { (n, o.to_string()) }

        /// parses one listing line of `cargo test -- --list`,
        /// e.g. `tests::adds: test`
        pub rule list_line() -> String
            = n:$((!(": ") [_])+) ": test" [_]*
            { n.to_string() }
    }
}

/// Collects the per-test failure details printed after the summary, keyed
/// by test name. Sections look like `---- tests::adds stdout ----` followed
/// by the captured output until the next section or the `failures:` list.
pub fn failure_messages(output: &str) -> HashMap<String, String> {
    let mut messages = HashMap::new();
    let mut current: Option<(String, Vec<&str>)> = None;

    let mut flush = |section: Option<(String, Vec<&str>)>, into: &mut HashMap<String, String>| {
        if let Some((name, body)) = section {
            into.insert(name, body.join("\n").trim().to_string());
        }
    };

    for line in output.lines() {
        if let Some(heading) = line.strip_prefix("---- ")
            && let Some(name) = heading.strip_suffix(" stdout ----")
        {
            flush(current.take(), &mut messages);
            current = Some((name.to_string(), Vec::new()));
        } else if line.starts_with("failures:") {
            flush(current.take(), &mut messages);
        } else if let Some((_, body)) = current.as_mut() {
            body.push(line);
        }
    }
    flush(current.take(), &mut messages);

    messages
}

/// Converts `cargo test` output into raw test-case records, in output
/// order. Ignored tests produce no record; failed tests carry their
/// captured output as the failure message.
pub fn collect_test_cases(output: &str, class_name: &str) -> Vec<TestCase> {
    let messages = failure_messages(output);
    let mut cases = Vec::new();

    for line in output.lines() {
        let Ok((name, outcome)) = parser::test_line(line) else {
            continue;
        };
        let status = match outcome.as_str() {
            "ok" => CaseStatus::Passed,
            "FAILED" => CaseStatus::Failed,
            _ => continue,
        };

        cases.push(TestCase {
            class_name:  class_name.to_string(),
            method_name: name.clone(),
            status,
            message:     messages.get(&name).cloned(),
            point_names: Vec::new(),
            exception:   None,
        });
    }

    cases
}
