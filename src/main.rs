#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! # rubric
//!
//! Command-line front end for the exercise grader: discover exercises, scan
//! them for tests, run and normalize their test suites, style-check, and
//! prepare stub/solution distributions.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use bpaf::*;
use colored::Colorize;
use dotenvy::dotenv;
use rubric::{
    domain::{RunResult, RunStatus},
    plugin::LanguagePlugin,
    plugin_for, plugins,
};
use tabled::{Table, Tabled};
use tracing::{Level, metadata::LevelFilter};
use tracing_subscriber::{fmt, prelude::*, util::SubscriberInitExt};

/// Top-level CLI commands.
#[derive(Debug, Clone)]
enum Cmd {
    /// Recursively list exercise roots under a directory
    FindExercises(PathBuf),
    /// Discover the tests of one exercise
    Scan(PathBuf, Option<String>),
    /// Build an exercise and run its tests
    RunTests(PathBuf),
    /// Run the backend's style checker
    CheckStyle(PathBuf),
    /// Prepare the distributable stub variant
    PrepareStub(PathBuf),
    /// Prepare the solution variant
    PrepareSolution(PathBuf),
}

/// Parse the command line arguments and return a `Cmd` enum
fn options() -> Cmd {
    /// parses the exercise or tree path
    fn p() -> impl Parser<PathBuf> {
        positional::<PathBuf>("PATH").help("Path to an exercise or a tree of exercises")
    }

    /// parses the optional exercise display name
    fn n() -> impl Parser<Option<String>> {
        positional::<String>("NAME")
            .help("Display name for the exercise")
            .optional()
    }

    let find_exercises = construct!(Cmd::FindExercises(p()))
        .to_options()
        .command("find-exercises")
        .help("List every exercise root under a directory");

    let scan = construct!(Cmd::Scan(p(), n()))
        .to_options()
        .command("scan")
        .help("Print the tests and point labels of an exercise as JSON");

    let run_tests = construct!(Cmd::RunTests(p()))
        .to_options()
        .command("run-tests")
        .help("Build an exercise, run its tests, and print the results");

    let check_style = construct!(Cmd::CheckStyle(p()))
        .to_options()
        .command("check-style")
        .help("Run the backend's style checker and print findings as JSON");

    let prepare_stub = construct!(Cmd::PrepareStub(p()))
        .to_options()
        .command("prepare-stub")
        .help("Write the student-facing stub variant next to the exercise");

    let prepare_solution = construct!(Cmd::PrepareSolution(p()))
        .to_options()
        .command("prepare-solution")
        .help("Write the solution variant next to the exercise");

    let cmd = construct!([
        find_exercises,
        scan,
        run_tests,
        check_style,
        prepare_stub,
        prepare_solution
    ]);

    cmd.to_options().descr("Exercise grader with pluggable backends").run()
}

/// One row of the human-readable test report.
#[derive(Tabled)]
struct ResultRow {
    /// Canonical test name.
    #[tabled(rename = "Test")]
    name:    String,
    /// Colored pass/fail marker.
    #[tabled(rename = "Outcome")]
    outcome: String,
    /// Comma-joined point labels.
    #[tabled(rename = "Points")]
    points:  String,
    /// Failure message, when any.
    #[tabled(rename = "Message")]
    message: String,
}

/// Renders a run result as a status line, a table of tests, and any logs.
fn show_run_result(run: &RunResult) {
    let status = match run.status {
        RunStatus::Passed => "PASSED".green().bold(),
        RunStatus::TestsFailed => "TESTS_FAILED".red().bold(),
        RunStatus::CompileFailed => "COMPILE_FAILED".red().bold(),
        RunStatus::TestrunInterrupted => "TESTRUN_INTERRUPTED".yellow().bold(),
    };
    println!("{status}");

    if !run.test_results.is_empty() {
        let rows: Vec<ResultRow> = run
            .test_results
            .iter()
            .map(|test| ResultRow {
                name:    test.name.clone(),
                outcome: if test.passed {
                    "ok".green().to_string()
                } else {
                    "failed".red().to_string()
                },
                points:  test.points.join(","),
                message: test.error_message.clone(),
            })
            .collect();
        println!("{}", Table::new(rows));
    }

    for (kind, payload) in &run.logs {
        eprintln!("--- {kind} ---");
        eprintln!("{}", String::from_utf8_lossy(payload));
    }
}

/// Resolves the backend for `path`, failing with a readable message when no
/// backend recognizes the project.
fn require_plugin(path: &Path) -> Result<Box<dyn LanguagePlugin>> {
    plugin_for(path)
        .with_context(|| format!("no backend recognizes the project at {}", path.display()))
}

fn main() -> Result<()> {
    dotenv().ok();

    let fmt = fmt::layer()
        .without_time()
        .with_file(false)
        .with_line_number(false);
    let filter_layer = LevelFilter::from_level(Level::INFO);
    tracing_subscriber::registry()
        .with(fmt)
        .with(filter_layer)
        .init();

    match options() {
        Cmd::FindExercises(path) => {
            for plugin in plugins() {
                for exercise in plugin.find_exercises(&path) {
                    println!("{}\t{}", plugin.language_name(), exercise.display());
                }
            }
        }
        Cmd::Scan(path, name) => {
            let plugin = require_plugin(&path)?;
            let name = name.unwrap_or_else(|| {
                path.file_name()
                    .map(|value| value.to_string_lossy().to_string())
                    .unwrap_or_else(|| "exercise".to_string())
            });
            match plugin.scan_exercise(&path, &name)? {
                Some(exercise) => println!("{}", serde_json::to_string_pretty(&exercise)?),
                None => bail!("{} is not a {} exercise", path.display(), plugin.language_name()),
            }
        }
        Cmd::RunTests(path) => {
            let plugin = require_plugin(&path)?;
            let run = plugin.run_tests(&path)?;
            show_run_result(&run);
        }
        Cmd::CheckStyle(path) => {
            let plugin = require_plugin(&path)?;
            match plugin.check_code_style(&path)? {
                Some(validation) => println!("{}", serde_json::to_string_pretty(&validation)?),
                None => println!("no style checker applies to {}", path.display()),
            }
        }
        Cmd::PrepareStub(path) => {
            let plugin = require_plugin(&path)?;
            plugin.prepare_stub(&path)?;
        }
        Cmd::PrepareSolution(path) => {
            let plugin = require_plugin(&path)?;
            plugin.prepare_solution(&path)?;
        }
    }

    Ok(())
}
