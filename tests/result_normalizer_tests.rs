use std::{fs, path::PathBuf};

use rubric::{
    constants::COMPILER_OUTPUT,
    domain::{CaseStatus, CaughtException, RunStatus, StackFrame, TestCase},
    results,
};
use uuid::Uuid;

fn temp_root() -> PathBuf {
    let root = std::env::temp_dir().join(format!("rubric-results-{}", Uuid::new_v4()));
    fs::create_dir_all(&root).expect("create temp root");
    root
}

fn case(method: &str, status: CaseStatus) -> TestCase {
    TestCase {
        class_name:  "ArithTest".to_string(),
        method_name: method.to_string(),
        status,
        message:     None,
        point_names: vec!["arith".to_string()],
        exception:   None,
    }
}

#[test]
fn all_passing_records_normalize_to_passed() {
    let cases = vec![
        case("testAdd", CaseStatus::Passed),
        case("testSub", CaseStatus::Passed),
        case("testMul", CaseStatus::Passed),
    ];

    let run = results::parse_test_cases(&cases);

    assert_eq!(run.status, RunStatus::Passed);
    assert_eq!(run.test_results.len(), cases.len());
    assert!(run.test_results.iter().all(|test| test.passed));
    assert_eq!(run.test_results[0].name, "ArithTest testAdd");
    assert!(run.logs.is_empty());
}

#[test]
fn one_failed_record_fails_the_whole_run() {
    let cases = vec![
        case("t1", CaseStatus::Passed),
        case("t2", CaseStatus::Passed),
        case("t3", CaseStatus::Passed),
        case("t4", CaseStatus::Failed),
    ];

    let run = results::parse_test_cases(&cases);

    assert_eq!(run.status, RunStatus::TestsFailed);
    assert_eq!(run.test_results.len(), 4);
    assert!(run.test_results[0].passed);
    assert!(!run.test_results[3].passed);
}

#[test]
fn failed_record_without_exception_still_fails_with_empty_backtrace() {
    let run = results::parse_test_cases(&[case("testDiv", CaseStatus::Failed)]);

    let test = &run.test_results[0];
    assert!(!test.passed);
    assert!(test.backtrace.is_empty());
    assert_eq!(test.error_message, "");
}

#[test]
fn exception_frames_render_in_order() {
    let mut failed = case("testDiv", CaseStatus::Failed);
    failed.message = Some("expected 2 but was 3".to_string());
    failed.exception = Some(CaughtException {
        stack_trace: vec![
            StackFrame {
                declaring_class: "ArithTest".to_string(),
                method_name:     "testDiv".to_string(),
                file_name:       Some("ArithTest.java".to_string()),
                line_number:     Some(31),
            },
            StackFrame {
                declaring_class: "sun.reflect.NativeMethodAccessorImpl".to_string(),
                method_name:     "invoke0".to_string(),
                file_name:       None,
                line_number:     None,
            },
        ],
    });

    let run = results::parse_test_cases(&[failed]);

    let test = &run.test_results[0];
    assert_eq!(test.error_message, "expected 2 but was 3");
    assert_eq!(test.backtrace, vec![
        "ArithTest.testDiv(ArithTest.java:31)".to_string(),
        "sun.reflect.NativeMethodAccessorImpl.invoke0(Unknown Source)".to_string(),
    ]);
}

#[test]
fn points_are_copied_in_record_order() {
    let mut with_points = case("testAdd", CaseStatus::Passed);
    with_points.point_names = vec!["b".to_string(), "a".to_string(), "c".to_string()];

    let run = results::parse_test_cases(&[with_points]);

    assert_eq!(run.test_results[0].points, vec!["b", "a", "c"]);
}

#[test]
fn wire_records_decode_from_camel_case_json() {
    let json = r#"[
        {
            "className": "ArithTest",
            "methodName": "testAdd",
            "status": "PASSED",
            "pointNames": ["arith-funcs"]
        },
        {
            "className": "ArithTest",
            "methodName": "testDiv",
            "status": "FAILED",
            "message": "/ by zero",
            "pointNames": [],
            "exception": {
                "stackTrace": [
                    {
                        "declaringClass": "ArithTest",
                        "methodName": "testDiv",
                        "fileName": "ArithTest.java",
                        "lineNumber": 12
                    }
                ]
            }
        }
    ]"#;

    let cases: Vec<TestCase> = serde_json::from_str(json).expect("decode wire records");
    let run = results::parse_test_cases(&cases);

    assert_eq!(run.status, RunStatus::TestsFailed);
    assert_eq!(run.test_results[0].points, vec!["arith-funcs"]);
    assert_eq!(run.test_results[1].error_message, "/ by zero");
    assert_eq!(run.test_results[1].backtrace, vec!["ArithTest.testDiv(ArithTest.java:12)"]);
}

#[test]
fn results_file_roundtrip() {
    let root = temp_root();
    let results_file = root.join("results.json");
    let cases = vec![case("testAdd", CaseStatus::Passed)];
    fs::write(&results_file, serde_json::to_string(&cases).expect("encode records"))
        .expect("write results file");

    let run = results::parse_results_file(&results_file);

    assert_eq!(run.status, RunStatus::Passed);
    assert_eq!(run.test_results.len(), 1);

    let _ = fs::remove_dir_all(root);
}

#[test]
fn missing_results_file_is_an_interrupted_run() {
    let root = temp_root();

    let run = results::parse_results_file(&root.join("no-such-results.json"));

    assert_eq!(run.status, RunStatus::TestrunInterrupted);
    assert!(run.test_results.is_empty());
    assert!(run.logs.is_empty());

    let _ = fs::remove_dir_all(root);
}

#[test]
fn undecodable_results_file_is_an_interrupted_run() {
    let root = temp_root();
    let results_file = root.join("results.json");
    fs::write(&results_file, "Exception in thread \"main\" java.lang.StackOverflowError")
        .expect("write garbage results");

    let run = results::parse_results_file(&results_file);

    assert_eq!(run.status, RunStatus::TestrunInterrupted);
    assert!(run.test_results.is_empty());
    assert!(run.logs.is_empty());

    let _ = fs::remove_dir_all(root);
}

#[test]
fn compile_failure_carries_build_output_and_no_tests() {
    let run = results::compile_failure(b"BUILD FAILED: cannot find symbol".to_vec());

    assert_eq!(run.status, RunStatus::CompileFailed);
    assert!(run.test_results.is_empty());
    let log = run.logs.get(COMPILER_OUTPUT).expect("compiler output log");
    assert!(!log.is_empty());
}
