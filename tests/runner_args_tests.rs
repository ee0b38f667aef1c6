use std::{fs, path::PathBuf};

use rubric::{
    domain::{ExerciseDesc, TestDesc},
    runner::TestRunnerArguments,
};
use uuid::Uuid;

fn temp_root() -> PathBuf {
    let root = std::env::temp_dir().join(format!("rubric-runner-{}", Uuid::new_v4()));
    fs::create_dir_all(&root).expect("create temp root");
    root
}

fn arith_exercise() -> ExerciseDesc {
    ExerciseDesc::new("arith_funcs", vec![
        TestDesc::new("ArithTest testAdd", vec!["arith-funcs".to_string()]),
        TestDesc::new("ArithTest testSub", vec!["arith-funcs".to_string(), "bonus".to_string()]),
        TestDesc::new("TrivialTest testF", vec![]),
    ])
}

fn arguments_for(root: &PathBuf, runtime_options: Option<String>) -> Vec<String> {
    TestRunnerArguments::builder()
        .runtime_options(runtime_options)
        .project_base_path(root.clone())
        .test_directory(root.join("build").join("test").join("classes"))
        .result_file(root.join("build").join("results.json"))
        .classpath("lib:build/classes")
        .exercise(arith_exercise())
        .build()
        .arguments()
}

#[test]
fn token_order_is_exact_without_optional_parts() {
    let root = temp_root();

    let arguments = arguments_for(&root, None);

    let expected = vec![
        "java".to_string(),
        format!(
            "-Drubric.test_class_dir={}",
            root.join("build").join("test").join("classes").display()
        ),
        format!("-Drubric.results_file={}", root.join("build").join("results.json").display()),
        "-cp".to_string(),
        "lib:build/classes".to_string(),
        "edu.rubric.testrunner.Main".to_string(),
        "ArithTest.testAdd{arith-funcs}".to_string(),
        "ArithTest.testSub{arith-funcs,bonus}".to_string(),
        "TrivialTest.testF{}".to_string(),
    ];
    assert_eq!(arguments, expected);

    let _ = fs::remove_dir_all(root);
}

#[test]
fn runtime_option_is_inserted_verbatim_after_the_program_token() {
    let root = temp_root();

    let arguments = arguments_for(&root, Some("-Xmx256m".to_string()));

    assert_eq!(arguments[0], "java");
    assert_eq!(arguments[1], "-Xmx256m");
    assert!(arguments[2].starts_with("-Drubric.test_class_dir="));

    let _ = fs::remove_dir_all(root);
}

#[test]
fn endorsed_libs_token_appears_only_when_the_directory_exists() {
    let root = temp_root();

    let without = arguments_for(&root, None);
    assert!(!without.iter().any(|token| token.starts_with("-Djava.endorsed.dirs=")));

    let endorsed = root.join("lib").join("endorsed");
    fs::create_dir_all(&endorsed).expect("create endorsed dir");

    let with = arguments_for(&root, None);
    let expected = format!("-Djava.endorsed.dirs={}", endorsed.display());
    let position = with
        .iter()
        .position(|token| *token == expected)
        .expect("endorsed token present");
    // Probed token sits between the result-file parameter and the classpath
    // flag.
    assert!(with[position - 1].starts_with("-Drubric.results_file="));
    assert_eq!(with[position + 1], "-cp");

    let _ = fs::remove_dir_all(root);
}

#[test]
fn test_tokens_preserve_exercise_order_and_point_order() {
    let root = temp_root();

    let arguments = arguments_for(&root, None);
    let tokens: Vec<&String> = arguments.iter().filter(|token| token.contains('{')).collect();

    assert_eq!(tokens, vec![
        "ArithTest.testAdd{arith-funcs}",
        "ArithTest.testSub{arith-funcs,bonus}",
        "TrivialTest.testF{}",
    ]);

    let _ = fs::remove_dir_all(root);
}

#[test]
fn single_point_test_encodes_to_the_documented_token() {
    let root = temp_root();

    let arguments = TestRunnerArguments::builder()
        .project_base_path(root.clone())
        .test_directory(root.join("test"))
        .result_file(root.join("results.json"))
        .classpath("lib")
        .exercise(ExerciseDesc::new("arith", vec![TestDesc::new(
            "ArithTest testAdd",
            vec!["arith-funcs".to_string()],
        )]))
        .build()
        .arguments();

    assert_eq!(arguments.last().expect("test token"), "ArithTest.testAdd{arith-funcs}");

    let _ = fs::remove_dir_all(root);
}
