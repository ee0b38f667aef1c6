use std::{fs, path::PathBuf};

use rubric::{
    ant::{AntPlugin, scanner},
    plugin::LanguagePlugin,
};
use uuid::Uuid;

fn temp_root() -> PathBuf {
    let root = std::env::temp_dir().join(format!("rubric-scanner-{}", Uuid::new_v4()));
    fs::create_dir_all(&root).expect("create temp root");
    root
}

const ARITH_TEST: &str = r#"
import org.junit.Test;

public class ArithTest {
    @Test
    @Points("arith-funcs")
    public void testAdd() {
        assertEquals(3, Arith.add(1, 2));
    }

    @Test
    @Points("arith-funcs")
    public void testSub() {
        assertEquals(-1, Arith.sub(1, 2));
    }

    @Test
    @Points("arith-funcs")
    public void testMul() {
        assertEquals(2, Arith.mul(1, 2));
    }

    @Test
    @Points("arith-funcs")
    public void testDiv() {
        assertEquals(0, Arith.div(1, 2));
    }

    private int helper() {
        return 0;
    }
}
"#;

#[test]
fn scan_source_finds_annotated_test_methods_only() {
    let tests = scanner::scan_source(ARITH_TEST).expect("scan source");

    assert_eq!(tests.len(), 4);
    assert_eq!(tests[0].name, "ArithTest testAdd");
    assert_eq!(tests[0].points, vec!["arith-funcs"]);
    assert!(tests.iter().all(|test| !test.name.contains("helper")));
}

#[test]
fn class_level_points_precede_method_level_points() {
    let source = r#"
@Points("base")
public class BonusTest {
    @Test
    @Points("extra credit")
    public void testBonus() {}

    @Test
    public void testPlain() {}
}
"#;

    let tests = scanner::scan_source(source).expect("scan source");

    assert_eq!(tests.len(), 2);
    assert_eq!(tests[0].points, vec!["base", "extra", "credit"]);
    assert_eq!(tests[1].points, vec!["base"]);
}

#[test]
fn package_declaration_qualifies_the_class_name() {
    let source = r#"
package com.example.grading;

public class PkgTest {
    @Test
    public void testSomething() {}
}
"#;

    let tests = scanner::scan_source(source).expect("scan source");

    assert_eq!(tests[0].name, "com.example.grading.PkgTest testSomething");
}

#[test]
fn similarly_named_annotations_are_not_tests() {
    let source = r#"
public class FactoryTest {
    @TestFactory
    public void notCollected() {}

    @Test
    public void collected() {}
}
"#;

    let tests = scanner::scan_source(source).expect("scan source");

    assert_eq!(tests.len(), 1);
    assert_eq!(tests[0].name, "FactoryTest collected");
}

#[test]
fn source_without_tests_scans_to_an_empty_list() {
    let source = "public class Plain {\n    public int f() { return 1; }\n}\n";

    let tests = scanner::scan_source(source).expect("scan source");

    assert!(tests.is_empty());
}

#[test]
fn scan_test_sources_sorts_tests_by_name() {
    let root = temp_root();
    fs::write(
        root.join("ZTest.java"),
        "public class ZTest {\n    @Test\n    public void testLast() {}\n}\n",
    )
    .expect("write ZTest");
    fs::write(
        root.join("ATest.java"),
        "public class ATest {\n    @Test\n    public void testFirst() {}\n}\n",
    )
    .expect("write ATest");

    let tests = scanner::scan_test_sources(&root).expect("scan sources");

    let names: Vec<&str> = tests.iter().map(|test| test.name.as_str()).collect();
    assert_eq!(names, vec!["ATest testFirst", "ZTest testLast"]);

    let _ = fs::remove_dir_all(root);
}

#[test]
fn scan_exercise_describes_an_ant_project() {
    let root = temp_root();
    let exercise = root.join("arith_funcs");
    fs::create_dir_all(exercise.join("test")).expect("create test dir");
    fs::write(exercise.join("build.xml"), "<project name=\"arith_funcs\"/>")
        .expect("write build.xml");
    fs::write(exercise.join("test").join("ArithTest.java"), ARITH_TEST)
        .expect("write test source");

    let scanned = AntPlugin::new()
        .scan_exercise(&exercise, "Ant Test")
        .expect("scan succeeds")
        .expect("project type matches");

    assert_eq!(scanned.name, "Ant Test");
    assert_eq!(scanned.tests.len(), 4);
    assert_eq!(scanned.tests[0].name, "ArithTest testAdd");
    assert_eq!(scanned.tests[0].points, vec!["arith-funcs"]);

    let _ = fs::remove_dir_all(root);
}

#[test]
fn exercise_without_test_sources_scans_to_an_empty_exercise() {
    let root = temp_root();
    fs::write(root.join("build.xml"), "<project/>").expect("write build.xml");

    let scanned = AntPlugin::new()
        .scan_exercise(&root, "empty")
        .expect("scan succeeds")
        .expect("project type matches");

    assert!(scanned.tests.is_empty());

    let _ = fs::remove_dir_all(root);
}
