use std::{cell::RefCell, rc::Rc};

use pretty_assertions::assert_eq;
use unitcase::{RunOutcome, TestRunner, console::WriteConsole, prelude::*, test::SubTest};

mod cases;

use cases::*;
use sanitize::sanitize_log;

const SHAPE_LOG: &str = "\
==========================================================

----------- TEST Log for Square -----------

Running -- test_area
Running -- test_perimeter
FAILED (test_perimeter) -- actual <12> should be equal to expected <16> -- four sides
Running -- test_explodes
EXCEPTION OCCURRED in test_explodes -- 0% -- 0 of 1
Panic: side must be positive
    at tests/log/cases.rs:<line>:<col>


----------- TEST Listing for Square -----------

test_area -- 100% -- 2 of 2
test_perimeter -- 0% -- 0 of 1
test_explodes -- 0% -- 0 of 1
";

fn totals<C: TestCase>(case: &C) -> Vec<(usize, usize)> {
    case.sub_tests()
        .iter()
        .map(|sub_test| (sub_test.total_count(), sub_test.passed_count()))
        .collect()
}

#[test]
fn full_run_log() {
    let mut case = ShapeTest::default();
    TestManager::new().run_unit_test(&mut case);
    assert_eq!(sanitize_log(case.log()), SHAPE_LOG);
    assert_eq!(case.status_label(), "ERRORS");
}

#[test]
fn console_receives_every_logged_line() {
    let lines = Rc::new(RefCell::new(Vec::<String>::new()));
    let mut case = ShapeTest {
        state: CaseState::default().with_console({
            let lines = Rc::clone(&lines);
            move |line: &str| lines.borrow_mut().push(line.to_owned())
        }),
    };
    TestManager::new().run_unit_test(&mut case);
    assert_eq!(lines.borrow().join("\n"), case.log());
}

#[test]
fn passing_method_counts_once() {
    let mut case = AlwaysPassesTest::default();
    TestManager::new().run_unit_test(&mut case);
    assert_eq!(totals(&case), [(1, 1)]);
    assert_eq!(case.result_row("Square").percent, 100.0);
    assert!(case.is_passing());
}

#[test]
fn failing_assertion_is_reported() {
    let mut case = ShapeTest::default();
    TestManager::new().run_unit_test_with(&mut case, &["test_perimeter"]);
    assert_eq!(totals(&case), [(0, 0), (1, 0), (0, 0)]);
    assert!(
        case.log()
            .contains("actual <12> should be equal to expected <16>")
    );
}

#[test]
fn plain_error_does_not_stop_the_run() {
    let mut case = ThrowsTest::default();
    TestManager::new().run_unit_test(&mut case);

    let exceptions: Vec<_> = case.sub_tests().iter().map(SubTest::exceptions).collect();
    assert_eq!(exceptions, [1, 0]);
    assert_eq!(totals(&case), [(1, 0), (1, 1)]);
    assert!(case.log().contains("EXCEPTION OCCURRED in test_throws -- 0% -- 0 of 1\nError: \"plain error\"\n"));
    assert!(case.log().contains("Running -- test_after_throw"));
    assert!(case.log().contains("----------- TEST Listing for Square -----------"));
}

#[test]
fn unresolved_unit_aborts_at_pre_check() {
    let mut case = PentagonTest::default();
    let outcome = TestRunner::new(&mut case).run_all();
    assert!(matches!(outcome, RunOutcome::Aborted(_)));

    assert_eq!(
        case.log(),
        "PRE-CHECK FAILED\nError: Unit model class \"Pentagon\" does not exist\nCould not run tests"
    );
    assert_eq!(case.log().matches("PRE-CHECK FAILED").count(), 1);
    assert_eq!(totals(&case), [(0, 0)]);
}

#[test]
fn named_unit_resolves_through_registration() {
    let mut case = AlwaysPassesTest::default();
    let outcome = TestRunner::new(&mut case).run_all();
    assert_eq!(outcome, RunOutcome::Finished);
}

#[test]
fn only_listed_methods_run() {
    let mut case = FooBarTest::default();
    TestManager::new().run_unit_test_with(&mut case, &["test_foo"]);
    assert_eq!(totals(&case), [(1, 1), (0, 0)]);
    assert!(!case.log().contains("bar is never selected"));
    assert!(case.log().contains("test_bar -- 0% -- 0 of 0"));
}

#[test]
fn combined_summary_of_case_classes() {
    let mut manager = TestManager::new().with_console(WriteConsole::new(Vec::new()));
    let mut catalog = CaseCatalog::new();
    catalog
        .add(CaseClass::of::<AlwaysPassesTest>())
        .add(CaseClass::of::<ShapeTest>())
        .add(CaseClass::of::<PentagonTest>());
    catalog.run_all(&mut manager).unwrap();

    let printed = String::from_utf8(manager.into_console().into_inner()).unwrap();
    assert_eq!(
        printed,
        "----------- SUMMARY -----------\n\n\
         AlwaysPassesTest tests AlwaysPassesTest -- 1/1 -- 100%\n\
         ShapeTest tests ShapeTest -- 4/2 -- 50%\n\
         PentagonTest tests PentagonTest -- 0/0 -- 0%\n"
    );
}
