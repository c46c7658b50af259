//! Contract tests for the assertion, expectation and runner engines.
//!
//! These drive the public API the way an example file would and compare the
//! exact bytes the runner prints.

use runnables::harness::{
    assert_condition, expect_failure, run_example, ExampleError, FailureKind, SourceLocation, Status,
};
use runnables::{check, check_eq, check_ne, expect_failure, run_example};
use termcolor::NoColor;

fn buffer() -> NoColor<Vec<u8>> {
    NoColor::new(Vec::new())
}

fn text(out: NoColor<Vec<u8>>) -> String {
    String::from_utf8(out.into_inner()).unwrap()
}

#[test]
fn assert_condition_is_total_over_booleans() {
    let loc = SourceLocation::new("any.rs", 1);
    for condition in [true, false] {
        let result = assert_condition(condition, loc);
        assert_eq!(result.is_ok(), condition);
        if let Err(record) = result {
            assert_eq!(record.kind(), FailureKind::ConditionFailed);
        }
    }
}

#[test]
fn expect_failure_depends_only_on_whether_the_operation_raised() {
    let loc = SourceLocation::new("any.rs", 2);
    assert!(expect_failure(|| Err::<(), _>("nope"), loc).is_ok());
    assert!(expect_failure::<_, ()>(|| panic!("boom"), loc).is_ok());

    let record = expect_failure(|| Ok::<u8, String>(1), loc).unwrap_err();
    assert_eq!(record.kind(), FailureKind::ExpectedFailureNotRaised);
}

#[test]
fn passing_example_prints_a_single_ok_line() {
    let mut out = buffer();
    run_example(&mut out, "x", || Ok(())).unwrap();
    assert_eq!(text(out), "  x... OK\n");
}

#[test]
fn failing_condition_prints_the_assertion_location() {
    let loc = SourceLocation::new("src/demo.rs", 31);
    let mut out = buffer();
    run_example(&mut out, "x", || Ok(assert_condition(false, loc)?)).unwrap();
    assert_eq!(
        text(out),
        "  x... FAILED\n    assertion failed @ src/demo.rs:31\n"
    );
}

#[test]
fn unmet_expectation_prints_the_expectation_location() {
    let loc = SourceLocation::new("src/demo.rs", 44);
    let mut out = buffer();
    run_example(&mut out, "x", || Ok(expect_failure(|| {}, loc)?)).unwrap();
    assert_eq!(
        text(out),
        "  x... FAILED\n    no exception thrown as expected @ src/demo.rs:44\n"
    );
}

fn fails_then_would_pass() -> Result<(), ExampleError> {
    check!(false);
    check!(true);
    Ok(())
}

fn passes() -> Result<(), ExampleError> {
    check_eq!(vec![1, 2], [1, 2]);
    check_ne!("a", "b");
    expect_failure!(|| "x".parse::<u32>());
    Ok(())
}

#[test]
fn sequential_examples_are_independent() {
    let mut out = buffer();
    let first = run_example!(&mut out, fails_then_would_pass).unwrap();
    let second = run_example!(&mut out, passes).unwrap();
    assert_eq!(first.status, Status::Failed);
    assert_eq!(second.status, Status::Passed);

    let printed = text(out);
    let lines: Vec<&str> = printed.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "  fails_then_would_pass... FAILED");
    assert!(lines[1].starts_with("    assertion failed @ "));
    assert!(lines[1].ends_with(&format!(":{}", line_of_first_check())));
    assert_eq!(lines[2], "  passes... OK");
}

// `check!(false)` is the first line in the body of `fails_then_would_pass`.
fn line_of_first_check() -> u32 {
    let source = include_str!("harness_contract.rs");
    let fn_line = source
        .lines()
        .position(|l| l.starts_with("fn fails_then_would_pass"))
        .unwrap() as u32
        + 1;
    fn_line + 1
}

#[test]
fn location_names_the_check_not_the_example() {
    let err = fails_then_would_pass().unwrap_err();
    let record = err.as_failure().unwrap();
    assert!(record.location().file.ends_with("harness_contract.rs"));
    assert_eq!(record.location().line, line_of_first_check());
}

#[test]
fn messages_are_deterministic() {
    let a = fails_then_would_pass().unwrap_err().to_string();
    let b = fails_then_would_pass().unwrap_err().to_string();
    assert_eq!(a, b);
}

#[test]
fn non_harness_errors_propagate() {
    let mut out = buffer();
    let err = run_example(&mut out, "broken", || {
        Err(ExampleError::other(std::io::Error::other("disk on fire")))
    })
    .unwrap_err();
    assert!(matches!(err, ExampleError::Other(_)));
    assert_eq!(text(out), "  broken... ");
}

#[test]
fn panics_are_not_caught_by_the_runner() {
    let result = std::panic::catch_unwind(|| {
        let mut out = buffer();
        let _ = run_example(&mut out, "panics", || panic!("genuine defect"));
    });
    assert!(result.is_err());
}

#[test]
fn failure_inside_an_expectation_still_satisfies_it() {
    fn example() -> Result<(), ExampleError> {
        expect_failure!(|| -> Result<(), ExampleError> {
            check!(1 > 2);
            Ok(())
        });
        Ok(())
    }
    let mut out = buffer();
    run_example!(&mut out, example).unwrap();
    assert_eq!(text(out), "  example... OK\n");
}
