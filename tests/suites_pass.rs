// Every registered example must pass when run through the harness.

use runnables::harness::{run_registered, Status};
use runnables::suites::{self, SUITES};
use termcolor::NoColor;

#[test]
fn every_registered_example_passes() {
    for suite in SUITES {
        for example in suite.examples {
            let mut out = NoColor::new(Vec::new());
            let result = run_registered(&mut out, example)
                .unwrap_or_else(|e| panic!("{}::{} aborted: {}", suite.name, example.name, e));
            assert_eq!(
                result.status,
                Status::Passed,
                "{}::{} failed: {:?}",
                suite.name,
                example.name,
                result.message
            );
        }
    }
}

#[test]
fn suite_report_starts_with_its_title() {
    let suite = suites::find("generics").unwrap();
    let mut out = NoColor::new(Vec::new());
    let results = suite.run(&mut out).unwrap();
    assert_eq!(results.len(), suite.examples.len());

    let printed = String::from_utf8(out.into_inner()).unwrap();
    let mut lines = printed.lines();
    assert_eq!(lines.next(), Some("Generics, traits & closures runnable examples:"));
    for (line, example) in lines.zip(suite.examples) {
        assert_eq!(line, format!("  {}... OK", example.name));
    }
}
