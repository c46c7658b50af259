//! Assertion engine.

use super::{FailureRecord, SourceLocation};

/// Fail with [`FailureKind::ConditionFailed`](super::FailureKind) unless `condition` holds.
pub fn assert_condition(condition: bool, location: SourceLocation) -> Result<(), FailureRecord> {
    if condition {
        Ok(())
    } else {
        Err(FailureRecord::condition_failed(location))
    }
}

/// `assert_condition(a == b, location)`. Equality is whatever `PartialEq` says.
pub fn assert_equal<A, B>(a: A, b: B, location: SourceLocation) -> Result<(), FailureRecord>
where
    A: PartialEq<B>,
{
    assert_condition(a == b, location)
}

/// `assert_condition(a != b, location)`.
pub fn assert_not_equal<A, B>(a: A, b: B, location: SourceLocation) -> Result<(), FailureRecord>
where
    A: PartialEq<B>,
{
    assert_condition(a != b, location)
}

/// Check a condition, returning early from the enclosing example on failure.
#[macro_export]
macro_rules! check {
    ($cond:expr $(,)?) => {
        $crate::harness::assert_condition($cond, $crate::here!())?
    };
}

/// Check `a == b`, returning early from the enclosing example on failure.
#[macro_export]
macro_rules! check_eq {
    ($a:expr, $b:expr $(,)?) => {
        $crate::harness::assert_equal(&$a, &$b, $crate::here!())?
    };
}

/// Check `a != b`, returning early from the enclosing example on failure.
#[macro_export]
macro_rules! check_ne {
    ($a:expr, $b:expr $(,)?) => {
        $crate::harness::assert_not_equal(&$a, &$b, $crate::here!())?
    };
}
