//! Expectation engine.
//!
//! [`expect_failure`] runs an operation once and is satisfied by *any* failure
//! signal it raises: an `Err` return or a panic. It does not distinguish an
//! intended error from an assertion that failed inside the operation, so the
//! operation body should not be able to fail for unrelated reasons.
//!
//! Panics raised while an [`ExpectedPanic`] guard is alive on the panicking
//! thread are not printed by the panic hook, so an all-passing run leaves
//! stderr to the log.

use std::cell::Cell;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Once;

use super::{FailureRecord, SourceLocation};

/// How an operation's return value reports whether it raised a failure.
pub trait Completion {
    fn raised(&self) -> bool;
}

impl Completion for () {
    fn raised(&self) -> bool {
        false
    }
}

impl<T, E> Completion for Result<T, E> {
    fn raised(&self) -> bool {
        self.is_err()
    }
}

thread_local! {
    static PANIC_EXPECTED: Cell<bool> = const { Cell::new(false) };
}

static QUIET_HOOK: Once = Once::new();

/// Marks panics on the current thread as expected until dropped.
///
/// The first guard wraps the installed panic hook; panics outside a guard,
/// and on other threads, are still reported by it.
#[must_use = "panics are only silenced while the guard is alive"]
#[derive(Debug)]
pub struct ExpectedPanic {
    outer: bool,
}

impl ExpectedPanic {
    pub fn enter() -> Self {
        QUIET_HOOK.call_once(|| {
            let report = panic::take_hook();
            panic::set_hook(Box::new(move |info| {
                if !panic_expected() {
                    report(info);
                }
            }));
        });
        let outer = PANIC_EXPECTED.with(|flag| flag.replace(true));
        Self { outer }
    }
}

impl Drop for ExpectedPanic {
    fn drop(&mut self) {
        PANIC_EXPECTED.with(|flag| flag.set(self.outer));
    }
}

/// Whether a panic on the current thread would be silenced.
pub fn panic_expected() -> bool {
    // the hook can run while thread-locals are being torn down
    PANIC_EXPECTED.try_with(Cell::get).unwrap_or(false)
}

/// Run `operation` exactly once and require that it fails.
///
/// Returns [`FailureKind::ExpectedFailureNotRaised`](super::FailureKind) when the
/// operation completes normally. The raised signal itself is discarded.
pub fn expect_failure<F, R>(operation: F, location: SourceLocation) -> Result<(), FailureRecord>
where
    F: FnOnce() -> R,
    R: Completion,
{
    let outcome = {
        let _quiet = ExpectedPanic::enter();
        panic::catch_unwind(AssertUnwindSafe(operation))
    };
    let raised = match outcome {
        Ok(completion) => completion.raised(),
        Err(_payload) => true,
    };

    if raised {
        tracing::trace!(%location, "expected failure observed");
        Ok(())
    } else {
        Err(FailureRecord::expected_failure_not_raised(location))
    }
}

/// Require that an operation fails, returning early from the enclosing
/// example when it does not.
#[macro_export]
macro_rules! expect_failure {
    ($op:expr $(,)?) => {
        $crate::harness::expect_failure($op, $crate::here!())?
    };
}
