//! Unit tests for resource-scoped Try execution.
//!
//! Resources are acquired in declared order and closed in reverse
//! acquisition order; close-time defects are suppressed onto the
//! primary defect (or promoted to primary when the operation itself
//! succeeded); fatal payloads abandon remaining cleanup.

#![cfg(feature = "capture")]

use std::cell::RefCell;
use std::panic::{AssertUnwindSafe, catch_unwind, panic_any};

use rstest::rstest;
use twofold::capture::{Cancellation, Closeable, Try};

#[derive(Debug, PartialEq)]
struct AcquireFailed(&'static str);

/// A test resource that records close order and can be told to fail.
struct Tracked<'a> {
    name: &'static str,
    log: &'a RefCell<Vec<&'static str>>,
    close_panics: bool,
}

impl<'a> Tracked<'a> {
    fn quiet(name: &'static str, log: &'a RefCell<Vec<&'static str>>) -> Self {
        Self {
            name,
            log,
            close_panics: false,
        }
    }

    fn failing(name: &'static str, log: &'a RefCell<Vec<&'static str>>) -> Self {
        Self {
            name,
            log,
            close_panics: true,
        }
    }
}

impl Closeable for Tracked<'_> {
    fn close(self) {
        self.log.borrow_mut().push(self.name);
        if self.close_panics {
            panic!("close {} failed", self.name);
        }
    }
}

/// An acquire step that always fails.
fn failing_acquire<'a>(name: &'static str) -> Tracked<'a> {
    panic_any(AcquireFailed(name))
}

// =============================================================================
// Single Resource
// =============================================================================

#[rstest]
fn with_resource_closes_after_success() {
    let log = RefCell::new(Vec::new());
    let result = Try::with_resource(|| Tracked::quiet("r", &log), |_| 42);
    assert_eq!(result.success_ref(), Some(&42));
    assert_eq!(*log.borrow(), vec!["r"]);
}

#[rstest]
fn with_resource_closes_after_operation_defect() {
    let log = RefCell::new(Vec::new());
    let result: Try<i32> =
        Try::with_resource(|| Tracked::quiet("r", &log), |_| panic!("operation failed"));
    assert_eq!(result.unwrap_failure().message(), Some("operation failed"));
    assert_eq!(*log.borrow(), vec!["r"]);
}

#[rstest]
fn with_resource_acquisition_defect_skips_close() {
    let log: RefCell<Vec<&'static str>> = RefCell::new(Vec::new());
    let result: Try<i32> = Try::with_resource(|| failing_acquire("r"), |_| 42);
    let defect = result.unwrap_failure();
    assert_eq!(defect.downcast_ref::<AcquireFailed>(), Some(&AcquireFailed("r")));
    assert!(defect.suppressed().is_empty());
    assert!(log.borrow().is_empty());
}

#[rstest]
fn with_resource_close_defect_replaces_discarded_success() {
    let log = RefCell::new(Vec::new());
    let result: Try<i32> = Try::with_resource(|| Tracked::failing("r", &log), |_| 42);
    let defect = result.unwrap_failure();
    assert_eq!(defect.message(), Some("close r failed"));
    assert!(defect.suppressed().is_empty());
}

#[rstest]
fn with_resource_suppresses_close_defect_under_operation_defect() {
    let log = RefCell::new(Vec::new());
    let result: Try<i32> =
        Try::with_resource(|| Tracked::failing("r", &log), |_| panic!("operation failed"));
    let defect = result.unwrap_failure();
    assert_eq!(defect.message(), Some("operation failed"));
    assert_eq!(defect.suppressed().len(), 1);
    assert_eq!(defect.suppressed()[0].message(), Some("close r failed"));
}

// =============================================================================
// Two Resources
// =============================================================================

#[rstest]
fn with_resources_acquires_in_order_and_closes_in_reverse() {
    let log = RefCell::new(Vec::new());
    let result = Try::with_resources(
        || Tracked::quiet("first", &log),
        || Tracked::quiet("second", &log),
        |first, second| format!("{}+{}", first.name, second.name),
    );
    assert_eq!(result.success_ref().map(String::as_str), Some("first+second"));
    assert_eq!(*log.borrow(), vec!["second", "first"]);
}

#[rstest]
fn with_resources_operation_defect_with_both_closes_failing() {
    // R1 acquired, then R2; the operation raises; both closes fail.
    // The operation's defect stays primary with exactly two suppressed
    // defects, R2's close defect before R1's.
    let log = RefCell::new(Vec::new());
    let result: Try<i32> = Try::with_resources(
        || Tracked::failing("first", &log),
        || Tracked::failing("second", &log),
        |_, _| panic!("operation failed"),
    );
    let defect = result.unwrap_failure();
    assert_eq!(defect.message(), Some("operation failed"));
    assert_eq!(defect.suppressed().len(), 2);
    assert_eq!(defect.suppressed()[0].message(), Some("close second failed"));
    assert_eq!(defect.suppressed()[1].message(), Some("close first failed"));
    assert_eq!(*log.borrow(), vec!["second", "first"]);
}

#[rstest]
fn with_resources_first_close_defect_becomes_primary_after_success() {
    let log = RefCell::new(Vec::new());
    let result: Try<i32> = Try::with_resources(
        || Tracked::failing("first", &log),
        || Tracked::failing("second", &log),
        |_, _| 42,
    );
    let defect = result.unwrap_failure();
    // The function's result is discarded; LIFO order makes the second
    // resource's close defect the first encountered.
    assert_eq!(defect.message(), Some("close second failed"));
    assert_eq!(defect.suppressed().len(), 1);
    assert_eq!(defect.suppressed()[0].message(), Some("close first failed"));
}

#[rstest]
fn with_resources_second_acquisition_defect_closes_first_resource() {
    let log = RefCell::new(Vec::new());
    let result: Try<i32> = Try::with_resources(
        || Tracked::quiet("first", &log),
        || failing_acquire("second"),
        |_, _| 42,
    );
    let defect = result.unwrap_failure();
    assert_eq!(
        defect.downcast_ref::<AcquireFailed>(),
        Some(&AcquireFailed("second")),
    );
    assert!(defect.suppressed().is_empty());
    assert_eq!(*log.borrow(), vec!["first"]);
}

#[rstest]
fn with_resources_suppresses_close_defect_onto_acquisition_defect() {
    let log = RefCell::new(Vec::new());
    let result: Try<i32> = Try::with_resources(
        || Tracked::failing("first", &log),
        || failing_acquire("second"),
        |_, _| 42,
    );
    let defect = result.unwrap_failure();
    assert_eq!(
        defect.downcast_ref::<AcquireFailed>(),
        Some(&AcquireFailed("second")),
    );
    assert_eq!(defect.suppressed().len(), 1);
    assert_eq!(defect.suppressed()[0].message(), Some("close first failed"));
}

// =============================================================================
// Fatal Defects Abandon Cleanup
// =============================================================================

#[rstest]
fn fatal_operation_defect_propagates_before_any_close() {
    let log = RefCell::new(Vec::new());
    let propagated = catch_unwind(AssertUnwindSafe(|| {
        let _: Try<i32> = Try::with_resources(
            || Tracked::quiet("first", &log),
            || Tracked::quiet("second", &log),
            |_, _| panic_any(Cancellation),
        );
    }))
    .unwrap_err();
    assert!(propagated.downcast_ref::<Cancellation>().is_some());
    // Cleanup steps not yet started are abandoned.
    assert!(log.borrow().is_empty());
}

#[rstest]
fn fatal_close_defect_propagates_and_abandons_remaining_closes() {
    struct FatalOnClose<'a> {
        log: &'a RefCell<Vec<&'static str>>,
    }

    impl Closeable for FatalOnClose<'_> {
        fn close(self) {
            self.log.borrow_mut().push("fatal");
            panic_any(Cancellation);
        }
    }

    let log = RefCell::new(Vec::new());
    let tracked_log = RefCell::new(Vec::new());
    let propagated = catch_unwind(AssertUnwindSafe(|| {
        let _: Try<i32> = Try::with_resources(
            || Tracked::quiet("first", &tracked_log),
            || FatalOnClose { log: &log },
            |_, _| 42,
        );
    }))
    .unwrap_err();
    assert!(propagated.downcast_ref::<Cancellation>().is_some());
    assert_eq!(*log.borrow(), vec!["fatal"]);
    // The first resource's close never started.
    assert!(tracked_log.borrow().is_empty());
}
