//! Unit tests for Try capture and defect classification.
//!
//! `Try::of` captures panics as `Defect` data; fatal payloads
//! (`FatalDefect`, `Cancellation`) are never captured and always
//! propagate; `Try::catching` narrows the capture to one declared
//! payload type.

#![cfg(feature = "capture")]

use std::panic::{AssertUnwindSafe, catch_unwind, panic_any};

use rstest::rstest;
use twofold::capture::{Cancellation, Defect, FatalDefect, Try, is_fatal};

#[derive(Debug, PartialEq)]
struct IoFailure(&'static str);

#[derive(Debug, PartialEq)]
struct Timeout(u64);

// =============================================================================
// Basic Capture
// =============================================================================

#[rstest]
fn try_of_captures_normal_return() {
    let result: Try<i32> = Try::of(|| 42);
    assert_eq!(result.success_ref(), Some(&42));
}

#[rstest]
fn try_of_captures_thrown_defect_as_failure() {
    let result: Try<i32> = Try::of(|| panic_any(IoFailure("io")));
    let defect = result.unwrap_failure();
    assert_eq!(defect.downcast_ref::<IoFailure>(), Some(&IoFailure("io")));
    assert!(defect.suppressed().is_empty());
}

#[rstest]
fn try_of_captures_string_panics() {
    let result: Try<i32> = Try::of(|| panic!("io failure"));
    assert_eq!(result.unwrap_failure().message(), Some("io failure"));
}

#[rstest]
fn try_of_runs_the_operation_exactly_once() {
    let mut calls = 0;
    let result: Try<i32> = Try::of(AssertUnwindSafe(|| {
        calls += 1;
        42
    }));
    assert_eq!(result.success_ref(), Some(&42));
    assert_eq!(calls, 1);
}

// =============================================================================
// Fatal Classification
// =============================================================================

#[rstest]
fn try_of_propagates_fatal_defect_unwrapped() {
    let propagated = catch_unwind(|| {
        let _: Try<i32> = Try::of(|| panic_any(FatalDefect::new("vm")));
    })
    .unwrap_err();
    // The payload travels untouched: not a Defect, the raw marker.
    assert!(is_fatal(propagated.as_ref()));
    assert!(propagated.downcast_ref::<FatalDefect>().is_some());
}

#[rstest]
fn try_of_propagates_cancellation_signal() {
    let propagated = catch_unwind(|| {
        let _: Try<i32> = Try::of(|| panic_any(Cancellation));
    })
    .unwrap_err();
    assert!(propagated.downcast_ref::<Cancellation>().is_some());
}

// =============================================================================
// Constrained Capture
// =============================================================================

#[rstest]
fn catching_captures_declared_type() {
    let result: Try<i32> = Try::catching::<Timeout, _>(|| panic_any(Timeout(30)));
    assert_eq!(
        result.unwrap_failure().downcast_ref::<Timeout>(),
        Some(&Timeout(30)),
    );
}

#[rstest]
fn catching_reraises_undeclared_type_untouched() {
    let propagated = catch_unwind(|| {
        let _: Try<i32> = Try::catching::<Timeout, _>(|| panic_any(IoFailure("io")));
    })
    .unwrap_err();
    // Re-raised as a flattened Defect still holding the original payload.
    let defect = propagated.downcast::<Defect>().expect("defect payload");
    assert_eq!(defect.downcast_ref::<IoFailure>(), Some(&IoFailure("io")));
}

#[rstest]
fn catching_still_propagates_fatal_defects() {
    let propagated = catch_unwind(|| {
        let _: Try<i32> = Try::catching::<FatalDefect, _>(|| panic_any(FatalDefect::new("vm")));
    })
    .unwrap_err();
    assert!(propagated.downcast_ref::<FatalDefect>().is_some());
}

// =============================================================================
// Bridging and Propagation
// =============================================================================

#[rstest]
fn of_result_wraps_error_without_running_user_code() {
    let result: Try<i32> = Try::of_result(Err::<i32, _>(IoFailure("io")));
    assert_eq!(
        result.unwrap_failure().downcast_ref::<IoFailure>(),
        Some(&IoFailure("io")),
    );
}

#[rstest]
fn escalate_returns_success_value() {
    let result: Try<i32> = Try::of(|| 42);
    assert_eq!(result.escalate(), 42);
}

#[rstest]
fn escalate_then_recapture_preserves_the_defect() {
    let broken: Try<i32> = Try::of(|| panic_any(IoFailure("io")));
    let recaptured: Try<i32> = Try::of(|| broken.escalate());
    let defect = recaptured.unwrap_failure();
    // Flattened on recapture: the original defect, not a defect-in-a-defect.
    assert_eq!(defect.downcast_ref::<IoFailure>(), Some(&IoFailure("io")));
}

#[rstest]
fn escalate_preserves_suppressed_defects_across_recapture() {
    let decorated = Defect::new(IoFailure("primary")).with_suppressed(Defect::new("cleanup"));
    let broken: Try<i32> = Try::Failure(decorated);
    let recaptured: Try<i32> = Try::of(|| broken.escalate());
    let defect = recaptured.unwrap_failure();
    assert_eq!(defect.suppressed().len(), 1);
    assert_eq!(defect.suppressed()[0].message(), Some("cleanup"));
}

// =============================================================================
// Defect Accessors
// =============================================================================

#[rstest]
fn defect_describe_mentions_suppressed_count() {
    let defect = Defect::new("primary").with_suppressed(Defect::new("secondary"));
    assert_eq!(defect.describe(), "primary (+1 suppressed)");
}

#[rstest]
fn defect_downcast_returns_self_on_mismatch() {
    let defect = Defect::new(IoFailure("io"));
    let defect = defect.downcast::<Timeout>().unwrap_err();
    assert!(defect.is::<IoFailure>());
}
