//! Resource-scoped execution with deterministic cleanup.
//!
//! The scoped constructors acquire resources in declared order, run the
//! user operation, and close every acquired resource in reverse
//! acquisition order, whether or not the operation panicked. Close-time
//! defects never replace an operation defect: they are appended to it as
//! suppressed defects, in the order encountered while closing. Fatal
//! payloads propagate immediately at every stage, abandoning cleanup
//! steps not yet started.
//!
//! # Examples
//!
//! ```rust
//! use twofold::capture::{Closeable, Try};
//!
//! struct Connection {
//!     id: u32,
//! }
//!
//! impl Closeable for Connection {
//!     fn close(self) {}
//! }
//!
//! let result = Try::with_resource(
//!     || Connection { id: 7 },
//!     |connection| connection.id * 6,
//! );
//! assert_eq!(result.success_ref(), Some(&42));
//! ```

use std::panic::{AssertUnwindSafe, catch_unwind};

use smallvec::SmallVec;

use crate::container::Outcome;

use super::defect::{Defect, classify};
use super::fallible::Try;

/// The resource-acquisition capability consumed by the scoped
/// constructors.
///
/// A `Closeable` releases whatever it holds when [`close`](Self::close)
/// is invoked. Closing may panic; the scoped constructors capture such a
/// panic as a suppressed or primary defect according to the outcome of
/// the operation being cleaned up after.
pub trait Closeable {
    /// Releases the resource.
    ///
    /// Invoked exactly once per successfully acquired resource, in
    /// reverse acquisition order.
    fn close(self);
}

/// Closes a resource, capturing a close-time panic as a defect.
fn close_captured<R: Closeable>(resource: R) -> Option<Defect> {
    match catch_unwind(AssertUnwindSafe(move || resource.close())) {
        Ok(()) => None,
        Err(payload) => Some(classify(payload)),
    }
}

/// Adjudicates the operation result against the close defects collected
/// in LIFO encounter order.
fn adjudicate<T>(
    result: Result<T, Defect>,
    close_defects: SmallVec<[Defect; 2]>,
) -> Try<T> {
    let mut close_defects = close_defects.into_iter();
    match result {
        Ok(value) => match close_defects.next() {
            None => Outcome::Success(value),
            // The operation's value is discarded: the first close defect
            // becomes primary, the rest are suppressed on it.
            Some(primary) => Outcome::Failure(close_defects.fold(primary, Defect::with_suppressed)),
        },
        Err(primary) => Outcome::Failure(close_defects.fold(primary, Defect::with_suppressed)),
    }
}

impl<T> Outcome<T, Defect> {
    /// Acquires one resource, runs the operation with it, and closes the
    /// resource afterwards.
    ///
    /// - An acquisition panic becomes the failure directly; nothing is
    ///   closed.
    /// - An operation panic becomes the primary defect; a close panic on
    ///   top of it is suppressed onto it.
    /// - A close panic after a successful operation becomes the failure,
    ///   and the operation's value is discarded.
    /// - Fatal payloads propagate at every stage; a fatal operation
    ///   defect propagates before the close is attempted.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::capture::{Closeable, Try};
    ///
    /// struct Temp;
    ///
    /// impl Closeable for Temp {
    ///     fn close(self) {
    ///         panic!("close failed");
    ///     }
    /// }
    ///
    /// let result: Try<i32> = Try::with_resource(|| Temp, |_| 42);
    /// assert_eq!(result.unwrap_failure().message(), Some("close failed"));
    /// ```
    pub fn with_resource<R, A, F>(acquire: A, operation: F) -> Self
    where
        R: Closeable,
        A: FnOnce() -> R,
        F: FnOnce(&mut R) -> T,
    {
        let mut resource = match catch_unwind(AssertUnwindSafe(acquire)) {
            Ok(resource) => resource,
            Err(payload) => return Self::Failure(classify(payload)),
        };

        // Classify before closing: a fatal operation payload must
        // propagate without the close being attempted.
        let result = catch_unwind(AssertUnwindSafe(|| operation(&mut resource))).map_err(classify);

        let mut close_defects: SmallVec<[Defect; 2]> = SmallVec::new();
        if let Some(defect) = close_captured(resource) {
            close_defects.push(defect);
        }
        adjudicate(result, close_defects)
    }

    /// Acquires two resources in declared order, runs the operation with
    /// both, and closes them in reverse acquisition order.
    ///
    /// Acquisition short-circuits: if acquiring the second resource
    /// panics, the first (already acquired) resource is closed and any
    /// close defect is suppressed onto the acquisition defect; the
    /// second is never closed because it was never acquired. After the
    /// operation, the second resource closes before the first; close
    /// defects are recorded in that encounter order, either suppressed
    /// onto the operation defect or promoted to primary when the
    /// operation itself succeeded.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::capture::{Closeable, Try};
    ///
    /// struct Channel(&'static str);
    ///
    /// impl Closeable for Channel {
    ///     fn close(self) {}
    /// }
    ///
    /// let result = Try::with_resources(
    ///     || Channel("in"),
    ///     || Channel("out"),
    ///     |input, output| format!("{} -> {}", input.0, output.0),
    /// );
    /// assert_eq!(result.success_ref().map(String::as_str), Some("in -> out"));
    /// ```
    pub fn with_resources<R1, R2, A1, A2, F>(
        acquire_first: A1,
        acquire_second: A2,
        operation: F,
    ) -> Self
    where
        R1: Closeable,
        R2: Closeable,
        A1: FnOnce() -> R1,
        A2: FnOnce() -> R2,
        F: FnOnce(&mut R1, &mut R2) -> T,
    {
        let mut first = match catch_unwind(AssertUnwindSafe(acquire_first)) {
            Ok(resource) => resource,
            Err(payload) => return Self::Failure(classify(payload)),
        };

        let mut second = match catch_unwind(AssertUnwindSafe(acquire_second)) {
            Ok(resource) => resource,
            Err(payload) => {
                // Fatal acquisition payloads propagate before `first`
                // is closed.
                let mut defect = classify(payload);
                if let Some(close_defect) = close_captured(first) {
                    defect = defect.with_suppressed(close_defect);
                }
                return Self::Failure(defect);
            }
        };

        let result = catch_unwind(AssertUnwindSafe(|| operation(&mut first, &mut second)))
            .map_err(classify);

        // Reverse acquisition order; encounter order of defects is the
        // suppression order.
        let mut close_defects: SmallVec<[Defect; 2]> = SmallVec::new();
        if let Some(defect) = close_captured(second) {
            close_defects.push(defect);
        }
        if let Some(defect) = close_captured(first) {
            close_defects.push(defect);
        }
        adjudicate(result, close_defects)
    }
}
