//! Try - running fallible operations as captured outcomes.
//!
//! [`Try<T>`] is not a new container: it is
//! [`Outcome<T, Defect>`](crate::container::Outcome) with a capturing
//! construction protocol. [`Try::of`] runs an operation once and turns a
//! panic into a [`Defect`] held in the failure channel, unless the
//! payload is classified fatal, in which case it propagates untouched.
//! [`Try::catching`] narrows the capture to one declared payload type.
//!
//! # Examples
//!
//! ```rust
//! use twofold::capture::Try;
//!
//! let fine: Try<i32> = Try::of(|| 42);
//! assert_eq!(fine.success_ref(), Some(&42));
//!
//! let broken: Try<i32> = Try::of(|| panic!("io"));
//! assert!(broken.is_failure());
//! ```

use std::any::Any;
use std::panic::{UnwindSafe, catch_unwind};

use crate::container::Outcome;

use super::defect::{Defect, classify};

/// The outcome of a captured fallible operation.
///
/// A plain type alias: everything `Outcome` can do, `Try` can do. The
/// inherent constructors below are what make it a distinct protocol.
pub type Try<T> = Outcome<T, Defect>;

impl<T> Outcome<T, Defect> {
    // =========================================================================
    // Capture
    // =========================================================================

    /// Runs the operation once, capturing a panic as the failure channel.
    ///
    /// A normal return becomes `Success`. A panic is classified: fatal
    /// payloads ([`FatalDefect`](crate::capture::FatalDefect),
    /// [`Cancellation`](crate::capture::Cancellation)) are re-raised
    /// immediately and never constructed as data; everything else becomes
    /// `Failure(Defect)`. A payload that is already a `Defect` (from
    /// [`Defect::raise`]) is flattened rather than wrapped again.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::capture::Try;
    ///
    /// assert_eq!(Try::of(|| 21 * 2).success_ref(), Some(&42));
    ///
    /// let failed: Try<i32> = Try::of(|| panic!("io failure"));
    /// assert_eq!(failed.unwrap_failure().message(), Some("io failure"));
    /// ```
    pub fn of<F>(operation: F) -> Self
    where
        F: FnOnce() -> T + UnwindSafe,
    {
        match catch_unwind(operation) {
            Ok(value) => Self::Success(value),
            Err(payload) => Self::Failure(classify(payload)),
        }
    }

    /// Runs the operation once, capturing only panics whose payload is of
    /// type `D`.
    ///
    /// Fatal payloads propagate as with [`of`](Self::of). A non-fatal
    /// payload of any type other than `D` is re-raised untouched, so a
    /// caller captures precisely the defect type it declared instead of
    /// everything that can go wrong.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::panic::panic_any;
    /// use twofold::capture::Try;
    ///
    /// #[derive(Debug)]
    /// struct Timeout(u64);
    ///
    /// let captured: Try<i32> = Try::catching::<Timeout, _>(|| panic_any(Timeout(30)));
    /// assert!(captured.unwrap_failure().is::<Timeout>());
    /// ```
    pub fn catching<D, F>(operation: F) -> Self
    where
        D: Any,
        F: FnOnce() -> T + UnwindSafe,
    {
        match catch_unwind(operation) {
            Ok(value) => Self::Success(value),
            Err(payload) => {
                let defect = classify(payload);
                if defect.is::<D>() {
                    Self::Failure(defect)
                } else {
                    defect.raise()
                }
            }
        }
    }

    /// Bridges an already-represented failure into the capture world.
    ///
    /// No user code runs and nothing is classified: an `Err` payload is
    /// wrapped as a defect directly.
    #[inline]
    pub fn of_result<E>(result: Result<T, E>) -> Self
    where
        E: Any + Send,
    {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(Defect::new(error)),
        }
    }

    // =========================================================================
    // Propagation
    // =========================================================================

    /// Returns the success value, or re-raises the captured defect.
    ///
    /// The direct-propagation unwrap: the defect travels whole, with its
    /// suppressed list, and can be captured again downstream.
    ///
    /// # Panics
    ///
    /// Re-raises the captured defect if this is a `Failure`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::capture::Try;
    ///
    /// let fine: Try<i32> = Try::of(|| 42);
    /// assert_eq!(fine.escalate(), 42);
    ///
    /// let broken: Try<i32> = Try::of(|| panic!("io"));
    /// let recaptured: Try<i32> = Try::of(|| broken.escalate());
    /// assert_eq!(recaptured.unwrap_failure().message(), Some("io"));
    /// ```
    pub fn escalate(self) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(defect) => defect.raise(),
        }
    }
}
