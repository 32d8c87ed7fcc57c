//! Pure, channel-preserving conversions between containers.
//!
//! Every function here folds one container into the constructors of
//! another without touching the payload: the primary channel of the
//! input lands in the primary channel of the output, and likewise for
//! the secondary channel. Conversions through a compatible failure type
//! round-trip: `either_to_outcome` undoes `outcome_to_either`, and
//! `try_to_outcome` undoes `outcome_to_try` for any payload type the
//! defect can carry.
//!
//! # Examples
//!
//! ```rust
//! use twofold::container::{Either, Outcome};
//! use twofold::convert::{either_to_outcome, outcome_to_either};
//!
//! let outcome: Outcome<i32, String> = Outcome::Success(42);
//! let either = outcome_to_either(outcome);
//! assert_eq!(either, Either::Right(42));
//! assert_eq!(either_to_outcome(either), Outcome::Success(42));
//! ```

use std::any::Any;

use crate::capture::{Defect, Try};
use crate::container::{Either, Maybe, Outcome};

// =============================================================================
// Either <-> Outcome
// =============================================================================

/// Converts an `Either` to an `Outcome`: `Right` becomes `Success`,
/// `Left` becomes `Failure`.
#[inline]
pub fn either_to_outcome<L, R>(either: Either<L, R>) -> Outcome<R, L> {
    match either {
        Either::Left(value) => Outcome::Failure(value),
        Either::Right(value) => Outcome::Success(value),
    }
}

/// Converts an `Outcome` to an `Either`: `Success` becomes `Right`,
/// `Failure` becomes `Left`.
#[inline]
pub fn outcome_to_either<T, E>(outcome: Outcome<T, E>) -> Either<E, T> {
    match outcome {
        Outcome::Success(value) => Either::Right(value),
        Outcome::Failure(error) => Either::Left(error),
    }
}

// =============================================================================
// Outcome <-> Maybe
// =============================================================================

/// Converts an `Outcome` to a `Maybe`, discarding the failure payload.
///
/// `Success` becomes `Just`; `Failure` becomes `Nothing`. The failure
/// payload is dropped; keep the outcome when it must be inspectable.
#[inline]
pub fn outcome_to_maybe<T, E>(outcome: Outcome<T, E>) -> Maybe<T> {
    match outcome {
        Outcome::Success(value) => Maybe::Just(value),
        Outcome::Failure(_) => Maybe::Nothing,
    }
}

/// Converts a `Maybe` to an `Outcome`, supplying the failure for the
/// empty case.
///
/// The supplier is never invoked on a `Just`.
#[inline]
pub fn maybe_to_outcome<T, E, F>(maybe: Maybe<T>, on_nothing: F) -> Outcome<T, E>
where
    F: FnOnce() -> E,
{
    match maybe {
        Maybe::Just(value) => Outcome::Success(value),
        Maybe::Nothing => Outcome::Failure(on_nothing()),
    }
}

// =============================================================================
// Maybe <-> Option
// =============================================================================

/// Converts a host-ecosystem `Option` to a `Maybe`.
#[inline]
pub fn option_to_maybe<T>(option: Option<T>) -> Maybe<T> {
    Maybe::from_option(option)
}

/// Converts a `Maybe` to a host-ecosystem `Option`.
#[inline]
pub fn maybe_to_option<T>(maybe: Maybe<T>) -> Option<T> {
    maybe.just()
}

// =============================================================================
// Outcome <-> Try
// =============================================================================

/// Lifts a represented failure into the capture world.
///
/// `Failure(error)` becomes a failure holding `Defect::new(error)`; no
/// user code runs and nothing is classified.
#[inline]
pub fn outcome_to_try<T, E>(outcome: Outcome<T, E>) -> Try<T>
where
    E: Any + Send,
{
    match outcome {
        Outcome::Success(value) => Outcome::Success(value),
        Outcome::Failure(error) => Outcome::Failure(Defect::new(error)),
    }
}

/// Recovers a typed failure from the capture world.
///
/// Succeeds when the defect's payload is of type `E`, restoring the
/// outcome `outcome_to_try` started from. A defect holding any other
/// payload type comes back unchanged as the `Err` case.
///
/// # Errors
///
/// Returns the original `Try` when the failure payload is not an `E`.
///
/// # Examples
///
/// ```rust
/// use twofold::container::Outcome;
/// use twofold::convert::{outcome_to_try, try_to_outcome};
///
/// let original: Outcome<i32, String> = Outcome::Failure("boom".to_string());
/// let lifted = outcome_to_try(original.clone());
/// assert_eq!(try_to_outcome::<i32, String>(lifted).ok(), Some(original));
/// ```
pub fn try_to_outcome<T, E>(captured: Try<T>) -> Result<Outcome<T, E>, Try<T>>
where
    E: Any,
{
    match captured {
        Outcome::Success(value) => Ok(Outcome::Success(value)),
        Outcome::Failure(defect) => match defect.downcast::<E>() {
            Ok(error) => Ok(Outcome::Failure(error)),
            Err(defect) => Err(Outcome::Failure(defect)),
        },
    }
}
