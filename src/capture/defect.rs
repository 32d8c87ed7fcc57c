//! Defect values - captured panic payloads and their classification.
//!
//! A [`Defect`] is the data form of a panic: the raw payload plus an
//! ordered list of suppressed defects collected during resource cleanup.
//! Two marker types, [`FatalDefect`] and [`Cancellation`], are classified
//! fatal by [`is_fatal`]: capture sites re-raise them instead of
//! constructing a `Defect`, so a fatal condition always unwinds the
//! calling thread.

use std::any::Any;
use std::fmt;
use std::panic::{RefUnwindSafe, UnwindSafe, resume_unwind};

// =============================================================================
// Fatal markers
// =============================================================================

/// A panic payload that must never be captured as data.
///
/// Raising `FatalDefect` (via [`std::panic::panic_any`]) signals a
/// condition on the level of a broken runtime invariant: every capture
/// site in this crate re-raises it immediately, bypassing container
/// construction and abandoning any cleanup steps not yet started.
///
/// # Examples
///
/// ```rust,should_panic
/// use std::panic::panic_any;
/// use twofold::capture::{FatalDefect, Try};
///
/// // Propagates out of `Try::of` instead of becoming a `Failure`.
/// let _ = Try::of(|| -> i32 { panic_any(FatalDefect::new("heap exhausted")) });
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FatalDefect {
    reason: String,
}

impl FatalDefect {
    /// Creates a fatal defect with the given reason.
    #[inline]
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    /// The reason this condition is fatal.
    #[inline]
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

impl fmt::Display for FatalDefect {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "fatal defect: {}", self.reason)
    }
}

/// A cooperative-cancellation signal.
///
/// Like [`FatalDefect`], a `Cancellation` payload is never captured: it
/// unwinds through every capture site so that a cancelled computation
/// stops promptly instead of being recorded as an ordinary failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cancellation;

impl fmt::Display for Cancellation {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("cancellation signal")
    }
}

/// Returns `true` if the payload must propagate rather than be captured.
///
/// The fatal set is explicit and enumerable: [`FatalDefect`] and
/// [`Cancellation`]. Everything else is capturable. Callers needing a
/// narrower capture than "everything non-fatal" should use
/// [`Try::catching`](crate::capture::Try::catching) rather than extending
/// this predicate.
#[inline]
pub fn is_fatal(payload: &(dyn Any + Send)) -> bool {
    payload.is::<FatalDefect>() || payload.is::<Cancellation>()
}

// =============================================================================
// Defect
// =============================================================================

/// A captured panic payload.
///
/// Holds the raw payload of a panic together with the ordered list of
/// defects suppressed during cleanup. A `Defect` is ordinary data: it
/// propagates only when a caller explicitly re-raises it via
/// [`raise`](Self::raise) or an unwrap-or-raise operation.
///
/// # Examples
///
/// ```rust
/// use twofold::capture::Try;
///
/// let failed: Try<i32> = Try::of(|| panic!("disk on fire"));
/// let defect = failed.unwrap_failure();
/// assert_eq!(defect.message(), Some("disk on fire"));
/// assert!(defect.suppressed().is_empty());
/// ```
pub struct Defect {
    payload: Box<dyn Any + Send>,
    suppressed: Vec<Defect>,
}

impl Defect {
    /// Wraps an arbitrary payload as a defect.
    ///
    /// This is the manual constructor used by bridges from
    /// already-represented failures; capture sites go through the panic
    /// machinery instead.
    #[inline]
    pub fn new<P: Any + Send>(payload: P) -> Self {
        Self {
            payload: Box::new(payload),
            suppressed: Vec::new(),
        }
    }

    /// Builds a defect from a raw panic payload, flattening a payload
    /// that is itself a `Defect`.
    ///
    /// Flattening makes [`raise`](Self::raise) followed by capture an
    /// identity: the original defect comes back, suppressed list intact,
    /// instead of a defect-in-a-defect.
    pub(crate) fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        match payload.downcast::<Self>() {
            Ok(defect) => *defect,
            Err(payload) => Self {
                payload,
                suppressed: Vec::new(),
            },
        }
    }

    // =========================================================================
    // Payload access
    // =========================================================================

    /// Returns `true` if the payload is of type `P`.
    #[inline]
    pub fn is<P: Any>(&self) -> bool {
        self.payload.is::<P>()
    }

    /// Returns a reference to the payload if it is of type `P`.
    #[inline]
    pub fn downcast_ref<P: Any>(&self) -> Option<&P> {
        self.payload.downcast_ref::<P>()
    }

    /// Recovers the payload if it is of type `P`, or returns the defect
    /// unchanged.
    ///
    /// Suppressed defects do not survive a successful downcast; use
    /// [`into_parts`](Self::into_parts) when they must be kept.
    pub fn downcast<P: Any>(self) -> Result<P, Self> {
        match self.payload.downcast::<P>() {
            Ok(payload) => Ok(*payload),
            Err(payload) => Err(Self {
                payload,
                suppressed: self.suppressed,
            }),
        }
    }

    /// Deconstructs into the raw payload and the suppressed list.
    #[inline]
    pub fn into_parts(self) -> (Box<dyn Any + Send>, Vec<Defect>) {
        (self.payload, self.suppressed)
    }

    /// Borrows the payload as a string, when the panic carried one.
    ///
    /// Covers the two payload types produced by the `panic!` macro:
    /// `&'static str` and `String`.
    pub fn message(&self) -> Option<&str> {
        self.payload
            .downcast_ref::<&'static str>()
            .copied()
            .or_else(|| self.payload.downcast_ref::<String>().map(String::as_str))
    }

    /// Renders a human-readable description of the defect.
    pub fn describe(&self) -> String {
        let message = self.message().unwrap_or("non-string defect payload");
        if self.suppressed.is_empty() {
            message.to_string()
        } else {
            format!("{message} (+{} suppressed)", self.suppressed.len())
        }
    }

    // =========================================================================
    // Suppressed defects
    // =========================================================================

    /// The defects suppressed on this one, in the order they were
    /// encountered during cleanup.
    #[inline]
    pub fn suppressed(&self) -> &[Self] {
        &self.suppressed
    }

    /// Appends a suppressed defect, returning the updated defect.
    ///
    /// The primary payload is unchanged; the suppressed list is
    /// append-only.
    #[inline]
    pub fn with_suppressed(mut self, defect: Self) -> Self {
        self.suppressed.push(defect);
        self
    }

    // =========================================================================
    // Propagation
    // =========================================================================

    /// Re-raises the defect, unwinding the calling thread.
    ///
    /// The whole defect travels as the panic payload, so the suppressed
    /// list survives a later capture (capture sites flatten a `Defect`
    /// payload back into the original).
    pub fn raise(self) -> ! {
        resume_unwind(Box::new(self))
    }
}

/// Classifies a raw panic payload: fatal payloads are re-raised
/// immediately, anything else is captured as a `Defect`.
pub(crate) fn classify(payload: Box<dyn Any + Send>) -> Defect {
    if is_fatal(payload.as_ref()) {
        resume_unwind(payload);
    }
    Defect::from_panic(payload)
}

impl fmt::Debug for Defect {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Defect")
            .field("message", &self.message())
            .field("suppressed", &self.suppressed)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Defect {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.describe())
    }
}

// The boxed payload is inert data once captured; it never carries the
// marker traits itself.
impl UnwindSafe for Defect {}
impl RefUnwindSafe for Defect {}

// A defect is freely movable across threads; payloads are `Send` by
// construction.
static_assertions::assert_impl_all!(Defect: Send);
