//! Either type - a value that can be one of two types.
//!
//! This module provides the `Either<L, R>` type, which represents a value
//! that is either a `Left(L)` or a `Right(R)`. `Right` is the primary
//! channel by convention, so the channel-selective combinators treat a
//! `Right` value the way [`Outcome`](crate::container::Outcome) treats a
//! `Success`.
//!
//! # Examples
//!
//! ```rust
//! use twofold::container::Either;
//!
//! let parsed: Either<String, i32> = Either::Right(21);
//!
//! // Transform only the right channel; a Left passes through untouched.
//! let doubled = parsed.map_right(|n| n * 2);
//! assert_eq!(doubled, Either::Right(42));
//!
//! // Eliminate both channels into a common type.
//! let rendered = doubled.fold(|error| error, |n| n.to_string());
//! assert_eq!(rendered, "42");
//! ```

use std::fmt;
use std::hash::Hash;
use std::panic::panic_any;

/// A value that can be one of two types.
///
/// `Either<L, R>` holds exactly one payload, in exactly one of its two
/// channels. By convention `Right` is the primary channel (success, the
/// value a computation was after) and `Left` is the secondary channel
/// (failure, the alternative). The payload is immutable once constructed;
/// every combinator returns a new `Either`.
///
/// # Type Parameters
///
/// * `L` - The type of the left (secondary) value
/// * `R` - The type of the right (primary) value
///
/// # Examples
///
/// ```rust
/// use twofold::container::Either;
///
/// let success: Either<String, i32> = Either::Right(42);
/// let failure: Either<String, i32> = Either::Left("boom".to_string());
///
/// assert_eq!(success.right_or_else(|error| error.len() as i32), 42);
/// assert_eq!(failure.right_or_else(|error| error.len() as i32), 4);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Either<L, R> {
    /// The left variant, conventionally the secondary (failure) channel.
    Left(L),
    /// The right variant, conventionally the primary (success) channel.
    Right(R),
}

impl<L, R> Either<L, R> {
    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Left` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::container::Either;
    ///
    /// let value: Either<i32, String> = Either::Left(42);
    /// assert!(value.is_left());
    /// ```
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::container::Either;
    ///
    /// let value: Either<i32, String> = Either::Right("hello".to_string());
    /// assert!(value.is_right());
    /// ```
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    // =========================================================================
    // Value Extraction (Consuming)
    // =========================================================================

    /// Converts into an `Option<L>`, consuming the either.
    ///
    /// Returns `Some(l)` if this is `Left(l)`, otherwise `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::container::Either;
    ///
    /// let value: Either<i32, String> = Either::Left(42);
    /// assert_eq!(value.left(), Some(42));
    /// ```
    #[inline]
    pub fn left(self) -> Option<L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Converts into an `Option<R>`, consuming the either.
    ///
    /// Returns `Some(r)` if this is `Right(r)`, otherwise `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::container::Either;
    ///
    /// let value: Either<i32, String> = Either::Right("hello".to_string());
    /// assert_eq!(value.right(), Some("hello".to_string()));
    /// ```
    #[inline]
    pub fn right(self) -> Option<R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    // =========================================================================
    // Reference Extraction (Non-consuming)
    // =========================================================================

    /// Returns a reference to the left value if present.
    #[inline]
    pub const fn left_ref(&self) -> Option<&L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Returns a reference to the right value if present.
    #[inline]
    pub const fn right_ref(&self) -> Option<&R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a function to the left value if present.
    ///
    /// The function is never invoked on a `Right` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::container::Either;
    ///
    /// let value: Either<i32, String> = Either::Left(21);
    /// assert_eq!(value.map_left(|n| n * 2), Either::Left(42));
    /// ```
    #[inline]
    pub fn map_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(function(value)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Applies a function to the right value if present.
    ///
    /// The function is never invoked on a `Left` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::container::Either;
    ///
    /// let value: Either<i32, String> = Either::Right("hello".to_string());
    /// assert_eq!(value.map_right(|s| s.len()), Either::Right(5));
    /// ```
    #[inline]
    pub fn map_right<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(function(value)),
        }
    }

    /// Applies one of two functions depending on the variant, keeping the
    /// channels separate.
    ///
    /// Exactly one of the two functions is invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::container::Either;
    ///
    /// let value: Either<i32, String> = Either::Right("hello".to_string());
    /// assert_eq!(value.bimap(|n: i32| n * 2, |s| s.len()), Either::Right(5));
    /// ```
    #[inline]
    pub fn bimap<T, U, F, G>(self, left_function: F, right_function: G) -> Either<T, U>
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> U,
    {
        match self {
            Self::Left(value) => Either::Left(left_function(value)),
            Self::Right(value) => Either::Right(right_function(value)),
        }
    }

    // =========================================================================
    // Monadic Operations
    // =========================================================================

    /// Applies a container-returning function to the right value.
    ///
    /// The returned either becomes the result directly, with no extra
    /// wrapping. A `Left` value passes through unchanged and the function
    /// is never invoked. Satisfies the monad laws on the right channel.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::container::Either;
    ///
    /// fn reciprocal(n: f64) -> Either<String, f64> {
    ///     if n == 0.0 {
    ///         Either::Left("division by zero".to_string())
    ///     } else {
    ///         Either::Right(1.0 / n)
    ///     }
    /// }
    ///
    /// let value: Either<String, f64> = Either::Right(4.0);
    /// assert_eq!(value.flat_map_right(reciprocal), Either::Right(0.25));
    ///
    /// let zero: Either<String, f64> = Either::Right(0.0);
    /// assert!(zero.flat_map_right(reciprocal).is_left());
    /// ```
    #[inline]
    pub fn flat_map_right<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> Either<L, T>,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => function(value),
        }
    }

    /// Applies a container-returning function to the left value.
    ///
    /// The mirror image of [`flat_map_right`](Self::flat_map_right):
    /// a `Right` value passes through unchanged. Satisfies the monad laws
    /// on the left channel.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::container::Either;
    ///
    /// let value: Either<String, i32> = Either::Left("42".to_string());
    /// let result = value.flat_map_left(|s| match s.parse::<i32>() {
    ///     Ok(n) => Either::Right(n),
    ///     Err(_) => Either::Left(s),
    /// });
    /// assert_eq!(result, Either::Right(42));
    /// ```
    #[inline]
    pub fn flat_map_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> Either<T, R>,
    {
        match self {
            Self::Left(value) => function(value),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Applies one of two container-returning functions depending on the
    /// variant.
    ///
    /// Exactly one function is invoked, and its result becomes the result
    /// directly.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::container::Either;
    ///
    /// let value: Either<String, i32> = Either::Right(42);
    /// let result: Either<usize, i32> = value.bi_flat_map(
    ///     |error| Either::Left(error.len()),
    ///     |n| Either::Right(n),
    /// );
    /// assert_eq!(result, Either::Right(42));
    /// ```
    #[inline]
    pub fn bi_flat_map<T, U, F, G>(self, left_function: F, right_function: G) -> Either<T, U>
    where
        F: FnOnce(L) -> Either<T, U>,
        G: FnOnce(R) -> Either<T, U>,
    {
        match self {
            Self::Left(value) => left_function(value),
            Self::Right(value) => right_function(value),
        }
    }

    // =========================================================================
    // Fold Operation
    // =========================================================================

    /// Eliminates the Either by applying one of two functions.
    ///
    /// This is case analysis as a function: exactly one of the two
    /// functions runs, and its result is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::container::Either;
    ///
    /// let value: Either<i32, String> = Either::Left(42);
    /// assert_eq!(value.fold(|n| n.to_string(), |s| s), "42");
    /// ```
    #[inline]
    pub fn fold<T, F, G>(self, left_function: F, right_function: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => left_function(value),
            Self::Right(value) => right_function(value),
        }
    }

    // =========================================================================
    // Filtering
    // =========================================================================

    /// Tests the right value against a predicate, demoting it to the left
    /// channel when the predicate rejects it.
    ///
    /// A `Left` value passes through unchanged; neither the predicate nor
    /// the else-mapper is invoked on it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::container::Either;
    ///
    /// let value: Either<String, i32> = Either::Right(-3);
    /// let result = value.filter_right_or_else(
    ///     |n| *n >= 0,
    ///     |n| format!("negative: {n}"),
    /// );
    /// assert_eq!(result, Either::Left("negative: -3".to_string()));
    /// ```
    #[inline]
    pub fn filter_right_or_else<P, F>(self, predicate: P, else_mapper: F) -> Self
    where
        P: FnOnce(&R) -> bool,
        F: FnOnce(R) -> L,
    {
        match self {
            Self::Left(value) => Self::Left(value),
            Self::Right(value) => {
                if predicate(&value) {
                    Self::Right(value)
                } else {
                    Self::Left(else_mapper(value))
                }
            }
        }
    }

    // =========================================================================
    // Recovery
    // =========================================================================

    /// Returns the right value, converting a left value into one when
    /// necessary.
    ///
    /// The recovery function is never invoked on a `Right` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::container::Either;
    ///
    /// let value: Either<String, i32> = Either::Left("boom".to_string());
    /// assert_eq!(value.right_or_else(|error| error.len() as i32), 4);
    /// ```
    #[inline]
    pub fn right_or_else<F>(self, recovery: F) -> R
    where
        F: FnOnce(L) -> R,
    {
        match self {
            Self::Left(value) => recovery(value),
            Self::Right(value) => value,
        }
    }

    /// Returns the left value, converting a right value into one when
    /// necessary.
    ///
    /// The conversion function is never invoked on a `Left` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::container::Either;
    ///
    /// let value: Either<String, i32> = Either::Right(42);
    /// assert_eq!(value.left_or_else(|n| n.to_string()), "42");
    /// ```
    #[inline]
    pub fn left_or_else<F>(self, conversion: F) -> L
    where
        F: FnOnce(R) -> L,
    {
        match self {
            Self::Left(value) => value,
            Self::Right(value) => conversion(value),
        }
    }

    // =========================================================================
    // Swap Operation
    // =========================================================================

    /// Exchanges the roles of the two channels, preserving the payload.
    ///
    /// `swap` is self-inverse: `value.swap().swap()` equals `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::container::Either;
    ///
    /// let value: Either<i32, String> = Either::Left(42);
    /// assert_eq!(value.swap(), Either::Right(42));
    /// ```
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Self::Left(value) => Either::Right(value),
            Self::Right(value) => Either::Left(value),
        }
    }

    // =========================================================================
    // Inspection (Fluent)
    // =========================================================================

    /// Invokes a callback on the left value, returning the either
    /// unchanged.
    #[inline]
    pub fn inspect_left<F>(self, callback: F) -> Self
    where
        F: FnOnce(&L),
    {
        if let Self::Left(value) = &self {
            callback(value);
        }
        self
    }

    /// Invokes a callback on the right value, returning the either
    /// unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::container::Either;
    ///
    /// let mut seen = None;
    /// let value: Either<i32, String> = Either::Right("hello".to_string());
    /// let same = value.inspect_right(|s| seen = Some(s.len()));
    /// assert_eq!(seen, Some(5));
    /// assert!(same.is_right());
    /// ```
    #[inline]
    pub fn inspect_right<F>(self, callback: F) -> Self
    where
        F: FnOnce(&R),
    {
        if let Self::Right(value) = &self {
            callback(value);
        }
        self
    }

    /// Invokes one of two callbacks depending on the variant, returning
    /// the either unchanged.
    #[inline]
    pub fn bi_inspect<F, G>(self, left_callback: F, right_callback: G) -> Self
    where
        F: FnOnce(&L),
        G: FnOnce(&R),
    {
        match &self {
            Self::Left(value) => left_callback(value),
            Self::Right(value) => right_callback(value),
        }
        self
    }

    /// Consumes the either, invoking one of two callbacks depending on
    /// the variant.
    ///
    /// Unlike the `inspect` family this returns nothing; the payload is
    /// moved into the selected callback.
    #[inline]
    pub fn consume<F, G>(self, left_callback: F, right_callback: G)
    where
        F: FnOnce(L),
        G: FnOnce(R),
    {
        match self {
            Self::Left(value) => left_callback(value),
            Self::Right(value) => right_callback(value),
        }
    }

    // =========================================================================
    // Raising Extractors
    // =========================================================================

    /// Returns the right value, raising a caller-built payload on a left
    /// value.
    ///
    /// The factory receives the left payload and its result is raised
    /// with [`std::panic::panic_any`], so a typed payload propagates and
    /// can be captured by [`Try`](crate::capture::Try). The factory is
    /// never invoked on a `Right` value.
    ///
    /// # Panics
    ///
    /// Panics with `factory(left)` if this is a `Left` value.
    #[inline]
    pub fn right_or_raise<P, F>(self, factory: F) -> R
    where
        P: std::any::Any + Send,
        F: FnOnce(L) -> P,
    {
        match self {
            Self::Left(value) => panic_any(factory(value)),
            Self::Right(value) => value,
        }
    }

    /// Returns the left value, raising a caller-built payload on a right
    /// value.
    ///
    /// # Panics
    ///
    /// Panics with `factory(right)` if this is a `Right` value.
    #[inline]
    pub fn left_or_raise<P, F>(self, factory: F) -> L
    where
        P: std::any::Any + Send,
        F: FnOnce(R) -> P,
    {
        match self {
            Self::Left(value) => value,
            Self::Right(value) => panic_any(factory(value)),
        }
    }

    // =========================================================================
    // Iteration
    // =========================================================================

    /// Returns an iterator over the left channel.
    ///
    /// Yields exactly one element for a `Left` value and none for a
    /// `Right` value. Each call produces an independent fresh iterator.
    #[inline]
    pub fn iter_left(&self) -> std::option::IntoIter<&L> {
        self.left_ref().into_iter()
    }

    /// Returns an iterator over the right channel.
    ///
    /// Yields exactly one element for a `Right` value and none for a
    /// `Left` value. Each call produces an independent fresh iterator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::container::Either;
    ///
    /// let value: Either<i32, String> = Either::Right("hello".to_string());
    /// assert_eq!(value.iter_right().count(), 1);
    /// assert_eq!(value.iter_right().count(), 1); // restartable
    /// ```
    #[inline]
    pub fn iter_right(&self) -> std::option::IntoIter<&R> {
        self.right_ref().into_iter()
    }

    // =========================================================================
    // Conversion Operations
    // =========================================================================

    /// Converts into a pair of `Option`s.
    ///
    /// Returns `(Some(l), None)` for `Left(l)` and `(None, Some(r))` for
    /// `Right(r)`.
    #[inline]
    pub fn into_options(self) -> (Option<L>, Option<R>) {
        match self {
            Self::Left(value) => (Some(value), None),
            Self::Right(value) => (None, Some(value)),
        }
    }
}

// =============================================================================
// Unwrap Operations
// =============================================================================

impl<L, R: fmt::Debug> Either<L, R> {
    /// Returns the left value, consuming the either.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Right` value, describing the right payload.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::container::Either;
    ///
    /// let value: Either<i32, String> = Either::Left(42);
    /// assert_eq!(value.unwrap_left(), 42);
    /// ```
    #[inline]
    pub fn unwrap_left(self) -> L {
        match self {
            Self::Left(value) => value,
            Self::Right(value) => {
                panic!("called `Either::unwrap_left()` on a `Right` value: {value:?}")
            }
        }
    }
}

impl<L: fmt::Debug, R> Either<L, R> {
    /// Returns the right value, consuming the either.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Left` value, describing the left payload.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::container::Either;
    ///
    /// let value: Either<i32, String> = Either::Right("hello".to_string());
    /// assert_eq!(value.unwrap_right(), "hello".to_string());
    /// ```
    #[inline]
    pub fn unwrap_right(self) -> R {
        match self {
            Self::Left(value) => {
                panic!("called `Either::unwrap_right()` on a `Left` value: {value:?}")
            }
            Self::Right(value) => value,
        }
    }
}

// =============================================================================
// Default-based Operations
// =============================================================================

impl<L: Default, R> Either<L, R> {
    /// Returns the left value, or the default if this is a `Right`.
    #[inline]
    pub fn left_or_default(self) -> L {
        match self {
            Self::Left(value) => value,
            Self::Right(_) => L::default(),
        }
    }
}

impl<L, R: Default> Either<L, R> {
    /// Returns the right value, or the default if this is a `Left`.
    #[inline]
    pub fn right_or_default(self) -> R {
        match self {
            Self::Left(_) => R::default(),
            Self::Right(value) => value,
        }
    }
}

// =============================================================================
// Debug Implementation
// =============================================================================

impl<L: fmt::Debug, R: fmt::Debug> fmt::Debug for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => formatter.debug_tuple("Left").field(value).finish(),
            Self::Right(value) => formatter.debug_tuple("Right").field(value).finish(),
        }
    }
}

// =============================================================================
// Iteration (Consuming)
// =============================================================================

impl<L, R> IntoIterator for Either<L, R> {
    type Item = R;
    type IntoIter = std::option::IntoIter<R>;

    /// Iterates over the primary (right) channel, yielding zero or one
    /// element.
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.right().into_iter()
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<L, R> From<Result<R, L>> for Either<L, R> {
    /// Converts a `Result` to an `Either`.
    ///
    /// `Ok(r)` becomes `Right(r)`, and `Err(e)` becomes `Left(e)`.
    #[inline]
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    /// Converts an `Either` to a `Result`.
    ///
    /// `Right(r)` becomes `Ok(r)`, and `Left(l)` becomes `Err(l)`.
    #[inline]
    fn from(either: Either<L, R>) -> Self {
        match either {
            Either::Left(value) => Err(value),
            Either::Right(value) => Ok(value),
        }
    }
}

// =============================================================================
// Thread-safety by immutability
// =============================================================================

static_assertions::assert_impl_all!(Either<i32, String>: Send, Sync);
static_assertions::assert_impl_all!(Either<String, Vec<u8>>: Send, Sync);
