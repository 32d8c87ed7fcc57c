//! # twofold
//!
//! A functional outcome-handling library for Rust providing immutable
//! two-channel containers, fallible-execution capture, and sequence
//! aggregation.
//!
//! ## Overview
//!
//! Every value in this library is an immutable, exhaustively-matchable sum
//! type with two channels (or one, for [`Maybe`](container::Maybe)): a
//! primary channel carrying success or presence, and a secondary channel
//! carrying failure or absence. All containers share one combinator
//! algebra, and the `flat_map` family satisfies the monad laws on both
//! channels. The library includes:
//!
//! - **Containers**: [`Either`](container::Either),
//!   [`Outcome`](container::Outcome), [`Maybe`](container::Maybe)
//! - **Capture**: [`Try`](capture::Try) runs a panicking operation and
//!   represents the outcome as data, with fatal-defect propagation and
//!   resource-scoped execution with deterministic cleanup
//! - **Conversion**: pure, channel-preserving translations between
//!   containers
//! - **Collectors**: finite-sequence aggregation under failure-biased,
//!   success-biased, or unbiased adjudication
//! - **Gatherers**: lazy, single-pass iterator adapters over outcome
//!   sequences, including early truncation
//!
//! ## Feature Flags
//!
//! - `container`: the outcome containers (base for everything else)
//! - `capture`: panic capture and resource-scoped execution
//! - `convert`: cross-container conversion functions
//! - `collect`: finite-sequence collectors
//! - `gather`: lazy sequence transforms
//! - `full`: enable all features
//!
//! ## Example
//!
//! ```rust
//! use twofold::container::Outcome;
//!
//! let parsed: Outcome<i32, String> = Outcome::Success(21)
//!     .map(|n| n * 2)
//!     .filter_or_else(|n| *n > 0, |n| format!("not positive: {n}"));
//! assert_eq!(parsed, Outcome::Success(42));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use twofold::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "container")]
    pub use crate::container::*;

    #[cfg(feature = "capture")]
    pub use crate::capture::*;

    #[cfg(feature = "convert")]
    pub use crate::convert::*;

    #[cfg(feature = "collect")]
    pub use crate::collect::*;

    #[cfg(feature = "gather")]
    pub use crate::gather::*;
}

#[cfg(feature = "container")]
pub mod container;

#[cfg(feature = "capture")]
pub mod capture;

#[cfg(feature = "convert")]
pub mod convert;

#[cfg(feature = "collect")]
pub mod collect;

#[cfg(feature = "gather")]
pub mod gather;
