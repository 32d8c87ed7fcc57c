//! Fallible-execution capture.
//!
//! This module runs user operations that may panic and represents the
//! result as data:
//!
//! - [`Defect`]: a captured panic payload, with an ordered list of
//!   suppressed defects accumulated during cleanup
//! - [`Try`]: `Outcome<T, Defect>` with a capturing construction
//!   protocol ([`Try::of`], [`Try::catching`]) and resource-scoped
//!   execution ([`Try::with_resource`], [`Try::with_resources`])
//! - [`FatalDefect`] / [`Cancellation`]: marker payloads that are never
//!   captured and always propagate ([`is_fatal`] is the classification
//!   predicate)
//! - [`Closeable`]: the resource-acquisition capability consumed by the
//!   scoped constructors
//!
//! # Examples
//!
//! ```rust
//! use twofold::capture::Try;
//!
//! fn parse_header(raw: &str) -> u32 {
//!     raw.parse().expect("malformed header")
//! }
//!
//! let fine: Try<u32> = Try::of(|| parse_header("42"));
//! assert_eq!(fine.success_ref(), Some(&42));
//!
//! let captured: Try<u32> = Try::of(|| parse_header("not a number"));
//! assert!(captured.is_failure());
//! ```

mod defect;
mod fallible;
mod scoped;

pub use defect::{Cancellation, Defect, FatalDefect, is_fatal};
pub use fallible::Try;
pub use scoped::Closeable;
