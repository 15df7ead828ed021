//! # accrue
//!
//! Accumulating validation and functional combinators for Rust.
//!
//! ## Overview
//!
//! This library provides a small set of independent, immutable value types
//! and combinators in the functional style:
//!
//! - **Optional values**: [`Maybe`] for presence/absence without nulls
//! - **Disjoint unions**: [`Either`] with projections and folds
//! - **Accumulating validation**: [`Validation`] whose failures merge into a
//!   [`NonEmptyList`] instead of short-circuiting on the first error
//! - **Persistent lists**: structurally shared [`List`] and [`NonEmptyList`]
//!   with O(1) prepend and cached length
//! - **Pattern dispatch**: [`PatternMatcher`], an ordered first-match-wins
//!   rule table over extractor functions
//! - **Function shaping**: `curry2!`..`curry6!` and `partial!` macros
//!
//! None of these compose into a pipeline; each is independently usable.
//! Every type is referentially transparent, performs no I/O, and is safe to
//! share across concurrent readers.
//!
//! ## Feature Flags
//!
//! - `typeclass`: Algebraic traits (`Semigroup`, `Monoid`)
//! - `persistent`: Persistent list types
//! - `control`: `Maybe`, `Either`, `Validation`, `PatternMatcher`
//! - `compose`: Currying and partial application macros
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use accrue::control::Validation;
//!
//! fn check_name(name: &str) -> Validation<String, String> {
//!     if name.is_empty() {
//!         Validation::Failure("name must not be empty".to_string())
//!     } else {
//!         Validation::Success(name.to_string())
//!     }
//! }
//!
//! fn check_age(age: i32) -> Validation<String, i32> {
//!     if age < 0 {
//!         Validation::Failure("age must not be negative".to_string())
//!     } else {
//!         Validation::Success(age)
//!     }
//! }
//!
//! // Both checks fail: both reasons are kept, in left-to-right order.
//! let merged = check_name("").lift().combine(check_age(-1).lift());
//! let reasons: Vec<String> = merged.get_failure().iter().cloned().collect();
//! assert_eq!(reasons.len(), 2);
//! ```
//!
//! [`Maybe`]: control::Maybe
//! [`Either`]: control::Either
//! [`Validation`]: control::Validation
//! [`List`]: persistent::List
//! [`NonEmptyList`]: persistent::NonEmptyList
//! [`PatternMatcher`]: control::PatternMatcher

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use accrue::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "persistent")]
    pub use crate::persistent::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "persistent")]
pub mod persistent;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "compose")]
pub mod compose;
