//! Control-flow types: optionality, disjoint choice, accumulating
//! validation, and rule-based dispatch.
//!
//! The types here model control flow as values. [`Maybe`] represents an
//! optional value, [`Either`] an exclusive choice between two, and
//! [`Validation`] a check whose failures accumulate across independent
//! runs instead of short-circuiting. [`PatternMatcher`] dispatches a value
//! through an ordered list of rules, first match wins.
//!
//! # Examples
//!
//! ```rust
//! use accrue::control::{Maybe, Validation};
//!
//! let present = Maybe::Just(21).map(|x| x * 2);
//! assert_eq!(present.get(), 42);
//!
//! let checked: Validation<String, i32> = Validation::Success(42);
//! assert!(checked.is_success());
//! ```

mod either;
mod matcher;
mod maybe;
mod validation;

pub use either::{Either, LeftProjection, RightProjection};
pub use matcher::PatternMatcher;
pub use maybe::{Maybe, MaybeIntoIterator, MaybeIterator};
pub use validation::{TupleAppend, Validated, Validation};
