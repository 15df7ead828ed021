//! Algebraic traits used by the value types in this crate.
//!
//! Two traits live here:
//!
//! - [`Semigroup`]: types with an associative binary operation (`combine`)
//! - [`Monoid`]: semigroups with an identity element (`empty`)
//!
//! The persistent list types implement both ([`Semigroup`] via append/join,
//! [`Monoid`] where an empty value exists); [`NonEmptyList`] is the canonical
//! semigroup-without-identity, since it cannot be empty.
//!
//! # Examples
//!
//! ```rust
//! use accrue::typeclass::Semigroup;
//!
//! // String concatenation
//! let hello = String::from("Hello, ");
//! let world = String::from("World!");
//! assert_eq!(hello.combine(world), "Hello, World!");
//! ```
//!
//! [`NonEmptyList`]: crate::persistent::NonEmptyList

mod monoid;
mod semigroup;

pub use monoid::Monoid;
pub use semigroup::Semigroup;
