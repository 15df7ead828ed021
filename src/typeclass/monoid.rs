//! Monoid type class - semigroups with an identity element.
//!
//! # Laws
//!
//! In addition to the associativity required by [`Semigroup`], for all `a`:
//!
//! ```text
//! Self::empty().combine(a) == a
//! a.combine(Self::empty()) == a
//! ```
//!
//! # Examples
//!
//! ```rust
//! use accrue::typeclass::{Semigroup, Monoid};
//!
//! assert_eq!(String::empty(), "");
//! assert_eq!(String::empty().combine(String::from("hello")), "hello");
//! ```

use super::semigroup::Semigroup;

/// A type class for semigroups with an identity element.
///
/// # Laws
///
/// All implementations must satisfy (in addition to Semigroup laws):
///
/// - Left identity: `Self::empty().combine(a) == a` for all `a`
/// - Right identity: `a.combine(Self::empty()) == a` for all `a`
///
/// # Examples
///
/// ```rust
/// use accrue::typeclass::{Semigroup, Monoid};
///
/// let s = String::from("hello");
/// assert_eq!(String::empty().combine(s.clone()), s);
/// assert_eq!(s.clone().combine(String::empty()), s);
/// ```
pub trait Monoid: Semigroup {
    /// Returns the identity element for this monoid.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use accrue::typeclass::Monoid;
    ///
    /// assert_eq!(String::empty(), "");
    /// assert!(Vec::<i32>::empty().is_empty());
    /// ```
    fn empty() -> Self;

    /// Combines all elements in an iterator, starting from the identity
    /// element. Returns the identity element for an empty iterator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use accrue::typeclass::Monoid;
    ///
    /// let strings = vec![String::from("a"), String::from("b")];
    /// assert_eq!(String::combine_all(strings), "ab");
    /// ```
    #[must_use]
    fn combine_all<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .fold(Self::empty(), |accumulator, element| {
                accumulator.combine(element)
            })
    }
}

impl Monoid for String {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T> Monoid for Vec<T> {
    fn empty() -> Self {
        Self::new()
    }
}
