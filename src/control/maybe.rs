//! Maybe type - an optional value.
//!
//! [`Maybe<T>`] holds either one value ([`Just`]) or none ([`Nothing`]).
//! Absence is a first-class value threaded through combinators, never an
//! error: use [`map`], [`flat_map`], [`get_or_else`] and [`or`] to work with
//! the potential value without ever branching on null.
//!
//! The unchecked accessor [`get`] is reserved for call sites that have
//! already established presence; calling it on [`Nothing`] is a contract
//! violation and panics.
//!
//! # Examples
//!
//! ```rust
//! use accrue::control::Maybe;
//!
//! let present = Maybe::Just(21);
//! assert_eq!(present.map(|x| x * 2), Maybe::Just(42));
//!
//! let absent: Maybe<i32> = Maybe::Nothing;
//! assert_eq!(absent.map(|x| x * 2), Maybe::Nothing);
//! assert_eq!(absent.get_or_else(|| 7), 7);
//! ```
//!
//! [`Just`]: Maybe::Just
//! [`Nothing`]: Maybe::Nothing
//! [`map`]: Maybe::map
//! [`flat_map`]: Maybe::flat_map
//! [`get_or_else`]: Maybe::get_or_else
//! [`or`]: Maybe::or
//! [`get`]: Maybe::get

use std::fmt;

/// An optional value: either [`Just`](Maybe::Just) a value or
/// [`Nothing`](Maybe::Nothing).
///
/// Unlike `std::option::Option`, this type belongs to the crate's own
/// combinator vocabulary (lazy `get_or_else`/`or` suppliers, conversion to
/// the validation types); `From`/`Into` conversions with `Option` are
/// provided for interoperation.
///
/// # Examples
///
/// ```rust
/// use accrue::control::Maybe;
///
/// let value = Maybe::Just("hello");
/// assert!(value.is_just());
/// assert_eq!(value.get(), "hello");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Maybe<T> {
    /// No value present.
    Nothing,
    /// Exactly one value present.
    Just(T),
}

impl<T> Maybe<T> {
    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if a value is present.
    #[inline]
    pub const fn is_just(&self) -> bool {
        matches!(self, Self::Just(_))
    }

    /// Returns `true` if no value is present.
    #[inline]
    pub const fn is_nothing(&self) -> bool {
        matches!(self, Self::Nothing)
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Returns the contained value.
    ///
    /// This is the unchecked accessor: call it only after presence has been
    /// established. Prefer [`get_or_else`](Maybe::get_or_else) or
    /// [`into_option`](Maybe::into_option) for callers that need to check.
    ///
    /// # Panics
    ///
    /// Panics if called on `Nothing`; this is a programming error, not a
    /// recoverable condition.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use accrue::control::Maybe;
    ///
    /// assert_eq!(Maybe::Just(42).get(), 42);
    /// ```
    #[track_caller]
    pub fn get(self) -> T {
        match self {
            Self::Just(value) => value,
            Self::Nothing => panic!("get called on Nothing"),
        }
    }

    /// Returns the contained value, or lazily computes a default.
    ///
    /// The supplier is invoked only on `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use accrue::control::Maybe;
    ///
    /// assert_eq!(Maybe::Just(1).get_or_else(|| 0), 1);
    /// assert_eq!(Maybe::<i32>::Nothing.get_or_else(|| 0), 0);
    /// ```
    pub fn get_or_else<F>(self, supplier: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Just(value) => value,
            Self::Nothing => supplier(),
        }
    }

    /// Converts into a standard `Option`, consuming the value.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Just(value) => Some(value),
            Self::Nothing => None,
        }
    }

    /// Converts from `&Maybe<T>` to `Maybe<&T>`.
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Just(value) => Maybe::Just(value),
            Self::Nothing => Maybe::Nothing,
        }
    }

    // =========================================================================
    // Combinators
    // =========================================================================

    /// Transforms the contained value if present.
    ///
    /// The function is not invoked on `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use accrue::control::Maybe;
    ///
    /// assert_eq!(Maybe::Just(2).map(|x| x * 3), Maybe::Just(6));
    /// assert_eq!(Maybe::<i32>::Nothing.map(|x| x * 3), Maybe::Nothing);
    /// ```
    pub fn map<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Just(value) => Maybe::Just(function(value)),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Applies a `Maybe`-returning function to the contained value,
    /// short-circuiting to `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use accrue::control::Maybe;
    ///
    /// fn reciprocal(x: f64) -> Maybe<f64> {
    ///     if x == 0.0 { Maybe::Nothing } else { Maybe::Just(1.0 / x) }
    /// }
    ///
    /// assert_eq!(Maybe::Just(4.0).flat_map(reciprocal), Maybe::Just(0.25));
    /// assert_eq!(Maybe::Just(0.0).flat_map(reciprocal), Maybe::Nothing);
    /// ```
    pub fn flat_map<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Self::Just(value) => function(value),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Returns self if present, else the supplier's `Maybe`.
    ///
    /// The opposite of `flat_map`: keeps the value if there is one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use accrue::control::Maybe;
    ///
    /// assert_eq!(Maybe::Just(1).or(|| Maybe::Just(2)), Maybe::Just(1));
    /// assert_eq!(Maybe::Nothing.or(|| Maybe::Just(2)), Maybe::Just(2));
    /// ```
    pub fn or<F>(self, supplier: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Just(value) => Self::Just(value),
            Self::Nothing => supplier(),
        }
    }

    /// Keeps the value only if it satisfies the predicate.
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Just(value) if predicate(&value) => Self::Just(value),
            _ => Self::Nothing,
        }
    }

    /// Performs a side effect on the contained value, if any.
    pub fn for_each<F>(&self, action: F)
    where
        F: FnOnce(&T),
    {
        if let Self::Just(value) = self {
            action(value);
        }
    }

    // =========================================================================
    // Iteration
    // =========================================================================

    /// Returns an iterator yielding zero or one references.
    ///
    /// Finite and restartable: call `iter` again for a fresh pass.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use accrue::control::Maybe;
    ///
    /// let collected: Vec<&i32> = Maybe::Just(1).iter().collect();
    /// assert_eq!(collected, vec![&1]);
    ///
    /// let empty: Vec<&i32> = Maybe::<i32>::Nothing.iter().collect();
    /// assert!(empty.is_empty());
    /// ```
    #[inline]
    pub const fn iter(&self) -> MaybeIterator<'_, T> {
        MaybeIterator {
            inner: match self {
                Self::Just(value) => Some(value),
                Self::Nothing => None,
            },
        }
    }
}

impl<T> Maybe<Maybe<T>> {
    /// Collapses one level of nesting.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use accrue::control::Maybe;
    ///
    /// assert_eq!(Maybe::Just(Maybe::Just(1)).flatten(), Maybe::Just(1));
    /// assert_eq!(Maybe::Just(Maybe::<i32>::Nothing).flatten(), Maybe::Nothing);
    /// ```
    pub fn flatten(self) -> Maybe<T> {
        self.flat_map(|inner| inner)
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// An iterator over zero or one references to a [`Maybe`]'s value.
pub struct MaybeIterator<'a, T> {
    inner: Option<&'a T>,
}

impl<'a, T> Iterator for MaybeIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::from(self.inner.is_some());
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for MaybeIterator<'_, T> {}

/// An owning iterator over zero or one elements of a [`Maybe`].
pub struct MaybeIntoIterator<T> {
    inner: Option<T>,
}

impl<T> Iterator for MaybeIntoIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::from(self.inner.is_some());
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for MaybeIntoIterator<T> {}

impl<T> IntoIterator for Maybe<T> {
    type Item = T;
    type IntoIter = MaybeIntoIterator<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        MaybeIntoIterator {
            inner: self.into_option(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Maybe<T> {
    type Item = &'a T;
    type IntoIter = MaybeIterator<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for Maybe<T> {
    #[inline]
    fn default() -> Self {
        Self::Nothing
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(option: Option<T>) -> Self {
        option.map_or(Self::Nothing, Self::Just)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(maybe: Maybe<T>) -> Self {
        maybe.into_option()
    }
}

impl<T: fmt::Display> fmt::Display for Maybe<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Just(value) => write!(formatter, "Just({value})"),
            Self::Nothing => write!(formatter, "Nothing"),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_construct_then_extract() {
        let value = Maybe::Just(42);
        assert_eq!(value.get(), 42);
    }

    #[rstest]
    #[should_panic(expected = "get called on Nothing")]
    fn test_get_on_nothing_panics() {
        let absent: Maybe<i32> = Maybe::Nothing;
        let _ = absent.get();
    }

    #[rstest]
    fn test_map_skips_function_on_nothing() {
        let absent: Maybe<i32> = Maybe::Nothing;
        let result = absent.map(|_| panic!("must not be invoked"));
        assert_eq!(result, Maybe::<i32>::Nothing);
    }

    #[rstest]
    fn test_get_or_else_is_lazy() {
        let present = Maybe::Just(1);
        let result = present.get_or_else(|| panic!("must not be invoked"));
        assert_eq!(result, 1);
    }

    #[rstest]
    fn test_flat_map_short_circuits() {
        let absent: Maybe<i32> = Maybe::Nothing;
        assert_eq!(absent.flat_map(|x| Maybe::Just(x + 1)), Maybe::Nothing);
        assert_eq!(Maybe::Just(1).flat_map(|x| Maybe::Just(x + 1)), Maybe::Just(2));
    }

    #[rstest]
    fn test_or_keeps_present_value() {
        assert_eq!(Maybe::Just(1).or(|| Maybe::Just(2)), Maybe::Just(1));
        assert_eq!(Maybe::<i32>::Nothing.or(|| Maybe::Just(2)), Maybe::Just(2));
    }

    #[rstest]
    fn test_filter() {
        assert_eq!(Maybe::Just(4).filter(|x| x % 2 == 0), Maybe::Just(4));
        assert_eq!(Maybe::Just(3).filter(|x| x % 2 == 0), Maybe::Nothing);
    }

    #[rstest]
    fn test_iteration_yields_zero_or_one() {
        assert_eq!(Maybe::Just(1).into_iter().count(), 1);
        assert_eq!(Maybe::<i32>::Nothing.into_iter().count(), 0);
    }

    #[rstest]
    fn test_option_round_trip() {
        assert_eq!(Maybe::from(Some(1)), Maybe::Just(1));
        assert_eq!(Maybe::from(None::<i32>), Maybe::Nothing);
        assert_eq!(Option::from(Maybe::Just(1)), Some(1));
    }

    #[rstest]
    fn test_display() {
        assert_eq!(format!("{}", Maybe::Just(1)), "Just(1)");
        assert_eq!(format!("{}", Maybe::<i32>::Nothing), "Nothing");
    }
}
