//! Either type - a disjoint union of two types.
//!
//! [`Either<L, R>`] holds exactly one value that is either a `Left(L)` or a
//! `Right(R)`. By convention `Left` is the error/alternative side and
//! `Right` the success side, but nothing here assigns meaning to the sides;
//! for error accumulation use [`Validation`](super::Validation) instead.
//!
//! Side-specific work goes through projections: [`project_left`] and
//! [`project_right`] yield views that support `map`, `flat_map`,
//! `get_or_else` and conversion to [`Maybe`] for one side while passing the
//! other side through untouched.
//!
//! # Examples
//!
//! ```rust
//! use accrue::control::Either;
//!
//! let value: Either<String, i32> = Either::Right(42);
//!
//! // Fold unifies both branches into one result type
//! let description = value.fold(
//!     |error| format!("failed: {error}"),
//!     |number| format!("got {number}"),
//! );
//! assert_eq!(description, "got 42");
//! ```
//!
//! [`project_left`]: Either::project_left
//! [`project_right`]: Either::project_right

use std::fmt;

use super::maybe::Maybe;

/// A value that is exactly one of two typed alternatives.
///
/// # Type Parameters
///
/// * `L` - The type of the left value
/// * `R` - The type of the right value
///
/// # Examples
///
/// ```rust
/// use accrue::control::Either;
///
/// let success: Either<String, i32> = Either::Right(42);
/// let doubled = success.map_right(|x| x * 2);
/// assert_eq!(doubled, Either::Right(84));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Either<L, R> {
    /// The left variant, conventionally the error or first alternative.
    Left(L),
    /// The right variant, conventionally the success or second alternative.
    Right(R),
}

impl<L, R> Either<L, R> {
    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Left` value.
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Converts into a `Maybe<L>`, consuming the either.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use accrue::control::{Either, Maybe};
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.left(), Maybe::Just(42));
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// assert_eq!(right.left(), Maybe::Nothing);
    /// ```
    #[inline]
    pub fn left(self) -> Maybe<L> {
        match self {
            Self::Left(value) => Maybe::Just(value),
            Self::Right(_) => Maybe::Nothing,
        }
    }

    /// Converts into a `Maybe<R>`, consuming the either.
    #[inline]
    pub fn right(self) -> Maybe<R> {
        match self {
            Self::Left(_) => Maybe::Nothing,
            Self::Right(value) => Maybe::Just(value),
        }
    }

    /// Returns a reference to the left value if present.
    #[inline]
    pub const fn left_ref(&self) -> Maybe<&L> {
        match self {
            Self::Left(value) => Maybe::Just(value),
            Self::Right(_) => Maybe::Nothing,
        }
    }

    /// Returns a reference to the right value if present.
    #[inline]
    pub const fn right_ref(&self) -> Maybe<&R> {
        match self {
            Self::Left(_) => Maybe::Nothing,
            Self::Right(value) => Maybe::Just(value),
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a function to the left value if present.
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

    /// Applies one of two functions depending on which side holds the value.
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
    // Fold and Swap
    // =========================================================================

    /// Eliminates the union by applying exactly one of two functions,
    /// unifying both branches into a common result type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use accrue::control::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.fold(|x| x.to_string(), |s| s), "42");
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// assert_eq!(right.fold(|x: i32| x.to_string(), |s| s), "hello");
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

    /// Performs exactly one of two side effects depending on the side held.
    pub fn for_each<F, G>(&self, left_action: F, right_action: G)
    where
        F: FnOnce(&L),
        G: FnOnce(&R),
    {
        match self {
            Self::Left(value) => left_action(value),
            Self::Right(value) => right_action(value),
        }
    }

    /// Swaps the Left and Right variants.
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Self::Left(value) => Either::Right(value),
            Self::Right(value) => Either::Left(value),
        }
    }

    // =========================================================================
    // Projections
    // =========================================================================

    /// Views this union from the left side.
    ///
    /// The projection's combinators act on a potential left value and pass a
    /// right value through unchanged.
    #[inline]
    pub fn project_left(self) -> LeftProjection<L, R> {
        LeftProjection { either: self }
    }

    /// Views this union from the right side.
    #[inline]
    pub fn project_right(self) -> RightProjection<L, R> {
        RightProjection { either: self }
    }
}

// =============================================================================
// Join Operations
// =============================================================================

impl<L, R> Either<Either<L, R>, R> {
    /// Flattens a union nested on the left side.
    ///
    /// `Left(Left(l))` becomes `Left(l)`, `Left(Right(r))` becomes
    /// `Right(r)`, and an outer `Right(r)` is untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use accrue::control::Either;
    ///
    /// let nested: Either<Either<i32, String>, String> = Either::Left(Either::Left(1));
    /// assert_eq!(nested.join_left(), Either::Left(1));
    /// ```
    pub fn join_left(self) -> Either<L, R> {
        match self {
            Self::Left(inner) => inner,
            Self::Right(value) => Either::Right(value),
        }
    }
}

impl<L, R> Either<L, Either<L, R>> {
    /// Flattens a union nested on the right side.
    ///
    /// `Right(Right(r))` becomes `Right(r)`, `Right(Left(l))` becomes
    /// `Left(l)`, and an outer `Left(l)` is untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use accrue::control::Either;
    ///
    /// let nested: Either<String, Either<String, i32>> = Either::Right(Either::Right(1));
    /// assert_eq!(nested.join_right(), Either::Right(1));
    /// ```
    pub fn join_right(self) -> Either<L, R> {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(inner) => inner,
        }
    }
}

// =============================================================================
// Projections
// =============================================================================

/// A view of the left side of an [`Either`].
///
/// Combinators act on a potential left value; a right value passes through
/// unchanged.
///
/// # Examples
///
/// ```rust
/// use accrue::control::Either;
///
/// let value: Either<i32, String> = Either::Left(20);
/// let mapped = value.project_left().map(|x| x * 2);
/// assert_eq!(mapped, Either::Left(40));
/// ```
pub struct LeftProjection<L, R> {
    either: Either<L, R>,
}

impl<L, R> LeftProjection<L, R> {
    /// Returns the left value.
    ///
    /// This is the unchecked accessor; prefer
    /// [`to_maybe`](LeftProjection::to_maybe) for callers that need to check.
    ///
    /// # Panics
    ///
    /// Panics if the union holds a right value; this is a programming
    /// error, not a recoverable condition.
    #[track_caller]
    pub fn get(self) -> L {
        match self.either {
            Either::Left(value) => value,
            Either::Right(_) => panic!("left projection get called on Right"),
        }
    }

    /// Converts to a `Maybe`, present iff the union holds a left value.
    pub fn to_maybe(self) -> Maybe<L> {
        self.either.left()
    }

    /// Maps through the left side, leaving a right value untouched.
    pub fn map<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        self.either.map_left(function)
    }

    /// Maps through the left side with a union-returning function.
    pub fn flat_map<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> Either<T, R>,
    {
        match self.either {
            Either::Left(value) => function(value),
            Either::Right(value) => Either::Right(value),
        }
    }

    /// Returns the left value, or converts the right value into one.
    pub fn get_or_else<F>(self, function: F) -> L
    where
        F: FnOnce(R) -> L,
    {
        match self.either {
            Either::Left(value) => value,
            Either::Right(value) => function(value),
        }
    }

    /// Returns whether the union holds a left value satisfying the predicate.
    pub fn exists<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&L) -> bool,
    {
        match &self.either {
            Either::Left(value) => predicate(value),
            Either::Right(_) => false,
        }
    }

    /// Performs a side effect on the left value, if present.
    pub fn for_each<F>(&self, action: F)
    where
        F: FnOnce(&L),
    {
        if let Either::Left(value) = &self.either {
            action(value);
        }
    }
}

/// A view of the right side of an [`Either`].
///
/// Combinators act on a potential right value; a left value passes through
/// unchanged.
///
/// # Examples
///
/// ```rust
/// use accrue::control::Either;
///
/// let value: Either<String, i32> = Either::Right(20);
/// let mapped = value.project_right().map(|x| x * 2);
/// assert_eq!(mapped, Either::Right(40));
/// ```
pub struct RightProjection<L, R> {
    either: Either<L, R>,
}

impl<L, R> RightProjection<L, R> {
    /// Returns the right value.
    ///
    /// This is the unchecked accessor; prefer
    /// [`to_maybe`](RightProjection::to_maybe) for callers that need to
    /// check.
    ///
    /// # Panics
    ///
    /// Panics if the union holds a left value; this is a programming error,
    /// not a recoverable condition.
    #[track_caller]
    pub fn get(self) -> R {
        match self.either {
            Either::Left(_) => panic!("right projection get called on Left"),
            Either::Right(value) => value,
        }
    }

    /// Converts to a `Maybe`, present iff the union holds a right value.
    pub fn to_maybe(self) -> Maybe<R> {
        self.either.right()
    }

    /// Maps through the right side, leaving a left value untouched.
    pub fn map<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        self.either.map_right(function)
    }

    /// Maps through the right side with a union-returning function.
    pub fn flat_map<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> Either<L, T>,
    {
        match self.either {
            Either::Left(value) => Either::Left(value),
            Either::Right(value) => function(value),
        }
    }

    /// Returns the right value, or converts the left value into one.
    pub fn get_or_else<F>(self, function: F) -> R
    where
        F: FnOnce(L) -> R,
    {
        match self.either {
            Either::Left(value) => function(value),
            Either::Right(value) => value,
        }
    }

    /// Returns whether the union holds a right value satisfying the
    /// predicate.
    pub fn exists<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&R) -> bool,
    {
        match &self.either {
            Either::Left(_) => false,
            Either::Right(value) => predicate(value),
        }
    }

    /// Performs a side effect on the right value, if present.
    pub fn for_each<F>(&self, action: F)
    where
        F: FnOnce(&R),
    {
        if let Either::Right(value) = &self.either {
            action(value);
        }
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<L: fmt::Debug, R: fmt::Debug> fmt::Debug for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => formatter.debug_tuple("Left").field(value).finish(),
            Self::Right(value) => formatter.debug_tuple("Right").field(value).finish(),
        }
    }
}

impl<L: fmt::Display, R: fmt::Display> fmt::Display for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => write!(formatter, "Left({value})"),
            Self::Right(value) => write!(formatter, "Right({value})"),
        }
    }
}

impl<L, R> From<Result<R, L>> for Either<L, R> {
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
    /// `Right(r)` becomes `Ok(r)`, and `Left(l)` becomes `Err(l)`.
    #[inline]
    fn from(either: Either<L, R>) -> Self {
        match either {
            Either::Left(error) => Err(error),
            Either::Right(value) => Ok(value),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
