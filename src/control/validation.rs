//! Validation type - success or failure with accumulating merge.
//!
//! [`Validation<E, A>`] is structurally a disjoint union like
//! [`Either`](super::Either), but semantically distinct: its failure side is
//! designed to be merged across independent checks. Where a `Result` chain
//! stops at the first error, combining validations keeps **every** failure
//! reason, concatenated in left-to-right combine order into a
//! [`NonEmptyList`].
//!
//! The merge works on *lifted* values. [`lift`] wraps a single failure
//! reason in a one-element `NonEmptyList` and a success value in a 1-tuple;
//! each [`combine`] call then either appends one more slot to the growing
//! success tuple, or joins the failure lists end to end:
//!
//! ```text
//! Success ⊕ Success -> Success of the flattened tuple (left slots first)
//! Success ⊕ Failure -> the right Failure
//! Failure ⊕ Success -> the left Failure
//! Failure ⊕ Failure -> Failure of left reasons followed by right reasons
//! ```
//!
//! # Examples
//!
//! ```rust
//! use accrue::control::Validation;
//!
//! fn positive(x: i32) -> Validation<String, i32> {
//!     if x > 0 {
//!         Validation::Success(x)
//!     } else {
//!         Validation::Failure(format!("{x} is not positive"))
//!     }
//! }
//!
//! // Both succeed: values are paired in order
//! let merged = positive(1).lift().combine(positive(2).lift());
//! assert_eq!(merged.get_success(), (1, 2));
//!
//! // Both fail: both reasons survive, left reason first
//! let merged = positive(-1).lift().combine(positive(-2).lift());
//! let reasons: Vec<String> = merged.get_failure().iter().cloned().collect();
//! assert_eq!(reasons, vec!["-1 is not positive", "-2 is not positive"]);
//! ```
//!
//! [`lift`]: Validation::lift
//! [`combine`]: Validation::combine

use std::fmt;

use crate::persistent::NonEmptyList;

use super::either::Either;
use super::maybe::Maybe;

/// The result of a validation: a failure reason or a success value.
///
/// # Type Parameters
///
/// * `E` - The type of the failure reason
/// * `A` - The type of the success value
///
/// # Examples
///
/// ```rust
/// use accrue::control::Validation;
///
/// let ok: Validation<String, i32> = Validation::Success(42);
/// assert!(ok.is_success());
/// assert_eq!(ok.map(|x| x * 2), Validation::Success(84));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Validation<E, A> {
    /// The failure side, holding the reason the check did not pass.
    Failure(E),
    /// The success side, holding the validated value.
    Success(A),
}

/// A validation whose failures have been lifted into a [`NonEmptyList`],
/// ready for accumulation with [`Validation::combine`].
pub type Validated<E, A> = Validation<NonEmptyList<E>, A>;

impl<E, A> Validation<E, A> {
    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Success`.
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if this is a `Failure`.
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Returns the success value.
    ///
    /// This is the unchecked accessor; prefer
    /// [`success`](Validation::success) for callers that need to check.
    ///
    /// # Panics
    ///
    /// Panics if called on a `Failure`; this is a programming error, not a
    /// recoverable condition.
    #[track_caller]
    pub fn get_success(self) -> A {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => panic!("get_success called on Failure"),
        }
    }

    /// Returns the failure reason.
    ///
    /// This is the unchecked accessor; prefer
    /// [`failure`](Validation::failure) for callers that need to check.
    ///
    /// # Panics
    ///
    /// Panics if called on a `Success`; this is a programming error, not a
    /// recoverable condition.
    #[track_caller]
    pub fn get_failure(self) -> E {
        match self {
            Self::Failure(reason) => reason,
            Self::Success(_) => panic!("get_failure called on Success"),
        }
    }

    /// Converts into a `Maybe` of the success value, consuming self.
    #[inline]
    pub fn success(self) -> Maybe<A> {
        match self {
            Self::Success(value) => Maybe::Just(value),
            Self::Failure(_) => Maybe::Nothing,
        }
    }

    /// Converts into a `Maybe` of the failure reason, consuming self.
    #[inline]
    pub fn failure(self) -> Maybe<E> {
        match self {
            Self::Failure(reason) => Maybe::Just(reason),
            Self::Success(_) => Maybe::Nothing,
        }
    }

    // =========================================================================
    // Combinators
    // =========================================================================

    /// Transforms the success value; a failure passes through unchanged.
    pub fn map<B, F>(self, function: F) -> Validation<E, B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Success(value) => Validation::Success(function(value)),
            Self::Failure(reason) => Validation::Failure(reason),
        }
    }

    /// Transforms the failure reason; a success passes through unchanged.
    pub fn map_failure<T, F>(self, function: F) -> Validation<T, A>
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Success(value) => Validation::Success(value),
            Self::Failure(reason) => Validation::Failure(function(reason)),
        }
    }

    /// Applies one of two functions depending on the side held.
    pub fn bimap<T, B, F, G>(self, failure_function: F, success_function: G) -> Validation<T, B>
    where
        F: FnOnce(E) -> T,
        G: FnOnce(A) -> B,
    {
        match self {
            Self::Failure(reason) => Validation::Failure(failure_function(reason)),
            Self::Success(value) => Validation::Success(success_function(value)),
        }
    }

    /// Unifies both sides into a common result type; exactly one of the two
    /// functions is invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use accrue::control::Validation;
    ///
    /// let ok: Validation<String, i32> = Validation::Success(42);
    /// assert_eq!(ok.fold(|e| e.len() as i32, |x| x), 42);
    /// ```
    pub fn fold<T, F, G>(self, failure_function: F, success_function: G) -> T
    where
        F: FnOnce(E) -> T,
        G: FnOnce(A) -> T,
    {
        match self {
            Self::Failure(reason) => failure_function(reason),
            Self::Success(value) => success_function(value),
        }
    }

    /// Performs exactly one of two side effects depending on the side held.
    pub fn for_each<F, G>(&self, failure_action: F, success_action: G)
    where
        F: FnOnce(&E),
        G: FnOnce(&A),
    {
        match self {
            Self::Failure(reason) => failure_action(reason),
            Self::Success(value) => success_action(value),
        }
    }

    // =========================================================================
    // Lifting
    // =========================================================================

    /// Lifts this validation so it can be combined with others.
    ///
    /// The failure reason becomes a one-element [`NonEmptyList`]; the
    /// success value becomes a 1-tuple. Each subsequent
    /// [`combine`](Validation::combine) appends one success slot or joins
    /// one more reason list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use accrue::control::Validation;
    ///
    /// let lifted = Validation::<String, i32>::Success(1).lift();
    /// assert_eq!(lifted.get_success(), (1,));
    /// ```
    pub fn lift(self) -> Validated<E, (A,)> {
        self.bimap(NonEmptyList::singleton, |value| (value,))
    }
}

impl<E: Clone, T> Validated<E, T> {
    /// Merges two lifted validations.
    ///
    /// If both are successes, the right operand's single value is appended
    /// to the left operand's tuple. If either is a failure, the result is a
    /// failure carrying every reason: on a double failure the left
    /// operand's reasons strictly precede the right operand's. No reason is
    /// ever dropped or duplicated.
    ///
    /// Combining is left-associative by construction; chaining `n` calls
    /// accumulates an `n+1`-tuple of successes or a reason list in
    /// left-to-right encounter order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use accrue::control::Validation;
    ///
    /// let a = Validation::<String, _>::Success("x").lift();
    /// let b = Validation::<String, _>::Success(1).lift();
    /// assert_eq!(a.combine(b).get_success(), ("x", 1));
    /// ```
    #[must_use]
    pub fn combine<U>(self, other: Validated<E, (U,)>) -> Validated<E, T::Output>
    where
        T: TupleAppend<U>,
    {
        match (self, other) {
            (Validation::Success(values), Validation::Success((value,))) => {
                Validation::Success(values.append(value))
            }
            (Validation::Failure(left), Validation::Failure(right)) => {
                Validation::Failure(left.join(&right))
            }
            (Validation::Failure(left), Validation::Success(_)) => Validation::Failure(left),
            (Validation::Success(_), Validation::Failure(right)) => Validation::Failure(right),
        }
    }
}

// =============================================================================
// Tuple Append
// =============================================================================

/// Appends a single value to the end of a tuple.
///
/// Implemented for success tuples of one to five elements, bounding
/// accumulated validations at six values; implementing it for a larger
/// arity extends [`Validation::combine`] accordingly.
pub trait TupleAppend<T> {
    /// The tuple type with `T` appended.
    type Output;

    /// Moves `value` into the last slot of the widened tuple.
    fn append(self, value: T) -> Self::Output;
}

macro_rules! impl_tuple_append {
    ($($name:ident),+) => {
        impl<$($name,)+ Z> TupleAppend<Z> for ($($name,)+) {
            type Output = ($($name,)+ Z);

            #[allow(non_snake_case)]
            fn append(self, value: Z) -> Self::Output {
                let ($($name,)+) = self;
                ($($name,)+ value)
            }
        }
    };
}

impl_tuple_append!(A);
impl_tuple_append!(A, B);
impl_tuple_append!(A, B, C);
impl_tuple_append!(A, B, C, D);
impl_tuple_append!(A, B, C, D, G);

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<E: fmt::Display, A: fmt::Display> fmt::Display for Validation<E, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Failure(reason) => write!(formatter, "Failure({reason})"),
            Self::Success(value) => write!(formatter, "Success({value})"),
        }
    }
}

impl<E, A> From<Either<E, A>> for Validation<E, A> {
    /// `Left` becomes `Failure` and `Right` becomes `Success`.
    fn from(either: Either<E, A>) -> Self {
        match either {
            Either::Left(value) => Self::Failure(value),
            Either::Right(value) => Self::Success(value),
        }
    }
}

impl<E, A> From<Validation<E, A>> for Either<E, A> {
    /// `Failure` becomes `Left` and `Success` becomes `Right`.
    fn from(validation: Validation<E, A>) -> Self {
        match validation {
            Validation::Failure(reason) => Self::Left(reason),
            Validation::Success(value) => Self::Right(value),
        }
    }
}

impl<E, A> From<Result<A, E>> for Validation<E, A> {
    /// `Ok` becomes `Success` and `Err` becomes `Failure`.
    fn from(result: Result<A, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
