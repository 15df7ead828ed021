//! Semigroup type class - types with an associative binary operation.
//!
//! A type `T` is a semigroup if there exists a function
//! `combine: (T, T) -> T` that is associative.
//!
//! # Laws
//!
//! For all `a`, `b`, `c` of type `T`:
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use accrue::typeclass::Semigroup;
//!
//! let vec1 = vec![1, 2];
//! let vec2 = vec![3, 4];
//! assert_eq!(vec1.combine(vec2), vec![1, 2, 3, 4]);
//! ```

/// A type class for types with an associative binary operation.
///
/// # Laws
///
/// All implementations must satisfy associativity: for all `a`, `b`, `c`,
/// `(a.combine(b)).combine(c) == a.combine(b.combine(c))`.
///
/// # Examples
///
/// ```rust
/// use accrue::typeclass::Semigroup;
///
/// let a = String::from("foo");
/// let b = String::from("bar");
/// assert_eq!(a.combine(b), "foobar");
/// ```
pub trait Semigroup {
    /// Combines two values into one.
    ///
    /// This operation must be associative.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use accrue::typeclass::Semigroup;
    ///
    /// let result = String::from("Hello, ").combine(String::from("World!"));
    /// assert_eq!(result, "Hello, World!");
    /// ```
    #[must_use]
    fn combine(self, other: Self) -> Self;

    /// Combines two values by reference, returning a new value.
    ///
    /// The default implementation clones both values and calls `combine`.
    /// Types can override this for more efficient implementations.
    #[must_use]
    fn combine_ref(&self, other: &Self) -> Self
    where
        Self: Clone,
    {
        self.clone().combine(other.clone())
    }
}

impl Semigroup for String {
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

impl<T> Semigroup for Vec<T> {
    fn combine(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_string_combine() {
        let result = String::from("ab").combine(String::from("cd"));
        assert_eq!(result, "abcd");
    }

    #[rstest]
    fn test_string_associativity() {
        let a = || String::from("a");
        let b = || String::from("b");
        let c = || String::from("c");
        assert_eq!(a().combine(b()).combine(c()), a().combine(b().combine(c())));
    }

    #[rstest]
    fn test_vec_combine() {
        let result = vec![1, 2].combine(vec![3, 4]);
        assert_eq!(result, vec![1, 2, 3, 4]);
    }

    #[rstest]
    fn test_combine_ref_leaves_originals() {
        let a = String::from("left");
        let b = String::from("right");
        let combined = a.combine_ref(&b);
        assert_eq!(combined, "leftright");
        assert_eq!(a, "left");
        assert_eq!(b, "right");
    }
}
