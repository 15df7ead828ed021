//! Persistent singly-linked list guaranteed to hold at least one element.
//!
//! [`NonEmptyList`] shares its node representation with [`List`], so
//! promotion in either direction is O(1) and allocation-free. Its head
//! accessor is total: there is no empty case to defend against.
//!
//! The type exists primarily as the failure-accumulation container for
//! [`Validation`](crate::control::Validation): lifting a single failure
//! reason yields a one-element list, and merging two failed validations
//! joins their reason lists end to end.
//!
//! # Examples
//!
//! ```rust
//! use accrue::persistent::{List, NonEmptyList};
//!
//! let list = List::new().prepend(1).prepend(2).prepend(3);
//! assert_eq!(*list.head(), 3);
//! assert_eq!(list.len(), 3);
//!
//! let collected: Vec<&i32> = list.iter().collect();
//! assert_eq!(collected, vec![&3, &2, &1]);
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

use crate::typeclass::Semigroup;

use super::list::{List, ListIterator, Node};

/// A persistent singly-linked list with at least one element.
///
/// Invariants:
///
/// - `len() >= 1` always; the length is cached at construction (tail length
///   plus one) and read in O(1).
/// - [`head`](NonEmptyList::head) is total and returns a plain reference.
///
/// Equality requires matching element types; use
/// [`List::is_empty`] on the possibly-empty type for emptiness checks.
///
/// # Examples
///
/// ```rust
/// use accrue::persistent::NonEmptyList;
///
/// let list = NonEmptyList::singleton(42);
/// assert_eq!(*list.head(), 42);
/// assert_eq!(list.len(), 1);
/// ```
pub struct NonEmptyList<T> {
    /// The first node; unlike [`List`], always present.
    pub(crate) first: Rc<Node<T>>,
    /// Cached length, always >= 1.
    pub(crate) length: usize,
}

impl<T> NonEmptyList<T> {
    /// Creates a list containing a single element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use accrue::persistent::NonEmptyList;
    ///
    /// let list = NonEmptyList::singleton("reason");
    /// assert_eq!(list.len(), 1);
    /// ```
    #[must_use]
    pub fn singleton(element: T) -> Self {
        Self {
            first: Rc::new(Node {
                element,
                next: None,
            }),
            length: 1,
        }
    }

    /// Prepends an element, returning a new list sharing this list's nodes.
    ///
    /// # Complexity
    ///
    /// O(1) time and space
    ///
    /// # Examples
    ///
    /// ```rust
    /// use accrue::persistent::NonEmptyList;
    ///
    /// let list = NonEmptyList::singleton(2).prepend(1);
    /// assert_eq!(*list.head(), 1);
    /// assert_eq!(list.len(), 2);
    /// ```
    #[must_use]
    pub fn prepend(&self, element: T) -> Self {
        Self {
            first: Rc::new(Node {
                element,
                next: Some(Rc::clone(&self.first)),
            }),
            length: self.length + 1,
        }
    }

    /// Returns a reference to the first element.
    ///
    /// Total: a non-empty list always has a head.
    #[inline]
    #[must_use]
    pub fn head(&self) -> &T {
        &self.first.element
    }

    /// Returns the list without its first element, which may be empty.
    ///
    /// Shares structure with this list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use accrue::persistent::NonEmptyList;
    ///
    /// let list = NonEmptyList::singleton(2).prepend(1);
    /// let tail = list.tail();
    /// assert_eq!(tail.head(), Some(&2));
    /// assert_eq!(tail.len(), 1);
    /// ```
    #[must_use]
    pub fn tail(&self) -> List<T> {
        List {
            head: self.first.next.clone(),
            length: self.length - 1,
        }
    }

    /// Returns the number of elements, always at least 1.
    ///
    /// # Complexity
    ///
    /// O(1) - the length is cached at construction
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Forgets the non-emptiness guarantee, yielding a [`List`] that shares
    /// all nodes with this list (O(1)).
    #[must_use]
    pub fn to_list(&self) -> List<T> {
        List {
            head: Some(Rc::clone(&self.first)),
            length: self.length,
        }
    }

    /// Returns an iterator over references to the elements, front to back.
    #[inline]
    #[must_use]
    pub const fn iter(&self) -> ListIterator<'_, T> {
        ListIterator {
            current: Some(&self.first),
        }
    }
}

impl<T: Clone> NonEmptyList<T> {
    /// Creates a list from a slice, preserving order.
    ///
    /// Returns `None` if the slice is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use accrue::persistent::NonEmptyList;
    ///
    /// let list = NonEmptyList::from_slice(&[1, 2, 3]).unwrap();
    /// assert_eq!(*list.head(), 1);
    /// assert_eq!(list.len(), 3);
    ///
    /// assert!(NonEmptyList::<i32>::from_slice(&[]).is_none());
    /// ```
    #[must_use]
    pub fn from_slice(slice: &[T]) -> Option<Self> {
        List::from_slice(slice).to_non_empty()
    }

    /// Joins two non-empty lists end to end.
    ///
    /// The result contains all of `self`'s elements followed by all of
    /// `other`'s, preserving relative order within each operand. The result
    /// shares `other`'s nodes; `self`'s elements are re-consed in front
    /// with an explicit reverse walk, so long lists never recurse on the
    /// native stack.
    ///
    /// # Complexity
    ///
    /// O(n) where n = `self.len()`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use accrue::persistent::NonEmptyList;
    ///
    /// let left = NonEmptyList::from_slice(&[2, 1]).unwrap();
    /// let right = NonEmptyList::from_slice(&[3, 4]).unwrap();
    /// let joined = left.join(&right);
    ///
    /// let collected: Vec<&i32> = joined.iter().collect();
    /// assert_eq!(collected, vec![&2, &1, &3, &4]);
    /// ```
    #[must_use]
    pub fn join(&self, other: &Self) -> Self {
        let mut elements: Vec<T> = self.iter().cloned().collect();
        let mut first = Rc::clone(&other.first);
        let mut length = other.length;
        while let Some(element) = elements.pop() {
            first = Rc::new(Node {
                element,
                next: Some(first),
            });
            length += 1;
        }
        Self { first, length }
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Clone for NonEmptyList<T> {
    /// O(1): only the first-node pointer and cached length are copied, so
    /// cloning never requires `T: Clone`.
    #[inline]
    fn clone(&self) -> Self {
        Self {
            first: Rc::clone(&self.first),
            length: self.length,
        }
    }
}

impl<T> Drop for NonEmptyList<T> {
    /// Detaches the chain behind the first node and unlinks it iteratively
    /// while uniquely owned, so dropping a long list never recurses. A
    /// shared suffix is left for its remaining owners.
    fn drop(&mut self) {
        let mut current = Rc::get_mut(&mut self.first).and_then(|node| node.next.take());
        while let Some(node) = current {
            match Rc::try_unwrap(node) {
                Ok(mut inner) => current = inner.next.take(),
                Err(_) => break,
            }
        }
    }
}

impl<T: Clone> IntoIterator for NonEmptyList<T> {
    type Item = T;
    type IntoIter = <List<T> as IntoIterator>::IntoIter;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.to_list().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a NonEmptyList<T> {
    type Item = &'a T;
    type IntoIter = ListIterator<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PartialEq> PartialEq for NonEmptyList<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.length != other.length {
            return false;
        }
        self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<T: Eq> Eq for NonEmptyList<T> {}

impl<T: Hash> Hash for NonEmptyList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.length.hash(state);
        for element in self {
            element.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for NonEmptyList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for NonEmptyList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<T: Clone> Semigroup for NonEmptyList<T> {
    fn combine(self, other: Self) -> Self {
        self.join(&other)
    }
}

// Rc-backed structure: single-threaded sharing only
static_assertions::assert_not_impl_any!(NonEmptyList<i32>: Send, Sync);

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_singleton() {
        let list = NonEmptyList::singleton(42);
        assert_eq!(*list.head(), 42);
        assert_eq!(list.len(), 1);
        assert!(list.tail().is_empty());
    }

    #[rstest]
    fn test_prepend_order_and_length() {
        // Prepending 1, then 2, then 3 onto an empty terminator
        let list = List::new().prepend(1).prepend(2).prepend(3);
        assert_eq!(list.len(), 3);
        assert_eq!(*list.head(), 3);
        let collected: Vec<&i32> = list.iter().collect();
        assert_eq!(collected, vec![&3, &2, &1]);
    }

    #[rstest]
    fn test_prepend_shares_tail() {
        let base = NonEmptyList::singleton(2).prepend(1);
        let extended = base.prepend(0);
        assert_eq!(base.len(), 2);
        assert_eq!(extended.len(), 3);
        assert_eq!(*base.head(), 1);
    }

    #[rstest]
    fn test_length_is_tail_length_plus_one() {
        let tail: List<i32> = (1..=4).collect();
        let list = tail.prepend(0);
        assert_eq!(list.len(), tail.len() + 1);
    }

    #[rstest]
    fn test_join_preserves_operand_order() {
        let left = NonEmptyList::from_slice(&[2, 1]).unwrap();
        let right = NonEmptyList::from_slice(&[3, 4]).unwrap();
        let joined = left.join(&right);
        let collected: Vec<&i32> = joined.iter().collect();
        assert_eq!(collected, vec![&2, &1, &3, &4]);
        assert_eq!(joined.len(), 4);
    }

    #[rstest]
    fn test_join_leaves_operands_untouched() {
        let left = NonEmptyList::singleton(1);
        let right = NonEmptyList::singleton(2);
        let _ = left.join(&right);
        assert_eq!(left.len(), 1);
        assert_eq!(right.len(), 1);
    }

    #[rstest]
    fn test_join_long_lists() {
        let left = NonEmptyList::from_slice(&(0..10_000).collect::<Vec<i32>>()).unwrap();
        let right = NonEmptyList::singleton(10_000);
        let joined = left.join(&right);
        assert_eq!(joined.len(), 10_001);
        assert_eq!(*joined.head(), 0);
    }

    #[rstest]
    fn test_to_list_round_trip() {
        let list = NonEmptyList::from_slice(&[1, 2, 3]).unwrap();
        let plain = list.to_list();
        assert_eq!(plain.len(), 3);
        assert_eq!(plain.to_non_empty().unwrap(), list);
    }

    #[rstest]
    fn test_from_slice_empty() {
        assert!(NonEmptyList::<i32>::from_slice(&[]).is_none());
    }

    #[rstest]
    fn test_eq() {
        let a = NonEmptyList::from_slice(&[1, 2]).unwrap();
        let b = NonEmptyList::from_slice(&[1, 2]).unwrap();
        let c = NonEmptyList::from_slice(&[2, 1]).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[rstest]
    fn test_display() {
        let list = NonEmptyList::from_slice(&[1, 2, 3]).unwrap();
        assert_eq!(format!("{list}"), "[1, 2, 3]");
    }

    #[rstest]
    fn test_semigroup_combine_is_join() {
        let left = NonEmptyList::singleton("a");
        let right = NonEmptyList::singleton("b");
        let combined = left.combine(right);
        let collected: Vec<&&str> = combined.iter().collect();
        assert_eq!(collected, vec![&"a", &"b"]);
    }

    #[rstest]
    fn test_into_iter_owned() {
        let list = NonEmptyList::from_slice(&[1, 2, 3]).unwrap();
        let collected: Vec<i32> = list.into_iter().collect();
        assert_eq!(collected, vec![1, 2, 3]);
    }
}
