//! Persistent (immutable) singly-linked list.
//!
//! [`List`] is a cons-list with structural sharing:
//!
//! - O(1) prepend ([`cons`])
//! - O(1) head and tail access
//! - O(1) length (cached at construction)
//! - O(n) append and reverse
//!
//! All operations return new lists without modifying the original. Prepending
//! shares every node of the old list with the new one:
//!
//! ```text
//! list1: 1 -> 2 -> 3 -> ()
//! list2 = list1.cons(0): 0 -> [1 -> 2 -> 3 -> ()]   // shares [1, 2, 3]
//! ```
//!
//! A list known to hold at least one element can be promoted to a
//! [`NonEmptyList`] via [`prepend`] or [`to_non_empty`]; both share structure
//! with the source list.
//!
//! # Examples
//!
//! ```rust
//! use accrue::persistent::List;
//!
//! let list = List::new().cons(3).cons(2).cons(1);
//! assert_eq!(list.head(), Some(&1));
//! assert_eq!(list.len(), 3);
//!
//! // The original is untouched by further prepends
//! let extended = list.cons(0);
//! assert_eq!(list.len(), 3);
//! assert_eq!(extended.len(), 4);
//! ```
//!
//! [`cons`]: List::cons
//! [`prepend`]: List::prepend
//! [`to_non_empty`]: List::to_non_empty
//! [`NonEmptyList`]: super::NonEmptyList

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;
use std::rc::Rc;

use crate::typeclass::{Monoid, Semigroup};

use super::non_empty::NonEmptyList;

/// Internal node of the linked structure.
///
/// Shared between [`List`] and [`NonEmptyList`] so that promotion between
/// the two is free.
pub(crate) struct Node<T> {
    /// The element stored in this node.
    pub(crate) element: T,
    /// Reference to the next node (if any).
    pub(crate) next: Option<Rc<Self>>,
}

/// A persistent (immutable) singly-linked list.
///
/// # Time Complexity
///
/// | Operation | Complexity |
/// |-----------|------------|
/// | `new`     | O(1)       |
/// | `cons`    | O(1)       |
/// | `head`    | O(1)       |
/// | `tail`    | O(1)       |
/// | `len`     | O(1)       |
/// | `get`     | O(n)       |
/// | `append`  | O(n)       |
/// | `reverse` | O(n)       |
///
/// # Examples
///
/// ```rust
/// use accrue::persistent::List;
///
/// let list: List<i32> = (1..=3).collect();
/// assert_eq!(list.iter().sum::<i32>(), 6);
/// ```
pub struct List<T> {
    /// Reference to the head node (if any).
    pub(crate) head: Option<Rc<Node<T>>>,
    /// Cached length for O(1) access.
    pub(crate) length: usize,
}

impl<T> List<T> {
    /// Creates a new empty list.
    ///
    /// This allocates nothing; an empty list is a plain value, so no shared
    /// terminator instance is needed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use accrue::persistent::List;
    ///
    /// let list: List<i32> = List::new();
    /// assert!(list.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            head: None,
            length: 0,
        }
    }

    /// Creates a list containing a single element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use accrue::persistent::List;
    ///
    /// let list = List::singleton(42);
    /// assert_eq!(list.head(), Some(&42));
    /// assert_eq!(list.len(), 1);
    /// ```
    #[inline]
    #[must_use]
    pub fn singleton(element: T) -> Self {
        Self::new().cons(element)
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
    /// use accrue::persistent::List;
    ///
    /// let list = List::new().cons(3).cons(2).cons(1);
    /// assert_eq!(list.head(), Some(&1));
    /// assert_eq!(list.len(), 3);
    /// ```
    #[inline]
    #[must_use]
    pub fn cons(&self, element: T) -> Self {
        Self {
            head: Some(Rc::new(Node {
                element,
                next: self.head.clone(),
            })),
            length: self.length + 1,
        }
    }

    /// Prepends an element, returning a [`NonEmptyList`].
    ///
    /// Same operation as [`cons`], but the result type records that the list
    /// now holds at least one element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use accrue::persistent::List;
    ///
    /// let list = List::new().prepend(1);
    /// assert_eq!(*list.head(), 1);
    /// assert_eq!(list.len(), 1);
    /// ```
    ///
    /// [`cons`]: List::cons
    #[inline]
    #[must_use]
    pub fn prepend(&self, element: T) -> NonEmptyList<T> {
        NonEmptyList {
            first: Rc::new(Node {
                element,
                next: self.head.clone(),
            }),
            length: self.length + 1,
        }
    }

    /// Reinterprets this list as a [`NonEmptyList`] if it has at least one
    /// element.
    ///
    /// The result shares all nodes with this list (O(1)).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use accrue::persistent::List;
    ///
    /// let list: List<i32> = (1..=3).collect();
    /// let non_empty = list.to_non_empty().unwrap();
    /// assert_eq!(*non_empty.head(), 1);
    ///
    /// let empty: List<i32> = List::new();
    /// assert!(empty.to_non_empty().is_none());
    /// ```
    #[must_use]
    pub fn to_non_empty(&self) -> Option<NonEmptyList<T>> {
        self.head.as_ref().map(|first| NonEmptyList {
            first: Rc::clone(first),
            length: self.length,
        })
    }

    /// Returns a reference to the first element, or `None` on an empty list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use accrue::persistent::List;
    ///
    /// let list = List::new().cons(2).cons(1);
    /// assert_eq!(list.head(), Some(&1));
    ///
    /// let empty: List<i32> = List::new();
    /// assert_eq!(empty.head(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn head(&self) -> Option<&T> {
        self.head.as_ref().map(|node| &node.element)
    }

    /// Returns the list without its first element.
    ///
    /// If the list is empty, returns an empty list. Shares structure with
    /// the original.
    ///
    /// # Complexity
    ///
    /// O(1) time and space
    #[inline]
    #[must_use]
    pub fn tail(&self) -> Self {
        self.head.as_ref().map_or_else(Self::new, |node| Self {
            head: node.next.clone(),
            length: self.length.saturating_sub(1),
        })
    }

    /// Decomposes the list into its head and tail.
    ///
    /// Returns `None` if the list is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use accrue::persistent::List;
    ///
    /// let list = List::new().cons(2).cons(1);
    /// let (head, tail) = list.uncons().unwrap();
    /// assert_eq!(*head, 1);
    /// assert_eq!(tail.head(), Some(&2));
    /// ```
    #[inline]
    #[must_use]
    pub fn uncons(&self) -> Option<(&T, Self)> {
        self.head.as_ref().map(|node| {
            let tail = Self {
                head: node.next.clone(),
                length: self.length.saturating_sub(1),
            };
            (&node.element, tail)
        })
    }

    /// Returns a reference to the element at the given index, or `None` if
    /// out of bounds.
    ///
    /// # Complexity
    ///
    /// O(n) where n = index
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        let mut current = &self.head;
        let mut remaining = index;

        while let Some(node) = current {
            if remaining == 0 {
                return Some(&node.element);
            }
            remaining -= 1;
            current = &node.next;
        }
        None
    }

    /// Returns the number of elements in the list.
    ///
    /// # Complexity
    ///
    /// O(1) - the length is cached at construction
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if the list contains no elements.
    ///
    /// This is the explicit emptiness predicate; lists of different element
    /// types are never compared for equality directly.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns an iterator over references to the elements, front to back.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use accrue::persistent::List;
    ///
    /// let list = List::new().cons(3).cons(2).cons(1);
    /// let collected: Vec<&i32> = list.iter().collect();
    /// assert_eq!(collected, vec![&1, &2, &3]);
    /// ```
    #[inline]
    #[must_use]
    pub const fn iter(&self) -> ListIterator<'_, T> {
        ListIterator {
            current: self.head.as_ref(),
        }
    }

    /// Folds the list from the front with an initial accumulator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use accrue::persistent::List;
    ///
    /// let list: List<i32> = (1..=5).collect();
    /// let sum = list.fold_left(0, |accumulator, x| accumulator + x);
    /// assert_eq!(sum, 15);
    /// ```
    pub fn fold_left<B, F>(&self, initial: B, function: F) -> B
    where
        F: FnMut(B, &T) -> B,
    {
        self.iter().fold(initial, function)
    }

    /// Builds a list from a Vec, consuming elements from the end so the
    /// result preserves the Vec's order.
    pub(crate) fn build_from_vec(mut elements: Vec<T>) -> Self {
        let length = elements.len();
        if length == 0 {
            return Self::new();
        }

        let mut head: Option<Rc<Node<T>>> = None;
        while let Some(element) = elements.pop() {
            head = Some(Rc::new(Node {
                element,
                next: head,
            }));
        }

        Self { head, length }
    }
}

impl<T: Clone> List<T> {
    /// Appends another list to this list.
    ///
    /// Returns a new list with all elements of `self` followed by all
    /// elements of `other`, preserving relative order within each operand.
    /// The result shares `other`'s nodes.
    ///
    /// # Complexity
    ///
    /// O(n) where n = `self.len()`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use accrue::persistent::List;
    ///
    /// let list1 = List::new().cons(2).cons(1);
    /// let list2 = List::new().cons(4).cons(3);
    /// let combined = list1.append(&list2);
    ///
    /// let collected: Vec<&i32> = combined.iter().collect();
    /// assert_eq!(collected, vec![&1, &2, &3, &4]);
    /// ```
    #[must_use]
    pub fn append(&self, other: &Self) -> Self {
        if self.is_empty() {
            return other.clone();
        }
        if other.is_empty() {
            return self.clone();
        }

        // Walk self's elements in reverse via Vec::pop and cons onto other.
        // An explicit loop keeps long lists off the native stack.
        let mut elements: Vec<T> = self.iter().cloned().collect();
        let mut head = other.head.clone();
        let mut length = other.length;
        while let Some(element) = elements.pop() {
            head = Some(Rc::new(Node {
                element,
                next: head,
            }));
            length += 1;
        }
        Self { head, length }
    }

    /// Returns a new list with elements in reverse order.
    ///
    /// # Complexity
    ///
    /// O(n) time and space
    #[must_use]
    pub fn reverse(&self) -> Self {
        let mut result = Self::new();
        for element in self {
            result = result.cons(element.clone());
        }
        result
    }

    /// Creates a list from a slice, preserving the slice's order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use accrue::persistent::List;
    ///
    /// let list = List::from_slice(&[1, 2, 3]);
    /// assert_eq!(list.head(), Some(&1));
    /// assert_eq!(list.len(), 3);
    /// ```
    #[must_use]
    pub fn from_slice(slice: &[T]) -> Self {
        let length = slice.len();
        let mut head: Option<Rc<Node<T>>> = None;
        for element in slice.iter().rev() {
            head = Some(Rc::new(Node {
                element: element.clone(),
                next: head,
            }));
        }

        Self { head, length }
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// An iterator over references to elements of a [`List`] or
/// [`NonEmptyList`].
pub struct ListIterator<'a, T> {
    pub(crate) current: Option<&'a Rc<Node<T>>>,
}

impl<'a, T> Iterator for ListIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.current.map(|node| {
            self.current = node.next.as_ref();
            &node.element
        })
    }
}

/// An owning iterator over elements of a [`List`].
pub struct ListIntoIterator<T> {
    list: List<T>,
}

impl<T: Clone> Iterator for ListIntoIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some((head, tail)) = self.list.uncons() {
            let element = head.clone();
            self.list = tail;
            Some(element)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.length, Some(self.list.length))
    }
}

impl<T: Clone> ExactSizeIterator for ListIntoIterator<T> {
    fn len(&self) -> usize {
        self.list.length
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Clone for List<T> {
    /// O(1): only the head pointer and cached length are copied, so cloning
    /// never requires `T: Clone`.
    #[inline]
    fn clone(&self) -> Self {
        Self {
            head: self.head.clone(),
            length: self.length,
        }
    }
}

impl<T> Drop for List<T> {
    /// Unlinks nodes iteratively while they are uniquely owned, so dropping
    /// a long list never recurses. A shared suffix is left for its
    /// remaining owners.
    fn drop(&mut self) {
        let mut current = self.head.take();
        while let Some(node) = current {
            match Rc::try_unwrap(node) {
                Ok(mut inner) => current = inner.next.take(),
                Err(_) => break,
            }
        }
    }
}

impl<T> Default for List<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let elements: Vec<T> = iter.into_iter().collect();
        Self::build_from_vec(elements)
    }
}

impl<T: Clone> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = ListIntoIterator<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        ListIntoIterator { list: self }
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = ListIterator<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.length != other.length {
            return false;
        }
        self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: Hash> Hash for List<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Length first, so lists of different lengths diverge early
        self.length.hash(state);
        for element in self {
            element.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for List<T> {
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

impl<T: Clone> Semigroup for List<T> {
    fn combine(self, other: Self) -> Self {
        self.append(&other)
    }
}

impl<T: Clone> Monoid for List<T> {
    fn empty() -> Self {
        Self::new()
    }
}

// Rc-backed structure: single-threaded sharing only
static_assertions::assert_not_impl_any!(List<i32>: Send, Sync);
static_assertions::assert_not_impl_any!(List<String>: Send, Sync);

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_new_creates_empty() {
        let list: List<i32> = List::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
    }

    #[rstest]
    fn test_singleton() {
        let list = List::singleton(42);
        assert_eq!(list.head(), Some(&42));
        assert_eq!(list.len(), 1);
    }

    #[rstest]
    fn test_cons() {
        let list = List::new().cons(1).cons(2).cons(3);
        assert_eq!(list.head(), Some(&3));
        assert_eq!(list.len(), 3);
    }

    #[rstest]
    fn test_cons_shares_structure() {
        let list = List::new().cons(2).cons(1);
        let extended = list.cons(0);
        assert_eq!(list.len(), 2);
        assert_eq!(extended.len(), 3);
        assert_eq!(list.head(), Some(&1));
    }

    #[rstest]
    fn test_tail() {
        let list = List::new().cons(1).cons(2).cons(3);
        let tail = list.tail();
        assert_eq!(tail.head(), Some(&2));
        assert_eq!(tail.len(), 2);
    }

    #[rstest]
    fn test_tail_of_empty_is_empty() {
        let empty: List<i32> = List::new();
        assert!(empty.tail().is_empty());
    }

    #[rstest]
    fn test_uncons() {
        let list = List::new().cons(1).cons(2);
        let (head, tail) = list.uncons().unwrap();
        assert_eq!(*head, 2);
        assert_eq!(tail.head(), Some(&1));
    }

    #[rstest]
    fn test_get() {
        let list = List::new().cons(3).cons(2).cons(1);
        assert_eq!(list.get(0), Some(&1));
        assert_eq!(list.get(1), Some(&2));
        assert_eq!(list.get(2), Some(&3));
        assert_eq!(list.get(3), None);
    }

    #[rstest]
    fn test_iter() {
        let list = List::new().cons(3).cons(2).cons(1);
        let collected: Vec<&i32> = list.iter().collect();
        assert_eq!(collected, vec![&1, &2, &3]);
    }

    #[rstest]
    fn test_iter_is_restartable() {
        let list: List<i32> = (1..=3).collect();
        let first: Vec<&i32> = list.iter().collect();
        let second: Vec<&i32> = list.iter().collect();
        assert_eq!(first, second);
    }

    #[rstest]
    fn test_reverse() {
        let list: List<i32> = (1..=3).collect();
        let reversed = list.reverse();
        let collected: Vec<&i32> = reversed.iter().collect();
        assert_eq!(collected, vec![&3, &2, &1]);
    }

    #[rstest]
    fn test_append() {
        let list1: List<i32> = (1..=2).collect();
        let list2: List<i32> = (3..=4).collect();
        let combined = list1.append(&list2);
        let collected: Vec<&i32> = combined.iter().collect();
        assert_eq!(collected, vec![&1, &2, &3, &4]);
    }

    #[rstest]
    fn test_append_empty_operands() {
        let empty: List<i32> = List::new();
        let list: List<i32> = (1..=2).collect();
        assert_eq!(empty.append(&list), list);
        assert_eq!(list.append(&empty), list);
    }

    #[rstest]
    fn test_from_slice() {
        let list = List::from_slice(&[1, 2, 3]);
        assert_eq!(list.head(), Some(&1));
        assert_eq!(list.len(), 3);
    }

    #[rstest]
    fn test_from_iter() {
        let list: List<i32> = (1..=5).collect();
        assert_eq!(list.len(), 5);
        assert_eq!(list.head(), Some(&1));
    }

    #[rstest]
    fn test_into_iter() {
        let list: List<i32> = (1..=3).collect();
        let collected: Vec<i32> = list.into_iter().collect();
        assert_eq!(collected, vec![1, 2, 3]);
    }

    #[rstest]
    fn test_fold_left() {
        let list: List<i32> = (1..=5).collect();
        let sum = list.fold_left(0, |accumulator, x| accumulator + x);
        assert_eq!(sum, 15);
    }

    #[rstest]
    fn test_eq_same_element_type() {
        let list1: List<i32> = (1..=3).collect();
        let list2: List<i32> = (1..=3).collect();
        let list3: List<i32> = (1..=4).collect();
        assert_eq!(list1, list2);
        assert_ne!(list1, list3);
    }

    #[rstest]
    fn test_empty_lists_equal_regardless_of_provenance() {
        let a: List<i32> = List::new();
        let b: List<i32> = List::singleton(1).tail();
        assert_eq!(a, b);
    }

    #[rstest]
    fn test_prepend_promotes() {
        let list = List::new().prepend(1).to_list().prepend(0);
        assert_eq!(*list.head(), 0);
        assert_eq!(list.len(), 2);
    }

    #[rstest]
    fn test_to_non_empty() {
        let list: List<i32> = (1..=3).collect();
        let non_empty = list.to_non_empty().unwrap();
        assert_eq!(*non_empty.head(), 1);
        assert_eq!(non_empty.len(), 3);

        let empty: List<i32> = List::new();
        assert!(empty.to_non_empty().is_none());
    }

    #[rstest]
    fn test_display() {
        let list: List<i32> = (1..=3).collect();
        assert_eq!(format!("{list}"), "[1, 2, 3]");

        let empty: List<i32> = List::new();
        assert_eq!(format!("{empty}"), "[]");
    }

    #[rstest]
    fn test_semigroup_combine() {
        let list1: List<i32> = (1..=2).collect();
        let list2: List<i32> = (3..=4).collect();
        let combined = list1.combine(list2);
        let collected: Vec<&i32> = combined.iter().collect();
        assert_eq!(collected, vec![&1, &2, &3, &4]);
    }

    #[rstest]
    fn test_monoid_empty() {
        let empty: List<i32> = List::empty();
        assert!(empty.is_empty());
    }
}
