//! Persistent (immutable) linked lists.
//!
//! This module provides two cons-list types that share one node
//! representation:
//!
//! - [`List`]: a possibly-empty persistent singly-linked list
//! - [`NonEmptyList`]: the same structure, statically guaranteed to hold at
//!   least one element
//!
//! Both use structural sharing: prepending creates a single new node and
//! reuses every existing one, so prepend is O(1) in time and additional
//! space, and length is cached at construction for O(1) reads.
//!
//! Promotion between the two types is O(1) in both directions
//! ([`List::to_non_empty`], [`NonEmptyList::to_list`]).
//!
//! # Examples
//!
//! ```rust
//! use accrue::persistent::List;
//!
//! let list = List::new().cons(3).cons(2).cons(1);
//! assert_eq!(list.head(), Some(&1));
//!
//! // Structural sharing: the original list is preserved
//! let extended = list.cons(0);
//! assert_eq!(list.len(), 3);     // Original unchanged
//! assert_eq!(extended.len(), 4); // New list
//!
//! // Promote once at least one element is present
//! let non_empty = list.to_non_empty().unwrap();
//! assert_eq!(*non_empty.head(), 1);
//! ```

mod list;
mod non_empty;

pub use list::{List, ListIntoIterator, ListIterator};
pub use non_empty::NonEmptyList;
