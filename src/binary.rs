//! Binary heap ordered by a caller-supplied priority strategy
//!
//! An array-backed binary heap. Index 0 holds the highest-priority element
//! and the children of index `i` live at `2i + 1` and `2i + 2`.
//!
//! Elements with equal priority leave the heap in no particular order. Use
//! [`StableHeap`](crate::stable::StableHeap) when ties must pop in insertion
//! order.
//!
//! # Time Complexity
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | `push`    | O(log n)   |
//! | `pop`     | O(log n)   |
//! | `peek`    | O(1)       |
//! | `remove`  | O(n)       |
//!
//! # Example
//!
//! ```rust
//! use stable_heaps::{BinaryHeap, MaxFirst, PriorityQueue};
//!
//! let mut heap = BinaryHeap::from_elements(MaxFirst, [1, 5, 2, 3, 5, 4, 3, 2, 4]);
//! assert_eq!(heap.remove(&7), None);
//! assert_eq!(heap.remove(&3), Some(3));
//! assert_eq!(heap.into_sorted_vec(), vec![5, 5, 4, 4, 3, 2, 2, 1]);
//! ```

use std::fmt;

use crate::traits::{HeapError, Priority, PriorityQueue};

#[inline]
fn parent(index: usize) -> usize {
    (index - 1) / 2
}

#[inline]
fn left_child(index: usize) -> usize {
    2 * index + 1
}

#[inline]
fn right_child(index: usize) -> usize {
    2 * index + 2
}

/// A binary heap ordered by a [`Priority`] strategy
///
/// The strategy is supplied at construction and decides which of two
/// elements leaves the heap first. Elements themselves need no ordering
/// traits.
pub struct BinaryHeap<T, C> {
    data: Vec<T>,
    priority: C,
}

impl<T, C> BinaryHeap<T, C>
where
    C: Priority<T>,
{
    /// Creates an empty heap ordered by `priority`
    pub fn new(priority: C) -> Self {
        Self {
            data: Vec::new(),
            priority,
        }
    }

    /// Creates an empty heap with room for `capacity` elements
    ///
    /// The heap still grows past `capacity` on demand.
    pub fn with_capacity(priority: C, capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            priority,
        }
    }

    /// Creates a heap by pushing `elements` one at a time, in order
    pub fn from_elements<I>(priority: C, elements: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut heap = Self::new(priority);
        heap.extend(elements);
        heap
    }

    /// Returns the priority strategy this heap was built with
    pub fn priority(&self) -> &C {
        &self.priority
    }

    /// Removes every element
    pub fn clear(&mut self) {
        log::trace!("clearing binary heap of {} elements", self.data.len());
        self.data.clear();
    }

    /// Consumes the heap, returning its elements highest priority first
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.data.len());
        while let Ok(element) = self.pop() {
            sorted.push(element);
        }
        sorted
    }

    /// Removes the first element matching `predicate`
    ///
    /// The victim is swapped with its parent until it reaches the root,
    /// without consulting the priority strategy, and is then popped. The
    /// sift-down run by `pop` restores heap order for everything left behind,
    /// since each swap only moved an ancestor one level down its own path.
    ///
    /// Returns `None`, leaving the heap untouched, when nothing matches.
    pub fn remove_where<P>(&mut self, mut predicate: P) -> Option<T>
    where
        P: FnMut(&T) -> bool,
    {
        let Some(mut index) = self.data.iter().position(|element| predicate(element)) else {
            log::trace!("remove: no matching element among {}", self.data.len());
            return None;
        };
        log::trace!(
            "remove: bubbling index {} of {} to the root",
            index,
            self.data.len()
        );

        while index > 0 {
            let parent = parent(index);
            self.data.swap(index, parent);
            index = parent;
        }

        self.pop().ok()
    }

    /// Checks the heap-order invariant: no element outranks its parent
    pub fn is_heap(&self) -> bool {
        (1..self.data.len()).all(|index| !self.is_higher_by_index(index, parent(index)))
    }

    #[inline]
    fn is_higher_by_index(&self, a: usize, b: usize) -> bool {
        self.priority.is_higher(&self.data[a], &self.data[b])
    }

    #[inline]
    fn has_children(&self, index: usize) -> bool {
        left_child(index) < self.data.len()
    }

    /// Index of the child that should move up, left on ties
    fn higher_child_index(&self, index: usize) -> usize {
        debug_assert!(
            self.has_children(index),
            "child lookup on a leaf at {}",
            index
        );

        let left = left_child(index);
        let right = right_child(index);
        if right >= self.data.len() || !self.is_higher_by_index(right, left) {
            left
        } else {
            right
        }
    }

    /// Move element at index up to maintain heap property
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = parent(index);
            if !self.is_higher_by_index(index, parent) {
                break;
            }
            self.data.swap(index, parent);
            index = parent;
        }
    }

    /// Move element at index down to maintain heap property
    fn sift_down(&mut self, mut index: usize) {
        while self.has_children(index) {
            let child = self.higher_child_index(index);
            if !self.is_higher_by_index(child, index) {
                break;
            }
            self.data.swap(index, child);
            index = child;
        }
    }
}

impl<T, C> PriorityQueue<T> for BinaryHeap<T, C>
where
    C: Priority<T>,
{
    fn len(&self) -> usize {
        self.data.len()
    }

    fn push(&mut self, element: T) {
        debug_assert!(
            !self.priority.is_higher(&element, &element),
            "priority strategy must return false for equal priorities"
        );
        self.data.push(element);
        self.sift_up(self.data.len() - 1);
    }

    fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    fn pop(&mut self) -> Result<T, HeapError> {
        if self.data.is_empty() {
            log::trace!("pop on an empty binary heap");
            return Err(HeapError::EmptyQueue);
        }

        let last_idx = self.data.len() - 1;
        self.data.swap(0, last_idx);
        let root = self.data.pop().ok_or(HeapError::EmptyQueue)?;

        if !self.data.is_empty() {
            self.sift_down(0);
        }

        Ok(root)
    }

    fn remove(&mut self, element: &T) -> Option<T>
    where
        T: PartialEq,
    {
        self.remove_where(|candidate| candidate == element)
    }
}

impl<T, C> Extend<T> for BinaryHeap<T, C>
where
    C: Priority<T>,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.push(element);
        }
    }
}

impl<T: Clone, C: Clone> Clone for BinaryHeap<T, C> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
            priority: self.priority.clone(),
        }
    }
}

impl<T: fmt::Debug, C> fmt::Debug for BinaryHeap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinaryHeap")
            .field("data", &self.data)
            .finish_non_exhaustive()
    }
}
