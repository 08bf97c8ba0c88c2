//! Common traits for the priority queues in this crate
//!
//! - [`Priority`]: the ordering strategy a queue is constructed with
//! - [`PriorityQueue`]: the capability set shared by
//!   [`BinaryHeap`](crate::binary::BinaryHeap) and
//!   [`StableHeap`](crate::stable::StableHeap)
//!
//! Unlike `std::collections::BinaryHeap`, elements do not need to implement
//! `Ord`. The queue asks its [`Priority`] strategy which of two elements
//! should come out first.

use std::cmp::Ordering;

use thiserror::Error;

/// Error type for priority queue operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HeapError {
    /// `pop` was called on a queue holding no elements
    #[error("tried to pop an empty priority queue")]
    EmptyQueue,
}

/// Ordering strategy for a priority queue
///
/// `is_higher(a, b)` returns true when `a` must leave the queue before `b`.
///
/// # Contract
///
/// The relation must be a strict ordering:
/// - irreflexive: `is_higher(a, a)` is false, and more generally it is false
///   whenever `a` and `b` have equal priority
/// - transitive
///
/// A strategy that answers true for equal priorities does not panic, but the
/// heap order degrades silently and [`StableHeap`](crate::stable::StableHeap)
/// can no longer keep equal elements in insertion order. Debug builds check
/// irreflexivity on every push.
///
/// Any `Fn(&T, &T) -> bool` closure is a strategy:
///
/// ```rust
/// use stable_heaps::{BinaryHeap, PriorityQueue};
///
/// let mut heap: BinaryHeap<u32, _> = BinaryHeap::new(|a: &u32, b: &u32| a % 10 > b % 10);
/// heap.push(19);
/// heap.push(25);
/// assert_eq!(heap.pop(), Ok(19));
/// ```
pub trait Priority<T> {
    /// Returns true if `a` has strictly higher priority than `b`
    fn is_higher(&self, a: &T, b: &T) -> bool;
}

impl<T, F> Priority<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn is_higher(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}

/// Greatest element first, for `T: Ord`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaxFirst;

impl<T: Ord> Priority<T> for MaxFirst {
    #[inline]
    fn is_higher(&self, a: &T, b: &T) -> bool {
        a > b
    }
}

/// Smallest element first, for `T: Ord`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MinFirst;

impl<T: Ord> Priority<T> for MinFirst {
    #[inline]
    fn is_higher(&self, a: &T, b: &T) -> bool {
        a < b
    }
}

/// Orders elements by an extracted key, greatest key first
///
/// Wrap the key in [`std::cmp::Reverse`] to get smallest-key-first.
///
/// ```rust
/// use std::cmp::Reverse;
/// use stable_heaps::{ByKey, PriorityQueue, StableHeap};
///
/// let mut queue: StableHeap<(&str, u8), _> =
///     StableHeap::new(ByKey(|job: &(&str, u8)| Reverse(job.1)));
/// queue.push(("backup", 2));
/// queue.push(("deploy", 1));
/// queue.push(("report", 2));
/// assert_eq!(queue.pop(), Ok(("deploy", 1)));
/// assert_eq!(queue.pop(), Ok(("backup", 2)));
/// assert_eq!(queue.pop(), Ok(("report", 2)));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ByKey<F>(pub F);

impl<T, K, F> Priority<T> for ByKey<F>
where
    K: Ord,
    F: Fn(&T) -> K,
{
    #[inline]
    fn is_higher(&self, a: &T, b: &T) -> bool {
        (self.0)(a).cmp(&(self.0)(b)) == Ordering::Greater
    }
}

/// Capability set shared by every priority queue in this crate
///
/// Generic code written against this trait works with both the unstable
/// [`BinaryHeap`](crate::binary::BinaryHeap) and the FIFO-preserving
/// [`StableHeap`](crate::stable::StableHeap).
///
/// # Example
///
/// ```rust
/// use stable_heaps::{BinaryHeap, MaxFirst, PriorityQueue, StableHeap};
///
/// fn drain<Q: PriorityQueue<i32>>(mut queue: Q) -> Vec<i32> {
///     let mut out = Vec::new();
///     while let Ok(value) = queue.pop() {
///         out.push(value);
///     }
///     out
/// }
///
/// let unstable = BinaryHeap::from_elements(MaxFirst, [3, 1, 2]);
/// let stable = StableHeap::from_elements(MaxFirst, [3, 1, 2]);
/// assert_eq!(drain(unstable), vec![3, 2, 1]);
/// assert_eq!(drain(stable), vec![3, 2, 1]);
/// ```
pub trait PriorityQueue<T> {
    /// Returns the number of elements in the queue
    fn len(&self) -> usize;

    /// Returns true if the queue holds no elements
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Inserts an element
    ///
    /// # Time Complexity
    /// O(log n)
    fn push(&mut self, element: T);

    /// Returns the highest-priority element without removing it
    ///
    /// # Time Complexity
    /// O(1)
    fn peek(&self) -> Option<&T>;

    /// Removes and returns the highest-priority element
    ///
    /// # Errors
    /// Returns [`HeapError::EmptyQueue`] if the queue is empty. The queue is
    /// left untouched in that case.
    ///
    /// # Time Complexity
    /// O(log n)
    fn pop(&mut self) -> Result<T, HeapError>;

    /// Removes one element equal to `element`
    ///
    /// Returns the removed element, or `None` if no element compares equal.
    /// A missing element is not an error. When several elements compare
    /// equal, which one is removed is unspecified.
    ///
    /// # Time Complexity
    /// O(n) to locate the element, O(log n) to remove it
    fn remove(&mut self, element: &T) -> Option<T>
    where
        T: PartialEq;
}
