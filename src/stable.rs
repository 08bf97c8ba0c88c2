//! Stable priority queue
//!
//! [`StableHeap`] behaves like [`BinaryHeap`] except that elements of equal
//! priority pop in the order they were pushed.
//!
//! Every pushed value is stamped with a per-queue insertion counter. The
//! inner heap compares the client priority first and falls back to the
//! stamp, so no two stored nodes ever tie.
//!
//! # Example
//!
//! ```rust
//! use stable_heaps::{PriorityQueue, StableHeap};
//!
//! let mut queue: StableHeap<(&str, i32), _> =
//!     StableHeap::new(|a: &(&str, i32), b: &(&str, i32)| a.1 < b.1);
//! queue.push(("b", 3));
//! queue.push(("a", 1));
//! queue.push(("c", 3));
//!
//! assert_eq!(queue.pop(), Ok(("a", 1)));
//! assert_eq!(queue.pop(), Ok(("b", 3)));
//! assert_eq!(queue.pop(), Ok(("c", 3)));
//! ```

use std::fmt;

use crate::binary::BinaryHeap;
use crate::traits::{HeapError, Priority, PriorityQueue};

/// A client value together with its insertion stamp
#[derive(Debug, Clone)]
struct Node<T> {
    value: T,
    order: u64,
}

/// Client priority first, earlier insertion on ties
#[derive(Debug, Clone)]
struct InsertionOrder<C>(C);

impl<T, C> Priority<Node<T>> for InsertionOrder<C>
where
    C: Priority<T>,
{
    fn is_higher(&self, a: &Node<T>, b: &Node<T>) -> bool {
        if self.0.is_higher(&b.value, &a.value) {
            return false;
        }
        if self.0.is_higher(&a.value, &b.value) {
            return true;
        }
        a.order < b.order
    }
}

/// A priority queue that pops equal-priority elements first-in first-out
///
/// The priority strategy must return false for equal priorities (see
/// [`Priority`]); insertion order is only consulted when the strategy
/// reports neither element as higher.
pub struct StableHeap<T, C> {
    heap: BinaryHeap<Node<T>, InsertionOrder<C>>,
    next_order: u64,
}

impl<T, C> StableHeap<T, C>
where
    C: Priority<T>,
{
    /// Creates an empty queue ordered by `priority`
    pub fn new(priority: C) -> Self {
        Self {
            heap: BinaryHeap::new(InsertionOrder(priority)),
            next_order: 0,
        }
    }

    /// Creates an empty queue with room for `capacity` elements
    pub fn with_capacity(priority: C, capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(InsertionOrder(priority), capacity),
            next_order: 0,
        }
    }

    /// Creates a queue by pushing `elements` one at a time, in order
    ///
    /// Iteration order becomes insertion order, so it decides how ties pop.
    pub fn from_elements<I>(priority: C, elements: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut queue = Self::new(priority);
        queue.extend(elements);
        queue
    }

    /// Returns the priority strategy this queue was built with
    pub fn priority(&self) -> &C {
        &self.heap.priority().0
    }

    /// Removes every element
    ///
    /// The insertion counter keeps running; only a new queue starts from 0.
    pub fn clear(&mut self) {
        self.heap.clear();
    }

    /// Consumes the queue, returning its elements in pop order
    pub fn into_sorted_vec(self) -> Vec<T> {
        self.heap
            .into_sorted_vec()
            .into_iter()
            .map(|node| node.value)
            .collect()
    }

    /// Removes the first element whose value matches `predicate`
    pub fn remove_where<P>(&mut self, mut predicate: P) -> Option<T>
    where
        P: FnMut(&T) -> bool,
    {
        self.heap
            .remove_where(|node| predicate(&node.value))
            .map(|node| node.value)
    }

    /// Checks the heap-order invariant of the underlying heap
    pub fn is_heap(&self) -> bool {
        self.heap.is_heap()
    }
}

impl<T, C> PriorityQueue<T> for StableHeap<T, C>
where
    C: Priority<T>,
{
    fn len(&self) -> usize {
        self.heap.len()
    }

    fn push(&mut self, element: T) {
        let order = self.next_order;
        self.next_order += 1;
        self.heap.push(Node {
            value: element,
            order,
        });
    }

    fn peek(&self) -> Option<&T> {
        self.heap.peek().map(|node| &node.value)
    }

    fn pop(&mut self) -> Result<T, HeapError> {
        self.heap.pop().map(|node| node.value)
    }

    /// Removes one element equal to `element`
    ///
    /// Matching looks at the value only. The insertion stamp plays no part,
    /// so any stored copy of an equal value qualifies.
    fn remove(&mut self, element: &T) -> Option<T>
    where
        T: PartialEq,
    {
        self.remove_where(|value| value == element)
    }
}

impl<T, C> Extend<T> for StableHeap<T, C>
where
    C: Priority<T>,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.push(element);
        }
    }
}

impl<T: Clone, C: Clone> Clone for StableHeap<T, C> {
    fn clone(&self) -> Self {
        Self {
            heap: self.heap.clone(),
            next_order: self.next_order,
        }
    }
}

impl<T: fmt::Debug, C> fmt::Debug for StableHeap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StableHeap")
            .field("heap", &self.heap)
            .field("next_order", &self.next_order)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::{MaxFirst, MinFirst};

    #[derive(Debug, Clone, PartialEq)]
    struct Thing {
        name: &'static str,
        value: i32,
    }

    fn thing(name: &'static str, value: i32) -> Thing {
        Thing { name, value }
    }

    fn lower_value_first(a: &Thing, b: &Thing) -> bool {
        a.value < b.value
    }

    #[test]
    fn test_basic_operations() {
        let mut queue = StableHeap::new(MinFirst);

        assert!(queue.is_empty());
        queue.push(3);
        queue.push(1);
        queue.push(2);

        assert_eq!(queue.len(), 3);
        assert_eq!(queue.peek(), Some(&1));
        assert_eq!(queue.pop(), Ok(1));
        assert_eq!(queue.pop(), Ok(2));
        assert_eq!(queue.pop(), Ok(3));
        assert_eq!(queue.pop(), Err(HeapError::EmptyQueue));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_ties_pop_in_insertion_order() {
        let things = vec![
            thing("", 1),
            thing("a", 3),
            thing("a", 5),
            thing("a", 7),
            thing("", 9),
            thing("b", 3),
            thing("b", 5),
            thing("b", 7),
        ];
        let mut queue = StableHeap::from_elements(lower_value_first, things);
        queue.push(thing("a", 7));
        queue.push(thing("c", 7));

        let popped = queue.into_sorted_vec();
        let expected = vec![
            thing("", 1),
            thing("a", 3),
            thing("b", 3),
            thing("a", 5),
            thing("b", 5),
            thing("a", 7),
            thing("b", 7),
            thing("a", 7),
            thing("c", 7),
            thing("", 9),
        ];
        assert_eq!(popped, expected);
    }

    #[test]
    fn test_counter_is_per_instance() {
        let mut first = StableHeap::new(lower_value_first);
        first.push(thing("x", 1));
        first.push(thing("y", 1));
        assert_eq!(first.next_order, 2);

        let second: StableHeap<Thing, _> = StableHeap::new(lower_value_first);
        assert_eq!(second.next_order, 0);
    }

    #[test]
    fn test_clear_keeps_counter() {
        let mut queue = StableHeap::new(MaxFirst);
        queue.extend([1, 2, 3]);
        queue.clear();
        assert!(queue.is_empty());
        assert_eq!(queue.next_order, 3);

        queue.push(4);
        assert_eq!(queue.pop(), Ok(4));
    }

    #[test]
    fn test_remove_ignores_insertion_order() {
        let mut queue = StableHeap::from_elements(
            lower_value_first,
            [thing("a", 2), thing("b", 2), thing("a", 2)],
        );

        assert_eq!(queue.remove(&thing("a", 2)), Some(thing("a", 2)));
        assert_eq!(queue.len(), 2);
        assert!(queue.is_heap());

        assert_eq!(queue.remove(&thing("z", 2)), None);
        assert_eq!(queue.len(), 2);

        let rest = queue.into_sorted_vec();
        assert_eq!(rest.len(), 2);
        assert!(rest.contains(&thing("a", 2)));
        assert!(rest.contains(&thing("b", 2)));
    }

    #[test]
    fn test_remove_scenario() {
        let mut queue = StableHeap::from_elements(MaxFirst, [1, 5, 2, 3, 5, 4, 3, 2, 4]);

        assert_eq!(queue.remove(&7), None);
        assert_eq!(queue.len(), 9);
        assert_eq!(queue.remove(&3), Some(3));
        assert_eq!(queue.len(), 8);

        assert_eq!(queue.into_sorted_vec(), vec![5, 5, 4, 4, 3, 2, 2, 1]);
    }

    #[test]
    fn test_remove_preserves_fifo_of_survivors() {
        let mut queue = StableHeap::from_elements(
            lower_value_first,
            (0..10).map(|i| Thing {
                name: ["p", "q", "r", "s", "t", "u", "v", "w", "x", "y"][i],
                value: (i % 2) as i32,
            }),
        );

        assert_eq!(queue.remove(&thing("t", 0)), Some(thing("t", 0)));
        assert_eq!(queue.remove(&thing("q", 1)), Some(thing("q", 1)));

        let names: Vec<&str> = queue.into_sorted_vec().into_iter().map(|t| t.name).collect();
        assert_eq!(names, vec!["p", "r", "v", "x", "s", "u", "w", "y"]);
    }

    #[test]
    fn test_priority_accessor() {
        let queue: StableHeap<i32, _> = StableHeap::with_capacity(MinFirst, 8);
        assert_eq!(*queue.priority(), MinFirst);
    }
}
