//! Binary Heap Priority Queues for Rust
//!
//! This crate provides two array-backed binary heaps ordered by a
//! caller-supplied priority strategy rather than by `Ord` on the elements.
//!
//! # Features
//!
//! - **BinaryHeap**: O(log n) push and pop; equal priorities pop in no particular order
//! - **StableHeap**: same costs; equal priorities pop first-in first-out
//! - **Removal by value**: both queues can remove an arbitrary element found by equality
//!
//! Both implement [`PriorityQueue`], so generic code can take either.
//!
//! # Example
//!
//! ```rust
//! use stable_heaps::{PriorityQueue, StableHeap};
//!
//! #[derive(Debug, PartialEq)]
//! struct Task {
//!     name: &'static str,
//!     urgency: u8,
//! }
//!
//! let mut queue: StableHeap<Task, _> =
//!     StableHeap::new(|a: &Task, b: &Task| a.urgency > b.urgency);
//! queue.push(Task { name: "lint", urgency: 1 });
//! queue.push(Task { name: "build", urgency: 2 });
//! queue.push(Task { name: "test", urgency: 2 });
//!
//! assert_eq!(queue.pop().map(|t| t.name), Ok("build"));
//! assert_eq!(queue.pop().map(|t| t.name), Ok("test"));
//! assert_eq!(queue.remove(&Task { name: "lint", urgency: 1 }).map(|t| t.name), Some("lint"));
//! assert!(queue.is_empty());
//! ```

pub mod binary;
pub mod stable;
pub mod traits;

// Re-export the main types for convenience
pub use binary::BinaryHeap;
pub use stable::StableHeap;
pub use traits::{ByKey, HeapError, MaxFirst, MinFirst, Priority, PriorityQueue};
