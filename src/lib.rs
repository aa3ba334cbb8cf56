//! Binary-heap maintenance as a generic algorithm
//!
//! This crate splits a binary min-heap into two halves:
//!
//! - **A capability trait**, [`HeapContainer`]: length, index comparison,
//!   index swap, append-at-end, remove-from-end. Any sequence providing these
//!   five primitives is heap-compatible.
//! - **A generic algorithm**, the [`sift`] module: `init`, `push`, `pop`, and
//!   `fix` maintain heap order over any `HeapContainer`, owning the
//!   parent-orders-before-children invariant entirely outside the container.
//!
//! On top of those sit two conveniences: [`IntMinHeap`], a contiguous
//! `i64` sequence implementing the trait with ascending order, and
//! [`HeapQueue`]/[`IntMinQueue`], a facade that keeps a container
//! permanently heap-ordered behind a push/pop API.
//!
//! # Example
//!
//! ```rust
//! use sift_heap::{sift, IntMinHeap, HeapContainer};
//!
//! let mut heap = IntMinHeap::from(vec![5, 3, 8, 1]);
//! sift::init(&mut heap);
//!
//! let mut drained = Vec::new();
//! while !heap.is_empty() {
//!     drained.push(sift::pop(&mut heap));
//! }
//! assert_eq!(drained, vec![1, 3, 5, 8]);
//! ```

pub mod int_min_heap;
pub mod queue;
pub mod sift;
pub mod traits;

// Re-export the working set for convenience
pub use int_min_heap::IntMinHeap;
pub use queue::{HeapQueue, IntMinQueue};
pub use traits::HeapContainer;
