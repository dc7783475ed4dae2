//! # Str Queue
//!
//! An owned singly-linked queue of strings with O(1) insertion at both ends,
//! O(1) removal from the head, and in-place structural algorithms: reversal
//! and merge sort that re-link the existing nodes without allocating, freeing,
//! or copying a single element.
//!
//! ## Key Features
//!
//! * **Exclusive ownership chain:** The queue owns the first node and each node
//!   owns the next; values are copied in on insertion and never alias caller
//!   buffers.
//! * **O(1) ends:** A non-owning tail cursor makes `push_back` constant time
//!   without a doubly-linked structure; the cursor is re-derived whenever
//!   restructuring can move the end of the chain.
//! * **In-place algorithms:** `reverse` is an iterative O(n)/O(1)-space pointer
//!   reversal; `sort` is a stable merge sort over the links (fast/slow split,
//!   re-linking merge) in O(n log n).
//! * **Harness-friendly boundary:** The [`handle`] module exposes the same
//!   operations over `Option<&mut StrQueue>` for callers that treat an absent
//!   queue as a valid argument.
//!
//! ## Examples
//!
//! ```rust
//! use str_queue::StrQueue;
//!
//! let mut q = StrQueue::new();
//! q.push_back("b");
//! q.push_back("c");
//! q.push_front("a");
//!
//! assert_eq!(q.len(), 3);
//! assert_eq!(q.iter().collect::<Vec<_>>(), ["a", "b", "c"]);
//!
//! q.reverse();
//! assert_eq!(q.iter().collect::<Vec<_>>(), ["c", "b", "a"]);
//!
//! q.sort();
//! assert_eq!(q.pop_front().as_deref(), Some("a"));
//! ```
//!
//! ### Optional-handle boundary
//!
//! ```rust
//! use str_queue::handle;
//!
//! let mut q = handle::create();
//! assert!(handle::insert_tail(Some(&mut q), "hello"));
//! assert!(!handle::insert_tail(None, "dropped on the floor"));
//!
//! let mut buf = [0u8; 4];
//! assert!(handle::remove_head(Some(&mut q), Some(&mut buf)));
//! assert_eq!(&buf, b"hel\0"); // truncated, always terminated
//! ```

// --- Module Declarations ---

pub mod handle;
pub mod queue;

// --- Re-exports ---

pub use queue::StrQueue;
