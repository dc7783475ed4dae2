//! Singly-linked queue of owned strings with O(1) insertion at both ends.
//!
//! Provides [`StrQueue`] — a chain of heap nodes where the queue owns the first
//! node and each node owns the next. A raw, non-owning tail pointer gives O(1)
//! `push_back` without making the list doubly linked or introducing a second
//! owner of the last node.
//!
//! # Invariants
//! * `len == 0` iff `head` is `None` iff `tail` is null.
//! * Following `next` from `head` reaches the node `tail` points to after
//!   exactly `len - 1` steps, and that node's `next` is `None`.
//! * `tail` is re-derived after any restructuring ([`reverse`](StrQueue::reverse),
//!   [`sort`](StrQueue::sort)) that can change which node terminates the chain.
//! * Structural operations only re-link existing nodes; payload `String`s are
//!   never copied or reallocated by `reverse` or `sort`.
//!
//! The raw tail pointer makes `StrQueue` `!Send` and `!Sync`; the type is for
//! single-threaded, single-owner use.

use core::fmt;
use core::ptr;

type Link = Option<Box<Node>>;

struct Node {
    value: String,
    next: Link,
}

/// A FIFO queue of owned strings backed by a singly-linked chain.
///
/// Values are copied on insertion; the queue never retains a reference to a
/// caller's buffer. `push_front`, `push_back`, `pop_front`, `len`, `front`
/// and `back` are all O(1). [`reverse`](Self::reverse) is O(n)/O(1)-space and
/// [`sort`](Self::sort) is an in-place merge sort — neither allocates or
/// frees a single node.
pub struct StrQueue {
    head: Link,
    /// Non-owning cursor to the last node. Null iff the queue is empty.
    tail: *mut Node,
    len: usize,
}

impl StrQueue {
    /// Creates an empty queue. Allocates nothing.
    pub const fn new() -> Self {
        Self {
            head: None,
            tail: ptr::null_mut(),
            len: 0,
        }
    }

    // --- Inspection ---

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn front(&self) -> Option<&str> {
        self.head.as_deref().map(|node| node.value.as_str())
    }

    /// Returns the last value in O(1), reading through the tail cursor.
    pub fn back(&self) -> Option<&str> {
        if self.tail.is_null() {
            None
        } else {
            // Tail points into the chain owned by `head`, which we borrow
            // shared for `&self`, so the read cannot race a relink.
            unsafe { Some((*self.tail).value.as_str()) }
        }
    }

    // --- Modification ---

    /// Copies `value` into a new node linked as the new head.
    ///
    /// If the queue was empty, the new node becomes the tail as well.
    pub fn push_front(&mut self, value: &str) {
        let mut node = Box::new(Node {
            value: value.to_owned(),
            next: self.head.take(),
        });
        if self.tail.is_null() {
            self.tail = &raw mut *node;
        }
        self.head = Some(node);
        self.len += 1;
    }

    /// Copies `value` into a new node linked after the current tail.
    ///
    /// O(1): relies on the maintained tail cursor, never traverses the chain.
    pub fn push_back(&mut self, value: &str) {
        let mut node = Box::new(Node {
            value: value.to_owned(),
            next: None,
        });
        let raw: *mut Node = &raw mut *node;
        if self.tail.is_null() {
            self.head = Some(node);
        } else {
            // Tail is the last node of the chain we exclusively own.
            unsafe {
                (*self.tail).next = Some(node);
            }
        }
        self.tail = raw;
        self.len += 1;
    }

    /// Detaches the head node and returns its payload, or `None` if empty.
    ///
    /// Removing the last element also clears the tail cursor.
    pub fn pop_front(&mut self) -> Option<String> {
        self.head.take().map(|mut node| {
            self.head = node.next.take();
            if self.head.is_none() {
                self.tail = ptr::null_mut();
            }
            self.len -= 1;
            node.value
        })
    }

    /// Drops every node. Iterative, so arbitrarily long chains cannot
    /// overflow the stack through recursive `Box` drops.
    pub fn clear(&mut self) {
        let mut cur = self.head.take();
        while let Some(mut node) = cur {
            cur = node.next.take();
        }
        self.tail = ptr::null_mut();
        self.len = 0;
    }

    // --- Structural algorithms ---

    /// Reverses the chain in place.
    ///
    /// Iterative pointer reversal with a trailing cursor: each step unhooks
    /// the current head and pushes it onto the already-reversed prefix. No
    /// node is allocated or freed, payloads stay where they are, and `len`
    /// is unchanged. The former head becomes the new tail. No-op if empty.
    pub fn reverse(&mut self) {
        let new_tail: *mut Node = match self.head.as_deref_mut() {
            Some(node) => &raw mut *node,
            None => return,
        };
        let mut reversed: Link = None;
        let mut cur = self.head.take();
        while let Some(mut node) = cur {
            cur = node.next.take();
            node.next = reversed;
            reversed = Some(node);
        }
        self.head = reversed;
        // Boxes were only re-linked, never moved on the heap, so the raw
        // pointer recorded before the relinking still names the old head.
        self.tail = new_tail;
    }

    /// Sorts the chain ascending by lexicographic comparison of the payloads.
    ///
    /// Merge sort directly on the links: the chain is split in half by a
    /// fast/slow cursor walk, each half is sorted recursively, and the
    /// halves are merged by repeatedly re-linking the smaller front node.
    /// Stable; equal values keep their relative order. Nodes are never
    /// copied, payloads never reallocated. O(n log n) time, O(log n)
    /// recursion depth. No-op for fewer than two elements.
    pub fn sort(&mut self) {
        if self.len < 2 {
            return;
        }
        let chain = self.head.take();
        self.head = merge_sort(chain);
        // Merging can change which node ends the chain; walk to re-derive.
        self.rederive_tail();
    }

    /// Walks the chain and points `tail` at the final node.
    fn rederive_tail(&mut self) {
        let mut tail: *mut Node = ptr::null_mut();
        let mut cur = self.head.as_deref_mut();
        while let Some(node) = cur {
            tail = &raw mut *node;
            cur = node.next.as_deref_mut();
        }
        self.tail = tail;
    }

    // --- Iteration ---

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    /// Payload heap addresses in chain order. Node identity probe for tests:
    /// structural operations must permute these, never mint or drop one.
    #[cfg(test)]
    fn value_ptrs(&self) -> Vec<*const u8> {
        self.iter().map(|value| value.as_ptr()).collect()
    }

    /// Checks every structural invariant by walking the chain.
    #[cfg(test)]
    fn assert_invariants(&self) {
        assert_eq!(self.len == 0, self.head.is_none());
        assert_eq!(self.len == 0, self.tail.is_null());
        let mut walked = 0usize;
        let mut last: *const Node = ptr::null();
        let mut cur = self.head.as_deref();
        while let Some(node) = cur {
            walked += 1;
            last = node;
            cur = node.next.as_deref();
        }
        assert_eq!(walked, self.len);
        assert_eq!(last, self.tail.cast_const());
    }
}

/// Splits the chain roughly in half and returns the back half.
///
/// Fast/slow walk: `fast` advances two nodes per step while `slow` advances
/// one; when `fast` exhausts the chain, `slow` is the last node of the front
/// half and the chain is cut after it. Returns `None` for chains of length
/// zero or one.
fn split(front: &mut Link) -> Link {
    let mut slow = match front.as_deref() {
        Some(node) => node,
        None => return None,
    };
    let mut fast = slow;
    let mut front_len = 1usize;
    while let Some(step) = fast.next.as_deref() {
        match step.next.as_deref() {
            Some(two) => {
                fast = two;
                if let Some(next) = slow.next.as_deref() {
                    slow = next;
                    front_len += 1;
                }
            }
            None => break,
        }
    }
    // Re-walk mutably to the split point and detach everything after it.
    let mut cur = front.as_deref_mut();
    while let Some(node) = cur {
        front_len -= 1;
        if front_len == 0 {
            return node.next.take();
        }
        cur = node.next.as_deref_mut();
    }
    None
}

/// Recursive merge sort over a detached chain.
fn merge_sort(mut chain: Link) -> Link {
    if chain.as_ref().is_none_or(|node| node.next.is_none()) {
        return chain;
    }
    let back = split(&mut chain);
    merge(merge_sort(chain), merge_sort(back))
}

/// Merges two sorted chains by re-linking, taking from `a` on ties so the
/// overall sort stays stable.
fn merge(mut a: Link, mut b: Link) -> Link {
    let mut merged: Link = None;
    let mut out = &mut merged;
    while let (Some(x), Some(y)) = (&a, &b) {
        let src = if x.value <= y.value { &mut a } else { &mut b };
        let Some(mut node) = src.take() else { break };
        *src = node.next.take();
        out = &mut out.insert(node).next;
    }
    *out = a.or(b);
    merged
}

// --- Iterators ---

pub struct Iter<'a> {
    next: Option<&'a Node>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            node.value.as_str()
        })
    }
}

pub struct IntoIter {
    queue: StrQueue,
}

impl Iterator for IntoIter {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        self.queue.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.queue.len();
        (len, Some(len))
    }
}

impl IntoIterator for StrQueue {
    type Item = String;
    type IntoIter = IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { queue: self }
    }
}

impl<'a> IntoIterator for &'a StrQueue {
    type Item = &'a str;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// --- Traits ---

impl Drop for StrQueue {
    fn drop(&mut self) {
        self.clear();
    }
}

impl Default for StrQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for StrQueue {
    fn clone(&self) -> Self {
        let mut queue = Self::new();
        for value in self {
            queue.push_back(value);
        }
        queue
    }
}

impl fmt::Debug for StrQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl PartialEq for StrQueue {
    fn eq(&self, other: &Self) -> bool {
        if self.len != other.len {
            return false;
        }
        self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl Eq for StrQueue {}

impl<S: AsRef<str>> Extend<S> for StrQueue {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for StrQueue {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

// --- Tests ---
