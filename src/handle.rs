//! Optional-handle surface for harness-style callers.
//!
//! Mirrors the convention of drivers that treat an absent queue as a valid
//! argument: every operation takes `Option<&mut StrQueue>` (or `Option<&...>`)
//! and states its absent-case behavior up front, instead of relying on
//! implicit null tolerance. Mutating operations report `false` rather than
//! panicking; queries degrade to a neutral value.
//!
//! Destruction needs no function here: dropping the queue (or an
//! `Option<StrQueue>` that is `None`, the absent-destroy no-op) releases
//! every node and payload.

use crate::StrQueue;

/// Creates an empty queue.
///
/// Infallible: the queue header allocates nothing, and node allocation is
/// handled by the global allocator at insertion time.
pub fn create() -> StrQueue {
    StrQueue::new()
}

/// Inserts a copy of `value` at the head. Returns `false` iff `queue` is
/// absent.
pub fn insert_head(queue: Option<&mut StrQueue>, value: &str) -> bool {
    match queue {
        Some(q) => {
            q.push_front(value);
            true
        }
        None => false,
    }
}

/// Inserts a copy of `value` at the tail in O(1). Returns `false` iff
/// `queue` is absent.
pub fn insert_tail(queue: Option<&mut StrQueue>, value: &str) -> bool {
    match queue {
        Some(q) => {
            q.push_back(value);
            true
        }
        None => false,
    }
}

/// Removes the head element, optionally copying it into `out`.
///
/// Returns `false` with no mutation if `queue` is absent or empty. On
/// success, when a buffer is supplied, at most `out.len() - 1` bytes of the
/// removed value are copied and a NUL terminator is always written, so the
/// buffer holds a terminated (possibly truncated) copy; when `out` is
/// `None` the value is discarded.
///
/// Contract: a supplied buffer must have room for at least the terminator.
/// Passing an empty buffer is a caller error; nothing is written to it.
pub fn remove_head(queue: Option<&mut StrQueue>, out: Option<&mut [u8]>) -> bool {
    let Some(q) = queue else {
        return false;
    };
    let Some(value) = q.pop_front() else {
        return false;
    };
    if let Some(buf) = out {
        debug_assert!(!buf.is_empty(), "output buffer must fit the terminator");
        if !buf.is_empty() {
            let copy = value.len().min(buf.len() - 1);
            buf[..copy].copy_from_slice(&value.as_bytes()[..copy]);
            buf[copy] = 0;
        }
    }
    true
}

/// Number of stored elements, or 0 if `queue` is absent. O(1), pure.
pub fn size(queue: Option<&StrQueue>) -> usize {
    queue.map_or(0, StrQueue::len)
}

/// Reverses the queue in place. Silent no-op if `queue` is absent or empty.
pub fn reverse(queue: Option<&mut StrQueue>) {
    if let Some(q) = queue {
        q.reverse();
    }
}

/// Sorts the queue ascending. Silent no-op if `queue` is absent, empty, or
/// holds a single element.
pub fn sort(queue: Option<&mut StrQueue>) {
    if let Some(q) = queue {
        q.sort();
    }
}

// --- Tests ---
