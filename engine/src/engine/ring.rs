// src/engine/ring.rs
#![forbid(unsafe_code)]

use log::debug;
use thiserror::Error;

use crate::engine::constants::QUEUE_CAPACITY;
use crate::engine::pieces::Piece;

/// Returned by `RingQueue::enqueue` when every slot is occupied.
///
/// Carries the rejected value back so the caller keeps ownership of it.
#[derive(Clone, Copy, Debug, Error, Eq, PartialEq)]
#[error("queue is full (capacity {capacity})")]
pub struct QueueFull<T> {
    pub value: T,
    pub capacity: usize,
}

impl<T> QueueFull<T> {
    pub fn into_inner(self) -> T {
        self.value
    }
}

/**
 * Fixed-capacity FIFO over an owned array.
 *
 * Layout:
 * - `head` is the raw slot of the front element, always `< N`.
 * - `len` occupied slots are `(head + i) % N` for `i in 0..len`, front to back.
 * - Vacated slots keep their old value until the next enqueue overwrites them.
 *
 * Full and empty are routine outcomes (`Err(QueueFull)` / `None`), never panics.
 */
#[derive(Clone, Debug)]
pub struct RingQueue<T, const N: usize> {
    buf: [T; N],
    head: usize,
    len: usize,
}

/// The upcoming-piece queue used by sessions.
pub type PieceQueue = RingQueue<Piece, QUEUE_CAPACITY>;

impl<T: Copy + Default, const N: usize> Default for RingQueue<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Copy + Default, const N: usize> RingQueue<T, N> {
    /// Evaluated per monomorphization; a zero capacity fails the build.
    const NON_ZERO_CAPACITY: () = assert!(N > 0, "ring capacity must be non-zero");

    pub fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::NON_ZERO_CAPACITY;
        Self {
            buf: [T::default(); N],
            head: 0,
            len: 0,
        }
    }
}

impl<T: Copy, const N: usize> RingQueue<T, N> {
    #[inline]
    pub fn capacity(&self) -> usize {
        N
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == N
    }

    /// Raw buffer offset of the front slot. Diagnostics only.
    #[inline]
    pub fn head(&self) -> usize {
        self.head
    }

    pub fn enqueue(&mut self, value: T) -> Result<(), QueueFull<T>> {
        if self.is_full() {
            debug!("enqueue rejected: ring full (capacity {})", N);
            return Err(QueueFull { value, capacity: N });
        }
        let pos = (self.head + self.len) % N;
        self.buf[pos] = value;
        self.len += 1;
        Ok(())
    }

    pub fn dequeue(&mut self) -> Option<T> {
        if self.is_empty() {
            debug!("dequeue on empty ring");
            return None;
        }
        let out = self.buf[self.head];
        self.head = (self.head + 1) % N;
        self.len -= 1;
        Some(out)
    }

    pub fn front(&self) -> Option<&T> {
        self.get(0)
    }

    /// Element at logical position `i` (0 = front).
    pub fn get(&self, i: usize) -> Option<&T> {
        if i < self.len {
            Some(&self.buf[(self.head + i) % N])
        } else {
            None
        }
    }

    /// Front-to-back iteration, independent of the raw buffer offset.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &T> + '_ {
        (0..self.len).map(move |i| &self.buf[(self.head + i) % N])
    }
}
