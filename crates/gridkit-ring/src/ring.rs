//! Fixed-capacity double-ended ring buffer.
//!
//! [`RingBuffer`] stores up to `capacity` values in a single allocation.
//! Both ends support O(1) push and pop with modulo-capacity wraparound.
//! The length is tracked alongside the head cursor, so a full buffer is
//! distinguishable from an empty one and pushes past capacity are caught
//! instead of overwriting live slots.

use crate::error::CapacityError;
use std::fmt;
use std::iter::FusedIterator;
use std::ops::{Index, IndexMut};

/// A double-ended queue with capacity fixed at construction.
///
/// Logical index `i` (0 = front) lives in slot `(head + i) % capacity`.
/// Popping does not shrink or reallocate the storage.
///
/// # Examples
///
/// ```
/// use gridkit_ring::RingBuffer;
///
/// let mut ring = RingBuffer::new(4);
/// ring.push_back(1);
/// ring.push_back(2);
/// ring.push_front(0);
/// assert_eq!(ring.len(), 3);
/// assert_eq!(ring.front(), Some(&0));
/// assert_eq!(ring.back(), Some(&2));
/// assert_eq!([ring[0], ring[1], ring[2]], [0, 1, 2]);
/// ```
#[derive(Clone)]
pub struct RingBuffer<T> {
    slots: Vec<T>,
    /// Slot index of the logical front.
    head: usize,
    len: usize,
}

impl<T: Default> RingBuffer<T> {
    /// Create an empty ring buffer holding at most `capacity` values.
    ///
    /// Every slot is initialised with `T::default()`.
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity >= 1, "RingBuffer capacity must be >= 1, got {capacity}");
        log::trace!("allocating ring buffer with capacity {capacity}");
        let slots = (0..capacity).map(|_| T::default()).collect();
        Self {
            slots,
            head: 0,
            len: 0,
        }
    }

    /// Remove and return the front value, or `None` if empty.
    pub fn pop_front(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        let value = std::mem::take(&mut self.slots[self.head]);
        self.head = self.wrap_add(self.head, 1);
        self.len -= 1;
        Some(value)
    }

    /// Remove and return the back value, or `None` if empty.
    pub fn pop_back(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        let slot = self.wrap_add(self.head, self.len);
        Some(std::mem::take(&mut self.slots[slot]))
    }
}

impl<T> RingBuffer<T> {
    /// Maximum number of values the buffer can hold.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of values currently held.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the buffer holds no values.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether a further push would be rejected.
    pub fn is_full(&self) -> bool {
        self.len == self.slots.len()
    }

    /// The front value, or `None` if empty.
    pub fn front(&self) -> Option<&T> {
        self.get(0)
    }

    /// Mutable front value, or `None` if empty.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.get_mut(0)
    }

    /// The back value, or `None` if empty.
    pub fn back(&self) -> Option<&T> {
        self.len.checked_sub(1).and_then(|i| self.get(i))
    }

    /// Mutable back value, or `None` if empty.
    pub fn back_mut(&mut self) -> Option<&mut T> {
        match self.len.checked_sub(1) {
            Some(i) => self.get_mut(i),
            None => None,
        }
    }

    /// The `i`-th value from the front, or `None` if `i >= len()`.
    pub fn get(&self, i: usize) -> Option<&T> {
        if i < self.len {
            Some(&self.slots[self.wrap_add(self.head, i)])
        } else {
            None
        }
    }

    /// Mutable `i`-th value from the front, or `None` if `i >= len()`.
    pub fn get_mut(&mut self, i: usize) -> Option<&mut T> {
        if i < self.len {
            let slot = self.wrap_add(self.head, i);
            Some(&mut self.slots[slot])
        } else {
            None
        }
    }

    /// Insert at the back, or hand the value back if the buffer is full.
    pub fn try_push_back(&mut self, value: T) -> Result<(), CapacityError<T>> {
        if self.is_full() {
            return Err(CapacityError(value));
        }
        let slot = self.wrap_add(self.head, self.len);
        self.slots[slot] = value;
        self.len += 1;
        Ok(())
    }

    /// Insert at the front, or hand the value back if the buffer is full.
    pub fn try_push_front(&mut self, value: T) -> Result<(), CapacityError<T>> {
        if self.is_full() {
            return Err(CapacityError(value));
        }
        self.head = self.wrap_sub(self.head, 1);
        self.slots[self.head] = value;
        self.len += 1;
        Ok(())
    }

    /// Insert at the back.
    ///
    /// # Panics
    ///
    /// Panics if the buffer is full.
    #[track_caller]
    pub fn push_back(&mut self, value: T) {
        if self.try_push_back(value).is_err() {
            panic!("RingBuffer overflow: capacity {} exhausted", self.capacity());
        }
    }

    /// Insert at the front.
    ///
    /// # Panics
    ///
    /// Panics if the buffer is full.
    #[track_caller]
    pub fn push_front(&mut self, value: T) {
        if self.try_push_front(value).is_err() {
            panic!("RingBuffer overflow: capacity {} exhausted", self.capacity());
        }
    }

    /// Forget all values. Capacity is unchanged; slots are not cleared.
    pub fn clear(&mut self) {
        self.head = 0;
        self.len = 0;
    }

    /// The held values as two contiguous slices, front part first.
    ///
    /// The second slice is empty unless the contents wrap past the end
    /// of the storage.
    pub fn as_slices(&self) -> (&[T], &[T]) {
        let cap = self.slots.len();
        if self.head + self.len <= cap {
            (&self.slots[self.head..self.head + self.len], &[])
        } else {
            let tail = self.head + self.len - cap;
            (&self.slots[self.head..], &self.slots[..tail])
        }
    }

    /// Iterate front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            ring: self,
            front: 0,
            back: self.len,
        }
    }

    /// `(slot + n) % capacity` for `n <= capacity`.
    #[inline]
    fn wrap_add(&self, slot: usize, n: usize) -> usize {
        let cap = self.slots.len();
        let j = slot + n;
        if j >= cap {
            j - cap
        } else {
            j
        }
    }

    /// `(slot - n) mod capacity` for `n <= capacity`.
    #[inline]
    fn wrap_sub(&self, slot: usize, n: usize) -> usize {
        if slot >= n {
            slot - n
        } else {
            slot + self.slots.len() - n
        }
    }
}

impl<T> Index<usize> for RingBuffer<T> {
    type Output = T;

    #[track_caller]
    fn index(&self, i: usize) -> &T {
        match self.get(i) {
            Some(v) => v,
            None => panic!("RingBuffer index {i} out of range for length {}", self.len),
        }
    }
}

impl<T> IndexMut<usize> for RingBuffer<T> {
    #[track_caller]
    fn index_mut(&mut self, i: usize) -> &mut T {
        let len = self.len;
        match self.get_mut(i) {
            Some(v) => v,
            None => panic!("RingBuffer index {i} out of range for length {len}"),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for RingBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Extend<T> for RingBuffer<T> {
    /// Push each value at the back. Panics on overflow, like
    /// [`push_back`](RingBuffer::push_back).
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a RingBuffer<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

/// Front-to-back iterator over a [`RingBuffer`].
///
/// Created by [`RingBuffer::iter`].
pub struct Iter<'a, T> {
    ring: &'a RingBuffer<T>,
    front: usize,
    back: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.front == self.back {
            return None;
        }
        let item = self.ring.get(self.front);
        self.front += 1;
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.back - self.front;
        (n, Some(n))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        self.ring.get(self.back)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}
