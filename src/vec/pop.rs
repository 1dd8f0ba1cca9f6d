// This file is part of fixed-seq.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::FixedSeq;

impl<T, const N: usize> FixedSeq<T, N> {
    /// Removes and returns the last element, or `None` if empty.
    #[inline]
    pub fn pop_back(&mut self) -> Option<T> {
        if self.len == 0 {
            None
        } else {
            self.len -= 1;
            // SAFETY: Before decrementing, `buf[..old_len]` was initialized, so
            // `buf[self.len]` (the old last slot) holds a `T`. It is now outside
            // the live prefix, so reading it out does not duplicate ownership.
            Some(unsafe { self.buf[self.len].assume_init_read() })
        }
    }

    /// Removes and returns the first element, shifting the rest left by one.
    ///
    /// `O(len)`. Returns `None` if empty.
    #[inline]
    pub fn pop_front(&mut self) -> Option<T> {
        self.remove(0)
    }
}
