// This file is part of fixed-seq.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::FixedSeq};

// Core imports
use core::ptr;

impl<T, const N: usize> FixedSeq<T, N> {
    /// Removes and returns the element at `index`, shifting `(index..len)` left by one.
    ///
    /// Returns `None` if `index >= len`.
    #[inline]
    pub fn remove(&mut self, index: usize) -> Option<T> {
        let len = self.len;
        if index >= len {
            return None;
        }

        // SAFETY: `index < len`, so `buf[index]` is initialized. After the read the
        // slot is treated as a hole and immediately covered by the left shift of
        // `[index+1..len)`, which stays inside `buf`. `len` shrinks right after,
        // so the duplicated last slot falls outside the live prefix.
        let out = unsafe {
            let out = self.buf[index].assume_init_read();
            let base = self.buf.as_mut_ptr();
            ptr::copy(base.add(index + 1), base.add(index), len - index - 1);
            out
        };

        self.len = len - 1;
        Some(out)
    }

    /// Removes the element at `index` and drops it, shifting the tail left.
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index >= len`.
    #[inline]
    pub fn erase(&mut self, index: usize) -> Result<(), Error> {
        let len = self.len;
        self.remove(index)
            .map(drop)
            .ok_or(Error::IndexOutOfRange { index, len })
    }

    /// Removes and returns the element at `index` by moving the last element into its slot.
    ///
    /// `O(1)`, does not preserve order. Returns `None` when `index >= len`.
    #[inline]
    pub fn swap_remove(&mut self, index: usize) -> Option<T> {
        if index >= self.len {
            return None;
        }
        self.len -= 1;
        let last = self.len;

        // SAFETY: Before the decrement `index < old_len`, so `buf[index]` holds a `T`.
        // If it is not the last slot, the old last element (still initialized) is
        // moved bitwise into the hole; slot `last` is now outside the live prefix.
        unsafe {
            let out = self.buf[index].assume_init_read();
            if index != last {
                let base = self.buf.as_mut_ptr();
                ptr::copy_nonoverlapping(base.add(last), base.add(index), 1);
            }
            Some(out)
        }
    }
}
