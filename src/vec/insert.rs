// This file is part of fixed-seq.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::FixedSeq};

// Core imports
use core::ptr;

impl<T, const N: usize> FixedSeq<T, N> {
    /// Inserts `value` at `index`, shifting `[index..len)` one slot to the right.
    ///
    /// - Returns [`Error::IndexOutOfRange`] if `index > len`.
    /// - Returns [`Error::CapacityExceeded`] if the sequence is full.
    ///
    /// On error the sequence is unchanged and `value` is dropped.
    #[inline]
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), Error> {
        self.insert_with(index, || value)
    }

    /// Shared shifting path for `insert`, `push_front` and the `emplace` family.
    ///
    /// `make` only runs once both checks have passed, and before any element
    /// moves, so a panic inside it leaves the sequence untouched.
    pub(crate) fn insert_with<F>(&mut self, index: usize, make: F) -> Result<(), Error>
    where
        F: FnOnce() -> T,
    {
        let len = self.len;
        if index > len {
            return Err(Error::IndexOutOfRange { index, len });
        }
        if len == N {
            return Err(Error::CapacityExceeded { capacity: N });
        }
        let value = make();

        let base = self.buf.as_mut_ptr();
        // SAFETY: `index <= len < N`, so both the source `[index..len)` and the
        // destination `[index+1..len+1)` lie inside `buf`. `ptr::copy` handles the
        // overlap, and slot `index` is overwritten without dropping its stale bits.
        unsafe {
            ptr::copy(base.add(index), base.add(index + 1), len - index);
            (*base.add(index)).write(value);
        }

        self.len = len + 1;
        Ok(())
    }
}
