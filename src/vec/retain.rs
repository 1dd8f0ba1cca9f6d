// This file is part of fixed-seq.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate import
use crate::vec::FixedSeq;

impl<T, const N: usize> FixedSeq<T, N> {
    /// Retains only the elements specified by the predicate `f`, preserving order.
    ///
    /// The predicate is applied to each element in iteration order.
    pub fn retain<F: FnMut(&T) -> bool>(&mut self, mut f: F) {
        let mut write = 0;
        for read in 0..self.len {
            if f(&self.as_slice()[read]) {
                if write != read {
                    // Rejected elements drift towards the tail, kept ones keep their order.
                    self.as_mut_slice().swap(write, read);
                }
                write += 1;
            }
        }
        self.truncate(write);
    }
}
