// This file is part of fixed-seq.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Copy and literal assignment.
//!
//! Copy construction and copy assignment are [`Clone::clone`] and
//! [`Clone::clone_from`]; move construction and move assignment are plain
//! Rust moves, after which the source is statically unusable. Use
//! [`FixedSeq::take`] when an explicitly emptied source is wanted instead.

// Crate imports
use crate::{error::Error, vec::FixedSeq};

impl<T: Clone, const N: usize> Clone for FixedSeq<T, N> {
    fn clone(&self) -> Self {
        let mut out = Self::new();
        out.overwrite_from_slice(self.as_slice());
        out
    }

    fn clone_from(&mut self, source: &Self) {
        self.overwrite_from_slice(source.as_slice());
    }
}

impl<T: Clone, const N: usize> FixedSeq<T, N> {
    /// Replaces the contents with clones of `src`.
    ///
    /// Returns [`Error::CapacityExceeded`] and leaves `self` unchanged if
    /// `src.len() > N`.
    #[inline]
    pub fn assign_from_slice(&mut self, src: &[T]) -> Result<(), Error> {
        if src.len() > N {
            return Err(Error::CapacityExceeded { capacity: N });
        }
        self.overwrite_from_slice(src);
        Ok(())
    }

    /// Reuses the overlapping prefix via `clone_from` and clones the rest in.
    ///
    /// Caller guarantees `src.len() <= N`.
    fn overwrite_from_slice(&mut self, src: &[T]) {
        debug_assert!(src.len() <= N);
        self.truncate(src.len());
        let (init, tail) = src.split_at(self.len);
        self.as_mut_slice().clone_from_slice(init);
        for item in tail {
            self.buf[self.len].write(item.clone());
            self.len += 1;
        }
    }
}

impl<T, const N: usize> FixedSeq<T, N> {
    /// Replaces the contents with the items of `iter`, all-or-nothing.
    ///
    /// Returns [`Error::CapacityExceeded`] and leaves `self` unchanged if the
    /// iterator yields more than `N` items.
    #[inline]
    pub fn assign_from_iter<I: IntoIterator<Item = T>>(&mut self, iter: I) -> Result<(), Error> {
        *self = Self::try_from_iter(iter)?;
        Ok(())
    }
}
