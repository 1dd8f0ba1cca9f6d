// This file is part of fixed-seq.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::FixedSeq;

// Core imports
use core::mem::MaybeUninit;

impl<T, const N: usize> FixedSeq<T, N> {
    /// Constructs an empty sequence.
    ///
    /// The backing buffer is left uninitialized; no `T` is constructed.
    #[inline]
    pub const fn new() -> Self {
        Self {
            buf: [const { MaybeUninit::uninit() }; N],
            len: 0,
        }
    }
}

impl<T, const N: usize> Default for FixedSeq<T, N> {
    fn default() -> Self {
        Self::new()
    }
}
