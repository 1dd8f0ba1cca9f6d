// This file is part of fixed-seq.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Indexing support for [`FixedSeq`](crate::FixedSeq).
//!
//! This module provides `Index` and `IndexMut` impls that mirror slice behavior:
//! - panics on out-of-bounds, naming the index and the logical length;
//! - supports all standard range forms, including inclusive ranges;
//! - views are restricted to the initialized prefix `[0..len)`.

// Crate imports
use crate::{error::Error, vec::FixedSeq};

// Core imports
use core::ops::{
    Index, IndexMut, Range, RangeFrom, RangeFull, RangeInclusive, RangeTo, RangeToInclusive,
};

impl<T, const N: usize> Index<usize> for FixedSeq<T, N> {
    type Output = T;
    #[track_caller]
    fn index(&self, i: usize) -> &Self::Output {
        match self.get(i) {
            Some(x) => x,
            None => out_of_range(i, self.len),
        }
    }
}

impl<T, const N: usize> IndexMut<usize> for FixedSeq<T, N> {
    #[track_caller]
    fn index_mut(&mut self, i: usize) -> &mut Self::Output {
        let len = self.len;
        match self.get_mut(i) {
            Some(x) => x,
            None => out_of_range(i, len),
        }
    }
}

#[cold]
#[track_caller]
fn out_of_range(index: usize, len: usize) -> ! {
    panic!("{}", Error::IndexOutOfRange { index, len })
}

// Range forms delegate to the live slice, so they panic exactly like slice ranges.
macro_rules! impl_range_index {
    ($($range:ty),+ $(,)?) => {$(
        impl<T, const N: usize> Index<$range> for FixedSeq<T, N> {
            type Output = [T];
            #[track_caller]
            fn index(&self, r: $range) -> &[T] {
                &self.as_slice()[r]
            }
        }

        impl<T, const N: usize> IndexMut<$range> for FixedSeq<T, N> {
            #[track_caller]
            fn index_mut(&mut self, r: $range) -> &mut [T] {
                &mut self.as_mut_slice()[r]
            }
        }
    )+};
}

impl_range_index!(
    Range<usize>,
    RangeFrom<usize>,
    RangeTo<usize>,
    RangeToInclusive<usize>,
    RangeInclusive<usize>,
    RangeFull,
);
