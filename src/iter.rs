// This file is part of fixed-seq.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Iterator support for [`FixedSeq`](crate::FixedSeq).
//!
//! - `IntoIter<T, N>` yields by value and supports `DoubleEndedIterator`,
//!   `ExactSizeIterator`, and `FusedIterator`. Elements it never yields are
//!   dropped with it.
//! - `&FixedSeq` and `&mut FixedSeq` iterate as slices.
//!
//! Random-access cursors live in [`cursor`](crate::cursor).

// Crate imports
use crate::vec::FixedSeq;

// Core imports
use core::{fmt, iter::FusedIterator, ptr};

/// Owned iterator returned by `FixedSeq::into_iter()`.
///
/// Holds the sequence with its length zeroed, so the sequence's own `Drop`
/// releases nothing; the live window is `[front, back)`.
pub struct IntoIter<T, const N: usize> {
    pub(crate) v: FixedSeq<T, N>,
    pub(crate) front: usize,
    pub(crate) back: usize, // exclusive
}

impl<T, const N: usize> IntoIter<T, N> {
    /// Returns the elements not yet yielded.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: `buf[front..back]` are the initialized elements not yet moved out.
        unsafe {
            core::slice::from_raw_parts(
                self.v.buf.as_ptr().add(self.front).cast::<T>(),
                self.back - self.front,
            )
        }
    }
}

impl<T, const N: usize> Iterator for IntoIter<T, N> {
    type Item = T;
    fn next(&mut self) -> Option<T> {
        if self.front < self.back {
            let i = self.front;
            self.front += 1;
            // SAFETY: `i` was inside the unyielded window, which holds initialized
            // values; advancing `front` first means it is never read again.
            Some(unsafe { self.v.buf[i].assume_init_read() })
        } else {
            None
        }
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let rem = self.back - self.front;
        (rem, Some(rem))
    }
}

impl<T, const N: usize> DoubleEndedIterator for IntoIter<T, N> {
    fn next_back(&mut self) -> Option<T> {
        if self.front < self.back {
            self.back -= 1;
            // SAFETY: same window argument as `next`, from the other end.
            Some(unsafe { self.v.buf[self.back].assume_init_read() })
        } else {
            None
        }
    }
}
impl<T, const N: usize> FusedIterator for IntoIter<T, N> {}
impl<T, const N: usize> ExactSizeIterator for IntoIter<T, N> {}

impl<T, const N: usize> Drop for IntoIter<T, N> {
    fn drop(&mut self) {
        let remaining = ptr::slice_from_raw_parts_mut(
            // SAFETY: `front <= back <= N`, so the offset stays inside `buf`.
            unsafe { self.v.buf.as_mut_ptr().add(self.front).cast::<T>() },
            self.back - self.front,
        );
        self.front = self.back;
        // SAFETY: the window held initialized, unyielded elements and is now empty.
        unsafe { ptr::drop_in_place(remaining) };
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for IntoIter<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a FixedSeq<T, N> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}
impl<'a, T, const N: usize> IntoIterator for &'a mut FixedSeq<T, N> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}
impl<T, const N: usize> IntoIterator for FixedSeq<T, N> {
    type Item = T;
    type IntoIter = IntoIter<T, N>;
    fn into_iter(mut self) -> Self::IntoIter {
        let back = self.len;
        // Ownership of `buf[..back]` moves to the iterator.
        self.len = 0;
        IntoIter {
            v: self,
            front: 0,
            back,
        }
    }
}
