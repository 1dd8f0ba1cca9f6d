// This file is part of fixed-seq.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Equality, ordering and hashing for [`FixedSeq`](crate::FixedSeq).
//!
//! Which comparisons exist is decided by the element type's capabilities, at
//! compile time:
//!
//! - **Semantic equality** (`==`) is available whenever `T: PartialEq<U>`. It
//!   compares lengths first, then elements pairwise in order. Capacities never
//!   take part, so `FixedSeq<T, 4>` compares with `FixedSeq<T, 9>`, slices and
//!   arrays alike.
//! - **Bytewise equality** ([`bytes_eq`](FixedSeq::bytes_eq),
//!   [`bytes_eq_slice`](FixedSeq::bytes_eq_slice)) is available whenever
//!   `T: bytemuck::NoUninit`, i.e. the type has no padding and no
//!   uninitialized bytes. It needs no `PartialEq` and compares the raw memory of
//!   each live element. It is only meaningful for plain-data types whose
//!   identity is their bytes; it is not a general substitute for `==`
//!   (floats compare `-0.0 != 0.0` and equal NaN payloads compare equal).
//!
//! Element types with neither capability still build; they just have no
//! equality at all.

// Crate imports
use crate::vec::FixedSeq;

// Core imports
use core::{
    cmp::Ordering,
    hash::{Hash, Hasher},
    mem,
};

// External imports - bytemuck
use bytemuck::NoUninit;

impl<T, U, const N: usize, const M: usize> PartialEq<FixedSeq<U, M>> for FixedSeq<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &FixedSeq<U, M>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T, U, const N: usize> PartialEq<[U]> for FixedSeq<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U]) -> bool {
        self.as_slice() == other
    }
}

impl<T, U, const N: usize> PartialEq<&[U]> for FixedSeq<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &&[U]) -> bool {
        self.as_slice() == *other
    }
}

impl<T, U, const N: usize, const M: usize> PartialEq<[U; M]> for FixedSeq<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U; M]) -> bool {
        self.as_slice() == other
    }
}

impl<T, U, const N: usize, const M: usize> PartialEq<&[U; M]> for FixedSeq<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &&[U; M]) -> bool {
        self.as_slice() == *other
    }
}

impl<T, U, const N: usize> PartialEq<FixedSeq<U, N>> for [T]
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &FixedSeq<U, N>) -> bool {
        self == other.as_slice()
    }
}

impl<T, U, const N: usize, const M: usize> PartialEq<FixedSeq<U, N>> for [T; M]
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &FixedSeq<U, N>) -> bool {
        self[..] == *other.as_slice()
    }
}

impl<T: Eq, const N: usize> Eq for FixedSeq<T, N> {}

impl<T: PartialOrd, const N: usize> PartialOrd for FixedSeq<T, N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}
impl<T: Ord, const N: usize> Ord for FixedSeq<T, N> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}
impl<T: Hash, const N: usize> Hash for FixedSeq<T, N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl<T: NoUninit, const N: usize> FixedSeq<T, N> {
    /// Bytewise equality against a sequence of any capacity.
    ///
    /// True iff both lengths match and every live element has the same byte
    /// representation as its counterpart.
    #[inline]
    pub fn bytes_eq<const M: usize>(&self, other: &FixedSeq<T, M>) -> bool {
        self.bytes_eq_slice(other.as_slice())
    }

    /// Bytewise equality against a literal sequence.
    pub fn bytes_eq_slice(&self, other: &[T]) -> bool {
        if self.len != other.len() {
            return false;
        }
        // Zero-sized elements carry no bytes; equal lengths are enough.
        if mem::size_of::<T>() == 0 {
            return true;
        }
        bytemuck::cast_slice::<T, u8>(self.as_slice()) == bytemuck::cast_slice::<T, u8>(other)
    }
}
