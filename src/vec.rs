// This file is part of fixed-seq.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `FixedSeq` type and its inherent API.
//!
//! `FixedSeq<T, N>` is a fixed-capacity sequence that stores its elements inline
//! in a `[MaybeUninit<T>; N]` buffer and tracks a logical length. Methods mirror
//! `Vec`/`VecDeque` semantics where they make sense, with explicit capacity and
//! bounds checks and fallible variants where an operation can overflow.
//!
//! No heap allocations are performed.

mod assign;
mod emplace;
mod extend;
mod from;
mod insert;
mod new;
mod pop;
mod push;
mod remove;
mod retain;
mod slice;
mod try_from;

// Crate imports
use crate::error::Error;

// Core imports
use core::{
    borrow::{Borrow, BorrowMut},
    mem::MaybeUninit,
    ops::{Deref, DerefMut},
    ptr,
};

/// A fixed-capacity sequence stored inline, with a logical length `len ∈ 0..=N`.
///
/// # Layout and invariants
///
/// - The backing buffer is `[MaybeUninit<T>; N]`, owned inline (typically on
///   the stack). It never grows and is never reallocated.
/// - `0 <= len <= N` always holds.
/// - Slots `buf[..len]` hold initialized, live elements in insertion order.
/// - Slots `buf[len..]` are logically uninitialized and are never read.
///
/// Every public method maintains these invariants, including when it returns
/// an error: a failed operation leaves the sequence unchanged.
///
/// # Complexity
///
/// | Operation                                   | Cost          |
/// |---------------------------------------------|---------------|
/// | [`push_back`], [`pop_back`], indexing       | `O(1)`        |
/// | [`push_front`], [`pop_front`]               | `O(len)`      |
/// | [`insert`], [`erase`], [`remove`] at `i`    | `O(len - i)`  |
///
/// Moving a `FixedSeq` moves the whole `N`-slot buffer, so prefer passing it by
/// reference in hot code.
///
/// # Element bounds
///
/// `FixedSeq<T, N>` places no bounds on `T`. Element capabilities only unlock
/// extra API:
///
/// - `T: PartialEq` enables `==` against sequences of any capacity, slices and
///   arrays.
/// - `T: bytemuck::NoUninit` enables [`bytes_eq`](FixedSeq::bytes_eq), a
///   byte-for-byte comparison for element types without `PartialEq`.
/// - `T: Display` enables `{}` formatting as `{1, 2, 3}`.
/// - `T: Clone` enables [`Clone`] and slice-based construction.
///
/// # Examples
///
/// ```rust
/// use fixed_seq::FixedSeq;
///
/// let mut seq: FixedSeq<i32, 5> = FixedSeq::from([1, 2, 4, 5]);
/// seq.insert(2, 3).unwrap();
/// assert_eq!(seq, [1, 2, 3, 4, 5]);
///
/// assert!(seq.push_back(6).is_err());
/// assert_eq!(seq.pop_front(), Some(1));
/// assert_eq!(seq.to_string(), "{2, 3, 4, 5}");
/// ```
///
/// [`push_back`]: FixedSeq::push_back
/// [`pop_back`]: FixedSeq::pop_back
/// [`push_front`]: FixedSeq::push_front
/// [`pop_front`]: FixedSeq::pop_front
/// [`insert`]: FixedSeq::insert
/// [`erase`]: FixedSeq::erase
/// [`remove`]: FixedSeq::remove
pub struct FixedSeq<T, const N: usize> {
    pub(crate) buf: [MaybeUninit<T>; N],
    pub(crate) len: usize,
}

impl<T, const N: usize> FixedSeq<T, N> {
    /// The fixed capacity of this sequence.
    pub const CAPACITY: usize = N;

    /// Returns the capacity of this sequence (always `N`).
    #[inline]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Returns the current logical length (`0..=N`).
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if `len == 0`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if `len == N`.
    #[inline]
    pub const fn is_full(&self) -> bool {
        self.len == N
    }

    /// Returns `N - len`, the number of additional elements that fit.
    #[inline]
    pub const fn spare_capacity(&self) -> usize {
        N - self.len
    }

    /// Returns `Some(&T)` if `index < len`, otherwise `None`.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    /// Returns `Some(&mut T)` if `index < len`, otherwise `None`.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }

    /// Checked access reporting the offending index and the logical length.
    #[inline]
    pub fn try_get(&self, index: usize) -> Result<&T, Error> {
        let len = self.len;
        self.get(index).ok_or(Error::IndexOutOfRange { index, len })
    }

    /// Mutable variant of [`try_get`](FixedSeq::try_get).
    #[inline]
    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut T, Error> {
        let len = self.len;
        self.get_mut(index).ok_or(Error::IndexOutOfRange { index, len })
    }

    /// Returns a reference to the element at `index` without a bounds check.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`len`](FixedSeq::len). Debug builds assert it.
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < self.len, "index {index} out of range for length {}", self.len);
        // SAFETY: the caller guarantees `index < len`, and `buf[..len]` is initialized.
        unsafe { self.buf.get_unchecked(index).assume_init_ref() }
    }

    /// Returns a mutable reference to the element at `index` without a bounds check.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`len`](FixedSeq::len). Debug builds assert it.
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.len, "index {index} out of range for length {}", self.len);
        // SAFETY: the caller guarantees `index < len`, and `buf[..len]` is initialized.
        unsafe { self.buf.get_unchecked_mut(index).assume_init_mut() }
    }

    /// Returns the first element, if any.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.as_slice().first()
    }

    /// Returns the last element, if any.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.as_slice().last()
    }

    /// Returns the first element mutably, if any.
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().first_mut()
    }

    /// Returns the last element mutably, if any.
    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().last_mut()
    }

    // iterators
    /// Shorthand for `self.as_slice().iter()`.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Shorthand for `self.as_mut_slice().iter_mut()`.
    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Shortens the sequence to `new_len`, dropping the removed elements.
    ///
    /// No-op when `new_len >= len`.
    pub fn truncate(&mut self, new_len: usize) {
        let old_len = self.len;
        if new_len >= old_len {
            return;
        }
        // Shrink first so a panicking destructor cannot cause a double drop.
        self.len = new_len;
        // SAFETY: `buf[new_len..old_len]` was part of the initialized prefix and
        // is no longer reachable now that `len == new_len`.
        unsafe {
            let tail = ptr::slice_from_raw_parts_mut(
                self.buf.as_mut_ptr().add(new_len).cast::<T>(),
                old_len - new_len,
            );
            ptr::drop_in_place(tail);
        }
    }

    /// Drops every element and sets `len = 0`.
    #[inline]
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Replaces `self` with an empty sequence and returns the old contents.
    ///
    /// This is the explicit "moved-from is empty" alternative to a plain move.
    #[inline]
    #[must_use]
    pub fn take(&mut self) -> Self {
        core::mem::replace(self, Self::new())
    }

    /// Returns `true` if the sequence contains `x` (linear search on the live prefix).
    #[inline]
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq,
    {
        self.as_slice().contains(x)
    }
}

impl<T, const N: usize> Drop for FixedSeq<T, N> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T, const N: usize> Deref for FixedSeq<T, N> {
    type Target = [T];
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}
impl<T, const N: usize> DerefMut for FixedSeq<T, N> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T, const N: usize> AsRef<[T]> for FixedSeq<T, N> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T, const N: usize> AsMut<[T]> for FixedSeq<T, N> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

// Borrow ergonomics (treat as a slice)
impl<T, const N: usize> Borrow<[T]> for FixedSeq<T, N> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T, const N: usize> BorrowMut<[T]> for FixedSeq<T, N> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use super::FixedSeq;
    use crate::Error;
    use alloc::rc::Rc;
    use alloc::string::{String, ToString};
    use core::cell::Cell;

    /// Counts how many times it has been dropped.
    #[derive(Debug)]
    struct DropCounter(Rc<Cell<usize>>);

    impl Drop for DropCounter {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn test_default_and_capacity() {
        let v: FixedSeq<i32, 4> = FixedSeq::default();
        assert_eq!(v.len(), 0);
        assert_eq!(v.capacity(), 4);
        assert!(v.is_empty());
        assert!(!v.is_full());
        assert_eq!(v.spare_capacity(), 4);
        assert_eq!(FixedSeq::<i32, 4>::CAPACITY, 4);
    }

    #[test]
    fn test_from_literal_keeps_order_and_size() {
        let v: FixedSeq<i32, 10> = FixedSeq::from([1, 2, 3]);
        assert_eq!(v.len(), 3);
        assert_eq!(v.capacity(), 10);
        assert_eq!(v[0], 1);
        assert_eq!(v[1], 2);
        assert_eq!(v[2], 3);
    }

    #[test]
    fn test_getters() {
        let mut v: FixedSeq<i32, 4> = FixedSeq::from([7, 8, 9]);
        assert!(v.contains(&7));
        assert!(!v.contains(&10));
        assert_eq!(v.front(), Some(&7));
        assert_eq!(v.back(), Some(&9));
        assert_eq!(v.get(1), Some(&8));
        assert_eq!(v.get(3), None);
        *v.get_mut(1).unwrap() = 80;
        *v.front_mut().unwrap() = 70;
        *v.back_mut().unwrap() = 90;
        assert_eq!(v.as_slice(), &[70, 80, 90]);
    }

    #[test]
    fn test_front_back_on_empty() {
        let mut v: FixedSeq<i32, 2> = FixedSeq::new();
        assert_eq!(v.front(), None);
        assert_eq!(v.back(), None);
        assert_eq!(v.front_mut(), None);
        assert_eq!(v.back_mut(), None);
    }

    #[test]
    fn test_try_get_reports_index_and_len() {
        let mut v: FixedSeq<i32, 8> = FixedSeq::from([1, 2, 3]);
        assert_eq!(v.try_get(2), Ok(&3));
        // Bounded by the logical size, not the capacity.
        assert_eq!(
            v.try_get(3),
            Err(Error::IndexOutOfRange { index: 3, len: 3 })
        );
        assert_eq!(
            v.try_get_mut(7),
            Err(Error::IndexOutOfRange { index: 7, len: 3 })
        );
        *v.try_get_mut(0).unwrap() = 10;
        assert_eq!(v.as_slice(), &[10, 2, 3]);
    }

    #[test]
    fn test_get_unchecked_reads_live_prefix() {
        let mut v: FixedSeq<u8, 4> = FixedSeq::from([1, 2]);
        // SAFETY: both indices are < len.
        unsafe {
            assert_eq!(*v.get_unchecked(1), 2);
            *v.get_unchecked_mut(0) = 5;
        }
        assert_eq!(v.as_slice(), &[5, 2]);
    }

    #[test]
    fn test_truncate_and_clear_drop_elements() {
        let drops = Rc::new(Cell::new(0));
        let mut v: FixedSeq<DropCounter, 4> = FixedSeq::new();
        for _ in 0..4 {
            v.push_back(DropCounter(Rc::clone(&drops))).unwrap();
        }
        v.truncate(6);
        assert_eq!(drops.get(), 0);
        v.truncate(1);
        assert_eq!(v.len(), 1);
        assert_eq!(drops.get(), 3);
        v.clear();
        assert!(v.is_empty());
        assert_eq!(drops.get(), 4);
    }

    #[test]
    fn test_drop_releases_live_elements_only() {
        let drops = Rc::new(Cell::new(0));
        {
            let mut v: FixedSeq<DropCounter, 8> = FixedSeq::new();
            v.push_back(DropCounter(Rc::clone(&drops))).unwrap();
            v.push_back(DropCounter(Rc::clone(&drops))).unwrap();
        }
        assert_eq!(drops.get(), 2);
    }

    #[test]
    fn test_take_leaves_empty_sequence() {
        let mut v: FixedSeq<String, 3> = FixedSeq::new();
        v.push_back("a".to_string()).unwrap();
        let moved = v.take();
        assert!(v.is_empty());
        assert_eq!(moved.as_slice(), &["a".to_string()]);
    }

    #[test]
    fn test_move_transfers_live_elements() {
        let a: FixedSeq<String, 4> = FixedSeq::from(["x".to_string(), "y".to_string()]);
        let b = a;
        assert_eq!(b.len(), 2);
        assert_eq!(b[1], "y");
    }

    #[test]
    fn test_deref_and_as_ref() {
        let mut v: FixedSeq<i32, 3> = FixedSeq::from([1, 2]);
        let s: &[i32] = &v;
        assert_eq!(s, &[1, 2]);
        let smut: &mut [i32] = &mut v;
        smut[1] = 22;
        assert_eq!(v.as_slice(), &[1, 22]);
        let aref: &[i32] = v.as_ref();
        assert_eq!(aref, &[1, 22]);
        let amut: &mut [i32] = v.as_mut();
        amut[0] = 11;
        assert_eq!(v.as_slice(), &[11, 22]);
        v.sort_unstable_by(|a, b| b.cmp(a));
        assert_eq!(v.as_slice(), &[22, 11]);
    }

    #[test]
    fn test_zero_capacity_sequence_behaves() {
        let mut v: FixedSeq<u8, 0> = FixedSeq::default();
        assert_eq!(v.capacity(), 0);
        assert!(v.is_empty());
        assert!(v.is_full());
        assert_eq!(v.push_back(1), Err(Error::CapacityExceeded { capacity: 0 }));
        assert_eq!(v.push_front(1), Err(Error::CapacityExceeded { capacity: 0 }));
        assert_eq!(v.pop_back(), None);
        assert_eq!(v.pop_front(), None);
    }

    #[test]
    fn test_zero_sized_type_supports_capacity() {
        let mut v: FixedSeq<(), 4> = FixedSeq::default();
        v.push_back(()).unwrap();
        v.push_front(()).unwrap();
        v.insert(1, ()).unwrap();
        assert_eq!(v.len(), 3);
        assert_eq!(v.pop_front(), Some(()));
        assert_eq!(v.len(), 2);
    }
}
