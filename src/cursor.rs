// This file is part of fixed-seq.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Random-access cursors over the live elements of a [`FixedSeq`].
//!
//! A cursor is a signed position into the live prefix `[0, len)` of one
//! sequence. It can move one step ([`move_next`](Cursor::move_next),
//! [`move_prev`](Cursor::move_prev)), jump by an offset (`+`, `-`, `+=`, `-=`
//! with an `isize`), be dereferenced (`*cursor`, `cursor[offset]`), and be
//! compared by position with the usual six operators.
//!
//! - [`Cursor`] is a shared cursor. It is `Copy`, and `end - begin` gives the
//!   element count between two of them. Cursors are tied to the sequence they
//!   came from: cursors over different sequences never compare equal, are
//!   unordered, and panic when subtracted.
//! - [`CursorMut`] is an exclusive cursor. It adds in-place writes and
//!   [`swap`](CursorMut::swap), which is what heap and sort algorithms need.
//!
//! Positions outside `[0, len)` are allowed, `end()` being the usual example,
//! but dereferencing one panics. A cursor borrows its sequence, so shifting
//! mutations (`insert`, `erase`, `push_front`, `pop_front`, ...) cannot run
//! while any cursor is alive.
//!
//! ```rust
//! use fixed_seq::FixedSeq;
//!
//! let seq: FixedSeq<i32, 8> = FixedSeq::from([1, 2, 3, 4, 5]);
//! let (begin, end) = (seq.begin(), seq.end());
//! assert_eq!(*begin, 1);
//! assert_eq!(*(end - 1), 5);
//! assert_eq!(end - begin, 5);
//! assert!(begin < end);
//! ```

// Crate imports
use crate::vec::FixedSeq;

// Core imports
use core::{
    cmp::Ordering,
    fmt,
    ptr,
    ops::{Add, AddAssign, Deref, DerefMut, Index, IndexMut, Sub, SubAssign},
};

/// Maps `pos + offset` to a slice index, if it lands inside `[0, len)`.
fn resolve(pos: isize, offset: isize, len: usize) -> Option<usize> {
    let at = pos.checked_add(offset)?;
    usize::try_from(at).ok().filter(|&i| i < len)
}

#[cold]
#[track_caller]
fn off_the_end(pos: isize, len: usize) -> ! {
    panic!("cursor position {pos} is outside the live range 0..{len}")
}

/// Shared random-access cursor, see the [module docs](self).
pub struct Cursor<'a, T> {
    slice: &'a [T],
    pos: isize,
}

impl<'a, T> Cursor<'a, T> {
    pub(crate) const fn new(slice: &'a [T], pos: isize) -> Self {
        Self { slice, pos }
    }

    /// Position relative to the first live element.
    #[inline]
    pub const fn position(&self) -> isize {
        self.pos
    }

    /// The element under the cursor, or `None` off the live range.
    #[inline]
    pub fn get(&self) -> Option<&'a T> {
        self.at(0)
    }

    /// The element `offset` steps away from the cursor, or `None` off the live range.
    #[inline]
    pub fn at(&self, offset: isize) -> Option<&'a T> {
        let slice = self.slice;
        resolve(self.pos, offset, slice.len()).map(|i| &slice[i])
    }

    /// Pre-increment. A post-increment is `let old = c; c.move_next();`.
    #[inline]
    pub fn move_next(&mut self) {
        self.pos += 1;
    }

    /// Pre-decrement.
    #[inline]
    pub fn move_prev(&mut self) {
        self.pos -= 1;
    }

    /// Number of steps from here to one past the last live element.
    #[inline]
    pub fn distance_to_end(&self) -> isize {
        self.slice.len() as isize - self.pos
    }
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T> Copy for Cursor<'_, T> {}

impl<T> Deref for Cursor<'_, T> {
    type Target = T;
    #[track_caller]
    fn deref(&self) -> &T {
        match self.get() {
            Some(x) => x,
            None => off_the_end(self.pos, self.slice.len()),
        }
    }
}

impl<T> Index<isize> for Cursor<'_, T> {
    type Output = T;
    #[track_caller]
    fn index(&self, offset: isize) -> &T {
        match self.at(offset) {
            Some(x) => x,
            None => off_the_end(self.pos.wrapping_add(offset), self.slice.len()),
        }
    }
}

impl<T> Add<isize> for Cursor<'_, T> {
    type Output = Self;
    fn add(mut self, n: isize) -> Self {
        self.pos += n;
        self
    }
}
impl<T> Sub<isize> for Cursor<'_, T> {
    type Output = Self;
    fn sub(mut self, n: isize) -> Self {
        self.pos -= n;
        self
    }
}
impl<T> AddAssign<isize> for Cursor<'_, T> {
    fn add_assign(&mut self, n: isize) {
        self.pos += n;
    }
}
impl<T> SubAssign<isize> for Cursor<'_, T> {
    fn sub_assign(&mut self, n: isize) {
        self.pos -= n;
    }
}

/// `end - begin`: the number of elements between two cursors.
///
/// # Panics
///
/// Panics if the cursors walk different sequences.
impl<T> Sub for Cursor<'_, T> {
    type Output = isize;
    #[track_caller]
    fn sub(self, other: Self) -> isize {
        if !self.same_sequence(&other) {
            foreign_cursor()
        }
        self.pos - other.pos
    }
}

impl<T> Cursor<'_, T> {
    fn same_sequence(&self, other: &Self) -> bool {
        ptr::eq(self.slice.as_ptr(), other.slice.as_ptr())
    }
}

#[cold]
#[track_caller]
fn foreign_cursor() -> ! {
    panic!("cursors belong to different sequences")
}

// Cursors are equal only when they walk the same sequence and sit at the same
// position. Cursors over different sequences are unordered.
impl<T> PartialEq for Cursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.same_sequence(other) && self.pos == other.pos
    }
}
impl<T> Eq for Cursor<'_, T> {}
impl<T> PartialOrd for Cursor<'_, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.same_sequence(other) {
            Some(self.pos.cmp(&other.pos))
        } else {
            None
        }
    }
}

impl<T> fmt::Debug for Cursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("position", &self.pos)
            .field("len", &self.slice.len())
            .finish()
    }
}

/// Exclusive random-access cursor, see the [module docs](self).
///
/// A `CursorMut` holds the only borrow of its sequence, so there is never a
/// second cursor into the same sequence to compare it with. Relations between
/// positions go through [`position`](CursorMut::position), or through
/// [`as_cursor`](CursorMut::as_cursor) when a shared cursor is handy.
pub struct CursorMut<'a, T> {
    slice: &'a mut [T],
    pos: isize,
}

impl<'a, T> CursorMut<'a, T> {
    pub(crate) fn new(slice: &'a mut [T], pos: isize) -> Self {
        Self { slice, pos }
    }

    /// Position relative to the first live element.
    #[inline]
    pub const fn position(&self) -> isize {
        self.pos
    }

    /// The element under the cursor, or `None` off the live range.
    #[inline]
    pub fn get(&self) -> Option<&T> {
        self.at(0)
    }

    /// Mutable access to the element under the cursor.
    #[inline]
    pub fn get_mut(&mut self) -> Option<&mut T> {
        self.at_mut(0)
    }

    /// The element `offset` steps away from the cursor.
    #[inline]
    pub fn at(&self, offset: isize) -> Option<&T> {
        resolve(self.pos, offset, self.slice.len()).map(|i| &self.slice[i])
    }

    /// Mutable access to the element `offset` steps away from the cursor.
    #[inline]
    pub fn at_mut(&mut self, offset: isize) -> Option<&mut T> {
        resolve(self.pos, offset, self.slice.len()).map(|i| &mut self.slice[i])
    }

    /// Pre-increment.
    #[inline]
    pub fn move_next(&mut self) {
        self.pos += 1;
    }

    /// Pre-decrement.
    #[inline]
    pub fn move_prev(&mut self) {
        self.pos -= 1;
    }

    /// Number of steps from here to one past the last live element.
    #[inline]
    pub fn distance_to_end(&self) -> isize {
        self.slice.len() as isize - self.pos
    }

    /// Swaps the elements at offsets `a` and `b` from the cursor.
    ///
    /// # Panics
    ///
    /// Panics if either offset lands outside the live range.
    #[track_caller]
    pub fn swap(&mut self, a: isize, b: isize) {
        let len = self.slice.len();
        let Some(i) = resolve(self.pos, a, len) else {
            off_the_end(self.pos.wrapping_add(a), len)
        };
        let Some(j) = resolve(self.pos, b, len) else {
            off_the_end(self.pos.wrapping_add(b), len)
        };
        self.slice.swap(i, j);
    }

    /// A shared cursor at the same position, borrowing this one.
    #[inline]
    pub fn as_cursor(&self) -> Cursor<'_, T> {
        Cursor::new(&*self.slice, self.pos)
    }

    /// Gives up write access and keeps the full borrow.
    #[inline]
    pub fn into_cursor(self) -> Cursor<'a, T> {
        let Self { slice, pos } = self;
        Cursor::new(slice, pos)
    }
}

impl<T> Deref for CursorMut<'_, T> {
    type Target = T;
    #[track_caller]
    fn deref(&self) -> &T {
        match self.get() {
            Some(x) => x,
            None => off_the_end(self.pos, self.slice.len()),
        }
    }
}
impl<T> DerefMut for CursorMut<'_, T> {
    #[track_caller]
    fn deref_mut(&mut self) -> &mut T {
        let (pos, len) = (self.pos, self.slice.len());
        match self.get_mut() {
            Some(x) => x,
            None => off_the_end(pos, len),
        }
    }
}

impl<T> Index<isize> for CursorMut<'_, T> {
    type Output = T;
    #[track_caller]
    fn index(&self, offset: isize) -> &T {
        match self.at(offset) {
            Some(x) => x,
            None => off_the_end(self.pos.wrapping_add(offset), self.slice.len()),
        }
    }
}
impl<T> IndexMut<isize> for CursorMut<'_, T> {
    #[track_caller]
    fn index_mut(&mut self, offset: isize) -> &mut T {
        let (pos, len) = (self.pos, self.slice.len());
        match self.at_mut(offset) {
            Some(x) => x,
            None => off_the_end(pos.wrapping_add(offset), len),
        }
    }
}

impl<T> Add<isize> for CursorMut<'_, T> {
    type Output = Self;
    fn add(mut self, n: isize) -> Self {
        self.pos += n;
        self
    }
}
impl<T> Sub<isize> for CursorMut<'_, T> {
    type Output = Self;
    fn sub(mut self, n: isize) -> Self {
        self.pos -= n;
        self
    }
}
impl<T> AddAssign<isize> for CursorMut<'_, T> {
    fn add_assign(&mut self, n: isize) {
        self.pos += n;
    }
}
impl<T> SubAssign<isize> for CursorMut<'_, T> {
    fn sub_assign(&mut self, n: isize) {
        self.pos -= n;
    }
}

impl<T> fmt::Debug for CursorMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CursorMut")
            .field("position", &self.pos)
            .field("len", &self.slice.len())
            .finish()
    }
}

impl<T, const N: usize> FixedSeq<T, N> {
    /// Shared cursor at the first live element.
    #[inline]
    pub fn begin(&self) -> Cursor<'_, T> {
        Cursor::new(self.as_slice(), 0)
    }

    /// Shared cursor one past the last live element. Never dereference it directly.
    #[inline]
    pub fn end(&self) -> Cursor<'_, T> {
        Cursor::new(self.as_slice(), self.len as isize)
    }

    /// Exclusive cursor at the first live element.
    #[inline]
    pub fn begin_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut::new(self.as_mut_slice(), 0)
    }

    /// Exclusive cursor one past the last live element.
    #[inline]
    pub fn end_mut(&mut self) -> CursorMut<'_, T> {
        let len = self.len as isize;
        CursorMut::new(self.as_mut_slice(), len)
    }
}

#[cfg(test)]
mod tests {
    use crate::vec::FixedSeq;

    #[derive(Debug, Clone, PartialEq)]
    struct Pair {
        a: i32,
        b: i32,
    }

    #[test]
    fn test_begin_end_arithmetic() {
        let v: FixedSeq<i32, 10> = FixedSeq::from([1, 2, 3, 4, 5]);
        assert_eq!(*v.begin(), 1);
        assert_eq!(*(v.end() - 1), 5);
        assert_eq!(v.end() - v.begin(), v.len() as isize);
        assert_eq!(v.begin().distance_to_end(), 5);
        assert_eq!(v.end().position(), 5);
        assert_eq!(v.end().get(), None);
    }

    #[test]
    fn test_increment_and_decrement() {
        let v: FixedSeq<i32, 10> = FixedSeq::from([1, 2, 3]);
        let mut c = v.begin();
        let old = c;
        c.move_next();
        assert_eq!((*old, *c), (1, 2));
        c.move_next();
        c.move_prev();
        assert_eq!(*c, 2);
        c += 1;
        assert_eq!(*c, 3);
        c -= 2;
        assert_eq!(*c, 1);
        assert_eq!(*(c + 2), 3);
    }

    #[test]
    fn test_offset_dereference() {
        let v: FixedSeq<i32, 10> = FixedSeq::from([10, 20, 30]);
        let mid = v.begin() + 1;
        assert_eq!(mid[-1], 10);
        assert_eq!(mid[0], 20);
        assert_eq!(mid[1], 30);
        assert_eq!(mid.at(2), None);
        assert_eq!(mid.at(-2), None);
    }

    #[test]
    fn test_relational_operators_follow_position() {
        let v: FixedSeq<i32, 10> = FixedSeq::from([1, 2, 3]);
        let (b, e) = (v.begin(), v.end());

        assert!(b == b);
        assert!(b != e);
        assert!(b < e);
        assert!(!(e < b));
        assert!(!(b < b));
        assert!(b <= e);
        assert!(b <= b);
        assert!(!(e <= b));
        assert!(e > b);
        assert!(!(b > e));
        assert!(e >= b);
        assert!(e >= e);
        assert!(!(b >= e));
    }

    #[test]
    fn test_cursors_over_different_sequences_differ() {
        let a: FixedSeq<i32, 4> = FixedSeq::from([1, 1]);
        let b: FixedSeq<i32, 4> = FixedSeq::from([1, 1]);
        assert_eq!(a, b);

        assert!(a.begin() != b.begin());
        assert!(a.end() != b.end());
        assert_eq!(a.begin().partial_cmp(&b.end()), None);
        assert!(!(b.begin() < a.end()));
        assert!(!(b.begin() <= a.end()));
        assert!(!(a.end() > b.begin()));

        let copy = a.begin();
        assert!(copy == a.begin());
    }

    #[test]
    #[should_panic(expected = "cursors belong to different sequences")]
    fn test_difference_across_sequences_panics() {
        let a: FixedSeq<i32, 4> = FixedSeq::from([1, 1]);
        let b: FixedSeq<i32, 4> = FixedSeq::from([1, 1]);
        let _distance = a.end() - b.begin();
    }

    #[test]
    fn test_member_access_through_cursor() {
        let mut v: FixedSeq<Pair, 4> = FixedSeq::from([Pair { a: 1, b: 2 }]);
        assert_eq!(v.begin().a, 1);
        let mut c = v.begin_mut();
        c.b = 20;
        assert_eq!(v[0], Pair { a: 1, b: 20 });
    }

    #[test]
    fn test_cursor_mut_writes_and_swaps() {
        let mut v: FixedSeq<i32, 10> = FixedSeq::from([1, 2, 3, 4]);
        {
            let mut c = v.begin_mut();
            *c = 10;
            c += 1;
            c[1] = 30;
            c.swap(-1, 2);
            assert_eq!(c.distance_to_end(), 3);
            assert_eq!(c.as_cursor()[0], 2);
        }
        assert_eq!(v.as_slice(), &[4, 2, 30, 10]);
    }

    #[test]
    fn test_end_mut_walks_backwards() {
        let mut v: FixedSeq<i32, 4> = FixedSeq::from([1, 2, 3]);
        let mut c = v.end_mut();
        assert_eq!(c.get(), None);
        c.move_prev();
        *c.get_mut().unwrap() = 33;
        let c = c - 2;
        let shared = c.into_cursor();
        assert_eq!(*shared, 1);
        assert_eq!(v.as_slice(), &[1, 2, 33]);
    }

    #[test]
    #[should_panic(expected = "cursor position 3 is outside the live range 0..3")]
    fn test_deref_end_panics() {
        let v: FixedSeq<i32, 10> = FixedSeq::from([1, 2, 3]);
        let _value = *v.end();
    }

    #[test]
    #[should_panic]
    fn test_swap_out_of_range_panics() {
        let mut v: FixedSeq<i32, 10> = FixedSeq::from([1, 2, 3]);
        v.begin_mut().swap(0, 3);
    }
}
