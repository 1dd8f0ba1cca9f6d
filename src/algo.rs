// This file is part of fixed-seq.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Generic algorithms driven only through the cursor interface.
//!
//! These never touch a [`FixedSeq`](crate::FixedSeq) directly: they walk,
//! compare and swap through [`Cursor`] and [`CursorMut`], the same way a
//! caller-written algorithm would.
//!
//! ```rust
//! use fixed_seq::{algo, FixedSeq};
//!
//! let mut seq: FixedSeq<i32, 10> = FixedSeq::from([5, 3, 2, 4, 1]);
//! let last = seq.end().position();
//! algo::heap_sort(seq.begin_mut(), last);
//! assert_eq!(seq, [1, 2, 3, 4, 5]);
//!
//! let hit = algo::find(seq.begin(), seq.end(), &4);
//! assert_eq!(hit - seq.begin(), 3);
//! ```

// Crate imports
use crate::cursor::{Cursor, CursorMut};

/// Linear search over `[first, last)`.
///
/// Returns a cursor at the first element equal to `value`, or `last` when
/// there is none.
pub fn find<'a, T, U>(mut first: Cursor<'a, T>, last: Cursor<'a, T>, value: &U) -> Cursor<'a, T>
where
    T: PartialEq<U>,
    U: ?Sized,
{
    while first < last {
        if *first == *value {
            return first;
        }
        first.move_next();
    }
    last
}

/// Number of elements in `[first, last)`, clamped to the live range.
fn span<T>(first: &CursorMut<'_, T>, last: isize) -> isize {
    last.saturating_sub(first.position())
        .min(first.distance_to_end())
        .max(0)
}

/// Rearranges `[first, last)` into a max-heap.
///
/// `last` is a position in the same coordinates as
/// [`CursorMut::position`]; anything past the live range is clamped to it.
pub fn make_heap<T: Ord>(mut first: CursorMut<'_, T>, last: isize) {
    let len = span(&first, last);
    heapify(&mut first, len);
}

/// Turns the max-heap `[first, last)` into ascending order.
///
/// The range must already be a heap, e.g. from [`make_heap`].
pub fn sort_heap<T: Ord>(mut first: CursorMut<'_, T>, last: isize) {
    let mut end = span(&first, last);
    while end > 1 {
        end -= 1;
        first.swap(0, end);
        sift_down(&mut first, 0, end);
    }
}

/// Sorts `[first, last)` ascending: [`make_heap`] followed by [`sort_heap`].
pub fn heap_sort<T: Ord>(mut first: CursorMut<'_, T>, last: isize) {
    let len = span(&first, last);
    heapify(&mut first, len);
    sort_heap(first, last);
}

fn heapify<T: Ord>(first: &mut CursorMut<'_, T>, len: isize) {
    if len < 2 {
        return;
    }
    let mut parent = (len - 2) / 2;
    loop {
        sift_down(first, parent, len);
        if parent == 0 {
            break;
        }
        parent -= 1;
    }
}

/// Restores the heap property below `root`, looking only at offsets `< len`.
fn sift_down<T: Ord>(first: &mut CursorMut<'_, T>, mut root: isize, len: isize) {
    loop {
        let mut child = 2 * root + 1;
        if child >= len {
            return;
        }
        if child + 1 < len && first[child] < first[child + 1] {
            child += 1;
        }
        if first[root] >= first[child] {
            return;
        }
        first.swap(root, child);
        root = child;
    }
}
