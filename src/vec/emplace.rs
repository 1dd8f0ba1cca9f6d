// This file is part of fixed-seq.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-place construction.
//!
//! Each `emplace*` method takes a constructor closure instead of a finished
//! value. The closure only runs once the capacity and index checks have
//! passed, so a failed call never builds (and then throws away) an element.

// Crate imports
use crate::{error::Error, vec::FixedSeq};

impl<T, const N: usize> FixedSeq<T, N> {
    /// Constructs an element with `make` and appends it.
    ///
    /// Returns [`Error::CapacityExceeded`] without calling `make` when full.
    #[inline]
    pub fn emplace_back<F>(&mut self, make: F) -> Result<&mut T, Error>
    where
        F: FnOnce() -> T,
    {
        if self.len == N {
            return Err(Error::CapacityExceeded { capacity: N });
        }
        let index = self.len;
        self.buf[index].write(make());
        self.len = index + 1;
        Ok(&mut self.as_mut_slice()[index])
    }

    /// Constructs an element with `make` and prepends it, shifting the rest right.
    #[inline]
    pub fn emplace_front<F>(&mut self, make: F) -> Result<&mut T, Error>
    where
        F: FnOnce() -> T,
    {
        self.emplace(0, make)
    }

    /// Constructs an element with `make` at `index`, shifting `[index..len)` right.
    ///
    /// Same checks and ordering as [`insert`](FixedSeq::insert).
    #[inline]
    pub fn emplace<F>(&mut self, index: usize, make: F) -> Result<&mut T, Error>
    where
        F: FnOnce() -> T,
    {
        self.insert_with(index, make)?;
        Ok(&mut self.as_mut_slice()[index])
    }
}

#[cfg(test)]
mod tests {
    use crate::{error::Error, vec::FixedSeq};

    #[derive(Debug, Clone, Copy, PartialEq)]
    struct Pair {
        a: i32,
        b: i32,
    }

    impl Pair {
        fn new(a: i32, b: i32) -> Self {
            Self { a, b }
        }
    }

    #[test]
    fn test_emplace_back_and_front() {
        let mut v: FixedSeq<Pair, 10> = FixedSeq::from([Pair::new(2, 2)]);
        v.emplace_back(|| Pair::new(3, 3)).unwrap();
        v.emplace_front(|| Pair::new(1, 1)).unwrap();
        assert_eq!(v, [Pair::new(1, 1), Pair::new(2, 2), Pair::new(3, 3)]);
    }

    #[test]
    fn test_emplace_at_index() {
        let mut c: FixedSeq<Pair, 10> = FixedSeq::from([Pair::new(2, 2), Pair::new(3, 3)]);
        c.emplace(0, || Pair::new(1, 1)).unwrap();
        assert_eq!(c, [Pair::new(1, 1), Pair::new(2, 2), Pair::new(3, 3)]);

        let mut e: FixedSeq<Pair, 10> = FixedSeq::from([Pair::new(1, 1), Pair::new(2, 2)]);
        let slot = e.emplace(2, || Pair::new(3, 3)).unwrap();
        slot.b = 30;
        assert_eq!(e, [Pair::new(1, 1), Pair::new(2, 2), Pair::new(3, 30)]);
    }

    #[test]
    fn test_emplace_does_not_construct_on_error() {
        let mut v: FixedSeq<Pair, 1> = FixedSeq::from([Pair::new(0, 0)]);
        let mut called = false;
        let res = v.emplace_back(|| {
            called = true;
            Pair::new(1, 1)
        });
        assert_eq!(res, Err(Error::CapacityExceeded { capacity: 1 }));
        assert!(!called);

        let mut w: FixedSeq<Pair, 4> = FixedSeq::new();
        let res = w.emplace(1, || {
            called = true;
            Pair::new(1, 1)
        });
        assert_eq!(res, Err(Error::IndexOutOfRange { index: 1, len: 0 }));
        assert!(!called);
        assert!(w.is_empty());
    }
}
