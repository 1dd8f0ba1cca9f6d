// This file is part of fixed-seq.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::FixedSeq};

impl<T, const N: usize> FixedSeq<T, N> {
    /// Appends `value` at index `len`.
    ///
    /// Returns [`Error::CapacityExceeded`] when full; the value is dropped and the
    /// sequence is unchanged.
    #[inline]
    pub fn push_back(&mut self, value: T) -> Result<(), Error> {
        if self.len == N {
            return Err(Error::CapacityExceeded { capacity: N });
        }

        self.buf[self.len].write(value);

        self.len += 1;
        Ok(())
    }

    /// Prepends `value`, shifting every live element one slot to the right.
    ///
    /// `O(len)`. Returns [`Error::CapacityExceeded`] when full.
    #[inline]
    pub fn push_front(&mut self, value: T) -> Result<(), Error> {
        self.insert_with(0, || value)
    }
}

#[cfg(test)]
mod tests {
    use crate::{error::Error, vec::FixedSeq};

    #[test]
    fn test_push_back_and_full_error() {
        let mut v: FixedSeq<u8, 2> = FixedSeq::default();
        v.push_back(1).unwrap();
        v.push_back(2).unwrap();
        assert_eq!(v.push_back(9), Err(Error::CapacityExceeded { capacity: 2 }));
        assert_eq!(v.as_slice(), &[1, 2]);
    }

    #[test]
    fn test_push_front_shifts_right() {
        let mut v: FixedSeq<i32, 5> = FixedSeq::from([2, 3, 4, 5]);
        v.push_front(1).unwrap();
        assert_eq!(v.as_slice(), &[1, 2, 3, 4, 5]);
        assert_eq!(v.push_front(0), Err(Error::CapacityExceeded { capacity: 5 }));
        assert_eq!(v.as_slice(), &[1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_push_back_then_pop_back_is_noop() {
        let mut v: FixedSeq<i32, 4> = FixedSeq::from([1, 2, 3]);
        let before = v.clone();
        v.push_back(4).unwrap();
        assert_eq!(v.pop_back(), Some(4));
        assert_eq!(v, before);
    }
}
