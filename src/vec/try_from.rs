// This file is part of fixed-seq.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::FixedSeq};

impl<T: Clone, const N: usize> TryFrom<&[T]> for FixedSeq<T, N> {
    type Error = Error;
    fn try_from(src: &[T]) -> Result<Self, Error> {
        let mut v = Self::new();
        v.extend_from_slice(src)?;
        Ok(v)
    }
}

impl<T, const N: usize> FixedSeq<T, N> {
    /// Tries to construct from an iterator, failing with
    /// [`Error::CapacityExceeded`] if it yields more than `N` items.
    ///
    /// Elements pushed before the overflow are dropped with the partial
    /// sequence. The source iterator stops being consumed at the first
    /// overflowing item.
    #[inline]
    pub fn try_from_iter<I: IntoIterator<Item = T>>(iter: I) -> Result<Self, Error> {
        let mut v = Self::new();
        for item in iter {
            v.push_back(item)?;
        }
        Ok(v)
    }
}

impl<T, const N: usize> FromIterator<T> for FixedSeq<T, N> {
    /// Collecting takes at most the first `N` items and does not consume any further.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut v = Self::new();
        v.extend(iter);
        v
    }
}

#[cfg(test)]
mod tests {
    use crate::{error::Error, vec::FixedSeq};

    // NOTE: NoClone does NOT implement Clone on purpose.
    #[derive(PartialEq, Eq, Debug)]
    struct NoClone(u8);

    #[test]
    fn test_try_from_slice() {
        let v = <FixedSeq<u8, 4>>::try_from(&[1, 2, 3][..]).unwrap();
        assert_eq!(v.as_slice(), &[1, 2, 3]);
        let err = <FixedSeq<u8, 2>>::try_from(&[1, 2, 3][..]).unwrap_err();
        assert_eq!(err, Error::CapacityExceeded { capacity: 2 });
    }

    #[test]
    fn test_try_from_iter_non_clone_type() {
        let v: FixedSeq<NoClone, 4> =
            FixedSeq::try_from_iter([NoClone(1), NoClone(2), NoClone(3)]).unwrap();
        assert_eq!(v.as_slice(), &[NoClone(1), NoClone(2), NoClone(3)]);

        let err = FixedSeq::<NoClone, 2>::try_from_iter((0..5).map(NoClone)).unwrap_err();
        assert_eq!(err, Error::CapacityExceeded { capacity: 2 });
    }

    #[test]
    fn test_collect_truncates() {
        let v: FixedSeq<u32, 3> = (1..10).collect();
        assert_eq!(v.as_slice(), &[1, 2, 3]);
    }
}
