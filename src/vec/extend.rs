// This file is part of fixed-seq.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::FixedSeq};

impl<T, const N: usize> Extend<T> for FixedSeq<T, N> {
    /// Appends items until the sequence is full; the rest of the iterator is
    /// left unconsumed.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let remaining = N - self.len;
        if remaining == 0 {
            return;
        }

        for item in iter.into_iter().take(remaining) {
            self.buf[self.len].write(item);
            self.len += 1;
        }
    }
}

impl<T: Clone, const N: usize> FixedSeq<T, N> {
    /// Appends clones of `src` if they all fit; otherwise no-op and returns
    /// [`Error::CapacityExceeded`].
    #[inline]
    pub fn extend_from_slice(&mut self, src: &[T]) -> Result<(), Error> {
        if src.len() > self.spare_capacity() {
            return Err(Error::CapacityExceeded { capacity: N });
        }
        for item in src {
            self.buf[self.len].write(item.clone());
            self.len += 1;
        }
        Ok(())
    }
}

impl<T, const N: usize> FixedSeq<T, N> {
    /// Tries to extend `self` from an iterator **without truncation**.
    ///
    /// All-or-nothing: if the iterator yields more than `spare_capacity()`
    /// items this returns [`Error::CapacityExceeded`] and `self` is unchanged.
    /// The source iterator may be partially consumed on error.
    #[inline]
    pub fn try_extend_from_iter<I: IntoIterator<Item = T>>(&mut self, iter: I) -> Result<(), Error> {
        let spare = self.spare_capacity();

        // Staging buffer so that `self` is untouched on error.
        let mut tmp: FixedSeq<T, N> = FixedSeq::new();
        for item in iter {
            if tmp.len() == spare {
                return Err(Error::CapacityExceeded { capacity: N });
            }
            tmp.push_back(item)?;
        }

        self.extend(tmp);
        Ok(())
    }
}
