// This file is part of fixed-seq.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::FixedSeq;

impl<T, const N: usize, const M: usize> From<[T; M]> for FixedSeq<T, N> {
    /// Builds a sequence from an array literal of length `M <= N`.
    ///
    /// The length check happens at compile time: instantiating this with
    /// `M > N` fails to build.
    fn from(src: [T; M]) -> Self {
        const { assert!(M <= N, "array literal is longer than the sequence capacity") };
        let mut out = Self::new();
        for item in src {
            out.buf[out.len].write(item);
            out.len += 1;
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use crate::vec::FixedSeq;
    use alloc::string::{String, ToString};

    #[test]
    fn test_from_exact_and_shorter_arrays() {
        let full: FixedSeq<u8, 3> = [7, 8, 9].into();
        assert!(full.is_full());
        assert_eq!(full.as_slice(), &[7, 8, 9]);

        let partial: FixedSeq<u8, 5> = [7, 8].into();
        assert_eq!(partial.len(), 2);
        assert_eq!(partial.spare_capacity(), 3);

        let empty: FixedSeq<u8, 2> = FixedSeq::from([]);
        assert!(empty.is_empty());
    }

    #[test]
    fn test_from_owned_non_copy_elements() {
        let v: FixedSeq<String, 4> = FixedSeq::from(["a".to_string(), "b".to_string()]);
        assert_eq!(v.as_slice(), &["a", "b"]);
    }
}
