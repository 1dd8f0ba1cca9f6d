// This file is part of fixed-seq.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Formatting for [`FixedSeq`](crate::FixedSeq).
//!
//! `Display` exists only when `T: Display`, and renders the live elements as
//! `{1, 2, 3}` (`{}` when empty). For any other `T` there is simply no
//! `Display` impl.

// Crate imports
use crate::vec::FixedSeq;

// Core imports
use core::fmt;

impl<T: fmt::Debug, const N: usize> fmt::Debug for FixedSeq<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FixedSeq")
            .field("len", &self.len)
            .field("elements", &self.as_slice())
            .finish()
    }
}

impl<T: fmt::Display, const N: usize> fmt::Display for FixedSeq<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, item) in self.iter().enumerate() {
            if i != 0 {
                f.write_str(", ")?;
            }
            fmt::Display::fmt(item, f)?;
        }
        f.write_str("}")
    }
}
