// This file is part of fixed-seq.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for `FixedSeq`.
//!
//! These errors represent capacity and bounds conditions.
//! They are `Copy` and implement `core::error::Error`.

// Core imports
use core::{error::Error as CoreError, fmt};

/// Errors returned by operations on [`FixedSeq`](crate::FixedSeq).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The operation would grow the sequence past its fixed capacity.
    CapacityExceeded {
        /// The compile-time capacity `N`.
        capacity: usize,
    },
    /// An index was outside the live elements.
    ///
    /// The bound is the logical length, never the capacity.
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// The logical length at the time of the call.
        len: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityExceeded { capacity } => {
                write!(f, "capacity of {capacity} elements exceeded")
            }
            Self::IndexOutOfRange { index, len } => {
                write!(f, "index {index} is out of range for length {len}")
            }
        }
    }
}

impl CoreError for Error {}
