// This file is part of fixed-seq.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # `fixed-seq`
//!
//! A `no_std`, fixed-capacity, inline sequence container with random-access
//! cursors.
//!
//! The core type, [`FixedSeq<T, N>`], stores up to `N` elements inline (no heap
//! allocation) and tracks a logical length `len ∈ 0..=N`. It supports growth
//! and shrinkage at both ends, indexed insert and erase with shifting, and
//! in-place construction through closures.
//!
//! ## When to use this crate
//!
//! This crate may be useful when:
//!
//! - You are in a `no_std` or embedded environment.
//! - You know the maximum length at compile time.
//! - You want `Vec`-like mutation (including at the front) without allocation.
//!
//! It may not be the best fit if:
//!
//! - You need very large capacities (the whole buffer lives inline).
//! - You frequently pass sequences by value (a move copies all `N` slots).
//!
//! ## Element capabilities
//!
//! `FixedSeq<T, N>` places no bounds on `T`. Extra API is unlocked by what the
//! element type can do, resolved at compile time:
//!
//! - `T: PartialEq<U>`: `==` against `FixedSeq<U, M>` of any capacity, slices
//!   and arrays.
//! - `T: bytemuck::NoUninit`: [`FixedSeq::bytes_eq`] and
//!   [`FixedSeq::bytes_eq_slice`], raw byte comparison for plain-data types
//!   with no `PartialEq`.
//! - `T: Display`: `{}` renders `{1, 2, 3}` (and `{}` when empty).
//! - `T: Clone`: [`Clone`], [`FixedSeq::extend_from_slice`] and
//!   `TryFrom<&[T]>`.
//!
//! Missing capabilities are compile errors, not runtime failures. A type with
//! no `Display` cannot be printed:
//!
//! ```compile_fail
//! use fixed_seq::FixedSeq;
//!
//! struct Opaque;
//! let v: FixedSeq<Opaque, 2> = FixedSeq::new();
//! let _text = format!("{v}");
//! ```
//!
//! and a type with no `PartialEq` has no `==`:
//!
//! ```compile_fail
//! use fixed_seq::FixedSeq;
//!
//! struct Opaque;
//! let a: FixedSeq<Opaque, 2> = FixedSeq::new();
//! let b: FixedSeq<Opaque, 2> = FixedSeq::new();
//! let _same = a == b;
//! ```
//!
//! ## Errors and panics
//!
//! - Operations that would exceed capacity return
//!   [`Error::CapacityExceeded`] and leave the sequence unchanged (e.g.
//!   [`FixedSeq::push_back`], [`FixedSeq::push_front`], [`FixedSeq::insert`],
//!   [`FixedSeq::emplace_back`], [`FixedSeq::extend_from_slice`],
//!   [`FixedSeq::try_from_iter`]).
//! - Positional operations with a bad index return
//!   [`Error::IndexOutOfRange`] (e.g. [`FixedSeq::insert`],
//!   [`FixedSeq::erase`], [`FixedSeq::try_get`]).
//! - Building from an array literal that is longer than the capacity fails to
//!   compile.
//!
//!   ```compile_fail
//!   use fixed_seq::FixedSeq;
//!
//!   let _v: FixedSeq<i32, 2> = FixedSeq::from([1, 2, 3]);
//!   ```
//!
//! - `seq[i]` and dereferencing a cursor outside `[0, len)` panic, like slice
//!   indexing. [`FixedSeq::get_unchecked`] is the unchecked `unsafe` escape
//!   hatch.
//! - [`FromIterator`] and [`Extend`] truncate silently at capacity.
//!
//! ## Cursors and algorithms
//!
//! [`FixedSeq::begin`] / [`FixedSeq::end`] (and their `_mut` twins) return
//! [`Cursor`] / [`CursorMut`], signed positions that move with `+`, `-`,
//! [`move_next`](Cursor::move_next) and [`move_prev`](Cursor::move_prev),
//! dereference with `*` and `[offset]`, and compare by position within one
//! sequence. The [`algo`] module shows them driving a linear search and a
//! heap sort over any `[first, last)` range.
//!
//! ## Features
//!
//! - `serde`: `Serialize` / `Deserialize` for `FixedSeq<T, N>` as a sequence.
//!   Deserializing more than `N` elements is an error.
//!
//! ## Example
//!
//! ```rust
//! use fixed_seq::FixedSeq;
//!
//! let mut v: FixedSeq<i32, 10> = FixedSeq::from([2, 3]);
//! v.push_back(4).unwrap();
//! v.push_front(1).unwrap();
//! v.erase(1).unwrap();
//! assert_eq!(v, [1, 3, 4]);
//! assert_eq!(v.to_string(), "{1, 3, 4}");
//! ```

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_op_in_unsafe_fn)]

#[cfg(test)]
extern crate alloc;

// Modules
pub mod algo;
mod cmp;
pub mod cursor;
mod display;
mod error;
mod index;
mod iter;
#[cfg(feature = "serde")]
mod serde;
mod vec;

// Public exports (crate API surface)
pub use cursor::{Cursor, CursorMut};
pub use error::Error;
pub use iter::IntoIter;
pub use vec::FixedSeq;
