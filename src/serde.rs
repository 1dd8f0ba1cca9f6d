// This file is part of fixed-seq.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `serde` support for [`FixedSeq`](crate::FixedSeq).
//!
//! - **Serialize**: as a sequence of the `len` live elements.
//! - **Deserialize**: from any sequence of at most `N` elements. Longer input
//!   is rejected, never truncated.
//!
//! Only `T: Serialize` / `T: Deserialize<'de>` is required. Elements are
//! written straight into the uninitialized buffer as they arrive, so `T`
//! needs neither `Default` nor `Clone`.

// Crate imports
use crate::vec::FixedSeq;

// Core imports
use core::{fmt, marker::PhantomData};

// External imports - serde
use serde::{de, ser, Deserialize, Deserializer, Serialize, Serializer};

impl<T: Serialize, const N: usize> Serialize for FixedSeq<T, N> {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        use ser::SerializeSeq;
        let mut seq = s.serialize_seq(Some(self.len()))?;
        for item in self {
            seq.serialize_element(item)?;
        }
        seq.end()
    }
}

struct SeqVisitor<T, const N: usize>(PhantomData<T>);

impl<'de, T, const N: usize> de::Visitor<'de> for SeqVisitor<T, N>
where
    T: Deserialize<'de>,
{
    type Value = FixedSeq<T, N>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "array or sequence with at most {} elements", N)
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, mut a: A) -> Result<Self::Value, A::Error> {
        if let Some(hint) = a.size_hint() {
            if hint > N {
                return Err(de::Error::invalid_length(hint, &self));
            }
        }
        let mut out = FixedSeq::<T, N>::new();
        while let Some(elem) = a.next_element::<T>()? {
            out.push_back(elem)
                .map_err(|_| de::Error::custom(format_args!("too many elements (capacity {N})")))?;
        }
        Ok(out)
    }
}

impl<'de, T, const N: usize> Deserialize<'de> for FixedSeq<T, N>
where
    T: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_seq(SeqVisitor::<T, N>(PhantomData))
    }
}
