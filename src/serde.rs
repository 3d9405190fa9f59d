// This file is part of static-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `serde` support for [`StaticVec`](crate::StaticVec).
//!
//! - **Serialize**: as a sequence of the live elements (length `len`).
//! - **Deserialize**: from any sequence of at most `N` elements. The backing
//!   buffer is built with `T::default()` first, so `T: Default` is required.

// Crate imports
use crate::vec::StaticVec;

// Core imports
use core::{fmt, marker::PhantomData};

// External imports - serde
use serde::{Deserialize, Deserializer, Serialize, Serializer, de, ser};

impl<T: Serialize, const N: usize> Serialize for StaticVec<T, N> {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        use ser::SerializeSeq;
        let mut seq = s.serialize_seq(Some(self.len()))?;
        for item in self {
            seq.serialize_element(item)?;
        }
        seq.end()
    }
}

struct VecVisitor<T, const N: usize>(PhantomData<T>);

impl<'de, T, const N: usize> de::Visitor<'de> for VecVisitor<T, N>
where
    T: Deserialize<'de> + Default,
{
    type Value = StaticVec<T, N>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "array or sequence with at most {} elements", N)
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, mut a: A) -> Result<Self::Value, A::Error> {
        let mut out = StaticVec::<T, N>::default();
        while let Some(elem) = a.next_element::<T>()? {
            out.try_push(elem)
                .map_err(|_| de::Error::custom(format_args!("too many elements (capacity {N})")))?;
        }
        Ok(out)
    }
}

impl<'de, T, const N: usize> Deserialize<'de> for StaticVec<T, N>
where
    T: Deserialize<'de> + Default,
{
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_seq(VecVisitor::<T, N>(PhantomData))
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use super::StaticVec;
    use alloc::string::ToString;

    #[test]
    fn test_serde_roundtrip_json() {
        let v: StaticVec<i32, 5> = StaticVec::from_slice(&[1, 2, 3]);
        let s = serde_json::to_string(&v).unwrap();
        assert_eq!(s, "[1,2,3]");
        let back: StaticVec<i32, 5> = serde_json::from_str(&s).unwrap();
        assert_eq!(back, v);
    }

    #[test]
    fn test_serialize_skips_dead_slots() {
        let v: StaticVec<i32, 4> = StaticVec::from_elem(1, 8);
        assert_eq!(serde_json::to_string(&v).unwrap(), "[8]");
    }

    #[test]
    fn test_deserialize_over_capacity_errors() {
        let err = serde_json::from_str::<StaticVec<i32, 3>>("[1,2,3,4]").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("too many elements (capacity 3)"), "msg: {msg}");
    }

    #[test]
    fn test_serde_roundtrip_empty_json() {
        let v: StaticVec<i32, 4> = StaticVec::default();
        let s = serde_json::to_string(&v).unwrap();
        assert_eq!(s, "[]");
        let back: StaticVec<i32, 4> = serde_json::from_str(&s).unwrap();
        assert!(back.is_empty());
    }

    #[test]
    fn test_vecvisitor_expecting_message() {
        let err =
            serde_json::from_str::<StaticVec<i32, 4>>(r#"{"not":"an array"}"#).unwrap_err();
        let msg = err.to_string();
        assert!(
            msg.contains("array or sequence with at most 4 elements"),
            "unexpected error message: {msg}"
        );
    }
}
