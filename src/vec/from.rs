// This file is part of static-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::StaticVec;

impl<T, const N: usize> From<[T; N]> for StaticVec<T, N> {
    fn from(buf: [T; N]) -> Self {
        Self { buf, len: N }
    }
}

impl<T: Clone, const N: usize> From<&[T; N]> for StaticVec<T, N> {
    fn from(src: &[T; N]) -> Self {
        src.clone().into()
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::StaticVec;

    #[test]
    fn test_from_array_fills_full_capacity() {
        let v: StaticVec<i32, 3> = [1, 2, 3].into();
        assert!(v.is_full());
        assert_eq!(v.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn test_from_array_ref() {
        let arr = [1, 2, 3];
        let v: StaticVec<i32, 3> = (&arr).into();
        assert_eq!(v.len(), 3);
        assert_eq!(v.as_slice(), &arr);
    }
}
