// This file is part of static-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::StaticVec;

impl<T: Default, const N: usize> StaticVec<T, N> {
    /// Constructs an empty vector with every slot set to `T::default()`.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Constructs a vector of length `len` whose elements are `T::default()`.
    ///
    /// `len` must not exceed `N`. This is checked by a debug assertion; release
    /// builds clamp the length to `N`.
    #[inline]
    pub fn with_len(len: usize) -> Self {
        let mut v = Self::default();
        v.len = Self::checked_len(len);
        v
    }
}

impl<T: Clone, const N: usize> StaticVec<T, N> {
    /// Constructs an empty vector with the backing buffer filled with `fill`.
    ///
    /// Note: the initial **length** is `0`. Useful for element types without a
    /// `Default` impl.
    #[inline]
    pub fn new_with(fill: T) -> Self {
        Self {
            buf: core::array::from_fn(|_| fill.clone()),
            len: 0,
        }
    }

    /// Constructs a vector of length `len` whose elements are clones of `value`.
    ///
    /// `len` must not exceed `N`; see [`with_len`](StaticVec::with_len).
    #[inline]
    pub fn from_elem(len: usize, value: T) -> Self {
        let mut v = Self::new_with(value);
        v.len = Self::checked_len(len);
        v
    }
}

impl<T: Clone + Default, const N: usize> StaticVec<T, N> {
    /// Constructs a vector holding clones of `items`, in order.
    ///
    /// `items.len()` must not exceed `N`; see [`with_len`](StaticVec::with_len).
    /// Use [`TryFrom<&[T]>`](TryFrom) when the input length is not known to fit.
    #[inline]
    pub fn from_slice(items: &[T]) -> Self {
        let mut v = Self::default();
        let len = Self::checked_len(items.len());
        v.buf[..len].clone_from_slice(&items[..len]);
        v.len = len;
        v
    }
}

impl<T, const N: usize> StaticVec<T, N> {
    // Oversized lengths are a caller bug; clamp so `len <= N` holds regardless.
    #[inline]
    pub(crate) fn checked_len(len: usize) -> usize {
        debug_assert!(len <= N, "length {len} exceeds capacity {N}");
        len.min(N)
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::StaticVec;

    #[test]
    fn test_with_len_defaults_live_slots() {
        let v: StaticVec<i32, 4> = StaticVec::with_len(3);
        assert_eq!(v.as_slice(), &[0, 0, 0]);
    }

    #[test]
    fn test_from_elem_fills_live_slots() {
        let v: StaticVec<i32, 5> = StaticVec::from_elem(3, 7);
        assert_eq!(v.len(), 3);
        assert_eq!(v.as_slice(), &[7, 7, 7]);
    }

    #[test]
    fn test_from_elem_zero_len_is_empty() {
        let v: StaticVec<i32, 5> = StaticVec::from_elem(0, 7);
        assert!(v.is_empty());
    }

    #[test]
    fn test_new_with_starts_empty() {
        #[derive(Clone, Debug, PartialEq)]
        struct NoDefault(u8);

        let v: StaticVec<NoDefault, 3> = StaticVec::new_with(NoDefault(1));
        assert!(v.is_empty());

        let w: StaticVec<NoDefault, 3> = StaticVec::from_elem(2, NoDefault(4));
        assert_eq!(w.as_slice(), &[NoDefault(4), NoDefault(4)]);
    }

    #[test]
    fn test_from_slice_preserves_order() {
        let items = [3, 1, 4, 1, 5];
        let v: StaticVec<i32, 8> = StaticVec::from_slice(&items);
        assert_eq!(v.len(), items.len());
        for (i, x) in items.iter().enumerate() {
            assert_eq!(&v[i], x);
        }
    }

    #[test]
    fn test_from_slice_exactly_full() {
        let v: StaticVec<i32, 3> = StaticVec::from_slice(&[1, 2, 3]);
        assert!(v.is_full());
    }

    #[test]
    fn test_from_empty_slice() {
        let v: StaticVec<i32, 3> = StaticVec::from_slice(&[]);
        assert!(v.is_empty());
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "exceeds capacity")]
    fn test_with_len_over_capacity_asserts() {
        let _ = StaticVec::<i32, 4>::with_len(5);
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "exceeds capacity")]
    fn test_from_elem_over_capacity_asserts() {
        let _ = StaticVec::<i32, 2>::from_elem(3, 1);
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "exceeds capacity")]
    fn test_from_slice_over_capacity_asserts() {
        let _ = StaticVec::<i32, 2>::from_slice(&[1, 2, 3]);
    }

    #[cfg(not(debug_assertions))]
    #[test]
    fn test_oversized_lengths_clamp_in_release() {
        let v = StaticVec::<i32, 2>::from_slice(&[1, 2, 3]);
        assert_eq!(v.as_slice(), &[1, 2]);
        assert_eq!(StaticVec::<i32, 4>::with_len(9).len(), 4);
    }
}
