// This file is part of static-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::StaticVec;

impl<T, const N: usize> StaticVec<T, N> {
    /// Exchanges the contents of `self` and `other`.
    ///
    /// Slots `0..max(self.len(), other.len())` are swapped pairwise with
    /// [`core::mem::swap`], then the two lengths are exchanged. Every slot
    /// that is live after the swap therefore holds the value it held on the
    /// other side before it. Slots that fall out of the live range may keep
    /// stale values.
    ///
    /// Runs in `O(max(len_a, len_b))` and never panics.
    #[inline]
    pub fn swap_with(&mut self, other: &mut Self) {
        let span = self.len.max(other.len);
        for (a, b) in self.buf[..span].iter_mut().zip(&mut other.buf[..span]) {
            core::mem::swap(a, b);
        }
        core::mem::swap(&mut self.len, &mut other.len);
    }
}

/// Exchanges two vectors of the same type in `O(max(len_a, len_b))`.
///
/// Prefer this over [`core::mem::swap`], which moves all `N` slots.
#[inline]
pub fn swap<T, const N: usize>(a: &mut StaticVec<T, N>, b: &mut StaticVec<T, N>) {
    a.swap_with(b);
}
