// This file is part of static-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Indexing support for [`StaticVec`](crate::StaticVec).
//!
//! `Index` and `IndexMut` forward to the live slice for every
//! [`SliceIndex`] form (`usize` and all range kinds):
//! - panics on out-of-range positions or inverted ranges, like slices;
//! - dead slots past `len` are never reachable, even when `len < N`.
//!
//! This is the unchecked tier. Use [`StaticVec::at`](crate::StaticVec::at)
//! when the position may come from untrusted input.

// Crate imports
use crate::vec::StaticVec;

// Core imports
use core::{
    ops::{Index, IndexMut},
    slice::SliceIndex,
};

impl<T, I: SliceIndex<[T]>, const N: usize> Index<I> for StaticVec<T, N> {
    type Output = I::Output;

    #[inline]
    fn index(&self, index: I) -> &Self::Output {
        &self.as_slice()[index]
    }
}

impl<T, I: SliceIndex<[T]>, const N: usize> IndexMut<I> for StaticVec<T, N> {
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        &mut self.as_mut_slice()[index]
    }
}
