// This file is part of static-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Iterator support for [`StaticVec`](crate::StaticVec).
//!
//! - `IntoIter<T, N>` yields the live elements by value and supports
//!   `DoubleEndedIterator`, `ExactSizeIterator`, and `FusedIterator`.
//! - `&StaticVec` and `&mut StaticVec` iterate as slices.
//!
//! Every view here borrows or consumes the vector, so the borrow checker
//! rules out iterating across a swap or reconstruction.

// Crate imports
use crate::vec::StaticVec;

// Core imports
use core::{array, iter::FusedIterator, iter::Take};

/// Owned iterator returned by `StaticVec::into_iter()`.
///
/// Yields elements by value from front to back. Dead slots are dropped with
/// the iterator without being yielded.
pub struct IntoIter<T, const N: usize> {
    inner: Take<array::IntoIter<T, N>>,
}

impl<T, const N: usize> Iterator for IntoIter<T, N> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }

    #[inline]
    fn nth(&mut self, n: usize) -> Option<T> {
        self.inner.nth(n)
    }
}

impl<T, const N: usize> DoubleEndedIterator for IntoIter<T, N> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.inner.next_back()
    }

    #[inline]
    fn nth_back(&mut self, n: usize) -> Option<T> {
        self.inner.nth_back(n)
    }
}
impl<T, const N: usize> FusedIterator for IntoIter<T, N> {}
impl<T, const N: usize> ExactSizeIterator for IntoIter<T, N> {}

impl<'a, T, const N: usize> IntoIterator for &'a StaticVec<T, N> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}
impl<'a, T, const N: usize> IntoIterator for &'a mut StaticVec<T, N> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}
impl<T, const N: usize> IntoIterator for StaticVec<T, N> {
    type Item = T;
    type IntoIter = IntoIter<T, N>;
    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.buf.into_iter().take(self.len),
        }
    }
}
