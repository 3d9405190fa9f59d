// This file is part of static-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::StaticVec;

impl<T: Default, const N: usize> Default for StaticVec<T, N> {
    fn default() -> Self {
        Self {
            buf: core::array::from_fn(|_| T::default()),
            len: 0,
        }
    }
}
