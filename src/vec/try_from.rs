// This file is part of static-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::StaticVec};

impl<T: Clone + Default, const N: usize> TryFrom<&[T]> for StaticVec<T, N> {
    type Error = Error;
    fn try_from(src: &[T]) -> Result<Self, Error> {
        if src.len() > N {
            return Err(Error::Full);
        }
        Ok(Self::from_slice(src))
    }
}

impl<T: Default, const N: usize> StaticVec<T, N> {
    /// Tries to construct from an iterator, erroring with [`Error::Full`] if it would overflow.
    ///
    /// Semantics:
    /// - Elements are stored in iterator order.
    /// - On the first element that would exceed capacity `N`, this returns `Err(Error::Full)`
    ///   and drops the elements collected so far.
    /// - The source iterator may be left partially consumed (it stops at the first overflow).
    #[inline]
    pub fn try_from_iter<I: IntoIterator<Item = T>>(iter: I) -> Result<Self, Error> {
        let mut v = Self::default();
        for item in iter {
            v.try_push(item)?;
        }
        Ok(v)
    }
}

impl<T, const N: usize> StaticVec<T, N> {
    // Construction-time append; not part of the public API.
    #[inline]
    pub(crate) fn try_push(&mut self, value: T) -> Result<(), Error> {
        let slot = self.buf.get_mut(self.len).ok_or(Error::Full)?;
        *slot = value;
        self.len += 1;
        Ok(())
    }
}
