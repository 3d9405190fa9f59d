// This file is part of static-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::StaticVec;

impl<T, const N: usize> StaticVec<T, N> {
    /// Returns a raw pointer to the first slot of the backing buffer.
    ///
    /// Only `ptr.add(i)` for `i < len` refers to a live element. Slots past
    /// `len` hold stale values and are not guaranteed to be zeroed or
    /// defaulted; callers pairing this pointer with [`len`](StaticVec::len)
    /// must not read beyond it.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.buf.as_ptr()
    }

    /// Returns a mutable raw pointer to the first slot of the backing buffer.
    ///
    /// Writes past `len` do not change the logical contents of the vector.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.buf.as_mut_ptr()
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::StaticVec;

    #[test]
    fn test_as_ptr_and_as_mut_ptr() {
        let mut v: StaticVec<u16, 4> = StaticVec::from_slice(&[10, 20]);
        let p_const = v.as_ptr();
        let p_slice = v.as_slice().as_ptr();
        assert_eq!(p_const, p_slice);

        let p_mut = v.as_mut_ptr();
        let p_mut_slice = v.as_mut_slice().as_mut_ptr();
        assert_eq!(p_mut, p_mut_slice);

        v.as_mut_slice()[1] = 21;
        assert_eq!(v.as_slice(), &[10, 21]);
    }

    #[test]
    fn test_as_ptr_on_empty_points_at_storage() {
        let v: StaticVec<u16, 4> = StaticVec::new();
        assert_eq!(v.as_ptr(), v.as_slice().as_ptr());
    }
}
