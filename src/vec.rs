// This file is part of static-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `StaticVec` type and its inherent API.
//!
//! `StaticVec<T, N>` is a fixed-capacity vector whose elements live inline in a
//! `[T; N]` buffer next to a logical length. Reads and writes are restricted to
//! the live prefix `buf[..len]`; the tail slots hold values that are never
//! observable through the public API.
//!
//! No heap allocations are performed.

mod as_ptr;
mod default;
mod from;
mod new;
mod slice;
mod swap_with;
mod try_from;

pub use swap_with::swap;

// Crate imports
use crate::error::Error;

// Core imports
use core::{
    borrow::{Borrow, BorrowMut},
    fmt,
    hash::{Hash, Hasher},
    ops::{Deref, DerefMut},
};

/// A fixed-capacity vector stored inline.
///
/// `StaticVec<T, N>` embeds a buffer of `N` slots and tracks a logical length
/// `len ∈ 0..=N`. It is meant for algorithms that know an upper bound on the
/// element count ahead of time (per-axis index buffers, small coordinate
/// tuples, scratch stacks) and want `Vec`-like ergonomics without touching the
/// allocator.
///
/// # Layout and invariants
///
/// - `buf: [T; N]` holds every slot; `len` counts the live prefix.
/// - `0 <= len <= N` always holds, in release builds too.
/// - Only `buf[..len]` is visible through [`as_slice`](StaticVec::as_slice),
///   indexing, iteration, equality, hashing and formatting.
/// - Slots in `buf[len..]` hold default-, fill- or stale values. They are
///   dropped together with the container.
///
/// # Sizing
///
/// The length is fixed when the container is built:
///
/// - [`new`](StaticVec::new) / [`Default`] → empty;
/// - [`with_len`](StaticVec::with_len) → `s` default values;
/// - [`from_elem`](StaticVec::from_elem) → `s` copies of a value;
/// - [`from_slice`](StaticVec::from_slice), [`From<[T; N]>`](From) → the given
///   elements.
///
/// Requesting more than `N` elements from these constructors is a caller bug:
/// it trips a debug assertion and is clamped to `N` in release builds. When
/// the length comes from runtime data, use [`TryFrom<&[T]>`](TryFrom) or
/// [`try_from_iter`](StaticVec::try_from_iter), which return
/// [`Error::Full`] instead.
///
/// # Access tiers
///
/// - `v[i]`, [`front`](StaticVec::front) and [`back`](StaticVec::back) are the
///   hot-path accessors; misuse panics like slice indexing does.
/// - [`at`](StaticVec::at) / [`at_mut`](StaticVec::at_mut) check the position
///   and report [`Error::OutOfRange`] on failure.
///
/// # Swapping
///
/// [`swap_with`](StaticVec::swap_with) and the free function
/// [`swap`](crate::swap) exchange two containers in `O(max(len_a, len_b))`
/// rather than `O(N)`.
///
/// # Examples
///
/// ```rust
/// use static_vec::StaticVec;
///
/// let mut a: StaticVec<u32, 4> = StaticVec::from_slice(&[1, 2, 3]);
/// assert_eq!(a.len(), 3);
/// assert_eq!(*a.front(), 1);
/// assert_eq!(*a.back(), 3);
/// assert!(a.at(3).is_err());
///
/// a.fill(9);
/// assert_eq!(a.as_slice(), &[9, 9, 9]);
///
/// let mut b: StaticVec<u32, 4> = StaticVec::from_slice(&[5, 6]);
/// static_vec::swap(&mut a, &mut b);
/// assert_eq!(a.as_slice(), &[5, 6]);
/// assert_eq!(b.as_slice(), &[9, 9, 9]);
/// ```
pub struct StaticVec<T, const N: usize> {
    pub(crate) buf: [T; N],
    pub(crate) len: usize,
}

impl<T, const N: usize> StaticVec<T, N> {
    /// The fixed capacity of this vector.
    pub const CAPACITY: usize = N;

    /// Returns the capacity of this vector (always `N`).
    #[inline]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Same as [`capacity`](StaticVec::capacity).
    #[inline]
    pub const fn max_size(&self) -> usize {
        N
    }

    /// Returns the current logical length (`0..=N`).
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if `len == 0`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if `len == N`.
    #[inline]
    pub const fn is_full(&self) -> bool {
        self.len == N
    }

    /// Returns a reference to the element at `pos`.
    ///
    /// Returns [`Error::OutOfRange`] if `pos >= len`.
    #[inline]
    pub fn at(&self, pos: usize) -> Result<&T, Error> {
        let len = self.len;
        self.as_slice()
            .get(pos)
            .ok_or(Error::OutOfRange { pos, len })
    }

    /// Returns a mutable reference to the element at `pos`.
    ///
    /// Returns [`Error::OutOfRange`] if `pos >= len`.
    #[inline]
    pub fn at_mut(&mut self, pos: usize) -> Result<&mut T, Error> {
        let len = self.len;
        self.as_mut_slice()
            .get_mut(pos)
            .ok_or(Error::OutOfRange { pos, len })
    }

    /// Returns `Some(&T)` if `i < len`, otherwise `None`.
    #[inline]
    pub fn get(&self, i: usize) -> Option<&T> {
        self.as_slice().get(i)
    }

    /// Returns `Some(&mut T)` if `i < len`, otherwise `None`.
    #[inline]
    pub fn get_mut(&mut self, i: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(i)
    }

    /// Returns the first element.
    ///
    /// # Panics
    ///
    /// Panics if the vector is empty.
    #[inline]
    pub fn front(&self) -> &T {
        &self.as_slice()[0]
    }

    /// Returns the first element mutably.
    ///
    /// # Panics
    ///
    /// Panics if the vector is empty.
    #[inline]
    pub fn front_mut(&mut self) -> &mut T {
        &mut self.as_mut_slice()[0]
    }

    /// Returns the last element.
    ///
    /// # Panics
    ///
    /// Panics if the vector is empty.
    #[inline]
    pub fn back(&self) -> &T {
        let last = self.back_index();
        &self.as_slice()[last]
    }

    /// Returns the last element mutably.
    ///
    /// # Panics
    ///
    /// Panics if the vector is empty.
    #[inline]
    pub fn back_mut(&mut self) -> &mut T {
        let last = self.back_index();
        &mut self.as_mut_slice()[last]
    }

    // `usize::MAX` on an empty vector, which the slice index then rejects.
    #[inline]
    fn back_index(&self) -> usize {
        self.len.wrapping_sub(1)
    }

    // iterators
    /// Shorthand for `self.as_slice().iter()`.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Shorthand for `self.as_mut_slice().iter_mut()`.
    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Overwrites every live element with a clone of `value`, front to back.
    ///
    /// The length is unchanged; on an empty vector this does nothing.
    #[inline]
    pub fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        self.as_mut_slice().fill(value);
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for StaticVec<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticVec")
            .field("len", &self.len)
            .field("elements", &self.as_slice())
            .finish()
    }
}

impl<T: PartialEq, const N: usize> PartialEq for StaticVec<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}
impl<T: Eq, const N: usize> Eq for StaticVec<T, N> {}
impl<T: Ord, const N: usize> Ord for StaticVec<T, N> {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}
impl<T: PartialOrd, const N: usize> PartialOrd for StaticVec<T, N> {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}
impl<T: Hash, const N: usize> Hash for StaticVec<T, N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl<T: Copy, const N: usize> Copy for StaticVec<T, N> {}
impl<T: Clone, const N: usize> Clone for StaticVec<T, N> {
    fn clone(&self) -> Self {
        Self {
            buf: self.buf.clone(),
            len: self.len,
        }
    }
}

impl<T, const N: usize> Deref for StaticVec<T, N> {
    type Target = [T];
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}
impl<T, const N: usize> DerefMut for StaticVec<T, N> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T, const N: usize> AsRef<[T]> for StaticVec<T, N> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T, const N: usize> AsMut<[T]> for StaticVec<T, N> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

// Borrow ergonomics (treat as a slice)
impl<T, const N: usize> Borrow<[T]> for StaticVec<T, N> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T, const N: usize> BorrowMut<[T]> for StaticVec<T, N> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}
