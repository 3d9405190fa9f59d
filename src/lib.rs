// This file is part of static-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # `static-vec`
//!
//! A `no_std`, fixed-capacity vector with inline storage and **no `unsafe`**.
//!
//! The core type, [`StaticVec<T, N>`], embeds `N` slots of `T` and tracks a
//! logical length `len ∈ 0..=N`. It gives code that knows an upper bound on its
//! element count (per-axis index buffers of a multi-dimensional histogram,
//! small coordinate tuples) vector-like ergonomics without an allocator.
//!
//! ## High-level semantics
//!
//! - Capacity is fixed at compile time (`StaticVec::<T, N>::CAPACITY == N`).
//! - Length is a logical prefix: only indices `< len` are live.
//! - The length is chosen at construction; there is no `push`/`pop`. Build a
//!   correctly sized vector instead of growing one.
//! - No heap allocations are performed.
//!
//! ## Two failure tiers
//!
//! - **Caller bugs** (asking a constructor for more than `N` elements) trip a
//!   debug assertion. Release builds clamp to `N`, so `len <= N` always holds.
//! - **Bad input** is reported through [`Error`]:
//!   - [`StaticVec::at`] returns [`Error::OutOfRange`] for `pos >= len`;
//!   - [`TryFrom<&[T]>`](TryFrom), [`StaticVec::try_from_iter`] and
//!     deserialization return [`Error::Full`] when the input is too long.
//!
//! Plain indexing (`v[i]`, [`StaticVec::front`], [`StaticVec::back`]) is the
//! hot-path tier and panics on misuse, like slice indexing.
//!
//! ## Swapping
//!
//! [`swap`] (and [`StaticVec::swap_with`]) exchange two vectors in
//! `O(max(len_a, len_b))` by swapping slot pairs and then the lengths, instead
//! of moving all `N` slots like [`core::mem::swap`].
//!
//! ## Features
//!
//! - `serde`: `Serialize` / `Deserialize` for `StaticVec<T, N>`. Deserializing
//!   requires `T: Default` and rejects sequences longer than `N`.
//!
//! ## Example
//!
//! ```rust
//! use static_vec::{Error, StaticVec};
//!
//! let mut idx: StaticVec<usize, 4> = StaticVec::with_len(3);
//! idx[0] = 2;
//! idx[2] = 7;
//! assert_eq!(idx.as_slice(), &[2, 0, 7]);
//! assert_eq!(idx.at(3), Err(Error::OutOfRange { pos: 3, len: 3 }));
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(not(test), no_std)]

#[cfg(test)]
extern crate alloc;

// Modules
mod error;
mod index;
mod iter;
#[cfg(feature = "serde")]
mod serde;
mod vec;

// Public exports (crate API surface)
pub use error::Error;
pub use iter::IntoIter;
pub use vec::{StaticVec, swap};
