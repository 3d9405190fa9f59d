// This file is part of static-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for `StaticVec`.
//!
//! Only recoverable conditions live here: a checked position that falls
//! outside the live range, and runtime-sized input that does not fit the
//! capacity. Oversized *statically known* lengths are caller bugs and are
//! caught by debug assertions instead.

// Core imports
use core::{error::Error as CoreError, fmt};

/// Errors returned by checked operations on [`StaticVec`](crate::StaticVec).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// A checked access used a position outside the live range `0..len`.
    OutOfRange {
        /// The requested position.
        pos: usize,
        /// The logical length at the time of the access.
        len: usize,
    },
    /// The input holds more elements than the fixed capacity (`N`).
    Full,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { pos, len } => {
                write!(f, "position {pos} is out of range (len {len})")
            }
            Self::Full => f.write_str("capacity exceeded"),
        }
    }
}

impl CoreError for Error {}

#[cfg(test)]
mod tests {
    // Imports
    use crate::Error;
    use alloc::string::{String, ToString};
    use core::error::Error as CoreError;

    fn takes_error(e: &dyn CoreError) -> String {
        e.to_string()
    }

    #[test]
    fn test_error_is_core_error() {
        let s = takes_error(&Error::OutOfRange { pos: 7, len: 3 });
        assert!(s.contains("out of range"));
    }

    #[test]
    fn test_out_of_range_message_names_position() {
        let e = Error::OutOfRange { pos: 3, len: 3 };
        assert_eq!(e.to_string(), "position 3 is out of range (len 3)");
        assert_eq!(Error::Full.to_string(), "capacity exceeded");
    }
}
