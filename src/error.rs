// src/error.rs
//! Error types for cursor operations with conversion support

use thiserror::Error;

/// Errors that can occur during cursor operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CursorError {
    /// Access past the end of the buffer (reads always; writes and seeks
    /// in strict mode)
    #[error("access at byte {end} exceeds buffer size {size}")]
    Capacity {
        /// Byte position the operation needed to reach (exclusive)
        end: usize,
        /// Buffer size at the time of the attempt
        size: usize,
    },
    /// Value does not fit the requested bit width and signedness
    #[error("value {value} out of range [{min}, {max}]")]
    ValueRange {
        /// Smallest representable value
        min: i128,
        /// Largest representable value
        max: i128,
        /// The rejected value
        value: i128,
    },
    /// Finite value outside the representable half-float range
    #[error("value {value} not representable as a half float (max magnitude 65504)")]
    HalfRange {
        /// The rejected value
        value: f64,
    },
    /// Bit count outside the supported 0..=32 range
    #[error("bit count {bits} exceeds maximum of 32")]
    BitCount {
        /// The rejected bit count
        bits: u32,
    },
    /// Construction with a sub-byte bit offset outside 0..=7
    #[error("bit offset {bit} outside 0..=7")]
    BitOffset {
        /// The rejected bit offset
        bit: u8,
    },
    /// Pascal string longer than its length prefix can encode
    #[error("string of {actual} units exceeds prefix maximum {max}")]
    PrefixOverflow {
        /// Largest unit count the prefix width can encode
        max: usize,
        /// Unit count of the rejected string
        actual: usize,
    },
    /// Buffer bytes are not valid UTF-8
    #[error("invalid UTF-8 sequence")]
    InvalidUtf8,
    /// Buffer units are not valid UTF-16
    #[error("invalid UTF-16 sequence")]
    InvalidUtf16,
}

/// Convert CursorError to std::io::Error
impl From<CursorError> for std::io::Error {
    fn from(err: CursorError) -> Self {
        use std::io::ErrorKind;
        match err {
            CursorError::Capacity { .. } => std::io::Error::new(ErrorKind::UnexpectedEof, err),
            CursorError::ValueRange { .. }
            | CursorError::HalfRange { .. }
            | CursorError::PrefixOverflow { .. } => {
                std::io::Error::new(ErrorKind::InvalidInput, err)
            }
            CursorError::InvalidUtf8 | CursorError::InvalidUtf16 => {
                std::io::Error::new(ErrorKind::InvalidData, err)
            }
            _ => std::io::Error::other(err),
        }
    }
}

/// Result type alias for cursor operations
///
/// Note: when mixing with other Result types (like anyhow::Result),
/// either qualify the type (`bitcursor::Result<T>`) or use the
/// conversion traits.
pub type Result<T> = std::result::Result<T, CursorError>;

/// Extension trait for converting Results between different error types
pub trait ResultExt<T> {
    /// Convert to anyhow::Result
    #[cfg(feature = "anyhow")]
    fn into_anyhow(self) -> anyhow::Result<T>;

    /// Convert to io::Result
    fn into_io(self) -> std::io::Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    #[cfg(feature = "anyhow")]
    fn into_anyhow(self) -> anyhow::Result<T> {
        self.map_err(|e| e.into())
    }

    fn into_io(self) -> std::io::Result<T> {
        self.map_err(|e| e.into())
    }
}
