// src/lib.rs
//! # Cursor-Based Binary Buffer Reader/Writer
//!
//! A positioned codec over an owned byte buffer: integers of any width
//! from 1 to 64 bits, IEEE 754 half/single/double floats, and several
//! string encodings, all addressed through one bit-precise cursor.
//!
//! Features:
//! - Bit-level packing across byte boundaries, big- or little-endian,
//!   signed or unsigned
//! - Byte-aligned scalar and string codecs sharing the same cursor and
//!   endianness defaults
//! - Strict mode (out-of-bounds access errors) or growable mode (writes
//!   and seeks past the end zero-extend the buffer)
//! - Read-only search for byte patterns and numeric values
//! - Buffer surgery (insert/delete/overwrite/crop) and byte-range bitwise
//!   transforms
//! - Hex-dump formatting for diagnostics
//!
//! # Example
//!
//! ```
//! use bitcursor::{BitCursor, Endian};
//! # use bitcursor::CursorError;
//!
//! let mut cur = BitCursor::writer(Vec::new());
//! cur.set_endian(Endian::Big);
//! cur.write_bits(0b101, 3)?;
//! cur.write_bits(1234, 13)?;
//! cur.write_cstr("hi")?;
//!
//! cur.rewind();
//! assert_eq!(cur.read_bits(3)?, 0b101);
//! assert_eq!(cur.read_bits(13)?, 1234);
//! assert_eq!(cur.read_cstr()?, "hi");
//! # Ok::<(), CursorError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cursor;
pub mod error;
pub mod hexdump;

// Re-export main types
pub use cursor::{BitCursor, CursorOptions, Endian, PrefixSize, StringKind, StringOptions};
pub use error::{CursorError, Result, ResultExt};
pub use hexdump::hexdump;

/// Commonly used imports.
pub mod prelude {
    pub use crate::cursor::{
        BitCursor, CursorOptions, Endian, PrefixSize, StringKind, StringOptions,
    };
    pub use crate::error::{CursorError, Result, ResultExt};
    pub use crate::hexdump::hexdump;
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_basic_cursor() {
        let mut cur = BitCursor::writer(vec![0u8; 16]);
        cur.write_u32(42).unwrap();
        cur.write_u8(0xFF).unwrap();

        cur.rewind();
        assert_eq!(cur.read_u32().unwrap(), 42);
        assert_eq!(cur.read_u8().unwrap(), 0xFF);
    }

    #[test]
    fn test_mixed_bit_and_byte_access() {
        let mut cur = BitCursor::writer(Vec::new());
        cur.write_bits(0b11, 2).unwrap();
        cur.write_u16_be(0xBEEF).unwrap();
        cur.write_cstr("ok").unwrap();

        cur.rewind();
        assert_eq!(cur.read_bits(2).unwrap(), 0b11);
        assert_eq!(cur.read_u16_be().unwrap(), 0xBEEF);
        assert_eq!(cur.read_cstr().unwrap(), "ok");
    }

    #[test]
    fn test_strict_reader_rejects_growth() {
        let mut cur = BitCursor::reader(vec![0u8; 2]);
        assert!(cur.write_u32(1).is_err());
        assert_eq!(cur.len(), 2);
    }

    #[test]
    fn test_prelude_result_ext() {
        let mut cur = BitCursor::writer(Vec::new());
        let io_result = cur.write_u8(1).into_io();
        assert!(io_result.is_ok());
    }
}
