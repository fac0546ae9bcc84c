// src/cursor/accessors.rs
//! Named convenience accessors
//!
//! Pure parameter binding over the codec primitives: fixed-endianness
//! scalar names (`read_u32_be`, `write_f64_le`, ...) and the common string
//! shapes. Everything here is generated or one-line delegation; no codec
//! logic lives in this module.

use super::core::{BitCursor, Endian};
use super::strings::{PrefixSize, StringKind, StringOptions};
use crate::error::Result;

macro_rules! endian_accessors {
    ($ty:ty, $read_with:ident, $write_with:ident,
     $read_be:ident, $read_le:ident, $write_be:ident, $write_le:ident,
     $desc:literal) => {
        impl BitCursor {
            #[doc = concat!("Reads a big-endian ", $desc, ".")]
            #[inline]
            pub fn $read_be(&mut self) -> Result<$ty> {
                self.$read_with(Endian::Big)
            }

            #[doc = concat!("Reads a little-endian ", $desc, ".")]
            #[inline]
            pub fn $read_le(&mut self) -> Result<$ty> {
                self.$read_with(Endian::Little)
            }

            #[doc = concat!("Writes a big-endian ", $desc, ".")]
            #[inline]
            pub fn $write_be(&mut self, value: $ty) -> Result<()> {
                self.$write_with(value, Endian::Big)
            }

            #[doc = concat!("Writes a little-endian ", $desc, ".")]
            #[inline]
            pub fn $write_le(&mut self, value: $ty) -> Result<()> {
                self.$write_with(value, Endian::Little)
            }
        }
    };
}

endian_accessors!(u16, read_u16_with, write_u16_with, read_u16_be, read_u16_le, write_u16_be, write_u16_le, "16-bit unsigned integer");
endian_accessors!(i16, read_i16_with, write_i16_with, read_i16_be, read_i16_le, write_i16_be, write_i16_le, "16-bit signed integer");
endian_accessors!(u32, read_u32_with, write_u32_with, read_u32_be, read_u32_le, write_u32_be, write_u32_le, "32-bit unsigned integer");
endian_accessors!(i32, read_i32_with, write_i32_with, read_i32_be, read_i32_le, write_i32_be, write_i32_le, "32-bit signed integer");
endian_accessors!(u64, read_u64_with, write_u64_with, read_u64_be, read_u64_le, write_u64_be, write_u64_le, "64-bit unsigned integer");
endian_accessors!(i64, read_i64_with, write_i64_with, read_i64_be, read_i64_le, write_i64_be, write_i64_le, "64-bit signed integer");
endian_accessors!(f32, read_f16_with, write_f16_with, read_f16_be, read_f16_le, write_f16_be, write_f16_le, "16-bit half float");
endian_accessors!(f32, read_f32_with, write_f32_with, read_f32_be, read_f32_le, write_f32_be, write_f32_le, "32-bit float");
endian_accessors!(f64, read_f64_with, write_f64_with, read_f64_be, read_f64_le, write_f64_be, write_f64_le, "64-bit float");

impl BitCursor {
    /// Reads a null-terminated UTF-8 string.
    pub fn read_cstr(&mut self) -> Result<String> {
        self.read_string(&StringOptions::default())
    }

    /// Writes a null-terminated UTF-8 string.
    pub fn write_cstr(&mut self, text: &str) -> Result<()> {
        self.write_string(text, &StringOptions::default())
    }

    /// Reads a fixed-length UTF-8 string of `length` bytes, stripping null
    /// padding.
    pub fn read_utf8(&mut self, length: usize) -> Result<String> {
        self.read_string(&StringOptions {
            length: Some(length),
            ..Default::default()
        })
    }

    /// Writes a UTF-8 string padded or truncated to exactly `length` bytes.
    pub fn write_utf8(&mut self, text: &str, length: usize) -> Result<()> {
        self.write_string(
            text,
            &StringOptions {
                length: Some(length),
                ..Default::default()
            },
        )
    }

    /// Reads a Pascal string with the given prefix width.
    pub fn read_pstring(&mut self, prefix: PrefixSize) -> Result<String> {
        self.read_string(&StringOptions {
            kind: StringKind::Pascal,
            prefix,
            ..Default::default()
        })
    }

    /// Writes a Pascal string with the given prefix width.
    pub fn write_pstring(&mut self, text: &str, prefix: PrefixSize) -> Result<()> {
        self.write_string(
            text,
            &StringOptions {
                kind: StringKind::Pascal,
                prefix,
                ..Default::default()
            },
        )
    }

    /// Reads a wide (UTF-16) Pascal string with the given prefix width.
    pub fn read_wpstring(&mut self, prefix: PrefixSize) -> Result<String> {
        self.read_string(&StringOptions {
            kind: StringKind::WidePascal,
            prefix,
            ..Default::default()
        })
    }

    /// Writes a wide (UTF-16) Pascal string with the given prefix width.
    pub fn write_wpstring(&mut self, text: &str, prefix: PrefixSize) -> Result<()> {
        self.write_string(
            text,
            &StringOptions {
                kind: StringKind::WidePascal,
                prefix,
                ..Default::default()
            },
        )
    }
}
