// src/cursor/scalar.rs
//! Byte-aligned scalar codec: integers, floats, and raw byte runs
//!
//! Every primitive here forces byte alignment on entry (a pending sub-byte
//! bit offset advances to the next byte boundary, so a scalar write never
//! clobbers bits already packed into a partial byte) and leaves the bit
//! offset at 0. Multi-byte values are assembled with the native
//! `from_be_bytes`/`from_le_bytes` conversions; 16-bit floats are decoded
//! and encoded field by field since the language has no native half type.

use super::core::{BitCursor, Endian};
use crate::error::{CursorError, Result};

/// Largest finite magnitude representable as an IEEE 754 half float.
const F16_MAX: f32 = 65504.0;

impl BitCursor {
    /// Aligned read of exactly `N` bytes, advancing the cursor.
    #[inline]
    pub(crate) fn take<const N: usize>(&mut self) -> Result<[u8; N]> {
        let start = self.byte_offset + usize::from(self.bit_offset > 0);
        let end = start + N;
        self.check(end)?;
        let mut out = [0u8; N];
        out.copy_from_slice(&self.data[start..end]);
        self.byte_offset = end;
        self.bit_offset = 0;
        Ok(out)
    }

    /// Aligned write of `bytes`, growing per the capacity policy.
    #[inline]
    pub(crate) fn put(&mut self, bytes: &[u8]) -> Result<()> {
        let start = self.byte_offset + usize::from(self.bit_offset > 0);
        let end = start + bytes.len();
        self.ensure(end)?;
        self.data[start..end].copy_from_slice(bytes);
        self.byte_offset = end;
        self.bit_offset = 0;
        Ok(())
    }

    /// Reads an unsigned byte.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitcursor::BitCursor;
    /// # use bitcursor::CursorError;
    ///
    /// let mut cur = BitCursor::reader(vec![0xFE]);
    /// assert_eq!(cur.read_u8()?, 0xFE);
    /// # Ok::<(), CursorError>(())
    /// ```
    #[inline]
    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.take::<1>()?[0])
    }

    /// Reads a signed byte.
    #[inline]
    pub fn read_i8(&mut self) -> Result<i8> {
        Ok(self.take::<1>()?[0] as i8)
    }

    /// Writes an unsigned byte.
    #[inline]
    pub fn write_u8(&mut self, value: u8) -> Result<()> {
        self.put(&[value])
    }

    /// Writes a signed byte.
    #[inline]
    pub fn write_i8(&mut self, value: i8) -> Result<()> {
        self.put(&[value as u8])
    }

    /// Reads `n` raw bytes into an owned `Vec`.
    pub fn read_bytes(&mut self, n: usize) -> Result<Vec<u8>> {
        let start = self.byte_offset + usize::from(self.bit_offset > 0);
        let end = start + n;
        self.check(end)?;
        let bytes = self.data[start..end].to_vec();
        self.byte_offset = end;
        self.bit_offset = 0;
        Ok(bytes)
    }

    /// Writes raw bytes.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitcursor::BitCursor;
    /// # use bitcursor::CursorError;
    ///
    /// let mut cur = BitCursor::writer(Vec::new());
    /// cur.write_bytes(b"abc")?;
    /// assert_eq!(cur.close(), b"abc");
    /// # Ok::<(), CursorError>(())
    /// ```
    #[inline]
    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        self.put(bytes)
    }
}

macro_rules! int_codec {
    ($ty:ty, $read_with:ident, $read:ident, $write_with:ident, $write:ident, $n:literal, $desc:literal) => {
        impl BitCursor {
            #[doc = concat!("Reads a ", $desc, " with an explicit byte order.")]
            #[inline]
            pub fn $read_with(&mut self, endian: Endian) -> Result<$ty> {
                let raw = self.take::<$n>()?;
                Ok(match endian {
                    Endian::Big => <$ty>::from_be_bytes(raw),
                    Endian::Little => <$ty>::from_le_bytes(raw),
                })
            }

            #[doc = concat!("Reads a ", $desc, " using the cursor's default byte order.")]
            #[inline]
            pub fn $read(&mut self) -> Result<$ty> {
                self.$read_with(self.endian)
            }

            #[doc = concat!("Writes a ", $desc, " with an explicit byte order.")]
            #[inline]
            pub fn $write_with(&mut self, value: $ty, endian: Endian) -> Result<()> {
                let raw = match endian {
                    Endian::Big => value.to_be_bytes(),
                    Endian::Little => value.to_le_bytes(),
                };
                self.put(&raw)
            }

            #[doc = concat!("Writes a ", $desc, " using the cursor's default byte order.")]
            #[inline]
            pub fn $write(&mut self, value: $ty) -> Result<()> {
                self.$write_with(value, self.endian)
            }
        }
    };
}

int_codec!(u16, read_u16_with, read_u16, write_u16_with, write_u16, 2, "16-bit unsigned integer");
int_codec!(i16, read_i16_with, read_i16, write_i16_with, write_i16, 2, "16-bit signed integer");
int_codec!(u32, read_u32_with, read_u32, write_u32_with, write_u32, 4, "32-bit unsigned integer");
int_codec!(i32, read_i32_with, read_i32, write_i32_with, write_i32, 4, "32-bit signed integer");
int_codec!(u64, read_u64_with, read_u64, write_u64_with, write_u64, 8, "64-bit unsigned integer");
int_codec!(i64, read_i64_with, read_i64, write_i64_with, write_i64, 8, "64-bit signed integer");

impl BitCursor {
    /// Reads a 32-bit float with an explicit byte order.
    #[inline]
    pub fn read_f32_with(&mut self, endian: Endian) -> Result<f32> {
        Ok(f32::from_bits(self.read_u32_with(endian)?))
    }

    /// Reads a 32-bit float using the cursor's default byte order.
    #[inline]
    pub fn read_f32(&mut self) -> Result<f32> {
        self.read_f32_with(self.endian)
    }

    /// Writes a 32-bit float with an explicit byte order.
    #[inline]
    pub fn write_f32_with(&mut self, value: f32, endian: Endian) -> Result<()> {
        self.write_u32_with(value.to_bits(), endian)
    }

    /// Writes a 32-bit float using the cursor's default byte order.
    #[inline]
    pub fn write_f32(&mut self, value: f32) -> Result<()> {
        self.write_f32_with(value, self.endian)
    }

    /// Reads a 64-bit float with an explicit byte order.
    #[inline]
    pub fn read_f64_with(&mut self, endian: Endian) -> Result<f64> {
        Ok(f64::from_bits(self.read_u64_with(endian)?))
    }

    /// Reads a 64-bit float using the cursor's default byte order.
    #[inline]
    pub fn read_f64(&mut self) -> Result<f64> {
        self.read_f64_with(self.endian)
    }

    /// Writes a 64-bit float with an explicit byte order.
    #[inline]
    pub fn write_f64_with(&mut self, value: f64, endian: Endian) -> Result<()> {
        self.write_u64_with(value.to_bits(), endian)
    }

    /// Writes a 64-bit float using the cursor's default byte order.
    #[inline]
    pub fn write_f64(&mut self, value: f64) -> Result<()> {
        self.write_f64_with(value, self.endian)
    }

    /// Reads a 16-bit IEEE 754 half float with an explicit byte order.
    ///
    /// All half-float values are exactly representable as `f32`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitcursor::{BitCursor, Endian};
    /// # use bitcursor::CursorError;
    ///
    /// // 0x3C00 is half-precision 1.0
    /// let mut cur = BitCursor::reader(vec![0x3C, 0x00]);
    /// assert_eq!(cur.read_f16_with(Endian::Big)?, 1.0);
    /// # Ok::<(), CursorError>(())
    /// ```
    #[inline]
    pub fn read_f16_with(&mut self, endian: Endian) -> Result<f32> {
        Ok(decode_f16(self.read_u16_with(endian)?))
    }

    /// Reads a 16-bit half float using the cursor's default byte order.
    #[inline]
    pub fn read_f16(&mut self) -> Result<f32> {
        self.read_f16_with(self.endian)
    }

    /// Writes a 16-bit half float with an explicit byte order.
    ///
    /// # Errors
    ///
    /// Returns [`CursorError::HalfRange`] for finite values whose magnitude
    /// exceeds 65504. Finite values below the smallest subnormal round to
    /// (signed) zero; infinities and NaN encode per IEEE 754.
    pub fn write_f16_with(&mut self, value: f32, endian: Endian) -> Result<()> {
        let bits = encode_f16(value)?;
        self.write_u16_with(bits, endian)
    }

    /// Writes a 16-bit half float using the cursor's default byte order.
    #[inline]
    pub fn write_f16(&mut self, value: f32) -> Result<()> {
        self.write_f16_with(value, self.endian)
    }
}

/// Decodes the raw binary representation of an IEEE 754 half float.
fn decode_f16(binary: u16) -> f32 {
    let exponent = ((binary >> 10) & 0x1F) as i32;
    let fraction = (binary & 0x03FF) as f32;
    let sign = if binary & 0x8000 != 0 { -1.0f32 } else { 1.0 };

    if exponent == 0 {
        // Subnormal or zero; 6.103515625e-5 == 2^-14
        sign * 6.103_515_625e-5 * (fraction / 1024.0)
    } else if exponent == 0x1F {
        if fraction != 0.0 {
            f32::NAN
        } else {
            sign * f32::INFINITY
        }
    } else {
        sign * 2f32.powi(exponent - 15) * (1.0 + fraction / 1024.0)
    }
}

/// Encodes an `f32` as half-float bits, rounding ties to even.
fn encode_f16(value: f32) -> Result<u16> {
    let bits = value.to_bits();
    let sign = ((bits >> 16) & 0x8000) as u16;

    if value.is_nan() {
        return Ok(sign | 0x7E00);
    }
    if value.is_infinite() {
        return Ok(sign | 0x7C00);
    }
    if value.abs() > F16_MAX {
        return Err(CursorError::HalfRange {
            value: f64::from(value),
        });
    }

    let exponent = ((bits >> 23) & 0xFF) as i32 - 127;
    let fraction = bits & 0x007F_FFFF;

    if exponent >= -14 {
        // Normal range for half; drop 13 fraction bits with rounding.
        let mantissa = round_shift(fraction, 13);
        if mantissa == 0x400 {
            // Rounded up past the mantissa; bump the exponent.
            return Ok(sign | (((exponent + 16) as u16) << 10));
        }
        Ok(sign | (((exponent + 15) as u16) << 10) | mantissa as u16)
    } else {
        // Subnormal in half: value == mantissa / 2^10 * 2^-14.
        let full = 0x0080_0000 | fraction;
        let shift = (-exponent - 1) as u32;
        if shift > 24 {
            return Ok(sign);
        }
        let mantissa = round_shift(full, shift);
        Ok(sign | mantissa as u16)
    }
}

/// Right-shifts dropping `shift` bits, rounding half to even.
fn round_shift(value: u32, shift: u32) -> u32 {
    if shift == 0 {
        return value;
    }
    let kept = value >> shift;
    let dropped = value & ((1 << shift) - 1);
    let half = 1 << (shift - 1);
    if dropped > half || (dropped == half && kept & 1 == 1) {
        kept + 1
    } else {
        kept
    }
}
