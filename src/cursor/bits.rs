// src/cursor/bits.rs
//! Arbitrary-bit-width integer codec (1..=32 bits)
//!
//! The buffer is treated as a bitstream starting at
//! `byte_offset * 8 + bit_offset`. Values are split into per-byte chunks of
//! `min(remaining, 8 - bit_offset)` bits, which handles runs spanning any
//! number of bytes without alignment special cases. Big-endian packs
//! MSB-first within each byte and takes chunks from the value's high end;
//! little-endian packs LSB-first and takes chunks from the low end. Both
//! orders round-trip to the same integer when read back with the same
//! endianness.
//!
//! Partial bytes are read-modify-written, so bits sharing a byte with a
//! previous write are preserved.

use super::core::{BitCursor, Endian};
use crate::error::{CursorError, Result};

#[inline(always)]
fn chunk_mask(bits: u32) -> u8 {
    ((1u16 << bits) - 1) as u8
}

impl BitCursor {
    /// Reads `bits` bits (0..=32) as an unsigned value, using the cursor's
    /// default byte order.
    ///
    /// `bits == 0` is a no-op returning 0 without moving the cursor. Reads
    /// never grow the buffer: reading past the end is a
    /// [`CursorError::Capacity`] error in both strict and growable mode.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitcursor::BitCursor;
    /// # use bitcursor::CursorError;
    ///
    /// let mut cur = BitCursor::writer(vec![0u8; 2]);
    /// cur.write_bits(0b101, 3)?;
    /// cur.write_bits(0x1FFF, 13)?;
    /// cur.rewind();
    /// assert_eq!(cur.read_bits(3)?, 0b101);
    /// assert_eq!(cur.read_bits(13)?, 0x1FFF);
    /// # Ok::<(), CursorError>(())
    /// ```
    #[inline]
    pub fn read_bits(&mut self, bits: u32) -> Result<u32> {
        self.read_bits_with(bits, self.endian)
    }

    /// Reads `bits` bits as an unsigned value with an explicit byte order.
    pub fn read_bits_with(&mut self, bits: u32, endian: Endian) -> Result<u32> {
        if bits == 0 {
            return Ok(0);
        }
        if bits > 32 {
            return Err(CursorError::BitCount { bits });
        }
        let start = self.byte_offset * 8 + usize::from(self.bit_offset);
        self.check((start + bits as usize).div_ceil(8))?;

        let mut acc: u32 = 0;
        let mut remaining = bits;
        let mut consumed = 0u32;
        while remaining > 0 {
            let bit_in = u32::from(self.bit_offset);
            let avail = remaining.min(8 - bit_in);
            let byte = self.data[self.byte_offset];
            let chunk = match endian {
                Endian::Big => (byte >> (8 - bit_in - avail)) & chunk_mask(avail),
                Endian::Little => (byte >> bit_in) & chunk_mask(avail),
            };
            match endian {
                Endian::Big => acc = (acc << avail) | u32::from(chunk),
                Endian::Little => acc |= u32::from(chunk) << consumed,
            }
            self.advance_bits_raw(avail);
            consumed += avail;
            remaining -= avail;
        }
        Ok(acc)
    }

    /// Reads `bits` bits as a signed value, using the cursor's default byte
    /// order.
    ///
    /// Values narrower than 32 bits are two's-complement sign-extended from
    /// bit `bits - 1`.
    #[inline]
    pub fn read_sbits(&mut self, bits: u32) -> Result<i32> {
        self.read_sbits_with(bits, self.endian)
    }

    /// Reads `bits` bits as a signed value with an explicit byte order.
    pub fn read_sbits_with(&mut self, bits: u32, endian: Endian) -> Result<i32> {
        let raw = self.read_bits_with(bits, endian)?;
        if bits == 0 || bits == 32 {
            return Ok(raw as i32);
        }
        let sign = 1u32 << (bits - 1);
        if raw & sign != 0 {
            Ok((raw | (u32::MAX << bits)) as i32)
        } else {
            Ok(raw as i32)
        }
    }

    /// Writes the lowest `bits` bits (0..=32) of an unsigned value, using
    /// the cursor's default byte order.
    ///
    /// `bits == 0` is a no-op. The whole run is capacity-checked (and, on a
    /// growable cursor, allocated) before any byte is touched.
    ///
    /// # Errors
    ///
    /// [`CursorError::BitCount`] when `bits > 32`,
    /// [`CursorError::ValueRange`] when `value >= 2^bits`, and
    /// [`CursorError::Capacity`] when a strict cursor would write past the
    /// end. On any error the buffer and cursor are unchanged.
    #[inline]
    pub fn write_bits(&mut self, value: u32, bits: u32) -> Result<()> {
        self.write_bits_with(value, bits, self.endian)
    }

    /// Writes the lowest `bits` bits of an unsigned value with an explicit
    /// byte order.
    pub fn write_bits_with(&mut self, value: u32, bits: u32, endian: Endian) -> Result<()> {
        if bits == 0 {
            return Ok(());
        }
        if bits > 32 {
            return Err(CursorError::BitCount { bits });
        }
        if bits < 32 {
            let max = (1u32 << bits) - 1;
            if value > max {
                return Err(CursorError::ValueRange {
                    min: 0,
                    max: i128::from(max),
                    value: i128::from(value),
                });
            }
        }
        self.write_bits_raw(value, bits, endian)
    }

    /// Writes `bits` bits of a signed value, using the cursor's default
    /// byte order.
    #[inline]
    pub fn write_sbits(&mut self, value: i32, bits: u32) -> Result<()> {
        self.write_sbits_with(value, bits, self.endian)
    }

    /// Writes `bits` bits of a signed value with an explicit byte order.
    ///
    /// # Errors
    ///
    /// [`CursorError::ValueRange`] when `value` lies outside
    /// `[-2^(bits-1), 2^(bits-1) - 1]`.
    pub fn write_sbits_with(&mut self, value: i32, bits: u32, endian: Endian) -> Result<()> {
        if bits == 0 {
            return Ok(());
        }
        if bits > 32 {
            return Err(CursorError::BitCount { bits });
        }
        if bits < 32 {
            let min = -(1i64 << (bits - 1));
            let max = (1i64 << (bits - 1)) - 1;
            if i64::from(value) < min || i64::from(value) > max {
                return Err(CursorError::ValueRange {
                    min: i128::from(min),
                    max: i128::from(max),
                    value: i128::from(value),
                });
            }
        }
        // Two's-complement truncation to the requested width.
        let raw = if bits < 32 {
            (value as u32) & ((1u32 << bits) - 1)
        } else {
            value as u32
        };
        self.write_bits_raw(raw, bits, endian)
    }

    /// Packs a pre-validated value, chunk by chunk.
    fn write_bits_raw(&mut self, value: u32, bits: u32, endian: Endian) -> Result<()> {
        let start = self.byte_offset * 8 + usize::from(self.bit_offset);
        self.ensure((start + bits as usize).div_ceil(8))?;

        let mut remaining = bits;
        let mut consumed = 0u32;
        while remaining > 0 {
            let bit_in = u32::from(self.bit_offset);
            let avail = remaining.min(8 - bit_in);
            let mask = chunk_mask(avail);
            let chunk = match endian {
                Endian::Big => ((value >> (remaining - avail)) as u8) & mask,
                Endian::Little => ((value >> consumed) as u8) & mask,
            };
            let shift = match endian {
                Endian::Big => 8 - bit_in - avail,
                Endian::Little => bit_in,
            };
            let byte = &mut self.data[self.byte_offset];
            *byte = (*byte & !(mask << shift)) | (chunk << shift);
            self.advance_bits_raw(avail);
            consumed += avail;
            remaining -= avail;
        }
        Ok(())
    }

    /// Cursor advance within an already-bounds-checked bit run.
    #[inline(always)]
    fn advance_bits_raw(&mut self, bits: u32) {
        debug_assert!(bits <= 8 - u32::from(self.bit_offset));
        let pos = u32::from(self.bit_offset) + bits;
        self.byte_offset += (pos / 8) as usize;
        self.bit_offset = (pos % 8) as u8;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fresh(size: usize, endian: Endian) -> BitCursor {
        let mut cur = BitCursor::writer(vec![0u8; size]);
        cur.set_endian(endian);
        cur
    }

    #[test]
    fn test_roundtrip_all_widths_unsigned() {
        for endian in [Endian::Big, Endian::Little] {
            for bits in 1..=32u32 {
                let max = if bits == 32 { u32::MAX } else { (1 << bits) - 1 };
                for value in [0, 1, max / 2, max] {
                    let mut cur = fresh(8, endian);
                    cur.write_bits(value, bits).unwrap();
                    cur.rewind();
                    assert_eq!(cur.read_bits(bits).unwrap(), value, "{bits} bits {endian:?}");
                }
            }
        }
    }

    #[test]
    fn test_roundtrip_all_widths_signed() {
        for endian in [Endian::Big, Endian::Little] {
            for bits in 1..=32u32 {
                let (min, max) = if bits == 32 {
                    (i32::MIN, i32::MAX)
                } else {
                    (-(1i32 << (bits - 1)), (1i32 << (bits - 1)) - 1)
                };
                for value in [min, -1, 0, max] {
                    if value < min || value > max {
                        continue;
                    }
                    let mut cur = fresh(8, endian);
                    cur.write_sbits(value, bits).unwrap();
                    cur.rewind();
                    assert_eq!(cur.read_sbits(bits).unwrap(), value, "{bits} bits {endian:?}");
                }
            }
        }
    }

    #[test]
    fn test_cross_byte_packing() {
        for endian in [Endian::Big, Endian::Little] {
            let mut cur = fresh(4, endian);
            cur.write_bits(0b101, 3).unwrap();
            cur.write_bits(0x14AB & 0x1FFF, 13).unwrap();
            assert_eq!(cur.tell(), 2);
            assert_eq!(cur.bit_tell(), 0);
            cur.rewind();
            assert_eq!(cur.read_bits(3).unwrap(), 0b101);
            assert_eq!(cur.read_bits(13).unwrap(), 0x14AB & 0x1FFF);
        }
    }

    #[test]
    fn test_bit_placement_convention() {
        // One set bit at position 0: BE lands in the MSB, LE in the LSB.
        let mut cur = fresh(1, Endian::Big);
        cur.write_bits(1, 1).unwrap();
        assert_eq!(cur.as_slice()[0], 0x80);

        let mut cur = fresh(1, Endian::Little);
        cur.write_bits(1, 1).unwrap();
        assert_eq!(cur.as_slice()[0], 0x01);
    }

    #[test]
    fn test_partial_byte_preserved() {
        let mut cur = BitCursor::writer(vec![0xFF]);
        cur.set_endian(Endian::Big);
        cur.skip_bits(2).unwrap();
        cur.write_bits(0, 3).unwrap();
        // Bits 2..5 (from MSB) cleared, the rest untouched.
        assert_eq!(cur.as_slice()[0], 0b1100_0111);
    }

    #[test]
    fn test_sign_extension_five_bits() {
        let mut cur = fresh(2, Endian::Big);
        cur.write_sbits(-16, 5).unwrap();
        cur.write_sbits(15, 5).unwrap();
        cur.rewind();
        assert_eq!(cur.read_sbits(5).unwrap(), -16);
        assert_eq!(cur.read_sbits(5).unwrap(), 15);
    }

    #[test]
    fn test_out_of_range_leaves_buffer_untouched() {
        let mut cur = fresh(2, Endian::Big);
        let err = cur.write_sbits(16, 5).unwrap_err();
        assert_eq!(
            err,
            CursorError::ValueRange {
                min: -16,
                max: 15,
                value: 16
            }
        );
        assert_eq!(cur.as_slice(), &[0, 0]);
        assert_eq!(cur.tell(), 0);
        assert_eq!(cur.bit_tell(), 0);
    }

    #[test]
    fn test_unsigned_range_check() {
        let mut cur = fresh(2, Endian::Little);
        assert_eq!(
            cur.write_bits(8, 3).unwrap_err(),
            CursorError::ValueRange {
                min: 0,
                max: 7,
                value: 8
            }
        );
        cur.write_bits(7, 3).unwrap();
    }

    #[test]
    fn test_zero_bits_is_noop() {
        let mut cur = fresh(1, Endian::Big);
        assert_eq!(cur.read_bits(0).unwrap(), 0);
        cur.write_bits(0, 0).unwrap();
        assert_eq!(cur.tell(), 0);
        assert_eq!(cur.bit_tell(), 0);
    }

    #[test]
    fn test_bit_count_over_32() {
        let mut cur = fresh(8, Endian::Big);
        assert_eq!(
            cur.read_bits(33).unwrap_err(),
            CursorError::BitCount { bits: 33 }
        );
        assert_eq!(
            cur.write_bits(0, 33).unwrap_err(),
            CursorError::BitCount { bits: 33 }
        );
    }

    #[test]
    fn test_read_never_grows() {
        let mut cur = BitCursor::writer(vec![0u8; 1]);
        cur.read_bits(8).unwrap();
        assert_eq!(
            cur.read_bits(1).unwrap_err(),
            CursorError::Capacity { end: 2, size: 1 }
        );
        assert_eq!(cur.len(), 1);
    }

    #[test]
    fn test_strict_write_past_end() {
        let mut cur = BitCursor::reader(vec![0u8; 1]);
        assert_eq!(
            cur.write_bits(0xFFF, 12).unwrap_err(),
            CursorError::Capacity { end: 2, size: 1 }
        );
    }

    #[test]
    fn test_grow_write_past_end() {
        let mut cur = BitCursor::writer(vec![0u8; 1]);
        cur.skip(1).unwrap();
        cur.write_bits(0xFFF, 12).unwrap();
        assert_eq!(cur.len(), 3);
    }

    #[test]
    fn test_cursor_advances_by_exact_bits() {
        let mut cur = fresh(8, Endian::Little);
        cur.write_bits(0, 11).unwrap();
        assert_eq!(cur.tell() * 8 + usize::from(cur.bit_tell()), 11);
        cur.write_bits(0, 6).unwrap();
        assert_eq!(cur.tell() * 8 + usize::from(cur.bit_tell()), 17);
    }
}
