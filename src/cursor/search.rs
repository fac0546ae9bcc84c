// src/cursor/search.rs
//! Read-only forward search for byte patterns and numeric values
//!
//! All finders scan from the current byte offset toward the end of the
//! buffer and return the absolute offset of the first match, or `None`.
//! Numeric targets are encoded at the requested width and byte order with
//! the same conversions the scalar codec uses, so a match is exactly a
//! position where the corresponding read would return the target. Searches
//! never move the cursor or touch the buffer.

use super::core::{BitCursor, Endian};

impl BitCursor {
    /// Finds the next occurrence of a byte pattern at or after the cursor.
    ///
    /// An empty needle matches at the current offset.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitcursor::BitCursor;
    ///
    /// let cur = BitCursor::reader(vec![0x01, 0x02, 0x03, 0x04]);
    /// assert_eq!(cur.find_bytes(&[0x03, 0x04]), Some(2));
    /// assert_eq!(cur.find_bytes(&[0x09]), None);
    /// assert_eq!(cur.tell(), 0);
    /// ```
    pub fn find_bytes(&self, needle: &[u8]) -> Option<usize> {
        let start = self.byte_offset;
        if needle.is_empty() {
            return (start <= self.data.len()).then_some(start);
        }
        if start + needle.len() > self.data.len() {
            return None;
        }
        self.data[start..]
            .windows(needle.len())
            .position(|window| window == needle)
            .map(|i| start + i)
    }

    /// Finds the next unsigned byte equal to `value`.
    #[inline]
    pub fn find_u8(&self, value: u8) -> Option<usize> {
        self.find_bytes(&[value])
    }

    /// Finds the next signed byte equal to `value`.
    #[inline]
    pub fn find_i8(&self, value: i8) -> Option<usize> {
        self.find_bytes(&[value as u8])
    }
}

macro_rules! int_finder {
    ($ty:ty, $find_with:ident, $find:ident, $desc:literal) => {
        impl BitCursor {
            #[doc = concat!("Finds the next ", $desc, " equal to `value`, with an explicit byte order.")]
            pub fn $find_with(&self, value: $ty, endian: Endian) -> Option<usize> {
                let raw = match endian {
                    Endian::Big => value.to_be_bytes(),
                    Endian::Little => value.to_le_bytes(),
                };
                self.find_bytes(&raw)
            }

            #[doc = concat!("Finds the next ", $desc, " equal to `value`, using the cursor's default byte order.")]
            #[inline]
            pub fn $find(&self, value: $ty) -> Option<usize> {
                self.$find_with(value, self.endian)
            }
        }
    };
}

int_finder!(u16, find_u16_with, find_u16, "16-bit unsigned integer");
int_finder!(i16, find_i16_with, find_i16, "16-bit signed integer");
int_finder!(u32, find_u32_with, find_u32, "32-bit unsigned integer");
int_finder!(i32, find_i32_with, find_i32, "32-bit signed integer");
int_finder!(u64, find_u64_with, find_u64, "64-bit unsigned integer");
int_finder!(i64, find_i64_with, find_i64, "64-bit signed integer");

impl BitCursor {
    /// Finds the next 32-bit float equal to `value`, with an explicit byte
    /// order.
    ///
    /// A NaN target never matches, per IEEE 754 equality.
    pub fn find_f32_with(&self, value: f32, endian: Endian) -> Option<usize> {
        if value.is_nan() {
            return None;
        }
        let raw = match endian {
            Endian::Big => value.to_bits().to_be_bytes(),
            Endian::Little => value.to_bits().to_le_bytes(),
        };
        self.find_bytes(&raw)
    }

    /// Finds the next 32-bit float using the cursor's default byte order.
    #[inline]
    pub fn find_f32(&self, value: f32) -> Option<usize> {
        self.find_f32_with(value, self.endian)
    }

    /// Finds the next 64-bit float equal to `value`, with an explicit byte
    /// order.
    ///
    /// A NaN target never matches, per IEEE 754 equality.
    pub fn find_f64_with(&self, value: f64, endian: Endian) -> Option<usize> {
        if value.is_nan() {
            return None;
        }
        let raw = match endian {
            Endian::Big => value.to_bits().to_be_bytes(),
            Endian::Little => value.to_bits().to_le_bytes(),
        };
        self.find_bytes(&raw)
    }

    /// Finds the next 64-bit float using the cursor's default byte order.
    #[inline]
    pub fn find_f64(&self, value: f64) -> Option<usize> {
        self.find_f64_with(value, self.endian)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_u8() {
        let cur = BitCursor::reader(vec![0x01, 0x02, 0x03, 0x04]);
        assert_eq!(cur.find_u8(3), Some(2));
        assert_eq!(cur.find_u8(9), None);
    }

    #[test]
    fn test_find_starts_at_cursor() {
        let mut cur = BitCursor::reader(vec![0xAA, 0x01, 0xAA, 0x02]);
        assert_eq!(cur.find_u8(0xAA), Some(0));
        cur.skip(1).unwrap();
        assert_eq!(cur.find_u8(0xAA), Some(2));
    }

    #[test]
    fn test_find_does_not_move_cursor() {
        let mut cur = BitCursor::reader(vec![1, 2, 3, 4]);
        cur.skip(1).unwrap();
        let before = cur.tell();
        cur.find_u16_with(0x0304, Endian::Big);
        cur.find_bytes(&[4]);
        assert_eq!(cur.tell(), before);
    }

    #[test]
    fn test_find_multibyte_respects_endian() {
        let cur = BitCursor::reader(vec![0x12, 0x34, 0x56, 0x78]);
        assert_eq!(cur.find_u16_with(0x3456, Endian::Big), Some(1));
        assert_eq!(cur.find_u16_with(0x5634, Endian::Little), Some(1));
        assert_eq!(cur.find_u16_with(0x3456, Endian::Little), None);
    }

    #[test]
    fn test_find_u64() {
        let mut data = vec![0u8; 3];
        data.extend_from_slice(&0xDEAD_BEEF_CAFE_BABEu64.to_le_bytes());
        let cur = BitCursor::reader(data);
        assert_eq!(cur.find_u64(0xDEAD_BEEF_CAFE_BABE), Some(3));
    }

    #[test]
    fn test_find_float() {
        let mut cur = BitCursor::writer(Vec::new());
        cur.write_u8(0xFF).unwrap();
        cur.write_f32(1.5).unwrap();
        cur.rewind();
        assert_eq!(cur.find_f32(1.5), Some(1));
        assert_eq!(cur.find_f32(2.5), None);
    }

    #[test]
    fn test_nan_never_matches() {
        let mut cur = BitCursor::writer(Vec::new());
        cur.write_f32(f32::NAN).unwrap();
        cur.write_f64(f64::NAN).unwrap();
        cur.rewind();
        assert_eq!(cur.find_f32(f32::NAN), None);
        assert_eq!(cur.find_f64(f64::NAN), None);
    }

    #[test]
    fn test_find_past_end() {
        let mut cur = BitCursor::reader(vec![1, 2]);
        cur.seek(2).unwrap();
        assert_eq!(cur.find_u8(1), None);
        assert_eq!(cur.find_bytes(&[]), Some(2));
    }
}
