// src/cursor/splice.rs
//! Buffer surgery and byte-range bitwise transforms
//!
//! Splicing (extract/delete/insert/overwrite/crop) reshapes the buffer
//! around the growth policy; the transforms apply a repeating key or a
//! unary operation over a byte range in place. None of these operate at
//! the bit level.

use super::core::BitCursor;
use crate::error::{CursorError, Result};

impl BitCursor {
    /// Validates `start..end` against the buffer.
    ///
    /// # Panics
    ///
    /// Panics when `start > end`; the range bounds are a caller bug, not a
    /// data condition.
    fn check_range(&self, start: usize, end: usize) -> Result<()> {
        assert!(start <= end, "range start {start} after end {end}");
        self.check(end)
    }

    /// Copies out `start..end` without touching buffer or cursor.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitcursor::BitCursor;
    /// # use bitcursor::CursorError;
    ///
    /// let cur = BitCursor::reader(vec![1, 2, 3, 4, 5]);
    /// assert_eq!(cur.extract(1, 4)?, vec![2, 3, 4]);
    /// # Ok::<(), CursorError>(())
    /// ```
    pub fn extract(&self, start: usize, end: usize) -> Result<Vec<u8>> {
        self.check_range(start, end)?;
        Ok(self.data[start..end].to_vec())
    }

    /// Removes `start..end` from the buffer and returns the removed bytes.
    ///
    /// The cursor is clamped into the shortened buffer.
    pub fn delete(&mut self, start: usize, end: usize) -> Result<Vec<u8>> {
        self.check_range(start, end)?;
        let removed: Vec<u8> = self.data.drain(start..end).collect();
        if self.byte_offset > self.data.len() {
            self.byte_offset = self.data.len();
            self.bit_offset = 0;
        }
        Ok(removed)
    }

    /// Splices `bytes` into the buffer at `at`, shifting the tail.
    ///
    /// Insertion always extends the buffer, so a strict cursor refuses it
    /// with [`CursorError::Capacity`].
    pub fn insert(&mut self, at: usize, bytes: &[u8]) -> Result<()> {
        let size = self.data.len();
        if at > size {
            return Err(CursorError::Capacity { end: at, size });
        }
        if self.strict {
            return Err(CursorError::Capacity {
                end: size + bytes.len(),
                size,
            });
        }
        self.data.splice(at..at, bytes.iter().copied());
        Ok(())
    }

    /// Overwrites bytes in place starting at `at`, without shifting.
    ///
    /// A tail reaching past the end follows the growth policy.
    pub fn overwrite(&mut self, at: usize, bytes: &[u8]) -> Result<()> {
        let end = at + bytes.len();
        self.ensure(end)?;
        self.data[at..end].copy_from_slice(bytes);
        Ok(())
    }

    /// Discards everything outside `start..end` and rewinds the cursor.
    pub fn crop(&mut self, start: usize, end: usize) -> Result<()> {
        self.check_range(start, end)?;
        self.data.truncate(end);
        self.data.drain(..start);
        self.rewind();
        Ok(())
    }

    /// XORs `start..end` with a repeating key.
    pub fn xor_range(&mut self, key: &[u8], start: usize, end: usize) -> Result<()> {
        self.check_range(start, end)?;
        if key.is_empty() {
            return Ok(());
        }
        for (i, byte) in self.data[start..end].iter_mut().enumerate() {
            *byte ^= key[i % key.len()];
        }
        Ok(())
    }

    /// ANDs `start..end` with a repeating key.
    pub fn and_range(&mut self, key: &[u8], start: usize, end: usize) -> Result<()> {
        self.check_range(start, end)?;
        if key.is_empty() {
            return Ok(());
        }
        for (i, byte) in self.data[start..end].iter_mut().enumerate() {
            *byte &= key[i % key.len()];
        }
        Ok(())
    }

    /// ORs `start..end` with a repeating key.
    pub fn or_range(&mut self, key: &[u8], start: usize, end: usize) -> Result<()> {
        self.check_range(start, end)?;
        if key.is_empty() {
            return Ok(());
        }
        for (i, byte) in self.data[start..end].iter_mut().enumerate() {
            *byte |= key[i % key.len()];
        }
        Ok(())
    }

    /// Bitwise-NOTs every byte in `start..end`.
    pub fn not_range(&mut self, start: usize, end: usize) -> Result<()> {
        self.check_range(start, end)?;
        for byte in &mut self.data[start..end] {
            *byte = !*byte;
        }
        Ok(())
    }

    /// Shifts every byte in `start..end` left by `n` bits (per byte, no
    /// carry between bytes).
    pub fn lshift_range(&mut self, n: u32, start: usize, end: usize) -> Result<()> {
        self.check_range(start, end)?;
        for byte in &mut self.data[start..end] {
            *byte = if n < 8 { *byte << n } else { 0 };
        }
        Ok(())
    }

    /// Shifts every byte in `start..end` right by `n` bits (per byte, no
    /// carry between bytes).
    pub fn rshift_range(&mut self, n: u32, start: usize, end: usize) -> Result<()> {
        self.check_range(start, end)?;
        for byte in &mut self.data[start..end] {
            *byte = if n < 8 { *byte >> n } else { 0 };
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract() {
        let cur = BitCursor::reader(vec![1, 2, 3, 4]);
        assert_eq!(cur.extract(0, 2).unwrap(), vec![1, 2]);
        assert_eq!(cur.extract(2, 2).unwrap(), Vec::<u8>::new());
        assert_eq!(
            cur.extract(2, 5).unwrap_err(),
            CursorError::Capacity { end: 5, size: 4 }
        );
    }

    #[test]
    fn test_delete_clamps_cursor() {
        let mut cur = BitCursor::writer(vec![1, 2, 3, 4, 5]);
        cur.seek(5).unwrap();
        assert_eq!(cur.delete(1, 4).unwrap(), vec![2, 3, 4]);
        assert_eq!(cur.as_slice(), &[1, 5]);
        assert_eq!(cur.tell(), 2);
    }

    #[test]
    fn test_insert() {
        let mut cur = BitCursor::writer(vec![1, 4]);
        cur.insert(1, &[2, 3]).unwrap();
        assert_eq!(cur.as_slice(), &[1, 2, 3, 4]);
    }

    #[test]
    fn test_insert_strict_refused() {
        let mut cur = BitCursor::reader(vec![1, 4]);
        assert_eq!(
            cur.insert(1, &[2, 3]).unwrap_err(),
            CursorError::Capacity { end: 4, size: 2 }
        );
        assert_eq!(cur.as_slice(), &[1, 4]);
    }

    #[test]
    fn test_overwrite_grows_tail() {
        let mut cur = BitCursor::writer(vec![1, 2, 3]);
        cur.overwrite(2, &[9, 9]).unwrap();
        assert_eq!(cur.as_slice(), &[1, 2, 9, 9]);
    }

    #[test]
    fn test_crop() {
        let mut cur = BitCursor::writer(vec![1, 2, 3, 4, 5]);
        cur.seek(4).unwrap();
        cur.crop(1, 4).unwrap();
        assert_eq!(cur.as_slice(), &[2, 3, 4]);
        assert_eq!(cur.tell(), 0);
    }

    #[test]
    fn test_xor_repeating_key() {
        let mut cur = BitCursor::writer(vec![0xFF, 0x00, 0xFF, 0x00]);
        cur.xor_range(&[0x0F, 0xF0], 0, 4).unwrap();
        assert_eq!(cur.as_slice(), &[0xF0, 0xF0, 0xF0, 0xF0]);
        // XOR twice restores the original.
        cur.xor_range(&[0x0F, 0xF0], 0, 4).unwrap();
        assert_eq!(cur.as_slice(), &[0xFF, 0x00, 0xFF, 0x00]);
    }

    #[test]
    fn test_and_or_not() {
        let mut cur = BitCursor::writer(vec![0b1010_1010; 2]);
        cur.and_range(&[0b1111_0000], 0, 2).unwrap();
        assert_eq!(cur.as_slice(), &[0b1010_0000, 0b1010_0000]);
        cur.or_range(&[0b0000_0101], 0, 1).unwrap();
        assert_eq!(cur.as_slice()[0], 0b1010_0101);
        cur.not_range(1, 2).unwrap();
        assert_eq!(cur.as_slice()[1], 0b0101_1111);
    }

    #[test]
    fn test_shifts() {
        let mut cur = BitCursor::writer(vec![0b0000_1111, 0b1111_0000]);
        cur.lshift_range(2, 0, 1).unwrap();
        cur.rshift_range(2, 1, 2).unwrap();
        assert_eq!(cur.as_slice(), &[0b0011_1100, 0b0011_1100]);
    }

    #[test]
    fn test_transform_bounds_checked() {
        let mut cur = BitCursor::writer(vec![0u8; 2]);
        assert_eq!(
            cur.not_range(0, 3).unwrap_err(),
            CursorError::Capacity { end: 3, size: 2 }
        );
    }
}
