// src/cursor/core.rs
//! Core cursor state, navigation, and the strict-vs-grow capacity policy
//!
//! This module provides the fundamental [`BitCursor`] type: an owned byte
//! buffer plus a bit-precise position (byte offset and sub-byte bit offset),
//! a default endianness, and a strictness flag deciding whether writes past
//! the end grow the buffer or fail.

use crate::error::{CursorError, Result};

/// Byte order used when assembling multi-byte values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Endian {
    /// Most-significant byte first
    Big,
    /// Least-significant byte first
    #[default]
    Little,
}

/// Construction options for [`BitCursor`].
///
/// # Examples
///
/// ```
/// use bitcursor::{BitCursor, CursorOptions, Endian};
///
/// let opts = CursorOptions {
///     endian: Endian::Big,
///     strict: false,
///     ..Default::default()
/// };
/// let cur = BitCursor::with_options(vec![0u8; 8], opts).unwrap();
/// assert_eq!(cur.endian(), Endian::Big);
/// ```
#[derive(Debug, Clone)]
pub struct CursorOptions {
    /// Initial byte offset
    pub byte_offset: usize,
    /// Initial sub-byte bit offset, 0..=7
    pub bit_offset: u8,
    /// Default byte order for operations that don't specify one
    pub endian: Endian,
    /// When true, any access past the end is an error; when false,
    /// writes and seeks past the end grow the buffer
    pub strict: bool,
    /// Over-allocation hint for buffer growth; 0 grows by exactly the deficit
    pub extend_chunk_size: usize,
}

impl Default for CursorOptions {
    fn default() -> Self {
        Self {
            byte_offset: 0,
            bit_offset: 0,
            endian: Endian::Little,
            strict: true,
            extend_chunk_size: 0,
        }
    }
}

/// A positioned reader/writer over an owned byte buffer.
///
/// The cursor tracks a byte offset plus a sub-byte bit offset (0..=7), so
/// values of any width from 1 to 64 bits can be packed back to back. All
/// read and write primitives live on this one type; use
/// [`reader`](Self::reader) or [`writer`](Self::writer) to pick the
/// bounds-checking default (readers are strict, writers grow).
///
/// # Examples
///
/// ```
/// use bitcursor::BitCursor;
/// # use bitcursor::CursorError;
///
/// let mut cur = BitCursor::writer(vec![0u8; 4]);
/// cur.write_u16(0x1234)?;
/// cur.rewind();
/// assert_eq!(cur.read_u16()?, 0x1234);
/// # Ok::<(), CursorError>(())
/// ```
#[derive(Debug, Clone)]
pub struct BitCursor {
    /// Internal data storage
    pub(crate) data: Vec<u8>,
    /// Index of the next byte to access
    pub(crate) byte_offset: usize,
    /// Sub-byte position within the byte at `byte_offset`, always 0..=7
    pub(crate) bit_offset: u8,
    /// Default byte order
    pub(crate) endian: Endian,
    /// Out-of-bounds policy
    pub(crate) strict: bool,
    /// Growth over-allocation hint
    pub(crate) extend_chunk_size: usize,
}

impl BitCursor {
    /// Creates a strict cursor for reading existing data.
    ///
    /// Any access past the end of `data` is a [`CursorError::Capacity`]
    /// error.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitcursor::BitCursor;
    /// # use bitcursor::CursorError;
    ///
    /// let mut cur = BitCursor::reader(vec![0xDE, 0xAD]);
    /// assert_eq!(cur.read_u8()?, 0xDE);
    /// # Ok::<(), CursorError>(())
    /// ```
    pub fn reader(data: impl Into<Vec<u8>>) -> Self {
        Self::from_parts(data.into(), CursorOptions::default())
    }

    /// Creates a growable cursor for producing data.
    ///
    /// Writes and seeks past the end extend the buffer with zero-filled
    /// bytes.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitcursor::BitCursor;
    /// # use bitcursor::CursorError;
    ///
    /// let mut cur = BitCursor::writer(Vec::new());
    /// cur.write_u32(7)?;
    /// assert_eq!(cur.len(), 4);
    /// # Ok::<(), CursorError>(())
    /// ```
    pub fn writer(data: impl Into<Vec<u8>>) -> Self {
        Self::from_parts(
            data.into(),
            CursorOptions {
                strict: false,
                ..Default::default()
            },
        )
    }

    /// Creates a cursor with explicit options.
    ///
    /// # Errors
    ///
    /// Returns [`CursorError::BitOffset`] if `options.bit_offset` is not in
    /// 0..=7, and [`CursorError::Capacity`] if `options.byte_offset` lies
    /// past the end of a strict cursor's data.
    pub fn with_options(data: impl Into<Vec<u8>>, options: CursorOptions) -> Result<Self> {
        if options.bit_offset > 7 {
            return Err(CursorError::BitOffset {
                bit: options.bit_offset,
            });
        }
        let byte_offset = options.byte_offset;
        let bit_offset = options.bit_offset;
        let mut cursor = Self::from_parts(data.into(), options);
        if byte_offset > 0 || bit_offset > 0 {
            // Initial position runs through the same policy as a seek.
            let end = byte_offset + usize::from(bit_offset > 0);
            cursor.ensure(end)?;
            cursor.byte_offset = byte_offset;
            cursor.bit_offset = bit_offset;
        }
        Ok(cursor)
    }

    fn from_parts(data: Vec<u8>, options: CursorOptions) -> Self {
        Self {
            data,
            byte_offset: 0,
            bit_offset: 0,
            endian: options.endian,
            strict: options.strict,
            extend_chunk_size: options.extend_chunk_size,
        }
    }

    /// Returns the buffer size in bytes.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the buffer is empty.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the current byte offset.
    #[inline(always)]
    pub fn tell(&self) -> usize {
        self.byte_offset
    }

    /// Returns the current sub-byte bit offset, 0..=7.
    #[inline(always)]
    pub fn bit_tell(&self) -> u8 {
        self.bit_offset
    }

    /// Returns the number of bytes between the cursor and the end of the
    /// buffer.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitcursor::BitCursor;
    /// # use bitcursor::CursorError;
    ///
    /// let mut cur = BitCursor::reader(vec![0u8; 8]);
    /// cur.skip(3)?;
    /// assert_eq!(cur.remaining(), 5);
    /// # Ok::<(), CursorError>(())
    /// ```
    #[inline(always)]
    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.byte_offset)
    }

    /// Returns the default byte order.
    #[inline(always)]
    pub fn endian(&self) -> Endian {
        self.endian
    }

    /// Sets the default byte order.
    #[inline]
    pub fn set_endian(&mut self, endian: Endian) {
        self.endian = endian;
    }

    /// Returns `true` if out-of-bounds access is a hard error.
    #[inline(always)]
    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Toggles strict mode.
    #[inline]
    pub fn set_strict(&mut self, strict: bool) {
        self.strict = strict;
    }

    /// Moves the cursor to an absolute byte offset and clears the bit
    /// offset.
    ///
    /// Seeking past the end follows the capacity policy: a strict cursor
    /// errors, a growable one extends the buffer with zeros.
    ///
    /// # Errors
    ///
    /// Returns [`CursorError::Capacity`] in strict mode when `pos` exceeds
    /// the buffer size.
    pub fn seek(&mut self, pos: usize) -> Result<()> {
        self.ensure(pos)?;
        self.byte_offset = pos;
        self.bit_offset = 0;
        Ok(())
    }

    /// Advances the cursor by `n` bytes, clearing the bit offset.
    ///
    /// Follows the same capacity policy as [`seek`](Self::seek).
    pub fn skip(&mut self, n: usize) -> Result<()> {
        self.seek(self.byte_offset + n)
    }

    /// Advances the cursor by `n` bits.
    ///
    /// Follows the same capacity policy as [`seek`](Self::seek): the byte
    /// containing the final bit position must exist.
    pub fn skip_bits(&mut self, n: u32) -> Result<()> {
        let pos = self.byte_offset * 8 + usize::from(self.bit_offset) + n as usize;
        self.ensure(pos.div_ceil(8))?;
        self.byte_offset = pos / 8;
        self.bit_offset = (pos % 8) as u8;
        Ok(())
    }

    /// Moves the cursor back to the start of the buffer.
    #[inline]
    pub fn rewind(&mut self) {
        self.byte_offset = 0;
        self.bit_offset = 0;
    }

    /// Advances to the next byte boundary if a partial byte is pending.
    #[inline]
    pub fn align(&mut self) {
        if self.bit_offset > 0 {
            self.byte_offset += 1;
            self.bit_offset = 0;
        }
    }

    /// Resets the cursor position without touching the buffer.
    #[inline]
    pub fn reset(&mut self) {
        self.rewind();
    }

    /// Consumes the cursor and returns the underlying buffer.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitcursor::BitCursor;
    /// # use bitcursor::CursorError;
    ///
    /// let mut cur = BitCursor::writer(Vec::new());
    /// cur.write_u8(0xAB)?;
    /// assert_eq!(cur.close(), vec![0xAB]);
    /// # Ok::<(), CursorError>(())
    /// ```
    pub fn close(self) -> Vec<u8> {
        self.data
    }

    /// Returns the full buffer contents.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Returns the full buffer contents mutably.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Write-path capacity policy: make `end` bytes addressable.
    ///
    /// No-op when the buffer is already large enough. Otherwise a strict
    /// cursor fails, and a growable one zero-extends by the deficit (or by
    /// `extend_chunk_size` when that over-allocates further).
    pub(crate) fn ensure(&mut self, end: usize) -> Result<()> {
        let size = self.data.len();
        if end <= size {
            return Ok(());
        }
        if self.strict {
            return Err(CursorError::Capacity { end, size });
        }
        let target = if self.extend_chunk_size > 0 {
            end.max(size + self.extend_chunk_size)
        } else {
            end
        };
        self.data.resize(target, 0);
        Ok(())
    }

    /// Read-path capacity check: reads never grow, in either mode.
    #[inline]
    pub(crate) fn check(&self, end: usize) -> Result<()> {
        if end > self.data.len() {
            return Err(CursorError::Capacity {
                end,
                size: self.data.len(),
            });
        }
        Ok(())
    }
}

impl AsRef<[u8]> for BitCursor {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}
