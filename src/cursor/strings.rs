// src/cursor/strings.rs
//! String codec: delimited and length-prefixed text in UTF-8 or UTF-16
//!
//! Built strictly on top of the scalar codec, so endianness and capacity
//! behavior stay consistent with scalar reads and writes. Four kinds are
//! supported:
//!
//! - `Utf8` / `Utf16`: terminator- or length-delimited runs of 8-bit or
//!   16-bit units.
//! - `Pascal` / `WidePascal`: a 1/2/4-byte unsigned length prefix followed
//!   by exactly that many 8-bit or 16-bit units, no terminator.

use super::core::{BitCursor, Endian};
use crate::error::{CursorError, Result};

/// String encoding kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StringKind {
    /// Delimited run of bytes, decoded as UTF-8
    #[default]
    Utf8,
    /// Delimited run of 16-bit units, decoded as UTF-16
    Utf16,
    /// Length-prefixed run of bytes, decoded as UTF-8
    Pascal,
    /// Length-prefixed run of 16-bit units, decoded as UTF-16
    WidePascal,
}

/// Width of the Pascal length prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PrefixSize {
    /// 1-byte prefix, up to 255 units
    #[default]
    One,
    /// 2-byte prefix, up to 65535 units
    Two,
    /// 4-byte prefix, up to 4294967295 units
    Four,
}

impl PrefixSize {
    /// Largest unit count the prefix can encode.
    pub fn max_units(self) -> usize {
        match self {
            PrefixSize::One => u8::MAX as usize,
            PrefixSize::Two => u16::MAX as usize,
            PrefixSize::Four => u32::MAX as usize,
        }
    }
}

/// Options for [`BitCursor::read_string`] and [`BitCursor::write_string`].
///
/// # Examples
///
/// ```
/// use bitcursor::{BitCursor, StringKind, StringOptions};
/// # use bitcursor::CursorError;
///
/// let mut cur = BitCursor::writer(Vec::new());
/// let opts = StringOptions {
///     kind: StringKind::Pascal,
///     ..Default::default()
/// };
/// cur.write_string("AB", &opts)?;
/// assert_eq!(cur.as_slice(), &[0x02, 0x41, 0x42]);
/// # Ok::<(), CursorError>(())
/// ```
#[derive(Debug, Clone)]
pub struct StringOptions {
    /// Encoding kind
    pub kind: StringKind,
    /// Fixed unit count for delimited strings: reads consume exactly this
    /// many units, writes pad or truncate to it (and append no terminator)
    pub length: Option<usize>,
    /// Delimiter unit for delimited strings; defaults to 0 when neither
    /// `length` nor `terminator` is given
    pub terminator: Option<u32>,
    /// Drop null units from decoded results (default true)
    pub strip_null: bool,
    /// Length prefix width for Pascal kinds
    pub prefix: PrefixSize,
    /// Byte order override; `None` uses the cursor default
    pub endian: Option<Endian>,
}

impl Default for StringOptions {
    fn default() -> Self {
        Self {
            kind: StringKind::Utf8,
            length: None,
            terminator: None,
            strip_null: true,
            prefix: PrefixSize::One,
            endian: None,
        }
    }
}

impl StringOptions {
    /// Effective terminator unit for a delimited read or write.
    fn effective_terminator(&self) -> Option<u32> {
        match (self.length, self.terminator) {
            (_, Some(t)) => Some(t),
            (None, None) => Some(0),
            (Some(_), None) => None,
        }
    }
}

impl BitCursor {
    /// Reads a string according to `opts`.
    ///
    /// Delimited kinds consume units until the fixed `length` is exhausted
    /// or the terminator unit is seen (the terminator is consumed but not
    /// included); a run that reaches the end of the buffer without a
    /// terminator yields the units read so far. Pascal kinds read the
    /// length prefix through the scalar codec and then exactly that many
    /// units.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitcursor::{BitCursor, StringOptions};
    /// # use bitcursor::CursorError;
    ///
    /// let mut cur = BitCursor::reader(vec![0x68, 0x69, 0x00, 0xFF]);
    /// assert_eq!(cur.read_string(&StringOptions::default())?, "hi");
    /// assert_eq!(cur.tell(), 3);
    /// # Ok::<(), CursorError>(())
    /// ```
    pub fn read_string(&mut self, opts: &StringOptions) -> Result<String> {
        let endian = opts.endian.unwrap_or(self.endian);
        match opts.kind {
            StringKind::Utf8 => {
                let units = self.read_delimited_narrow(opts)?;
                String::from_utf8(units).map_err(|_| CursorError::InvalidUtf8)
            }
            StringKind::Utf16 => {
                let units = self.read_delimited_wide(opts, endian)?;
                String::from_utf16(&units).map_err(|_| CursorError::InvalidUtf16)
            }
            StringKind::Pascal => {
                let count = self.read_prefix(opts.prefix, endian)?;
                let mut units = self.read_bytes(count)?;
                if opts.strip_null {
                    units.retain(|&u| u != 0);
                }
                String::from_utf8(units).map_err(|_| CursorError::InvalidUtf8)
            }
            StringKind::WidePascal => {
                let count = self.read_prefix(opts.prefix, endian)?;
                let mut units = Vec::with_capacity(count);
                for _ in 0..count {
                    units.push(self.read_u16_with(endian)?);
                }
                if opts.strip_null {
                    units.retain(|&u| u != 0);
                }
                String::from_utf16(&units).map_err(|_| CursorError::InvalidUtf16)
            }
        }
    }

    /// Writes a string according to `opts`.
    ///
    /// The full encoded run (prefix, units, terminator) is assembled and
    /// capacity-checked before any byte is written, so a strict-mode
    /// failure leaves the buffer untouched.
    ///
    /// # Errors
    ///
    /// [`CursorError::PrefixOverflow`] when a Pascal string has more units
    /// than its prefix can encode; [`CursorError::Capacity`] per the
    /// strict-vs-grow policy.
    pub fn write_string(&mut self, text: &str, opts: &StringOptions) -> Result<()> {
        let endian = opts.endian.unwrap_or(self.endian);
        let encoded = match opts.kind {
            StringKind::Utf8 => {
                let mut units = text.as_bytes().to_vec();
                match opts.length {
                    Some(len) => units.resize(len, 0),
                    None => units.push(opts.effective_terminator().unwrap_or(0) as u8),
                }
                units
            }
            StringKind::Utf16 => {
                let mut units: Vec<u16> = text.encode_utf16().collect();
                match opts.length {
                    Some(len) => units.resize(len, 0),
                    None => units.push(opts.effective_terminator().unwrap_or(0) as u16),
                }
                wide_to_bytes(&units, endian)
            }
            StringKind::Pascal => {
                let units = text.as_bytes();
                let mut out = prefix_bytes(units.len(), opts.prefix, endian)?;
                out.extend_from_slice(units);
                out
            }
            StringKind::WidePascal => {
                let units: Vec<u16> = text.encode_utf16().collect();
                let mut out = prefix_bytes(units.len(), opts.prefix, endian)?;
                out.extend_from_slice(&wide_to_bytes(&units, endian));
                out
            }
        };
        self.put(&encoded)
    }

    /// Delimited read of 8-bit units.
    fn read_delimited_narrow(&mut self, opts: &StringOptions) -> Result<Vec<u8>> {
        let terminator = opts.effective_terminator();
        let mut units = Vec::new();
        let mut consumed = 0usize;
        loop {
            if opts.length.is_some_and(|l| consumed >= l) {
                break;
            }
            // A terminator scan that reaches the end of the buffer stops
            // there; fixed-length reads past the end are capacity errors.
            if opts.length.is_none() && self.at_end(1) {
                break;
            }
            let unit = self.read_u8()?;
            consumed += 1;
            if terminator == Some(u32::from(unit)) {
                break;
            }
            units.push(unit);
        }
        if opts.strip_null {
            units.retain(|&u| u != 0);
        }
        Ok(units)
    }

    /// Delimited read of 16-bit units.
    fn read_delimited_wide(&mut self, opts: &StringOptions, endian: Endian) -> Result<Vec<u16>> {
        let terminator = opts.effective_terminator();
        let mut units = Vec::new();
        let mut consumed = 0usize;
        loop {
            if opts.length.is_some_and(|l| consumed >= l) {
                break;
            }
            if opts.length.is_none() && self.at_end(2) {
                break;
            }
            let unit = self.read_u16_with(endian)?;
            consumed += 1;
            if terminator == Some(u32::from(unit)) {
                break;
            }
            units.push(unit);
        }
        if opts.strip_null {
            units.retain(|&u| u != 0);
        }
        Ok(units)
    }

    /// True when fewer than `units` bytes remain from the aligned position.
    fn at_end(&self, units: usize) -> bool {
        let start = self.byte_offset + usize::from(self.bit_offset > 0);
        start + units > self.data.len()
    }

    /// Reads the unsigned Pascal length prefix through the scalar codec.
    fn read_prefix(&mut self, prefix: PrefixSize, endian: Endian) -> Result<usize> {
        Ok(match prefix {
            PrefixSize::One => usize::from(self.read_u8()?),
            PrefixSize::Two => usize::from(self.read_u16_with(endian)?),
            PrefixSize::Four => self.read_u32_with(endian)? as usize,
        })
    }
}

fn wide_to_bytes(units: &[u16], endian: Endian) -> Vec<u8> {
    units
        .iter()
        .flat_map(|u| match endian {
            Endian::Big => u.to_be_bytes(),
            Endian::Little => u.to_le_bytes(),
        })
        .collect()
}

fn prefix_bytes(count: usize, prefix: PrefixSize, endian: Endian) -> Result<Vec<u8>> {
    if count > prefix.max_units() {
        return Err(CursorError::PrefixOverflow {
            max: prefix.max_units(),
            actual: count,
        });
    }
    Ok(match (prefix, endian) {
        (PrefixSize::One, _) => vec![count as u8],
        (PrefixSize::Two, Endian::Big) => (count as u16).to_be_bytes().to_vec(),
        (PrefixSize::Two, Endian::Little) => (count as u16).to_le_bytes().to_vec(),
        (PrefixSize::Four, Endian::Big) => (count as u32).to_be_bytes().to_vec(),
        (PrefixSize::Four, Endian::Little) => (count as u32).to_le_bytes().to_vec(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_terminated_utf8() {
        let mut cur = BitCursor::writer(vec![0u8; 10]);
        cur.write_string("hi", &StringOptions::default()).unwrap();
        assert_eq!(&cur.as_slice()[..3], &[0x68, 0x69, 0x00]);
        cur.rewind();
        assert_eq!(cur.read_string(&StringOptions::default()).unwrap(), "hi");
        assert_eq!(cur.tell(), 3);
    }

    #[test]
    fn test_pascal_one_byte_prefix() {
        let opts = StringOptions {
            kind: StringKind::Pascal,
            ..Default::default()
        };
        let mut cur = BitCursor::writer(Vec::new());
        cur.write_string("AB", &opts).unwrap();
        assert_eq!(cur.as_slice(), &[0x02, 0x41, 0x42]);
        cur.rewind();
        assert_eq!(cur.read_string(&opts).unwrap(), "AB");
    }

    #[test]
    fn test_fixed_length_padding() {
        let opts = StringOptions {
            length: Some(4),
            ..Default::default()
        };
        let mut cur = BitCursor::writer(Vec::new());
        cur.write_string("x", &opts).unwrap();
        assert_eq!(cur.as_slice(), &[0x78, 0x00, 0x00, 0x00]);
        cur.rewind();
        assert_eq!(cur.read_string(&opts).unwrap(), "x");
        assert_eq!(cur.tell(), 4);
    }

    #[test]
    fn test_fixed_length_truncates() {
        let opts = StringOptions {
            length: Some(3),
            ..Default::default()
        };
        let mut cur = BitCursor::writer(Vec::new());
        cur.write_string("hello", &opts).unwrap();
        assert_eq!(cur.as_slice(), b"hel");
    }

    #[test]
    fn test_custom_terminator() {
        let opts = StringOptions {
            terminator: Some(u32::from(b'\n')),
            strip_null: false,
            ..Default::default()
        };
        let mut cur = BitCursor::writer(Vec::new());
        cur.write_string("line", &opts).unwrap();
        assert_eq!(cur.as_slice(), b"line\n");
        cur.rewind();
        assert_eq!(cur.read_string(&opts).unwrap(), "line");
    }

    #[test]
    fn test_unterminated_read_stops_at_end() {
        let mut cur = BitCursor::reader(b"abc".to_vec());
        assert_eq!(cur.read_string(&StringOptions::default()).unwrap(), "abc");
        assert_eq!(cur.remaining(), 0);
    }

    #[test]
    fn test_utf16_roundtrip_both_endians() {
        for endian in [Endian::Big, Endian::Little] {
            let opts = StringOptions {
                kind: StringKind::Utf16,
                endian: Some(endian),
                ..Default::default()
            };
            let mut cur = BitCursor::writer(Vec::new());
            cur.write_string("héllo", &opts).unwrap();
            cur.rewind();
            assert_eq!(cur.read_string(&opts).unwrap(), "héllo");
        }
    }

    #[test]
    fn test_utf16_byte_layout() {
        let opts = StringOptions {
            kind: StringKind::Utf16,
            endian: Some(Endian::Big),
            ..Default::default()
        };
        let mut cur = BitCursor::writer(Vec::new());
        cur.write_string("A", &opts).unwrap();
        assert_eq!(cur.as_slice(), &[0x00, 0x41, 0x00, 0x00]);
    }

    #[test]
    fn test_wide_pascal() {
        let opts = StringOptions {
            kind: StringKind::WidePascal,
            prefix: PrefixSize::Two,
            endian: Some(Endian::Little),
            ..Default::default()
        };
        let mut cur = BitCursor::writer(Vec::new());
        cur.write_string("ok", &opts).unwrap();
        // 2 units, then 'o' and 'k' as little-endian u16
        assert_eq!(cur.as_slice(), &[0x02, 0x00, 0x6F, 0x00, 0x6B, 0x00]);
        cur.rewind();
        assert_eq!(cur.read_string(&opts).unwrap(), "ok");
    }

    #[test]
    fn test_pascal_prefix_overflow() {
        let opts = StringOptions {
            kind: StringKind::Pascal,
            prefix: PrefixSize::One,
            ..Default::default()
        };
        let long = "x".repeat(256);
        let mut cur = BitCursor::writer(Vec::new());
        let err = cur.write_string(&long, &opts).unwrap_err();
        assert_eq!(
            err,
            CursorError::PrefixOverflow {
                max: 255,
                actual: 256
            }
        );
        assert!(cur.is_empty());
    }

    #[test]
    fn test_strict_write_checked_up_front() {
        let mut cur = BitCursor::reader(vec![0u8; 2]);
        let err = cur
            .write_string("toolong", &StringOptions::default())
            .unwrap_err();
        assert_eq!(err, CursorError::Capacity { end: 8, size: 2 });
        assert_eq!(cur.as_slice(), &[0, 0]);
    }

    #[test]
    fn test_invalid_utf8_is_an_error() {
        let opts = StringOptions {
            length: Some(2),
            strip_null: false,
            ..Default::default()
        };
        let mut cur = BitCursor::reader(vec![0xFF, 0xFE]);
        assert_eq!(cur.read_string(&opts).unwrap_err(), CursorError::InvalidUtf8);
    }
}
