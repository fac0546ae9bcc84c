// src/hexdump.rs
//! Hex-dump formatting of buffer contents
//!
//! Rows of 16 bytes with an offset column, hex pairs, and an ASCII gutter;
//! non-printable bytes render as `.`. Formatting only, no cursor movement.

use crate::cursor::BitCursor;

const ROW: usize = 16;

/// Formats `bytes` as a hex dump, labelling offsets from `base`.
///
/// # Example
///
/// ```
/// use bitcursor::hexdump;
///
/// let dump = hexdump(&[0x68, 0x69, 0x00], 0);
/// assert_eq!(
///     dump,
///     "00000000  68 69 00                                         |hi.|\n"
/// );
/// ```
pub fn hexdump(bytes: &[u8], base: usize) -> String {
    let mut out = String::new();
    for (row, chunk) in bytes.chunks(ROW).enumerate() {
        out.push_str(&format!("{:08x} ", base + row * ROW));
        for byte in chunk {
            out.push_str(&format!(" {byte:02x}"));
        }
        for _ in chunk.len()..ROW {
            out.push_str("   ");
        }
        out.push_str("  |");
        for &byte in chunk {
            out.push(if byte.is_ascii_graphic() || byte == b' ' {
                byte as char
            } else {
                '.'
            });
        }
        out.push_str("|\n");
    }
    out
}

impl BitCursor {
    /// Hex-dumps up to `length` bytes from the current offset (the whole
    /// remainder when `None`).
    ///
    /// Read-only: the cursor does not move.
    pub fn hexdump(&self, length: Option<usize>) -> String {
        let start = self.tell().min(self.len());
        let end = match length {
            Some(n) => (start + n).min(self.len()),
            None => self.len(),
        };
        hexdump(&self.as_slice()[start..end], start)
    }
}
