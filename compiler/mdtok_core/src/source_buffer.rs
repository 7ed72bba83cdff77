//! Sentinel-terminated document buffer.
//!
//! The buffer stores a copy of the markdown text followed by a `0x00`
//! sentinel byte, padded with zeros up to the next 64-byte boundary. The
//! scanner can therefore look one or two bytes ahead of any position without
//! a bounds check. Documents are limited to [`MAX_SOURCE_LEN`] bytes.

use crate::Cursor;

/// Cache line size in bytes, used for buffer alignment padding.
const CACHE_LINE: usize = 64;

/// Bytes of zero padding guaranteed after the sentinel, so `peek2()` is
/// valid even when the cursor sits on the sentinel itself.
const LOOKAHEAD: usize = 2;

/// Largest document, in bytes, the scanner accepts. Positions are `u32`.
///
/// [`SourceBuffer::new`] keeps at most this many bytes; callers loading
/// untrusted input should reject longer documents up front.
pub const MAX_SOURCE_LEN: usize = u32::MAX as usize;

/// Immutable, sentinel-terminated copy of a markdown document.
///
/// # Layout
///
/// ```text
/// [document_bytes..., 0x00, padding_zeros...]
///  ^                  ^     ^
///  0                  |     at least 2 bytes, rounded up to 64-byte boundary
///                source_len (sentinel)
/// ```
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    /// `[document_bytes..., 0x00 sentinel, 0x00 padding...]`.
    buf: Vec<u8>,
    /// Length of the document (excludes sentinel and padding).
    source_len: u32,
}

impl SourceBuffer {
    /// Copy `source` into a new sentinel-terminated buffer.
    ///
    /// Documents longer than [`MAX_SOURCE_LEN`] bytes are truncated to the
    /// last character boundary within the limit, so the buffer always ends
    /// in a real sentinel.
    pub fn new(source: &str) -> Self {
        let source_len = capped_len(source, MAX_SOURCE_LEN);
        let source_bytes = &source.as_bytes()[..source_len];

        // Minimum: source + sentinel + lookahead padding.
        let padded_len = (source_len + 1 + LOOKAHEAD + CACHE_LINE - 1) & !(CACHE_LINE - 1);

        let mut buf = vec![0u8; padded_len];
        buf[..source_len].copy_from_slice(source_bytes);

        Self {
            buf,
            #[allow(
                clippy::cast_possible_truncation,
                reason = "source_len <= MAX_SOURCE_LEN == u32::MAX"
            )]
            source_len: source_len as u32,
        }
    }

    /// The document bytes, without sentinel or padding.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.source_len as usize]
    }

    /// The full buffer including the sentinel and padding.
    pub fn as_sentinel_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Create a [`Cursor`] positioned at byte 0.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.buf, self.source_len)
    }

    /// Length of the document in bytes.
    pub fn len(&self) -> u32 {
        self.source_len
    }

    /// Returns `true` if the document is empty.
    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }
}

/// Length of the longest prefix of `source` that fits in `max` bytes and
/// ends on a character boundary.
fn capped_len(source: &str, max: usize) -> usize {
    if source.len() <= max {
        return source.len();
    }
    let mut len = max;
    while !source.is_char_boundary(len) {
        len -= 1;
    }
    len
}
