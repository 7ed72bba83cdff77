//! Byte cursor over a sentinel-terminated buffer.
//!
//! The cursor advances through the buffer byte-by-byte. End of input is
//! reached when the position reaches the document length; reads at or past
//! that point yield `0x00`. A NUL byte before that point is ordinary
//! document content.

/// Byte cursor over a sentinel-terminated document buffer.
///
/// Created via [`SourceBuffer::cursor()`](crate::SourceBuffer::cursor).
/// The cursor is [`Copy`], so the scanner can take cheap snapshots.
///
/// # Invariant
///
/// `buf` extends at least two bytes past `source_len`. Bytes from
/// `source_len` on are never treated as content.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// Sentinel-terminated buffer (document + sentinel + padding).
    buf: &'a [u8],
    /// Current read position (byte index into `buf`).
    pos: u32,
    /// Length of the document (excludes sentinel and padding).
    source_len: u32,
}

const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 24);

impl<'a> Cursor<'a> {
    pub(crate) fn new(buf: &'a [u8], source_len: u32) -> Self {
        debug_assert!(
            (source_len as usize) + 2 < buf.len(),
            "sentinel and lookahead padding must be within buffer bounds"
        );
        Self {
            buf,
            pos: 0,
            source_len,
        }
    }

    /// The byte at the current position, `0x00` at end of input.
    #[inline]
    pub fn current(&self) -> u8 {
        self.byte_at(self.pos as usize)
    }

    /// The byte one position ahead of current.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.byte_at(self.pos as usize + 1)
    }

    /// The byte two positions ahead of current.
    #[inline]
    pub fn peek2(&self) -> u8 {
        self.byte_at(self.pos as usize + 2)
    }

    /// Document byte at `index`, `0x00` at or past the document length even
    /// if the buffer holds more bytes there.
    #[inline]
    fn byte_at(&self, index: usize) -> u8 {
        if index < self.source_len as usize {
            self.buf[index]
        } else {
            0
        }
    }

    /// Advance the cursor by one byte.
    ///
    /// Never moves past the sentinel, so repeated calls at end of input
    /// are harmless.
    #[inline]
    pub fn advance(&mut self) {
        if self.pos < self.source_len {
            self.pos += 1;
        }
    }

    /// Advance the cursor by `n` bytes, stopping at the sentinel.
    #[inline]
    pub fn advance_n(&mut self, n: u32) {
        self.pos = self.pos.saturating_add(n).min(self.source_len);
    }

    /// Returns `true` once every document byte has been consumed.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source_len
    }

    /// Returns `true` if the cursor sits on `\n` or on a `\r\n` pair.
    ///
    /// A lone `\r` is not a line break.
    #[inline]
    pub fn at_line_break(&self) -> bool {
        match self.current() {
            b'\n' => true,
            b'\r' => self.peek() == b'\n',
            _ => false,
        }
    }

    /// Byte length of the line break under the cursor: 1 for `\n`, 2 for
    /// `\r\n`, 0 if the cursor is not on a line break.
    #[inline]
    pub fn line_break_len(&self) -> u32 {
        match self.current() {
            b'\n' => 1,
            b'\r' if self.peek() == b'\n' => 2,
            _ => 0,
        }
    }

    /// Current byte offset in the document.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Length of the document (excludes sentinel and padding).
    #[inline]
    pub fn source_len(&self) -> u32 {
        self.source_len
    }

    /// Extract a document substring as `&str`.
    ///
    /// # Contract
    ///
    /// `start..end` must fall within the document and on UTF-8 character
    /// boundaries. The scanner only stops on ASCII bytes or end of input,
    /// so every boundary it produces satisfies this.
    #[allow(
        unsafe_code,
        reason = "from_utf8_unchecked on a buffer copied from &str"
    )]
    pub fn slice(&self, start: u32, end: u32) -> &'a str {
        debug_assert!(
            end <= self.source_len,
            "slice end {end} exceeds document length {}",
            self.source_len
        );
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        let bytes = &self.buf[start as usize..end as usize];
        debug_assert!(std::str::from_utf8(bytes).is_ok(), "slice splits a character");
        // SAFETY: The buffer was copied from a `&str` and the scanner only
        // slices at ASCII bytes or at the end of the document.
        unsafe { std::str::from_utf8_unchecked(bytes) }
    }

    /// Extract a document substring from `start` to the current position.
    pub fn slice_from(&self, start: u32) -> &'a str {
        self.slice(start, self.pos)
    }

    /// Advance while `pred` returns `true` for the current byte.
    ///
    /// Stops at end of input regardless of `pred`.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while self.pos < self.source_len && pred(self.buf[self.pos as usize]) {
            self.pos += 1;
        }
    }

    /// Advance to the next byte that can end an inline run: `*`, `\n` or
    /// `\r`. Positions the cursor at end of input if none is left.
    ///
    /// Uses `memchr3`; the caller decides whether the byte found actually
    /// terminates the run (a lone `\r` or a lone `*` usually does not).
    #[allow(
        clippy::cast_possible_truncation,
        reason = "remaining.len() <= source_len which fits in u32"
    )]
    pub fn skip_to_inline_delim(&mut self) -> u8 {
        let remaining = &self.buf[self.pos as usize..self.source_len as usize];
        if let Some(offset) = memchr::memchr3(b'*', b'\n', b'\r', remaining) {
            self.pos += offset as u32;
            self.current()
        } else {
            self.pos = self.source_len;
            0
        }
    }

    /// Advance to the next line break or to end of input.
    ///
    /// Uses `memchr` to find the next `\n`. If that `\n` is preceded by
    /// `\r`, the cursor stops on the `\r` so the pair stays together.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "remaining.len() <= source_len which fits in u32"
    )]
    pub fn eat_until_line_break_or_eof(&mut self) {
        let remaining = &self.buf[self.pos as usize..self.source_len as usize];
        match memchr::memchr(b'\n', remaining) {
            Some(offset) => {
                let at = self.pos + offset as u32;
                self.pos = if offset > 0 && self.buf[at as usize - 1] == b'\r' {
                    at - 1
                } else {
                    at
                };
            }
            None => self.pos = self.source_len,
        }
    }
}
