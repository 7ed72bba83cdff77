//! Markdown scanner producing one [`Token`] per call.
//!
//! The scanner operates on a sentinel-terminated [`Cursor`] and never
//! allocates: literals borrow the document, diagnostics are static strings.
//! Error conditions are encoded as [`TokenKind::Illegal`] tokens, not as
//! `Result::Err`, so the scanner is total over every input.
//!
//! # Design
//!
//! `next_token` dispatches on the current byte and on whether the scanner is
//! at the start of a line. Start-of-line is derived from the kind of the last
//! token returned, which is recorded in exactly one place: the exit of
//! `next_token`. Every arm calls a focused method that advances the cursor
//! and returns `(kind, literal)`; the span is computed from the cursor
//! positions before and after.
//!
//! # Emphasis openers
//!
//! A `*` opens emphasis unless the byte after it is a space. A `*` followed
//! by a space is plain text and stays in the text literal. A `*` right
//! before a line break or end of input opens an empty italic.

use std::iter::FusedIterator;

use tracing::{debug, trace};

use crate::cursor::Cursor;
use crate::token::{Span, Token, TokenKind, MISSING_CLOSING_MODIFIER, TOO_MANY_HEADER_LEVELS};

/// Pull-based markdown tokenizer.
///
/// Produces one token per [`next_token`](Self::next_token) call. After the
/// document is exhausted every call returns [`TokenKind::EndOfInput`].
/// Not meant for shared use: scanning mutates the cursor in place.
pub struct Scanner<'a> {
    cursor: Cursor<'a>,
    /// Kind of the last token returned, `None` before the first call.
    prev: Option<TokenKind>,
}

impl<'a> Scanner<'a> {
    /// Create a new scanner from a cursor.
    pub fn new(cursor: Cursor<'a>) -> Self {
        Self { cursor, prev: None }
    }

    /// Produce the next token.
    ///
    /// Always consumes at least one byte unless it returns `EndOfInput`, so
    /// repeated calls terminate on every input.
    pub fn next_token(&mut self) -> Token<'a> {
        let start = self.cursor.pos();
        let (kind, literal) = self.dispatch();
        let span = Span::new(start, self.cursor.pos());

        if kind == TokenKind::Illegal {
            debug!(%span, literal, "illegal markdown");
        } else {
            trace!(%kind, %span, "token");
        }

        self.prev = Some(kind);
        Token::new(kind, literal, span)
    }

    /// Returns `true` if no token has been produced yet or the last token
    /// was a `Newline`. Headings and list items are only recognized here.
    #[inline]
    pub fn at_line_start(&self) -> bool {
        matches!(self.prev, None | Some(TokenKind::Newline))
    }

    /// Kind of the last token returned, `None` before the first call.
    #[inline]
    pub fn prev_kind(&self) -> Option<TokenKind> {
        self.prev
    }

    /// Byte offset of the next unconsumed byte.
    #[inline]
    pub fn position(&self) -> u32 {
        self.cursor.pos()
    }

    fn dispatch(&mut self) -> (TokenKind, &'a str) {
        if self.cursor.is_eof() {
            return (TokenKind::EndOfInput, "");
        }
        match self.cursor.current() {
            b'\n' => self.newline(),
            b'\r' if self.cursor.peek() == b'\n' => self.newline(),
            b'#' if self.at_line_start() => self.heading(),
            b'-' if self.at_line_start() => self.list_item(),
            b'#' | b'-' => self.misplaced_marker(),
            b'*' => self.modifier(),
            _ => self.text(),
        }
    }

    // ─── Line Structure ─────────────────────────────────────────────

    fn newline(&mut self) -> (TokenKind, &'a str) {
        let len = self.cursor.line_break_len();
        self.cursor.advance_n(len);
        (TokenKind::Newline, " ")
    }

    // ─── Block Markers ──────────────────────────────────────────────

    /// `#`, `##` or `###` followed by the rest of the line.
    ///
    /// Deeper headings still consume the whole line, so the next token
    /// starts on the line break.
    fn heading(&mut self) -> (TokenKind, &'a str) {
        let hashes = self.cursor.pos();
        self.cursor.eat_while(|b| b == b'#');
        let level = self.cursor.pos() - hashes;

        let body = self.cursor.pos();
        self.cursor.eat_until_line_break_or_eof();

        match TokenKind::heading(level) {
            Some(kind) => (kind, self.cursor.slice_from(body)),
            None => (TokenKind::Illegal, TOO_MANY_HEADER_LEVELS),
        }
    }

    /// `-` delimiter run (dashes and spaces), then an inline text run.
    fn list_item(&mut self) -> (TokenKind, &'a str) {
        self.cursor.eat_while(|b| b == b'-' || b == b' ');
        let body = self.cursor.pos();
        self.eat_text_run();
        (TokenKind::UnorderedListItem, self.cursor.slice_from(body))
    }

    /// `#` or `-` away from the start of a line.
    fn misplaced_marker(&mut self) -> (TokenKind, &'a str) {
        let start = self.cursor.pos();
        self.cursor.advance();
        (TokenKind::Illegal, self.cursor.slice_from(start))
    }

    // ─── Emphasis ───────────────────────────────────────────────────

    fn modifier(&mut self) -> (TokenKind, &'a str) {
        if !self.at_emphasis_opener() {
            // `* `: plain text, including the star itself.
            return self.text();
        }
        self.cursor.advance(); // consume '*'
        if self.cursor.current() == b'*' {
            self.cursor.advance(); // consume second '*'
            self.bold()
        } else {
            self.italic()
        }
    }

    /// Scan to the closing `**` on the same line.
    ///
    /// A single `*` inside the span is part of the literal. Reaching a line
    /// break or end of input first yields `Illegal`; the bytes scanned so far
    /// are consumed and the line break is left for the next call.
    fn bold(&mut self) -> (TokenKind, &'a str) {
        let body = self.cursor.pos();
        loop {
            self.cursor.skip_to_inline_delim();
            if self.cursor.is_eof() || self.cursor.at_line_break() {
                return (TokenKind::Illegal, MISSING_CLOSING_MODIFIER);
            }
            if self.cursor.current() == b'*' && self.cursor.peek() == b'*' {
                let literal = self.cursor.slice_from(body);
                self.cursor.advance_n(2); // consume closing '**'
                return (TokenKind::Bold, literal);
            }
            self.cursor.advance();
        }
    }

    /// Scan to the next `*`, line break, or end of input.
    ///
    /// A closing `*` is consumed when present but not required.
    fn italic(&mut self) -> (TokenKind, &'a str) {
        let body = self.cursor.pos();
        loop {
            let b = self.cursor.skip_to_inline_delim();
            if b == b'*' || self.cursor.is_eof() || self.cursor.at_line_break() {
                break;
            }
            self.cursor.advance(); // lone '\r'
        }
        let literal = self.cursor.slice_from(body);
        if self.cursor.current() == b'*' {
            self.cursor.advance(); // consume closing '*'
        }
        (TokenKind::Italic, literal)
    }

    #[inline]
    fn at_emphasis_opener(&self) -> bool {
        self.cursor.current() == b'*' && self.cursor.peek() != b' '
    }

    // ─── Text ───────────────────────────────────────────────────────

    fn text(&mut self) -> (TokenKind, &'a str) {
        let start = self.cursor.pos();
        self.eat_text_run();
        (TokenKind::Text, self.cursor.slice_from(start))
    }

    /// Advance to the next line break, emphasis opener, or end of input.
    fn eat_text_run(&mut self) {
        loop {
            self.cursor.skip_to_inline_delim();
            if self.cursor.is_eof() || self.cursor.at_line_break() || self.at_emphasis_opener() {
                return;
            }
            self.cursor.advance();
        }
    }
}

/// Yields every token up to, but not including, `EndOfInput`.
impl<'a> Iterator for Scanner<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        let tok = self.next_token();
        (!tok.is_end()).then_some(tok)
    }
}

impl FusedIterator for Scanner<'_> {}
