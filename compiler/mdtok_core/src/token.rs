//! Token kinds, tokens and source spans.
//!
//! `TokenKind` uses `#[repr(u8)]` so a kind fits in one byte. A [`Token`]
//! pairs the kind with its literal payload, borrowed from the document (or
//! a static diagnostic message for [`TokenKind::Illegal`]), and the byte
//! [`Span`] of input it consumed.

use std::fmt;

/// Literal of the `Illegal` token produced for a heading with more than
/// three `#` markers.
pub const TOO_MANY_HEADER_LEVELS: &str = "Too many headerlevels";

/// Literal of the `Illegal` token produced for `**` with no closing `**`
/// on the same line.
pub const MISSING_CLOSING_MODIFIER: &str = "did not receive matching closing modifier";

/// Half-open byte range `[start, end)` into the document.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Span { start, end }
    }

    /// Zero-length span at `offset`.
    #[inline]
    pub const fn point(offset: u32) -> Self {
        Span {
            start: offset,
            end: offset,
        }
    }

    /// Length of the span in bytes.
    #[inline]
    pub const fn len(&self) -> u32 {
        self.end - self.start
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Classification of a markdown token.
///
/// Discriminants are grouped: block-level kinds `0..16`, inline kinds
/// `16..32`, the newline marker at 32, errors at 240 and end of input at 255.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TokenKind {
    // === Block-level ===
    /// `#` at start of line.
    Heading1 = 0,
    /// `##` at start of line.
    Heading2 = 1,
    /// `###` at start of line.
    Heading3 = 2,
    /// `-` at start of line.
    UnorderedListItem = 3,

    // === Inline ===
    /// Plain run of text.
    Text = 16,
    /// `**bold**` span.
    Bold = 17,
    /// `*italic*` span.
    Italic = 18,

    // === Line structure ===
    /// `\n` or `\r\n`. Literal is always a single space.
    Newline = 32,

    // === Errors ===
    /// Malformed input. The literal carries the offending byte or a
    /// diagnostic message.
    Illegal = 240,

    // === Control ===
    /// The document is exhausted. Returned on every call after the last
    /// real token.
    EndOfInput = 255,
}

impl TokenKind {
    /// Stable display name, used by the CLI token dump.
    pub fn name(self) -> &'static str {
        match self {
            Self::Heading1 => "Heading1",
            Self::Heading2 => "Heading2",
            Self::Heading3 => "Heading3",
            Self::UnorderedListItem => "UnorderedListItem",
            Self::Text => "Text",
            Self::Bold => "Bold",
            Self::Italic => "Italic",
            Self::Newline => "Newline",
            Self::Illegal => "Illegal",
            Self::EndOfInput => "EndOfInput",
        }
    }

    /// Heading kind for a run of `level` `#` markers, `None` past level 3.
    pub fn heading(level: u32) -> Option<Self> {
        match level {
            1 => Some(Self::Heading1),
            2 => Some(Self::Heading2),
            3 => Some(Self::Heading3),
            _ => None,
        }
    }

    /// Level of a heading kind (1-3), `None` for every other kind.
    pub fn heading_level(self) -> Option<u32> {
        match self {
            Self::Heading1 => Some(1),
            Self::Heading2 => Some(2),
            Self::Heading3 => Some(3),
            _ => None,
        }
    }

    #[inline]
    pub fn is_heading(self) -> bool {
        self.heading_level().is_some()
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One token produced by the [`Scanner`](crate::Scanner).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    /// Text payload. Empty when the kind has none.
    pub literal: &'a str,
    /// Bytes of input consumed to produce this token.
    pub span: Span,
}

impl<'a> Token<'a> {
    #[inline]
    pub const fn new(kind: TokenKind, literal: &'a str, span: Span) -> Self {
        Token {
            kind,
            literal,
            span,
        }
    }

    #[inline]
    pub fn is_illegal(&self) -> bool {
        self.kind == TokenKind::Illegal
    }

    #[inline]
    pub fn is_end(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }
}
