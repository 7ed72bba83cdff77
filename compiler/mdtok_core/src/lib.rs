//! Low-level markdown tokenizer.
//!
//! Turns a markdown document into a flat stream of [`Token`]s: headings
//! (levels 1-3), unordered-list items, bold and italic spans, text runs,
//! newlines, [`TokenKind::Illegal`] diagnostics and a final
//! [`TokenKind::EndOfInput`].
//!
//! # Usage
//!
//! ```
//! use mdtok_core::{Scanner, SourceBuffer, TokenKind};
//!
//! let buf = SourceBuffer::new("# Title\n- item **bold**");
//! let mut scanner = Scanner::new(buf.cursor());
//! let first = scanner.next_token();
//! assert_eq!(first.kind, TokenKind::Heading1);
//! assert_eq!(first.literal, " Title");
//! ```
//!
//! Scanning is byte-oriented: only ASCII bytes are structurally significant,
//! everything else passes through inside text literals. The scanner never
//! fails; malformed input surfaces as `Illegal` tokens.

mod cursor;
mod scanner;
mod source_buffer;
mod token;

pub use cursor::Cursor;
pub use scanner::Scanner;
pub use source_buffer::{SourceBuffer, MAX_SOURCE_LEN};
pub use token::{Span, Token, TokenKind, MISSING_CLOSING_MODIFIER, TOO_MANY_HEADER_LEVELS};
