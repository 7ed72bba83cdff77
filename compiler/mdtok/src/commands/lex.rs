//! `mdtok lex`: dump the token stream.

use std::io::{self, Write};

use mdtok_core::{Scanner, SourceBuffer, Token};

use super::read_or_exit;
use crate::LexConfig;

/// Lex a file and print the token stream to stdout.
pub fn lex_file(path: &str, config: &LexConfig) {
    let content = read_or_exit(path);
    let stdout = io::stdout();
    if let Err(e) = lex_source(path, &content, config, &mut stdout.lock()) {
        eprintln!("error writing tokens: {e}");
        std::process::exit(1);
    }
}

/// Write one line per token, ending with the `EndOfInput` token.
pub fn lex_source(
    path: &str,
    source: &str,
    config: &LexConfig,
    out: &mut impl Write,
) -> io::Result<()> {
    tracing::debug!(path, bytes = source.len(), "lexing document");

    let buf = SourceBuffer::new(source);
    let mut scanner = Scanner::new(buf.cursor());
    let mut tokens: Vec<Token<'_>> = scanner.by_ref().collect();
    tokens.push(scanner.next_token());

    writeln!(out, "Tokens for '{}' ({} tokens):", path, tokens.len())?;
    for tok in &tokens {
        write!(out, "  {} {:?}", tok.kind, tok.literal)?;
        if config.show_spans {
            write!(out, " @ {}", tok.span)?;
        }
        writeln!(out)?;
    }
    Ok(())
}
