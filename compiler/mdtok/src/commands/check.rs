//! `mdtok check`: report illegal tokens with their positions.

use std::io::{self, Write};

use mdtok_core::{Scanner, SourceBuffer};

use super::read_or_exit;
use crate::LineIndex;

/// Check a file, printing each illegal token. Exits with status 1 if any
/// were found.
pub fn check_file(path: &str) {
    let content = read_or_exit(path);
    let stdout = io::stdout();
    match check_source(path, &content, &mut stdout.lock()) {
        Ok(0) => {}
        Ok(count) => {
            let plural = if count == 1 { "" } else { "s" };
            eprintln!("{count} illegal token{plural} in '{path}'");
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("error writing diagnostics: {e}");
            std::process::exit(1);
        }
    }
}

/// Write `path:line:col: literal` for every illegal token and return how
/// many there were.
pub fn check_source(path: &str, source: &str, out: &mut impl Write) -> io::Result<usize> {
    let buf = SourceBuffer::new(source);
    let index = LineIndex::new(source);

    let mut count = 0;
    for tok in Scanner::new(buf.cursor()).filter(|tok| tok.is_illegal()) {
        let (line, col) = index.line_col(tok.span.start);
        writeln!(out, "{path}:{line}:{col}: {}", tok.literal)?;
        count += 1;
    }

    tracing::debug!(path, count, "check finished");
    Ok(count)
}
