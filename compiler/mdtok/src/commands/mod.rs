//! Command handlers for the mdtok CLI.
//!
//! Each command has a `*_source` function that writes to any `io::Write`
//! (used by tests) and a `*_file` wrapper that loads the document, writes to
//! stdout and exits with the right status (used by the binary).

mod check;
mod lex;

pub use check::{check_file, check_source};
pub use lex::{lex_file, lex_source};

use crate::read_source;

/// Load a document or exit with status 1.
fn read_or_exit(path: &str) -> String {
    match read_source(path) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
