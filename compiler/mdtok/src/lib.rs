//! mdtok - markdown tokenizer front end.
//!
//! Loads a document, runs it through [`mdtok_core::Scanner`] and reports
//! the token stream or the illegal tokens it contains.
//!
//! ```text
//! file / stdin ──► read_source() ──► SourceBuffer ──► Scanner ──► lex | check
//! ```

pub mod commands;
mod config;
mod line_index;
mod load;

pub use config::{parse_check_args, parse_lex_args, ArgError, LexConfig};
pub use line_index::LineIndex;
pub use load::{read_source, LoadError};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Only installs a subscriber when `RUST_LOG`
/// is set, e.g. `RUST_LOG=mdtok_core=trace` to log every token.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}
