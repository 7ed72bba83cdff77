//! mdtok CLI
//!
//! Tokenizes markdown documents.

use mdtok::commands::{check_file, lex_file};
use mdtok::{parse_check_args, parse_lex_args, ArgError};

fn main() {
    mdtok::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "lex" => match parse_lex_args(&args[2..]) {
            Ok((config, path)) => lex_file(path, &config),
            Err(err) => usage_error(&err, "Usage: mdtok lex <file.md|-> [--spans]"),
        },
        "check" => match parse_check_args(&args[2..]) {
            Ok(path) => check_file(path),
            Err(err) => usage_error(&err, "Usage: mdtok check <file.md|->"),
        },
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("mdtok {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("error: unknown command '{command}'");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn usage_error(err: &ArgError, usage: &str) -> ! {
    eprintln!("error: {err}");
    eprintln!("{usage}");
    std::process::exit(1);
}

fn print_usage() {
    eprintln!("mdtok - markdown tokenizer");
    eprintln!();
    eprintln!("Usage: mdtok <command> [options]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  lex <file.md|->      Print the token stream");
    eprintln!("      --spans, -s      Include byte spans");
    eprintln!("  check <file.md|->    Report illegal tokens, exit 1 if any");
    eprintln!("  help                 Show this message");
    eprintln!("  version              Show version");
    eprintln!();
    eprintln!("Set RUST_LOG=mdtok_core=trace to log every token.");
}
