//! End-to-end tests for the `lex` and `check` commands.

use std::io::Write;

use mdtok::commands::{check_source, lex_source};
use mdtok::{read_source, LexConfig, LoadError};
use pretty_assertions::assert_eq;

fn lex_to_string(source: &str, config: &LexConfig) -> String {
    let mut out = Vec::new();
    lex_source("doc.md", source, config, &mut out).expect("writing to a Vec cannot fail");
    String::from_utf8(out).expect("token dump is UTF-8")
}

fn check_to_string(source: &str) -> (usize, String) {
    let mut out = Vec::new();
    let count = check_source("doc.md", source, &mut out).expect("writing to a Vec cannot fail");
    (count, String::from_utf8(out).expect("diagnostics are UTF-8"))
}

// === lex ===

#[test]
fn lex_dumps_every_token() {
    let dump = lex_to_string("#hello this is a test\n##", &LexConfig::default());
    assert_eq!(
        dump,
        "Tokens for 'doc.md' (4 tokens):\n\
         \x20 Heading1 \"hello this is a test\"\n\
         \x20 Newline \" \"\n\
         \x20 Heading2 \"\"\n\
         \x20 EndOfInput \"\"\n"
    );
}

#[test]
fn lex_with_spans() {
    let config = LexConfig { show_spans: true };
    let dump = lex_to_string("- **Bold List**", &config);
    assert_eq!(
        dump,
        "Tokens for 'doc.md' (3 tokens):\n\
         \x20 UnorderedListItem \"\" @ 0..2\n\
         \x20 Bold \"Bold List\" @ 2..15\n\
         \x20 EndOfInput \"\" @ 15..15\n"
    );
}

#[test]
fn lex_empty_document() {
    let dump = lex_to_string("", &LexConfig::default());
    assert_eq!(dump, "Tokens for 'doc.md' (1 tokens):\n  EndOfInput \"\"\n");
}

// === check ===

#[test]
fn check_clean_document() {
    let (count, out) = check_to_string("# Title\n- item *it*\n\nplain **bold**\n");
    assert_eq!(count, 0);
    assert_eq!(out, "");
}

#[test]
fn check_reports_positions() {
    let source = "# ok\n#### deep\n- **open\n**b**#";
    let (count, out) = check_to_string(source);
    assert_eq!(count, 3);
    assert_eq!(
        out,
        "doc.md:2:1: Too many headerlevels\n\
         doc.md:3:3: did not receive matching closing modifier\n\
         doc.md:4:6: #\n"
    );
}

// === loading ===

#[test]
fn read_source_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("create temp file");
    writeln!(file, "- item").expect("write temp file");
    let path = file.path().to_str().expect("temp path is UTF-8");
    assert_eq!(read_source(path).expect("read temp file"), "- item\n");
}

#[test]
fn read_source_missing_file() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("missing.md");
    let path = path.to_str().expect("temp path is UTF-8");
    let err = read_source(path).expect_err("file does not exist");
    assert!(matches!(err, LoadError::NotFound { .. }));
    assert_eq!(err.to_string(), format!("cannot find file '{path}'"));
}

#[test]
fn read_source_invalid_utf8() {
    let mut file = tempfile::NamedTempFile::new().expect("create temp file");
    file.write_all(&[b'#', 0xFF, 0xFE]).expect("write temp file");
    let path = file.path().to_str().expect("temp path is UTF-8");
    let err = read_source(path).expect_err("bytes are not UTF-8");
    assert!(matches!(err, LoadError::InvalidUtf8 { .. }));
}
