//! Document loading.

use std::io::{self, Read};

use mdtok_core::MAX_SOURCE_LEN;
use thiserror::Error;

/// Failure to load a markdown document.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot find file '{path}'")]
    NotFound { path: String },
    #[error("permission denied reading '{path}'")]
    PermissionDenied { path: String },
    #[error("'{path}' contains invalid UTF-8 data")]
    InvalidUtf8 { path: String },
    #[error("'{path}' is {len} bytes, larger than the {max} byte limit")]
    TooLarge { path: String, len: u64, max: u64 },
    #[error("error reading '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
}

impl LoadError {
    fn from_io(path: &str, err: io::Error) -> Self {
        let path = path.to_owned();
        match err.kind() {
            io::ErrorKind::NotFound => LoadError::NotFound { path },
            io::ErrorKind::PermissionDenied => LoadError::PermissionDenied { path },
            io::ErrorKind::InvalidData => LoadError::InvalidUtf8 { path },
            _ => LoadError::Io { path, source: err },
        }
    }
}

/// Reject documents the scanner cannot address.
fn check_len(path: &str, len: u64, max: usize) -> Result<(), LoadError> {
    let max = max as u64;
    if len > max {
        return Err(LoadError::TooLarge {
            path: path.to_owned(),
            len,
            max,
        });
    }
    Ok(())
}

/// Read a whole document. `-` reads standard input.
///
/// Documents longer than [`MAX_SOURCE_LEN`] bytes are rejected with
/// [`LoadError::TooLarge`].
pub fn read_source(path: &str) -> Result<String, LoadError> {
    if path == "-" {
        let mut content = String::new();
        io::stdin()
            .lock()
            .read_to_string(&mut content)
            .map_err(|e| LoadError::from_io("<stdin>", e))?;
        check_len("<stdin>", content.len() as u64, MAX_SOURCE_LEN)?;
        return Ok(content);
    }
    let meta = std::fs::metadata(path).map_err(|e| LoadError::from_io(path, e))?;
    check_len(path, meta.len(), MAX_SOURCE_LEN)?;
    let content = std::fs::read_to_string(path).map_err(|e| LoadError::from_io(path, e))?;
    check_len(path, content.len() as u64, MAX_SOURCE_LEN)?;
    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_kinds_map_to_variants() {
        let not_found = LoadError::from_io("a.md", io::ErrorKind::NotFound.into());
        assert_eq!(not_found.to_string(), "cannot find file 'a.md'");

        let denied = LoadError::from_io("a.md", io::ErrorKind::PermissionDenied.into());
        assert_eq!(denied.to_string(), "permission denied reading 'a.md'");

        let utf8 = LoadError::from_io("a.md", io::ErrorKind::InvalidData.into());
        assert_eq!(utf8.to_string(), "'a.md' contains invalid UTF-8 data");
    }

    #[test]
    fn documents_over_the_limit_are_rejected() {
        assert!(check_len("a.md", 10, 10).is_ok());
        let err = check_len("a.md", 11, 10);
        assert!(matches!(
            err,
            Err(LoadError::TooLarge { len: 11, max: 10, .. })
        ));
        assert_eq!(
            err.map_err(|e| e.to_string()),
            Err("'a.md' is 11 bytes, larger than the 10 byte limit".to_owned())
        );
    }

    #[test]
    fn limit_matches_scanner_positions() {
        assert!(check_len("a.md", u64::from(u32::MAX), MAX_SOURCE_LEN).is_ok());
        assert!(check_len("a.md", u64::from(u32::MAX) + 1, MAX_SOURCE_LEN).is_err());
    }

    #[test]
    fn other_io_errors_keep_source() {
        let err = LoadError::from_io("a.md", io::Error::other("disk on fire"));
        assert!(matches!(err, LoadError::Io { .. }));
        assert_eq!(err.to_string(), "error reading 'a.md': disk on fire");
        assert!(std::error::Error::source(&err).is_some());
    }
}
