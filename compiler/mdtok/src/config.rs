//! Command-line options for the token dump.

use thiserror::Error;

/// A command line `lex` or `check` cannot run with.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ArgError {
    #[error("unknown option '{0}'")]
    UnknownOption(String),
    #[error("missing file path")]
    MissingPath,
    #[error("unexpected argument '{0}'")]
    UnexpectedArgument(String),
}

/// Options for `mdtok lex`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LexConfig {
    /// Append the byte span of each token (`@ start..end`).
    pub show_spans: bool,
}

impl LexConfig {
    /// Apply one command-line flag. Returns `false` if the flag is unknown.
    pub fn apply_flag(&mut self, flag: &str) -> bool {
        match flag {
            "--spans" | "-s" => {
                self.show_spans = true;
                true
            }
            _ => false,
        }
    }
}

/// Parse the arguments after `lex`: one path plus flags in any order.
pub fn parse_lex_args(args: &[String]) -> Result<(LexConfig, &str), ArgError> {
    let mut config = LexConfig::default();
    let mut path = None;

    for arg in args {
        if arg.starts_with('-') && arg != "-" {
            if !config.apply_flag(arg) {
                return Err(ArgError::UnknownOption(arg.clone()));
            }
        } else if path.is_none() {
            path = Some(arg.as_str());
        } else {
            return Err(ArgError::UnexpectedArgument(arg.clone()));
        }
    }

    let path = path.ok_or(ArgError::MissingPath)?;
    Ok((config, path))
}

/// Parse the arguments after `check`: exactly one path.
pub fn parse_check_args(args: &[String]) -> Result<&str, ArgError> {
    match args {
        [] => Err(ArgError::MissingPath),
        [path] => Ok(path.as_str()),
        [_, extra, ..] => Err(ArgError::UnexpectedArgument(extra.clone())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| (*s).to_owned()).collect()
    }

    #[test]
    fn default_hides_spans() {
        assert!(!LexConfig::default().show_spans);
    }

    #[test]
    fn spans_flag() {
        let mut config = LexConfig::default();
        assert!(config.apply_flag("--spans"));
        assert!(config.show_spans);

        let mut short = LexConfig::default();
        assert!(short.apply_flag("-s"));
        assert_eq!(config, short);
    }

    #[test]
    fn unknown_flag_is_rejected() {
        let mut config = LexConfig::default();
        assert!(!config.apply_flag("--verbose"));
        assert_eq!(config, LexConfig::default());
    }

    #[test]
    fn lex_takes_path_and_flags_in_any_order() {
        let before = args(&["--spans", "doc.md"]);
        let after = args(&["doc.md", "-s"]);
        let expected = LexConfig { show_spans: true };
        assert_eq!(parse_lex_args(&before), Ok((expected.clone(), "doc.md")));
        assert_eq!(parse_lex_args(&after), Ok((expected, "doc.md")));
        assert_eq!(
            parse_lex_args(&args(&["-"])),
            Ok((LexConfig::default(), "-"))
        );
    }

    #[test]
    fn lex_rejects_second_path() {
        assert_eq!(
            parse_lex_args(&args(&["a.md", "b.md"])),
            Err(ArgError::UnexpectedArgument("b.md".to_owned()))
        );
        assert_eq!(
            parse_lex_args(&args(&["a.md", "--spans", "-"])),
            Err(ArgError::UnexpectedArgument("-".to_owned()))
        );
    }

    #[test]
    fn lex_rejects_unknown_option_and_missing_path() {
        assert_eq!(
            parse_lex_args(&args(&["a.md", "--verbose"])),
            Err(ArgError::UnknownOption("--verbose".to_owned()))
        );
        assert_eq!(
            parse_lex_args(&args(&["--spans"])),
            Err(ArgError::MissingPath)
        );
    }

    #[test]
    fn check_takes_exactly_one_path() {
        assert_eq!(parse_check_args(&args(&["a.md"])), Ok("a.md"));
        assert_eq!(parse_check_args(&[]), Err(ArgError::MissingPath));
        assert_eq!(
            parse_check_args(&args(&["a.md", "b.md"])),
            Err(ArgError::UnexpectedArgument("b.md".to_owned()))
        );
        assert_eq!(
            parse_check_args(&args(&["a.md", "--spans"])),
            Err(ArgError::UnexpectedArgument("--spans".to_owned()))
        );
    }
}
