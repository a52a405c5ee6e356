//! Single-pass getopt(3) / getopt_long(3) scanning.
//!
//! Index 0 of the argument vector is the program name and is never
//! inspected. Scanning stops at the first positional token (including
//! `""` and `-`) or right after a `--` terminator. Tokens are never
//! reordered, and a failed scan returns no partial flags.

pub mod args;
mod cluster;
mod error;
mod long;

pub use args::ScanArgs;
pub use error::{OptName, ParseError};

use crate::table::{LongOpt, ShortOpts};
use serde::Serialize;
use std::fmt;

/// Canonical key of a parsed flag: the short alias when one exists,
/// otherwise the registered long name. Serialized as `{"short": "c"}` or
/// `{"long": "name"}` so the two never collide.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Key {
    Short(char),
    Long(String),
}

impl PartialEq<char> for Key {
    fn eq(&self, other: &char) -> bool {
        matches!(self, Key::Short(c) if c == other)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Short(c) => write!(f, "{c}"),
            Key::Long(name) => f.write_str(name),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Flag {
    #[serde(flatten)]
    pub key: Key,
    pub value: String,
}

/// Result of a successful scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parsed<'a, S> {
    /// Flags in the order they were found.
    pub flags: Vec<Flag>,
    /// Unconsumed suffix of the input, borrowed from the caller.
    pub rest: &'a [S],
    /// Index of `rest[0]` in the input.
    pub optind: usize,
}

/// Scans `args` against a short option table.
///
/// With no long table, `--name` is just a cluster whose first code point
/// is `-`.
pub fn get<'a, S: AsRef<str>>(
    args: &'a [S],
    short: &ShortOpts,
) -> Result<Parsed<'a, S>, ParseError> {
    scan(args, short, None)
}

/// Scans `args` against a long option table. Single-dash clusters are
/// matched against the entries' short aliases.
pub fn get_long<'a, S: AsRef<str>>(
    args: &'a [S],
    long: &[LongOpt],
) -> Result<Parsed<'a, S>, ParseError> {
    scan(args, &ShortOpts::from_long(long), Some(long))
}

/// Like [`get_long`], with extra short options that take precedence over
/// the long entries' aliases.
pub fn get_long_with<'a, S: AsRef<str>>(
    args: &'a [S],
    short: &ShortOpts,
    long: &[LongOpt],
) -> Result<Parsed<'a, S>, ParseError> {
    let mut clusters = ShortOpts::from_long(long);
    clusters.extend(short);
    scan(args, &clusters, Some(long))
}

enum Token<'t> {
    Positional,
    Terminator,
    Long(&'t str),
    Cluster(&'t str),
}

fn classify(token: &str, long_aware: bool) -> Token<'_> {
    match token {
        "" | "-" => Token::Positional,
        "--" => Token::Terminator,
        _ => match token.strip_prefix("--") {
            Some(name) if long_aware => Token::Long(name),
            _ => match token.strip_prefix('-') {
                Some(body) => Token::Cluster(body),
                None => Token::Positional,
            },
        },
    }
}

fn scan<'a, S: AsRef<str>>(
    args: &'a [S],
    short: &ShortOpts,
    long: Option<&[LongOpt]>,
) -> Result<Parsed<'a, S>, ParseError> {
    let mut cursor = Cursor::new(args);

    while let Some(token) = cursor.advance() {
        let at = cursor.index;
        match classify(token, long.is_some()) {
            Token::Positional => return Ok(cursor.finish(at)),
            Token::Terminator => return Ok(cursor.finish(at + 1)),
            Token::Long(name) => long::resolve(name, long.unwrap_or_default(), &mut cursor)?,
            Token::Cluster(body) => cluster::decode(body, short, &mut cursor)?,
        }
    }

    Ok(cursor.finish(args.len()))
}

/// Shared scan position plus the flags accumulated so far.
struct Cursor<'a, S> {
    args: &'a [S],
    index: usize,
    flags: Vec<Flag>,
}

impl<'a, S: AsRef<str>> Cursor<'a, S> {
    fn new(args: &'a [S]) -> Self {
        Self {
            args,
            index: 0,
            flags: Vec::new(),
        }
    }

    /// Moves to the next token to classify.
    fn advance(&mut self) -> Option<&'a str> {
        self.index += 1;
        self.args.get(self.index).map(|arg| arg.as_ref())
    }

    /// Consumes the next token as an option value.
    fn next_value(&mut self) -> Option<&'a str> {
        self.advance()
    }

    fn push(&mut self, key: Key, value: String) {
        self.flags.push(Flag { key, value });
    }

    fn finish(self, optind: usize) -> Parsed<'a, S> {
        Parsed {
            flags: self.flags,
            rest: &self.args[optind..],
            optind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::ArgMode;

    #[test]
    fn classifies_tokens() {
        assert!(matches!(classify("", true), Token::Positional));
        assert!(matches!(classify("-", true), Token::Positional));
        assert!(matches!(classify("bar", true), Token::Positional));
        assert!(matches!(classify("--", false), Token::Terminator));
        assert!(matches!(classify("--change", true), Token::Long("change")));
        assert!(matches!(classify("--change", false), Token::Cluster("-change")));
        assert!(matches!(classify("-abc", true), Token::Cluster("abc")));
    }

    #[test]
    fn empty_vector_yields_nothing() {
        let args: [&str; 0] = [];
        let parsed = get(&args, &ShortOpts::parse("a")).unwrap();
        assert!(parsed.flags.is_empty());
        assert!(parsed.rest.is_empty());
        assert_eq!(parsed.optind, 0);
    }

    #[test]
    fn program_name_is_never_scanned() {
        let args = ["-a"];
        let parsed = get(&args, &ShortOpts::new()).unwrap();
        assert!(parsed.flags.is_empty());
        assert_eq!(parsed.optind, 1);
    }

    #[test]
    fn double_dash_is_a_cluster_without_long_table() {
        let args = ["foo", "--ab"];
        assert_eq!(
            get(&args, &ShortOpts::parse("ab")).unwrap_err(),
            ParseError::UnknownOption(OptName::Short('-'))
        );

        let parsed = get(&args, &ShortOpts::parse("-ab")).unwrap();
        assert_eq!(parsed.flags.len(), 3);
        assert_eq!(parsed.flags[0].key, '-');
    }

    #[test]
    fn extra_short_options_override_aliases() {
        let long = [LongOpt::new('c', "change", ArgMode::Required)];
        let short = ShortOpts::parse("cv");
        let args = ["foo", "-cv", "--change", "x"];

        let parsed = get_long_with(&args, &short, &long).unwrap();
        assert_eq!(
            parsed.flags,
            vec![
                Flag { key: Key::Short('c'), value: String::new() },
                Flag { key: Key::Short('v'), value: String::new() },
                Flag { key: Key::Short('c'), value: "x".to_string() },
            ]
        );
        assert!(parsed.rest.is_empty());
    }

    #[test]
    fn key_display_and_char_equality() {
        assert_eq!(Key::Short('ß').to_string(), "ß");
        assert_eq!(Key::Long("verbose".to_string()).to_string(), "verbose");
        assert!(Key::Short('c') == 'c');
        assert!(Key::Long("c".to_string()) != 'c');
    }
}
