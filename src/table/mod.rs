//! Option tables: which code points and long names a scan recognizes.

pub mod args;
mod error;

pub use args::TableArgs;
pub use error::TableError;

use serde::Deserialize;
use std::collections::HashMap;
use std::str::FromStr;

/// Whether an option takes an argument.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArgMode {
    #[default]
    None,
    Required,
    Optional,
}

impl ArgMode {
    pub fn takes_value(self) -> bool {
        !matches!(self, ArgMode::None)
    }
}

/// Short options keyed by code point.
///
/// Built either from a getopt(3) option string or from `(char, ArgMode)`
/// pairs. When a code point is given twice the last definition wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShortOpts {
    modes: HashMap<char, ArgMode>,
}

impl ShortOpts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses an option string such as `"abλc:dßĦ::"`.
    ///
    /// A bare character takes no argument, one trailing `:` makes the
    /// argument required and two make it optional. A leading `:` is
    /// ignored.
    pub fn parse(optstr: &str) -> Self {
        let chars: Vec<char> = optstr.chars().collect();
        let mut rest = chars.strip_prefix(&[':']).unwrap_or(&chars[..]);
        let mut opts = Self::new();

        while let Some((&c, tail)) = rest.split_first() {
            let (mode, consumed) = match tail {
                [':', ':', ..] => (ArgMode::Optional, 2),
                [':', ..] => (ArgMode::Required, 1),
                _ => (ArgMode::None, 0),
            };
            opts.insert(c, mode);
            rest = &tail[consumed..];
        }

        opts
    }

    /// Cluster table for a long-option scan: every entry with a short alias.
    pub fn from_long(long: &[LongOpt]) -> Self {
        long.iter()
            .filter_map(|opt| opt.short.map(|c| (c, opt.arg)))
            .collect()
    }

    pub fn insert(&mut self, c: char, mode: ArgMode) {
        self.modes.insert(c, mode);
    }

    pub fn mode(&self, c: char) -> Option<ArgMode> {
        self.modes.get(&c).copied()
    }

    pub fn len(&self) -> usize {
        self.modes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modes.is_empty()
    }
}

impl FromStr for ShortOpts {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl FromIterator<(char, ArgMode)> for ShortOpts {
    fn from_iter<I: IntoIterator<Item = (char, ArgMode)>>(iter: I) -> Self {
        Self {
            modes: iter.into_iter().collect(),
        }
    }
}

impl Extend<(char, ArgMode)> for ShortOpts {
    fn extend<I: IntoIterator<Item = (char, ArgMode)>>(&mut self, iter: I) {
        self.modes.extend(iter);
    }
}

impl<'a> Extend<(&'a char, &'a ArgMode)> for ShortOpts {
    fn extend<I: IntoIterator<Item = (&'a char, &'a ArgMode)>>(&mut self, iter: I) {
        self.modes.extend(iter.into_iter().map(|(&c, &m)| (c, m)));
    }
}

impl<'a> IntoIterator for &'a ShortOpts {
    type Item = (&'a char, &'a ArgMode);
    type IntoIter = std::collections::hash_map::Iter<'a, char, ArgMode>;

    fn into_iter(self) -> Self::IntoIter {
        self.modes.iter()
    }
}

/// A long option. `short` is the key emitted for it; `None` means the
/// option has no short form and is reported by its long name instead.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LongOpt {
    #[serde(default)]
    pub short: Option<char>,
    pub long: String,
    #[serde(default)]
    pub arg: ArgMode,
}

impl LongOpt {
    pub fn new(short: char, long: impl Into<String>, arg: ArgMode) -> Self {
        Self {
            short: Some(short),
            long: long.into(),
            arg,
        }
    }

    pub fn long_only(long: impl Into<String>, arg: ArgMode) -> Self {
        Self {
            short: None,
            long: long.into(),
            arg,
        }
    }
}

/// Parses `[S/]NAME[:|::]`, e.g. `c/change:` or `verbose`.
impl FromStr for LongOpt {
    type Err = TableError;

    fn from_str(spec: &str) -> Result<Self, Self::Err> {
        let (body, arg) = if let Some(body) = spec.strip_suffix("::") {
            (body, ArgMode::Optional)
        } else if let Some(body) = spec.strip_suffix(':') {
            (body, ArgMode::Required)
        } else {
            (spec, ArgMode::None)
        };

        let (short, long) = match body.split_once('/') {
            Some((alias, long)) => {
                let mut chars = alias.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => (Some(c), long),
                    _ => {
                        return Err(TableError::InvalidShort {
                            spec: spec.to_string(),
                        });
                    }
                }
            }
            None => (None, body),
        };

        if long.is_empty() {
            return Err(TableError::EmptyLongName {
                spec: spec.to_string(),
            });
        }

        Ok(Self {
            short,
            long: long.to_string(),
            arg,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_option_string_modes() {
        let opts = ShortOpts::parse("abλc:dßĦ::");

        assert_eq!(opts.len(), 7);
        assert_eq!(opts.mode('a'), Some(ArgMode::None));
        assert_eq!(opts.mode('λ'), Some(ArgMode::None));
        assert_eq!(opts.mode('c'), Some(ArgMode::Required));
        assert_eq!(opts.mode('ß'), Some(ArgMode::None));
        assert_eq!(opts.mode('Ħ'), Some(ArgMode::Optional));
        assert_eq!(opts.mode(':'), None);
        assert_eq!(opts.mode('X'), None);
    }

    #[test]
    fn ignores_leading_colon() {
        let opts = ShortOpts::parse(":a:b");
        assert_eq!(opts.len(), 2);
        assert_eq!(opts.mode('a'), Some(ArgMode::Required));
        assert_eq!(opts.mode('b'), Some(ArgMode::None));
    }

    #[test]
    fn empty_option_string_is_empty_table() {
        assert!(ShortOpts::parse("").is_empty());
        assert!(ShortOpts::parse(":").is_empty());
    }

    #[test]
    fn last_duplicate_wins() {
        let opts = ShortOpts::parse("a:a");
        assert_eq!(opts.mode('a'), Some(ArgMode::None));

        let opts: ShortOpts = [('x', ArgMode::None), ('x', ArgMode::Optional)]
            .into_iter()
            .collect();
        assert_eq!(opts.mode('x'), Some(ArgMode::Optional));
    }

    #[test]
    fn option_string_and_pairs_agree() {
        let from_str: ShortOpts = "ab:c::".parse().unwrap();
        let from_pairs: ShortOpts = [
            ('a', ArgMode::None),
            ('b', ArgMode::Required),
            ('c', ArgMode::Optional),
        ]
        .into_iter()
        .collect();
        assert_eq!(from_str, from_pairs);
    }

    #[test]
    fn from_long_skips_entries_without_alias() {
        let long = [
            LongOpt::new('c', "change", ArgMode::Required),
            LongOpt::long_only("verbose", ArgMode::None),
        ];
        let opts = ShortOpts::from_long(&long);
        assert_eq!(opts.len(), 1);
        assert_eq!(opts.mode('c'), Some(ArgMode::Required));
    }

    #[test]
    fn parses_long_spec() {
        assert_eq!(
            "c/change:".parse::<LongOpt>().unwrap(),
            LongOpt::new('c', "change", ArgMode::Required)
        );
        assert_eq!(
            "Ħ/Ħaġrat::".parse::<LongOpt>().unwrap(),
            LongOpt::new('Ħ', "Ħaġrat", ArgMode::Optional)
        );
        assert_eq!(
            "verbose".parse::<LongOpt>().unwrap(),
            LongOpt::long_only("verbose", ArgMode::None)
        );
    }

    #[test]
    fn rejects_bad_long_spec() {
        assert!(matches!(
            "c/:".parse::<LongOpt>(),
            Err(TableError::EmptyLongName { .. })
        ));
        assert!(matches!(
            "cd/change".parse::<LongOpt>(),
            Err(TableError::InvalidShort { .. })
        ));
        assert!(matches!(
            "/change".parse::<LongOpt>(),
            Err(TableError::InvalidShort { .. })
        ));
    }

    #[test]
    fn deserializes_long_opt() {
        let opt: LongOpt =
            toml::from_str("short = \"c\"\nlong = \"change\"\narg = \"required\"\n").unwrap();
        assert_eq!(opt, LongOpt::new('c', "change", ArgMode::Required));

        let opt: LongOpt = toml::from_str("long = \"verbose\"\n").unwrap();
        assert_eq!(opt, LongOpt::long_only("verbose", ArgMode::None));
    }
}
