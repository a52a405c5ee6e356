use super::{Cursor, Key, OptName, ParseError};
use crate::table::{ArgMode, LongOpt};

/// Resolves one `--name[=value]` token; `token` excludes the dashes.
pub(super) fn resolve<S: AsRef<str>>(
    token: &str,
    long: &[LongOpt],
    cursor: &mut Cursor<'_, S>,
) -> Result<(), ParseError> {
    let (name, inline) = match token.split_once('=') {
        Some((name, value)) => (name, Some(value)),
        None => (token, None),
    };

    let Some(opt) = find_unique(name, long) else {
        return Err(ParseError::UnknownOption(OptName::Long(name.to_string())));
    };

    let value = match (opt.arg, inline) {
        (ArgMode::None, _) => String::new(),
        (_, Some(value)) => value.to_string(),
        (ArgMode::Required, None) => cursor
            .next_value()
            .ok_or_else(|| ParseError::MissingArgument(OptName::Long(name.to_string())))?
            .to_string(),
        (ArgMode::Optional, None) => String::new(),
    };

    cursor.push(key_of(opt), value);
    Ok(())
}

/// The single entry `name` is a prefix of. Ambiguity counts as no match.
fn find_unique<'o>(name: &str, long: &'o [LongOpt]) -> Option<&'o LongOpt> {
    let mut matches = long.iter().filter(|opt| opt.long.starts_with(name));
    match (matches.next(), matches.next()) {
        (Some(opt), None) => Some(opt),
        _ => None,
    }
}

fn key_of(opt: &LongOpt) -> Key {
    match opt.short {
        Some(c) => Key::Short(c),
        None => Key::Long(opt.long.clone()),
    }
}
