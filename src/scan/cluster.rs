use super::{Cursor, Key, OptName, ParseError};
use crate::table::{ArgMode, ShortOpts};

/// Decodes the flags bundled in one `-xyz` token; `body` excludes the dash.
///
/// An argument-taking option that is not the last code point swallows the
/// rest of the token as its value. A required argument in last position
/// takes the next token verbatim. An optional one never does.
pub(super) fn decode<S: AsRef<str>>(
    body: &str,
    opts: &ShortOpts,
    cursor: &mut Cursor<'_, S>,
) -> Result<(), ParseError> {
    for (at, c) in body.char_indices() {
        let Some(mode) = opts.mode(c) else {
            return Err(ParseError::UnknownOption(OptName::Short(c)));
        };
        let attached = &body[at + c.len_utf8()..];

        match mode {
            ArgMode::None => cursor.push(Key::Short(c), String::new()),
            _ if !attached.is_empty() => {
                cursor.push(Key::Short(c), attached.to_string());
                return Ok(());
            }
            ArgMode::Required => {
                let value = cursor
                    .next_value()
                    .ok_or(ParseError::MissingArgument(OptName::Short(c)))?;
                cursor.push(Key::Short(c), value.to_string());
            }
            ArgMode::Optional => cursor.push(Key::Short(c), String::new()),
        }
    }

    Ok(())
}
