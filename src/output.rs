use crate::scan::{Flag, Key, Parsed};
use crate::table::{LongOpt, ShortOpts};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Shell,
    Json,
    Jsonl,
}

/// The tables a parse ran against; `shell` output needs them to know
/// which flags carry a value.
pub struct Tables<'t> {
    pub short: &'t ShortOpts,
    pub long: &'t [LongOpt],
}

#[derive(Debug, Error)]
pub enum OutputError {
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("short option ‘-’ cannot be written in shell format; use json or jsonl")]
    DashFlag,
}

pub fn format_output<S: AsRef<str>>(
    format: OutputFormat,
    tables: &Tables<'_>,
    parsed: &Parsed<'_, S>,
) -> Result<String, OutputError> {
    match format {
        OutputFormat::Shell => format_shell(tables, parsed),
        OutputFormat::Json => Ok(format_json(parsed)?),
        OutputFormat::Jsonl => Ok(format_jsonl(parsed)?),
    }
}

fn rest_strs<'p, S: AsRef<str>>(parsed: &'p Parsed<'_, S>) -> Vec<&'p str> {
    parsed.rest.iter().map(|arg| arg.as_ref()).collect()
}

fn format_json<S: AsRef<str>>(parsed: &Parsed<'_, S>) -> Result<String, serde_json::Error> {
    #[derive(Serialize)]
    struct JsonReport<'a> {
        flags: &'a [Flag],
        rest: Vec<&'a str>,
    }

    serde_json::to_string_pretty(&JsonReport {
        flags: &parsed.flags,
        rest: rest_strs(parsed),
    })
}

fn format_jsonl<S: AsRef<str>>(parsed: &Parsed<'_, S>) -> Result<String, serde_json::Error> {
    #[derive(Serialize)]
    struct JsonlFlag<'a> {
        #[serde(rename = "type")]
        kind: &'static str,
        #[serde(flatten)]
        flag: &'a Flag,
    }

    #[derive(Serialize)]
    struct JsonlRest<'a> {
        #[serde(rename = "type")]
        kind: &'static str,
        args: Vec<&'a str>,
    }

    let mut lines = Vec::new();

    for flag in &parsed.flags {
        lines.push(serde_json::to_string(&JsonlFlag { kind: "flag", flag })?);
    }
    lines.push(serde_json::to_string(&JsonlRest {
        kind: "rest",
        args: rest_strs(parsed),
    })?);

    Ok(lines.join("\n"))
}

/// getopt(1)-style normalized command line, safe to `eval` in sh.
///
/// A short option `-` would print as the `--` terminator, so it is refused.
fn format_shell<S: AsRef<str>>(
    tables: &Tables<'_>,
    parsed: &Parsed<'_, S>,
) -> Result<String, OutputError> {
    let mut out = String::new();

    for flag in &parsed.flags {
        if flag.key == '-' {
            return Err(OutputError::DashFlag);
        }

        let takes_value = match &flag.key {
            Key::Short(c) => tables.short.mode(*c).or_else(|| {
                tables
                    .long
                    .iter()
                    .find(|opt| opt.short == Some(*c))
                    .map(|opt| opt.arg)
            }),
            Key::Long(name) => tables
                .long
                .iter()
                .find(|opt| &opt.long == name)
                .map(|opt| opt.arg),
        }
        .is_some_and(|mode| mode.takes_value());

        match &flag.key {
            Key::Short(c) => out.push_str(&format!(" -{c}")),
            Key::Long(name) => out.push_str(&format!(" --{name}")),
        }
        if takes_value {
            out.push(' ');
            out.push_str(&shell_quote(&flag.value));
        }
    }

    out.push_str(" --");
    for arg in parsed.rest {
        out.push(' ');
        out.push_str(&shell_quote(arg.as_ref()));
    }

    Ok(out)
}

fn shell_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', "'\\''"))
}
