use std::fmt;
use thiserror::Error;

/// The option a parse failed on, as the user typed it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum OptName {
    Short(char),
    Long(String),
}

impl fmt::Display for OptName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptName::Short(c) => write!(f, "-{c}"),
            OptName::Long(name) => write!(f, "--{name}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown option ‘{0}’")]
    UnknownOption(OptName),

    #[error("expected argument for option ‘{0}’")]
    MissingArgument(OptName),
}

impl ParseError {
    pub fn option(&self) -> &OptName {
        match self {
            ParseError::UnknownOption(name) | ParseError::MissingArgument(name) => name,
        }
    }
}
