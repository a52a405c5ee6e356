use thiserror::Error;

use crate::config::ConfigError;
use crate::output::OutputError;
use crate::scan::ParseError;

#[derive(Debug, Error)]
pub enum UnioptError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to render output: {0}")]
    Output(#[from] OutputError),
}
