use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("long option spec {spec:?} has an empty name")]
    EmptyLongName { spec: String },

    #[error("long option spec {spec:?} has a short alias that is not a single character")]
    InvalidShort { spec: String },
}
