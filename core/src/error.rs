use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    #[error("chart '{chart}' plots field '{field}' missing from record {row} of dataset '{dataset}'")]
    MissingField {
        chart: &'static str,
        dataset: &'static str,
        field: &'static str,
        row: usize,
    },
    #[error("chart id '{0}' is declared more than once")]
    DuplicateChart(&'static str),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("unknown tab '{given}' (expected one of: {expected})")]
    UnknownTab { given: String, expected: String },
    #[error("invalid tick interval '{0}'")]
    InvalidTick(String),
    #[error("tick interval must be at least 1ms")]
    ZeroTick,
}
