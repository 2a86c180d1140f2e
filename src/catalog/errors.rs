use thiserror::Error;

/// Errors that can occur when looking up formulas or variable names
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    #[error("Unknown formula: {0}")]
    UnknownFormula(String),
    #[error("Variable name cannot be empty")]
    EmptyVariableName,
    #[error("Invalid variable name (expected a letter or '_' then letters, digits, '_'): {0}")]
    InvalidVariableName(String),
}
