use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExpressionError {
    #[error("Unbound variable: {0}")]
    UnboundVariable(String),
}
