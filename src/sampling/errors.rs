use thiserror::Error;

use crate::expression::ExpressionError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SamplingError {
    #[error("Expression evaluation error: {0}")]
    ExpressionError(#[from] ExpressionError),
    #[error("Sample range bounds must be finite: start={start}, end={end}")]
    NonFiniteBound { start: f64, end: f64 },
    #[error("Invalid sample range: start={start} is greater than end={end}")]
    InvalidRange { start: f64, end: f64 },
    #[error("At least one sample point is required")]
    ZeroSamples,
}
