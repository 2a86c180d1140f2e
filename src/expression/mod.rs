//! Expression trees: construction with eager simplification, evaluation,
//! symbolic differentiation and rendering

mod ast;
mod build;
mod derivative;
mod display;
mod errors;
mod eval;
mod latex;

pub use ast::{Bindings, Expression};
pub use build::{add, constant, cos, div, ln, mul, negate, pow, sin, sub, symbol};
pub use errors::ExpressionError;
