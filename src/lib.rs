//! Calcus - expression trees with symbolic differentiation
//!
//! Trees are built through simplifying constructors (`add`, `mul`, `sin`, ...)
//! that fold constants and drop identity elements as each node is created.
//! Every tree can be evaluated against variable bindings, differentiated with
//! respect to a named variable, and rendered as a formula or as LaTeX.

pub mod catalog;
pub mod expression;
pub mod sampling;

// Re-export the main public API
pub use catalog::{CatalogError, Formula, find_formula, formulas, validate_variable_name};
pub use expression::{
    Bindings, Expression, ExpressionError, add, constant, cos, div, ln, mul, negate, pow, sin,
    sub, symbol,
};
pub use sampling::{Sample, SampleGrid, Sampler, SamplingError};

/// Evaluate the derivative of `function` with respect to `variable`
///
/// This is a convenience function that differentiates and evaluates in one
/// step. Use [`Sampler`] when the same derivative is needed at many points.
///
/// # Arguments
///
/// * `function` - The expression to differentiate
/// * `variable` - Name of the variable to differentiate with respect to
/// * `bindings` - Values for every symbol the derivative refers to
///
/// # Errors
///
/// Returns [`ExpressionError::UnboundVariable`] if the derivative refers to a
/// symbol that is missing from `bindings`.
///
/// # Examples
///
/// ```
/// use calcus::{Bindings, mul, slope_at, symbol};
///
/// let x = symbol("x");
/// let square = mul(x.clone(), x);
/// let bindings: Bindings = [("x".to_string(), 3.0)].into_iter().collect();
/// assert_eq!(slope_at(&square, "x", &bindings), Ok(6.0));
/// ```
pub fn slope_at(
    function: &Expression,
    variable: &str,
    bindings: &Bindings,
) -> Result<f64, ExpressionError> {
    function.differentiate(variable).evaluate(bindings)
}
