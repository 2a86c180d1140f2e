use log::{debug, trace};

use crate::expression::ast::{Bindings, Expression};
use crate::expression::errors::ExpressionError;

impl Expression {
    /// Evaluates the expression with every symbol looked up in `bindings`.
    ///
    /// Arithmetic follows IEEE-754: division by zero, logarithms of
    /// non-positive values and the like produce infinities or NaN, not errors.
    ///
    /// # Errors
    ///
    /// Returns [`ExpressionError::UnboundVariable`] for the first symbol
    /// (left to right) that has no entry in `bindings`.
    pub fn evaluate(&self, bindings: &Bindings) -> Result<f64, ExpressionError> {
        debug!("Evaluating expression: {}", self);

        let result = self.evaluate_node(bindings);

        match &result {
            Ok(value) => debug!("Expression evaluated to: {}", value),
            Err(e) => debug!("Expression evaluation failed: {}", e),
        }

        result
    }

    fn evaluate_node(&self, bindings: &Bindings) -> Result<f64, ExpressionError> {
        match self {
            Expression::Const(value) => Ok(*value),
            Expression::Symbol(name) => match bindings.get(&**name) {
                Some(value) => Ok(*value),
                None => {
                    trace!("No binding for symbol '{}'", name);
                    Err(ExpressionError::UnboundVariable(name.to_string()))
                }
            },
            Expression::Sin(f) => Ok(f.evaluate_node(bindings)?.sin()),
            Expression::Cos(f) => Ok(f.evaluate_node(bindings)?.cos()),
            Expression::Ln(f) => Ok(f.evaluate_node(bindings)?.ln()),
            Expression::Add(l, r) => {
                let left = l.evaluate_node(bindings)?;
                let right = r.evaluate_node(bindings)?;
                Ok(left + right)
            }
            Expression::Sub(l, r) => {
                let left = l.evaluate_node(bindings)?;
                let right = r.evaluate_node(bindings)?;
                Ok(left - right)
            }
            Expression::Mul(l, r) => {
                let left = l.evaluate_node(bindings)?;
                let right = r.evaluate_node(bindings)?;
                Ok(left * right)
            }
            Expression::Div(l, r) => {
                let left = l.evaluate_node(bindings)?;
                let right = r.evaluate_node(bindings)?;
                Ok(left / right)
            }
            Expression::Pow(l, r) => {
                let base = l.evaluate_node(bindings)?;
                let exponent = r.evaluate_node(bindings)?;
                Ok(base.powf(exponent))
            }
        }
    }
}
