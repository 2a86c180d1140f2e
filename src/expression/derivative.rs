use log::debug;

use crate::expression::ast::Expression;
use crate::expression::build::{add, constant, cos, div, ln, mul, negate, pow, sin, sub};

impl Expression {
    /// Symbolic derivative with respect to `variable`.
    ///
    /// The result is a new tree assembled through the simplifying
    /// constructors; `self` is left untouched and its subtrees are shared
    /// with the result where the rules reuse them.
    ///
    /// `ln(f)` differentiates to `1 / f`: the inner factor `f'` is not
    /// applied, so the result is only exact when `f` is the variable itself.
    pub fn differentiate(&self, variable: &str) -> Expression {
        debug!("Differentiating {} with respect to {}", self, variable);
        let derivative = self.derive(variable);
        debug!("Derivative: {}", derivative);
        derivative
    }

    fn derive(&self, variable: &str) -> Expression {
        match self {
            Expression::Const(_) => constant(0.0),
            Expression::Symbol(name) => {
                if &**name == variable {
                    constant(1.0)
                } else {
                    constant(0.0)
                }
            }
            Expression::Sin(f) => mul(f.derive(variable), cos(node(f))),
            Expression::Cos(f) => mul(f.derive(variable), negate(sin(node(f)))),
            Expression::Add(l, r) => add(l.derive(variable), r.derive(variable)),
            Expression::Sub(l, r) => sub(l.derive(variable), r.derive(variable)),
            Expression::Mul(l, r) => add(
                mul(l.derive(variable), node(r)),
                mul(node(l), r.derive(variable)),
            ),
            Expression::Div(l, r) => div(
                sub(
                    mul(l.derive(variable), node(r)),
                    mul(node(l), r.derive(variable)),
                ),
                pow(node(r), constant(2.0)),
            ),
            Expression::Ln(f) => div(constant(1.0), node(f)),
            // d(f^g) = f^g * (g/f * f' + g' * ln f)
            Expression::Pow(base, exponent) => mul(
                pow(node(base), node(exponent)),
                add(
                    mul(div(node(exponent), node(base)), base.derive(variable)),
                    mul(exponent.derive(variable), ln(node(base))),
                ),
            ),
        }
    }
}

/// Shallow copy of a shared child; its own children stay shared.
#[inline]
fn node(child: &std::sync::Arc<Expression>) -> Expression {
    child.as_ref().clone()
}
