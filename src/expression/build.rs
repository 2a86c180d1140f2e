//! Simplifying constructors.
//!
//! Every composite node is created through one of these functions. Each one
//! inspects its (already simplified) children and returns a folded node when
//! a rule applies, so trees built bottom-up are simplified as they grow.

use std::sync::Arc;

use log::trace;

use crate::expression::ast::Expression;

#[inline]
fn is_literal(expr: &Expression, value: f64) -> bool {
    expr.as_const() == Some(value)
}

pub fn constant(value: f64) -> Expression {
    Expression::Const(value)
}

pub fn symbol(name: impl Into<Arc<str>>) -> Expression {
    Expression::Symbol(name.into())
}

/// Sine of `operand`. Never folded, even for constant operands.
pub fn sin(operand: Expression) -> Expression {
    Expression::Sin(Arc::new(operand))
}

/// Cosine of `operand`. Never folded, even for constant operands.
pub fn cos(operand: Expression) -> Expression {
    Expression::Cos(Arc::new(operand))
}

/// Natural logarithm; a constant operand folds (non-positive values give NaN or -inf).
pub fn ln(operand: Expression) -> Expression {
    match operand.as_const() {
        Some(value) => {
            trace!("Folding ln({})", value);
            constant(value.ln())
        }
        None => Expression::Ln(Arc::new(operand)),
    }
}

/// `-operand`, expressed as `-1 * operand`.
pub fn negate(operand: Expression) -> Expression {
    mul(constant(-1.0), operand)
}

pub fn add(left: Expression, right: Expression) -> Expression {
    match (left.as_const(), right.as_const()) {
        (Some(a), Some(b)) => {
            trace!("Folding {} + {}", a, b);
            constant(a + b)
        }
        (Some(a), _) if a == 0.0 => right,
        (_, Some(b)) if b == 0.0 => left,
        _ => Expression::Add(Arc::new(left), Arc::new(right)),
    }
}

pub fn sub(left: Expression, right: Expression) -> Expression {
    match (left.as_const(), right.as_const()) {
        (Some(a), Some(b)) => {
            trace!("Folding {} - {}", a, b);
            constant(a - b)
        }
        (Some(a), _) if a == 0.0 => negate(right),
        (_, Some(b)) if b == 0.0 => left,
        _ => Expression::Sub(Arc::new(left), Arc::new(right)),
    }
}

/// Product of `left` and `right`.
///
/// Rules, first match wins:
/// 1. both constant: fold
/// 2. either side `0`: `0`
/// 3. either side `1`: the other side
/// 4. a constant times a product holding a constant factor (on either
///    side of either operand): fold the two constants into one factor
pub fn mul(left: Expression, right: Expression) -> Expression {
    if let (Some(a), Some(b)) = (left.as_const(), right.as_const()) {
        trace!("Folding {} * {}", a, b);
        return constant(a * b);
    }
    if is_literal(&left, 0.0) || is_literal(&right, 0.0) {
        return constant(0.0);
    }
    if is_literal(&left, 1.0) {
        return right;
    }
    if is_literal(&right, 1.0) {
        return left;
    }
    if let Some(a) = left.as_const()
        && let Some(folded) = fold_into_product(a, &right)
    {
        return folded;
    }
    if let Some(b) = right.as_const()
        && let Some(folded) = fold_into_product(b, &left)
    {
        return folded;
    }
    Expression::Mul(Arc::new(left), Arc::new(right))
}

/// `outer * product` where `product` is a `Mul` with a constant child.
fn fold_into_product(outer: f64, product: &Expression) -> Option<Expression> {
    let Expression::Mul(l, r) = product else {
        return None;
    };
    if let Some(inner) = l.as_const() {
        trace!("Folding {} into product with factor {}", outer, inner);
        return Some(mul(constant(outer * inner), r.as_ref().clone()));
    }
    if let Some(inner) = r.as_const() {
        trace!("Folding {} into product with factor {}", outer, inner);
        return Some(mul(constant(outer * inner), l.as_ref().clone()));
    }
    None
}

/// Quotient; only folds when both sides are constant (`x / 0` stays IEEE).
pub fn div(left: Expression, right: Expression) -> Expression {
    match (left.as_const(), right.as_const()) {
        (Some(a), Some(b)) => {
            trace!("Folding {} / {}", a, b);
            constant(a / b)
        }
        _ => Expression::Div(Arc::new(left), Arc::new(right)),
    }
}

pub fn pow(base: Expression, exponent: Expression) -> Expression {
    match (base.as_const(), exponent.as_const()) {
        (Some(a), Some(b)) => {
            trace!("Folding {} ^ {}", a, b);
            constant(a.powf(b))
        }
        _ => Expression::Pow(Arc::new(base), Arc::new(exponent)),
    }
}
