use std::collections::HashMap;
use std::sync::Arc;

/// Values assigned to symbols when evaluating an expression
pub type Bindings = HashMap<String, f64>;

/// A node of an expression tree.
///
/// Children live behind `Arc`, so a subtree may be shared by several parents
/// and cloning any node is cheap. Trees are never mutated after construction.
///
/// Build trees with the constructors in [`crate::expression`] (`add`, `mul`,
/// `sin`, ...) rather than the variants directly: the constructors simplify
/// each node as it is created.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Const(f64),
    Symbol(Arc<str>),
    Sin(Arc<Expression>),
    Cos(Arc<Expression>),
    Ln(Arc<Expression>),
    Add(Arc<Expression>, Arc<Expression>),
    Sub(Arc<Expression>, Arc<Expression>),
    Mul(Arc<Expression>, Arc<Expression>),
    Div(Arc<Expression>, Arc<Expression>),
    Pow(Arc<Expression>, Arc<Expression>), // Pow(base, exponent)
}

impl Expression {
    /// The literal value of a `Const` node, `None` for every other variant
    #[inline]
    pub fn as_const(&self) -> Option<f64> {
        match self {
            Expression::Const(value) => Some(*value),
            _ => None,
        }
    }
}
