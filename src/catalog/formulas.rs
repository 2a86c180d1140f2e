use log::debug;

use crate::catalog::errors::CatalogError;
use crate::expression::{Expression, add, constant, cos, div, ln, mul, pow, sin, sub, symbol};

/// A named function of one variable
pub struct Formula {
    pub name: &'static str,
    pub description: &'static str,
    build: fn(Expression) -> Expression,
}

impl Formula {
    /// Build the formula's tree in terms of `variable`
    pub fn build(&self, variable: &str) -> Expression {
        (self.build)(symbol(variable))
    }
}

static FORMULAS: [Formula; 8] = [
    Formula {
        name: "square",
        description: "x * x",
        build: |x| mul(x.clone(), x),
    },
    Formula {
        name: "cube",
        description: "x ^ 3",
        build: |x| pow(x, constant(3.0)),
    },
    Formula {
        name: "poly",
        description: "3 * x ^ 2 - 2 * x + 1",
        build: |x| {
            add(
                sub(
                    mul(constant(3.0), pow(x.clone(), constant(2.0))),
                    mul(constant(2.0), x),
                ),
                constant(1.0),
            )
        },
    },
    Formula {
        name: "sine",
        description: "sin( x )",
        build: sin,
    },
    Formula {
        name: "wave",
        description: "sin( x ) * cos( x )",
        build: |x| mul(sin(x.clone()), cos(x)),
    },
    Formula {
        name: "log",
        description: "ln( x )",
        build: ln,
    },
    Formula {
        name: "sinc",
        description: "sin( x ) / x",
        build: |x| div(sin(x.clone()), x),
    },
    Formula {
        name: "tower",
        description: "x ^ x",
        build: |x| pow(x.clone(), x),
    },
];

pub fn formulas() -> &'static [Formula] {
    &FORMULAS
}

/// # Errors
///
/// Returns an error if no built-in formula has the given name.
pub fn find_formula(name: &str) -> Result<&'static Formula, CatalogError> {
    debug!("Looking up formula '{}'", name);
    FORMULAS
        .iter()
        .find(|formula| formula.name == name)
        .ok_or_else(|| CatalogError::UnknownFormula(name.to_string()))
}
