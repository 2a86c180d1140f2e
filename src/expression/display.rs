use std::fmt;

use crate::expression::ast::Expression;

/// Binding strength used to decide where parentheses are needed.
/// `3` marks a leading minus: a negative constant or a `-1 * f` product.
fn precedence(expr: &Expression) -> u8 {
    match expr {
        Expression::Add(_, _) | Expression::Sub(_, _) => 1,
        Expression::Mul(l, _) if l.as_const() == Some(-1.0) => 3,
        Expression::Mul(_, _) | Expression::Div(_, _) => 2,
        Expression::Const(n) if n.is_sign_negative() => 3,
        Expression::Pow(_, _) => 4,
        Expression::Const(_)
        | Expression::Symbol(_)
        | Expression::Sin(_)
        | Expression::Cos(_)
        | Expression::Ln(_) => 5,
    }
}

/// Whether the rendered form starts with a minus sign (including `-0`)
pub(super) fn leads_with_minus(expr: &Expression) -> bool {
    match expr {
        Expression::Const(n) => n.is_sign_negative(),
        Expression::Add(l, _)
        | Expression::Sub(l, _)
        | Expression::Mul(l, _)
        | Expression::Div(l, _) => leads_with_minus(l),
        _ => false,
    }
}

fn write_with_parens(f: &mut fmt::Formatter, expr: &Expression, need_parens: bool) -> fmt::Result {
    if need_parens {
        write!(f, "(")?;
        fmt_expression(f, expr)?;
        write!(f, ")")
    } else {
        fmt_expression(f, expr)
    }
}

fn fmt_expression(f: &mut fmt::Formatter, expr: &Expression) -> fmt::Result {
    match expr {
        Expression::Const(n) => write!(f, "{}", n),
        Expression::Symbol(name) => write!(f, "{}", name),
        Expression::Sin(e) => {
            write!(f, "sin( ")?;
            fmt_expression(f, e)?;
            write!(f, " )")
        }
        Expression::Cos(e) => {
            write!(f, "cos( ")?;
            fmt_expression(f, e)?;
            write!(f, " )")
        }
        Expression::Ln(e) => {
            write!(f, "ln( ")?;
            fmt_expression(f, e)?;
            write!(f, " )")
        }
        Expression::Add(l, r) => {
            fmt_expression(f, l)?;
            write!(f, " + ")?;
            write_with_parens(f, r, leads_with_minus(r))
        }
        Expression::Sub(l, r) => {
            let rp = precedence(r);
            fmt_expression(f, l)?;
            write!(f, " - ")?;
            write_with_parens(f, r, rp <= 1 || leads_with_minus(r))
        }
        Expression::Mul(l, r) => {
            if l.as_const() == Some(-1.0) {
                write!(f, "-")?;
                return write_with_parens(f, r, precedence(r) <= 3);
            }
            let lp = precedence(l);
            let rp = precedence(r);
            write_with_parens(f, l, lp < 2)?;
            write!(f, " * ")?;
            write_with_parens(f, r, rp < 2 || leads_with_minus(r))
        }
        Expression::Div(l, r) => {
            let lp = precedence(l);
            let rp = precedence(r);
            write_with_parens(f, l, lp < 2)?;
            write!(f, " / ")?;
            write_with_parens(f, r, rp <= 3)
        }
        Expression::Pow(l, r) => {
            let lp = precedence(l);
            let rp = precedence(r);
            write_with_parens(f, l, lp <= 4)?;
            write!(f, " ^ ")?;
            write_with_parens(f, r, rp < 4)
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt_expression(f, self)
    }
}

impl Expression {
    /// Formula-style rendering, identical to the `Display` output
    pub fn render(&self) -> String {
        self.to_string()
    }
}
