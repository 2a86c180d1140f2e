use crate::expression::ast::Expression;
use crate::expression::display::leads_with_minus;

impl Expression {
    /// Render the expression as LaTeX without hiding numeric factors.
    /// - Always shows coefficients (including -1) explicitly
    /// - Uses \cdot for multiplication
    /// - Uses \frac for division
    /// - Wraps function arguments in \left( \right)
    pub fn to_latex(&self) -> String {
        fn precedence(expr: &Expression) -> u8 {
            match expr {
                Expression::Add(_, _) | Expression::Sub(_, _) => 1,
                Expression::Mul(_, _) | Expression::Div(_, _) => 2,
                Expression::Const(n) if n.is_sign_negative() => 3,
                Expression::Pow(_, _) => 4,
                _ => 5,
            }
        }

        fn wrap_parens(s: String) -> String {
            format!("\\left({}\\right)", s)
        }

        fn function(name: &str, arg: &Expression) -> String {
            format!("\\{}{}", name, wrap_parens(fmt(arg)))
        }

        fn fmt(expr: &Expression) -> String {
            match expr {
                Expression::Const(n) => number_to_string(*n),
                Expression::Symbol(name) => name.to_string(),
                Expression::Sin(e) => function("sin", e),
                Expression::Cos(e) => function("cos", e),
                Expression::Ln(e) => function("ln", e),
                Expression::Add(l, r) => {
                    let mut rs = fmt(r);
                    if leads_with_minus(r) {
                        rs = wrap_parens(rs);
                    }
                    format!("{} + {}", fmt(l), rs)
                }
                Expression::Sub(l, r) => {
                    let rp = precedence(r);
                    let mut rs = fmt(r);
                    if rp <= 1 || leads_with_minus(r) {
                        rs = wrap_parens(rs);
                    }
                    format!("{} - {}", fmt(l), rs)
                }
                Expression::Mul(l, r) => {
                    let lp = precedence(l);
                    let rp = precedence(r);
                    let mut ls = fmt(l);
                    let mut rs = fmt(r);
                    if lp < 2 {
                        ls = wrap_parens(ls);
                    }
                    if rp < 2 || leads_with_minus(r) {
                        rs = wrap_parens(rs);
                    }
                    format!("{} \\cdot {}", ls, rs)
                }
                Expression::Div(l, r) => {
                    format!("\\frac{{{}}}{{{}}}", fmt(l), fmt(r))
                }
                Expression::Pow(l, r) => {
                    let mut base = fmt(l);
                    if precedence(l) <= 4 {
                        base = wrap_parens(base);
                    }
                    format!("{}^{{{}}}", base, fmt(r))
                }
            }
        }

        fn number_to_string(n: f64) -> String {
            // Integers without trailing .0; zero keeps its sign
            if n == 0.0 {
                format!("{}", n)
            } else if n.fract() == 0.0 && n.is_finite() && n.abs() < 1e18 {
                format!("{}", n.trunc() as i64)
            } else if n.is_infinite() {
                if n.is_sign_positive() {
                    String::from("\\infty")
                } else {
                    String::from("-\\infty")
                }
            } else if n.is_nan() {
                String::from("\\mathrm{NaN}")
            } else {
                format!("{}", n)
            }
        }

        fmt(self)
    }
}
