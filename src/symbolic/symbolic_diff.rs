//! # Symbolic Differentiation Module
//!
//! Extends `Expr` with analytical differentiation. Implements the standard
//! calculus rules by exhaustive match over the expression tree:
//! - Power rule: d/dx(f^g) handled in its general form f^g * (g'*ln(f) + g*f'/f),
//!   with the common constant-exponent case folded to n*f^(n-1)*f'
//! - Product rule: d/dx(f*g) = f'*g + f*g'
//! - Quotient rule: d/dx(f/g) = (f'*g - g'*f)/g^2
//! - Chain rule for all supported functions

use crate::symbolic::symbolic_engine::Expr;

impl Expr {
    /// Computes the analytical derivative of the expression with respect to a variable.
    ///
    /// The result is not simplified; call `simplify()` on it to fold the
    /// constants the rules leave behind.
    ///
    /// # Examples
    /// ```rust, ignore
    /// let f = Expr::parse_expression("x^2").unwrap();
    /// let df_dx = f.diff("x").simplify(); // 2 * x
    /// ```
    pub fn diff(&self, var: &str) -> Expr {
        match self {
            Expr::Var(name) => {
                if name == var {
                    Expr::Const(1.0)
                } else {
                    Expr::Const(0.0)
                }
            }
            Expr::Const(_) => Expr::Const(0.0),
            Expr::Add(lhs, rhs) => Expr::Add(Box::new(lhs.diff(var)), Box::new(rhs.diff(var))),
            Expr::Sub(lhs, rhs) => Expr::Sub(Box::new(lhs.diff(var)), Box::new(rhs.diff(var))),
            Expr::Mul(lhs, rhs) => Expr::Add(
                Box::new(Expr::Mul(Box::new(lhs.diff(var)), rhs.clone())),
                Box::new(Expr::Mul(lhs.clone(), Box::new(rhs.diff(var)))),
            ),
            Expr::Div(lhs, rhs) => Expr::Div(
                Box::new(Expr::Sub(
                    Box::new(Expr::Mul(Box::new(lhs.diff(var)), rhs.clone())),
                    Box::new(Expr::Mul(Box::new(rhs.diff(var)), lhs.clone())),
                )),
                Box::new(Expr::Mul(rhs.clone(), rhs.clone())),
            ),
            Expr::Pow(base, exp) => {
                if let Expr::Const(n) = **exp {
                    // n * base^(n-1) * base'
                    Expr::Mul(
                        Box::new(Expr::Mul(
                            Box::new(Expr::Const(n)),
                            Box::new(Expr::Pow(base.clone(), Box::new(Expr::Const(n - 1.0)))),
                        )),
                        Box::new(base.diff(var)),
                    )
                } else {
                    // f^g * (g' * ln(f) + g * f' / f)
                    Expr::Mul(
                        Box::new(self.clone()),
                        Box::new(Expr::Add(
                            Box::new(Expr::Mul(
                                Box::new(exp.diff(var)),
                                Box::new(Expr::Ln(base.clone())),
                            )),
                            Box::new(Expr::Div(
                                Box::new(Expr::Mul(exp.clone(), Box::new(base.diff(var)))),
                                base.clone(),
                            )),
                        )),
                    )
                }
            }
            Expr::Exp(expr) => Expr::Mul(
                Box::new(Expr::Exp(expr.clone())),
                Box::new(expr.diff(var)),
            ),
            Expr::Ln(expr) => Expr::Div(Box::new(expr.diff(var)), expr.clone()),
            Expr::sin(expr) => Expr::Mul(
                Box::new(Expr::cos(expr.clone())),
                Box::new(expr.diff(var)),
            ),
            Expr::cos(expr) => Expr::Mul(
                Box::new(Expr::Mul(
                    Box::new(Expr::Const(-1.0)),
                    Box::new(Expr::sin(expr.clone())),
                )),
                Box::new(expr.diff(var)),
            ),
            Expr::tg(expr) => Expr::Div(
                Box::new(expr.diff(var)),
                Box::new(Expr::Pow(
                    Box::new(Expr::cos(expr.clone())),
                    Box::new(Expr::Const(2.0)),
                )),
            ),
            Expr::ctg(expr) => Expr::Mul(
                Box::new(Expr::Const(-1.0)),
                Box::new(Expr::Div(
                    Box::new(expr.diff(var)),
                    Box::new(Expr::Pow(
                        Box::new(Expr::sin(expr.clone())),
                        Box::new(Expr::Const(2.0)),
                    )),
                )),
            ),
        }
    }
}
