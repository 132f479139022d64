//! # Symbolic Expression Simplification Module
//!
//! Algebraic simplification for symbolic expressions. The differentiation and
//! integration rules leave constants like `2 * x^1 * 1` behind; this module
//! folds them away before results are rendered to the display buffer.
//!
//! The strategy is layered:
//! 1. **Constant Folding**: arithmetic on numerical constants is evaluated
//! 2. **Algebraic Identities**: x + 0 = x, x * 1 = x, 0 * x = 0, x^1 = x, ...
//! 3. **Fixpoint Iteration**: one bottom-up pass can expose new folding
//!    opportunities, so passes repeat until the tree stops changing

use crate::symbolic::symbolic_engine::Expr;

impl Expr {
    /// Simplifies the expression by repeated bottom-up rewriting until a fixpoint.
    pub fn simplify(&self) -> Expr {
        let mut current = self.clone();
        // each pass strictly shrinks or preserves the tree; the bound guards
        // against a rewrite pair oscillating
        for _ in 0..64 {
            let next = current.simplify_once();
            if next == current {
                break;
            }
            current = next;
        }
        current
    }

    /// One bottom-up simplification pass: children first, then local rules.
    fn simplify_once(&self) -> Expr {
        match self {
            Expr::Var(_) | Expr::Const(_) => self.clone(),
            Expr::Add(lhs, rhs) => {
                let lhs = lhs.simplify_once();
                let rhs = rhs.simplify_once();
                match (&lhs, &rhs) {
                    (Expr::Const(a), Expr::Const(b)) => Expr::Const(a + b),
                    (Expr::Const(c), _) if *c == 0.0 => rhs,
                    (_, Expr::Const(c)) if *c == 0.0 => lhs,
                    _ => Expr::Add(Box::new(lhs), Box::new(rhs)),
                }
            }
            Expr::Sub(lhs, rhs) => {
                let lhs = lhs.simplify_once();
                let rhs = rhs.simplify_once();
                match (&lhs, &rhs) {
                    (Expr::Const(a), Expr::Const(b)) => Expr::Const(a - b),
                    (_, Expr::Const(c)) if *c == 0.0 => lhs,
                    (Expr::Const(c), _) if *c == 0.0 => {
                        Expr::Mul(Box::new(Expr::Const(-1.0)), Box::new(rhs))
                    }
                    _ if lhs == rhs => Expr::Const(0.0),
                    _ => Expr::Sub(Box::new(lhs), Box::new(rhs)),
                }
            }
            Expr::Mul(lhs, rhs) => {
                let lhs = lhs.simplify_once();
                let rhs = rhs.simplify_once();
                match (&lhs, &rhs) {
                    (Expr::Const(a), Expr::Const(b)) => Expr::Const(a * b),
                    (Expr::Const(c), _) if *c == 0.0 => Expr::Const(0.0),
                    (_, Expr::Const(c)) if *c == 0.0 => Expr::Const(0.0),
                    (Expr::Const(c), _) if *c == 1.0 => rhs,
                    (_, Expr::Const(c)) if *c == 1.0 => lhs,
                    // constants to the left so folds chain: x * 2 -> 2 * x
                    (_, Expr::Const(_)) => Expr::Mul(Box::new(rhs), Box::new(lhs)),
                    _ => Expr::Mul(Box::new(lhs), Box::new(rhs)),
                }
            }
            Expr::Div(lhs, rhs) => {
                let lhs = lhs.simplify_once();
                let rhs = rhs.simplify_once();
                match (&lhs, &rhs) {
                    (Expr::Const(a), Expr::Const(b)) if *b != 0.0 => Expr::Const(a / b),
                    (Expr::Const(c), _) if *c == 0.0 => Expr::Const(0.0),
                    (_, Expr::Const(c)) if *c == 1.0 => lhs,
                    _ => Expr::Div(Box::new(lhs), Box::new(rhs)),
                }
            }
            Expr::Pow(base, exp) => {
                let base = base.simplify_once();
                let exp = exp.simplify_once();
                match (&base, &exp) {
                    (Expr::Const(a), Expr::Const(b)) if a.powf(*b).is_finite() => {
                        Expr::Const(a.powf(*b))
                    }
                    (_, Expr::Const(c)) if *c == 0.0 => Expr::Const(1.0),
                    (_, Expr::Const(c)) if *c == 1.0 => base,
                    (Expr::Const(c), _) if *c == 1.0 => Expr::Const(1.0),
                    _ => Expr::Pow(Box::new(base), Box::new(exp)),
                }
            }
            Expr::Exp(expr) => Self::simplify_function(expr, Expr::Exp, f64::exp),
            Expr::Ln(expr) => Self::simplify_function(expr, Expr::Ln, f64::ln),
            Expr::sin(expr) => Self::simplify_function(expr, Expr::sin, f64::sin),
            Expr::cos(expr) => Self::simplify_function(expr, Expr::cos, f64::cos),
            Expr::tg(expr) => Self::simplify_function(expr, Expr::tg, f64::tan),
            Expr::ctg(expr) => Self::simplify_function(expr, Expr::ctg, |v| 1.0 / v.tan()),
        }
    }

    /// fold a function of a constant argument to a constant, if the result is finite
    fn simplify_function(
        inner: &Expr,
        ctor: fn(Box<Expr>) -> Expr,
        eval: fn(f64) -> f64,
    ) -> Expr {
        let inner = inner.simplify_once();
        if let Expr::Const(c) = inner {
            let folded = eval(c);
            if folded.is_finite() {
                return Expr::Const(folded);
            }
        }
        ctor(Box::new(inner))
    }
}
