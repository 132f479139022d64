//! # Symbolic Integration Module
//!
//! Symbolic indefinite integration for the `Expr` tree. This module deals with
//! simple integrals: sums, constant factors, the power rule, and the standard
//! function integrals with a linear inner argument. Anything beyond that is an
//! error, which the calculator renders as an invalid-function failure.
//!
//! The constant of integration is deliberately omitted from every result.

use crate::symbolic::symbolic_engine::Expr;

impl Expr {
    /// Integrates with respect to a variable.
    /// Returns the indefinite integral (without constant of integration).
    pub fn integrate(&self, var: &str) -> Result<Expr, String> {
        match self {
            // ∫ c dx = c*x
            Expr::Const(c) => Ok(Expr::Const(*c) * Expr::Var(var.to_string())),

            // ∫ x dx = x²/2, ∫ y dx = y*x (if y ≠ x)
            Expr::Var(name) => {
                if name == var {
                    Ok(Expr::Pow(
                        Box::new(Expr::Var(var.to_string())),
                        Box::new(Expr::Const(2.0)),
                    ) / Expr::Const(2.0))
                } else {
                    Ok(Expr::Var(name.clone()) * Expr::Var(var.to_string()))
                }
            }

            // ∫ (f + g) dx = ∫ f dx + ∫ g dx
            Expr::Add(lhs, rhs) => {
                let lhs_int = lhs.integrate(var)?;
                let rhs_int = rhs.integrate(var)?;
                Ok(lhs_int + rhs_int)
            }

            // ∫ (f - g) dx = ∫ f dx - ∫ g dx
            Expr::Sub(lhs, rhs) => {
                let lhs_int = lhs.integrate(var)?;
                let rhs_int = rhs.integrate(var)?;
                Ok(lhs_int - rhs_int)
            }

            Expr::Mul(lhs, rhs) => self.integrate_multiplication(lhs, rhs, var),

            Expr::Div(lhs, rhs) => self.integrate_division(lhs, rhs, var),

            // ∫ x^n dx = x^(n+1)/(n+1) for n ≠ -1
            Expr::Pow(base, exp) => self.integrate_power(base, exp, var),

            // ∫ exp(a*x+b) dx = exp(a*x+b)/a
            Expr::Exp(inner) => {
                let (a, _) = Self::linear_parts(inner, var)
                    .ok_or_else(|| format!("Cannot integrate exp({})", inner))?;
                Ok(Expr::Exp(inner.clone()) / Expr::Const(a))
            }

            // ∫ ln(a*x+b) dx = ((a*x+b)*ln(a*x+b) - (a*x+b))/a, by parts
            Expr::Ln(inner) => {
                let (a, _) = Self::linear_parts(inner, var)
                    .ok_or_else(|| format!("Cannot integrate ln({})", inner))?;
                let u = (**inner).clone();
                Ok((u.clone() * Expr::Ln(inner.clone()) - u) / Expr::Const(a))
            }

            // ∫ sin(a*x+b) dx = -cos(a*x+b)/a
            Expr::sin(inner) => {
                let (a, _) = Self::linear_parts(inner, var)
                    .ok_or_else(|| format!("Cannot integrate sin({})", inner))?;
                Ok(-Expr::cos(inner.clone()) / Expr::Const(a))
            }

            // ∫ cos(a*x+b) dx = sin(a*x+b)/a
            Expr::cos(inner) => {
                let (a, _) = Self::linear_parts(inner, var)
                    .ok_or_else(|| format!("Cannot integrate cos({})", inner))?;
                Ok(Expr::sin(inner.clone()) / Expr::Const(a))
            }

            // ∫ tg(a*x+b) dx = -ln(cos(a*x+b))/a
            Expr::tg(inner) => {
                let (a, _) = Self::linear_parts(inner, var)
                    .ok_or_else(|| format!("Cannot integrate tg({})", inner))?;
                Ok(-Expr::Ln(Box::new(Expr::cos(inner.clone()))) / Expr::Const(a))
            }

            // ∫ ctg(a*x+b) dx = ln(sin(a*x+b))/a
            Expr::ctg(inner) => {
                let (a, _) = Self::linear_parts(inner, var)
                    .ok_or_else(|| format!("Cannot integrate ctg({})", inner))?;
                Ok(Expr::Ln(Box::new(Expr::sin(inner.clone()))) / Expr::Const(a))
            }
        }
    }

    /// Multiplication: a constant factor moves outside the integral.
    fn integrate_multiplication(&self, lhs: &Expr, rhs: &Expr, var: &str) -> Result<Expr, String> {
        if !lhs.contains_variable(var) {
            let rhs_int = rhs.integrate(var)?;
            return Ok(lhs.clone() * rhs_int);
        }

        if !rhs.contains_variable(var) {
            let lhs_int = lhs.integrate(var)?;
            return Ok(rhs.clone() * lhs_int);
        }

        Err(format!("Cannot integrate product: {} * {}", lhs, rhs))
    }

    /// Division: constant denominators factor out, f'/f integrates to ln(f).
    fn integrate_division(&self, lhs: &Expr, rhs: &Expr, var: &str) -> Result<Expr, String> {
        // ∫ f(x)/c dx = (1/c) * ∫ f(x) dx
        if !rhs.contains_variable(var) {
            let lhs_int = lhs.integrate(var)?;
            return Ok(lhs_int / rhs.clone());
        }

        // ∫ f'(x)/f(x) dx = ln(f(x))
        if rhs.diff(var).simplify() == lhs.simplify() {
            return Ok(Expr::Ln(Box::new(rhs.clone())));
        }

        // ∫ 1/x dx = ln(x)
        if let (Expr::Const(c), Expr::Var(x)) = (lhs, rhs) {
            if *c == 1.0 && x == var {
                return Ok(Expr::Ln(Box::new(Expr::Var(var.to_string()))));
            }
        }

        Err(format!("Cannot integrate division: {} / {}", lhs, rhs))
    }

    /// Power rule, including a linear inner base: ∫ (a*x+b)^n dx = (a*x+b)^(n+1)/(a*(n+1)).
    fn integrate_power(&self, base: &Expr, exp: &Expr, var: &str) -> Result<Expr, String> {
        let Expr::Const(n) = exp else {
            return Err(format!("Cannot integrate power: {} ^ {}", base, exp));
        };
        let Some((a, _)) = Self::linear_parts(base, var) else {
            return Err(format!("Cannot integrate power: {} ^ {}", base, exp));
        };

        // ∫ (a*x+b)^(-1) dx = ln(a*x+b)/a
        if (*n - (-1.0)).abs() < f64::EPSILON {
            return Ok(Expr::Ln(Box::new(base.clone())) / Expr::Const(a));
        }

        Ok(Expr::Pow(Box::new(base.clone()), Box::new(Expr::Const(n + 1.0)))
            / Expr::Const(a * (n + 1.0)))
    }

    /// Decomposes `expr` as `a*var + b` with numeric a and b; `a` must be nonzero.
    fn linear_parts(expr: &Expr, var: &str) -> Option<(f64, f64)> {
        let (a, b) = Self::linear_parts_inner(expr, var)?;
        if a == 0.0 { None } else { Some((a, b)) }
    }

    fn linear_parts_inner(expr: &Expr, var: &str) -> Option<(f64, f64)> {
        match expr {
            Expr::Var(name) if name == var => Some((1.0, 0.0)),
            Expr::Const(c) => Some((0.0, *c)),
            Expr::Add(lhs, rhs) => {
                let (a1, b1) = Self::linear_parts_inner(lhs, var)?;
                let (a2, b2) = Self::linear_parts_inner(rhs, var)?;
                Some((a1 + a2, b1 + b2))
            }
            Expr::Sub(lhs, rhs) => {
                let (a1, b1) = Self::linear_parts_inner(lhs, var)?;
                let (a2, b2) = Self::linear_parts_inner(rhs, var)?;
                Some((a1 - a2, b1 - b2))
            }
            Expr::Mul(lhs, rhs) => match (&**lhs, &**rhs) {
                (Expr::Const(c), other) | (other, Expr::Const(c)) => {
                    let (a, b) = Self::linear_parts_inner(other, var)?;
                    Some((c * a, c * b))
                }
                _ => None,
            },
            Expr::Div(lhs, rhs) => {
                if let Expr::Const(c) = &**rhs {
                    if *c != 0.0 {
                        let (a, b) = Self::linear_parts_inner(lhs, var)?;
                        return Some((a / c, b / c));
                    }
                }
                None
            }
            _ => None,
        }
    }
}
