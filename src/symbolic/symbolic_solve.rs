//! # Symbolic Equation Solving Module
//!
//! Roots of `expr = 0` in one free variable. Polynomial expressions of degree
//! one and two are solved analytically (complex roots included, so `x^2 + 1`
//! has solutions rather than none). Everything else falls back to a sign-scan
//! plus bisection over [-100, 100], which finds the real roots the calculator
//! cares about for expressions like `exp(x) - 2` or cubics.

use crate::symbolic::symbolic_engine::Expr;
use num_complex::Complex64;

/// half-width of the numeric root scan window
const SCAN_RANGE: f64 = 100.0;
/// number of scan cells over the window
const SCAN_STEPS: usize = 4000;
/// bisection iterations per bracketed root
const BISECTION_ITERS: usize = 80;
/// two roots closer than this are the same root
const ROOT_TOLERANCE: f64 = 1e-6;

impl Expr {
    /// Solves `self = 0` for the given variable.
    ///
    /// Returns the root set sorted by real part, then imaginary part; the set
    /// is empty when the numeric fallback finds no real root in its window.
    /// Fails when the expression mentions other variables or contains no
    /// variable at all.
    pub fn solve(&self, var: &str) -> Result<Vec<Complex64>, String> {
        let vars = self.extract_variables();
        if let Some(other) = vars.iter().find(|name| *name != var) {
            return Err(format!("Equation contains a second unknown '{}'", other));
        }

        let simplified = self.simplify();
        let mut roots = match Self::poly_coeffs(&simplified, var) {
            Some(coeffs) => Self::solve_polynomial(&coeffs, &simplified, var)?,
            None => Self::scan_real_roots(&simplified, var)?,
        };

        roots.sort_by(|a, b| {
            a.re.partial_cmp(&b.re)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.im.partial_cmp(&b.im).unwrap_or(std::cmp::Ordering::Equal))
        });
        roots.dedup_by(|a, b| (*a - *b).norm() < ROOT_TOLERANCE);
        Ok(roots)
    }

    /// Roots of a polynomial given by its coefficient list (index = power).
    fn solve_polynomial(
        coeffs: &[f64],
        expr: &Expr,
        var: &str,
    ) -> Result<Vec<Complex64>, String> {
        let mut coeffs = coeffs.to_vec();
        while coeffs.len() > 1 && coeffs.last().is_some_and(|c| c.abs() < f64::EPSILON) {
            coeffs.pop();
        }

        match coeffs.len() {
            0 | 1 => {
                let c = coeffs.first().copied().unwrap_or(0.0);
                if c.abs() < f64::EPSILON {
                    Err("Equation holds for every value of the variable".to_string())
                } else {
                    Err(format!("'{} = 0' has no solutions", c))
                }
            }
            // a*x + b = 0
            2 => Ok(vec![Complex64::new(-coeffs[0] / coeffs[1], 0.0)]),
            // a*x^2 + b*x + c = 0
            3 => {
                let (c, b, a) = (coeffs[0], coeffs[1], coeffs[2]);
                let discriminant = b * b - 4.0 * a * c;
                if discriminant >= 0.0 {
                    let sqrt_d = discriminant.sqrt();
                    Ok(vec![
                        Complex64::new((-b - sqrt_d) / (2.0 * a), 0.0),
                        Complex64::new((-b + sqrt_d) / (2.0 * a), 0.0),
                    ])
                } else {
                    let sqrt_d = (-discriminant).sqrt();
                    Ok(vec![
                        Complex64::new(-b / (2.0 * a), -sqrt_d / (2.0 * a)),
                        Complex64::new(-b / (2.0 * a), sqrt_d / (2.0 * a)),
                    ])
                }
            }
            // higher degrees have no closed form worth carrying here
            _ => Self::scan_real_roots(expr, var),
        }
    }

    /// Sign scan over [-SCAN_RANGE, SCAN_RANGE] with bisection refinement.
    fn scan_real_roots(expr: &Expr, var: &str) -> Result<Vec<Complex64>, String> {
        let step = 2.0 * SCAN_RANGE / SCAN_STEPS as f64;
        let mut roots: Vec<f64> = Vec::new();
        let mut prev: Option<(f64, f64)> = None;

        for i in 0..=SCAN_STEPS {
            let x = -SCAN_RANGE + i as f64 * step;
            // points where the expression is undefined break the bracket chain
            let Ok(y) = expr.eval_at(var, x) else {
                prev = None;
                continue;
            };
            if y == 0.0 {
                roots.push(x);
                prev = None;
                continue;
            }
            if let Some((px, py)) = prev {
                if py * y < 0.0 {
                    roots.push(Self::bisect(expr, var, px, x)?);
                }
            }
            prev = Some((x, y));
        }

        Ok(roots.into_iter().map(|r| Complex64::new(r, 0.0)).collect())
    }

    fn bisect(expr: &Expr, var: &str, mut lo: f64, mut hi: f64) -> Result<f64, String> {
        let mut f_lo = expr.eval_at(var, lo)?;
        for _ in 0..BISECTION_ITERS {
            let mid = 0.5 * (lo + hi);
            let f_mid = expr.eval_at(var, mid)?;
            if f_mid == 0.0 {
                return Ok(mid);
            }
            if f_lo * f_mid < 0.0 {
                hi = mid;
            } else {
                lo = mid;
                f_lo = f_mid;
            }
        }
        Ok(0.5 * (lo + hi))
    }

    /// Extracts polynomial coefficients in `var` (index = power), or None if
    /// the expression is not a polynomial with numeric coefficients.
    fn poly_coeffs(expr: &Expr, var: &str) -> Option<Vec<f64>> {
        match expr {
            Expr::Const(c) => Some(vec![*c]),
            Expr::Var(name) if name == var => Some(vec![0.0, 1.0]),
            Expr::Var(_) => None,
            Expr::Add(lhs, rhs) => {
                let a = Self::poly_coeffs(lhs, var)?;
                let b = Self::poly_coeffs(rhs, var)?;
                Some(Self::poly_add(&a, &b, 1.0))
            }
            Expr::Sub(lhs, rhs) => {
                let a = Self::poly_coeffs(lhs, var)?;
                let b = Self::poly_coeffs(rhs, var)?;
                Some(Self::poly_add(&a, &b, -1.0))
            }
            Expr::Mul(lhs, rhs) => {
                let a = Self::poly_coeffs(lhs, var)?;
                let b = Self::poly_coeffs(rhs, var)?;
                Some(Self::poly_mul(&a, &b))
            }
            Expr::Div(lhs, rhs) => {
                if let Expr::Const(c) = &**rhs {
                    if *c != 0.0 {
                        let a = Self::poly_coeffs(lhs, var)?;
                        return Some(a.iter().map(|coeff| coeff / c).collect());
                    }
                }
                None
            }
            Expr::Pow(base, exp) => {
                let Expr::Const(n) = &**exp else { return None };
                if n.fract() != 0.0 || *n < 0.0 || *n > 32.0 {
                    return None;
                }
                let base = Self::poly_coeffs(base, var)?;
                let mut acc = vec![1.0];
                for _ in 0..(*n as usize) {
                    acc = Self::poly_mul(&acc, &base);
                }
                Some(acc)
            }
            _ => None,
        }
    }

    fn poly_add(a: &[f64], b: &[f64], sign: f64) -> Vec<f64> {
        let mut out = vec![0.0; a.len().max(b.len())];
        for (i, coeff) in a.iter().enumerate() {
            out[i] += coeff;
        }
        for (i, coeff) in b.iter().enumerate() {
            out[i] += sign * coeff;
        }
        out
    }

    fn poly_mul(a: &[f64], b: &[f64]) -> Vec<f64> {
        let mut out = vec![0.0; a.len() + b.len() - 1];
        for (i, ca) in a.iter().enumerate() {
            for (j, cb) in b.iter().enumerate() {
                out[i + j] += ca * cb;
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn real_roots(input: &str) -> Vec<f64> {
        let expr = Expr::parse_expression(input).unwrap();
        let roots = expr.solve("x").unwrap();
        assert!(roots.iter().all(|r| r.im == 0.0));
        roots.iter().map(|r| r.re).collect()
    }

    #[test]
    fn test_solve_quadratic() {
        let roots = real_roots("x^2 - 4");
        assert_eq!(roots, vec![-2.0, 2.0]);
    }

    #[test]
    fn test_solve_linear() {
        assert_eq!(real_roots("x + 5"), vec![-5.0]);
        assert_eq!(real_roots("2*x - 3"), vec![1.5]);
    }

    #[test]
    fn test_solve_double_root() {
        assert_eq!(real_roots("x^2"), vec![0.0]);
    }

    #[test]
    fn test_solve_complex_roots() {
        let expr = Expr::parse_expression("x^2 + 1").unwrap();
        let roots = expr.solve("x").unwrap();
        assert_eq!(roots.len(), 2);
        approx::assert_relative_eq!(roots[0].im, -1.0, epsilon = 1e-12);
        approx::assert_relative_eq!(roots[1].im, 1.0, epsilon = 1e-12);
        assert_eq!(roots[0].re, 0.0);
    }

    #[test]
    fn test_solve_cubic_by_scan() {
        let roots = real_roots("x^3 - x");
        assert_eq!(roots.len(), 3);
        approx::assert_relative_eq!(roots[0], -1.0, epsilon = 1e-6);
        approx::assert_relative_eq!(roots[1], 0.0, epsilon = 1e-6);
        approx::assert_relative_eq!(roots[2], 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_solve_transcendental() {
        let roots = real_roots("exp(x) - 2");
        assert_eq!(roots.len(), 1);
        approx::assert_relative_eq!(roots[0], std::f64::consts::LN_2, epsilon = 1e-6);
    }

    #[test]
    fn test_solve_no_real_roots_is_empty_set() {
        // exp(x) never crosses zero, which is an empty solution set rather
        // than a failure
        let expr = Expr::parse_expression("exp(x)").unwrap();
        assert_eq!(expr.solve("x").unwrap(), Vec::<Complex64>::new());
    }

    #[test]
    fn test_solve_rejects_second_unknown() {
        let expr = Expr::parse_expression("x - y").unwrap();
        assert!(expr.solve("x").is_err());
    }

    #[test]
    fn test_solve_nonzero_constant() {
        let expr = Expr::parse_expression("5").unwrap();
        assert!(expr.solve("x").is_err());
    }
}
