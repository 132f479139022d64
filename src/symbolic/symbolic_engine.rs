//! # Symbolic Engine Module
//!
//! Core of the symbolic side of the calculator: the `Expr` tree, pretty
//! printing, substitution and numeric evaluation. Differentiation,
//! integration, simplification and equation solving each live in their own
//! module and extend `Expr` with further impl blocks.
//!
//! ## Main Structures and Methods
//!
//! ### `Expr` Enum
//! The core symbolic expression type supporting:
//! - **Variables**: `Var(String)` - symbolic variables like "x"
//! - **Constants**: `Const(f64)` - numerical constants
//! - **Operations**: `Add`, `Sub`, `Mul`, `Div`, `Pow` - basic arithmetic
//! - **Functions**: `Exp`, `Ln`, `sin`, `cos`, `tg`, `ctg`
//!
//! ### Key Methods
//! - `parse_expression(input)` - String to symbolic expression
//! - `diff(var)` - Analytical differentiation
//! - `integrate(var)` - Symbolic indefinite integration
//! - `solve(var)` - Roots of expr = 0
//! - `simplify()` - Algebraic simplification
//! - `eval_constant()` / `eval_at()` - Numeric evaluation

#![allow(non_camel_case_types)]

use std::collections::HashMap;
use std::fmt;

/// Core symbolic expression enum representing mathematical expressions as an
/// abstract syntax tree. Recursive variants use Box<Expr>, so arbitrarily
/// nested expression trees can be built.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    /// Symbolic variable with a name (e.g., "x")
    Var(String),
    /// Numerical constant value
    Const(f64),
    /// Addition operation: left + right
    Add(Box<Expr>, Box<Expr>),
    /// Subtraction operation: left - right
    Sub(Box<Expr>, Box<Expr>),
    /// Multiplication operation: left * right
    Mul(Box<Expr>, Box<Expr>),
    /// Division operation: left / right
    Div(Box<Expr>, Box<Expr>),
    /// Power operation: base ^ exponent
    Pow(Box<Expr>, Box<Expr>),
    /// Exponential function: e^x
    Exp(Box<Expr>),
    /// Natural logarithm: ln(x)
    Ln(Box<Expr>),
    /// Sine function: sin(x)
    sin(Box<Expr>),
    /// Cosine function: cos(x)
    cos(Box<Expr>),
    /// Tangent function - mathematical notation 'tg'
    tg(Box<Expr>),
    /// Cotangent function - mathematical notation 'ctg'
    ctg(Box<Expr>),
}

/// Display implementation for pretty printing symbolic expressions.
///
/// Converts expressions to human-readable mathematical notation with
/// parentheses for proper precedence.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expr::Var(name) => write!(f, "{}", name),
            Expr::Const(val) => write!(f, "{}", val),
            Expr::Add(lhs, rhs) => write!(f, "({} + {})", lhs, rhs),
            Expr::Sub(lhs, rhs) => write!(f, "({} - {})", lhs, rhs),
            Expr::Mul(lhs, rhs) => write!(f, "({} * {})", lhs, rhs),
            Expr::Div(lhs, rhs) => write!(f, "({} / {})", lhs, rhs),
            Expr::Pow(base, exp) => write!(f, "({} ^ {})", base, exp),
            Expr::Exp(expr) => write!(f, "exp({})", expr),
            Expr::Ln(expr) => write!(f, "ln({})", expr),
            Expr::sin(expr) => write!(f, "sin({})", expr),
            Expr::cos(expr) => write!(f, "cos({})", expr),
            Expr::tg(expr) => write!(f, "tg({})", expr),
            Expr::ctg(expr) => write!(f, "ctg({})", expr),
        }
    }
}

impl std::ops::Add for Expr {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Expr::Add(self.boxed(), rhs.boxed())
    }
}

impl std::ops::Sub for Expr {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Expr::Sub(self.boxed(), rhs.boxed())
    }
}

impl std::ops::Mul for Expr {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Expr::Mul(self.boxed(), rhs.boxed())
    }
}

impl std::ops::Div for Expr {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        Expr::Div(self.boxed(), rhs.boxed())
    }
}

impl std::ops::Neg for Expr {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Expr::Mul(Box::new(Expr::Const(-1.0)), Box::new(self))
    }
}

impl Expr {
    /// BASIC FEATURES

    /// Convenience method to wrap expression in Box for recursive structures.
    pub fn boxed(self) -> Box<Self> {
        Box::new(self)
    }

    /// Creates power expression self^rhs.
    pub fn pow(self, rhs: Expr) -> Expr {
        Expr::Pow(self.boxed(), rhs.boxed())
    }

    /// Checks if expression is exactly zero (constant 0.0).
    pub fn is_zero(&self) -> bool {
        match self {
            Expr::Const(val) => val == &0.0,
            _ => false,
        }
    }

    /// Checks if expression is a constant.
    pub fn is_const(&self) -> bool {
        matches!(self, Expr::Const(_))
    }

    /// Substitutes a variable with a constant value throughout the expression.
    ///
    /// Recursively traverses the expression tree and replaces all occurrences
    /// of the specified variable with the given constant value.
    pub fn set_variable(&self, var: &str, value: f64) -> Expr {
        match self {
            Expr::Var(name) if name == var => Expr::Const(value),
            Expr::Var(_) | Expr::Const(_) => self.clone(),
            Expr::Add(lhs, rhs) => Expr::Add(
                Box::new(lhs.set_variable(var, value)),
                Box::new(rhs.set_variable(var, value)),
            ),
            Expr::Sub(lhs, rhs) => Expr::Sub(
                Box::new(lhs.set_variable(var, value)),
                Box::new(rhs.set_variable(var, value)),
            ),
            Expr::Mul(lhs, rhs) => Expr::Mul(
                Box::new(lhs.set_variable(var, value)),
                Box::new(rhs.set_variable(var, value)),
            ),
            Expr::Div(lhs, rhs) => Expr::Div(
                Box::new(lhs.set_variable(var, value)),
                Box::new(rhs.set_variable(var, value)),
            ),
            Expr::Pow(base, exp) => Expr::Pow(
                Box::new(base.set_variable(var, value)),
                Box::new(exp.set_variable(var, value)),
            ),
            Expr::Exp(expr) => Expr::Exp(Box::new(expr.set_variable(var, value))),
            Expr::Ln(expr) => Expr::Ln(Box::new(expr.set_variable(var, value))),
            Expr::sin(expr) => Expr::sin(Box::new(expr.set_variable(var, value))),
            Expr::cos(expr) => Expr::cos(Box::new(expr.set_variable(var, value))),
            Expr::tg(expr) => Expr::tg(Box::new(expr.set_variable(var, value))),
            Expr::ctg(expr) => Expr::ctg(Box::new(expr.set_variable(var, value))),
        }
    }

    /// check if the expression contains a variable
    pub fn contains_variable(&self, var_name: &str) -> bool {
        match self {
            Expr::Var(name) => name == var_name,
            Expr::Const(_) => false,
            Expr::Add(left, right)
            | Expr::Sub(left, right)
            | Expr::Mul(left, right)
            | Expr::Div(left, right)
            | Expr::Pow(left, right) => {
                left.contains_variable(var_name) || right.contains_variable(var_name)
            }
            Expr::Exp(expr) | Expr::Ln(expr) | Expr::sin(expr) | Expr::cos(expr)
            | Expr::tg(expr) | Expr::ctg(expr) => expr.contains_variable(var_name),
        }
    }

    /// collect the names of all variables found in the expression
    pub fn extract_variables(&self) -> Vec<String> {
        let mut vars = Vec::new();
        self.collect_variables(&mut vars);
        vars.dedup();
        vars
    }

    fn collect_variables(&self, vars: &mut Vec<String>) {
        match self {
            Expr::Var(name) => {
                if !vars.contains(name) {
                    vars.push(name.clone());
                }
            }
            Expr::Const(_) => {}
            Expr::Add(left, right)
            | Expr::Sub(left, right)
            | Expr::Mul(left, right)
            | Expr::Div(left, right)
            | Expr::Pow(left, right) => {
                left.collect_variables(vars);
                right.collect_variables(vars);
            }
            Expr::Exp(expr) | Expr::Ln(expr) | Expr::sin(expr) | Expr::cos(expr)
            | Expr::tg(expr) | Expr::ctg(expr) => expr.collect_variables(vars),
        }
    }

    /// EVALUATION

    /// Evaluates the expression numerically with variable values taken from a map.
    ///
    /// Fails on an unbound variable, on division by zero and whenever an
    /// operation leaves the finite range (the restricted replacement for
    /// general-purpose `eval`: only arithmetic is ever performed here).
    pub fn eval_expression(&self, var_map: &HashMap<String, f64>) -> Result<f64, String> {
        let value = match self {
            Expr::Var(name) => *var_map
                .get(name)
                .ok_or_else(|| format!("Unbound variable '{}'", name))?,
            Expr::Const(val) => *val,
            Expr::Add(lhs, rhs) => lhs.eval_expression(var_map)? + rhs.eval_expression(var_map)?,
            Expr::Sub(lhs, rhs) => lhs.eval_expression(var_map)? - rhs.eval_expression(var_map)?,
            Expr::Mul(lhs, rhs) => lhs.eval_expression(var_map)? * rhs.eval_expression(var_map)?,
            Expr::Div(lhs, rhs) => {
                let denom = rhs.eval_expression(var_map)?;
                if denom == 0.0 {
                    return Err(format!("Division by zero in '{}'", self));
                }
                lhs.eval_expression(var_map)? / denom
            }
            Expr::Pow(base, exp) => base
                .eval_expression(var_map)?
                .powf(exp.eval_expression(var_map)?),
            Expr::Exp(expr) => expr.eval_expression(var_map)?.exp(),
            Expr::Ln(expr) => expr.eval_expression(var_map)?.ln(),
            Expr::sin(expr) => expr.eval_expression(var_map)?.sin(),
            Expr::cos(expr) => expr.eval_expression(var_map)?.cos(),
            Expr::tg(expr) => expr.eval_expression(var_map)?.tan(),
            Expr::ctg(expr) => 1.0 / expr.eval_expression(var_map)?.tan(),
        };
        if value.is_finite() {
            Ok(value)
        } else {
            Err(format!("Expression '{}' does not evaluate to a finite number", self))
        }
    }

    /// Evaluates a variable-free expression to a number.
    pub fn eval_constant(&self) -> Result<f64, String> {
        self.eval_expression(&HashMap::new())
    }

    /// Evaluates a one-variable expression at a given point.
    pub fn eval_at(&self, var: &str, value: f64) -> Result<f64, String> {
        let mut var_map = HashMap::new();
        var_map.insert(var.to_string(), value);
        self.eval_expression(&var_map)
    }

    /// Pretty-prints the expression without the outermost pair of parentheses.
    pub fn sym_to_str(&self) -> String {
        let rendered = self.to_string();
        if rendered.starts_with('(') && rendered.ends_with(')') {
            // strip only if these two brackets actually pair up
            let inner = &rendered[1..rendered.len() - 1];
            let mut depth = 0i32;
            for c in inner.chars() {
                match c {
                    '(' => depth += 1,
                    ')' => depth -= 1,
                    _ => {}
                }
                if depth < 0 {
                    return rendered;
                }
            }
            return inner.to_string();
        }
        rendered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let expr = Expr::Add(
            Box::new(Expr::Var("x".to_string())),
            Box::new(Expr::Const(2.0)),
        );
        assert_eq!(expr.to_string(), "(x + 2)");
    }

    #[test]
    fn test_operator_overloads() {
        let x = Expr::Var("x".to_string());
        let expr = x.clone() * Expr::Const(2.0) + Expr::Const(1.0);
        assert_eq!(
            expr,
            Expr::Add(
                Box::new(Expr::Mul(Box::new(x), Box::new(Expr::Const(2.0)))),
                Box::new(Expr::Const(1.0))
            )
        );
    }

    #[test]
    fn test_set_variable() {
        let expr = Expr::parse_expression("x^2 + x").unwrap();
        let substituted = expr.set_variable("x", 3.0);
        assert_eq!(substituted.eval_constant().unwrap(), 12.0);
    }

    #[test]
    fn test_contains_variable() {
        let expr = Expr::parse_expression("x^2 + 1").unwrap();
        assert!(expr.contains_variable("x"));
        assert!(!expr.contains_variable("y"));
    }

    #[test]
    fn test_extract_variables() {
        let expr = Expr::parse_expression("x + y * x").unwrap();
        assert_eq!(expr.extract_variables(), vec!["x".to_string(), "y".to_string()]);
    }

    #[test]
    fn test_eval_constant() {
        let expr = Expr::parse_expression("5 + 3 * 2").unwrap();
        assert_eq!(expr.eval_constant().unwrap(), 11.0);
    }

    #[test]
    fn test_eval_constant_rejects_variables() {
        let expr = Expr::parse_expression("x + 1").unwrap();
        assert!(expr.eval_constant().is_err());
    }

    #[test]
    fn test_eval_division_by_zero() {
        let expr = Expr::parse_expression("1 / 0").unwrap();
        assert!(expr.eval_constant().is_err());
    }

    #[test]
    fn test_eval_at() {
        let expr = Expr::parse_expression("sin(x)").unwrap();
        let value = expr.eval_at("x", std::f64::consts::FRAC_PI_2).unwrap();
        approx::assert_relative_eq!(value, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_sym_to_str_strips_outer_brackets() {
        let expr = Expr::parse_expression("x + 2").unwrap();
        assert_eq!(expr.sym_to_str(), "x + 2");
        let expr = Expr::parse_expression("(x + 1) * (x - 1)").unwrap();
        assert_eq!(expr.sym_to_str(), "(x + 1) * (x - 1)");
    }
}
