#![allow(non_camel_case_types)]
/// a module turns a String expression into a symbolic expression
///
///# Example
/// ```
/// use symcalc::symbolic::symbolic_engine::Expr;
/// let input = "x^2 - 4";
/// let parsed_expression = Expr::parse_expression(input).unwrap();
/// println!(" parsed_expression {}", parsed_expression);
/// ```
/// ________________________________________________________________________________________________________________________________
pub mod parse_expr;
///____________________________________________________________________________________________________________________________
/// # Symbolic engine
/// a module
/// 1) holds the symbolic expression tree
/// 2) substitutes variables and evaluates the tree to a number
/// 3) turns a symbolic expression into a string expression for printing and control of results
///# Example#
/// ```
/// use symcalc::symbolic::symbolic_engine::Expr;
/// let f = Expr::parse_expression("x^2 + 1").unwrap();
/// println!("{}, sym to string: {}", f, f.sym_to_str());
/// let value = f.eval_at("x", 3.0).unwrap();
/// assert_eq!(value, 10.0);
/// ```
/// ________________________________________________________________________________________________________________________________________________
pub mod symbolic_engine;
/// analytical differentiation of a symbolic expression with respect to a named variable
///# Example#
/// ```
/// use symcalc::symbolic::symbolic_engine::Expr;
/// let f = Expr::parse_expression("x^2").unwrap();
/// let df_dx = f.diff("x").simplify();
/// println!("df_dx = {}", df_dx);
/// ```
pub mod symbolic_diff;
/// symbolic indefinite integration (no constant of integration appended)
pub mod symbolic_integration;
/// algebraic simplification: constant folding, x + 0, x * 1, 0 * x and friends
pub mod symbolic_simplify;
/// roots of expr = 0 in one variable: analytic for linear and quadratic
/// polynomials, bisection scan otherwise
pub mod symbolic_solve;
///______________________________________________________________________________________________________________________________________________
/// the collection of utility functions mainly for bracket parsing and proceeding
/// _____________________________________________________________________________________________________________________________________________
pub mod utils;
