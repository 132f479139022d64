//! a module turns a String expression into a symbolic expression
//!
//! The grammar is the closed arithmetic surface of the calculator: `+ - * / ^`,
//! numeric literals, variables, parentheses and the function heads listed in
//! `FUNCTION_HEADS`. Nothing else parses, which is what makes `=` safe: the
//! buffer is never handed to anything that could execute code.
//!
//! The splitting strategy is recursive: find the lowest-precedence operator
//! outside brackets, split there, recurse into both halves. `+ -` and `* /`
//! split at the rightmost occurrence (left associativity), `^` at the leftmost
//! (right associativity). A sign sitting directly after another operator is
//! unary and never a split point.
//
//                  search recursion diagram
//                "x^2+exp(x)-4"                    |
//                |       left  | right             |
//                |_________________________________|
//                |           div by    -           |
//                |_________________________________|
//                | x^2+exp(x)  |   4               |
//                |       |     |  Ok               |
//                |______\|/____|___________________|
//                |           div by    +           |
//                |_________________________________|
//                |   x^2       |  exp(x)           |
//                |  div by ^   |  func head        |
//                |   etc...                        |

use crate::symbolic::symbolic_engine::Expr;
use crate::symbolic::utils::{
    find_char_positions_outside_brackets, find_pair_to_this_bracket,
    find_rightmost_operator_outside_brackets,
};
use log::trace;

type FunctionCtor = fn(Box<Expr>) -> Expr;

/// recognized function heads and the Expr variants they build; longer
/// spellings first so "tan" is tried before "tg" never matters
const FUNCTION_HEADS: [(&str, FunctionCtor); 9] = [
    ("exp", Expr::Exp),
    ("ln", Expr::Ln),
    ("log", Expr::Ln),
    ("sin", Expr::sin),
    ("cos", Expr::cos),
    ("tan", Expr::tg),
    ("tg", Expr::tg),
    ("cot", Expr::ctg),
    ("ctg", Expr::ctg),
];

/// byte position of the rightmost `+`/`-` outside brackets that is a binary
/// operator, i.e. not a sign following another operator
fn find_additive_split(input: &str) -> Option<(usize, char)> {
    let mut depth = 0;
    let mut candidate = None;
    let mut prev_non_ws: Option<char> = None;
    for (i, c) in input.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth -= 1,
            '+' | '-' if depth == 0 => match prev_non_ws {
                Some(p) if "+-*/^".contains(p) => {}
                _ => candidate = Some((i, c)),
            },
            _ => {}
        }
        if !c.is_whitespace() {
            prev_non_ws = Some(c);
        }
    }
    candidate
}

pub fn parse_expression_func(input: &str) -> Result<Expr, String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("Empty expression".to_string());
    }

    // Handling addition and subtraction
    if let Some((pos, op)) = find_additive_split(input) {
        let left = input[..pos].trim();
        let right = input[pos + 1..].trim();
        trace!("SIGN '{}' found at position {}: left: {}, right: {}", op, pos, left, right);

        // Handle unary sign
        if left.is_empty() {
            return match op {
                '+' => parse_expression_func(right),
                _ => {
                    if let Ok(value) = right.parse::<f64>() {
                        Ok(Expr::Const(-value))
                    } else {
                        Ok(Expr::Mul(
                            Box::new(Expr::Const(-1.0)),
                            Box::new(parse_expression_func(right)?),
                        ))
                    }
                }
            };
        }

        let lhs = Box::new(parse_expression_func(left)?);
        let rhs = Box::new(parse_expression_func(right)?);
        return match op {
            '+' => Ok(Expr::Add(lhs, rhs)),
            _ => Ok(Expr::Sub(lhs, rhs)),
        };
    }

    // Handling multiplication and division
    if let Some((pos, op)) = find_rightmost_operator_outside_brackets(input, &['*', '/']) {
        let left = input[..pos].trim();
        let right = input[pos + 1..].trim();
        trace!("SIGN '{}' found at position {}: left: {}, right: {}", op, pos, left, right);
        let lhs = Box::new(parse_expression_func(left)?);
        let rhs = Box::new(parse_expression_func(right)?);
        return match op {
            '*' => Ok(Expr::Mul(lhs, rhs)),
            _ => Ok(Expr::Div(lhs, rhs)),
        };
    }

    // Handling exponentiation
    if let Some(pos) = find_char_positions_outside_brackets(input, '^') {
        let base = input[..pos].trim();
        let exponent = input[pos + 1..].trim();
        trace!("SIGN '^' found at position {}: base: {}, exponent: {}", pos, base, exponent);
        return Ok(Expr::Pow(
            Box::new(parse_expression_func(base)?),
            Box::new(parse_expression_func(exponent)?),
        ));
    }

    // Handling exponent, logarithm and trigonometric functions
    for (head, ctor) in FUNCTION_HEADS {
        if input.starts_with(head) && input[head.len()..].starts_with('(') {
            if find_pair_to_this_bracket(input, head.len()) == Some(input.len() - 1) {
                let inner = input[head.len() + 1..input.len() - 1].trim();
                trace!("function head '{}' around: {}", head, inner);
                return Ok(ctor(Box::new(parse_expression_func(inner)?)));
            }
        }
    }

    // Handling constants and variables
    if let Ok(value) = input.parse::<f64>() {
        trace!("found constant: {}", value);
        return Ok(Expr::Const(value));
    }
    if input.chars().next().is_some_and(|c| c.is_ascii_alphabetic())
        && input.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        trace!("found variable: {}", input);
        return Ok(Expr::Var(input.to_string()));
    }

    // Expression that is all in brackets
    if input.starts_with('(')
        && input.ends_with(')')
        && find_pair_to_this_bracket(input, 0) == Some(input.len() - 1)
    {
        return parse_expression_func(&input[1..input.len() - 1]);
    }

    Err(format!("Invalid expression format: '{}'", input))
}

impl Expr {
    /// parse a string into a symbolic expression
    pub fn parse_expression(input: &str) -> Result<Expr, String> {
        parse_expression_func(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_constant() {
        let expr = parse_expression_func("42").unwrap();
        assert_eq!(expr, Expr::Const(42.0));
    }

    #[test]
    fn test_parse_decimal_constant() {
        let expr = parse_expression_func("3.5").unwrap();
        assert_eq!(expr, Expr::Const(3.5));
    }

    #[test]
    fn test_parse_variable() {
        let expr = parse_expression_func("x").unwrap();
        assert_eq!(expr, Expr::Var("x".to_string()));
    }

    #[test]
    fn test_parse_addition() {
        let expr = parse_expression_func("x + 2").unwrap();
        assert_eq!(
            expr,
            Expr::Add(
                Box::new(Expr::Var("x".to_string())),
                Box::new(Expr::Const(2.0))
            )
        );
    }

    #[test]
    fn test_parse_subtraction() {
        let expr = parse_expression_func("x - 2").unwrap();
        assert_eq!(
            expr,
            Expr::Sub(
                Box::new(Expr::Var("x".to_string())),
                Box::new(Expr::Const(2.0))
            )
        );
    }

    #[test]
    fn test_parse_power() {
        let expr = parse_expression_func("x^2").unwrap();
        assert_eq!(
            expr,
            Expr::Pow(
                Box::new(Expr::Var("x".to_string())),
                Box::new(Expr::Const(2.0))
            )
        );
    }

    #[test]
    fn test_parse_exponential() {
        let expr = parse_expression_func("exp(x)").unwrap();
        assert_eq!(expr, Expr::Exp(Box::new(Expr::Var("x".to_string()))));
    }

    #[test]
    fn test_parse_logarithm_spellings() {
        let expr = parse_expression_func("log(x)").unwrap();
        assert_eq!(expr, Expr::Ln(Box::new(Expr::Var("x".to_string()))));
        let expr = parse_expression_func("ln(x)").unwrap();
        assert_eq!(expr, Expr::Ln(Box::new(Expr::Var("x".to_string()))));
    }

    #[test]
    fn test_parse_tan_and_tg() {
        let expr = parse_expression_func("tan(x)").unwrap();
        assert_eq!(expr, Expr::tg(Box::new(Expr::Var("x".to_string()))));
        let expr = parse_expression_func("tg(x)").unwrap();
        assert_eq!(expr, Expr::tg(Box::new(Expr::Var("x".to_string()))));
    }

    #[test]
    fn test_parse_with_brackets() {
        let expr = parse_expression_func("(x + y) * z").unwrap();
        assert_eq!(
            expr,
            Expr::Mul(
                Box::new(Expr::Add(
                    Box::new(Expr::Var("x".to_string())),
                    Box::new(Expr::Var("y".to_string()))
                )),
                Box::new(Expr::Var("z".to_string()))
            )
        );
    }

    #[test]
    fn test_multiple_subtraction() {
        let expr = parse_expression_func("x^2 - x - 1").unwrap();
        let x = Box::new(Expr::Var("x".to_string()));
        let to_check = Expr::Pow(x.clone(), Box::new(Expr::Const(2.0))) - *x - Expr::Const(1.0);
        assert_eq!(expr, to_check);
    }

    #[test]
    fn test_division_is_left_associative() {
        let expr = parse_expression_func("8 / 4 / 2").unwrap();
        assert_eq!(expr.eval_constant().unwrap(), 1.0);
    }

    #[test]
    fn test_precedence() {
        let expr = parse_expression_func("5+3*2").unwrap();
        assert_eq!(expr.eval_constant().unwrap(), 11.0);
        let expr = parse_expression_func("2*x^2").unwrap();
        assert_eq!(expr.eval_at("x", 3.0).unwrap(), 18.0);
    }

    #[test]
    fn test_unary_minus() {
        let expr = parse_expression_func("-4").unwrap();
        assert_eq!(expr, Expr::Const(-4.0));
        let expr = parse_expression_func("-x + 2").unwrap();
        assert_eq!(expr.eval_at("x", 3.0).unwrap(), -1.0);
        let expr = parse_expression_func("2*-3").unwrap();
        assert_eq!(expr.eval_constant().unwrap(), -6.0);
    }

    #[test]
    fn test_nested_functions() {
        let expr = parse_expression_func("sin(cos(x))").unwrap();
        assert_eq!(
            expr,
            Expr::sin(Box::new(Expr::cos(Box::new(Expr::Var("x".to_string())))))
        );
    }

    #[test]
    fn test_invalid_expression() {
        assert!(parse_expression_func("(x +").is_err());
        assert!(parse_expression_func("5 +").is_err());
        assert!(parse_expression_func("").is_err());
    }

    #[test]
    fn test_unmatched_brackets() {
        assert!(parse_expression_func("(x + y").is_err());
    }

    #[test]
    fn test_non_ascii_input_is_an_error_not_a_panic() {
        // multi-byte characters must not break operator splitting
        assert!(parse_expression_func("π+1").is_err());
        assert!(parse_expression_func("x² - 4").is_err());
        assert!(parse_expression_func("π^2 - 4").is_err());
        assert!(parse_expression_func("sin(π)").is_err());
    }
}
