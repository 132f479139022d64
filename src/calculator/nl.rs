//! # Natural-Language Dispatcher
//!
//! Keyword matcher for the free-text query box. Two intents are recognized:
//! percentage-of ("what is 5% of 200") and solve ("solve x^2 - 4"). Anything
//! else is unsupported. The percentage form is matched with named captures
//! rather than fixed token positions, so "what is 20 % of 50" and
//! "what is 20% of 50" both bind percent = 20 and amount = 50.

use regex::Regex;
use std::sync::LazyLock;

static PERCENT_OF_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"what\s+is\s+(?P<percent>\d+(?:\.\d+)?)\s*%\s*of\s+(?P<amount>\d+(?:\.\d+)?)")
        .expect("percent-of pattern is valid")
});

/// intent derived from a free-text query; not persisted anywhere
#[derive(Debug, Clone, PartialEq)]
pub enum QueryIntent {
    /// compute percent/100 * amount
    PercentOf { amount: f64, percent: f64 },
    /// solve the remaining text as an equation in x
    SolveEquation(String),
    Unsupported,
}

/// Classifies a free-text query, case-insensitively.
pub fn parse_query(query: &str) -> QueryIntent {
    let query = query.to_lowercase();

    if query.contains("what is") && query.contains('%') {
        if let Some(captures) = PERCENT_OF_RE.captures(&query) {
            // both captures are digit groups, so the parses cannot fail
            let percent: f64 = captures["percent"].parse().unwrap_or(0.0);
            let amount: f64 = captures["amount"].parse().unwrap_or(0.0);
            return QueryIntent::PercentOf { amount, percent };
        }
        return QueryIntent::Unsupported;
    }

    if query.contains("solve") {
        let equation = query.replace("solve", "").trim().to_string();
        if equation.is_empty() {
            return QueryIntent::Unsupported;
        }
        return QueryIntent::SolveEquation(equation);
    }

    QueryIntent::Unsupported
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_of() {
        assert_eq!(
            parse_query("What is 5% of 200?"),
            QueryIntent::PercentOf {
                amount: 200.0,
                percent: 5.0
            }
        );
    }

    #[test]
    fn test_percent_of_spaced_percent_sign() {
        // spacing before '%' must not shift the operands
        assert_eq!(
            parse_query("what is 20 % of 50"),
            QueryIntent::PercentOf {
                amount: 50.0,
                percent: 20.0
            }
        );
    }

    #[test]
    fn test_percent_of_decimal_operands() {
        assert_eq!(
            parse_query("what is 2.5% of 80"),
            QueryIntent::PercentOf {
                amount: 80.0,
                percent: 2.5
            }
        );
    }

    #[test]
    fn test_malformed_percent_query_is_unsupported() {
        // keywords present but no operands; the old fixed-position heuristic
        // would have crashed here
        assert_eq!(parse_query("what is % of"), QueryIntent::Unsupported);
    }

    #[test]
    fn test_solve() {
        assert_eq!(
            parse_query("Solve x^2 - 4 = 0"),
            QueryIntent::SolveEquation("x^2 - 4 = 0".to_string())
        );
    }

    #[test]
    fn test_solve_keyword_anywhere() {
        assert_eq!(
            parse_query("please solve x + 1"),
            QueryIntent::SolveEquation("please  x + 1".to_string())
        );
    }

    #[test]
    fn test_unsupported() {
        assert_eq!(parse_query("how tall is everest"), QueryIntent::Unsupported);
        assert_eq!(parse_query(""), QueryIntent::Unsupported);
    }
}
