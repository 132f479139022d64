//! error kinds shared by the calculator and the unit registry; every failure
//! is converted to a user-visible buffer string at the dispatch boundary and
//! never propagates past a single user action

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum CalcError {
    /// malformed symbolic or arithmetic expression
    ParseError(String),
    /// arithmetic evaluation failure (division by zero, unbound variable, overflow)
    EvaluationError(String),
    /// unit-conversion query does not match `"<number> <unit> to <unit>"`
    FormatError,
    /// unit name not present in the registry
    UnknownUnit(String),
    /// source and target units measure different dimensions
    IncompatibleUnits(String, String),
    /// equation solving produced no solutions
    NoRoots(String),
    /// plot backend failure
    PlotError(String),
}

impl fmt::Display for CalcError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CalcError::ParseError(s) => write!(f, "Failed to parse expression: {}", s),
            CalcError::EvaluationError(s) => write!(f, "Evaluation failed: {}", s),
            CalcError::FormatError => {
                write!(f, "Query must look like '<number> <unit> to <unit>'")
            }
            CalcError::UnknownUnit(name) => write!(f, "Unknown unit '{}'", name),
            CalcError::IncompatibleUnits(from, to) => {
                write!(f, "Cannot convert '{}' to '{}': incompatible dimensions", from, to)
            }
            CalcError::NoRoots(s) => write!(f, "No solutions: {}", s),
            CalcError::PlotError(s) => write!(f, "Plotting failed: {}", s),
        }
    }
}

impl std::error::Error for CalcError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            CalcError::UnknownUnit("parsec".to_string()).to_string(),
            "Unknown unit 'parsec'"
        );
        assert!(
            CalcError::IncompatibleUnits("m".to_string(), "kg".to_string())
                .to_string()
                .contains("incompatible")
        );
    }
}
