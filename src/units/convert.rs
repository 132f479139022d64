//! # Unit Conversion Adapter
//!
//! Parses `"<number> <unit> to <unit>"` queries and delegates to the unit
//! registry. The amount is a digits-only integer and no sign is accepted,
//! matching the calculator's historical query shape; a query that does not
//! match is a format error before any unit lookup happens.

use crate::errors::CalcError;
use crate::units::registry::{Quantity, UnitRegistry};
use regex::Regex;
use std::sync::LazyLock;

static CONVERT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<amount>\d+)\s*(?P<from>[a-zA-Z]+)\s*to\s*(?P<to>[a-zA-Z]+)")
        .expect("conversion pattern is valid")
});

/// outcome of a conversion query, carrying what the history entry needs
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    pub amount: f64,
    pub from_unit: String,
    pub result: Quantity,
}

/// Parses and executes a conversion query against the registry.
pub fn convert_query(registry: &UnitRegistry, query: &str) -> Result<Conversion, CalcError> {
    let captures = CONVERT_RE
        .captures(query.trim())
        .ok_or(CalcError::FormatError)?;
    let amount: f64 = captures["amount"]
        .parse()
        .map_err(|_| CalcError::FormatError)?;
    let from_unit = &captures["from"];
    let to_unit = &captures["to"];

    let result = registry.convert(amount, from_unit, to_unit)?;
    Ok(Conversion {
        amount,
        from_unit: from_unit.to_string(),
        result,
    })
}
