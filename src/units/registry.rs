//! # Unit Registry Module
//!
//! In-crate unit database backing the Convert button. Every unit carries a
//! dimension and a linear map to the SI base unit of that dimension
//! (`si = value * factor + offset`); conversion goes through the base unit,
//! so any pair of units of the same dimension converts in two steps. The
//! offset is zero for everything except temperatures.

use crate::errors::CalcError;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Length,
    Mass,
    Volume,
    Time,
    Temperature,
}

/// one unit: canonical symbol, dimension and the linear map to the SI base
#[derive(Debug, Clone)]
pub struct UnitDef {
    pub symbol: &'static str,
    pub dimension: Dimension,
    factor: f64,
    offset: f64,
}

impl UnitDef {
    fn to_base(&self, value: f64) -> f64 {
        value * self.factor + self.offset
    }

    fn from_base(&self, base: f64) -> f64 {
        (base - self.offset) / self.factor
    }
}

/// a numeric value tagged with the symbol of its unit
#[derive(Debug, Clone, PartialEq)]
pub struct Quantity {
    pub value: f64,
    pub symbol: &'static str,
}

pub struct UnitRegistry {
    aliases: HashMap<&'static str, usize>,
    defs: Vec<UnitDef>,
}

impl UnitRegistry {
    pub fn new() -> Self {
        let mut registry = UnitRegistry {
            aliases: HashMap::new(),
            defs: Vec::new(),
        };
        registry.fill();
        registry
    }

    fn add(
        &mut self,
        symbol: &'static str,
        dimension: Dimension,
        factor: f64,
        offset: f64,
        aliases: &[&'static str],
    ) {
        let index = self.defs.len();
        self.defs.push(UnitDef {
            symbol,
            dimension,
            factor,
            offset,
        });
        self.aliases.insert(symbol, index);
        for alias in aliases {
            self.aliases.insert(alias, index);
        }
    }

    fn fill(&mut self) {
        use Dimension::*;

        // length, base: meter
        self.add("m", Length, 1.0, 0.0, &["meter", "meters", "metre", "metres"]);
        self.add("mm", Length, 1e-3, 0.0, &["millimeter", "millimeters"]);
        self.add("cm", Length, 1e-2, 0.0, &["centimeter", "centimeters"]);
        self.add("km", Length, 1e3, 0.0, &["kilometer", "kilometers"]);
        self.add("in", Length, 0.0254, 0.0, &["inch", "inches"]);
        self.add("ft", Length, 0.3048, 0.0, &["foot", "feet"]);
        self.add("yd", Length, 0.9144, 0.0, &["yard", "yards"]);
        self.add("mi", Length, 1609.344, 0.0, &["mile", "miles"]);

        // mass, base: kilogram
        self.add("kg", Mass, 1.0, 0.0, &["kilogram", "kilograms"]);
        self.add("g", Mass, 1e-3, 0.0, &["gram", "grams"]);
        self.add("mg", Mass, 1e-6, 0.0, &["milligram", "milligrams"]);
        self.add("t", Mass, 1e3, 0.0, &["ton", "tons", "tonne", "tonnes"]);
        self.add("lb", Mass, 0.45359237, 0.0, &["pound", "pounds", "lbs"]);
        self.add("oz", Mass, 0.028349523125, 0.0, &["ounce", "ounces"]);

        // volume, base: liter
        self.add("l", Volume, 1.0, 0.0, &["liter", "liters", "litre", "litres"]);
        self.add("ml", Volume, 1e-3, 0.0, &["milliliter", "milliliters"]);
        self.add("gal", Volume, 3.785411784, 0.0, &["gallon", "gallons"]);
        self.add("qt", Volume, 0.946352946, 0.0, &["quart", "quarts"]);
        self.add("pt", Volume, 0.473176473, 0.0, &["pint", "pints"]);
        self.add("cup", Volume, 0.2365882365, 0.0, &["cups"]);
        self.add("floz", Volume, 0.0295735295625, 0.0, &["flounce", "flounces"]);

        // time, base: second
        self.add("s", Time, 1.0, 0.0, &["sec", "secs", "second", "seconds"]);
        self.add("min", Time, 60.0, 0.0, &["minute", "minutes", "mins"]);
        self.add("h", Time, 3600.0, 0.0, &["hr", "hrs", "hour", "hours"]);
        self.add("d", Time, 86400.0, 0.0, &["day", "days"]);

        // temperature, base: kelvin; these are the only affine maps. Lookups
        // lowercase the queried name first, so the uppercase symbols need
        // their lowercase spellings as aliases.
        self.add("K", Temperature, 1.0, 0.0, &["k", "kelvin", "kelvins"]);
        self.add("C", Temperature, 1.0, 273.15, &["c", "celsius", "centigrade"]);
        self.add("F", Temperature, 5.0 / 9.0, 255.37222222222223, &["f", "fahrenheit"]);
    }

    /// Looks a unit up by symbol or alias, case-insensitively.
    pub fn resolve(&self, name: &str) -> Result<&UnitDef, CalcError> {
        let lowered = name.to_lowercase();
        self.aliases
            .get(lowered.as_str())
            .or_else(|| self.aliases.get(name))
            .map(|&index| &self.defs[index])
            .ok_or_else(|| CalcError::UnknownUnit(name.to_string()))
    }

    /// Converts a value between two units of the same dimension.
    pub fn convert(&self, value: f64, from: &str, to: &str) -> Result<Quantity, CalcError> {
        let from_def = self.resolve(from)?;
        let to_def = self.resolve(to)?;
        if from_def.dimension != to_def.dimension {
            return Err(CalcError::IncompatibleUnits(
                from.to_string(),
                to.to_string(),
            ));
        }
        Ok(Quantity {
            value: to_def.from_base(from_def.to_base(value)),
            symbol: to_def.symbol,
        })
    }
}

impl Default for UnitRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meters_to_feet() {
        let registry = UnitRegistry::new();
        let quantity = registry.convert(10.0, "meters", "feet").unwrap();
        approx::assert_relative_eq!(quantity.value, 10.0 / 0.3048, epsilon = 1e-9);
        assert_eq!(quantity.symbol, "ft");
    }

    #[test]
    fn test_alias_and_case_resolution() {
        let registry = UnitRegistry::new();
        for name in ["m", "meter", "Meters", "METRES"] {
            assert_eq!(registry.resolve(name).unwrap().symbol, "m");
        }
    }

    #[test]
    fn test_mass_round_trip() {
        let registry = UnitRegistry::new();
        let quantity = registry.convert(5.0, "kg", "lb").unwrap();
        let back = registry.convert(quantity.value, "lb", "kg").unwrap();
        approx::assert_relative_eq!(back.value, 5.0, epsilon = 1e-9);
    }

    #[test]
    fn test_temperature_affine() {
        let registry = UnitRegistry::new();
        let quantity = registry.convert(100.0, "celsius", "fahrenheit").unwrap();
        approx::assert_relative_eq!(quantity.value, 212.0, epsilon = 1e-9);
        let quantity = registry.convert(0.0, "celsius", "kelvin").unwrap();
        approx::assert_relative_eq!(quantity.value, 273.15, epsilon = 1e-9);
    }

    #[test]
    fn test_temperature_symbols_resolve_in_any_case() {
        let registry = UnitRegistry::new();
        for name in ["K", "k", "C", "c", "F", "f"] {
            assert!(registry.resolve(name).is_ok(), "'{}' should resolve", name);
        }
        let quantity = registry.convert(10.0, "k", "c").unwrap();
        approx::assert_relative_eq!(quantity.value, -263.15, epsilon = 1e-9);
        assert_eq!(quantity.symbol, "C");
    }

    #[test]
    fn test_unknown_unit() {
        let registry = UnitRegistry::new();
        assert_eq!(
            registry.convert(1.0, "parsec", "m"),
            Err(CalcError::UnknownUnit("parsec".to_string()))
        );
    }

    #[test]
    fn test_incompatible_dimensions() {
        let registry = UnitRegistry::new();
        assert_eq!(
            registry.convert(1.0, "meters", "kg"),
            Err(CalcError::IncompatibleUnits(
                "meters".to_string(),
                "kg".to_string()
            ))
        );
    }

    #[test]
    fn test_time_conversion() {
        let registry = UnitRegistry::new();
        let quantity = registry.convert(90.0, "minutes", "hours").unwrap();
        approx::assert_relative_eq!(quantity.value, 1.5, epsilon = 1e-12);
    }
}
