/// built-in unit database: dimension, factor to the SI base unit of that
/// dimension, display symbol and accepted aliases
pub mod registry;
/// the `"<number> <unit> to <unit>"` query adapter on top of the registry
pub mod convert;
