//MIT License
pub mod calculator;
pub mod errors;
pub mod symbolic;
pub mod units;
pub mod utils;
