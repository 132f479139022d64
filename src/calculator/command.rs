//! # Command Module
//!
//! The closed enumeration of button labels. A command carries no payload
//! beyond its identity; `strum` provides the label round-trip, so
//! `Command::from_str("Solve")` and `Command::Solve.to_string()` agree with
//! the labels printed on the button grid.

use strum_macros::{Display, EnumIter, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumString)]
pub enum Command {
    #[strum(serialize = "0")]
    Zero,
    #[strum(serialize = "1")]
    One,
    #[strum(serialize = "2")]
    Two,
    #[strum(serialize = "3")]
    Three,
    #[strum(serialize = "4")]
    Four,
    #[strum(serialize = "5")]
    Five,
    #[strum(serialize = "6")]
    Six,
    #[strum(serialize = "7")]
    Seven,
    #[strum(serialize = "8")]
    Eight,
    #[strum(serialize = "9")]
    Nine,
    #[strum(serialize = ".")]
    Dot,
    #[strum(serialize = "+")]
    Plus,
    #[strum(serialize = "-")]
    Minus,
    #[strum(serialize = "*")]
    Times,
    #[strum(serialize = "/")]
    Slash,
    #[strum(serialize = "^")]
    Caret,
    #[strum(serialize = "%")]
    Percent,
    #[strum(serialize = "=")]
    Equals,
    #[strum(serialize = "Clear")]
    Clear,
    #[strum(serialize = "Solve")]
    Solve,
    #[strum(serialize = "Diff")]
    Diff,
    #[strum(serialize = "Integrate")]
    Integrate,
    #[strum(serialize = "Convert")]
    Convert,
    #[strum(serialize = "Plot")]
    Plot,
}

impl Command {
    /// The literal token a press of this button appends to the display
    /// buffer, or None for the action buttons.
    pub fn token(&self) -> Option<&'static str> {
        match self {
            Command::Zero => Some("0"),
            Command::One => Some("1"),
            Command::Two => Some("2"),
            Command::Three => Some("3"),
            Command::Four => Some("4"),
            Command::Five => Some("5"),
            Command::Six => Some("6"),
            Command::Seven => Some("7"),
            Command::Eight => Some("8"),
            Command::Nine => Some("9"),
            Command::Dot => Some("."),
            Command::Plus => Some("+"),
            Command::Minus => Some("-"),
            Command::Times => Some("*"),
            Command::Slash => Some("/"),
            Command::Caret => Some("^"),
            _ => None,
        }
    }
}
