//! # Command Dispatcher Module
//!
//! The calculator state machine. State is explicit: a `Calculator` owns the
//! display buffer and the history log, and every button press or query
//! submission mutates them through `press`/`submit_query`, so the whole thing
//! unit-tests without a display surface.
//!
//! Failure policy: every engine call is guarded here. Any failure is turned
//! into one of the user-visible buffer strings ("Error", "Invalid equation",
//! "Invalid function", "Invalid format. Use: '10 meters to feet'",
//! "Conversion error", "Unsupported query") and suppresses the history
//! append. Nothing propagates past a single dispatch call and there are no
//! retries; the next user input starts fresh.

use crate::calculator::command::Command;
use crate::calculator::nl::{QueryIntent, parse_query};
use crate::errors::CalcError;
use crate::symbolic::symbolic_engine::Expr;
use crate::units::convert::convert_query;
use crate::units::registry::UnitRegistry;
use crate::utils::config::PlotSettings;
use crate::utils::format::{format_root, format_value};
use crate::utils::plots::plot_expression;
use itertools::Itertools;
use log::{info, warn};

/// the one free variable every symbolic operation works over
const VARIABLE: &str = "x";

pub struct Calculator {
    buffer: String,
    history: Vec<String>,
    units: UnitRegistry,
    plot_settings: PlotSettings,
}

impl Calculator {
    pub fn new() -> Self {
        Self::with_settings(PlotSettings::default())
    }

    pub fn with_settings(plot_settings: PlotSettings) -> Self {
        Calculator {
            buffer: String::new(),
            history: Vec::new(),
            units: UnitRegistry::new(),
            plot_settings,
        }
    }

    /// current content of the display buffer
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// the display is an editable field, so free text can land in the buffer
    pub fn set_buffer(&mut self, text: &str) {
        self.buffer = text.to_string();
    }

    /// append-only history log, oldest first
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Dispatches one button press.
    pub fn press(&mut self, command: Command) {
        if let Some(token) = command.token() {
            self.buffer.push_str(token);
            return;
        }
        match command {
            Command::Equals => self.evaluate(),
            Command::Clear => self.buffer.clear(),
            // percent becomes a division deferred to the next '='
            Command::Percent => self.buffer.push_str("/100"),
            Command::Solve => self.solve_equation(),
            Command::Diff => self.differentiate(),
            Command::Integrate => self.integrate(),
            Command::Convert => self.convert_units(),
            Command::Plot => self.plot_function(),
            _ => unreachable!("token commands are handled above"),
        }
    }

    /// Handles one line from the natural-language query box.
    pub fn submit_query(&mut self, query: &str) {
        match parse_query(query) {
            QueryIntent::PercentOf { amount, percent } => {
                let result = percent / 100.0 * amount;
                self.push_history(format!(
                    "Calculated: {}% of {} = {}",
                    format_value(percent),
                    format_value(amount),
                    format_value(result)
                ));
                self.buffer = format_value(result);
            }
            QueryIntent::SolveEquation(equation) => {
                self.buffer = equation;
                self.solve_equation();
            }
            QueryIntent::Unsupported => {
                warn!("unsupported query: '{}'", query);
                self.buffer = "Unsupported query".to_string();
            }
        }
    }

    /// `=`: evaluate the buffer with the restricted arithmetic evaluator.
    fn evaluate(&mut self) {
        let expression = self.buffer.clone();
        let result = Expr::parse_expression(&expression).and_then(|e| e.eval_constant());
        match result {
            Ok(value) => {
                let rendered = format_value(value);
                self.push_history(format!("{} = {}", expression, rendered));
                self.buffer = rendered;
            }
            Err(e) => {
                warn!("evaluation of '{}' failed: {}", expression, e);
                self.buffer = "Error".to_string();
            }
        }
    }

    fn solve_equation(&mut self) {
        let equation = self.buffer.clone();
        let result = Expr::parse_expression(&equation).and_then(|e| {
            e.solve(VARIABLE)
                .map_err(|err| CalcError::NoRoots(err).to_string())
        });
        match result {
            Ok(roots) => {
                let rendered = format!("[{}]", roots.iter().map(format_root).join(", "));
                info!("solved '{}' -> {}", equation, rendered);
                self.push_history(format!("Solved: {} = {}", equation, rendered));
                self.buffer = format!("Solutions: {}", rendered);
            }
            Err(e) => {
                warn!("solving '{}' failed: {}", equation, e);
                self.buffer = "Invalid equation".to_string();
            }
        }
    }

    fn differentiate(&mut self) {
        let function = self.buffer.clone();
        match Expr::parse_expression(&function) {
            Ok(expr) => {
                let derivative = expr.diff(VARIABLE).simplify();
                self.push_history(format!("Derivative of {}: {}", function, derivative.sym_to_str()));
                self.buffer = format!("Derivative: {}", derivative.sym_to_str());
            }
            Err(e) => {
                warn!("differentiating '{}' failed: {}", function, e);
                self.buffer = "Invalid function".to_string();
            }
        }
    }

    fn integrate(&mut self) {
        let function = self.buffer.clone();
        let result = Expr::parse_expression(&function).and_then(|e| e.integrate(VARIABLE));
        match result {
            Ok(integral) => {
                let integral = integral.simplify();
                self.push_history(format!("Integral of {}: {}", function, integral.sym_to_str()));
                self.buffer = format!("Integral: {}", integral.sym_to_str());
            }
            Err(e) => {
                warn!("integrating '{}' failed: {}", function, e);
                self.buffer = "Invalid function".to_string();
            }
        }
    }

    fn convert_units(&mut self) {
        let query = self.buffer.clone();
        match convert_query(&self.units, &query) {
            Ok(conversion) => {
                let rendered = format!(
                    "{} {}",
                    format_value(conversion.result.value),
                    conversion.result.symbol
                );
                self.push_history(format!(
                    "Converted {} {} to {}",
                    format_value(conversion.amount),
                    conversion.from_unit,
                    rendered
                ));
                self.buffer = rendered;
            }
            Err(CalcError::FormatError) => {
                warn!("conversion query '{}' does not match the expected shape", query);
                self.buffer = "Invalid format. Use: '10 meters to feet'".to_string();
            }
            Err(e) => {
                warn!("conversion '{}' failed: {}", query, e);
                self.buffer = "Conversion error".to_string();
            }
        }
    }

    fn plot_function(&mut self) {
        let function = self.buffer.clone();
        let result = Expr::parse_expression(&function)
            .map_err(CalcError::ParseError)
            .and_then(|e| plot_expression(&e, VARIABLE, &self.plot_settings));
        match result {
            Ok(path) => {
                info!("plotted '{}' to {}", function, path.display());
                // the buffer keeps showing the plotted function
                self.push_history(format!("Plotted: {}", function));
            }
            Err(e) => {
                warn!("plotting '{}' failed: {}", function, e);
                self.buffer = "Invalid function".to_string();
            }
        }
    }

    fn push_history(&mut self, entry: String) {
        self.history.push(entry);
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}
