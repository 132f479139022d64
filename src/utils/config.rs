//! optional toml configuration for plot output
//!
//! A `symcalc.toml` next to the binary can override how the Plot button
//! renders, e.g.
//!
//! ```toml
//! [plot]
//! width = 1024
//! height = 768
//! dir = "plots"
//! range = [-5.0, 5.0]
//! ```
//!
//! Missing file or missing keys fall back to defaults; a file that is present
//! but malformed is an error so a typo does not silently disappear.

use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq)]
pub struct PlotSettings {
    pub width: u32,
    pub height: u32,
    pub dir: PathBuf,
    pub range: (f64, f64),
}

impl Default for PlotSettings {
    fn default() -> Self {
        PlotSettings {
            width: 800,
            height: 600,
            dir: PathBuf::from("."),
            range: (-10.0, 10.0),
        }
    }
}

impl PlotSettings {
    /// Reads settings from a toml file, keeping defaults for absent keys.
    pub fn from_file(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Cannot read '{}': {}", path.display(), e))?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, String> {
        let table: toml::Table = content
            .parse()
            .map_err(|e| format!("Malformed config: {}", e))?;
        let mut settings = PlotSettings::default();
        let Some(plot) = table.get("plot") else {
            return Ok(settings);
        };
        let plot = plot
            .as_table()
            .ok_or_else(|| "'plot' must be a table".to_string())?;

        if let Some(width) = plot.get("width") {
            settings.width = width
                .as_integer()
                .ok_or_else(|| "'plot.width' must be an integer".to_string())?
                as u32;
        }
        if let Some(height) = plot.get("height") {
            settings.height = height
                .as_integer()
                .ok_or_else(|| "'plot.height' must be an integer".to_string())?
                as u32;
        }
        if let Some(dir) = plot.get("dir") {
            settings.dir = PathBuf::from(
                dir.as_str()
                    .ok_or_else(|| "'plot.dir' must be a string".to_string())?,
            );
        }
        if let Some(range) = plot.get("range") {
            let values: Vec<f64> = range
                .as_array()
                .map(|array| array.iter().filter_map(|v| v.as_float()).collect())
                .unwrap_or_default();
            if values.len() != 2 || values[0] >= values[1] {
                return Err("'plot.range' must be [low, high] with low < high".to_string());
            }
            settings.range = (values[0], values[1]);
        }
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = PlotSettings::default();
        assert_eq!(settings.range, (-10.0, 10.0));
        assert_eq!((settings.width, settings.height), (800, 600));
    }

    #[test]
    fn test_empty_toml_keeps_defaults() {
        assert_eq!(PlotSettings::from_toml("").unwrap(), PlotSettings::default());
    }

    #[test]
    fn test_partial_override() {
        let settings =
            PlotSettings::from_toml("[plot]\nwidth = 1024\nrange = [-5.0, 5.0]\n").unwrap();
        assert_eq!(settings.width, 1024);
        assert_eq!(settings.height, 600);
        assert_eq!(settings.range, (-5.0, 5.0));
    }

    #[test]
    fn test_bad_range_rejected() {
        assert!(PlotSettings::from_toml("[plot]\nrange = [5.0, -5.0]\n").is_err());
        assert!(PlotSettings::from_toml("[plot]\nrange = [1.0]\n").is_err());
    }

    #[test]
    fn test_malformed_toml_rejected() {
        assert!(PlotSettings::from_toml("[plot\nwidth = ").is_err());
    }
}
