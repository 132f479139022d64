//! different utility modules used throughout the project
/// optional toml configuration for plot output
pub mod config;
/// number and root rendering for the display buffer and the history log
pub mod format;
/// tiny module to plot a one-variable expression to a PNG file
pub mod plots;
