//! # smoothplot-tui
//!
//! Interactive terminal chart of a smoothed series, built on ratatui with
//! the Elm architecture.

pub mod chart;
pub mod footer;
pub mod header;
pub mod keymap;
pub mod model;
pub mod styles;

pub use keymap::KeyAction;
pub use model::PlotApp;
pub use styles::ColorTheme;
