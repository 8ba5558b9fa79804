//! # smoothplot-core
//!
//! Time-series tables read from CSV, a centered rolling mean over one column,
//! and the typed series the plotter draws.

pub mod constants;
pub mod error;
pub mod io;
pub mod rolling;
pub mod series;
pub mod smoother;
pub mod table;

// Re-exports
pub use constants::{
    exit_codes, DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH, DEFAULT_WINDOW, MISSING_TOKENS,
    SMOOTHED_COLUMN, STEP_COLUMN, VALUE_COLUMN,
};
pub use error::{Result, SmoothError};
pub use rolling::{centered_mean, Window};
pub use series::{PlotPoint, PlotSeries};
pub use smoother::{SmoothReport, Smoother};
pub use table::Table;

/// Smooth `values` with the default five-row centered window.
///
/// # Example
/// ```
/// let values: Vec<Option<f64>> = [10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0]
///     .into_iter()
///     .map(Some)
///     .collect();
/// let smoothed = smoothplot_core::smooth(&values);
/// assert_eq!(smoothed[2], Some(30.0));
/// assert_eq!(smoothed[0], None);
/// ```
#[must_use]
pub fn smooth(values: &[Option<f64>]) -> Vec<Option<f64>> {
    centered_mean(values, Window::default())
}
