//! Centered rolling mean.
//!
//! Each output position `i` averages the `size` inputs centered on `i`.
//! Positions whose window would run past either end of the input, or whose
//! window contains a missing value, have no result. A mean that comes out
//! as NaN (opposite infinities) is also no result.

use crate::constants::DEFAULT_WINDOW;
use crate::error::{Result, SmoothError};

/// A validated centered window size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window(usize);

impl Window {
    /// Create a window of `size` rows. The size must be odd and non-zero.
    pub fn new(size: usize) -> Result<Self> {
        if size == 0 || size % 2 == 0 {
            return Err(SmoothError::InvalidWindow(size));
        }
        Ok(Self(size))
    }

    /// Number of rows in the window.
    #[must_use]
    pub fn size(self) -> usize {
        self.0
    }

    /// Rows on each side of the center.
    #[must_use]
    pub fn half_width(self) -> usize {
        self.0 / 2
    }
}

impl Default for Window {
    fn default() -> Self {
        Self(DEFAULT_WINDOW)
    }
}

/// Compute the centered mean of `values` over `window`.
///
/// The output has the same length as the input.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn centered_mean(values: &[Option<f64>], window: Window) -> Vec<Option<f64>> {
    let half = window.half_width();
    let size = window.size() as f64;

    (0..values.len())
        .map(|i| {
            let start = i.checked_sub(half)?;
            let end = i + half;
            if end >= values.len() {
                return None;
            }
            values[start..=end]
                .iter()
                .copied()
                .sum::<Option<f64>>()
                .map(|sum| sum / size)
                .filter(|mean| !mean.is_nan())
        })
        .collect()
}
