//! Load → smooth → save pipeline.

use std::path::Path;

use crate::constants::{SMOOTHED_COLUMN, VALUE_COLUMN};
use crate::error::{Result, SmoothError};
use crate::io::{read_table, write_table};
use crate::rolling::{centered_mean, Window};
use crate::table::{format_cell, Table};

/// Summary of one smoothing run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SmoothReport {
    /// Rows in the table.
    pub rows: usize,
    /// Rows that received a smoothed value.
    pub computed: usize,
    /// Window used.
    pub window: Window,
}

/// Appends a centered rolling mean of `Value` as `smoothed`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Smoother {
    window: Window,
}

impl Smoother {
    /// Create a smoother with the given window.
    #[must_use]
    pub fn new(window: Window) -> Self {
        Self { window }
    }

    /// Window this smoother averages over.
    #[must_use]
    pub fn window(&self) -> Window {
        self.window
    }

    /// Add or replace the `smoothed` column of `table`.
    ///
    /// `origin` names the table's source in error messages.
    pub fn smooth_table(&self, table: &mut Table, origin: &Path) -> Result<SmoothReport> {
        let values = table
            .numeric_column(VALUE_COLUMN)
            .ok_or_else(|| SmoothError::MissingColumn {
                column: VALUE_COLUMN.to_string(),
                path: origin.to_path_buf(),
            })??;

        let smoothed = centered_mean(&values, self.window);
        let computed = smoothed.iter().filter(|v| v.is_some()).count();
        table.set_column(
            SMOOTHED_COLUMN,
            smoothed.into_iter().map(format_cell).collect(),
        );

        if table.len() < self.window.size() {
            tracing::warn!(
                rows = table.len(),
                window = self.window.size(),
                "table shorter than window; no smoothed values computed"
            );
        }

        Ok(SmoothReport {
            rows: table.len(),
            computed,
            window: self.window,
        })
    }

    /// Read `input`, smooth it, and write the result to `output`.
    ///
    /// Nothing is written unless every step before the write succeeds.
    pub fn run(&self, input: &Path, output: &Path) -> Result<SmoothReport> {
        let mut table = read_table(input)?;
        let report = self.smooth_table(&mut table, input)?;
        write_table(output, &table)?;

        tracing::info!(
            input = %input.display(),
            output = %output.display(),
            rows = report.rows,
            computed = report.computed,
            window = report.window.size(),
            "smoothed table"
        );
        Ok(report)
    }
}
