//! In-memory time-series table.
//!
//! Cells are kept as the text read from disk so that columns the smoother
//! does not touch are written back exactly as they were read.

use std::num::ParseFloatError;

use crate::constants::MISSING_TOKENS;
use crate::error::{Result, SmoothError};

/// An ordered table of named string columns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Build a table from a header row and data rows.
    ///
    /// Every row must have one cell per header.
    #[must_use]
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        debug_assert!(rows.iter().all(|r| r.len() == headers.len()));
        Self { headers, rows }
    }

    /// Column names in order.
    #[must_use]
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Data rows in order.
    #[must_use]
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of data rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no data rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of the column called `name`.
    #[must_use]
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Raw cells of column `idx`.
    pub fn column(&self, idx: usize) -> impl Iterator<Item = &str> {
        self.rows.iter().map(move |row| row[idx].as_str())
    }

    /// Parse column `name` as numbers. Empty, NA-marker, and NaN cells
    /// become `None`.
    ///
    /// Returns `None` if the column does not exist.
    pub fn numeric_column(&self, name: &str) -> Option<Result<Vec<Option<f64>>>> {
        let idx = self.column_index(name)?;
        Some(
            self.column(idx)
                .enumerate()
                .map(|(row, cell)| parse_cell(name, row, cell))
                .collect(),
        )
    }

    /// Replace column `name` with `cells`, or append it if absent.
    pub fn set_column(&mut self, name: &str, cells: Vec<String>) {
        debug_assert_eq!(cells.len(), self.rows.len());
        match self.column_index(name) {
            Some(idx) => {
                for (row, cell) in self.rows.iter_mut().zip(cells) {
                    row[idx] = cell;
                }
            }
            None => {
                self.headers.push(name.to_string());
                for (row, cell) in self.rows.iter_mut().zip(cells) {
                    row.push(cell);
                }
            }
        }
    }
}

/// Parse one numeric cell.
///
/// Cells matching [`MISSING_TOKENS`] after trimming, and any spelling of
/// NaN, are missing.
pub fn parse_number(cell: &str) -> std::result::Result<Option<f64>, ParseFloatError> {
    let trimmed = cell.trim();
    if MISSING_TOKENS.contains(&trimmed) {
        return Ok(None);
    }
    let value = trimmed.parse::<f64>()?;
    Ok(Some(value).filter(|v| !v.is_nan()))
}

fn parse_cell(column: &str, row: usize, cell: &str) -> Result<Option<f64>> {
    parse_number(cell).map_err(|_| SmoothError::InvalidNumber {
        column: column.to_string(),
        row,
        value: cell.to_string(),
    })
}

/// Format a computed value for output. Missing values become empty cells.
///
/// Whole numbers keep a trailing `.0` so the column reads as floating point.
#[must_use]
pub fn format_cell(value: Option<f64>) -> String {
    value
        .filter(|v| !v.is_nan())
        .map_or_else(String::new, |v| format!("{v:?}"))
}
