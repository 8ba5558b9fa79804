//! Error type shared by the smoother and the plot loader.

use std::path::PathBuf;

use crate::constants::exit_codes;

/// Errors raised while loading, smoothing, or saving a table.
#[derive(Debug, thiserror::Error)]
pub enum SmoothError {
    /// Reading or writing a file failed.
    #[error("I/O error on {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not well-formed CSV.
    #[error("malformed CSV in {}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A column the operation needs is absent from the header row.
    #[error("column `{column}` not found in {}", .path.display())]
    MissingColumn { column: String, path: PathBuf },

    /// A cell that must hold a number does not.
    #[error("row {row}: column `{column}` holds non-numeric value {value:?}")]
    InvalidNumber {
        column: String,
        row: usize,
        value: String,
    },

    /// Centered windows need an odd, non-zero size.
    #[error("window size must be odd and at least 1, got {0}")]
    InvalidWindow(usize),
}

impl SmoothError {
    /// Whether the underlying cause is a missing file.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Io { source, .. } => source.kind() == std::io::ErrorKind::NotFound,
            Self::Csv { source, .. } => match source.kind() {
                csv::ErrorKind::Io(io) => io.kind() == std::io::ErrorKind::NotFound,
                _ => false,
            },
            _ => false,
        }
    }

    /// Process exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Io { .. } => exit_codes::ERROR_GENERIC,
            Self::Csv { source, .. } if source.is_io_error() => exit_codes::ERROR_GENERIC,
            Self::Csv { .. } | Self::InvalidNumber { .. } => exit_codes::ERROR_PARSE,
            Self::MissingColumn { .. } => exit_codes::ERROR_MISSING_COLUMN,
            Self::InvalidWindow(_) => exit_codes::ERROR_CONFIG,
        }
    }
}

/// Result alias for table operations.
pub type Result<T> = std::result::Result<T, SmoothError>;
