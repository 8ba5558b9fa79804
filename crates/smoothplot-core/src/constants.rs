//! Default paths, column names, window size, and exit codes.

/// Number of rows averaged for each smoothed value.
pub const DEFAULT_WINDOW: usize = 5;

/// Input table read by the smoother when no path is given.
pub const DEFAULT_INPUT_PATH: &str = "src/data/terrain_balance.csv";

/// Augmented table written by the smoother and read by the plotter.
pub const DEFAULT_OUTPUT_PATH: &str = "src/data/smoothed_terrain_balance.csv";

/// Sequence position column.
pub const STEP_COLUMN: &str = "Step";

/// Measurement column that gets smoothed.
pub const VALUE_COLUMN: &str = "Value";

/// Column appended by the smoother.
pub const SMOOTHED_COLUMN: &str = "smoothed";

/// Cell texts read as a missing value, matching common dataframe NA markers.
pub const MISSING_TOKENS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: u8 = 0;
    /// Generic error, including file I/O failures.
    pub const ERROR_GENERIC: u8 = 1;
    /// Input could not be parsed as a table of numbers.
    pub const ERROR_PARSE: u8 = 2;
    /// A required column is absent.
    pub const ERROR_MISSING_COLUMN: u8 = 3;
    /// Invalid configuration.
    pub const ERROR_CONFIG: u8 = 4;
}
