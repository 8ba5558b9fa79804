//! Plot input: `Step` against `smoothed`, with the raw `Value` if present.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer};

use crate::constants::{SMOOTHED_COLUMN, STEP_COLUMN, VALUE_COLUMN};
use crate::error::{Result, SmoothError};
use crate::table::parse_number;

/// One row of a smoothed table.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct PlotPoint {
    #[serde(rename = "Step")]
    pub step: f64,
    /// Raw value, or `None` when missing or not a number.
    #[serde(rename = "Value", default, deserialize_with = "lenient_number")]
    pub value: Option<f64>,
    #[serde(deserialize_with = "number_or_missing")]
    pub smoothed: Option<f64>,
}

/// Missing markers and NaN become `None`; other text is an error.
fn number_or_missing<'de, D>(deserializer: D) -> std::result::Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(cell) => parse_number(&cell).map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

/// Like [`number_or_missing`], but text that is not a number is also `None`.
fn lenient_number<'de, D>(deserializer: D) -> std::result::Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let cell = Option::<String>::deserialize(deserializer)?;
    Ok(cell.and_then(|cell| parse_number(&cell).ok().flatten()))
}

/// Points to plot, in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlotSeries {
    /// Where the points were read from.
    pub source: PathBuf,
    /// Rows in file order.
    pub points: Vec<PlotPoint>,
    /// Whether the file carries a `Value` column with at least one number.
    pub has_raw: bool,
}

impl PlotSeries {
    /// Load the series from the smoother's output at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|source| SmoothError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let series = Self::from_reader(file, path)?;
        tracing::debug!(
            path = %path.display(),
            points = series.points.len(),
            computed = series.computed(),
            "loaded plot series"
        );
        Ok(series)
    }

    /// Load the series from any reader. `origin` names it in errors.
    pub fn from_reader<R: Read>(reader: R, origin: &Path) -> Result<Self> {
        let csv_error = |source: csv::Error| SmoothError::Csv {
            path: origin.to_path_buf(),
            source,
        };

        let mut reader = csv::Reader::from_reader(reader);
        let headers = reader.headers().map_err(csv_error)?.clone();
        for column in [STEP_COLUMN, SMOOTHED_COLUMN] {
            if !headers.iter().any(|h| h == column) {
                return Err(SmoothError::MissingColumn {
                    column: column.to_string(),
                    path: origin.to_path_buf(),
                });
            }
        }
        let points = reader
            .deserialize::<PlotPoint>()
            .collect::<std::result::Result<Vec<PlotPoint>, _>>()
            .map_err(csv_error)?;
        let has_raw = headers.iter().any(|h| h == VALUE_COLUMN)
            && points.iter().any(|p| p.value.is_some());

        Ok(Self {
            source: origin.to_path_buf(),
            points,
            has_raw,
        })
    }

    /// Number of rows with a smoothed value.
    #[must_use]
    pub fn computed(&self) -> usize {
        self.points.iter().filter(|p| p.smoothed.is_some()).count()
    }

    /// Maximal runs of consecutive smoothed points.
    ///
    /// A missing value ends the current run, so the line has a gap there.
    #[must_use]
    pub fn smoothed_segments(&self) -> Vec<Vec<(f64, f64)>> {
        let mut segments = Vec::new();
        let mut current = Vec::new();
        for point in &self.points {
            match point.smoothed {
                Some(y) => current.push((point.step, y)),
                None if !current.is_empty() => segments.push(std::mem::take(&mut current)),
                None => {}
            }
        }
        if !current.is_empty() {
            segments.push(current);
        }
        segments
    }

    /// Raw `(Step, Value)` points, skipping missing values.
    #[must_use]
    pub fn raw_points(&self) -> Vec<(f64, f64)> {
        self.points
            .iter()
            .filter_map(|p| p.value.map(|v| (p.step, v)))
            .collect()
    }

    /// Range of `Step` over all rows.
    #[must_use]
    pub fn x_bounds(&self) -> Option<(f64, f64)> {
        bounds(self.points.iter().map(|p| p.step))
    }

    /// Range of plotted values, optionally including the raw series.
    #[must_use]
    pub fn y_bounds(&self, include_raw: bool) -> Option<(f64, f64)> {
        let smoothed = self.points.iter().filter_map(|p| p.smoothed);
        if include_raw {
            bounds(smoothed.chain(self.points.iter().filter_map(|p| p.value)))
        } else {
            bounds(smoothed)
        }
    }
}

fn bounds(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(data: &str) -> Result<PlotSeries> {
        PlotSeries::from_reader(data.as_bytes(), Path::new("plot.csv"))
    }

    const SMOOTHED: &str = "Step,Value,smoothed\n\
        0,10,\n1,20,\n2,30,30.0\n3,40,40.0\n4,50,50.0\n5,60,\n6,70,\n";

    #[test]
    fn loads_points_in_order() {
        let series = parse(SMOOTHED).unwrap();
        assert_eq!(series.points.len(), 7);
        assert!(series.has_raw);
        assert_eq!(series.computed(), 3);
        assert_eq!(series.points[2].smoothed, Some(30.0));
        assert_eq!(series.points[0].smoothed, None);
        assert_eq!(series.points[6].value, Some(70.0));
    }

    #[test]
    fn single_segment() {
        let series = parse(SMOOTHED).unwrap();
        assert_eq!(
            series.smoothed_segments(),
            vec![vec![(2.0, 30.0), (3.0, 40.0), (4.0, 50.0)]]
        );
    }

    #[test]
    fn gaps_split_segments() {
        let series = parse("Step,smoothed\n0,1\n1,\n2,3\n3,4\n").unwrap();
        assert!(!series.has_raw);
        assert_eq!(
            series.smoothed_segments(),
            vec![vec![(0.0, 1.0)], vec![(2.0, 3.0), (3.0, 4.0)]]
        );
        assert!(series.raw_points().is_empty());
    }

    #[test]
    fn bounds_cover_series() {
        let series = parse(SMOOTHED).unwrap();
        assert_eq!(series.x_bounds(), Some((0.0, 6.0)));
        assert_eq!(series.y_bounds(false), Some((30.0, 50.0)));
        assert_eq!(series.y_bounds(true), Some((10.0, 70.0)));
    }

    #[test]
    fn no_computed_values_has_no_y_bounds() {
        let series = parse("Step,Value,smoothed\n0,1,\n1,2,\n").unwrap();
        assert!(series.smoothed_segments().is_empty());
        assert_eq!(series.y_bounds(false), None);
        assert_eq!(series.x_bounds(), Some((0.0, 1.0)));
    }

    #[test]
    fn missing_smoothed_column() {
        let err = parse("Step,Value\n0,1\n").unwrap_err();
        assert!(matches!(err, SmoothError::MissingColumn { ref column, .. } if column == "smoothed"));
    }

    #[test]
    fn missing_step_column() {
        let err = parse("Value,smoothed\n1,\n").unwrap_err();
        assert!(matches!(err, SmoothError::MissingColumn { ref column, .. } if column == "Step"));
    }

    #[test]
    fn bad_number_is_csv_error() {
        let err = parse("Step,smoothed\nzero,1\n").unwrap_err();
        assert!(matches!(err, SmoothError::Csv { .. }));
    }

    #[test]
    fn nan_smoothed_cells_are_missing() {
        let series = parse("Step,Value,smoothed\n0,1,NaN\n1,2,2.0\n2,NaN,nan\n3,4,NA\n").unwrap();
        assert_eq!(series.computed(), 1);
        assert_eq!(series.smoothed_segments(), vec![vec![(1.0, 2.0)]]);
        assert_eq!(series.raw_points(), vec![(0.0, 1.0), (1.0, 2.0), (3.0, 4.0)]);
    }

    #[test]
    fn text_in_value_column_is_not_fatal() {
        let series = parse("Step,Value,smoothed\n0,a,\n1,b,\n2,c,3.0\n").unwrap();
        assert_eq!(series.points.len(), 3);
        assert_eq!(series.computed(), 1);
        assert!(!series.has_raw);
        assert!(series.raw_points().is_empty());
    }

    #[test]
    fn partly_numeric_value_column_keeps_numbers() {
        let series = parse("Step,Value,smoothed\n0,1.5,\n1,oops,\n").unwrap();
        assert!(series.has_raw);
        assert_eq!(series.raw_points(), vec![(0.0, 1.5)]);
    }

    #[test]
    fn text_in_smoothed_column_is_csv_error() {
        let err = parse("Step,smoothed\n0,abc\n").unwrap_err();
        assert!(matches!(err, SmoothError::Csv { .. }));
    }

    #[test]
    fn load_missing_file() {
        let err = PlotSeries::load(Path::new("no/such/file.csv")).unwrap_err();
        assert!(err.is_not_found());
    }
}
