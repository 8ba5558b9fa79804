//! CSV persistence for [`Table`].

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use csv::{ReaderBuilder, Terminator, WriterBuilder};
use tempfile::NamedTempFile;

use crate::error::{Result, SmoothError};
use crate::table::Table;

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> SmoothError + '_ {
    move |source| SmoothError::Io {
        path: path.to_path_buf(),
        source,
    }
}

fn csv_error(path: &Path) -> impl FnOnce(csv::Error) -> SmoothError + '_ {
    move |source| SmoothError::Csv {
        path: path.to_path_buf(),
        source,
    }
}

/// Load a table from the CSV file at `path`. A header row is required.
pub fn read_table(path: &Path) -> Result<Table> {
    let file = File::open(path).map_err(io_error(path))?;
    let table = read_table_from(file, path)?;
    tracing::debug!(
        path = %path.display(),
        columns = table.headers().len(),
        rows = table.len(),
        "read table"
    );
    Ok(table)
}

/// Load a table from any reader. `origin` is only used in error messages.
pub fn read_table_from<R: Read>(reader: R, origin: &Path) -> Result<Table> {
    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(reader);

    let headers = reader
        .headers()
        .map_err(csv_error(origin))?
        .iter()
        .map(str::to_owned)
        .collect::<Vec<_>>();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(csv_error(origin))?;
        rows.push(record.iter().map(str::to_owned).collect());
    }

    Ok(Table::new(headers, rows))
}

/// Write `table` as CSV to `writer`, header row first.
pub fn write_table_to<W: Write>(writer: W, table: &Table, origin: &Path) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(writer);

    writer
        .write_record(table.headers())
        .map_err(csv_error(origin))?;
    for row in table.rows() {
        writer.write_record(row).map_err(csv_error(origin))?;
    }
    writer.flush().map_err(io_error(origin))
}

/// Write `table` to `path`, replacing any existing file.
///
/// The table is written to a temporary file next to `path` and renamed over
/// it, so a failed write never leaves a truncated file behind.
pub fn write_table(path: &Path, table: &Table) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let tmp = NamedTempFile::new_in(dir).map_err(io_error(path))?;
    write_table_to(tmp.as_file(), table, path)?;
    tmp.as_file().sync_all().map_err(io_error(path))?;
    tmp.persist(path).map_err(|e| SmoothError::Io {
        path: path.to_path_buf(),
        source: e.error,
    })?;

    tracing::debug!(path = %path.display(), rows = table.len(), "wrote table");
    Ok(())
}
