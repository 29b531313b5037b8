//! Loading and validation of the pivoted month x hour input table.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use tracing::debug;

use crate::error::PlotError;

/// Name of the column holding the row labels.
pub const INDEX_COLUMN: &str = "Month of the year";

/// Number of hour-of-day columns, named "0" through "23".
pub const HOURS: usize = 24;

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Cell spellings read as a missing value, the same set pandas recognises.
pub const NA_VALUES: [&str; 19] = [
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// The hour column names in ascending order.
pub fn hour_columns() -> Vec<String> {
    (0..HOURS).map(|h| h.to_string()).collect()
}

/// A validated table of values indexed by month (rows) and column name.
///
/// Rows keep file order, repeats included. Columns keep file order and may
/// include columns besides the 24 hours. Empty cells are stored as `NaN`.
#[derive(Debug, Clone)]
pub struct MonthHourTable {
    columns: Vec<String>,
    rows: Vec<String>,
    values: Vec<Vec<f64>>,
}

impl MonthHourTable {
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn row_labels(&self) -> &[String] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn value(&self, row: usize, column: &str) -> Option<f64> {
        let col = self.column_index(column)?;
        self.values.get(row).map(|r| r[col])
    }

    /// Every cell of the table, row by row.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().flat_map(|row| row.iter().copied())
    }

    /// One `[f64; HOURS]` per row, hours in ascending order.
    pub fn hour_matrix(&self) -> Vec<[f64; HOURS]> {
        let positions: Vec<usize> = hour_columns()
            .iter()
            .filter_map(|h| self.column_index(h))
            .collect();

        self.values
            .iter()
            .map(|row| {
                let mut out = [f64::NAN; HOURS];
                for (slot, &pos) in out.iter_mut().zip(&positions) {
                    *slot = row[pos];
                }
                out
            })
            .collect()
    }
}

/// Load and validate the table at `path`.
pub fn load_table(path: &Path) -> Result<MonthHourTable, PlotError> {
    let file = File::open(path)?;
    read_table(BufReader::new(file))
}

/// Read and validate a table from any CSV source.
///
/// Lines starting with `#` are skipped. The header must contain the
/// `"Month of the year"` index column and every hour column `"0".."23"`,
/// and each row label must be one of the twelve month names. Not every
/// month has to appear, and months may repeat.
pub fn read_table<R: Read>(reader: R) -> Result<MonthHourTable, PlotError> {
    let mut rdr = csv::ReaderBuilder::new()
        .comment(Some(b'#'))
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let index_pos = headers
        .iter()
        .position(|h| h == INDEX_COLUMN)
        .ok_or_else(|| PlotError::MissingIndexColumn(INDEX_COLUMN.to_string()))?;

    let columns: Vec<String> = headers
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != index_pos)
        .map(|(_, h)| h.to_string())
        .collect();

    let expected = hour_columns();
    let missing: Vec<String> = expected
        .iter()
        .filter(|h| !columns.contains(h))
        .cloned()
        .collect();
    if !missing.is_empty() {
        return Err(PlotError::MissingColumns { expected, missing });
    }

    let mut rows = Vec::new();
    let mut raw = Vec::new();
    for record in rdr.records() {
        let record = record?;
        let mut cells = Vec::with_capacity(columns.len());
        for (i, field) in record.iter().enumerate() {
            if i == index_pos {
                rows.push(field.to_string());
            } else {
                cells.push(field.to_string());
            }
        }
        raw.push(cells);
    }

    let invalid: Vec<String> = rows
        .iter()
        .filter(|label| !MONTH_NAMES.contains(&label.as_str()))
        .cloned()
        .collect();
    if !invalid.is_empty() {
        return Err(PlotError::InvalidRowLabels {
            expected: MONTH_NAMES.iter().map(|m| m.to_string()).collect(),
            invalid,
        });
    }

    let mut values = Vec::with_capacity(raw.len());
    for (label, cells) in rows.iter().zip(raw) {
        let parsed = cells
            .iter()
            .zip(&columns)
            .map(|(cell, column)| parse_cell(cell, label, column))
            .collect::<Result<Vec<f64>, PlotError>>()?;
        values.push(parsed);
    }

    debug!(rows = rows.len(), columns = columns.len(), "validated input table");

    Ok(MonthHourTable {
        columns,
        rows,
        values,
    })
}

fn parse_cell(cell: &str, row: &str, column: &str) -> Result<f64, PlotError> {
    if NA_VALUES.contains(&cell) {
        return Ok(f64::NAN);
    }
    cell.parse::<f64>().map_err(|_| PlotError::InvalidCell {
        row: row.to_string(),
        column: column.to_string(),
        value: cell.to_string(),
    })
}
