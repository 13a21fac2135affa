//! Raw tabular data as read from a delimited source.
//!
//! Cells stay untyped here so the missing-value report and row cleaning
//! see every column of the file, not only the ones a record type uses.

use std::io::Read;

use serde::Serialize;

use super::{IngestError, Result};
use crate::dataset::Record;

/// Cell values treated as missing, matching the usual spreadsheet/CSV
/// null markers.
const MISSING_MARKERS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

fn is_missing(cell: &str) -> bool {
    MISSING_MARKERS.contains(&cell)
}

/// Missing-cell count for one column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnMissing {
    pub column: String,
    pub missing: usize,
}

/// Missing-cell counts for every column of a table, in column order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MissingValueReport {
    pub table: String,
    pub columns: Vec<ColumnMissing>,
}

impl MissingValueReport {
    /// Total missing cells across all columns.
    pub fn total(&self) -> usize {
        self.columns.iter().map(|c| c.missing).sum()
    }

    /// Missing count for a named column, if the column exists.
    pub fn get(&self, column: &str) -> Option<usize> {
        self.columns
            .iter()
            .find(|c| c.column == column)
            .map(|c| c.missing)
    }
}

/// An in-memory table of optional string cells.
///
/// Each row remembers its 1-based position among the source's data rows,
/// so errors raised after cleaning still point at the original line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table {
    name: String,
    columns: Vec<String>,
    rows: Vec<Vec<Option<String>>>,
    #[serde(skip)]
    source_rows: Vec<usize>,
}

impl Table {
    pub fn new(
        name: impl Into<String>,
        columns: Vec<String>,
        rows: Vec<Vec<Option<String>>>,
    ) -> Self {
        let source_rows = (1..=rows.len()).collect();
        Self {
            name: name.into(),
            columns,
            rows,
            source_rows,
        }
    }

    /// Read a table from delimited text with a header row.
    ///
    /// Rows with a field count different from the header are rejected.
    pub fn from_reader<R: Read>(name: &str, reader: R, delimiter: u8) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(true)
            .from_reader(reader);

        let columns: Vec<String> = reader
            .headers()
            .map_err(|source| IngestError::Csv {
                table: name.to_string(),
                source,
            })?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        let mut rows = Vec::new();
        for (idx, record) in reader.records().enumerate() {
            let record = record.map_err(|source| IngestError::Malformed {
                table: name.to_string(),
                row: idx + 1,
                source,
            })?;
            rows.push(
                record
                    .iter()
                    .map(|cell| (!is_missing(cell)).then(|| cell.to_string()))
                    .collect(),
            );
        }

        Ok(Self::new(name, columns, rows))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Option<String>>] {
        &self.rows
    }

    /// Source data-row number of each row, in row order.
    pub fn source_rows(&self) -> &[usize] {
        &self.source_rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Count missing cells per column.
    ///
    /// Cells beyond the header width have no column and are not counted.
    pub fn missing_values(&self) -> MissingValueReport {
        let mut counts = vec![0usize; self.columns.len()];
        for row in &self.rows {
            for (count, cell) in counts.iter_mut().zip(row) {
                if cell.is_none() {
                    *count += 1;
                }
            }
        }

        MissingValueReport {
            table: self.name.clone(),
            columns: self
                .columns
                .iter()
                .zip(counts)
                .map(|(column, missing)| ColumnMissing {
                    column: column.clone(),
                    missing,
                })
                .collect(),
        }
    }

    /// Remove every row that has at least one missing cell.
    ///
    /// Returns the number of rows removed.
    pub fn drop_missing(&mut self) -> usize {
        let before = self.rows.len();
        let (rows, source_rows): (Vec<_>, Vec<_>) = std::mem::take(&mut self.rows)
            .into_iter()
            .zip(std::mem::take(&mut self.source_rows))
            .filter(|(row, _)| row.iter().all(Option::is_some))
            .unzip();
        self.rows = rows;
        self.source_rows = source_rows;
        before - self.rows.len()
    }

    /// Copy of the first `n` rows.
    pub fn head(&self, n: usize) -> Table {
        Table {
            name: self.name.clone(),
            columns: self.columns.clone(),
            rows: self.rows.iter().take(n).cloned().collect(),
            source_rows: self.source_rows.iter().take(n).copied().collect(),
        }
    }

    /// Fail if any column required by `T` is absent from the header.
    pub fn require_columns<T: Record>(&self) -> Result<()> {
        match T::REQUIRED_COLUMNS
            .iter()
            .find(|required| !self.columns.iter().any(|c| c == *required))
        {
            Some(column) => Err(IngestError::MissingColumn {
                table: self.name.clone(),
                column: column.to_string(),
            }),
            None => Ok(()),
        }
    }

    /// Deserialize every row into a typed record.
    ///
    /// Columns not named by `T` are ignored. Missing cells are passed as
    /// empty fields, so call this on a cleaned table. A failing row is
    /// reported by its source data-row number.
    pub fn records<T: Record>(&self) -> Result<Vec<T>> {
        self.require_columns::<T>()?;

        let headers = csv::StringRecord::from(self.columns.clone());
        self.rows
            .iter()
            .zip(&self.source_rows)
            .map(|(row, &source_row)| {
                let record: csv::StringRecord = row
                    .iter()
                    .map(|cell| cell.as_deref().unwrap_or(""))
                    .collect();
                record
                    .deserialize(Some(&headers))
                    .map_err(|source| IngestError::Malformed {
                        table: self.name.clone(),
                        row: source_row,
                        source,
                    })
            })
            .collect()
    }
}
