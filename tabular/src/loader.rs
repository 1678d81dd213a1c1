//! CSV loading into an in-memory [`Table`].

use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::error::{Result, TabularError};

/// Dialect and cleanup options for [`load_csv`].
#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// Field delimiter.
    pub delimiter: u8,
    /// Quote character.
    pub quote: u8,
    /// Values that mean "missing"; matched after trimming, loaded as `""`.
    pub na_values: Vec<String>,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            quote: b'"',
            na_values: Vec::new(),
        }
    }
}

impl LoadOptions {
    /// Sets the delimiter from a one-character string (`"\t"` for tabs).
    ///
    /// # Errors
    ///
    /// Returns [`TabularError::InvalidDialect`] unless `delimiter` is one ASCII character.
    pub fn with_delimiter(mut self, delimiter: &str) -> Result<Self> {
        self.delimiter = single_byte("delimiter", delimiter)?;
        Ok(self)
    }

    /// Sets the quote character.
    ///
    /// # Errors
    ///
    /// Returns [`TabularError::InvalidDialect`] unless `quote` is one ASCII character.
    pub fn with_quote(mut self, quote: &str) -> Result<Self> {
        self.quote = single_byte("quote character", quote)?;
        Ok(self)
    }

    /// Adds missing-value markers.
    #[must_use]
    pub fn with_na_values(mut self, values: impl IntoIterator<Item = String>) -> Self {
        self.na_values.extend(values);
        self
    }
}

fn single_byte(what: &'static str, value: &str) -> Result<u8> {
    let unescaped = match value {
        "\\t" => "\t",
        other => other,
    };
    match unescaped.as_bytes() {
        [b] if b.is_ascii() => Ok(*b),
        _ => Err(TabularError::InvalidDialect {
            what,
            value: value.to_owned(),
        }),
    }
}

/// A header row plus data rows, all cells trimmed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    /// Column names, trimmed.
    pub headers: Vec<String>,
    /// Rows; each has exactly `headers.len()` cells.
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if there are no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterates over rows as `(column name, value)` pairs.
    pub fn records(&self) -> impl Iterator<Item = Vec<(&str, &str)>> + '_ {
        self.rows.iter().map(|row| {
            self.headers
                .iter()
                .map(String::as_str)
                .zip(row.iter().map(String::as_str))
                .collect()
        })
    }
}

/// Reads a headed CSV document.
///
/// Cells are trimmed; blanks and `na_values` become `""`. Short rows are
/// padded with `""` and long rows truncated to the header width.
///
/// # Errors
///
/// Returns [`TabularError::Csv`] if the reader rejects the input.
pub fn load_csv<R: Read>(reader: R, options: &LoadOptions) -> Result<Table> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .delimiter(options.delimiter)
        .quote(options.quote)
        .from_reader(reader);

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_owned())
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let mut row: Vec<String> = record
            .iter()
            .take(headers.len())
            .map(|cell| clean(cell, &options.na_values))
            .collect();
        row.resize(headers.len(), String::new());
        rows.push(row);
    }

    debug!(columns = headers.len(), rows = rows.len(), "loaded table");
    Ok(Table { headers, rows })
}

/// Opens and reads a headed CSV file.
///
/// # Errors
///
/// Returns [`TabularError::Open`] if the file cannot be opened, otherwise
/// the errors of [`load_csv`].
pub fn load_csv_path(path: &Path, options: &LoadOptions) -> Result<Table> {
    let file = File::open(path).map_err(|source| TabularError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    load_csv(file, options)
}

fn clean(cell: &str, na_values: &[String]) -> String {
    let trimmed = cell.trim();
    if na_values.iter().any(|na| na.trim() == trimmed) {
        String::new()
    } else {
        trimmed.to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_CSV: &str = "COL1, COL2, COL3, COL4, COL5\n1, 2, 3, 4, 5\n6,7,8,9,10";

    #[test]
    fn trims_headers_and_cells() {
        let table = load_csv(TEST_CSV.as_bytes(), &LoadOptions::default()).unwrap();
        assert_eq!(table.headers, vec!["COL1", "COL2", "COL3", "COL4", "COL5"]);
        assert_eq!(table.rows[0], vec!["1", "2", "3", "4", "5"]);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn tab_separated_with_na_values() {
        let tsv = "name\toccupation\nMatti\tnakki\nPekka\t-\n";
        let opts = LoadOptions::default()
            .with_delimiter("\\t")
            .unwrap()
            .with_na_values(["-".to_owned()]);
        let table = load_csv(tsv.as_bytes(), &opts).unwrap();
        assert_eq!(table.rows[1], vec!["Pekka", ""]);
    }

    #[test]
    fn ragged_rows_are_padded() {
        let table = load_csv("a,b,c\n1\n".as_bytes(), &LoadOptions::default()).unwrap();
        assert_eq!(table.rows[0], vec!["1", "", ""]);
    }

    #[test]
    fn quoted_delimiters_stay_in_cell() {
        let table = load_csv("a,b\n\"x, y\",z\n".as_bytes(), &LoadOptions::default()).unwrap();
        assert_eq!(table.rows[0][0], "x, y");
    }

    #[test]
    fn records_pair_headers_with_values() {
        let table = load_csv("a,b\n1,2\n".as_bytes(), &LoadOptions::default()).unwrap();
        let records: Vec<_> = table.records().collect();
        assert_eq!(records[0], vec![("a", "1"), ("b", "2")]);
    }

    #[test]
    fn multi_character_delimiter_is_rejected() {
        let err = LoadOptions::default().with_delimiter(";;").unwrap_err();
        assert!(matches!(err, TabularError::InvalidDialect { .. }));
    }
}
