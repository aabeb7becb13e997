//! CSV ingestion
//!
//! Reads a headerless inflammation CSV into a [`Table`]. Cells parse as
//! integers first, then floats; anything else stays text for the validation
//! layer to reject later.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::AnalysisError;
use crate::table::{Table, Value};

/// Load an inflammation table from a CSV file.
pub fn load_csv(path: &Path) -> Result<Table, AnalysisError> {
    read_csv(File::open(path)?)
}

/// Read an inflammation table from any CSV source.
pub fn read_csv<R: Read>(reader: R) -> Result<Table, AnalysisError> {
    // Rectangularity is checked by Table::from_rows, not by the reader.
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut rows = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        rows.push(record.iter().map(parse_cell).collect());
    }
    Table::from_rows(rows)
}

fn parse_cell(field: &str) -> Value {
    if let Ok(int) = field.parse::<i64>() {
        Value::Int(int)
    } else if let Ok(float) = field.parse::<f64>() {
        Value::Float(float)
    } else {
        Value::Text(field.to_string())
    }
}
