//! Per-patient normalization
//!
//! Rescales a three-day inflammation table so that each patient's peak
//! reading becomes 1.0. The input is validated before any arithmetic: it
//! must be numeric, integer-typed, non-negative and exactly three columns
//! wide, checked in that order so the first violation decides the error.

use crate::error::AnalysisError;
use crate::table::{ElementKind, Table, Value};

/// Number of daily measurements each patient row must carry.
pub const MEASUREMENTS_PER_PATIENT: usize = 3;

/// Normalise patient data from a 2D inflammation table.
///
/// Each row is divided by its own maximum. A row whose maximum is 0 comes
/// back as all zeros rather than NaN, and any value that would end up
/// negative is clamped to 0. Returns a new float table of the same shape;
/// the input is not modified.
pub fn patient_normalise(table: &Table) -> Result<Table, AnalysisError> {
    for (row, cells) in table.rows().enumerate() {
        for (col, cell) in cells.iter().enumerate() {
            if cell.as_f64().is_none() {
                return Err(AnalysisError::NotNumeric {
                    row,
                    col,
                    found: cell.to_string(),
                });
            }
        }
    }

    if table.element_kind() != ElementKind::Integer {
        return Err(AnalysisError::NonIntegerValues);
    }

    for (row, cells) in table.rows().enumerate() {
        for (col, cell) in cells.iter().enumerate() {
            if let Value::Int(value) = cell {
                if *value < 0 {
                    return Err(AnalysisError::NegativeValue {
                        row,
                        col,
                        value: *value,
                    });
                }
            }
        }
    }

    if table.n_cols() != MEASUREMENTS_PER_PATIENT {
        return Err(AnalysisError::WrongColumnCount {
            expected: MEASUREMENTS_PER_PATIENT,
            actual: table.n_cols(),
        });
    }

    let mut normalised = Vec::with_capacity(table.n_rows());
    for cells in table.rows() {
        let row_max = cells
            .iter()
            .filter_map(Value::as_f64)
            .fold(0.0_f64, f64::max);

        let scaled = cells
            .iter()
            .map(|cell| {
                let value = cell.as_f64().unwrap_or(0.0);
                let ratio = if row_max == 0.0 { 0.0 } else { value / row_max };
                Value::Float(ratio.max(0.0))
            })
            .collect();
        normalised.push(scaled);
    }

    Table::from_rows(normalised)
}
