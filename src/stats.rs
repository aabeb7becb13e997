//! Daily statistics over an inflammation table
//!
//! Pure per-column reductions. Each function returns one value per day
//! column and leaves its input untouched. A text cell anywhere fails the
//! reduction with a type error from the numeric view; nothing here catches
//! or masks that.

use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;
use crate::table::Table;

/// Arithmetic mean of each day column.
pub fn daily_mean(table: &Table) -> Result<Vec<f64>, AnalysisError> {
    reduce(table, |column| {
        column.iter().sum::<f64>() / column.len() as f64
    })
}

/// Maximum of each day column.
pub fn daily_max(table: &Table) -> Result<Vec<f64>, AnalysisError> {
    reduce(table, |column| {
        column.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    })
}

/// Minimum of each day column.
pub fn daily_min(table: &Table) -> Result<Vec<f64>, AnalysisError> {
    reduce(table, |column| {
        column.iter().copied().fold(f64::INFINITY, f64::min)
    })
}

/// The three daily series consumed by the display layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySummary {
    pub average: Vec<f64>,
    pub max: Vec<f64>,
    pub min: Vec<f64>,
}

/// Compute all three daily series for one table.
pub fn daily_summary(table: &Table) -> Result<DailySummary, AnalysisError> {
    Ok(DailySummary {
        average: daily_mean(table)?,
        max: daily_max(table)?,
        min: daily_min(table)?,
    })
}

fn reduce<F>(table: &Table, fold_column: F) -> Result<Vec<f64>, AnalysisError>
where
    F: Fn(&[f64]) -> f64,
{
    if table.n_rows() == 0 {
        return Err(AnalysisError::EmptyTable);
    }

    let mut out = Vec::with_capacity(table.n_cols());
    for col in 0..table.n_cols() {
        let mut column = Vec::with_capacity(table.n_rows());
        for (row, cells) in table.rows().enumerate() {
            let cell = &cells[col];
            let value = cell.as_f64().ok_or_else(|| AnalysisError::NotNumeric {
                row,
                col,
                found: cell.to_string(),
            })?;
            column.push(value);
        }
        out.push(fold_column(&column));
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::table::Value;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_daily_mean_zeros() {
        let table = Table::from_ints(vec![vec![0, 0], vec![0, 0], vec![0, 0]]).unwrap();
        assert_eq!(daily_mean(&table).unwrap(), vec![0.0, 0.0]);
    }

    #[test]
    fn test_daily_mean_integers() {
        let table = Table::from_ints(vec![vec![1, 2], vec![3, 4], vec![5, 6]]).unwrap();
        assert_eq!(daily_mean(&table).unwrap(), vec![3.0, 4.0]);
    }

    #[test]
    fn test_daily_max_ones() {
        let table = Table::from_ints(vec![vec![1, 1], vec![1, 1], vec![1, 1]]).unwrap();
        assert_eq!(daily_max(&table).unwrap(), vec![1.0, 1.0]);
    }

    #[test]
    fn test_daily_max_value() {
        let table = Table::from_ints(vec![vec![1, 1], vec![1, 10], vec![1, 1]]).unwrap();
        assert_eq!(daily_max(&table).unwrap(), vec![1.0, 10.0]);
    }

    #[test]
    fn test_daily_min_negative_value() {
        let table = Table::from_ints(vec![vec![1, 1], vec![1, -10], vec![1, 1]]).unwrap();
        assert_eq!(daily_min(&table).unwrap(), vec![1.0, -10.0]);
    }

    #[test]
    fn test_daily_min_strings_is_type_error() {
        let table = Table::from_rows(vec![
            vec![
                Value::Text("Hello".to_string()),
                Value::Text("there".to_string()),
            ],
            vec![
                Value::Text("General".to_string()),
                Value::Text("Kenobi".to_string()),
            ],
        ])
        .unwrap();

        let err = daily_min(&table).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Type);
    }

    #[test]
    fn test_series_lengths_match_column_count() {
        let table =
            Table::from_floats(vec![vec![1.5, 2.0, 0.0, 4.25], vec![0.5, 3.0, 9.0, 1.0]]).unwrap();

        assert_eq!(daily_mean(&table).unwrap().len(), table.n_cols());
        assert_eq!(daily_max(&table).unwrap().len(), table.n_cols());
        assert_eq!(daily_min(&table).unwrap().len(), table.n_cols());
    }

    #[test]
    fn test_empty_table_is_value_error() {
        let table = Table::from_rows(Vec::new()).unwrap();
        let err = daily_mean(&table).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Value);
    }

    #[test]
    fn test_input_left_unmodified() {
        let table = Table::from_ints(vec![vec![1, 2], vec![3, 4]]).unwrap();
        let before = table.clone();

        daily_mean(&table).unwrap();
        daily_max(&table).unwrap();
        daily_min(&table).unwrap();

        assert_eq!(table, before);
    }
}
