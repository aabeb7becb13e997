//! Tabular measurement container
//!
//! Inflammation readings arrive as CSV-derived cells that are untyped until
//! validated. [`Value`] tags each cell as integer, float or text, and
//! [`Table`] is a rectangular grid of tagged cells with rows = patients and
//! columns = days. [`Table::element_kind`] is the explicit type check the
//! numeric layers run before doing any arithmetic.

use std::fmt;

use crate::error::AnalysisError;

/// A single table cell as parsed from input.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
    Text(String),
}

impl Value {
    /// Numeric view of the cell. Text has none.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(v) => Some(*v as f64),
            Value::Float(v) => Some(*v),
            Value::Text(_) => None,
        }
    }

    /// Whether the cell holds an integer measurement.
    pub fn is_int(&self) -> bool {
        matches!(self, Value::Int(_))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{v}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::Text(s) => f.write_str(s),
        }
    }
}

/// Classification of a table's element type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    /// Every cell is an integer.
    Integer,
    /// Every cell is numeric and at least one is fractional.
    Float,
    /// At least one cell is text.
    NonNumeric,
}

/// A rectangular 2D table of measurement cells.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    rows: Vec<Vec<Value>>,
}

impl Table {
    /// Build a table from raw rows, rejecting ragged input.
    pub fn from_rows(rows: Vec<Vec<Value>>) -> Result<Self, AnalysisError> {
        if let Some(first) = rows.first() {
            let expected = first.len();
            for (row, cells) in rows.iter().enumerate().skip(1) {
                if cells.len() != expected {
                    return Err(AnalysisError::RaggedRow {
                        row,
                        expected,
                        actual: cells.len(),
                    });
                }
            }
        }
        Ok(Self { rows })
    }

    /// Build a table of integer cells.
    pub fn from_ints(rows: Vec<Vec<i64>>) -> Result<Self, AnalysisError> {
        Self::from_rows(
            rows.into_iter()
                .map(|row| row.into_iter().map(Value::Int).collect())
                .collect(),
        )
    }

    /// Build a table of float cells.
    pub fn from_floats(rows: Vec<Vec<f64>>) -> Result<Self, AnalysisError> {
        Self::from_rows(
            rows.into_iter()
                .map(|row| row.into_iter().map(Value::Float).collect())
                .collect(),
        )
    }

    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn n_cols(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// `(rows, columns)` shape of the table.
    pub fn shape(&self) -> (usize, usize) {
        (self.n_rows(), self.n_cols())
    }

    pub fn row(&self, index: usize) -> Option<&[Value]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Value]> + '_ {
        self.rows.iter().map(Vec::as_slice)
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&Value> {
        self.rows.get(row).and_then(|cells| cells.get(col))
    }

    /// Classify the element type of the whole table. Text anywhere makes the
    /// table non-numeric regardless of the other cells.
    pub fn element_kind(&self) -> ElementKind {
        let mut kind = ElementKind::Integer;
        for row in &self.rows {
            for cell in row {
                match cell {
                    Value::Text(_) => return ElementKind::NonNumeric,
                    Value::Float(_) => kind = ElementKind::Float,
                    Value::Int(_) => {}
                }
            }
        }
        kind
    }
}
