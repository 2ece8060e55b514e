use std::fmt;

use crate::error::{OutlierError, Result};

// ---------------------------------------------------------------------------
// CellValue – a single cell of the table
// ---------------------------------------------------------------------------

/// A dynamically-typed cell, typed after its column's inferred kind.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Missing,
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(s) => write!(f, "{s}"),
            CellValue::Integer(i) => write!(f, "{i}"),
            CellValue::Float(v) => write!(f, "{v}"),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Missing => write!(f, "<NA>"),
        }
    }
}

impl CellValue {
    /// Interpret the cell as an `f64`; NaN counts as missing.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Float(v) if !v.is_nan() => Some(*v),
            CellValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// ColumnKind – inferred dtype of a whole column
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Integer,
    Float,
    Boolean,
    Text,
}

impl ColumnKind {
    /// Only integer and float columns take part in outlier analysis.
    pub fn is_numeric(self) -> bool {
        matches!(self, ColumnKind::Integer | ColumnKind::Float)
    }
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ColumnKind::Integer => "int",
            ColumnKind::Float => "float",
            ColumnKind::Boolean => "bool",
            ColumnKind::Text => "text",
        };
        f.write_str(name)
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded table
// ---------------------------------------------------------------------------

/// One named column of the table with its inferred kind.
#[derive(Debug, Clone)]
pub struct DataColumn {
    pub name: String,
    pub kind: ColumnKind,
    pub cells: Vec<CellValue>,
}

/// The parsed table, column-major. All columns have `row_count` cells.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub columns: Vec<DataColumn>,
    row_count: usize,
}

impl Dataset {
    /// Assemble a dataset; every column must hold `row_count` cells.
    pub fn new(columns: Vec<DataColumn>, row_count: usize) -> Self {
        debug_assert!(columns.iter().all(|c| c.cells.len() == row_count));
        Dataset { columns, row_count }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.row_count
    }

    pub fn is_empty(&self) -> bool {
        self.row_count == 0
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    /// Names of integer/float columns, in header order.
    pub fn numeric_columns(&self) -> Vec<String> {
        self.columns
            .iter()
            .filter(|c| c.kind.is_numeric())
            .map(|c| c.name.clone())
            .collect()
    }

    /// Extract a numeric column for analysis.
    pub fn column(&self, name: &str) -> Result<Column> {
        let col = self
            .columns
            .iter()
            .find(|c| c.name == name && c.kind.is_numeric())
            .ok_or_else(|| OutlierError::UnknownColumn(name.to_string()))?;

        Ok(Column::new(
            name,
            col.cells.iter().map(CellValue::as_f64).collect(),
        ))
    }

    /// Cells of one row, in column order.
    pub fn row(&self, row: usize) -> Vec<&CellValue> {
        self.columns.iter().map(|c| &c.cells[row]).collect()
    }

    /// Row indices of the first `n` rows (the data preview).
    pub fn preview(&self, n: usize) -> std::ops::Range<usize> {
        0..n.min(self.row_count)
    }
}

// ---------------------------------------------------------------------------
// Column – the numeric values handed to the engine
// ---------------------------------------------------------------------------

/// A non-missing value together with its original row position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observation {
    pub row: usize,
    pub value: f64,
}

/// Ordered numeric values of one selected field. Index = original row.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    values: Vec<Option<f64>>,
}

impl Column {
    pub fn new(name: impl Into<String>, values: Vec<Option<f64>>) -> Self {
        let values = values
            .into_iter()
            .map(|v| v.filter(|x| !x.is_nan()))
            .collect();
        Column {
            name: name.into(),
            values,
        }
    }

    #[cfg(test)]
    pub fn from_values(name: impl Into<String>, values: &[f64]) -> Self {
        Column::new(name, values.iter().copied().map(Some).collect())
    }

    /// Total number of rows, missing ones included.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[cfg(test)]
    pub fn values(&self) -> &[Option<f64>] {
        &self.values
    }

    /// Non-missing rows in original order.
    pub fn observations(&self) -> impl Iterator<Item = Observation> + '_ {
        self.values
            .iter()
            .enumerate()
            .filter_map(|(row, v)| v.map(|value| Observation { row, value }))
    }

    pub fn missing_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_none()).count()
    }

    /// `(min, max)` over non-missing values, `None` if there are none.
    pub fn range(&self) -> Option<(f64, f64)> {
        self.observations().fold(None, |acc, obs| match acc {
            None => Some((obs.value, obs.value)),
            Some((lo, hi)) => Some((lo.min(obs.value), hi.max(obs.value))),
        })
    }
}
