use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// a scalar value as found in a single spreadsheet cell. readers must
/// produce [`CellValue::Empty`] for missing cells rather than omitting them.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    #[default]
    Empty,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl CellValue {
    /// stringifies this cell without locale formatting. floats use the
    /// shortest decimal form that round-trips, never scientific notation,
    /// and whole numbers print without a fractional part.
    pub fn to_cell_string(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            CellValue::Bool(b) => b.to_string(),
            CellValue::Int(i) => i.to_string(),
            CellValue::Float(f) => float_to_cell_string(*f),
            CellValue::Text(s) => s.clone(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(s) => s.is_empty(),
            CellValue::Float(f) => !f.is_finite(),
            _ => false,
        }
    }
}

fn float_to_cell_string(value: f64) -> String {
    if !value.is_finite() {
        String::new()
    } else if value == 0.0 {
        // covers -0.0
        String::from("0")
    } else {
        // f64's Display is decimal-only and omits ".0" on whole numbers
        format!("{value}")
    }
}

impl Display for CellValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_cell_string())
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Float(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Int(value)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Bool(value)
    }
}
