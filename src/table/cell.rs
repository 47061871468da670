use std::fmt;

use serde_json::Value;

/// A single table cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// No value
    Missing,
    /// Numeric value
    Number(f64),
    /// Scalar text value
    Text(String),
    /// Ordered list of values (CIF loop columns)
    List(Vec<String>),
    /// Nested structural metadata (lattice, sites, charge)
    Structure(Value),
}

impl Cell {
    /// Whether the cell holds no usable value. `NaN` counts as missing.
    pub fn is_missing(&self) -> bool {
        match self {
            Cell::Missing => true,
            Cell::Number(value) => value.is_nan(),
            _ => false,
        }
    }

    /// Text content, if this is a text cell
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(value) => Some(value),
            _ => None,
        }
    }

    /// Numeric content, if this is a number cell
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Cell::Number(value) => Some(*value),
            _ => None,
        }
    }

    /// Short type name used in error messages
    pub fn kind_name(&self) -> &'static str {
        match self {
            Cell::Missing => "missing",
            Cell::Number(_) => "number",
            Cell::Text(_) => "text",
            Cell::List(_) => "list",
            Cell::Structure(_) => "structure",
        }
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Cell::Text(value)
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Number(value)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Missing => Ok(()),
            Cell::Number(value) => write!(f, "{}", value),
            Cell::Text(value) => f.write_str(value),
            Cell::List(values) => f.write_str(&values.join(", ")),
            Cell::Structure(value) => write!(f, "{}", value),
        }
    }
}
