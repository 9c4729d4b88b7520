//! Plain tabular input: optional headers, rows and footers of scalar cells.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DatasetError;

/// A scalar cell value.
///
/// Cells are stringified for display: strings verbatim, numbers in their
/// shortest decimal form, `true` as `1`, `false` and null as the empty
/// string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    /// A boolean.
    Bool(bool),
    /// An integer.
    Integer(i64),
    /// A floating point number.
    Float(f64),
    /// A string.
    Text(String),
    /// An absent value.
    Null,
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(true) => f.write_str("1"),
            Self::Bool(false) | Self::Null => Ok(()),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Float(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for Cell {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for Cell {
    fn from(value: i32) -> Self {
        Self::Integer(value.into())
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for Cell {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// Tabular input for [`crate::TableDirector::make_from_dataset`].
///
/// Every section is optional; unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    /// Header labels, one per column.
    #[serde(default)]
    pub headers: Option<Vec<Cell>>,
    /// Body rows.
    #[serde(default)]
    pub rows: Option<Vec<Vec<Cell>>>,
    /// Footer values, one per column.
    #[serde(default)]
    pub footers: Option<Vec<Cell>>,
}

impl Dataset {
    /// Parse a dataset from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::Json`] for malformed JSON or non-scalar cells.
    pub fn from_json(input: &str) -> Result<Self, DatasetError> {
        Ok(serde_json::from_str(input)?)
    }

    /// Header labels, if any.
    #[must_use]
    pub fn headers(&self) -> Option<&[Cell]> {
        self.headers.as_deref()
    }

    /// Body rows, if any.
    #[must_use]
    pub fn rows(&self) -> Option<&[Vec<Cell>]> {
        self.rows.as_deref()
    }

    /// Footer values, if any.
    #[must_use]
    pub fn footers(&self) -> Option<&[Cell]> {
        self.footers.as_deref()
    }
}
