use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// One rejected input row. Collected alongside successful rows; never aborts
/// the run.
#[derive(Debug, Clone, Serialize)]
pub struct RowError {
    /// 1-based line in the source file (the header occupies line 1).
    pub line: usize,
    pub field: Option<String>,
    pub message: String,
}

impl RowError {
    pub fn new(line: usize, field: Option<&str>, message: impl Into<String>) -> Self {
        Self {
            line,
            field: field.map(str::to_string),
            message: message.into(),
        }
    }
}

impl fmt::Display for RowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.field {
            Some(field) => write!(f, "line {}: {} ({})", self.line, self.message, field),
            None => write!(f, "line {}: {}", self.line, self.message),
        }
    }
}

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("failed to read CSV header row: {source}")]
    Header {
        #[source]
        source: csv::Error,
    },

    #[error("input is missing required column '{column}'")]
    MissingColumn { column: &'static str },
}
