//! Loading command snapshots from JSON command documents.
//!
//! This is the boundary between an application's command object and the
//! renderer: the document mirrors the object's text, kind, connection
//! database and parameter collection, and is validated here so rendering
//! itself never has to fail.

mod convert;
mod document;

pub use convert::{parse_timestamp, typed_value};
pub use document::{ColumnDocument, CommandDocument, ParameterDocument};

use std::fs;
use std::path::Path;

use thiserror::Error;
use tracing::debug;

use crate::types::CommandSnapshot;

#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("Failed to read command document '{path}': {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid command document: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Duplicate parameter '{name}'")]
    DuplicateParameter { name: String },

    #[error("Table-valued parameter '{parameter}' has no type_name")]
    MissingTypeName { parameter: String },

    #[error("Row {row} of '{parameter}' has {found} cell(s), expected {expected}")]
    RowArity {
        parameter: String,
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Invalid timestamp '{value}' in row {row}, column '{column}' of '{parameter}'")]
    InvalidTimestamp {
        parameter: String,
        row: usize,
        column: String,
        value: String,
    },
}

/// Parse a command document from JSON text.
pub fn parse_snapshot(json: &str) -> Result<CommandSnapshot, SnapshotError> {
    let document: CommandDocument = serde_json::from_str(json)?;
    document.into_snapshot()
}

/// Read and parse a command document file.
pub fn load_snapshot(path: &Path) -> Result<CommandSnapshot, SnapshotError> {
    debug!(path = %path.display(), "loading command document");
    let content = fs::read_to_string(path).map_err(|e| SnapshotError::ReadFailed {
        path: path.display().to_string(),
        source: e,
    })?;
    parse_snapshot(&content)
}
