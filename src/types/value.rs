//! Bound parameter values.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::Serialize;

use super::SqlType;

/// A bound value, already classified by the literal rule it renders through.
///
/// Date and time values are carried as their canonical text and render as
/// quoted strings without reformatting. `Boolean` keeps the raw bound text
/// because truthiness is resolved permissively at formatting time.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum TypedValue {
    Null,
    Text(String),
    Boolean(String),
    Integer(i64),
    Decimal(Decimal),
    Float(f64),
    Binary(Vec<u8>),
    Table(TableValue),
    /// A value whose declared type has no dedicated rule; rendered as plain text.
    Unrecognized(String),
}

impl TypedValue {
    pub fn text(value: impl Into<String>) -> Self {
        TypedValue::Text(value.into())
    }

    pub fn boolean(value: bool) -> Self {
        TypedValue::Boolean(value.to_string())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, TypedValue::Null)
    }
}

/// One column of a table type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Column {
    pub name: String,
    pub sql_type: SqlType,
}

impl Column {
    pub fn new(name: impl Into<String>, sql_type: SqlType) -> Self {
        Self {
            name: name.into(),
            sql_type,
        }
    }
}

/// A single cell of a table-valued parameter row.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Cell {
    Null,
    Boolean(bool),
    Text(String),
    Timestamp(NaiveDateTime),
    Integer(i64),
    Decimal(Decimal),
    Float(f64),
    Other(String),
}

/// Rows bound to a table-valued parameter, named by its server-side table type.
///
/// Every row is expected to hold one cell per column; nothing here enforces it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableValue {
    pub type_name: String,
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<Cell>>,
}

impl TableValue {
    pub fn new(type_name: impl Into<String>, columns: Vec<Column>) -> Self {
        Self {
            type_name: type_name.into(),
            columns,
            rows: Vec::new(),
        }
    }

    pub fn with_row(mut self, row: Vec<Cell>) -> Self {
        self.rows.push(row);
        self
    }
}
