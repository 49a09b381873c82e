//! Mapping of command documents into typed snapshots.
//!
//! The declared type of each parameter picks the value variant; JSON values
//! that do not fit the declared type are kept as opaque text rather than
//! rejected, so the literal still shows what was bound.

use std::collections::HashSet;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde_json::Value;
use tracing::trace;

use super::document::{CommandDocument, ParameterDocument};
use super::SnapshotError;
use crate::literal::to_boolean_or_default;
use crate::types::{
    Cell, Column, CommandSnapshot, LiteralFamily, Parameter, SqlType, TableValue, TypedValue,
};

const TIMESTAMP_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

impl CommandDocument {
    /// Convert into a snapshot, keeping parameter order.
    pub fn into_snapshot(self) -> Result<CommandSnapshot, SnapshotError> {
        let mut seen = HashSet::new();
        let mut parameters = Vec::with_capacity(self.parameters.len());

        for document in self.parameters {
            if !seen.insert(document.name.clone()) {
                return Err(SnapshotError::DuplicateParameter {
                    name: document.name,
                });
            }
            parameters.push(parameter(document)?);
        }

        Ok(CommandSnapshot {
            text: self.text,
            kind: self.kind,
            database: self.database,
            parameters,
        })
    }
}

fn parameter(document: ParameterDocument) -> Result<Parameter, SnapshotError> {
    let value = if document.sql_type.family() == LiteralFamily::Tabular {
        TypedValue::Table(table_value(&document)?)
    } else {
        typed_value(&document.sql_type, &document.value)
    };
    trace!(parameter = document.name.as_str(), sql_type = %document.sql_type, "converted parameter");

    Ok(Parameter {
        name: document.name,
        sql_type: document.sql_type,
        direction: document.direction,
        value,
        size: document.size,
        precision: document.precision,
        scale: document.scale,
    })
}

/// Classify a raw JSON value under its declared type.
pub fn typed_value(sql_type: &SqlType, value: &Value) -> TypedValue {
    if value.is_null() {
        return TypedValue::Null;
    }

    let fallback = || TypedValue::Unrecognized(value_text(value));
    match sql_type.family() {
        LiteralFamily::Quoted => TypedValue::Text(value_text(value)),
        LiteralFamily::Boolean => TypedValue::Boolean(value_text(value)),
        LiteralFamily::Numeric if sql_type.is_approximate() => {
            value_f64(value).map(TypedValue::Float).unwrap_or_else(fallback)
        }
        LiteralFamily::Numeric => value_decimal(value)
            .map(TypedValue::Decimal)
            .unwrap_or_else(fallback),
        LiteralFamily::Plain if sql_type.is_integer() => {
            value_i64(value).map(TypedValue::Integer).unwrap_or_else(fallback)
        }
        LiteralFamily::Plain if sql_type.is_binary() => {
            value_bytes(value).map(TypedValue::Binary).unwrap_or_else(fallback)
        }
        LiteralFamily::Plain | LiteralFamily::Tabular => fallback(),
    }
}

fn table_value(document: &ParameterDocument) -> Result<TableValue, SnapshotError> {
    let type_name = document
        .type_name
        .clone()
        .ok_or_else(|| SnapshotError::MissingTypeName {
            parameter: document.name.clone(),
        })?;

    let columns: Vec<Column> = document
        .columns
        .iter()
        .map(|c| Column::new(c.name.clone(), c.sql_type.clone()))
        .collect();

    let mut rows = Vec::with_capacity(document.rows.len());
    for (row_index, row) in document.rows.iter().enumerate() {
        if !columns.is_empty() && row.len() != columns.len() {
            return Err(SnapshotError::RowArity {
                parameter: document.name.clone(),
                row: row_index,
                expected: columns.len(),
                found: row.len(),
            });
        }

        let mut cells = Vec::with_capacity(row.len());
        for (column_index, value) in row.iter().enumerate() {
            let column = columns.get(column_index);
            let cell = cell(column.map(|c| &c.sql_type), value).ok_or_else(|| {
                SnapshotError::InvalidTimestamp {
                    parameter: document.name.clone(),
                    row: row_index,
                    column: column.map(|c| c.name.clone()).unwrap_or_default(),
                    value: value_text(value),
                }
            })?;
            cells.push(cell);
        }
        rows.push(cells);
    }

    Ok(TableValue {
        type_name,
        columns,
        rows,
    })
}

/// Classify one cell by its column type, or by its JSON shape when the
/// schema is missing. `None` means a timestamp column held an unreadable value.
fn cell(column: Option<&SqlType>, value: &Value) -> Option<Cell> {
    let Some(sql_type) = column else {
        return Some(json_cell(value));
    };

    let cell = match value {
        Value::Null => Cell::Null,
        Value::Bool(b) => Cell::Boolean(*b),
        _ if sql_type.is_timestamp() => {
            let text = value.as_str()?;
            Cell::Timestamp(parse_timestamp(text)?)
        }
        Value::String(s) if *sql_type == SqlType::Bit => {
            Cell::Boolean(to_boolean_or_default(Some(s), false))
        }
        Value::Number(n) if *sql_type == SqlType::Bit => Cell::Boolean(n.as_f64() != Some(0.0)),
        _ if sql_type.is_integer() => value_i64(value)
            .map(Cell::Integer)
            .unwrap_or_else(|| json_cell(value)),
        _ if sql_type.family() == LiteralFamily::Numeric && sql_type.is_approximate() => {
            value_f64(value)
                .map(Cell::Float)
                .unwrap_or_else(|| json_cell(value))
        }
        _ if sql_type.family() == LiteralFamily::Numeric => value_decimal(value)
            .map(Cell::Decimal)
            .unwrap_or_else(|| json_cell(value)),
        Value::String(s) if sql_type.family() == LiteralFamily::Quoted => Cell::Text(s.clone()),
        _ => json_cell(value),
    };
    Some(cell)
}

fn json_cell(value: &Value) -> Cell {
    match value {
        Value::Null => Cell::Null,
        Value::Bool(b) => Cell::Boolean(*b),
        Value::String(s) => Cell::Text(s.clone()),
        Value::Number(n) => match n.as_i64() {
            Some(i) => Cell::Integer(i),
            None => n.as_f64().map(Cell::Float).unwrap_or_else(|| Cell::Other(n.to_string())),
        },
        Value::Array(_) | Value::Object(_) => Cell::Other(value.to_string()),
    }
}

/// Parse an ISO-like timestamp or a bare date (taken as midnight).
pub fn parse_timestamp(text: &str) -> Option<NaiveDateTime> {
    let text = text.trim();
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(text, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

/// Text form of a JSON value: strings unquoted, everything else as JSON.
fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn value_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Finite floats only: `inf` and `NaN` have no T-SQL literal.
fn value_f64(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|f| f.is_finite())
}

fn value_decimal(value: &Value) -> Option<Decimal> {
    let text = match value {
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.trim().to_string(),
        _ => return None,
    };
    Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .ok()
}

fn value_bytes(value: &Value) -> Option<Vec<u8>> {
    match value {
        Value::String(s) => {
            let digits = s
                .strip_prefix("0x")
                .or_else(|| s.strip_prefix("0X"))
                .unwrap_or(s);
            hex::decode(digits).ok()
        }
        Value::Array(items) => items
            .iter()
            .map(|item| item.as_u64().and_then(|b| u8::try_from(b).ok()))
            .collect(),
        _ => None,
    }
}
