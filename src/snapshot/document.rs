//! Serialized form of a command object, as an application would dump it.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::types::{CommandKind, Direction, SqlType};

/// A command with its connection's database and its parameter collection.
///
/// ```json
/// {
///   "text": "dbo.GetOrders",
///   "kind": "stored_procedure",
///   "database": "Shop",
///   "parameters": [
///     { "name": "@customer", "type": "int", "value": 42 },
///     { "name": "@total", "type": "decimal", "direction": "output", "precision": 18, "scale": 2 }
///   ]
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandDocument {
    pub text: String,
    #[serde(default)]
    pub kind: CommandKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,
    #[serde(default)]
    pub parameters: Vec<ParameterDocument>,
}

/// One entry of the parameter collection.
///
/// Table-valued parameters (`"type": "structured"`) carry `type_name`,
/// `columns` and `rows` instead of `value`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParameterDocument {
    pub name: String,
    #[serde(rename = "type")]
    pub sql_type: SqlType,
    #[serde(default)]
    pub direction: Direction,
    #[serde(default)]
    pub value: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precision: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub columns: Vec<ColumnDocument>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rows: Vec<Vec<Value>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnDocument {
    pub name: String,
    #[serde(rename = "type")]
    pub sql_type: SqlType,
}
