//! Parameters and the command snapshot they belong to.

use serde::{Deserialize, Serialize};

use super::{SqlType, TableValue, TypedValue};

/// Which way a parameter carries its value across the call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    #[default]
    Input,
    Output,
    #[serde(alias = "inout")]
    InputOutput,
    #[serde(alias = "return")]
    ReturnValue,
}

impl Direction {
    /// Output and InputOutput parameters get a declared variable and a result select.
    pub fn is_output(self) -> bool {
        matches!(self, Direction::Output | Direction::InputOutput)
    }
}

/// The shape of a command.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandKind {
    /// Query text with placeholder tokens
    #[default]
    #[serde(alias = "text")]
    FreeText,
    /// Named stored-procedure invocation
    #[serde(alias = "procedure", alias = "proc")]
    StoredProcedure,
}

/// A named, typed, directional parameter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Parameter {
    pub name: String,
    pub sql_type: SqlType,
    pub direction: Direction,
    pub value: TypedValue,
    /// Declared length; `-1` means `max`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precision: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<u8>,
}

impl Parameter {
    pub fn new(name: impl Into<String>, sql_type: SqlType, value: TypedValue) -> Self {
        Self {
            name: name.into(),
            sql_type,
            direction: Direction::Input,
            value,
            size: None,
            precision: None,
            scale: None,
        }
    }

    /// An Output parameter. It has no bound value yet.
    pub fn output(name: impl Into<String>, sql_type: SqlType) -> Self {
        Self::new(name, sql_type, TypedValue::Null).with_direction(Direction::Output)
    }

    pub fn table(name: impl Into<String>, table: TableValue) -> Self {
        Self::new(name, SqlType::Structured, TypedValue::Table(table))
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_size(mut self, size: i32) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_precision(mut self, precision: u8, scale: u8) -> Self {
        self.precision = Some(precision);
        self.scale = Some(scale);
        self
    }

    pub fn table_value(&self) -> Option<&TableValue> {
        match &self.value {
            TypedValue::Table(table) => Some(table),
            _ => None,
        }
    }

    pub fn is_tabular(&self) -> bool {
        self.table_value().is_some()
    }

    /// Type text for a `declare` statement, e.g. `varchar(50)` or `decimal(18,2)`.
    pub fn declared_type(&self) -> String {
        let base = self.sql_type.name();
        match (self.size, self.precision) {
            (Some(-1), _) if self.sql_type.takes_length() => format!("{base}(max)"),
            (Some(size), _) if self.sql_type.takes_length() && size > 0 => {
                format!("{base}({size})")
            }
            (_, Some(precision)) if self.sql_type == SqlType::Decimal => {
                format!("{base}({precision},{})", self.scale.unwrap_or(0))
            }
            _ => base.to_string(),
        }
    }
}

/// Read-only view of a command: its text, its kind and its ordered parameters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommandSnapshot {
    pub text: String,
    pub kind: CommandKind,
    /// Database the command's connection targets, if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,
    pub parameters: Vec<Parameter>,
}

impl CommandSnapshot {
    pub fn free_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: CommandKind::FreeText,
            database: None,
            parameters: Vec::new(),
        }
    }

    pub fn stored_procedure(name: impl Into<String>) -> Self {
        Self {
            kind: CommandKind::StoredProcedure,
            ..Self::free_text(name)
        }
    }

    pub fn with_database(mut self, database: impl Into<String>) -> Self {
        self.database = Some(database.into());
        self
    }

    pub fn with_parameter(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Table-valued parameters in declaration order.
    pub fn tabular_parameters(&self) -> impl Iterator<Item = &Parameter> {
        self.parameters.iter().filter(|p| p.is_tabular())
    }

    /// Output and InputOutput parameters in declaration order.
    pub fn output_parameters(&self) -> impl Iterator<Item = &Parameter> {
        self.parameters.iter().filter(|p| p.direction.is_output())
    }
}
