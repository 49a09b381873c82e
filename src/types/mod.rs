//! Data model for parameterized commands.

mod command;
mod sql_type;
mod value;

pub use command::{CommandKind, CommandSnapshot, Direction, Parameter};
pub use sql_type::{LiteralFamily, SqlType};
pub use value::{Cell, Column, TableValue, TypedValue};
