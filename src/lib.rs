//! command_as_sql library - Parameterized commands as runnable SQL scripts
//!
//! Turns a command snapshot (query text or stored-procedure call plus its
//! typed, directional parameters) into a single T-SQL script with every
//! placeholder replaced by a literal, ready to paste into a query window.

pub mod cli;
pub mod commands;
pub mod config;
pub mod literal;
pub mod output;
pub mod reconstruct;
pub mod snapshot;
pub mod types;

#[macro_use]
pub mod test_macros;

#[cfg(test)]
pub mod fixtures;

pub use literal::{format_literal, format_value, TabularStrings};
pub use reconstruct::{render, render_with, RenderOptions};
pub use snapshot::{load_snapshot, parse_snapshot, SnapshotError};
pub use types::{
    Cell, Column, CommandKind, CommandSnapshot, Direction, LiteralFamily, Parameter, SqlType,
    TableValue, TypedValue,
};
