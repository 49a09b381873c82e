//! Reconstruction of a parameterized command into a self-contained script.
//!
//! The script is laid out as:
//! 1. `use <database>;` when the snapshot names one and the option is on
//! 2. one declare/insert block per table-valued parameter, in declaration order
//! 3. the command itself: substituted query text, or a full procedure call
//!
//! Rendering is a single pass over an immutable snapshot and never fails.

mod procedure;
mod text;

pub use procedure::{procedure_lines, RETURN_VALUE_DECLARATION, RETURN_VALUE_SELECT};
pub use text::{is_identifier_char, substitute_parameters};

use serde::Serialize;
use tracing::debug;

use crate::literal::{format_literal, TabularStrings};
use crate::types::{CommandKind, CommandSnapshot};

/// Knobs that change the produced script without changing its meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RenderOptions {
    /// Emit `use <database>;` when the snapshot carries a database name
    pub use_database: bool,
    pub tabular_strings: TabularStrings,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            use_database: true,
            tabular_strings: TabularStrings::default(),
        }
    }
}

/// Render with default options.
pub fn render(command: &CommandSnapshot) -> String {
    render_with(command, &RenderOptions::default())
}

/// Render `command` as newline-terminated script text.
pub fn render_with(command: &CommandSnapshot, options: &RenderOptions) -> String {
    debug!(
        kind = ?command.kind,
        parameters = command.parameters.len(),
        "rendering command"
    );

    let mut lines = Vec::new();

    if options.use_database {
        if let Some(database) = &command.database {
            lines.push(format!("use {database};"));
        }
    }

    for parameter in command.tabular_parameters() {
        lines.push(format_literal(parameter, options.tabular_strings));
    }

    match command.kind {
        CommandKind::FreeText => {
            lines.push(substitute_parameters(&command.text, &command.parameters));
        }
        CommandKind::StoredProcedure => {
            lines.extend(procedure_lines(command, options.tabular_strings));
        }
    }

    let mut script = lines.join("\n");
    script.push('\n');
    script
}
