//! Command definitions and implementations.
//!
//! Each command is defined in its own module with:
//! - The command struct with clap attributes for CLI parsing
//! - An `Execute` implementation producing a serializable result
//! - An `Outputable` implementation for plain-text output

mod literal;
mod render;
mod sql_types;

pub use literal::LiteralCmd;
pub use render::RenderCmd;
pub use sql_types::TypesCmd;

use clap::Subcommand;
use std::error::Error;

use crate::config::ConfigFile;
use crate::output::{OutputFormat, Outputable};

/// Trait for executing commands with command-specific result types.
pub trait Execute {
    type Output: Outputable;

    fn execute(self, config: &ConfigFile) -> Result<Self::Output, Box<dyn Error>>;
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render a command document as an executable script
    Render(RenderCmd),

    /// Format a single value as a literal of the given SQL type
    Literal(LiteralCmd),

    /// List recognized SQL types and how their values are rendered
    Types(TypesCmd),
}

impl Command {
    /// Execute the command and return formatted output
    pub fn run(self, config: &ConfigFile, format: OutputFormat) -> Result<String, Box<dyn Error>> {
        match self {
            Command::Render(cmd) => {
                let result = cmd.execute(config)?;
                Ok(result.format(format))
            }
            Command::Literal(cmd) => {
                let result = cmd.execute(config)?;
                Ok(result.format(format))
            }
            Command::Types(cmd) => {
                let result = cmd.execute(config)?;
                Ok(result.format(format))
            }
        }
    }
}
