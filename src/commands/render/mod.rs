mod execute;
mod output;

use clap::Args;
use std::path::PathBuf;

/// Render a command document as an executable script
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  command_as_sql render cmd.json                          # Script for a dumped command
  command_as_sql render cmd.json --no-use-database        # Without the use <db>; line
  command_as_sql render cmd.json --verbatim-table-strings # Legacy table string quoting
  command_as_sql render cmd.json -f json                  # Script plus command summary")]
pub struct RenderCmd {
    /// Path to the JSON command document
    pub file: PathBuf,

    /// Omit the `use <database>;` line even when the document names a database
    #[arg(long, default_value_t = false)]
    pub no_use_database: bool,

    /// Quote string cells of table-valued parameters without doubling embedded quotes
    #[arg(long, default_value_t = false)]
    pub verbatim_table_strings: bool,
}
