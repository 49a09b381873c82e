mod cli_tests;
mod execute;
mod output;

use clap::Args;

use crate::types::SqlType;

/// Format a single value as a literal of the given SQL type
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  command_as_sql literal -t nvarchar \"O'Brien\"   # 'O''Brien'
  command_as_sql literal -t bit yes               # 1
  command_as_sql literal -t float 1234.5          # 1234.5
  command_as_sql literal -t varbinary 0xCAFE      # 0xcafe
  command_as_sql literal -t int                   # NULL (no value)")]
pub struct LiteralCmd {
    /// Declared SQL type (e.g. int, nvarchar, datetime2, bit, decimal)
    #[arg(short = 't', long = "type", value_parser = parse_sql_type)]
    pub sql_type: SqlType,

    /// Bound value as text; omit for NULL
    pub value: Option<String>,
}

fn parse_sql_type(name: &str) -> Result<SqlType, String> {
    if name.trim().is_empty() {
        return Err("type name must not be empty".to_string());
    }
    Ok(SqlType::parse(name))
}
