mod execute;
mod output;
mod output_tests;

use clap::Args;

use crate::types::LiteralFamily;

/// List recognized SQL types and how their values are rendered
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  command_as_sql types                 # Every recognized type
  command_as_sql types --family quoted # Types rendered as quoted strings")]
pub struct TypesCmd {
    /// Only list types of this literal family
    #[arg(long, value_parser = parse_family)]
    pub family: Option<LiteralFamily>,
}

fn parse_family(name: &str) -> Result<LiteralFamily, String> {
    match name.to_ascii_lowercase().as_str() {
        "quoted" => Ok(LiteralFamily::Quoted),
        "boolean" => Ok(LiteralFamily::Boolean),
        "numeric" => Ok(LiteralFamily::Numeric),
        "tabular" => Ok(LiteralFamily::Tabular),
        "plain" => Ok(LiteralFamily::Plain),
        other => Err(format!(
            "unknown family '{other}' (expected quoted, boolean, numeric, tabular or plain)"
        )),
    }
}
