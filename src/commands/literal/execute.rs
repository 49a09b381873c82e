use std::error::Error;

use serde::Serialize;
use serde_json::Value;

use super::LiteralCmd;
use crate::commands::Execute;
use crate::config::ConfigFile;
use crate::literal::format_value;
use crate::snapshot::typed_value;
use crate::types::{LiteralFamily, SqlType};

/// Result of the literal command execution
#[derive(Debug, Serialize)]
pub struct LiteralResult {
    pub sql_type: SqlType,
    pub family: LiteralFamily,
    pub literal: String,
}

impl Execute for LiteralCmd {
    type Output = LiteralResult;

    fn execute(self, _config: &ConfigFile) -> Result<Self::Output, Box<dyn Error>> {
        let raw = self.value.map(Value::String).unwrap_or(Value::Null);
        let value = typed_value(&self.sql_type, &raw);

        Ok(LiteralResult {
            family: self.sql_type.family(),
            literal: format_value(&value),
            sql_type: self.sql_type,
        })
    }
}
