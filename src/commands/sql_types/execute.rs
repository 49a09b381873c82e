use std::error::Error;

use serde::Serialize;

use super::TypesCmd;
use crate::commands::Execute;
use crate::config::ConfigFile;
use crate::types::{LiteralFamily, SqlType};

/// A recognized type and its literal family
#[derive(Debug, Clone, Serialize)]
pub struct TypeEntry {
    pub name: String,
    pub family: LiteralFamily,
}

/// Result of the types command execution
#[derive(Debug, Default, Serialize)]
pub struct TypesResult {
    pub types: Vec<TypeEntry>,
}

impl Execute for TypesCmd {
    type Output = TypesResult;

    fn execute(self, _config: &ConfigFile) -> Result<Self::Output, Box<dyn Error>> {
        let types = SqlType::KNOWN
            .iter()
            .filter(|t| self.family.is_none_or(|family| t.family() == family))
            .map(|t| TypeEntry {
                name: t.name().to_string(),
                family: t.family(),
            })
            .collect();

        Ok(TypesResult { types })
    }
}
