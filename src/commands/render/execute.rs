use std::error::Error;

use serde::Serialize;
use tracing::debug;

use super::RenderCmd;
use crate::commands::Execute;
use crate::config::ConfigFile;
use crate::literal::TabularStrings;
use crate::reconstruct::{render_with, RenderOptions};
use crate::snapshot::load_snapshot;
use crate::types::CommandKind;

/// Result of the render command execution
#[derive(Debug, Serialize)]
pub struct RenderResult {
    pub command_text: String,
    pub kind: CommandKind,
    pub parameter_count: usize,
    pub options: RenderOptions,
    pub script: String,
}

impl RenderCmd {
    /// Config file options, overridden by command-line flags.
    fn options(&self, config: &ConfigFile) -> RenderOptions {
        let mut options = config.render_options();
        if self.no_use_database {
            options.use_database = false;
        }
        if self.verbatim_table_strings {
            options.tabular_strings = TabularStrings::Verbatim;
        }
        options
    }
}

impl Execute for RenderCmd {
    type Output = RenderResult;

    fn execute(self, config: &ConfigFile) -> Result<Self::Output, Box<dyn Error>> {
        let options = self.options(config);
        let snapshot = load_snapshot(&self.file)?;
        let script = render_with(&snapshot, &options);
        debug!(bytes = script.len(), "rendered script");

        Ok(RenderResult {
            command_text: snapshot.text,
            kind: snapshot.kind,
            parameter_count: snapshot.parameters.len(),
            options,
            script,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RenderConfig;
    use crate::fixtures;
    use rstest::{fixture, rstest};
    use std::path::PathBuf;

    crate::document_fixture! {
        fixture_name: free_text_int,
        json: fixtures::FREE_TEXT_INT,
    }

    crate::document_fixture! {
        fixture_name: free_text_string,
        json: fixtures::FREE_TEXT_STRING,
    }

    crate::document_fixture! {
        fixture_name: procedure_with_output,
        json: fixtures::PROCEDURE_WITH_OUTPUT,
    }

    crate::document_fixture! {
        fixture_name: procedure_with_table,
        json: fixtures::PROCEDURE_WITH_TABLE,
    }

    // =========================================================================
    // Free-text commands
    // =========================================================================

    crate::execute_test! {
        test_name: test_render_int_parameter,
        fixture: free_text_int,
        cmd: |file| RenderCmd {
            file,
            no_use_database: false,
            verbatim_table_strings: false,
        },
        assertions: |result| {
            assert_eq!(result.kind, CommandKind::FreeText);
            assert_eq!(result.parameter_count, 1);
            assert_eq!(result.script, "select * from products where productid = 1\n");
        },
    }

    crate::execute_test! {
        test_name: test_render_string_parameter,
        fixture: free_text_string,
        cmd: |file| RenderCmd {
            file,
            no_use_database: false,
            verbatim_table_strings: false,
        },
        assertions: |result| {
            assert_eq!(
                result.script.replace('\n', ""),
                "select * from products where productname = 'myname'"
            );
        },
    }

    // =========================================================================
    // Stored procedures
    // =========================================================================

    crate::execute_test! {
        test_name: test_render_procedure_with_output,
        fixture: procedure_with_output,
        cmd: |file| RenderCmd {
            file,
            no_use_database: false,
            verbatim_table_strings: false,
        },
        assertions: |result| {
            assert_eq!(result.command_text, "GetProductName");
            assert_eq!(
                result.script,
                "use Shop;\n\
                 declare @return_value int;\n\
                 declare @out varchar = null;\n\
                 declare @attempts int = 3;\n\
                 exec [GetProductName]\n\
                 \t@id = 5\n\
                 \t, @out = @out output\n\
                 \t, @attempts = @attempts output\n\
                 ;\n\
                 select 'Return Value' = convert(varchar, @return_value);\n\
                 select '@out' = convert(varchar, @out);\n\
                 select '@attempts' = convert(varchar, @attempts);\n"
            );
        },
    }

    crate::execute_test! {
        test_name: test_render_without_use_database,
        fixture: procedure_with_output,
        cmd: |file| RenderCmd {
            file,
            no_use_database: true,
            verbatim_table_strings: false,
        },
        assertions: |result| {
            assert!(!result.options.use_database);
            assert!(result.script.starts_with("declare @return_value int;\n"));
        },
    }

    crate::execute_test! {
        test_name: test_render_procedure_with_table,
        fixture: procedure_with_table,
        cmd: |file| RenderCmd {
            file,
            no_use_database: false,
            verbatim_table_strings: false,
        },
        assertions: |result| {
            assert_eq!(
                result.script,
                "declare @p MyTableType\n\
                 insert @p values (1, 'first', '2024-03-09 07:05', 1)\n\
                 insert @p values (2, 'second', '2024-03-10 18:30', 0)\n\
                 declare @return_value int;\n\
                 declare @imported int = null;\n\
                 exec [ImportProducts]\n\
                 \t@p = @p\n\
                 \t, @dryRun = 0\n\
                 \t, @imported = @imported output\n\
                 ;\n\
                 select 'Return Value' = convert(varchar, @return_value);\n\
                 select '@imported' = convert(varchar, @imported);\n"
            );
        },
    }

    // =========================================================================
    // Option precedence
    // =========================================================================

    #[rstest]
    fn test_flags_override_config() {
        let config = ConfigFile {
            render: RenderConfig {
                use_database: true,
                tabular_strings: TabularStrings::Escaped,
            },
        };
        let cmd = RenderCmd {
            file: PathBuf::from("unused.json"),
            no_use_database: true,
            verbatim_table_strings: true,
        };
        let options = cmd.options(&config);
        assert!(!options.use_database);
        assert_eq!(options.tabular_strings, TabularStrings::Verbatim);
    }

    #[rstest]
    fn test_config_applies_without_flags() {
        let config = ConfigFile {
            render: RenderConfig {
                use_database: false,
                tabular_strings: TabularStrings::Verbatim,
            },
        };
        let cmd = RenderCmd {
            file: PathBuf::from("unused.json"),
            no_use_database: false,
            verbatim_table_strings: false,
        };
        assert_eq!(cmd.options(&config), config.render_options());
    }

    // =========================================================================
    // Error handling tests
    // =========================================================================

    #[rstest]
    fn test_missing_document_fails() {
        let dir = tempfile::tempdir().unwrap();
        let cmd = RenderCmd {
            file: dir.path().join("missing.json"),
            no_use_database: false,
            verbatim_table_strings: false,
        };
        let result = cmd.execute(&ConfigFile::default());
        assert!(result.is_err());
    }
}
