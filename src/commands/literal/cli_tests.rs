//! CLI parsing tests for literal command using the test DSL.

#[cfg(test)]
mod tests {
    use crate::cli::Args;
    use crate::types::SqlType;
    use clap::Parser;
    use rstest::rstest;

    crate::cli_required_arg_test! {
        command: "literal",
        test_name: test_requires_type,
        required_arg: "--type",
    }

    crate::cli_option_test! {
        command: "literal",
        variant: Literal,
        test_name: test_with_type,
        args: ["--type", "NVarChar", "abc"],
        field: sql_type,
        expected: SqlType::NVarChar,
    }

    crate::cli_option_test! {
        command: "literal",
        variant: Literal,
        test_name: test_with_short_type,
        args: ["-t", "hierarchyid", "/1/"],
        field: sql_type,
        expected: SqlType::Other("hierarchyid".to_string()),
    }

    crate::cli_option_test! {
        command: "literal",
        variant: Literal,
        test_name: test_with_value,
        args: ["-t", "int", "42"],
        field: value,
        expected: Some("42".to_string()),
    }

    crate::cli_option_test! {
        command: "literal",
        variant: Literal,
        test_name: test_without_value,
        args: ["-t", "int"],
        field: value,
        expected: None,
    }

    crate::cli_error_test! {
        command: "literal",
        test_name: test_empty_type_rejected,
        args: ["--type", ""],
    }
}
