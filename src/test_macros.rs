//! Declarative macros for generating tests.
//!
//! This module provides macros to reduce boilerplate in CLI parsing, execute,
//! literal and output tests. Instead of writing repetitive test functions, you
//! can declare the test cases and let the macro generate the actual test code.

/// Generate a test for default values when a command is invoked with minimal args.
#[macro_export]
macro_rules! cli_defaults_test {
    (
        command: $cmd:literal,
        variant: $variant:ident,
        required_args: [$($req_arg:literal),*],
        defaults: {
            $($def_field:ident : $def_expected:expr),* $(,)?
        } $(,)?
    ) => {
        #[rstest]
        fn test_defaults() {
            let args = Args::try_parse_from(["command_as_sql", $cmd, $($req_arg),*]).unwrap();
            match args.command {
                crate::commands::Command::$variant(cmd) => {
                    $(
                        assert_eq!(cmd.$def_field, $def_expected,
                            concat!("Default value mismatch for field: ", stringify!($def_field)));
                    )*
                }
                _ => panic!(concat!("Expected ", stringify!($variant), " command")),
            }
        }
    };
}

/// Generate a single CLI option test.
#[macro_export]
macro_rules! cli_option_test {
    (
        command: $cmd:literal,
        variant: $variant:ident,
        test_name: $test_name:ident,
        args: [$($arg:literal),+],
        field: $field:ident,
        expected: $expected:expr $(,)?
    ) => {
        #[rstest]
        fn $test_name() {
            let args = Args::try_parse_from([
                "command_as_sql",
                $cmd,
                $($arg),+
            ]).unwrap();
            match args.command {
                crate::commands::Command::$variant(cmd) => {
                    assert_eq!(cmd.$field, $expected,
                        concat!("Field ", stringify!($field), " mismatch"));
                }
                _ => panic!(concat!("Expected ", stringify!($variant), " command")),
            }
        }
    };
}

/// Generate a test that verifies a command requires a specific argument.
///
/// # Example
///
/// ```ignore
/// cli_required_arg_test! {
///     command: "literal",
///     test_name: test_requires_type,
///     required_arg: "--type",
/// }
/// ```
#[macro_export]
macro_rules! cli_required_arg_test {
    (
        command: $cmd:literal,
        test_name: $test_name:ident,
        required_arg: $arg:literal $(,)?
    ) => {
        #[rstest]
        fn $test_name() {
            let result = Args::try_parse_from(["command_as_sql", $cmd]);
            assert!(result.is_err(), concat!("Command should require ", $arg));
            assert!(
                result.unwrap_err().to_string().contains($arg),
                concat!("Error should mention ", $arg)
            );
        }
    };
}

/// Generate a test that verifies parsing fails with specific invalid args.
///
/// # Example
///
/// ```ignore
/// cli_error_test! {
///     command: "types",
///     test_name: test_unknown_family_rejected,
///     args: ["--family", "fancy"],
/// }
/// ```
#[macro_export]
macro_rules! cli_error_test {
    (
        command: $cmd:literal,
        test_name: $test_name:ident,
        args: [$($arg:literal),+] $(,)?
    ) => {
        #[rstest]
        fn $test_name() {
            let result = Args::try_parse_from([
                "command_as_sql",
                $cmd,
                $($arg),+
            ]);
            assert!(result.is_err());
        }
    };
}

// =============================================================================
// Execute Test Macros
// =============================================================================

/// Generate a fixture that writes a command document to a temporary file.
#[macro_export]
macro_rules! document_fixture {
    (
        fixture_name: $name:ident,
        json: $json:expr $(,)?
    ) => {
        #[fixture]
        fn $name() -> tempfile::NamedTempFile {
            use std::io::Write;
            let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
            file.write_all($json.as_bytes()).expect("Failed to write temp file");
            file.flush().expect("Failed to flush temp file");
            file
        }
    };
}

/// Generate a test that executes a command built from a document fixture's
/// path, with default configuration, and runs assertions on the result.
///
/// # Example
///
/// ```ignore
/// execute_test! {
///     test_name: test_render_int_parameter,
///     fixture: free_text_int,
///     cmd: |file| RenderCmd { file, no_use_database: false, verbatim_table_strings: false },
///     assertions: |result| {
///         assert_eq!(result.parameter_count, 1);
///     },
/// }
/// ```
#[macro_export]
macro_rules! execute_test {
    (
        test_name: $test_name:ident,
        fixture: $fixture:ident,
        cmd: |$file:ident| $cmd:expr,
        assertions: |$result:ident| $body:block $(,)?
    ) => {
        #[rstest]
        fn $test_name($fixture: tempfile::NamedTempFile) {
            use crate::commands::Execute;
            let $file = $fixture.path().to_path_buf();
            let cmd = $cmd;
            let $result = cmd
                .execute(&crate::config::ConfigFile::default())
                .expect("Command should succeed");
            $body
        }
    };
}

// =============================================================================
// Literal Test Macros
// =============================================================================

/// Generate a test that verifies the scalar literal of a value.
///
/// # Example
///
/// ```ignore
/// literal_test! {
///     test_name: test_text_with_quotes,
///     value: TypedValue::text("O'Brien"),
///     expected: "'O''Brien'",
/// }
/// ```
#[macro_export]
macro_rules! literal_test {
    (
        test_name: $test_name:ident,
        value: $value:expr,
        expected: $expected:expr $(,)?
    ) => {
        #[rstest]
        fn $test_name() {
            assert_eq!($crate::literal::format_value(&$value), $expected);
        }
    };
}

// =============================================================================
// Output Test Macros
// =============================================================================

/// Generate a test that verifies text output matches expected string.
///
/// Works with rstest fixtures by accepting a fixture parameter.
///
/// # Example
/// ```ignore
/// output_text_test! {
///     test_name: test_to_text_empty,
///     fixture: empty_result,
///     fixture_type: TypesResult,
///     expected: EMPTY_TEXT,
/// }
/// ```
#[macro_export]
macro_rules! output_text_test {
    (
        test_name: $test_name:ident,
        fixture: $fixture:ident,
        fixture_type: $fixture_type:ty,
        expected: $expected:expr $(,)?
    ) => {
        #[rstest]
        fn $test_name($fixture: $fixture_type) {
            use crate::output::Outputable;
            assert_eq!($fixture.to_text(), $expected);
        }
    };
}

/// Generate a test that verifies JSON output is valid and contains expected fields.
///
/// # Example
/// ```ignore
/// output_json_test! {
///     test_name: test_format_json,
///     fixture: quoted_result,
///     fixture_type: LiteralResult,
///     assertions: {
///         "family": "quoted",
///     },
/// }
/// ```
#[macro_export]
macro_rules! output_json_test {
    (
        test_name: $test_name:ident,
        fixture: $fixture:ident,
        fixture_type: $fixture_type:ty,
        assertions: { $($field:literal : $expected:expr),* $(,)? } $(,)?
    ) => {
        #[rstest]
        fn $test_name($fixture: $fixture_type) {
            use crate::output::{Outputable, OutputFormat};
            let output = $fixture.format(OutputFormat::Json);
            let parsed: serde_json::Value = serde_json::from_str(&output)
                .expect("Should produce valid JSON");
            $(
                assert_eq!(parsed[$field], $expected, concat!("JSON field mismatch: ", $field));
            )*
        }
    };
}

/// Generate a test that verifies Toon output contains expected strings.
#[macro_export]
macro_rules! output_toon_test {
    (
        test_name: $test_name:ident,
        fixture: $fixture:ident,
        fixture_type: $fixture_type:ty,
        contains: [$($needle:literal),* $(,)?] $(,)?
    ) => {
        #[rstest]
        fn $test_name($fixture: $fixture_type) {
            use crate::output::{Outputable, OutputFormat};
            let output = $fixture.format(OutputFormat::Toon);
            $(
                assert!(output.contains($needle), concat!("Toon output should contain: ", $needle));
            )*
        }
    };
}
