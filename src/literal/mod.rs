//! Conversion of bound parameter values into T-SQL literals.
//!
//! Every function here is total: a value whose type has no dedicated rule is
//! rendered through its plain text form instead of failing.
//!
//! Rules, first match wins:
//! - null values render as `NULL`
//! - text, date and time values are single-quoted with embedded quotes doubled
//! - bit values render as `1`/`0` after permissive truthiness parsing
//! - decimal and float values render in invariant form (`.` separator, no grouping);
//!   very large or very small floats use exponent form
//! - table values render as a `declare` plus one `insert` per row
//! - everything else renders as plain text with quotes doubled

mod boolean;
mod escape;
mod number;
mod tabular;

pub use boolean::to_boolean_or_default;
pub use escape::{double_quotes, quote};
pub use number::float_text;
pub use tabular::{format_cell, tabular_block, TabularStrings, CELL_TIMESTAMP_FORMAT};

use crate::types::{Parameter, TypedValue};

pub const NULL_LITERAL: &str = "NULL";

/// Format a parameter's value, including the full block for table values.
pub fn format_literal(parameter: &Parameter, strings: TabularStrings) -> String {
    match &parameter.value {
        TypedValue::Table(table) => tabular_block(&parameter.name, table, strings),
        value => format_value(value),
    }
}

/// Format a parameter where it appears as an argument or substitution.
///
/// Table values are referenced through the variable their block declared.
pub fn argument_literal(parameter: &Parameter) -> String {
    if parameter.is_tabular() {
        parameter.name.clone()
    } else {
        format_value(&parameter.value)
    }
}

/// Format a scalar value.
///
/// Table values have no scalar form and render as `NULL`; use
/// [`format_literal`] to get their declare/insert block.
pub fn format_value(value: &TypedValue) -> String {
    match value {
        TypedValue::Null => NULL_LITERAL.to_string(),
        TypedValue::Text(text) => quote(text),
        TypedValue::Boolean(raw) => {
            if to_boolean_or_default(Some(raw), false) {
                "1".to_string()
            } else {
                "0".to_string()
            }
        }
        TypedValue::Decimal(value) => double_quotes(&value.to_string()),
        TypedValue::Float(value) => double_quotes(&float_text(*value)),
        TypedValue::Integer(value) => double_quotes(&value.to_string()),
        TypedValue::Binary(bytes) => double_quotes(&format!("0x{}", hex::encode(bytes))),
        TypedValue::Unrecognized(text) => double_quotes(text),
        TypedValue::Table(_) => NULL_LITERAL.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Cell, Column, SqlType, TableValue};
    use rstest::rstest;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    crate::literal_test! {
        test_name: test_null,
        value: TypedValue::Null,
        expected: "NULL",
    }

    crate::literal_test! {
        test_name: test_text,
        value: TypedValue::text("myname"),
        expected: "'myname'",
    }

    crate::literal_test! {
        test_name: test_text_with_quotes,
        value: TypedValue::text("O'Brien"),
        expected: "'O''Brien'",
    }

    crate::literal_test! {
        test_name: test_date_text_is_not_reformatted,
        value: TypedValue::text("3/9/2024 7:05:59 AM"),
        expected: "'3/9/2024 7:05:59 AM'",
    }

    crate::literal_test! {
        test_name: test_integer,
        value: TypedValue::Integer(1),
        expected: "1",
    }

    crate::literal_test! {
        test_name: test_float_uses_point_separator,
        value: TypedValue::Float(1234.5),
        expected: "1234.5",
    }

    crate::literal_test! {
        test_name: test_float_has_no_grouping,
        value: TypedValue::Float(1234567.25),
        expected: "1234567.25",
    }

    crate::literal_test! {
        test_name: test_large_float_uses_exponent,
        value: TypedValue::Float(1.5e40),
        expected: "1.5e40",
    }

    crate::literal_test! {
        test_name: test_small_float_uses_exponent,
        value: TypedValue::Float(1e-30),
        expected: "1e-30",
    }

    crate::literal_test! {
        test_name: test_binary_as_hex,
        value: TypedValue::Binary(vec![0xde, 0xad, 0x01]),
        expected: "0xdead01",
    }

    crate::literal_test! {
        test_name: test_unrecognized_doubles_quotes,
        value: TypedValue::Unrecognized("POINT('1')".to_string()),
        expected: "POINT(''1'')",
    }

    crate::literal_test! {
        test_name: test_table_has_no_scalar_form,
        value: TypedValue::Table(TableValue::new("T", vec![])),
        expected: "NULL",
    }

    #[rstest]
    fn test_decimal_keeps_scale() {
        let value = TypedValue::Decimal(Decimal::from_str("19.990").unwrap());
        assert_eq!(format_value(&value), "19.990");
    }

    #[rstest]
    #[case("true", "1")]
    #[case("yes", "1")]
    #[case("N", "0")]
    #[case("not a bool", "0")]
    fn test_boolean(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(format_value(&TypedValue::Boolean(raw.to_string())), expected);
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(3)]
    fn test_quote_count_doubles(#[case] quotes: usize) {
        let text = format!("a{}b", "'".repeat(quotes));
        let literal = format_value(&TypedValue::Text(text));
        let inner = &literal[1..literal.len() - 1];
        assert_eq!(inner.matches('\'').count(), 2 * quotes);
    }

    #[rstest]
    fn test_format_literal_expands_tables() {
        let table = TableValue::new("MyTableType", vec![Column::new("id", SqlType::Int)])
            .with_row(vec![Cell::Integer(7)]);
        let parameter = Parameter::table("@p", table);
        assert_eq!(
            format_literal(&parameter, TabularStrings::Escaped),
            "declare @p MyTableType\ninsert @p values (7)"
        );
        assert_eq!(argument_literal(&parameter), "@p");
    }

    #[rstest]
    fn test_argument_literal_scalar() {
        let parameter = Parameter::new("@id", SqlType::Int, TypedValue::Integer(5));
        assert_eq!(argument_literal(&parameter), "5");
        assert_eq!(format_literal(&parameter, TabularStrings::Escaped), "5");
    }
}
