//! Table-valued parameters: a declared table variable populated row by row.

use serde::{Deserialize, Serialize};

use super::escape::{quote, quote_verbatim};
use super::number::float_text;
use super::NULL_LITERAL;
use crate::types::{Cell, TableValue};

/// Cell timestamps are written at minute precision.
pub const CELL_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// How string cells of a table row are quoted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TabularStrings {
    /// Embedded quotes are doubled, as for scalar strings
    #[default]
    Escaped,
    /// Wrapped in quotes without escaping, matching older script output
    Verbatim,
}

/// Render `declare <name> <type>` followed by one `insert` per row.
///
/// Lines are newline-separated with no trailing newline.
pub fn tabular_block(name: &str, table: &TableValue, strings: TabularStrings) -> String {
    let mut lines = Vec::with_capacity(table.rows.len() + 1);
    lines.push(format!("declare {} {}", name, table.type_name));

    for row in &table.rows {
        let values: Vec<String> = row.iter().map(|cell| format_cell(cell, strings)).collect();
        lines.push(format!("insert {} values ({})", name, values.join(", ")));
    }

    lines.join("\n")
}

/// Row-local cell rule. Differs from the scalar rule: booleans are `0`/`1`,
/// timestamps drop their seconds, and numbers are never quoted.
/// Floats share the scalar exponent rule.
pub fn format_cell(cell: &Cell, strings: TabularStrings) -> String {
    match cell {
        Cell::Null => NULL_LITERAL.to_string(),
        Cell::Boolean(value) => i32::from(*value).to_string(),
        Cell::Text(text) => match strings {
            TabularStrings::Escaped => quote(text),
            TabularStrings::Verbatim => quote_verbatim(text),
        },
        Cell::Timestamp(at) => format!("'{}'", at.format(CELL_TIMESTAMP_FORMAT)),
        Cell::Integer(value) => value.to_string(),
        Cell::Decimal(value) => value.to_string(),
        Cell::Float(value) => float_text(*value),
        Cell::Other(text) => text.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Column, SqlType};
    use chrono::NaiveDate;
    use rstest::{fixture, rstest};

    #[fixture]
    fn two_row_table() -> TableValue {
        TableValue::new(
            "MyTableType",
            vec![
                Column::new("id", SqlType::Int),
                Column::new("name", SqlType::NVarChar),
            ],
        )
        .with_row(vec![Cell::Integer(1), Cell::Text("first".to_string())])
        .with_row(vec![Cell::Integer(2), Cell::Text("second".to_string())])
    }

    #[rstest]
    fn test_block_declares_then_inserts(two_row_table: TableValue) {
        let block = tabular_block("@p", &two_row_table, TabularStrings::Escaped);
        assert_eq!(
            block,
            "declare @p MyTableType\n\
             insert @p values (1, 'first')\n\
             insert @p values (2, 'second')"
        );
    }

    #[rstest]
    fn test_value_lists_have_no_trailing_separator(two_row_table: TableValue) {
        let block = tabular_block("@p", &two_row_table, TabularStrings::Escaped);
        for line in block.lines().skip(1) {
            assert!(line.ends_with("')"), "unexpected line: {line}");
            assert!(!line.contains(", )"));
        }
    }

    #[rstest]
    fn test_empty_table_declares_only() {
        let table = TableValue::new("EmptyType", vec![]);
        assert_eq!(
            tabular_block("@t", &table, TabularStrings::Escaped),
            "declare @t EmptyType"
        );
    }

    #[rstest]
    fn test_timestamp_cell_drops_seconds() {
        let at = NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_opt(7, 5, 59)
            .unwrap();
        assert_eq!(
            format_cell(&Cell::Timestamp(at), TabularStrings::Escaped),
            "'2024-03-09 07:05'"
        );
    }

    #[rstest]
    #[case(Cell::Boolean(true), "1")]
    #[case(Cell::Boolean(false), "0")]
    #[case(Cell::Null, "NULL")]
    #[case(Cell::Integer(-7), "-7")]
    #[case(Cell::Float(2.5), "2.5")]
    #[case(Cell::Float(1.5e40), "1.5e40")]
    #[case(Cell::Float(1e-30), "1e-30")]
    #[case(Cell::Decimal(rust_decimal::Decimal::new(1050, 2)), "10.50")]
    #[case(Cell::Other("0xFF".to_string()), "0xFF")]
    fn test_cell_rule(#[case] cell: Cell, #[case] expected: &str) {
        assert_eq!(format_cell(&cell, TabularStrings::Escaped), expected);
    }

    #[rstest]
    fn test_string_cell_escaping_modes() {
        let cell = Cell::Text("it's".to_string());
        assert_eq!(format_cell(&cell, TabularStrings::Escaped), "'it''s'");
        assert_eq!(format_cell(&cell, TabularStrings::Verbatim), "'it's'");
    }
}
