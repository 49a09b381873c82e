//! Output formatting tests for types command.

#[cfg(test)]
mod tests {
    use super::super::execute::{TypeEntry, TypesResult};
    use crate::types::LiteralFamily;
    use rstest::{fixture, rstest};

    const EMPTY_TEXT: &str = "No types found.";

    const TWO_TYPES_TEXT: &str = "\
2 type(s):
  bit       boolean
  nvarchar  quoted";

    #[fixture]
    fn empty_result() -> TypesResult {
        TypesResult::default()
    }

    #[fixture]
    fn two_types() -> TypesResult {
        TypesResult {
            types: vec![
                TypeEntry {
                    name: "bit".to_string(),
                    family: LiteralFamily::Boolean,
                },
                TypeEntry {
                    name: "nvarchar".to_string(),
                    family: LiteralFamily::Quoted,
                },
            ],
        }
    }

    crate::output_text_test! {
        test_name: test_to_text_empty,
        fixture: empty_result,
        fixture_type: TypesResult,
        expected: EMPTY_TEXT,
    }

    crate::output_text_test! {
        test_name: test_to_text_aligned,
        fixture: two_types,
        fixture_type: TypesResult,
        expected: TWO_TYPES_TEXT,
    }

    crate::output_json_test! {
        test_name: test_format_json,
        fixture: two_types,
        fixture_type: TypesResult,
        assertions: {
            "types": serde_json::json!([
                {"name": "bit", "family": "boolean"},
                {"name": "nvarchar", "family": "quoted"}
            ]),
        },
    }

    crate::output_toon_test! {
        test_name: test_format_toon,
        fixture: two_types,
        fixture_type: TypesResult,
        contains: ["types", "bit", "nvarchar"],
    }
}
