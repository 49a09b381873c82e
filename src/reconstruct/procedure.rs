//! Stored-procedure call scripts.

use tracing::trace;

use crate::literal::{argument_literal, format_literal, TabularStrings};
use crate::types::{CommandSnapshot, Direction, Parameter};

pub const RETURN_VALUE_DECLARATION: &str = "declare @return_value int;";
pub const RETURN_VALUE_SELECT: &str = "select 'Return Value' = convert(varchar, @return_value);";

/// Lines of a call script: output declarations, the `exec` with its argument
/// list, then one select per returned value.
pub fn procedure_lines(command: &CommandSnapshot, strings: TabularStrings) -> Vec<String> {
    let mut lines = vec![RETURN_VALUE_DECLARATION.to_string()];

    for parameter in command.output_parameters() {
        lines.push(output_declaration(parameter, strings));
    }

    lines.push(format!("exec [{}]", command.text));

    let arguments = command
        .parameters
        .iter()
        .filter(|p| p.direction != Direction::ReturnValue);
    for (index, parameter) in arguments.enumerate() {
        let lead = if index == 0 { "\t" } else { "\t, " };
        lines.push(format!("{lead}{}", argument(parameter)));
    }
    lines.push(";".to_string());

    lines.push(RETURN_VALUE_SELECT.to_string());
    for parameter in command.output_parameters() {
        lines.push(format!(
            "select '{0}' = convert(varchar, {0});",
            parameter.name
        ));
    }

    lines
}

/// `declare <name> <type> = <initial>;`; pure outputs start as `null`.
fn output_declaration(parameter: &Parameter, strings: TabularStrings) -> String {
    let initial = match parameter.direction {
        Direction::Output => "null".to_string(),
        _ => format_literal(parameter, strings),
    };
    trace!(parameter = parameter.name.as_str(), "declared output");
    format!(
        "declare {} {} = {};",
        parameter.name,
        parameter.declared_type(),
        initial
    )
}

fn argument(parameter: &Parameter) -> String {
    match parameter.direction {
        Direction::Input => format!("{} = {}", parameter.name, argument_literal(parameter)),
        _ => format!("{0} = {0} output", parameter.name),
    }
}
