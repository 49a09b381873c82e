//! Placeholder substitution for free-text commands.
//!
//! This is a token replace over the raw text, not a SQL parser: occurrences
//! inside string literals or comments are substituted like any other.

use tracing::trace;

use crate::literal::argument_literal;
use crate::types::Parameter;

/// Characters that may continue a T-SQL identifier or variable name.
pub fn is_identifier_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '_' | '@' | '#' | '$')
}

/// Replace every whole-token occurrence of each parameter name with its literal.
///
/// A match must not be preceded or followed by an identifier character, so
/// `@id` leaves `@identifier` and `@@id` alone. Table-valued parameters keep
/// their name, which refers to the variable declared ahead of the query.
/// The text is scanned once, so substituted literals are never rescanned.
pub fn substitute_parameters(text: &str, parameters: &[Parameter]) -> String {
    let mut replacements: Vec<(&str, String)> = parameters
        .iter()
        .filter(|p| !p.name.is_empty())
        .map(|p| (p.name.as_str(), argument_literal(p)))
        .collect();
    // Longest name first so `@id` never shadows `@id2`.
    replacements.sort_by(|a, b| b.0.len().cmp(&a.0.len()));

    let mut result = String::with_capacity(text.len());
    let mut rest = text;
    let mut previous: Option<char> = None;

    while let Some(c) = rest.chars().next() {
        if !previous.is_some_and(is_identifier_char) {
            let matched = replacements
                .iter()
                .find(|(name, _)| starts_with_token(rest, name));
            if let Some((name, literal)) = matched {
                trace!(parameter = name, literal = literal.as_str(), "substituted");
                result.push_str(literal);
                previous = name.chars().last();
                rest = &rest[name.len()..];
                continue;
            }
        }
        result.push(c);
        previous = Some(c);
        rest = &rest[c.len_utf8()..];
    }

    result
}

fn starts_with_token(text: &str, name: &str) -> bool {
    text.starts_with(name)
        && !text[name.len()..]
            .chars()
            .next()
            .is_some_and(is_identifier_char)
}
