//! Quote escaping for T-SQL string literals.

/// Double every single quote in `s`.
pub fn double_quotes(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 2);
    for c in s.chars() {
        if c == '\'' {
            result.push('\'');
        }
        result.push(c);
    }
    result
}

/// Wrap `s` in single quotes, doubling any embedded quote.
#[inline]
pub fn quote(s: &str) -> String {
    format!("'{}'", double_quotes(s))
}

/// Wrap `s` in single quotes as-is.
#[inline]
pub fn quote_verbatim(s: &str) -> String {
    format!("'{s}'")
}
