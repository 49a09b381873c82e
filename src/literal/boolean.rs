//! Permissive truthiness parsing for bit parameters.

/// Resolve `raw` to a boolean, falling back to `default` when it can't be read.
///
/// Accepts `yes`/`true`/`ok`/`y` and `no`/`false`/`n` in any case, then falls
/// back to a strict `true`/`false` parse of the trimmed text. A missing value
/// or anything else yields `default`.
pub fn to_boolean_or_default(raw: Option<&str>, default: bool) -> bool {
    let Some(raw) = raw else {
        return default;
    };

    match raw.to_lowercase().as_str() {
        "yes" | "true" | "ok" | "y" => true,
        "no" | "false" | "n" => false,
        other => other.trim().parse::<bool>().unwrap_or(default),
    }
}
