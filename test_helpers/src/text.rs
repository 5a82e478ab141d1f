//! Parsing helpers for literals and lists written in feature files.

use release_config::serde_json::Value;

/// Trims `value` and removes one pair of matching outer quotes.
///
/// Both `"..."` and `'...'` are recognised; unbalanced quotes are kept.
#[must_use]
pub fn unquote(value: &str) -> &str {
    let trimmed = value.trim();
    ['"', '\'']
        .into_iter()
        .find_map(|quote| trimmed.strip_prefix(quote)?.strip_suffix(quote))
        .unwrap_or(trimmed)
}

/// Parses a scenario literal into a structured value.
///
/// `none`, `true`, `false` and integers map to their kinds; anything else is
/// a string with one layer of quotes removed, so `""` is the empty string.
#[must_use]
pub fn parse_literal(raw: &str) -> Value {
    let trimmed = raw.trim();
    match trimmed {
        "none" => Value::Null,
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        _ => trimmed.parse::<i64>().map_or_else(
            |_| Value::String(unquote(trimmed).to_owned()),
            Value::from,
        ),
    }
}

/// Splits a comma-separated scenario list, trimming each entry.
#[must_use]
pub fn split_list(raw: &str) -> Vec<String> {
    unquote(raw)
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_owned)
        .collect()
}
