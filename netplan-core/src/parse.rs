use crate::model::{OverrideValue, Overrides};

/// Split a comma-separated field into trimmed, non-empty tokens in input order.
pub fn parse_comma_separated(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse `key=value,key=value` override text.
///
/// Pairs without `=` or with an empty key are skipped. A repeated key keeps
/// its first position and takes the last value.
pub fn parse_key_value_pairs(raw: &str) -> Overrides {
    let mut overrides = Overrides::new();
    for pair in raw.split(',') {
        let Some((key, value)) = pair.trim().split_once('=') else {
            continue;
        };
        let key = key.trim();
        if key.is_empty() {
            continue;
        }
        overrides.set(key, OverrideValue::coerce(value.trim()));
    }
    overrides
}

/// `Some(trimmed)` for a non-blank single-value field.
pub(crate) fn non_empty(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
