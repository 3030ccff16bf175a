//! Placeholder consistency and stray `%` checks over record sets

use crate::models::{PlaceholderDiff, ResourceRecordSet};
use crate::placeholders::{has_stray_percent, scan};

/// Find base keys whose placeholders are not all present in the other value.
///
/// A key absent from `other` is compared against an empty value. Missing
/// keys are reported by the key check, not here.
pub fn compare_placeholders(
    base: &ResourceRecordSet,
    other: &ResourceRecordSet,
) -> Vec<PlaceholderDiff> {
    base.key_values()
        .filter_map(|(key, value)| {
            let tokens = scan(value);
            if tokens.is_empty() {
                return None;
            }

            let other_value = other.value(key).unwrap_or_default();
            let missing: Vec<String> = tokens
                .into_iter()
                .filter(|token| !other_value.contains(token.as_str()))
                .collect();

            (!missing.is_empty()).then(|| PlaceholderDiff {
                key: key.to_string(),
                missing,
            })
        })
        .collect()
}

/// Keys whose value holds a `%` that cannot start a specifier, in file order
pub fn stray_percent_keys(records: &ResourceRecordSet) -> Vec<String> {
    records
        .key_values()
        .filter(|(_, value)| has_stray_percent(value))
        .map(|(key, _)| key.to_string())
        .collect()
}
