//! Key and comment set equivalence

use std::collections::BTreeSet;

use crate::models::ResourceRecordSet;

/// Asymmetric differences between a base set and another set.
///
/// Both lists are sorted. The sets are equal when both are empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetComparison<T> {
    /// In the base set only
    pub missing: Vec<T>,
    /// In the other set only
    pub extra: Vec<T>,
}

impl<T> SetComparison<T> {
    pub fn is_equal(&self) -> bool {
        self.missing.is_empty() && self.extra.is_empty()
    }
}

pub fn compare_sets<T: Ord + Clone>(
    base: &BTreeSet<T>,
    other: &BTreeSet<T>,
) -> SetComparison<T> {
    SetComparison {
        missing: base.difference(other).cloned().collect(),
        extra: other.difference(base).cloned().collect(),
    }
}

/// Compare the key sets of two record sets
pub fn compare_keys(base: &ResourceRecordSet, other: &ResourceRecordSet) -> SetComparison<String> {
    let comparison = compare_sets(&base.keys(), &other.keys());
    SetComparison {
        missing: comparison.missing.into_iter().map(str::to_string).collect(),
        extra: comparison.extra.into_iter().map(str::to_string).collect(),
    }
}

/// Compare `(key, comment)` pairs of two record sets.
///
/// A key whose comment is empty or absent on either side takes no part in
/// the comparison.
pub fn compare_comments(
    base: &ResourceRecordSet,
    other: &ResourceRecordSet,
) -> SetComparison<(String, String)> {
    let commented = |records: &ResourceRecordSet, counterpart: &ResourceRecordSet| {
        records
            .comments()
            .iter()
            .filter(|(key, comment)| {
                !comment.is_empty() && counterpart.comment(key).is_some_and(|c| !c.is_empty())
            })
            .map(|(key, comment)| (key.clone(), comment.clone()))
            .collect::<BTreeSet<_>>()
    };

    compare_sets(&commented(base, other), &commented(other, base))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(keys: &[&str]) -> ResourceRecordSet {
        keys.iter()
            .fold(ResourceRecordSet::new(), |records, key| records.with_entry(*key, "v"))
    }

    #[test]
    fn test_identical_keys_in_any_order_are_equal() {
        let base = records(&["a", "b", "c"]);
        let other = records(&["c", "a", "b"]);
        assert!(compare_keys(&base, &other).is_equal());
    }

    #[test]
    fn test_missing_keys_are_sorted() {
        let base = records(&["zeta", "a", "mid"]);
        let other = records(&["a"]);

        let comparison = compare_keys(&base, &other);
        assert!(!comparison.is_equal());
        assert_eq!(comparison.missing, vec!["mid", "zeta"]);
        assert!(comparison.extra.is_empty());
    }

    #[test]
    fn test_extra_keys_break_equality() {
        let base = records(&["a"]);
        let other = records(&["a", "b"]);

        let comparison = compare_keys(&base, &other);
        assert!(!comparison.is_equal());
        assert!(comparison.missing.is_empty());
        assert_eq!(comparison.extra, vec!["b"]);
    }

    #[test]
    fn test_keys_compare_case_sensitively() {
        let comparison = compare_keys(&records(&["Title"]), &records(&["title"]));
        assert_eq!(comparison.missing, vec!["Title"]);
        assert_eq!(comparison.extra, vec!["title"]);
    }

    #[test]
    fn test_comments_skip_keys_empty_on_either_side() {
        let base = ResourceRecordSet::new()
            .with_commented_entry("k1", "v", "")
            .with_commented_entry("k2", "v", "note");
        let other = ResourceRecordSet::new()
            .with_commented_entry("k1", "v", "x")
            .with_commented_entry("k2", "v", "note");

        assert!(compare_comments(&base, &other).is_equal());
    }

    #[test]
    fn test_comment_removed_in_translation_is_ignored() {
        let base = ResourceRecordSet::new().with_commented_entry("k", "v", "note");
        let other = ResourceRecordSet::new().with_entry("k", "v");

        assert!(compare_comments(&base, &other).is_equal());
    }

    #[test]
    fn test_changed_comment_reported_both_ways() {
        let base = ResourceRecordSet::new()
            .with_commented_entry("title", "v", "Screen title")
            .with_commented_entry("ok", "v", "Button");
        let other = ResourceRecordSet::new()
            .with_commented_entry("title", "v", "Window title")
            .with_commented_entry("ok", "v", "Button");

        let comparison = compare_comments(&base, &other);
        assert!(!comparison.is_equal());
        assert_eq!(
            comparison.missing,
            vec![("title".to_string(), "Screen title".to_string())]
        );
        assert_eq!(
            comparison.extra,
            vec![("title".to_string(), "Window title".to_string())]
        );
    }
}
