use std::path::Path;
use tracing::{debug, info, warn};

use super::placeholders::{compare_placeholders, stray_percent_keys};
use super::sets::{compare_comments, compare_keys};
use crate::models::{AuditFailure, ResourceRecordSet};

/// Audit one translated file against the base file.
///
/// Runs the key, comment, placeholder and stray `%` checks in that order and
/// returns one failure per failing check. The base file's own stray `%` scan
/// is done once per locale group by the runner.
pub fn audit_pair(
    base: &ResourceRecordSet,
    other: &ResourceRecordSet,
    path: &Path,
) -> Vec<AuditFailure> {
    info!("Checking other file: {}", path.display());
    let mut failures = Vec::new();

    debug!("Checking for key consistency...");
    let keys = compare_keys(base, other);
    if !keys.is_equal() {
        if !keys.missing.is_empty() {
            warn!(
                "{}: keys only present in the base language file: {}",
                path.display(),
                keys.missing.join(", ")
            );
        }
        if !keys.extra.is_empty() {
            warn!(
                "{}: keys not present in the base language file: {}",
                path.display(),
                keys.extra.join(", ")
            );
        }
        failures.push(AuditFailure::KeyMismatch {
            missing: keys.missing,
            extra: keys.extra,
        });
    }

    debug!("Checking for comment consistency...");
    let comments = compare_comments(base, other);
    if !comments.is_equal() {
        for (key, comment) in &comments.missing {
            warn!("{}: '{key}' should be commented {comment:?}", path.display());
        }
        for (key, comment) in &comments.extra {
            warn!("{}: '{key}' is commented {comment:?}", path.display());
        }
        failures.push(AuditFailure::CommentMismatch {
            missing: comments.missing,
            extra: comments.extra,
        });
    }

    debug!("Checking for the presence of placeholders and newline escapes...");
    let diffs = compare_placeholders(base, other);
    if !diffs.is_empty() {
        for diff in &diffs {
            warn!("{}: {diff}", path.display());
        }
        failures.push(AuditFailure::PlaceholderMismatch { diffs });
    }

    debug!("Checking for single % characters...");
    let stray = stray_percent_keys(other);
    if !stray.is_empty() {
        for key in &stray {
            warn!("{}: '{key}' contains a single % character", path.display());
        }
        failures.push(AuditFailure::StrayPercent { keys: stray });
    }

    failures
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path() -> &'static Path {
        Path::new("Languages/en.lproj/Localizable.strings")
    }

    #[test]
    fn test_matching_files_pass() {
        let base = ResourceRecordSet::new()
            .with_commented_entry("greet", "こんにちは %@", "Greeting")
            .with_entry("rate", "100%%");
        let other = ResourceRecordSet::new()
            .with_commented_entry("greet", "Hello %@", "Greeting")
            .with_entry("rate", "100%%");

        assert!(audit_pair(&base, &other, path()).is_empty());
    }

    #[test]
    fn test_every_failing_check_reports_once_in_order() {
        let base = ResourceRecordSet::new()
            .with_commented_entry("a", "%s and %d", "First")
            .with_entry("b", "b");
        let other = ResourceRecordSet::new()
            .with_commented_entry("a", "50% only", "Changed");

        let failures = audit_pair(&base, &other, path());
        let messages: Vec<_> = failures.iter().map(ToString::to_string).collect();
        assert_eq!(
            messages,
            vec![
                "Keys are not matched",
                "Comments are not matched",
                "Placeholders are not matched",
                "Contains a single % character",
            ]
        );
    }

    #[test]
    fn test_key_mismatch_carries_missing_keys() {
        let base = ResourceRecordSet::new()
            .with_entry("a", "Hi %s")
            .with_entry("b", "ok");
        let other = ResourceRecordSet::new().with_entry("a", "Hi %s");

        let failures = audit_pair(&base, &other, path());
        assert_eq!(
            failures,
            vec![AuditFailure::KeyMismatch {
                missing: vec!["b".to_string()],
                extra: vec![],
            }]
        );
    }

    #[test]
    fn test_stray_percent_in_base_is_not_reported_per_pair() {
        let base = ResourceRecordSet::new().with_entry("a", "50%");
        let other = ResourceRecordSet::new().with_entry("a", "50%%");

        assert!(audit_pair(&base, &other, path()).is_empty());
    }
}
