use anyhow::Result;
use std::path::Path;
use tracing::{info, warn};

use super::pair::audit_pair;
use super::placeholders::stray_percent_keys;
use super::reporter::Reporter;
use crate::loader::{AuditConfig, LocaleGroup, discover_groups};
use crate::models::{AuditFailure, AuditResult};
use crate::parser::{ParseError, parse_file};

/// Audits every locale group under a project root
pub struct Runner {
    config: AuditConfig,
}

impl Runner {
    pub fn new(config: AuditConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AuditConfig {
        &self.config
    }

    /// Audit all groups. Only an unusable project root is an error; every
    /// file-level problem ends up in the returned result.
    pub fn run(&self) -> Result<AuditResult> {
        let discovery = discover_groups(&self.config)?;
        info!("Target lang directories count: {}", discovery.groups.len());

        let mut reporter = Reporter::new();
        for dir in &discovery.unreadable {
            reporter.record(
                &dir.path,
                AuditFailure::UnreadableDirectory {
                    reason: dir.reason.clone(),
                },
            );
        }
        for group in &discovery.groups {
            self.audit_group(group, &mut reporter);
        }

        Ok(reporter.finalize())
    }

    /// Audit one group. Failures stay inside the group.
    pub fn audit_group(&self, group: &LocaleGroup, reporter: &mut Reporter) {
        info!("Language directory: {}", group.dir.display());

        if !group.base_file.is_file() {
            warn!(
                "Base language file not found in {}",
                group.base_file.display()
            );
            reporter.record(&group.base_file, AuditFailure::BaseFileMissing);
            return;
        }

        let base = match parse_file(&group.base_file) {
            Ok(base) => base,
            Err(err) => {
                record_parse_failure(reporter, &group.base_file, err);
                return;
            }
        };

        info!("Checking base file: {}", group.base_file.display());
        let stray = stray_percent_keys(&base);
        if !stray.is_empty() {
            for key in &stray {
                warn!(
                    "{}: '{key}' contains a single % character",
                    group.base_file.display()
                );
            }
            reporter.record(
                &group.base_file,
                AuditFailure::BaseStrayPercent { keys: stray },
            );
        }

        for sibling in &group.sibling_files {
            match parse_file(sibling) {
                Ok(other) => {
                    info!("Loading {}, keys count: {}", sibling.display(), other.len());
                    reporter.record_all(sibling, audit_pair(&base, &other, sibling));
                }
                Err(err) => record_parse_failure(reporter, sibling, err),
            }
        }
    }
}

fn record_parse_failure(reporter: &mut Reporter, path: &Path, err: ParseError) {
    let reason = err.to_string();
    warn!("{:?}", miette::Report::new(err));
    reporter.record(path, AuditFailure::ParseFailure { reason });
}
