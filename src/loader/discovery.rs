//! Locale group discovery

use anyhow::Result;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

use super::config::AuditConfig;

/// One directory of `*.lproj` siblings that share a set of keys
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleGroup {
    pub dir: PathBuf,

    /// Expected base resource file (may not exist)
    pub base_file: PathBuf,

    /// Resource files of every other locale, sorted by locale directory
    pub sibling_files: Vec<PathBuf>,
}

/// A directory the walk could not list. Groups below it were not audited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnreadableDir {
    pub path: PathBuf,
    pub reason: String,
}

/// Everything found under the project root
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Discovery {
    pub groups: Vec<LocaleGroup>,
    pub unreadable: Vec<UnreadableDir>,
}

/// Find every locale group under the configured root, in a stable order.
///
/// Only a missing root is an error. Directories that cannot be listed are
/// collected in [`Discovery::unreadable`] and the walk carries on.
pub fn discover_groups(config: &AuditConfig) -> Result<Discovery> {
    if !config.root.is_dir() {
        anyhow::bail!("Project root not found: {}", config.root.display());
    }

    let mut discovery = Discovery::default();
    let mut seen_unreadable = HashSet::new();
    for entry in WalkDir::new(&config.root)
        .follow_links(false)
        .sort_by_file_name()
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                let path = err.path().unwrap_or(&config.root).to_path_buf();
                // a group dir that failed to load is reported again when the walk descends
                if seen_unreadable.insert(path.clone()) {
                    warn!("Cannot read {}: {err}", path.display());
                    discovery.unreadable.push(UnreadableDir {
                        path,
                        reason: walk_error_reason(&err),
                    });
                }
                continue;
            }
        };

        if entry.file_type().is_dir() && entry.file_name() == config.group_dir_name.as_str() {
            match load_group(config, entry.path()) {
                Ok(group) => discovery.groups.push(group),
                Err(err) => {
                    warn!("Cannot read locale directory {}: {err}", entry.path().display());
                    seen_unreadable.insert(entry.path().to_path_buf());
                    discovery.unreadable.push(UnreadableDir {
                        path: entry.path().to_path_buf(),
                        reason: err.to_string(),
                    });
                }
            }
        }
    }

    Ok(discovery)
}

fn walk_error_reason(err: &walkdir::Error) -> String {
    match err.io_error() {
        Some(io) => io.to_string(),
        None => err.to_string(),
    }
}

fn load_group(config: &AuditConfig, dir: &Path) -> std::io::Result<LocaleGroup> {
    let base_name = config.base_lproj_name();

    let mut sibling_dirs = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };

        if path.is_dir() && name.ends_with(".lproj") && name != base_name {
            sibling_dirs.push(path);
        }
    }
    sibling_dirs.sort();

    let mut sibling_files = Vec::new();
    for sibling in sibling_dirs {
        let file = sibling.join(&config.resource_file_name);
        if file.is_file() {
            sibling_files.push(file);
        } else {
            debug!(
                "Skipping {}: no {}",
                sibling.display(),
                config.resource_file_name
            );
        }
    }

    Ok(LocaleGroup {
        dir: dir.to_path_buf(),
        base_file: config.base_file_in(dir),
        sibling_files,
    })
}
