//! Run configuration and discovery of locale groups on disk

mod config;
mod discovery;

pub use config::{AuditConfig, DEFAULT_GROUP_DIR_NAME, DEFAULT_RESOURCE_FILE_NAME};
pub use discovery::{Discovery, LocaleGroup, UnreadableDir, discover_groups};
