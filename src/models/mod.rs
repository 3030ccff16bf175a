pub mod record_set;
pub mod report;

// Re-export commonly used types
pub use record_set::ResourceRecordSet;
pub use report::{AuditFailure, AuditResult, FileError, PlaceholderDiff};
