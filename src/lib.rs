//! Consistency checks for localized `.strings` files.
//!
//! Every `*.lproj/Localizable.strings` in a locale group is compared with the
//! base locale's file: same keys, same comments, the same format
//! placeholders, and no stray `%` characters.

pub mod error_utils;
pub mod loader;
pub mod models;
pub mod parser;
pub mod placeholders;
pub mod validation;

pub use loader::AuditConfig;
pub use models::{AuditFailure, AuditResult, FileError, ResourceRecordSet};
pub use validation::Runner;
