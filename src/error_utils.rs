//! Shared error utilities

use miette::NamedSource;
use std::path::Path;

/// Format a file path for report and error display.
///
/// Paths under `root` are shown relative to it, anything else as-is.
pub fn display_path(path: &Path, root: Option<&Path>) -> String {
    root.and_then(|root| path.strip_prefix(root).ok())
        .filter(|relative| !relative.as_os_str().is_empty())
        .unwrap_or(path)
        .display()
        .to_string()
}

/// Create a NamedSource with proper formatting for error display
pub fn create_named_source(path: &Path, content: String) -> NamedSource<String> {
    NamedSource::new(path.display().to_string(), content)
}
