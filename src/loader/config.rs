use std::path::{Path, PathBuf};

/// Name of the directory that holds a group of `*.lproj` directories
pub const DEFAULT_GROUP_DIR_NAME: &str = "Languages";

/// Resource file looked up inside every `*.lproj` directory
pub const DEFAULT_RESOURCE_FILE_NAME: &str = "Localizable.strings";

/// Parameters of one audit run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditConfig {
    /// Project root that is searched for locale groups
    pub root: PathBuf,

    /// Language code of the reference locale, e.g. `ja`
    pub base_locale: String,

    pub group_dir_name: String,

    pub resource_file_name: String,
}

impl AuditConfig {
    pub fn new(root: impl Into<PathBuf>, base_locale: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            base_locale: base_locale.into(),
            group_dir_name: DEFAULT_GROUP_DIR_NAME.to_string(),
            resource_file_name: DEFAULT_RESOURCE_FILE_NAME.to_string(),
        }
    }

    pub fn with_group_dir_name(mut self, name: impl Into<String>) -> Self {
        self.group_dir_name = name.into();
        self
    }

    pub fn with_resource_file_name(mut self, name: impl Into<String>) -> Self {
        self.resource_file_name = name.into();
        self
    }

    /// Directory name of the base locale, e.g. `ja.lproj`
    pub fn base_lproj_name(&self) -> String {
        format!("{}.lproj", self.base_locale)
    }

    /// Expected base resource file inside a locale group
    pub fn base_file_in(&self, group_dir: &Path) -> PathBuf {
        group_dir
            .join(self.base_lproj_name())
            .join(&self.resource_file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AuditConfig::new("/project", "ja");
        assert_eq!(config.group_dir_name, "Languages");
        assert_eq!(config.resource_file_name, "Localizable.strings");
        assert_eq!(config.base_lproj_name(), "ja.lproj");
    }

    #[test]
    fn test_base_file_in_group() {
        let config =
            AuditConfig::new("/project", "en").with_resource_file_name("InfoPlist.strings");
        assert_eq!(
            config.base_file_in(Path::new("/project/App/Languages")),
            PathBuf::from("/project/App/Languages/en.lproj/InfoPlist.strings")
        );
    }
}
