//! Settings file loading

use std::fs;
use std::path::Path;

use anyhow::Context;
use anyhow::Result;
use movedesk_lib::cache::CacheConfig;
use movedesk_lib::table::TableConfig;
use serde::Deserialize;

/// Contents of the optional TOML settings file.
///
/// ```toml
/// [table]
/// default_page_size = 20
/// skeleton_rows = 5
///
/// [cache]
/// contact_ttl = 300
/// max_entries = 1024
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub table: TableConfig,
    pub cache: CacheConfig,
}

impl Settings {
    /// Loads settings from `path`, or defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file {}", path.display()))?;
        let settings = Self::parse(&text)
            .with_context(|| format!("Invalid settings file {}", path.display()))?;
        log::debug!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use movedesk_lib::table::PageSize;

    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        assert_eq!(Settings::parse("").unwrap(), Settings::default());
    }

    #[test]
    fn test_partial_sections() {
        let settings = Settings::parse(
            r#"
            [table]
            default_page_size = 20

            [cache]
            contact_ttl = 60
            "#,
        )
        .unwrap();
        assert_eq!(
            settings.table.default_page_size,
            PageSize::try_from(20).unwrap()
        );
        assert_eq!(settings.table.skeleton_rows, 5);
        assert_eq!(settings.cache.contact_ttl, Duration::from_secs(60));
        assert_eq!(settings.cache.max_entries, 1024);
    }

    #[test]
    fn test_rejects_unlisted_page_size() {
        assert!(Settings::parse("[table]\ndefault_page_size = 7\n").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("movedesk.toml");
        fs::write(&path, "[table]\nskeleton_rows = 3\n").unwrap();
        let settings = Settings::load(Some(&path)).unwrap();
        assert_eq!(settings.table.skeleton_rows, 3);
        assert!(Settings::load(Some(&dir.path().join("missing.toml"))).is_err());
    }
}
