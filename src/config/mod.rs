//! Site configuration for the blog front-end.
//!
//! # Sections
//!
//! | Key              | Purpose                                     |
//! |------------------|---------------------------------------------|
//! | `itemsPerPage`   | Posts shown per page in list views          |
//! | `[siteMetadata]` | Site metadata (title, author, urls, theme)  |
//! | `[[navigation]]` | Header menu entries, in display order       |
//!
//! # Example
//!
//! ```toml
//! itemsPerPage = 5
//!
//! [siteMetadata]
//! title = "d4r5c2"
//! headerTitle = "d4r5c2"
//! # ...
//!
//! [[navigation]]
//! href = "/"
//! title = "Home"
//!
//! [[navigation]]
//! href = "/blog"
//! title = "Blog"
//! ```
//!
//! Without a file, `SiteConfig::default()` carries the built-in values.

pub mod defaults;
mod error;
mod handle;
mod metadata;
mod navigation;

pub use error::ConfigError;
pub use handle::{cfg, init_config};
pub use metadata::{SiteMetadata, Theme};
pub use navigation::{NavigationEntry, duplicate_hrefs};

use crate::log;
use anyhow::Result;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{fs, num::NonZeroUsize, path::Path};

// ============================================================================
// Root Configuration
// ============================================================================

/// Root configuration structure representing site.toml
#[derive(Debug, Clone, PartialEq, Eq, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SiteConfig {
    /// Pagination page size for list views
    #[educe(Default = defaults::items_per_page())]
    pub items_per_page: NonZeroUsize,

    /// Basic site information
    #[educe(Default = defaults::site_metadata::all())]
    pub site_metadata: SiteMetadata,

    /// Header menu
    #[educe(Default = defaults::navigation::all())]
    pub navigation: Vec<NavigationEntry>,
}

impl SiteConfig {
    /// Parse configuration from TOML string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(content).map_err(ConfigError::from)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    /// Load and validate configuration from file path
    pub fn load(path: &Path) -> Result<Self> {
        let config = Self::from_path(path)?;
        config.validate()?;
        log!("config"; "loaded `{}`", path.display());
        Ok(config)
    }

    /// Validate every section; the first failure is returned.
    pub fn validate(&self) -> Result<()> {
        self.site_metadata.validate()?;
        navigation::validate(&self.navigation)?;
        Ok(())
    }

    /// Pretty TOML, in the same layout `from_str` accepts.
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Pretty JSON with the same camelCase keys.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn reference_toml() -> String {
        SiteConfig::default().to_toml().unwrap()
    }

    #[test]
    fn test_default_is_reference_instance() {
        let config = SiteConfig::default();

        assert_eq!(config.items_per_page.get(), 5);
        assert_eq!(config.site_metadata.title, "d4r5c2");
        assert_eq!(config.site_metadata.theme, Theme::System);
        assert_eq!(config.navigation.len(), 4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_toml_output_reparses() {
        let text = reference_toml();
        assert!(text.contains("itemsPerPage = 5"));
        assert!(text.contains("[siteMetadata]"));
        assert!(text.contains("[[navigation]]"));

        let parsed = SiteConfig::from_str(&text).unwrap();
        assert_eq!(parsed, SiteConfig::default());
    }

    #[test]
    fn test_json_uses_camel_case_keys() {
        let json = SiteConfig::default().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["itemsPerPage"], 5);
        assert_eq!(value["siteMetadata"]["headerTitle"], "d4r5c2");
        assert_eq!(value["siteMetadata"]["socialBanner"], "/static/images/twitter-card.png");
        assert_eq!(value["navigation"][3]["href"], "/about");
    }

    #[test]
    fn test_zero_items_per_page_rejected() {
        let text = reference_toml().replace("itemsPerPage = 5", "itemsPerPage = 0");
        let err = SiteConfig::from_str(&text).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::Toml(_))
        ));
    }

    #[test]
    fn test_missing_section_rejected() {
        let result = SiteConfig::from_str("itemsPerPage = 5\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_top_level_key_rejected() {
        let text = format!("extra = true\n{}", reference_toml());
        assert!(SiteConfig::from_str(&text).is_err());
    }

    #[test]
    fn test_from_path_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site.toml");

        let err = SiteConfig::from_path(&path).unwrap_err();
        match err.downcast_ref::<ConfigError>() {
            Some(ConfigError::Io(p, _)) => assert_eq!(p, &path),
            other => panic!("expected io error, got {other:?}"),
        }
    }

    #[test]
    fn test_load_validates() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let text = reference_toml().replace("david_cox@hey.com", "nobody");
        file.write_all(text.as_bytes()).unwrap();

        // parses fine, fails validation
        assert!(SiteConfig::from_path(file.path()).is_ok());
        let err = SiteConfig::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("[siteMetadata.email]"));
    }

    #[test]
    fn test_load_reference_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(reference_toml().as_bytes()).unwrap();

        let config = SiteConfig::load(file.path()).unwrap();
        assert_eq!(config, SiteConfig::default());
    }
}
