//! `[siteMetadata]` section configuration.
//!
//! Descriptive fields about the site used by the renderer for display and
//! SEO. Every field is required; there are no serde defaults here.

use super::error::ConfigError;
use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Color scheme requested from the renderer.
///
/// Only `dark` is fully honored by the current front-end; `system` and
/// `light` are accepted but do not switch the palette yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    System,
    Light,
    Dark,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::System, Theme::Light, Theme::Dark];

    pub const fn as_str(self) -> &'static str {
        match self {
            Theme::System => "system",
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `[siteMetadata]` section in site.toml.
///
/// # Example
/// ```toml
/// [siteMetadata]
/// title = "d4r5c2"
/// headerTitle = "d4r5c2"
/// description = "Our server room is oinking again..."
/// language = "en-us"
/// theme = "system"
/// siteUrl = "https://davidcox.net/"
/// siteRepo = "https://github.com/david-r-cox/blog"
/// siteLogo = "/static/images/logo.png"
/// socialBanner = "/static/images/twitter-card.png"
/// locale = "en-US"
/// author = "David Robert Cox"
/// email = "david_cox@hey.com"
/// github = "https://github.com/david-r-cox"
/// twitter = "https://twitter.com/d4r5c2"
/// linkedin = "https://www.linkedin.com/in/davidcox143/"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SiteMetadata {
    /// Site title displayed in the browser tab.
    pub title: String,

    /// Title shown in the page header.
    pub header_title: String,

    /// Site description for SEO meta tags.
    pub description: String,

    /// Locale code of the content (e.g. "en-us").
    pub language: String,

    pub theme: Theme,

    /// Absolute URL of the deployed site.
    pub site_url: String,

    /// Source repository of the site.
    pub site_repo: String,

    /// Site-absolute path of the logo image.
    pub site_logo: String,

    /// Site-absolute path of the social card image.
    pub social_banner: String,

    /// BCP 47 locale used for date formatting (e.g. "en-US").
    pub locale: String,

    pub author: String,
    pub email: String,
    pub github: String,
    pub twitter: String,
    pub linkedin: String,
}

impl SiteMetadata {
    /// All fields as `(wire key, value)` pairs, in declaration order.
    pub fn fields(&self) -> [(&'static str, &str); 15] {
        [
            ("title", self.title.as_str()),
            ("headerTitle", self.header_title.as_str()),
            ("description", self.description.as_str()),
            ("language", self.language.as_str()),
            ("theme", self.theme.as_str()),
            ("siteUrl", self.site_url.as_str()),
            ("siteRepo", self.site_repo.as_str()),
            ("siteLogo", self.site_logo.as_str()),
            ("socialBanner", self.social_banner.as_str()),
            ("locale", self.locale.as_str()),
            ("author", self.author.as_str()),
            ("email", self.email.as_str()),
            ("github", self.github.as_str()),
            ("twitter", self.twitter.as_str()),
            ("linkedin", self.linkedin.as_str()),
        ]
    }

    /// Check field shapes. The first offending field is reported.
    pub fn validate(&self) -> Result<()> {
        for (key, value) in self.fields() {
            if value.trim().is_empty() {
                bail!(ConfigError::Validation(format!(
                    "[siteMetadata.{key}] must not be empty"
                )));
            }
        }

        let urls = [
            ("siteUrl", self.site_url.as_str()),
            ("siteRepo", self.site_repo.as_str()),
            ("github", self.github.as_str()),
            ("twitter", self.twitter.as_str()),
            ("linkedin", self.linkedin.as_str()),
        ];
        for (key, value) in urls {
            if !is_http_url(value) {
                bail!(ConfigError::Validation(format!(
                    "[siteMetadata.{key}] must start with http:// or https://"
                )));
            }
        }

        for (key, value) in [
            ("siteLogo", self.site_logo.as_str()),
            ("socialBanner", self.social_banner.as_str()),
        ] {
            if !value.starts_with('/') {
                bail!(ConfigError::Validation(format!(
                    "[siteMetadata.{key}] must be a site-absolute path starting with `/`"
                )));
            }
        }

        if !self.email.contains('@') {
            bail!(ConfigError::Validation(
                "[siteMetadata.email] is not an email address".into()
            ));
        }

        Ok(())
    }
}

#[inline]
pub(super) fn is_http_url(s: &str) -> bool {
    s.starts_with("http://") || s.starts_with("https://")
}
