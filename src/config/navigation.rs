//! `[[navigation]]` section configuration.
//!
//! The header menu. Entry order is display order.

use super::{error::ConfigError, metadata::is_http_url};
use crate::log;
use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A single menu item.
///
/// # Example
/// ```toml
/// [[navigation]]
/// href = "/blog"
/// title = "Blog"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NavigationEntry {
    /// Target path (`/blog`) or absolute URL.
    pub href: String,

    /// Display label.
    pub title: String,
}

impl NavigationEntry {
    pub fn new(href: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            title: title.into(),
        }
    }
}

/// Validate the menu: non-empty, every entry complete and linkable.
///
/// Repeated `href`s are allowed but logged, since two menu items pointing at
/// the same page is almost always a typo.
pub fn validate(entries: &[NavigationEntry]) -> Result<()> {
    if entries.is_empty() {
        bail!(ConfigError::Validation(
            "[navigation] must have at least one entry".into()
        ));
    }

    let mut seen = HashSet::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        if entry.title.trim().is_empty() {
            bail!(ConfigError::Validation(format!(
                "[navigation.{index}.title] must not be empty"
            )));
        }
        if entry.href.trim().is_empty() {
            bail!(ConfigError::Validation(format!(
                "[navigation.{index}.href] must not be empty"
            )));
        }
        if !entry.href.starts_with('/') && !is_http_url(&entry.href) {
            bail!(ConfigError::Validation(format!(
                "[navigation.{index}.href] must start with `/`, http:// or https://"
            )));
        }
        if !seen.insert(entry.href.as_str()) {
            log!("warn"; "navigation entry `{}` repeats href `{}`", entry.title, entry.href);
        }
    }

    Ok(())
}

/// Hrefs that appear more than once, in order of first repetition.
pub fn duplicate_hrefs(entries: &[NavigationEntry]) -> Vec<&str> {
    let mut seen = HashSet::with_capacity(entries.len());
    let mut dups = Vec::new();
    for entry in entries {
        let href = entry.href.as_str();
        if !seen.insert(href) && !dups.contains(&href) {
            dups.push(href);
        }
    }
    dups
}
