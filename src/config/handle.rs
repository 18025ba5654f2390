//! Process-wide site config.
//!
//! The config is installed at most once and never replaced. Reads are
//! lock-free after initialization and hand out `&'static` references, so
//! any number of threads can hold them.
//!
//! # Usage
//!
//! ```ignore
//! use crate::config::{cfg, init_config};
//!
//! init_config(SiteConfig::load(path)?)?;  // optional, before first read
//! let title = &cfg().site_metadata.title;
//! ```

use super::{ConfigError, SiteConfig};
use anyhow::{Result, bail};
use std::sync::OnceLock;

// =============================================================================
// Global State
// =============================================================================

/// Global config storage.
///
/// Filled either by `init_config` or, on first read, with the built-in
/// defaults.
static CONFIG: OnceLock<SiteConfig> = OnceLock::new();

// =============================================================================
// Public API
// =============================================================================

/// Get the current config.
///
/// Falls back to `SiteConfig::default()` if nothing was installed; after
/// that point `init_config` fails.
#[inline]
pub fn cfg() -> &'static SiteConfig {
    CONFIG.get_or_init(SiteConfig::default)
}

/// Install the process-wide config (called once at startup).
///
/// # Errors
///
/// `ConfigError::AlreadyInitialized` if a config was installed before, or
/// if `cfg()` was already read.
pub fn init_config(config: SiteConfig) -> Result<()> {
    if CONFIG.set(config).is_err() {
        bail!(ConfigError::AlreadyInitialized);
    }
    Ok(())
}
