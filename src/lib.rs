//! Site metadata, pagination size and navigation menu for a personal blog.
//!
//! The three values are built once per process and never change. Readers
//! get `'static` references and need no locking.
//!
//! ```
//! let meta = blog_config::site_metadata();
//! assert_eq!(meta.title, "d4r5c2");
//! assert_eq!(blog_config::items_per_page(), 5);
//! assert_eq!(blog_config::navigation()[1].href, "/blog");
//! ```

pub mod config;
pub mod logger;

pub use config::{
    ConfigError, NavigationEntry, SiteConfig, SiteMetadata, Theme, cfg,
    defaults::ITEMS_PER_PAGE, init_config,
};

/// The site metadata record.
#[inline]
pub fn site_metadata() -> &'static SiteMetadata {
    &cfg().site_metadata
}

/// Number of posts a list view shows per page. Always positive.
#[inline]
pub fn items_per_page() -> usize {
    cfg().items_per_page.get()
}

/// Menu entries in display order.
#[inline]
pub fn navigation() -> &'static [NavigationEntry] {
    &cfg().navigation
}
