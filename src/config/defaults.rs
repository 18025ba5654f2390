//! Reference values for the blog configuration.
//!
//! These make up `SiteConfig::default()` and are what the accessors return
//! when no other configuration was installed.

use std::num::NonZeroUsize;

// ============================================================================
// Pagination
// ============================================================================

/// Number of posts a list view shows per page.
pub const ITEMS_PER_PAGE: NonZeroUsize = NonZeroUsize::new(5).unwrap();

pub fn items_per_page() -> NonZeroUsize {
    ITEMS_PER_PAGE
}

// ============================================================================
// [siteMetadata] Section
// ============================================================================

pub mod site_metadata {
    use super::super::{SiteMetadata, Theme};

    pub fn all() -> SiteMetadata {
        SiteMetadata {
            title: "d4r5c2".into(),
            header_title: "d4r5c2".into(),
            description: "Our server room is oinking again...".into(),
            language: "en-us".into(),
            theme: Theme::System,
            site_url: "https://davidcox.net/".into(),
            site_repo: "https://github.com/david-r-cox/blog".into(),
            site_logo: "/static/images/logo.png".into(),
            social_banner: "/static/images/twitter-card.png".into(),
            locale: "en-US".into(),
            author: "David Robert Cox".into(),
            email: "david_cox@hey.com".into(),
            github: "https://github.com/david-r-cox".into(),
            twitter: "https://twitter.com/d4r5c2".into(),
            linkedin: "https://www.linkedin.com/in/davidcox143/".into(),
        }
    }
}

// ============================================================================
// [[navigation]] Section
// ============================================================================

pub mod navigation {
    use super::super::NavigationEntry;

    /// Menu entries in display order.
    const ENTRIES: [(&str, &str); 4] = [
        ("/", "Home"),
        ("/blog", "Blog"),
        ("/tags", "Tags"),
        ("/about", "About"),
    ];

    pub fn all() -> Vec<NavigationEntry> {
        ENTRIES
            .iter()
            .map(|(href, title)| NavigationEntry::new(*href, *title))
            .collect()
    }
}
