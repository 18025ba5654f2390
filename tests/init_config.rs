use blog_config::{
    ConfigError, NavigationEntry, SiteConfig, Theme, init_config, items_per_page, navigation,
    site_metadata,
};
use std::num::NonZeroUsize;

// Single test: the config cell is process-wide and this binary owns it.
#[test]
fn test_installed_config_is_served_and_frozen() {
    let mut config = SiteConfig::default();
    config.items_per_page = NonZeroUsize::new(10).unwrap();
    config.site_metadata.theme = Theme::Dark;
    config.navigation.push(NavigationEntry::new("/projects", "Projects"));
    config.validate().unwrap();

    init_config(config.clone()).unwrap();

    assert_eq!(items_per_page(), 10);
    assert_eq!(site_metadata().theme, Theme::Dark);
    assert_eq!(navigation().len(), 5);
    assert_eq!(navigation()[4].title, "Projects");

    let err = init_config(SiteConfig::default()).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ConfigError>(),
        Some(ConfigError::AlreadyInitialized)
    ));
    assert_eq!(items_per_page(), 10);
    assert_eq!(navigation(), config.navigation.as_slice());
}
