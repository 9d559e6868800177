//! Config-driven registries end to end: file → registry → dispatch.

use std::io::Write;
use std::sync::Arc;

use deeplink_router::config::watcher::ConfigWatcher;
use deeplink_router::config::{load_config, parse_config};
use deeplink_router::navigation::dispatch_first;
use deeplink_router::routing::RouteRegistry;
use deeplink_router::Source;

mod common;
use common::MockRouter;

const ROUTES: &str = r#"
site_origin = "https://wordpress.com"

[[routes]]
path = "/stats/:domain"
section = "stats"
track = true
action = { type = "navigate", target = "/stats/day/:domain" }

[[routes]]
path = "/me/:account"
section = "me"

[[routes]]
path = "/get/"
action = { type = "app_banner" }
"#;

#[test]
fn test_navigate_route_dispatches_filled_target() {
    let registry = RouteRegistry::from_config(&parse_config(ROUTES).unwrap()).unwrap();
    let router = MockRouter::default();

    let matches = registry.routes_matching("https://wordpress.com/stats/example.com?source=widget");
    assert_eq!(matches.len(), 1);
    assert!(matches[0].route.should_track);
    assert_eq!(matches[0].source, Source::Widget);
    assert!(dispatch_first(&matches, &router));

    let handled = router.take();
    assert_eq!(handled[0].0.as_str(), "https://wordpress.com/stats/day/example.com");
    assert_eq!(handled[0].1, Source::Widget);
}

#[test]
fn test_passthrough_route_opens_original_url() {
    let registry = RouteRegistry::from_config(&parse_config(ROUTES).unwrap()).unwrap();
    let router = MockRouter::default();

    let matches = registry.routes_matching("https://wordpress.com/me/bobsmith");
    assert_eq!(matches[0].values.get("account"), Some("bobsmith"));
    assert!(dispatch_first(&matches, &router));
    assert_eq!(router.take()[0].0.as_str(), "https://wordpress.com/me/bobsmith");
}

#[test]
fn test_banner_route_from_config() {
    let registry = RouteRegistry::from_config(&parse_config(ROUTES).unwrap()).unwrap();
    let router = MockRouter::default();

    let matches = registry
        .routes_matching("https://apps.wordpress.com/get/?campaign=qr-code-media#%2Fmedia%2F1234567");
    assert!(dispatch_first(&matches, &router));

    let handled = router.take();
    assert_eq!(
        handled[0].0.as_str(),
        "https://wordpress.com/media/1234567?campaign=qr-code-media"
    );
    assert_eq!(
        handled[0].1,
        Source::Banner {
            campaign: Some("qr-code-media".into())
        }
    );
}

#[test]
fn test_unmatched_url_dispatches_nothing() {
    let registry = RouteRegistry::from_config(&parse_config(ROUTES).unwrap()).unwrap();
    let router = MockRouter::default();

    let matches = registry.routes_matching("https://wordpress.com/plans");
    assert!(!dispatch_first(&matches, &router));
    assert!(router.take().is_empty());
}

#[test]
fn test_file_reload_replaces_registry() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{ROUTES}").unwrap();

    let config = load_config(file.path()).unwrap();
    let registry = Arc::new(RouteRegistry::from_config(&config).unwrap());
    assert!(registry.routes_matching("/plans").is_empty());

    std::fs::write(file.path(), "[[routes]]\npath = \"/plans\"\n").unwrap();
    let watcher = ConfigWatcher::new(file.path(), Arc::clone(&registry));
    assert!(watcher.reload());

    assert_eq!(registry.routes_matching("/plans").len(), 1);
    assert!(registry.routes_matching("/me/bobsmith").is_empty());
}

#[test]
fn test_example_config_loads() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("routes.example.toml");
    let registry = RouteRegistry::from_config(&load_config(&path).unwrap()).unwrap();

    let matches = registry.routes_matching("https://wordpress.com/stats/subscribers/day/testsite.com");
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].section().map(|s| s.as_str()), Some("stats"));
    assert_eq!(matches[0].source, Source::Link);

    let banner = registry.routes_matching("https://apps.wordpress.com/get/#%2Fplans");
    assert_eq!(banner.len(), 1);
    assert!(banner[0].route.jetpack_powered);
}
