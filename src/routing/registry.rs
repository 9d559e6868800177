//! Route registry and hot swap.
//!
//! # Responsibilities
//! - Build routes and their actions from configuration
//! - Hold the live matcher behind an atomic pointer
//! - Replace the whole matcher on reload
//!
//! # Design Decisions
//! - A matcher is immutable once built; reload means a new matcher
//! - Lookups load a snapshot and never block a reload
//! - A failed rebuild leaves the current matcher in place

use std::sync::Arc;

use arc_swap::ArcSwap;
use url::Url;

use crate::config::loader::ConfigError;
use crate::config::schema::{ActionConfig, RouteConfig, RouterConfig};
use crate::navigation::{AppBannerAction, NavigateAction, NavigationAction, PassthroughAction};
use crate::routing::matched::MatchedRoute;
use crate::routing::matcher::RouteMatcher;
use crate::routing::route::{Route, Section};
use crate::routing::source::Source;

/// Builds the routes a configuration describes, in file order.
pub fn build_routes(config: &RouterConfig) -> Result<Vec<Route>, ConfigError> {
    let origin = Url::parse(&config.site_origin)?;
    config
        .routes
        .iter()
        .map(|route| build_route(route, &origin))
        .collect()
}

fn build_route(config: &RouteConfig, origin: &Url) -> Result<Route, ConfigError> {
    let action: Arc<dyn NavigationAction> = match &config.action {
        ActionConfig::Passthrough => Arc::new(PassthroughAction),
        ActionConfig::Navigate { target } => {
            Arc::new(NavigateAction::new(target.clone(), origin.clone()))
        }
        ActionConfig::AppBanner => Arc::new(AppBannerAction::new(origin.clone())),
    };

    // Unknown tokens are rejected by validation; unvalidated configs fall back.
    let default_source = config.default_source.parse::<Source>().unwrap_or_default();

    let mut route = Route::new(&config.path, action)?
        .with_default_source(default_source)
        .tracked(config.track)
        .jetpack_powered(config.jetpack_powered);
    if let Some(section) = &config.section {
        route = route.with_section(Section::new(section.clone()));
    }
    if config.action == ActionConfig::AppBanner {
        route = route.extracting_fragment();
    }
    Ok(route)
}

impl RouteMatcher {
    /// Builds a matcher from configuration.
    pub fn from_config(config: &RouterConfig) -> Result<Self, ConfigError> {
        Ok(Self::new(build_routes(config)?))
    }
}

/// The live route registry shared by every lookup.
#[derive(Debug)]
pub struct RouteRegistry {
    current: ArcSwap<RouteMatcher>,
}

impl RouteRegistry {
    pub fn new(matcher: RouteMatcher) -> Self {
        Self {
            current: ArcSwap::from_pointee(matcher),
        }
    }

    pub fn from_config(config: &RouterConfig) -> Result<Self, ConfigError> {
        Ok(Self::new(RouteMatcher::from_config(config)?))
    }

    /// The matcher currently in effect.
    pub fn snapshot(&self) -> Arc<RouteMatcher> {
        self.current.load_full()
    }

    /// Matches against the current snapshot.
    pub fn routes_matching(&self, url: &str) -> Vec<MatchedRoute> {
        self.current.load().routes_matching(url)
    }

    /// Swaps in a new matcher.
    pub fn replace(&self, matcher: RouteMatcher) {
        let count = matcher.len();
        self.current.store(Arc::new(matcher));
        tracing::info!(routes = count, "Route registry replaced");
    }

    /// Rebuilds from configuration. On error the current matcher stays.
    pub fn reload_from(&self, config: &RouterConfig) -> Result<(), ConfigError> {
        let matcher = RouteMatcher::from_config(config)?;
        self.replace(matcher);
        Ok(())
    }
}

impl Default for RouteRegistry {
    fn default() -> Self {
        Self::new(RouteMatcher::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::loader::parse_config;

    const CONFIG: &str = r#"
        [[routes]]
        path = "/stats/:domain"
        section = "stats"
        default_source = "widget"
        track = true
        action = { type = "navigate", target = "/stats/day/:domain" }

        [[routes]]
        path = "/get/"
        jetpack_powered = true
        action = { type = "app_banner" }
    "#;

    #[test]
    fn test_build_routes_from_config() {
        let config = parse_config(CONFIG).unwrap();
        let routes = build_routes(&config).unwrap();

        assert_eq!(routes.len(), 2);
        assert_eq!(routes[0].path(), "/stats/:domain");
        assert_eq!(routes[0].section.as_ref().map(Section::as_str), Some("stats"));
        assert_eq!(routes[0].default_source, Source::Widget);
        assert!(routes[0].should_track);
        assert!(!routes[0].extracts_fragment);
        assert!(!routes[0].jetpack_powered);
        assert!(routes[1].extracts_fragment);
        assert!(routes[1].jetpack_powered);
    }

    #[test]
    fn test_registry_replace_is_visible_to_lookups() {
        let registry = RouteRegistry::default();
        assert!(registry.routes_matching("/stats/example.com").is_empty());

        let before = registry.snapshot();
        registry
            .reload_from(&parse_config(CONFIG).unwrap())
            .unwrap();

        assert_eq!(registry.routes_matching("/stats/example.com").len(), 1);
        assert!(before.is_empty());
    }

    #[test]
    fn test_failed_reload_keeps_current() {
        let registry = RouteRegistry::from_config(&parse_config(CONFIG).unwrap()).unwrap();

        let mut broken = RouterConfig::default();
        broken.routes.push(RouteConfig {
            path: "/x/:a/:a".into(),
            section: None,
            default_source: "link".into(),
            track: false,
            jetpack_powered: false,
            action: ActionConfig::Passthrough,
        });

        assert!(matches!(registry.reload_from(&broken), Err(ConfigError::Route(_))));
        assert_eq!(registry.snapshot().len(), 2);
    }
}
