//! Deep-link route matching.
//!
//! Given an incoming URL, find every registered route whose template
//! matches, extract placeholder, query and fragment values, and hand the
//! ordered result to a navigation layer.
//!
//! ```
//! use std::sync::Arc;
//! use deeplink_router::navigation::PassthroughAction;
//! use deeplink_router::routing::{Route, RouteMatcher};
//!
//! let matcher = RouteMatcher::new([
//!     Route::new("/me/:account", Arc::new(PassthroughAction)).unwrap(),
//! ]);
//!
//! let matches = matcher.routes_matching("https://wordpress.com/me/bobsmith");
//! assert_eq!(matches[0].values.get("account"), Some("bobsmith"));
//! assert_eq!(matches[0].values.url(), Some("https://wordpress.com/me/bobsmith"));
//! ```

pub mod config;
pub mod navigation;
pub mod observability;
pub mod routing;

pub use config::RouterConfig;
pub use navigation::{LinkRouter, NavigationAction};
pub use routing::{MatchedRoute, Route, RouteMatcher, RouteRegistry, RouteValues, Source};
