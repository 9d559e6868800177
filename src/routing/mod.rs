//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming URL (universal link, custom scheme, banner redirect)
//!     → matcher.rs (parse URL, split + decode path)
//!     → pattern.rs (per-route segment matching, placeholder binding)
//!     → source.rs (typed source from ?source=)
//!     → fragment.rs (banner routes: fragment-encoded destination)
//!     → Return: Vec<MatchedRoute> in registration order
//!
//! Route Registration (at startup / reload):
//!     RouterConfig.routes[]
//!     → registry.rs (build routes + actions)
//!     → Freeze as immutable RouteMatcher
//! ```
//!
//! # Design Decisions
//! - Routes validated at registration, immutable at runtime
//! - Every matching route is returned, not only the first
//! - Deterministic: same input always yields the same matches
//! - Matching never fails; bad input is simply a no-match

pub mod error;
pub mod fragment;
pub mod matched;
pub mod matcher;
pub mod pattern;
pub mod registry;
pub mod route;
pub mod source;

pub use error::RouteError;
pub use fragment::FragmentExtractor;
pub use matched::{MatchedRoute, RouteValues};
pub use matcher::RouteMatcher;
pub use pattern::RoutePattern;
pub use registry::RouteRegistry;
pub use route::{Route, Section};
pub use source::Source;
