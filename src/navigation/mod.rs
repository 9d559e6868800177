//! Navigation subsystem.
//!
//! # Data Flow
//! ```text
//! RouteMatcher::routes_matching(url)
//!     → Vec<MatchedRoute> (registration order)
//!     → caller picks first (dispatch_first) or iterates
//!     → NavigationAction::perform(values, source, router)
//!     → LinkRouter::handle(destination url, source)
//! ```
//!
//! # Design Decisions
//! - Actions are trait objects, one implementation per route family
//! - The host application owns the `LinkRouter`; actions never present UI
//! - Actions log and skip when a destination cannot be built

pub mod action;
pub mod actions;

pub use action::{dispatch_first, LinkRouter, NavigationAction};
pub use actions::{AppBannerAction, NavigateAction, PassthroughAction};
