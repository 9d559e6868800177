//! Route definition errors.

use thiserror::Error;

/// Errors raised while registering a route.
///
/// These are configuration defects and surface when the route is built,
/// never while matching an incoming URL.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// The template has no content.
    #[error("route path must not be empty")]
    EmptyPath,

    /// A `:` placeholder without a name.
    #[error("route {path:?} has a placeholder without a name")]
    EmptyPlaceholder { path: String },

    /// The same placeholder name appears twice in one template.
    #[error("route {path:?} declares placeholder {name:?} more than once")]
    DuplicatePlaceholder { path: String, name: String },

    /// A placeholder would overwrite a reserved value-bag key.
    #[error("route {path:?} uses reserved key {name:?} as a placeholder")]
    ReservedPlaceholder { path: String, name: String },
}

/// Result type for route registration.
pub type RouteResult<T> = Result<T, RouteError>;
