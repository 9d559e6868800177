//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check the site origin is an absolute http(s) URL
//! - Reject route templates that would collide in the value bag
//! - Reject unknown default source tokens
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: RouterConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use thiserror::Error;
use url::Url;

use crate::config::schema::{ActionConfig, RouterConfig};
use crate::routing::pattern::RoutePattern;
use crate::routing::source::Source;

/// A single semantic problem in a config file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("site_origin {0:?} is not an absolute http(s) URL")]
    InvalidOrigin(String),

    #[error("routes[{index}]: path {path:?} must start with '/'")]
    RelativePath { index: usize, path: String },

    #[error("routes[{index}]: {reason}")]
    InvalidPattern { index: usize, reason: String },

    #[error("routes[{index}]: unknown default_source {token:?}")]
    UnknownSource { index: usize, token: String },

    #[error("routes[{index}]: navigate target must not be empty")]
    EmptyTarget { index: usize },
}

/// Validates a parsed configuration.
pub fn validate_config(config: &RouterConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    match Url::parse(&config.site_origin) {
        Ok(url) if matches!(url.scheme(), "http" | "https") && url.has_host() => {}
        _ => errors.push(ValidationError::InvalidOrigin(config.site_origin.clone())),
    }

    for (index, route) in config.routes.iter().enumerate() {
        if let Err(e) = RoutePattern::parse(&route.path) {
            errors.push(ValidationError::InvalidPattern {
                index,
                reason: e.to_string(),
            });
        } else if !route.path.starts_with('/') {
            errors.push(ValidationError::RelativePath {
                index,
                path: route.path.clone(),
            });
        }

        if route.default_source.parse::<Source>().is_err() {
            errors.push(ValidationError::UnknownSource {
                index,
                token: route.default_source.clone(),
            });
        }

        if let ActionConfig::Navigate { target } = &route.action {
            if target.is_empty() {
                errors.push(ValidationError::EmptyTarget { index });
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::RouteConfig;

    fn route(path: &str) -> RouteConfig {
        RouteConfig {
            path: path.into(),
            section: None,
            default_source: "link".into(),
            track: false,
            jetpack_powered: false,
            action: ActionConfig::Passthrough,
        }
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&RouterConfig::default()).is_ok());
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = RouterConfig::default();
        config.site_origin = "wordpress.com".into();
        config.routes.push(route("/me/:id/:id"));
        config.routes.push(route("me"));
        let mut bad_source = route("/stats");
        bad_source.default_source = "carrier-pigeon".into();
        config.routes.push(bad_source);
        let mut bad_target = route("/read");
        bad_target.action = ActionConfig::Navigate { target: String::new() };
        config.routes.push(bad_target);

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 5);
        assert!(matches!(errors[0], ValidationError::InvalidOrigin(_)));
        assert!(matches!(errors[1], ValidationError::InvalidPattern { index: 0, .. }));
        assert!(matches!(errors[2], ValidationError::RelativePath { index: 1, .. }));
        assert!(matches!(errors[3], ValidationError::UnknownSource { index: 2, .. }));
        assert!(matches!(errors[4], ValidationError::EmptyTarget { index: 3 }));
    }

    #[test]
    fn test_reserved_placeholder_rejected() {
        let mut config = RouterConfig::default();
        config.routes.push(route("/share/:source"));

        let errors = validate_config(&config).unwrap_err();
        assert!(errors[0].to_string().contains("reserved key"));
    }
}
