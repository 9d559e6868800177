//! Configuration schema definitions.
//!
//! This module defines the route registry file format.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::routing::fragment::DEFAULT_SITE_ORIGIN;

/// Root configuration for the deep-link router.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RouterConfig {
    /// Canonical origin that navigation targets and banner redirects
    /// resolve against.
    pub site_origin: String,

    /// Route definitions, in registration order.
    pub routes: Vec<RouteConfig>,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            site_origin: DEFAULT_SITE_ORIGIN.to_string(),
            routes: Vec::new(),
            observability: ObservabilityConfig::default(),
        }
    }
}

/// A single route definition.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RouteConfig {
    /// Path template, e.g. "/stats/:domain".
    pub path: String,

    /// Opaque section tag passed to the navigation layer.
    #[serde(default)]
    pub section: Option<String>,

    /// Source token used when the URL carries none (default: "link").
    #[serde(default = "default_source")]
    pub default_source: String,

    /// Report matches to telemetry.
    #[serde(default)]
    pub track: bool,

    /// Destination is part of the Jetpack-powered feature set.
    #[serde(default)]
    pub jetpack_powered: bool,

    /// What to do once matched.
    #[serde(default)]
    pub action: ActionConfig,
}

fn default_source() -> String {
    "link".to_string()
}

/// Navigation action for a route.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ActionConfig {
    /// Open the incoming URL unchanged.
    #[default]
    Passthrough,

    /// Open a target template on the site origin.
    Navigate { target: String },

    /// Open the destination encoded in the URL fragment.
    AppBanner,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Emit logs as JSON lines.
    pub json: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json: false,
        }
    }
}
