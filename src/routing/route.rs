//! Route definitions.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::navigation::NavigationAction;
use crate::routing::error::RouteResult;
use crate::routing::pattern::RoutePattern;
use crate::routing::source::Source;

/// Opaque classification tag owned by a route (e.g. `stats`, `reader`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Section(pub String);

impl Section {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A registered URL-pattern-to-action binding.
#[derive(Debug, Clone)]
pub struct Route {
    pattern: RoutePattern,
    /// Classification passed through to the navigation layer.
    pub section: Option<Section>,
    /// Source used when the URL carries no recognized `source` token.
    pub default_source: Source,
    /// Whether a match should be reported to telemetry.
    pub should_track: bool,
    /// Whether the destination belongs to the Jetpack-powered app surface.
    pub jetpack_powered: bool,
    /// Whether the real destination lives in the URL fragment.
    pub extracts_fragment: bool,
    /// Handler invoked with the final value bag.
    pub action: Arc<dyn NavigationAction>,
}

impl Route {
    /// Creates a route, parsing and validating its template.
    ///
    /// A trailing slash is part of the template: `/get/` matches
    /// `https://apps.wordpress.com/get/` but not `.../get`, and `/get`
    /// matches only the latter. Register both when either form may arrive.
    pub fn new(path: &str, action: Arc<dyn NavigationAction>) -> RouteResult<Self> {
        Ok(Self {
            pattern: RoutePattern::parse(path)?,
            section: None,
            default_source: Source::default(),
            should_track: false,
            jetpack_powered: false,
            extracts_fragment: false,
            action,
        })
    }

    pub fn with_section(mut self, section: Section) -> Self {
        self.section = Some(section);
        self
    }

    pub fn with_default_source(mut self, source: Source) -> Self {
        self.default_source = source;
        self
    }

    pub fn tracked(mut self, should_track: bool) -> Self {
        self.should_track = should_track;
        self
    }

    pub fn jetpack_powered(mut self, jetpack_powered: bool) -> Self {
        self.jetpack_powered = jetpack_powered;
        self
    }

    /// Marks this route as a banner entry point whose destination is
    /// encoded in the fragment.
    pub fn extracting_fragment(mut self) -> Self {
        self.extracts_fragment = true;
        self
    }

    pub fn path(&self) -> &str {
        self.pattern.template()
    }

    pub fn pattern(&self) -> &RoutePattern {
        &self.pattern
    }

    /// Structural equality: same template, section, source and flags.
    /// Actions are not compared.
    pub fn is_equal_to(&self, other: &Route) -> bool {
        self.pattern == other.pattern
            && self.section == other.section
            && self.default_source == other.default_source
            && self.should_track == other.should_track
            && self.jetpack_powered == other.jetpack_powered
            && self.extracts_fragment == other.extracts_fragment
    }
}
