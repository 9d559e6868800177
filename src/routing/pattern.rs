//! Route templates and per-segment matching.
//!
//! # Responsibilities
//! - Split a template like `/me/:account/share` into typed segments
//! - Match a split URL path against those segments
//! - Bind placeholder names to the components they matched
//!
//! # Design Decisions
//! - Exact component-count match; there are no trailing wildcards
//! - Literal comparison is case-sensitive
//! - A trailing slash is significant: `/share/` has one more (empty)
//!   component than `/share`

use std::borrow::Cow;
use std::collections::HashSet;

use crate::routing::error::{RouteError, RouteResult};
use crate::routing::matched::RESERVED_KEYS;

/// One component of a route template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternSegment {
    /// Must equal the input component exactly.
    Literal(String),
    /// `:name`, matches any input component and binds it.
    Placeholder(String),
}

impl PatternSegment {
    /// Classifies a single template component.
    pub fn classify(component: &str) -> Self {
        match component.strip_prefix(':') {
            Some(name) => PatternSegment::Placeholder(name.to_string()),
            None => PatternSegment::Literal(component.to_string()),
        }
    }

    /// Returns true if this segment accepts the given input component.
    pub fn matches(&self, component: &str) -> bool {
        match self {
            PatternSegment::Literal(literal) => literal == component,
            PatternSegment::Placeholder(_) => true,
        }
    }

    /// Placeholder name, if this segment binds one.
    pub fn placeholder(&self) -> Option<&str> {
        match self {
            PatternSegment::Placeholder(name) => Some(name),
            PatternSegment::Literal(_) => None,
        }
    }
}

/// Splits a `/`-delimited path into components.
///
/// Exactly one leading slash is dropped; a trailing slash leaves an empty
/// final component. An empty path has no components at all.
///
/// ```
/// use deeplink_router::routing::pattern::split_path;
///
/// assert_eq!(split_path("/me/bobsmith"), vec!["me", "bobsmith"]);
/// assert_eq!(split_path("/me/share/"), vec!["me", "share", ""]);
/// assert!(split_path("").is_empty());
/// ```
pub fn split_path(path: &str) -> Vec<&str> {
    if path.is_empty() {
        return Vec::new();
    }
    path.strip_prefix('/').unwrap_or(path).split('/').collect()
}

/// Splits a URL path and percent-decodes every component.
///
/// Components that do not decode to valid UTF-8 are kept as written.
pub fn decode_components(path: &str) -> Vec<Cow<'_, str>> {
    split_path(path)
        .into_iter()
        .map(|component| urlencoding::decode(component).unwrap_or(Cow::Borrowed(component)))
        .collect()
}

/// A parsed route template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePattern {
    template: String,
    segments: Vec<PatternSegment>,
}

impl RoutePattern {
    /// Parses a template, rejecting the defects that would otherwise show
    /// up as silently overwritten values at match time.
    pub fn parse(template: &str) -> RouteResult<Self> {
        if template.is_empty() {
            return Err(RouteError::EmptyPath);
        }

        let segments: Vec<PatternSegment> = split_path(template)
            .into_iter()
            .map(PatternSegment::classify)
            .collect();

        let mut seen = HashSet::new();
        for name in segments.iter().filter_map(PatternSegment::placeholder) {
            if name.is_empty() {
                return Err(RouteError::EmptyPlaceholder {
                    path: template.to_string(),
                });
            }
            if RESERVED_KEYS.contains(&name) {
                return Err(RouteError::ReservedPlaceholder {
                    path: template.to_string(),
                    name: name.to_string(),
                });
            }
            if !seen.insert(name) {
                return Err(RouteError::DuplicatePlaceholder {
                    path: template.to_string(),
                    name: name.to_string(),
                });
            }
        }

        Ok(Self {
            template: template.to_string(),
            segments,
        })
    }

    /// The template this pattern was parsed from.
    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn segments(&self) -> &[PatternSegment] {
        &self.segments
    }

    /// Placeholder names in template order.
    pub fn placeholders(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(PatternSegment::placeholder)
    }

    /// Matches already-split path components.
    ///
    /// Returns the placeholder bindings in template order, or `None` when
    /// the lengths differ or a literal does not line up.
    pub fn matches<S: AsRef<str>>(&self, components: &[S]) -> Option<Vec<(String, String)>> {
        if components.len() != self.segments.len() {
            return None;
        }

        let mut bindings = Vec::new();
        for (segment, component) in self.segments.iter().zip(components) {
            let component = component.as_ref();
            if !segment.matches(component) {
                return None;
            }
            if let Some(name) = segment.placeholder() {
                bindings.push((name.to_string(), component.to_string()));
            }
        }
        Some(bindings)
    }
}
