//! Match results and their value bags.

use std::sync::Arc;

use indexmap::IndexMap;
use serde::Serialize;

use crate::routing::route::{Route, Section};
use crate::routing::source::Source;

/// Value-bag key for the full incoming URL.
pub const URL_KEY: &str = "url";
/// Value-bag key for the raw `source` query value.
pub const SOURCE_KEY: &str = "source";
/// Value-bag key for the raw fragment of a fragment-extraction route.
pub const FRAGMENT_KEY: &str = "fragment";

/// Keys the matcher owns. Placeholders may not use them.
pub const RESERVED_KEYS: &[&str] = &[URL_KEY, SOURCE_KEY, FRAGMENT_KEY];

/// Insertion-ordered string values extracted from one match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RouteValues(IndexMap<String, String>);

impl RouteValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// The original URL this bag was extracted from.
    pub fn url(&self) -> Option<&str> {
        self.get(URL_KEY)
    }

    pub fn fragment(&self) -> Option<&str> {
        self.get(FRAGMENT_KEY)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RouteValues {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// One route that matched one URL.
#[derive(Debug, Clone)]
pub struct MatchedRoute {
    /// The registered route.
    pub route: Arc<Route>,
    /// Extracted and derived values.
    pub values: RouteValues,
    /// Resolved entry-point source.
    pub source: Source,
}

impl MatchedRoute {
    pub fn section(&self) -> Option<&Section> {
        self.route.section.as_ref()
    }

    /// Runs this route's action with the extracted values.
    pub fn perform(&self, router: &dyn crate::navigation::LinkRouter) {
        tracing::debug!(
            route = %self.route.path(),
            source = %self.source,
            "Performing navigation action"
        );
        self.route.action.perform(&self.values, &self.source, router);
    }
}

/// Serializable summary used by the CLI.
#[derive(Debug, Serialize)]
pub struct MatchSummary<'a> {
    pub path: &'a str,
    pub section: Option<&'a Section>,
    pub source: &'a Source,
    pub should_track: bool,
    pub jetpack_powered: bool,
    pub values: &'a RouteValues,
}

impl<'a> From<&'a MatchedRoute> for MatchSummary<'a> {
    fn from(matched: &'a MatchedRoute) -> Self {
        Self {
            path: matched.route.path(),
            section: matched.section(),
            source: &matched.source,
            should_track: matched.route.should_track,
            jetpack_powered: matched.route.jetpack_powered,
            values: &matched.values,
        }
    }
}
