//! Route matching logic.
//!
//! # Responsibilities
//! - Parse the incoming URL (absolute or relative)
//! - Evaluate every registered route against its path components
//! - Build an independent value bag and typed source per match
//!
//! # Design Decisions
//! - All matches are returned, in registration order (no first-match-wins)
//! - Malformed input is a no-match, never an error
//! - Immutable after construction, so lookups need no locking

use std::sync::Arc;

use url::Url;

use crate::observability::metrics;
use crate::routing::fragment::campaign_of;
use crate::routing::matched::{MatchedRoute, RouteValues, FRAGMENT_KEY, SOURCE_KEY, URL_KEY};
use crate::routing::pattern::decode_components;
use crate::routing::route::Route;
use crate::routing::source::{self, query_value, Source, SOURCE_QUERY_KEY};

/// Base used to resolve relative inputs such as `/me/bobsmith`.
/// Only the path, query and fragment of the result are ever read.
const RELATIVE_BASE: &str = "relative://localhost/";

/// Parses an input URL, accepting relative references.
///
/// Returns `None` for blank input and for input that cannot carry a
/// hierarchical path.
pub fn parse_input(input: &str) -> Option<Url> {
    if input.trim().is_empty() {
        return None;
    }

    let url = match Url::parse(input) {
        Ok(url) => url,
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            Url::parse(RELATIVE_BASE).ok()?.join(input).ok()?
        }
        Err(_) => return None,
    };

    if url.cannot_be_a_base() {
        return None;
    }
    Some(url)
}

/// Matches URLs against an ordered, immutable list of routes.
#[derive(Debug, Clone, Default)]
pub struct RouteMatcher {
    routes: Vec<Arc<Route>>,
}

impl RouteMatcher {
    /// Creates a matcher over routes in registration order.
    pub fn new(routes: impl IntoIterator<Item = Route>) -> Self {
        Self {
            routes: routes.into_iter().map(Arc::new).collect(),
        }
    }

    pub fn routes(&self) -> &[Arc<Route>] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Returns every route matching `input`, in registration order.
    pub fn routes_matching(&self, input: &str) -> Vec<MatchedRoute> {
        metrics::record_lookup();

        let Some(url) = parse_input(input) else {
            tracing::debug!(url = input, "Unparsable URL, no routes match");
            metrics::record_unparsable();
            return Vec::new();
        };

        let components = decode_components(url.path());
        let source_token = query_value(&url, SOURCE_QUERY_KEY);
        let campaign = campaign_of(&url);

        let matches: Vec<MatchedRoute> = self
            .routes
            .iter()
            .filter_map(|route| {
                let bindings = route.pattern().matches(components.as_slice())?;
                Some(build_match(
                    route,
                    bindings,
                    input,
                    &url,
                    source_token.as_deref(),
                    campaign.as_deref(),
                ))
            })
            .collect();

        for matched in &matches {
            metrics::record_match(matched.route.path());
        }
        tracing::debug!(url = input, matches = matches.len(), "Routed URL");
        matches
    }
}

fn build_match(
    route: &Arc<Route>,
    bindings: Vec<(String, String)>,
    input: &str,
    url: &Url,
    source_token: Option<&str>,
    campaign: Option<&str>,
) -> MatchedRoute {
    let mut values: RouteValues = bindings.into_iter().collect();
    values.insert(URL_KEY, input);

    if let Some(token) = source_token {
        values.insert(SOURCE_KEY, token);
    }

    let source = if route.extracts_fragment {
        if let Some(fragment) = url.fragment() {
            values.insert(FRAGMENT_KEY, fragment);
        }
        Source::Banner {
            campaign: campaign.map(str::to_string),
        }
    } else {
        source::resolve(source_token, campaign, &route.default_source)
    };

    MatchedRoute {
        route: Arc::clone(route),
        values,
        source,
    }
}
