//! Built-in navigation actions for config-driven routes.

use url::Url;

use crate::navigation::action::{LinkRouter, NavigationAction};
use crate::routing::fragment::{campaign_of, FragmentExtractor};
use crate::routing::matched::RouteValues;
use crate::routing::matcher::parse_input;
use crate::routing::pattern::{split_path, PatternSegment};
use crate::routing::source::{Source, SOURCE_QUERY_KEY};

/// Opens the incoming URL unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughAction;

impl NavigationAction for PassthroughAction {
    fn perform(&self, values: &RouteValues, source: &Source, router: &dyn LinkRouter) {
        let Some(raw) = values.url() else {
            tracing::warn!("Passthrough action without a url value");
            return;
        };
        match Url::parse(raw) {
            Ok(url) => router.handle(url, source.clone()),
            Err(e) => tracing::warn!(url = raw, error = %e, "Cannot open relative or malformed URL"),
        }
    }
}

/// Navigates to a target template on the site origin.
///
/// `:name` segments of the target are filled from the value bag, so
/// `/stats/day/:domain` with `domain = example.com` opens
/// `https://wordpress.com/stats/day/example.com`. Query parameters of the
/// incoming URL, except `source`, are forwarded.
#[derive(Debug, Clone)]
pub struct NavigateAction {
    target: String,
    origin: Url,
}

impl NavigateAction {
    pub fn new(target: impl Into<String>, origin: Url) -> Self {
        Self {
            target: target.into(),
            origin,
        }
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    /// Fills the target template from `values`.
    ///
    /// Returns `None` if the template names a value the bag lacks.
    pub fn destination(&self, values: &RouteValues) -> Option<Url> {
        let segments = split_path(&self.target)
            .into_iter()
            .map(|segment| match PatternSegment::classify(segment) {
                PatternSegment::Literal(literal) => Some(literal),
                PatternSegment::Placeholder(name) => values
                    .get(&name)
                    .map(|value| urlencoding::encode(value).into_owned()),
            })
            .collect::<Option<Vec<String>>>()?;

        let mut destination = self.origin.join(&format!("/{}", segments.join("/"))).ok()?;

        let forwarded: Vec<(String, String)> = values
            .url()
            .and_then(parse_input)
            .map(|incoming| {
                incoming
                    .query_pairs()
                    .filter(|(key, _)| key != SOURCE_QUERY_KEY)
                    .map(|(k, v)| (k.into_owned(), v.into_owned()))
                    .collect()
            })
            .unwrap_or_default();
        if !forwarded.is_empty() {
            destination.query_pairs_mut().extend_pairs(forwarded);
        }

        Some(destination)
    }
}

impl NavigationAction for NavigateAction {
    fn perform(&self, values: &RouteValues, source: &Source, router: &dyn LinkRouter) {
        match self.destination(values) {
            Some(url) => router.handle(url, source.clone()),
            None => tracing::warn!(template = %self.target, "Missing value for navigation target"),
        }
    }
}

/// Opens the destination encoded in an app-banner fragment.
#[derive(Debug, Clone, Default)]
pub struct AppBannerAction {
    extractor: FragmentExtractor,
}

impl AppBannerAction {
    pub fn new(origin: Url) -> Self {
        Self {
            extractor: FragmentExtractor::new(origin),
        }
    }
}

impl NavigationAction for AppBannerAction {
    /// The source is always rebuilt as a banner carrying the outer campaign.
    fn perform(&self, values: &RouteValues, _source: &Source, router: &dyn LinkRouter) {
        let Some(outer) = values.url().and_then(parse_input) else {
            tracing::warn!("Banner action without a parsable url value");
            return;
        };

        let destination = match values.fragment() {
            Some(fragment) => self.extractor.resolve(fragment, &outer),
            None => self.extractor.destination(&outer),
        };
        let campaign = campaign_of(&outer);

        router.handle(destination, Source::Banner { campaign });
    }
}
