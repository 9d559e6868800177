//! Entry-point sources.
//!
//! A `Source` tags how a link reached the app. It is read from the
//! `source` query parameter and falls back to the route's default, so an
//! unknown marketing tag never breaks routing.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};
use url::Url;

/// Query parameter carrying the source token.
pub const SOURCE_QUERY_KEY: &str = "source";

/// Query parameter carrying a banner or email campaign.
pub const CAMPAIGN_QUERY_KEY: &str = "campaign";

/// The entry point that produced a match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Source {
    #[default]
    Link,
    Widget,
    Email { campaign: Option<String> },
    InApp,
    Banner { campaign: Option<String> },
}

impl Source {
    /// The bare token for this variant, without any campaign.
    pub fn token(&self) -> &'static str {
        match self {
            Source::Link => "link",
            Source::Widget => "widget",
            Source::Email { .. } => "email",
            Source::InApp => "inapp",
            Source::Banner { .. } => "banner",
        }
    }

    pub fn campaign(&self) -> Option<&str> {
        match self {
            Source::Email { campaign } | Source::Banner { campaign } => campaign.as_deref(),
            _ => None,
        }
    }

    /// Builds a source from a token and an optional campaign.
    ///
    /// Returns `None` for tokens outside the known set.
    pub fn from_token(token: &str, campaign: Option<&str>) -> Option<Self> {
        let campaign = campaign.map(str::to_string);
        match token {
            "link" => Some(Source::Link),
            "widget" => Some(Source::Widget),
            "email" => Some(Source::Email { campaign }),
            "inapp" => Some(Source::InApp),
            "banner" => Some(Source::Banner { campaign }),
            _ => None,
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.campaign() {
            Some(campaign) => write!(f, "{}({})", self.token(), campaign),
            None => f.write_str(self.token()),
        }
    }
}

/// Error for an unrecognized source token.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown source token {0:?}")]
pub struct UnknownSource(pub String);

impl FromStr for Source {
    type Err = UnknownSource;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Source::from_token(s, None).ok_or_else(|| UnknownSource(s.to_string()))
    }
}

impl Serialize for Source {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Resolves the typed source for a match.
///
/// An absent or unknown token yields `default`.
///
/// ```
/// use deeplink_router::routing::source::{resolve, Source};
///
/// assert_eq!(resolve(Some("widget"), None, &Source::Link), Source::Widget);
/// assert_eq!(resolve(Some("spring-sale"), None, &Source::Link), Source::Link);
/// assert_eq!(
///     resolve(Some("banner"), Some("qr"), &Source::Link),
///     Source::Banner { campaign: Some("qr".into()) },
/// );
/// ```
pub fn resolve(query_value: Option<&str>, campaign: Option<&str>, default: &Source) -> Source {
    query_value
        .and_then(|token| Source::from_token(token, campaign))
        .unwrap_or_else(|| default.clone())
}

/// The first value of query parameter `key` in `url`.
///
/// Names and values are percent-decoded only; `+` is kept as written
/// rather than read as a space.
pub fn query_value(url: &Url, key: &str) -> Option<String> {
    url.query()?.split('&').find_map(|pair| {
        let (name, value) = pair.split_once('=').unwrap_or((pair, ""));
        (decode_query_part(name) == key).then(|| decode_query_part(value).into_owned())
    })
}

fn decode_query_part(raw: &str) -> Cow<'_, str> {
    urlencoding::decode(raw).unwrap_or(Cow::Borrowed(raw))
}
