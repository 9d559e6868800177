//! Banner redirects encoded in a URL fragment.
//!
//! An app banner links to a generic entry point such as
//! `https://apps.wordpress.com/get/?campaign=qr#%2Fmedia%2F1234567`. The real
//! destination is the percent-encoded path in the fragment, resolved on the
//! canonical site origin, with the outer query parameters carried over:
//!
//! ```text
//! #%2Fmedia%2F1234567  ──decode──▶  /media/1234567
//!                      ──origin──▶  https://wordpress.com/media/1234567
//!   ?campaign=qr       ──merge───▶  https://wordpress.com/media/1234567?campaign=qr
//! ```

use std::borrow::Cow;

use url::Url;

use crate::routing::source::{query_value, CAMPAIGN_QUERY_KEY};

/// Canonical origin banner destinations resolve against.
pub const DEFAULT_SITE_ORIGIN: &str = "https://wordpress.com";

/// Resolves fragment-encoded destinations on a fixed origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FragmentExtractor {
    origin: Url,
}

impl FragmentExtractor {
    pub fn new(origin: Url) -> Self {
        Self { origin }
    }

    pub fn origin(&self) -> &Url {
        &self.origin
    }

    /// Resolves a raw (still percent-encoded) fragment against the origin
    /// and merges the outer URL's query parameters into it.
    ///
    /// The decoded fragment is always treated as a path on the origin, so a
    /// fragment like `//evil.example/x` cannot change the host.
    pub fn resolve(&self, raw_fragment: &str, outer: &Url) -> Url {
        let decoded = urlencoding::decode(raw_fragment).unwrap_or(Cow::Borrowed(raw_fragment));
        let path = format!("/{}", decoded.trim_start_matches('/'));

        let mut destination = match self.origin.join(&path) {
            Ok(url) => url,
            Err(e) => {
                tracing::warn!(fragment = raw_fragment, error = %e, "Unresolvable banner fragment");
                self.origin.clone()
            }
        };

        let outer_pairs: Vec<(String, String)> = outer.query_pairs().into_owned().collect();
        if !outer_pairs.is_empty() {
            destination.query_pairs_mut().extend_pairs(outer_pairs);
        }
        destination
    }

    /// The destination for an outer banner URL.
    ///
    /// Without a fragment the banner opens the origin root.
    pub fn destination(&self, outer: &Url) -> Url {
        self.resolve(outer.fragment().unwrap_or_default(), outer)
    }
}

impl Default for FragmentExtractor {
    fn default() -> Self {
        // DEFAULT_SITE_ORIGIN is a constant absolute URL.
        Self::new(Url::parse(DEFAULT_SITE_ORIGIN).expect("default origin is a valid URL"))
    }
}

/// The `campaign` query value of the outer URL.
pub fn campaign_of(outer: &Url) -> Option<String> {
    query_value(outer, CAMPAIGN_QUERY_KEY)
}
