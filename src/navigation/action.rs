//! Navigation contracts.

use url::Url;

use crate::routing::matched::{MatchedRoute, RouteValues};
use crate::routing::source::Source;

/// Receives resolved destinations. Implemented by the host application.
pub trait LinkRouter {
    /// Opens `url`, attributing the navigation to `source`.
    fn handle(&self, url: Url, source: Source);
}

/// Handler bound to a route.
pub trait NavigationAction: Send + Sync + std::fmt::Debug {
    /// Performs the navigation for one match.
    fn perform(&self, values: &RouteValues, source: &Source, router: &dyn LinkRouter);
}

/// Performs the first match's action, the way most callers consume a
/// result set.
///
/// Returns `false` when there was nothing to dispatch.
pub fn dispatch_first(matches: &[MatchedRoute], router: &dyn LinkRouter) -> bool {
    match matches.first() {
        Some(matched) => {
            matched.perform(router);
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::sync::Arc;

    use crate::navigation::PassthroughAction;
    use crate::routing::matcher::RouteMatcher;
    use crate::routing::route::Route;

    #[derive(Default)]
    struct Recorder(RefCell<Vec<(String, Source)>>);

    impl LinkRouter for Recorder {
        fn handle(&self, url: Url, source: Source) {
            self.0.borrow_mut().push((url.to_string(), source));
        }
    }

    #[test]
    fn test_dispatch_first_only_runs_first_match() {
        let matcher = RouteMatcher::new([
            Route::new("/me", Arc::new(PassthroughAction)).unwrap(),
            Route::new("/me", Arc::new(PassthroughAction)).unwrap(),
        ]);
        let recorder = Recorder::default();

        let matches = matcher.routes_matching("https://wordpress.com/me");
        assert_eq!(matches.len(), 2);
        assert!(dispatch_first(&matches, &recorder));
        assert_eq!(recorder.0.borrow().len(), 1);
    }

    #[test]
    fn test_dispatch_first_without_matches() {
        let recorder = Recorder::default();
        assert!(!dispatch_first(&[], &recorder));
        assert!(recorder.0.borrow().is_empty());
    }
}
