//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use deeplink_router::navigation::{AppBannerAction, LinkRouter, NavigationAction};
use deeplink_router::routing::{Route, RouteValues, Section};
use deeplink_router::Source;
use url::Url;

/// Action that does nothing; matching tests only look at values.
#[derive(Debug)]
pub struct TestAction;

impl NavigationAction for TestAction {
    fn perform(&self, _values: &RouteValues, _source: &Source, _router: &dyn LinkRouter) {}
}

/// A plain route in the "my site" section with a link source.
pub fn test_route(path: &str) -> Route {
    Route::new(path, Arc::new(TestAction))
        .unwrap()
        .with_section(Section::new("my_site"))
        .with_default_source(Source::Link)
}

/// The app-banner entry point.
pub fn app_banner_route() -> Route {
    Route::new("/get/", Arc::new(AppBannerAction::default()))
        .unwrap()
        .extracting_fragment()
}

/// Records every destination it is asked to open.
#[derive(Default)]
pub struct MockRouter {
    pub handled: Mutex<Vec<(Url, Source)>>,
}

impl LinkRouter for MockRouter {
    fn handle(&self, url: Url, source: Source) {
        self.handled.lock().unwrap().push((url, source));
    }
}

impl MockRouter {
    pub fn take(&self) -> Vec<(Url, Source)> {
        std::mem::take(&mut *self.handled.lock().unwrap())
    }
}
