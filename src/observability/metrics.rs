//! Metrics collection.
//!
//! # Metrics
//! - `deeplink_lookups_total` (counter): URLs routed
//! - `deeplink_matches_total` (counter): matches by route template
//! - `deeplink_unparsable_urls_total` (counter): inputs with no usable path
//! - `deeplink_config_reloads_total` (counter): reloads by outcome
//!
//! # Design Decisions
//! - Emitted through the `metrics` facade; the host installs a recorder
//! - Without a recorder every call is a no-op

pub fn record_lookup() {
    ::metrics::counter!("deeplink_lookups_total").increment(1);
}

pub fn record_match(route: &str) {
    ::metrics::counter!("deeplink_matches_total", "route" => route.to_string()).increment(1);
}

pub fn record_unparsable() {
    ::metrics::counter!("deeplink_unparsable_urls_total").increment(1);
}

pub fn record_reload(success: bool) {
    let outcome = if success { "success" } else { "failure" };
    ::metrics::counter!("deeplink_config_reloads_total", "outcome" => outcome).increment(1);
}
