//! Configuration file watcher for hot reload.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};

use crate::config::loader::load_config;
use crate::observability::metrics;
use crate::routing::registry::RouteRegistry;

/// A watcher that rebuilds the route registry when its file changes.
pub struct ConfigWatcher {
    path: PathBuf,
    registry: Arc<RouteRegistry>,
}

impl ConfigWatcher {
    pub fn new(path: &Path, registry: Arc<RouteRegistry>) -> Self {
        Self {
            path: path.to_path_buf(),
            registry,
        }
    }

    /// Reloads the file once. A bad file keeps the current routes.
    pub fn reload(&self) -> bool {
        reload_into(&self.path, &self.registry)
    }

    /// Start watching the file in a background thread.
    ///
    /// Watching stops when the returned watcher is dropped.
    pub fn run(self) -> Result<RecommendedWatcher, notify::Error> {
        let registry = Arc::clone(&self.registry);
        let path = self.path.clone();

        let mut watcher = RecommendedWatcher::new(
            move |res: notify::Result<Event>| match res {
                Ok(event) => {
                    if event.kind.is_modify() || event.kind.is_create() {
                        tracing::info!("Config file change detected, reloading...");
                        reload_into(&path, &registry);
                    }
                }
                Err(e) => tracing::error!("Watch error: {:?}", e),
            },
            Config::default().with_poll_interval(Duration::from_secs(2)),
        )?;

        watcher.watch(&self.path, RecursiveMode::NonRecursive)?;

        tracing::info!(path = ?self.path, "Config watcher started");
        Ok(watcher)
    }
}

fn reload_into(path: &Path, registry: &RouteRegistry) -> bool {
    let outcome = load_config(path).and_then(|config| registry.reload_from(&config));
    match outcome {
        Ok(()) => {
            metrics::record_reload(true);
            true
        }
        Err(e) => {
            tracing::error!("Failed to reload config: {}. Keeping current routes.", e);
            metrics::record_reload(false);
            false
        }
    }
}
