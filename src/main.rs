//! Deep-link router CLI.
//!
//! ```text
//! deeplink-router --config routes.toml match    <url>   all matches as JSON
//! deeplink-router --config routes.toml dispatch <url>   run the first match
//! deeplink-router --config routes.toml watch            route stdin lines, hot reload
//! ```

use std::io::BufRead;
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use url::Url;

use deeplink_router::config::{load_config, RouterConfig};
use deeplink_router::config::watcher::ConfigWatcher;
use deeplink_router::navigation::{dispatch_first, LinkRouter};
use deeplink_router::observability::logging;
use deeplink_router::routing::matched::MatchSummary;
use deeplink_router::routing::RouteRegistry;
use deeplink_router::Source;

#[derive(Parser)]
#[command(name = "deeplink-router")]
#[command(about = "Match deep links against a route registry", long_about = None)]
struct Cli {
    /// Route registry file (TOML).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Overrides the configured log level.
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every route matching a URL
    Match { url: String },
    /// Perform the first matching route's action
    Dispatch { url: String },
    /// Dispatch URLs read from stdin, reloading the config on change
    Watch,
}

/// Prints destinations instead of presenting anything.
struct PrintRouter;

impl LinkRouter for PrintRouter {
    fn handle(&self, url: Url, source: Source) {
        println!("{url}\t{source}");
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => RouterConfig::default(),
    };
    if let Some(level) = &cli.log_level {
        config.observability.log_level = level.clone();
    }
    logging::init(&config.observability);

    let registry = Arc::new(RouteRegistry::from_config(&config)?);
    tracing::info!(
        routes = config.routes.len(),
        site_origin = %config.site_origin,
        "Route registry loaded"
    );

    match cli.command {
        Commands::Match { url } => {
            let matches = registry.routes_matching(&url);
            let summaries: Vec<MatchSummary<'_>> = matches.iter().map(MatchSummary::from).collect();
            println!("{}", serde_json::to_string_pretty(&summaries)?);
        }
        Commands::Dispatch { url } => {
            let matches = registry.routes_matching(&url);
            if !dispatch_first(&matches, &PrintRouter) {
                eprintln!("No route matches {url}");
                std::process::exit(1);
            }
        }
        Commands::Watch => {
            let _watcher = match &cli.config {
                Some(path) => Some(ConfigWatcher::new(path, Arc::clone(&registry)).run()?),
                None => None,
            };

            for line in std::io::stdin().lock().lines() {
                let line = line?;
                let url = line.trim();
                if url.is_empty() {
                    continue;
                }
                let matches = registry.routes_matching(url);
                if !dispatch_first(&matches, &PrintRouter) {
                    tracing::warn!(url, "No route matches");
                }
            }
        }
    }

    Ok(())
}
