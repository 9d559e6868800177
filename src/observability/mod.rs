//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Routing, registry and watcher produce:
//!     → logging.rs (structured log events via tracing)
//!     → metrics.rs (counters via the metrics facade)
//!
//! Consumers:
//!     → stderr (plain or JSON lines)
//!     → whatever metrics recorder the host installs
//! ```

pub mod logging;
pub mod metrics;
