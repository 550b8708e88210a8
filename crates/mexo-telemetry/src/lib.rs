//! Prometheus metrics and structured logging for the ladder market maker.
//!
//! - Prometheus counters for ladder bursts, proposed and stopped executors
//! - Structured logging with tracing (JSON in production)

pub mod error;
pub mod logging;
pub mod metrics;

pub use error::{TelemetryError, TelemetryResult};
pub use logging::init_logging;
pub use metrics::Metrics;
