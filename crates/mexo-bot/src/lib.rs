//! Paper-trading runtime for the Mexo ladder market maker.
//!
//! Wires the ladder strategy to an in-memory host:
//! - TOML configuration with CLI overrides
//! - Interactive field collection for new configs
//! - Paper host serving a drifting mid price and simulated fills
//! - Tick loop on a tokio interval with Prometheus counters

pub mod app;
pub mod config;
pub mod error;
pub mod paper;

pub use app::{Application, TickReport};
pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use paper::PaperHost;
