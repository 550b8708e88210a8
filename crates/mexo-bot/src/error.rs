//! Application error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Field error: {0}")]
    Field(#[from] mexo_core::CoreError),

    #[error("Connector error: {0}")]
    Connector(#[from] mexo_connector::ConnectorError),

    #[error("Strategy error: {0}")]
    Strategy(#[from] mexo_mm::MmError),

    #[error("Telemetry error: {0}")]
    Telemetry(#[from] mexo_telemetry::TelemetryError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type AppResult<T> = Result<T, AppError>;
