//! Connector metadata error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConnectorError {
    #[error("Unknown order status: {0}")]
    UnknownOrderStatus(String),

    #[error("Unknown connector domain: {0}")]
    UnknownDomain(String),

    #[error("Invalid rate limit table: {0}")]
    InvalidRateLimitTable(String),

    #[error("Missing credential: {0}")]
    MissingCredential(&'static str),
}

pub type ConnectorResult<T> = Result<T, ConnectorError>;
