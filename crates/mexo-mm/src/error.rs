//! Strategy error types.

use mexo_core::{CoreError, Price};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MmError {
    #[error("Mid price unavailable for {trading_pair} on {connector}")]
    MidPriceUnavailable {
        connector: String,
        trading_pair: String,
    },

    #[error("Invalid mid price: {0}")]
    InvalidMidPrice(Price),

    #[error(transparent)]
    Config(#[from] CoreError),
}

pub type MmResult<T> = Result<T, MmError>;
