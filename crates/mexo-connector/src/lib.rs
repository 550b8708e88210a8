//! MEXO exchange connector metadata.
//!
//! Static declarations consumed by a generic REST/WebSocket connector:
//! - Endpoint paths and URL templates per domain
//! - Rate-limit pools and per-endpoint linked weights
//! - Exchange order-status translation to canonical `OrderState`
//! - Fee schema and exchange-info validation
//! - Credential configuration per domain
//!
//! Nothing here performs I/O; enforcement and transport live in the host.

pub mod constants;
pub mod credentials;
pub mod error;
pub mod order_state;
pub mod rate_limits;
pub mod utils;
pub mod web_utils;

pub use credentials::{ConnectorDomain, MexoCredentials, DOMAINS};
pub use error::{ConnectorError, ConnectorResult};
pub use order_state::ExchangeOrderStatus;
pub use rate_limits::{LinkedLimitWeightPair, RateLimit, RATE_LIMITS};
pub use utils::{is_exchange_information_valid, TradeFeeSchema, DEFAULT_FEES};
