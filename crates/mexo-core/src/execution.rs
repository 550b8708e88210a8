//! Canonical order lifecycle states.
//!
//! Exchange-specific status strings are translated into these by each
//! connector (see `mexo_connector::order_state`).

use serde::{Deserialize, Serialize};
use std::fmt;

/// State of an order in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderState {
    /// Submitted, not yet acknowledged by the exchange.
    #[default]
    PendingCreate,
    /// Resting on the book.
    Open,
    /// Partially filled, remainder still working.
    PartiallyFilled,
    /// Completely filled.
    Filled,
    /// Cancelled.
    Canceled,
    /// Rejected or expired.
    Failed,
}

impl OrderState {
    /// Returns true if the order is in a terminal state.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Filled | Self::Canceled | Self::Failed)
    }

    /// Returns true if the order can still be cancelled.
    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(
            self,
            Self::PendingCreate | Self::Open | Self::PartiallyFilled
        )
    }
}

impl fmt::Display for OrderState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::PendingCreate => "PENDING_CREATE",
            Self::Open => "OPEN",
            Self::PartiallyFilled => "PARTIALLY_FILLED",
            Self::Filled => "FILLED",
            Self::Canceled => "CANCELED",
            Self::Failed => "FAILED",
        };
        f.write_str(s)
    }
}
