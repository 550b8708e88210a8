//! Exchange order-status translation.

use std::fmt;
use std::str::FromStr;

use mexo_core::OrderState;
use serde::{Deserialize, Serialize};

use crate::error::ConnectorError;

/// Order status strings as reported by MEXO.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExchangeOrderStatus {
    Pending,
    New,
    Filled,
    PartiallyFilled,
    PendingCancel,
    Canceled,
    Rejected,
    Expired,
}

impl ExchangeOrderStatus {
    pub const ALL: [Self; 8] = [
        Self::Pending,
        Self::New,
        Self::Filled,
        Self::PartiallyFilled,
        Self::PendingCancel,
        Self::Canceled,
        Self::Rejected,
        Self::Expired,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::New => "NEW",
            Self::Filled => "FILLED",
            Self::PartiallyFilled => "PARTIALLY_FILLED",
            Self::PendingCancel => "PENDING_CANCEL",
            Self::Canceled => "CANCELED",
            Self::Rejected => "REJECTED",
            Self::Expired => "EXPIRED",
        }
    }

    /// Canonical state for this exchange status.
    ///
    /// A pending cancel is still working on the book, so it maps to `Open`.
    pub fn order_state(&self) -> OrderState {
        match self {
            Self::Pending => OrderState::PendingCreate,
            Self::New | Self::PendingCancel => OrderState::Open,
            Self::Filled => OrderState::Filled,
            Self::PartiallyFilled => OrderState::PartiallyFilled,
            Self::Canceled => OrderState::Canceled,
            Self::Rejected | Self::Expired => OrderState::Failed,
        }
    }
}

impl fmt::Display for ExchangeOrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExchangeOrderStatus {
    type Err = ConnectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| ConnectorError::UnknownOrderStatus(s.to_string()))
    }
}

/// Translate a raw status string straight to the canonical state.
pub fn to_order_state(raw: &str) -> Result<OrderState, ConnectorError> {
    raw.parse::<ExchangeOrderStatus>()
        .map(|status| status.order_state())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translation_table() {
        let expected = [
            ("PENDING", OrderState::PendingCreate),
            ("NEW", OrderState::Open),
            ("FILLED", OrderState::Filled),
            ("PARTIALLY_FILLED", OrderState::PartiallyFilled),
            ("PENDING_CANCEL", OrderState::Open),
            ("CANCELED", OrderState::Canceled),
            ("REJECTED", OrderState::Failed),
            ("EXPIRED", OrderState::Failed),
        ];
        for (raw, state) in expected {
            assert_eq!(to_order_state(raw).unwrap(), state, "{raw}");
        }
    }

    #[test]
    fn test_unknown_status_is_an_error() {
        let err = to_order_state("CANCELLED").unwrap_err();
        assert!(matches!(err, ConnectorError::UnknownOrderStatus(s) if s == "CANCELLED"));
    }

    #[test]
    fn test_serde_matches_as_str() {
        for status in ExchangeOrderStatus::ALL {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
        }
    }
}
