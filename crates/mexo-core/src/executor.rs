//! Executor snapshots and the actions a strategy proposes to the host.
//!
//! An executor is one working order/position owned by the host runtime.
//! Strategies never hold executors; they read a snapshot each tick and
//! answer with `CreateExecutorAction`s and `StopExecutorAction`s.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::order::{ClientOrderId, OrderSide, OrderType};
use crate::{Price, Size};

/// Identifier the host assigns to an executor.
pub type ExecutorId = ClientOrderId;

/// Exit policy attached to a position executor.
///
/// Opaque to the strategy apart from the entry order type; unset barriers
/// mean the host applies none.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TripleBarrierConfig {
    /// Order type used to open the position.
    pub open_order_type: OrderType,
    /// Take-profit as a fraction of entry price.
    #[serde(default)]
    pub take_profit: Option<Decimal>,
    /// Stop-loss as a fraction of entry price.
    #[serde(default)]
    pub stop_loss: Option<Decimal>,
    /// Maximum holding time in seconds.
    #[serde(default)]
    pub time_limit_secs: Option<u64>,
}

impl TripleBarrierConfig {
    /// Limit entry with no exit barriers.
    pub fn limit_entry() -> Self {
        Self {
            open_order_type: OrderType::Limit,
            ..Default::default()
        }
    }
}

/// Everything the host needs to start a position executor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionExecutorConfig {
    /// Host timestamp at proposal time (Unix milliseconds).
    pub timestamp_ms: u64,
    pub trading_pair: String,
    pub connector_name: String,
    pub side: OrderSide,
    pub amount: Size,
    pub entry_price: Price,
    pub triple_barrier: TripleBarrierConfig,
    pub leverage: u32,
}

/// Request to create a new executor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateExecutorAction {
    pub executor_config: PositionExecutorConfig,
}

/// Request to stop a running executor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StopExecutorAction {
    pub executor_id: ExecutorId,
}

/// Snapshot of a host executor as seen by the strategy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutorInfo {
    pub id: ExecutorId,
    pub config: PositionExecutorConfig,
    /// Created and not yet terminated.
    pub is_active: bool,
    /// Entry order has (partially) filled and the position is live.
    pub is_trading: bool,
}

impl ExecutorInfo {
    /// Resting entry order that never filled.
    pub fn is_resting_unfilled(&self) -> bool {
        self.is_active && !self.is_trading
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn info(is_trading: bool, is_active: bool) -> ExecutorInfo {
        ExecutorInfo {
            id: ClientOrderId::from("exec-1"),
            config: PositionExecutorConfig {
                timestamp_ms: 0,
                trading_pair: "CFX-USDT".to_string(),
                connector_name: "mexo".to_string(),
                side: OrderSide::Buy,
                amount: Size::new(dec!(30)),
                entry_price: Price::new(dec!(0.1234)),
                triple_barrier: TripleBarrierConfig::limit_entry(),
                leverage: 1,
            },
            is_active,
            is_trading,
        }
    }

    #[test]
    fn test_resting_unfilled_truth_table() {
        assert!(info(false, true).is_resting_unfilled());
        assert!(!info(true, true).is_resting_unfilled());
        assert!(!info(false, false).is_resting_unfilled());
        assert!(!info(true, false).is_resting_unfilled());
    }

    #[test]
    fn test_limit_entry_has_no_barriers() {
        let barrier = TripleBarrierConfig::limit_entry();
        assert_eq!(barrier.open_order_type, OrderType::Limit);
        assert!(barrier.take_profit.is_none());
        assert!(barrier.stop_loss.is_none());
        assert!(barrier.time_limit_secs.is_none());
    }
}
