//! Interface to the runtime that owns connectors, executors and the clock.

use mexo_core::{ExecutorInfo, Price};

/// What the strategy consumes from its host.
#[cfg_attr(test, mockall::automock)]
pub trait StrategyHost {
    /// Current mid price for `trading_pair` on `connector_name`.
    fn mid_price(&self, connector_name: &str, trading_pair: &str) -> Option<Price>;

    /// Snapshot of every executor the host manages for this strategy.
    fn executors(&self) -> Vec<ExecutorInfo>;

    /// Host clock, Unix milliseconds.
    fn current_timestamp_ms(&self) -> u64;

    /// Apply leverage on a perpetual connector. Spot hosts ignore it.
    fn set_leverage(&mut self, _connector_name: &str, _trading_pair: &str, _leverage: u32) {}
}

/// Keep executors matching `predicate`, preserving host order.
pub fn filter_executors<F>(executors: Vec<ExecutorInfo>, predicate: F) -> Vec<ExecutorInfo>
where
    F: Fn(&ExecutorInfo) -> bool,
{
    executors.into_iter().filter(|e| predicate(e)).collect()
}
