//! In-memory strategy host for paper trading.
//!
//! Live executors are kept in creation order; stopped ones are dropped. When
//! the mid moves, a resting executor it crosses becomes trading and the maker
//! fee is accrued on its notional.

use std::collections::{BTreeMap, BTreeSet};

use mexo_connector::constants::{HBOT_ORDER_ID_PREFIX, MAX_ORDER_ID_LEN};
use mexo_connector::{TradeFeeSchema, DEFAULT_FEES};
use mexo_core::{
    ClientOrderId, CreateExecutorAction, ExecutorId, ExecutorInfo, OrderSide, Price,
    StopExecutorAction,
};
use mexo_mm::StrategyHost;
use rust_decimal::Decimal;
use tracing::{debug, info};

/// Paper host serving one trading pair.
#[derive(Debug)]
pub struct PaperHost {
    trading_pair: String,
    mid: Price,
    now_ms: u64,
    executors: Vec<ExecutorInfo>,
    leverage: BTreeMap<(String, String), u32>,
    fees: TradeFeeSchema,
    fees_paid: Decimal,
}

impl PaperHost {
    pub fn new(trading_pair: impl Into<String>, mid: Price, start_ms: u64) -> Self {
        Self {
            trading_pair: trading_pair.into(),
            mid,
            now_ms: start_ms,
            executors: Vec::new(),
            leverage: BTreeMap::new(),
            fees: DEFAULT_FEES,
            fees_paid: Decimal::ZERO,
        }
    }

    pub fn mid(&self) -> Price {
        self.mid
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Advance the paper clock.
    pub fn advance(&mut self, ms: u64) {
        self.now_ms = self.now_ms.saturating_add(ms);
    }

    /// Move the mid and fill every resting executor it crosses.
    ///
    /// An unchanged mid fills nothing. Returns the number of new fills.
    pub fn set_mid(&mut self, mid: Price) -> usize {
        if mid == self.mid {
            return 0;
        }
        self.mid = mid;
        let mut fills = 0;
        let mut fees = Decimal::ZERO;
        for executor in self.executors.iter_mut().filter(|e| e.is_resting_unfilled()) {
            let price = executor.config.entry_price;
            let crossed = match executor.config.side {
                OrderSide::Buy => mid <= price,
                OrderSide::Sell => mid >= price,
            };
            if crossed {
                executor.is_trading = true;
                fills += 1;
                fees += self
                    .fees
                    .fee_for(executor.config.amount.notional(price), true);
                debug!(
                    executor_id = %executor.id,
                    side = %executor.config.side,
                    %price,
                    %mid,
                    "Paper fill"
                );
            }
        }
        self.fees_paid += fees;
        fills
    }

    /// Register one executor per create action. Returns the assigned ids.
    pub fn apply_creates(&mut self, actions: Vec<CreateExecutorAction>) -> Vec<ExecutorId> {
        actions
            .into_iter()
            .map(|action| {
                let id = ClientOrderId::generate(HBOT_ORDER_ID_PREFIX, MAX_ORDER_ID_LEN);
                self.executors.push(ExecutorInfo {
                    id: id.clone(),
                    config: action.executor_config,
                    is_active: true,
                    is_trading: false,
                });
                id
            })
            .collect()
    }

    /// Stop and drop the named executors. Unknown ids are ignored.
    ///
    /// Returns the number of executors actually stopped.
    pub fn apply_stops(&mut self, actions: &[StopExecutorAction]) -> usize {
        if actions.is_empty() {
            return 0;
        }
        let ids: BTreeSet<&ExecutorId> = actions.iter().map(|a| &a.executor_id).collect();
        let before = self.executors.len();
        self.executors.retain(|e| !ids.contains(&e.id));
        before - self.executors.len()
    }

    /// Force an executor into the trading state.
    pub fn mark_trading(&mut self, id: &ExecutorId) -> bool {
        match self.executors.iter_mut().find(|e| &e.id == id) {
            Some(executor) => {
                executor.is_trading = true;
                true
            }
            None => false,
        }
    }

    pub fn active_count(&self) -> usize {
        self.executors.iter().filter(|e| e.is_active).count()
    }

    pub fn trading_count(&self) -> usize {
        self.executors
            .iter()
            .filter(|e| e.is_active && e.is_trading)
            .count()
    }

    pub fn leverage_for(&self, connector_name: &str, trading_pair: &str) -> Option<u32> {
        self.leverage
            .get(&(connector_name.to_string(), trading_pair.to_string()))
            .copied()
    }

    /// Maker fees accrued on paper fills, in quote units.
    pub fn fees_paid(&self) -> Decimal {
        self.fees_paid
    }
}

impl StrategyHost for PaperHost {
    fn mid_price(&self, _connector_name: &str, trading_pair: &str) -> Option<Price> {
        (trading_pair == self.trading_pair).then_some(self.mid)
    }

    fn executors(&self) -> Vec<ExecutorInfo> {
        self.executors.clone()
    }

    fn current_timestamp_ms(&self) -> u64 {
        self.now_ms
    }

    fn set_leverage(&mut self, connector_name: &str, trading_pair: &str, leverage: u32) {
        info!(connector = %connector_name, %trading_pair, leverage, "Paper leverage set");
        self.leverage
            .insert((connector_name.to_string(), trading_pair.to_string()), leverage);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mexo_core::{PositionExecutorConfig, Size, TripleBarrierConfig};
    use rust_decimal_macros::dec;

    fn create(side: OrderSide, price: Decimal) -> CreateExecutorAction {
        CreateExecutorAction {
            executor_config: PositionExecutorConfig {
                timestamp_ms: 0,
                trading_pair: "CFX-USDT".to_string(),
                connector_name: "mexo".to_string(),
                side,
                amount: Size::new(dec!(30)),
                entry_price: Price::new(price),
                triple_barrier: TripleBarrierConfig::limit_entry(),
                leverage: 1,
            },
        }
    }

    fn host() -> PaperHost {
        PaperHost::new("CFX-USDT", Price::new(dec!(10)), 1_000)
    }

    #[test]
    fn test_ids_follow_order_id_rules() {
        let mut host = host();
        let ids = host.apply_creates(vec![create(OrderSide::Buy, dec!(9.9))]);
        assert_eq!(ids.len(), 1);
        assert!(ids[0].as_str().starts_with("hummingbot"));
        assert!(ids[0].as_str().len() <= 32);
        assert_eq!(host.active_count(), 1);
    }

    #[test]
    fn test_mid_served_only_for_configured_pair() {
        let host = host();
        assert_eq!(host.mid_price("binance", "CFX-USDT"), Some(Price::new(dec!(10))));
        assert_eq!(host.mid_price("binance", "BTC-USDT"), None);
    }

    #[test]
    fn test_crossing_mid_fills_and_accrues_maker_fee() {
        let mut host = host();
        host.apply_creates(vec![
            create(OrderSide::Buy, dec!(9.9)),
            create(OrderSide::Sell, dec!(10.1)),
        ]);

        assert_eq!(host.set_mid(Price::new(dec!(9.95))), 0);
        assert_eq!(host.set_mid(Price::new(dec!(9.95))), 0);
        assert_eq!(host.set_mid(Price::new(dec!(9.9))), 1);
        assert_eq!(host.trading_count(), 1);
        // 30 * 9.9 * 0.00075
        assert_eq!(host.fees_paid(), dec!(0.222750));

        // already filled executors do not fill twice
        assert_eq!(host.set_mid(Price::new(dec!(9.8))), 0);
        assert_eq!(host.set_mid(Price::new(dec!(10.2))), 1);
    }

    #[test]
    fn test_unchanged_mid_fills_nothing() {
        let mut host = host();
        // crosses the current mid of 10
        host.apply_creates(vec![create(OrderSide::Buy, dec!(10.1))]);
        assert_eq!(host.set_mid(Price::new(dec!(10))), 0);
        assert_eq!(host.trading_count(), 0);
        assert_eq!(host.set_mid(Price::new(dec!(10.05))), 1);
    }

    #[test]
    fn test_stopped_executors_leave_the_snapshot() {
        let mut host = host();
        for _ in 0..1_000 {
            let stops: Vec<_> = host
                .executors()
                .into_iter()
                .map(|e| StopExecutorAction { executor_id: e.id })
                .collect();
            host.apply_creates(vec![
                create(OrderSide::Buy, dec!(9.9)),
                create(OrderSide::Sell, dec!(10.1)),
            ]);
            assert!(host.apply_stops(&stops) <= 2);
            assert_eq!(host.executors().len(), 2);
        }
        assert_eq!(host.active_count(), 2);
    }

    #[test]
    fn test_stops_deactivate_known_executors_only() {
        let mut host = host();
        let ids = host.apply_creates(vec![
            create(OrderSide::Buy, dec!(9.9)),
            create(OrderSide::Sell, dec!(10.1)),
        ]);
        let stops = vec![
            StopExecutorAction { executor_id: ids[0].clone() },
            StopExecutorAction { executor_id: ClientOrderId::from("unknown") },
            StopExecutorAction { executor_id: ids[0].clone() },
        ];
        assert_eq!(host.apply_stops(&stops), 1);
        assert_eq!(host.active_count(), 1);
    }

    #[test]
    fn test_mark_trading_and_leverage() {
        let mut host = host();
        let ids = host.apply_creates(vec![create(OrderSide::Buy, dec!(9.9))]);
        assert!(host.mark_trading(&ids[0]));
        assert!(!host.mark_trading(&ClientOrderId::from("missing")));
        assert_eq!(host.trading_count(), 1);

        host.set_leverage("binance_perpetual_testnet", "CFX-USDT", 20);
        assert_eq!(host.leverage_for("binance_perpetual_testnet", "CFX-USDT"), Some(20));
        assert_eq!(host.leverage_for("mexo", "CFX-USDT"), None);
    }

    #[test]
    fn test_clock_advances() {
        let mut host = host();
        host.advance(250);
        assert_eq!(host.current_timestamp_ms(), 1_250);
    }
}
