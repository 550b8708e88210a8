//! Ladder strategy: state machine over create/stop proposals.
//!
//! State machine:
//! - `Opening`: next `create_actions_proposal` emits one full ladder burst
//!   and moves to `Paused`.
//! - `Paused`: next `stop_actions_proposal` that passes the refresh check
//!   stops resting, unfilled executors and moves back to `Opening`.
//! - `Error`: the host fed a non-positive mid price. The next positive mid
//!   moves back to `Opening` and bursts in the same call; `resume` forces
//!   the transition.

use std::collections::{BTreeMap, BTreeSet};

use mexo_core::{
    CreateExecutorAction, ExecutorInfo, PositionExecutorConfig, Price, StopExecutorAction,
};
use tracing::{debug, info, warn};

use crate::anchor::{AnchorPrices, AnchorSelector, RandomAnchor};
use crate::config::{StopTiming, StrategyConfig};
use crate::error::{MmError, MmResult};
use crate::host::{filter_executors, StrategyHost};
use crate::ladder::{build_ladder, Ladder, LadderParams};

/// Connector name → trading pairs the host must subscribe.
pub type MarketSubscriptions = BTreeMap<String, BTreeSet<String>>;

/// Markets a config needs: the trading pair on both the feeder and the maker.
pub fn init_markets(config: &StrategyConfig) -> MarketSubscriptions {
    let mut markets = MarketSubscriptions::new();
    for connector in [
        &config.price_feeder_connector_name,
        &config.market_maker_connector_name,
    ] {
        markets
            .entry(connector.clone())
            .or_default()
            .insert(config.trading_pair.clone());
    }
    markets
}

fn is_perpetual(connector_name: &str) -> bool {
    connector_name.contains("perpetual")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyState {
    Opening,
    Paused,
    Error,
}

impl StrategyState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Opening => "opening",
            Self::Paused => "paused",
            Self::Error => "error",
        }
    }
}

/// Symmetric multi-level ladder market maker.
#[derive(Debug)]
pub struct LadderStrategy<S = RandomAnchor> {
    config: StrategyConfig,
    markets: MarketSubscriptions,
    selector: S,
    state: StrategyState,
    /// Host time of the last burst (ms).
    last_trade_timestamp_ms: u64,
    /// Host time passed to `start` (ms).
    started_at_ms: Option<u64>,
}

impl LadderStrategy<RandomAnchor> {
    /// Strategy with an entropy-seeded anchor coin flip.
    pub fn new(config: StrategyConfig) -> MmResult<Self> {
        Self::with_selector(config, RandomAnchor::from_entropy())
    }
}

impl<S: AnchorSelector> LadderStrategy<S> {
    pub fn with_selector(config: StrategyConfig, selector: S) -> MmResult<Self> {
        config.validate()?;
        let markets = init_markets(&config);
        Ok(Self {
            config,
            markets,
            selector,
            state: StrategyState::Opening,
            last_trade_timestamp_ms: 0,
            started_at_ms: None,
        })
    }

    pub fn config(&self) -> &StrategyConfig {
        &self.config
    }

    pub fn markets(&self) -> &MarketSubscriptions {
        &self.markets
    }

    pub fn state(&self) -> StrategyState {
        self.state
    }

    pub fn last_trade_timestamp_ms(&self) -> u64 {
        self.last_trade_timestamp_ms
    }

    pub fn started_at_ms(&self) -> Option<u64> {
        self.started_at_ms
    }

    /// Lifecycle hook: remember the start time and apply initial settings.
    pub fn start<H: StrategyHost + ?Sized>(&mut self, host: &mut H, timestamp_ms: u64) {
        self.started_at_ms = Some(timestamp_ms);
        self.apply_initial_setting(host);
        info!(
            trading_pair = %self.config.trading_pair,
            maker = %self.config.market_maker_connector_name,
            feeder = %self.config.price_feeder_connector_name,
            levels = self.config.level,
            spread = %self.config.spread,
            "Ladder strategy started"
        );
    }

    fn apply_initial_setting<H: StrategyHost + ?Sized>(&mut self, host: &mut H) {
        for (connector, pairs) in &self.markets {
            if !is_perpetual(connector) {
                continue;
            }
            for pair in pairs {
                debug!(%connector, %pair, leverage = self.config.leverage, "Setting leverage");
                host.set_leverage(connector, pair, self.config.leverage);
            }
        }
    }

    /// Leave the `Error` state and quote again on the next tick.
    pub fn resume(&mut self) {
        if self.state == StrategyState::Error {
            info!("Resuming ladder strategy");
            self.state = StrategyState::Opening;
        }
    }

    /// Build the ladder for `mid` without touching strategy state.
    pub fn plan_ladder(&mut self, mid: Price) -> Ladder {
        let anchors = AnchorPrices::from_mid(mid);
        let order_price = anchors.price(self.selector.select());
        build_ladder(
            anchors,
            order_price,
            &LadderParams {
                spread: self.config.spread,
                levels: self.config.level,
                straddle: self.config.anchor_straddle,
            },
        )
    }

    /// Emit one ladder burst when `Opening` (or recovering from `Error`);
    /// nothing while `Paused`.
    pub fn create_actions_proposal<H: StrategyHost + ?Sized>(
        &mut self,
        host: &H,
    ) -> MmResult<Vec<CreateExecutorAction>> {
        if self.state == StrategyState::Paused {
            return Ok(Vec::new());
        }

        let feeder = &self.config.price_feeder_connector_name;
        let pair = &self.config.trading_pair;
        let mid = host
            .mid_price(feeder, pair)
            .ok_or_else(|| MmError::MidPriceUnavailable {
                connector: feeder.clone(),
                trading_pair: pair.clone(),
            })?;

        if !mid.is_positive() {
            if self.state != StrategyState::Error {
                warn!(%mid, "Non-positive mid price, halting quotes");
            }
            self.state = StrategyState::Error;
            return Err(MmError::InvalidMidPrice(mid));
        }
        if self.state == StrategyState::Error {
            info!(%mid, "Mid price recovered, resuming quotes");
            self.state = StrategyState::Opening;
        }

        let now_ms = host.current_timestamp_ms();
        let ladder = self.plan_ladder(mid);

        let actions: Vec<_> = ladder
            .rungs
            .iter()
            .map(|rung| CreateExecutorAction {
                executor_config: PositionExecutorConfig {
                    timestamp_ms: now_ms,
                    trading_pair: self.config.trading_pair.clone(),
                    connector_name: self.config.market_maker_connector_name.clone(),
                    side: rung.side,
                    amount: self.config.order_amount(),
                    entry_price: rung.price,
                    triple_barrier: self.config.triple_barrier_config(),
                    leverage: self.config.leverage,
                },
            })
            .collect();

        self.last_trade_timestamp_ms = now_ms;
        self.state = StrategyState::Paused;

        info!(
            %mid,
            up = %ladder.anchors.up,
            down = %ladder.anchors.down,
            order_price = %ladder.order_price,
            count = actions.len(),
            "Ladder burst proposed"
        );
        Ok(actions)
    }

    fn refresh_due(&self, now_ms: u64) -> bool {
        let window_end = self
            .last_trade_timestamp_ms
            .saturating_add(self.config.refresh_window_ms());
        match self.config.stop_timing {
            StopTiming::WithinWindow => window_end >= now_ms,
            StopTiming::AfterWindow => now_ms >= window_end,
        }
    }

    /// Stop resting, unfilled executors once the refresh check passes.
    ///
    /// Engaged positions (`is_trading`) are left to the host's exit policy.
    pub fn stop_actions_proposal<H: StrategyHost + ?Sized>(
        &mut self,
        host: &H,
    ) -> Vec<StopExecutorAction> {
        if self.state != StrategyState::Paused {
            return Vec::new();
        }
        let now_ms = host.current_timestamp_ms();
        if !self.refresh_due(now_ms) {
            return Vec::new();
        }

        let selected = filter_executors(host.executors(), ExecutorInfo::is_resting_unfilled);
        let actions: Vec<_> = selected
            .into_iter()
            .map(|e| {
                debug!(
                    executor_id = %e.id,
                    side = %e.config.side,
                    price = %e.config.entry_price,
                    "Stopping resting executor"
                );
                StopExecutorAction { executor_id: e.id }
            })
            .collect();

        self.state = StrategyState::Opening;
        info!(count = actions.len(), "Refresh: stop actions proposed");
        actions
    }
}
