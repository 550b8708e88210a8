//! Ladder strategy configuration.

use mexo_core::{Answers, CoreError, FieldDescriptor, Size, TripleBarrierConfig};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// When resting executors are stopped after a burst.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StopTiming {
    /// Stop while `last_burst + refresh >= now`, i.e. on the first tick
    /// after the burst.
    #[default]
    WithinWindow,
    /// Stop once `now >= last_burst + refresh`, i.e. after the refresh
    /// window has elapsed.
    AfterWindow,
}

/// Ladder strategy configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StrategyConfig {
    /// Connector the mid price is read from.
    #[serde(default = "default_price_feeder_connector_name")]
    pub price_feeder_connector_name: String,

    /// Connector the executors are placed on.
    #[serde(default = "default_market_maker_connector_name")]
    pub market_maker_connector_name: String,

    #[serde(default = "default_trading_pair")]
    pub trading_pair: String,

    #[serde(default = "default_leverage")]
    pub leverage: u32,

    /// Base asset amount per order.
    #[serde(default = "default_order_amount_base")]
    pub order_amount_base: Decimal,

    /// Refresh window in seconds.
    #[serde(default = "default_executor_refresh_time")]
    pub executor_refresh_time: u64,

    /// Price step between ladder levels.
    #[serde(default = "default_spread")]
    pub spread: Decimal,

    /// Ladder levels per side.
    #[serde(default = "default_level")]
    pub level: u32,

    #[serde(default)]
    pub stop_timing: StopTiming,

    /// Place the same-price buy/sell pair at the chosen anchor.
    #[serde(default = "default_true")]
    pub anchor_straddle: bool,
}

impl Default for StrategyConfig {
    fn default() -> Self {
        Self {
            price_feeder_connector_name: default_price_feeder_connector_name(),
            market_maker_connector_name: default_market_maker_connector_name(),
            trading_pair: default_trading_pair(),
            leverage: default_leverage(),
            order_amount_base: default_order_amount_base(),
            executor_refresh_time: default_executor_refresh_time(),
            spread: default_spread(),
            level: default_level(),
            stop_timing: StopTiming::default(),
            anchor_straddle: true,
        }
    }
}

fn default_true() -> bool {
    true
}
fn default_price_feeder_connector_name() -> String {
    "binance".to_string()
}
fn default_market_maker_connector_name() -> String {
    "binance_perpetual_testnet".to_string()
}
fn default_trading_pair() -> String {
    "CFX-USDT".to_string()
}
fn default_leverage() -> u32 {
    1
}
fn default_order_amount_base() -> Decimal {
    Decimal::new(30, 0)
}
fn default_executor_refresh_time() -> u64 {
    20
}
fn default_spread() -> Decimal {
    Decimal::new(1, 4) // 0.0001
}
fn default_level() -> u32 {
    5
}

impl StrategyConfig {
    /// Fields asked for when a new config is created interactively.
    pub const FIELDS: &'static [FieldDescriptor] = &[
        FieldDescriptor::prompted(
            "price_feeder_connector_name",
            "Enter the price feeder connector name:",
        ),
        FieldDescriptor::prompted(
            "market_maker_connector_name",
            "Enter the market maker connector name:",
        ),
        FieldDescriptor::prompted("trading_pair", "Enter the trading_pair:"),
        FieldDescriptor::prompted("leverage", "Enter the leverage (e.g. 20):"),
        FieldDescriptor::prompted(
            "order_amount_base",
            "Enter the amount of base asset to be used per order (e.g. 30):",
        ),
        FieldDescriptor::prompted(
            "executor_refresh_time",
            "Enter the time in seconds to refresh the executor (e.g. 20):",
        ),
        FieldDescriptor::prompted("spread", "Enter the spread (e.g. 0.003):"),
        FieldDescriptor::prompted("level", "Enter the level (e.g. 5):"),
    ];

    /// Overwrite fields from interactively collected answers, then validate.
    pub fn apply_answers(&mut self, answers: &Answers) -> mexo_core::Result<()> {
        if let Some(v) = answers.get("price_feeder_connector_name") {
            self.price_feeder_connector_name = v.to_string();
        }
        if let Some(v) = answers.get("market_maker_connector_name") {
            self.market_maker_connector_name = v.to_string();
        }
        if let Some(v) = answers.get("trading_pair") {
            self.trading_pair = v.to_string();
        }
        if let Some(v) = answers.parse("leverage")? {
            self.leverage = v;
        }
        if let Some(v) = answers.parse("order_amount_base")? {
            self.order_amount_base = v;
        }
        if let Some(v) = answers.parse("executor_refresh_time")? {
            self.executor_refresh_time = v;
        }
        if let Some(v) = answers.parse("spread")? {
            self.spread = v;
        }
        if let Some(v) = answers.parse("level")? {
            self.level = v;
        }
        self.validate()
    }

    /// Enforce the range constraints on every field.
    pub fn validate(&self) -> mexo_core::Result<()> {
        fn invalid(field: &str, reason: &str) -> CoreError {
            CoreError::InvalidField {
                field: field.to_string(),
                reason: reason.to_string(),
            }
        }

        for (field, value) in [
            ("price_feeder_connector_name", &self.price_feeder_connector_name),
            ("market_maker_connector_name", &self.market_maker_connector_name),
            ("trading_pair", &self.trading_pair),
        ] {
            if value.trim().is_empty() {
                return Err(invalid(field, "must not be empty"));
            }
        }
        if self.leverage == 0 {
            return Err(invalid("leverage", "must be greater than 0"));
        }
        if self.order_amount_base <= Decimal::ZERO {
            return Err(invalid("order_amount_base", "must be greater than 0"));
        }
        if self.executor_refresh_time == 0 {
            return Err(invalid("executor_refresh_time", "must be greater than 0"));
        }
        if self.spread <= Decimal::ZERO {
            return Err(invalid("spread", "must be greater than 0"));
        }
        if self.level <= 1 {
            return Err(invalid("level", "must be greater than 1"));
        }
        Ok(())
    }

    pub fn order_amount(&self) -> Size {
        Size::new(self.order_amount_base)
    }

    pub fn refresh_window_ms(&self) -> u64 {
        self.executor_refresh_time.saturating_mul(1000)
    }

    /// Exit policy attached to every executor: limit entry, no barriers.
    pub fn triple_barrier_config(&self) -> TripleBarrierConfig {
        TripleBarrierConfig::limit_entry()
    }
}
