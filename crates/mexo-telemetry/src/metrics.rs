//! Prometheus metrics for the ladder market maker.
//!
//! # Panics
//!
//! Metric registration uses `unwrap()`. A registration failure means a
//! duplicate metric name, which is a startup bug. These panics only occur
//! during static initialization.

use mexo_core::OrderSide;
use once_cell::sync::Lazy;
use prometheus::{
    register_counter, register_counter_vec, register_gauge, register_gauge_vec, Counter,
    CounterVec, Encoder, Gauge, GaugeVec, TextEncoder,
};

use crate::error::{TelemetryError, TelemetryResult};

/// Ladder bursts emitted.
pub static BURSTS_TOTAL: Lazy<Counter> = Lazy::new(|| {
    register_counter!("mexo_ladder_bursts_total", "Total ladder bursts emitted").unwrap()
});

/// Executors proposed, by side.
pub static EXECUTORS_PROPOSED_TOTAL: Lazy<CounterVec> = Lazy::new(|| {
    register_counter_vec!(
        "mexo_executors_proposed_total",
        "Total executors proposed by the ladder",
        &["side"]
    )
    .unwrap()
});

/// Resting executors stopped on refresh.
pub static EXECUTORS_STOPPED_TOTAL: Lazy<Counter> = Lazy::new(|| {
    register_counter!(
        "mexo_executors_stopped_total",
        "Total resting executors stopped on refresh"
    )
    .unwrap()
});

/// Proposal failures, by reason.
pub static PROPOSAL_ERRORS_TOTAL: Lazy<CounterVec> = Lazy::new(|| {
    register_counter_vec!(
        "mexo_proposal_errors_total",
        "Total failed create proposals",
        &["reason"]
    )
    .unwrap()
});

/// Last mid price read from the feeder.
pub static MID_PRICE: Lazy<Gauge> =
    Lazy::new(|| register_gauge!("mexo_mid_price", "Last observed mid price").unwrap());

/// Strategy state (1 = current, 0 = not).
pub static STRATEGY_STATE: Lazy<GaugeVec> = Lazy::new(|| {
    register_gauge_vec!(
        "mexo_strategy_state",
        "Ladder strategy state (1=active)",
        &["state"]
    )
    .unwrap()
});

const STATES: [&str; 3] = ["opening", "paused", "error"];

/// Metrics facade.
pub struct Metrics;

impl Metrics {
    pub fn burst(mid_price: f64) {
        BURSTS_TOTAL.inc();
        MID_PRICE.set(mid_price);
    }

    pub fn executor_proposed(side: OrderSide) {
        EXECUTORS_PROPOSED_TOTAL
            .with_label_values(&[side.as_str()])
            .inc();
    }

    pub fn executors_stopped(count: usize) {
        EXECUTORS_STOPPED_TOTAL.inc_by(count as f64);
    }

    pub fn proposal_error(reason: &str) {
        PROPOSAL_ERRORS_TOTAL.with_label_values(&[reason]).inc();
    }

    /// Only the active state is set to 1.
    pub fn strategy_state(state: &str) {
        for s in STATES {
            STRATEGY_STATE.with_label_values(&[s]).set(0.0);
        }
        STRATEGY_STATE.with_label_values(&[state]).set(1.0);
    }

    /// Render the default registry in Prometheus text format.
    pub fn gather_text() -> TelemetryResult<String> {
        let mut buf = Vec::new();
        TextEncoder::new()
            .encode(&prometheus::gather(), &mut buf)
            .map_err(|e| TelemetryError::Metrics(e.to_string()))?;
        String::from_utf8(buf).map_err(|e| TelemetryError::Metrics(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_proposed_counter_by_side() {
        let before = EXECUTORS_PROPOSED_TOTAL.with_label_values(&["BUY"]).get();
        Metrics::executor_proposed(OrderSide::Buy);
        Metrics::executor_proposed(OrderSide::Buy);
        let after = EXECUTORS_PROPOSED_TOTAL.with_label_values(&["BUY"]).get();
        assert_eq!(after - before, 2.0);
    }

    #[test]
    fn test_strategy_state_is_exclusive() {
        Metrics::strategy_state("paused");
        assert_eq!(STRATEGY_STATE.with_label_values(&["paused"]).get(), 1.0);
        assert_eq!(STRATEGY_STATE.with_label_values(&["opening"]).get(), 0.0);
        assert_eq!(STRATEGY_STATE.with_label_values(&["error"]).get(), 0.0);
    }

    #[test]
    fn test_gather_text_contains_registered_metrics() {
        Metrics::burst(10.0);
        Metrics::executors_stopped(3);
        let text = Metrics::gather_text().unwrap();
        assert!(text.contains("mexo_ladder_bursts_total"));
        assert!(text.contains("mexo_executors_stopped_total"));
        assert!(text.contains("mexo_mid_price"));
    }
}
