//! Main application orchestration.
//!
//! One tick, in host order:
//! 1. create proposal, then stop proposal, against the same snapshot
//! 2. apply both to the paper host
//! 3. advance the paper clock and step the mid (may fill resting executors)

use std::time::Duration;

use crate::config::AppConfig;
use crate::error::AppResult;
use crate::paper::PaperHost;
use mexo_connector::{credentials, MexoCredentials};
use mexo_core::Price;
use mexo_mm::{LadderStrategy, MmError, RandomAnchor};
use mexo_telemetry::Metrics;
use rust_decimal::prelude::ToPrimitive;
use tracing::{debug, info, warn};

/// What one tick did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    pub created: usize,
    pub stopped: usize,
    pub fills: usize,
}

/// Main application.
pub struct Application {
    config: AppConfig,
    strategy: LadderStrategy<RandomAnchor>,
    host: PaperHost,
    credentials: Option<MexoCredentials>,
    ticks: u64,
}

impl Application {
    /// Validate the config, build the strategy and the paper host.
    pub fn new(config: AppConfig) -> AppResult<Self> {
        config.validate()?;

        let selector = match config.paper.anchor_seed {
            Some(seed) => RandomAnchor::seeded(seed),
            None => RandomAnchor::from_entropy(),
        };
        let strategy = LadderStrategy::with_selector(config.strategy.clone(), selector)?;

        let start_ms = config.paper.start_timestamp_ms.unwrap_or_else(wall_clock_ms);
        let host = PaperHost::new(
            config.strategy.trading_pair.clone(),
            Price::new(config.paper.mid_price),
            start_ms,
        );
        let credentials = load_credentials(&config)?;

        Ok(Self {
            config,
            strategy,
            host,
            credentials,
            ticks: 0,
        })
    }

    /// Use credentials collected interactively.
    pub fn with_credentials(mut self, credentials: MexoCredentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn strategy(&self) -> &LadderStrategy<RandomAnchor> {
        &self.strategy
    }

    pub fn host(&self) -> &PaperHost {
        &self.host
    }

    pub fn credentials(&self) -> Option<&MexoCredentials> {
        self.credentials.as_ref()
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Start the strategy at the paper clock's current time.
    pub fn start(&mut self) {
        let now_ms = self.host.now_ms();
        self.strategy.start(&mut self.host, now_ms);
        Metrics::strategy_state(self.strategy.state().as_str());
    }

    /// Run one tick.
    pub fn tick(&mut self) -> TickReport {
        self.ticks += 1;

        let created = match self.strategy.create_actions_proposal(&self.host) {
            Ok(actions) => actions,
            Err(e) => {
                warn!(error = %e, state = ?self.strategy.state(), "Create proposal failed");
                Metrics::proposal_error(error_reason(&e));
                Vec::new()
            }
        };
        let stops = self.strategy.stop_actions_proposal(&self.host);

        if !created.is_empty() {
            Metrics::burst(self.host.mid().inner().to_f64().unwrap_or_default());
            for action in &created {
                Metrics::executor_proposed(action.executor_config.side);
            }
        }

        let created = self.host.apply_creates(created).len();
        let stopped = self.host.apply_stops(&stops);
        Metrics::executors_stopped(stopped);
        Metrics::strategy_state(self.strategy.state().as_str());

        self.host.advance(self.config.paper.tick_interval_ms);
        let next_mid = Price::new(self.host.mid().inner() + self.config.paper.mid_step);
        let fills = self.host.set_mid(next_mid);

        let report = TickReport {
            created,
            stopped,
            fills,
        };
        debug!(
            tick = self.ticks,
            created,
            stopped,
            fills,
            active = self.host.active_count(),
            mid = %next_mid,
            "Tick"
        );
        report
    }

    fn reached_max_ticks(&self) -> bool {
        self.config
            .paper
            .max_ticks
            .is_some_and(|max| self.ticks >= max)
    }

    /// Tick on a fixed interval until Ctrl-C or the tick limit.
    pub async fn run(&mut self) -> AppResult<()> {
        info!(
            trading_pair = %self.config.strategy.trading_pair,
            maker = %self.config.strategy.market_maker_connector_name,
            tick_interval_ms = self.config.paper.tick_interval_ms,
            max_ticks = ?self.config.paper.max_ticks,
            credentials = self.credentials.is_some(),
            "Starting paper run"
        );
        self.start();

        let mut interval =
            tokio::time::interval(Duration::from_millis(self.config.paper.tick_interval_ms));
        let shutdown = tokio::signal::ctrl_c();
        tokio::pin!(shutdown);

        while !self.reached_max_ticks() {
            tokio::select! {
                _ = interval.tick() => {
                    self.tick();
                }
                result = &mut shutdown => {
                    result?;
                    info!("Shutdown requested");
                    break;
                }
            }
        }

        info!(
            ticks = self.ticks,
            active = self.host.active_count(),
            trading = self.host.trading_count(),
            fees_paid = %self.host.fees_paid(),
            state = self.strategy.state().as_str(),
            "Paper run finished"
        );
        Ok(())
    }
}

fn error_reason(error: &MmError) -> &'static str {
    match error {
        MmError::MidPriceUnavailable { .. } => "mid_price_unavailable",
        MmError::InvalidMidPrice(_) => "invalid_mid_price",
        MmError::Config(_) => "config",
    }
}

fn wall_clock_ms() -> u64 {
    u64::try_from(chrono::Utc::now().timestamp_millis()).unwrap_or_default()
}

/// Credentials for a Mexo maker connector, from the environment.
fn load_credentials(config: &AppConfig) -> AppResult<Option<MexoCredentials>> {
    let maker = &config.strategy.market_maker_connector_name;
    let Ok(domain) = credentials::domain(maker) else {
        return Ok(None);
    };

    match MexoCredentials::from_env(domain) {
        Ok(credentials) => {
            info!(connector = domain.connector, "Connector credentials loaded");
            Ok(Some(credentials))
        }
        Err(e) if config.connector.require_credentials => Err(e.into()),
        Err(e) => {
            warn!(connector = domain.connector, error = %e, "No credentials, paper trading only");
            Ok(None)
        }
    }
}
