//! Application configuration.

use crate::error::{AppError, AppResult};
use mexo_connector::{credentials, MexoCredentials};
use mexo_core::{collect_fields, Prompter};
use mexo_mm::StrategyConfig;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Config path used when neither `--config` nor `MEXO_CONFIG` is set.
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Environment variable naming the config file.
pub const CONFIG_ENV_VAR: &str = "MEXO_CONFIG";

/// Paper host settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaperConfig {
    /// Initial mid price served for the trading pair.
    #[serde(default = "default_mid_price")]
    pub mid_price: Decimal,

    /// Added to the mid on every tick.
    #[serde(default)]
    pub mid_step: Decimal,

    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,

    /// Paper clock origin. Wall clock when unset.
    #[serde(default)]
    pub start_timestamp_ms: Option<u64>,

    /// Seed for the anchor coin flip. Entropy when unset.
    #[serde(default)]
    pub anchor_seed: Option<u64>,

    /// Stop after this many ticks. Runs until Ctrl-C when unset.
    #[serde(default)]
    pub max_ticks: Option<u64>,
}

fn default_mid_price() -> Decimal {
    Decimal::ONE
}

fn default_tick_interval_ms() -> u64 {
    1_000
}

impl Default for PaperConfig {
    fn default() -> Self {
        Self {
            mid_price: default_mid_price(),
            mid_step: Decimal::ZERO,
            tick_interval_ms: default_tick_interval_ms(),
            start_timestamp_ms: None,
            anchor_seed: None,
            max_ticks: None,
        }
    }
}

/// Connector credential policy.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConnectorConfig {
    /// Fail startup when a Mexo maker connector has no credentials.
    #[serde(default)]
    pub require_credentials: bool,
}

/// Telemetry settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TelemetryConfig {
    /// Print the Prometheus text exposition at shutdown.
    #[serde(default = "default_true")]
    pub dump_metrics: bool,
}

fn default_true() -> bool {
    true
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self { dump_metrics: true }
    }
}

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub strategy: StrategyConfig,

    #[serde(default)]
    pub paper: PaperConfig,

    #[serde(default)]
    pub connector: ConnectorConfig,

    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Load configuration from file.
    pub fn from_file(path: &str) -> AppResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("Failed to read config {path}: {e}")))?;
        Self::from_toml(&content)
    }

    /// Parse configuration from a TOML document.
    pub fn from_toml(content: &str) -> AppResult<Self> {
        toml::from_str(content)
            .map_err(|e| AppError::Config(format!("Failed to parse config: {e}")))
    }

    /// Resolve the config path: CLI arg > `MEXO_CONFIG` > default.
    pub fn resolve_path(cli_path: Option<String>) -> String {
        cli_path
            .or_else(|| std::env::var(CONFIG_ENV_VAR).ok())
            .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string())
    }

    pub fn validate(&self) -> AppResult<()> {
        self.strategy.validate()?;
        if self.paper.mid_price <= Decimal::ZERO {
            return Err(AppError::Config(
                "paper.mid_price must be greater than 0".to_string(),
            ));
        }
        if self.paper.tick_interval_ms == 0 {
            return Err(AppError::Config(
                "paper.tick_interval_ms must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Ask for the strategy fields, then the maker's credentials when it is
    /// a Mexo domain.
    pub fn collect_interactive(
        &mut self,
        prompter: &mut dyn Prompter,
    ) -> AppResult<Option<MexoCredentials>> {
        let answers = collect_fields(StrategyConfig::FIELDS, prompter)?;
        self.strategy.apply_answers(&answers)?;
        info!(fields = answers.len(), "Strategy fields collected");

        let Ok(domain) = credentials::domain(&self.strategy.market_maker_connector_name) else {
            return Ok(None);
        };
        let answers = collect_fields(domain.fields, prompter)?;
        let credentials = MexoCredentials::from_answers(domain, &answers)?;
        info!(connector = domain.connector, "Connector credentials collected");
        Ok(Some(credentials))
    }
}
