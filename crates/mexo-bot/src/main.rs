//! Mexo ladder market maker - paper runtime entry point.

use anyhow::Result;
use clap::Parser;
use mexo_bot::{AppConfig, Application};
use mexo_core::StdioPrompter;
use mexo_telemetry::Metrics;
use rust_decimal::Decimal;
use tracing::{info, warn};

/// Symmetric ladder market maker on a paper host
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Configuration file path (can also be set via MEXO_CONFIG env var)
    #[arg(short, long)]
    config: Option<String>,

    /// Prompt for strategy fields and connector credentials before starting
    #[arg(short, long)]
    interactive: bool,

    /// Stop after this many ticks
    #[arg(long)]
    ticks: Option<u64>,

    /// Initial paper mid price
    #[arg(long)]
    mid_price: Option<Decimal>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    mexo_telemetry::init_logging()?;

    info!("Starting Mexo MM v{}", env!("CARGO_PKG_VERSION"));

    let config_path = AppConfig::resolve_path(args.config);
    info!(config_path = %config_path, "Loading configuration");

    let mut config = match AppConfig::from_file(&config_path) {
        Ok(config) => config,
        Err(e) if args.interactive => {
            warn!(error = %e, "No usable config file, starting from defaults");
            AppConfig::default()
        }
        Err(e) => return Err(e.into()),
    };

    if let Some(ticks) = args.ticks {
        config.paper.max_ticks = Some(ticks);
    }
    if let Some(mid_price) = args.mid_price {
        config.paper.mid_price = mid_price;
    }

    let credentials = if args.interactive {
        let mut prompter = StdioPrompter::terminal();
        config.collect_interactive(&mut prompter)?
    } else {
        None
    };

    let mut app = Application::new(config)?;
    if let Some(credentials) = credentials {
        app = app.with_credentials(credentials);
    }

    app.run().await?;

    if app.config().telemetry.dump_metrics {
        print!("{}", Metrics::gather_text()?);
    }

    Ok(())
}
