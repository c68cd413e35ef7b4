use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tracing::{info, warn};
use viz_core::config::{DEFAULT_BASE_PATH, DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH};
use viz_core::{AppConfig, DEFAULT_TICK_INTERVAL, TabId, catalog};

mod input;
use input::{parse_tab, parse_tick, parse_window_edge};

#[derive(Parser, Debug)]
#[command(name = "dataviz-studio", about = "Tabbed interactive chart portfolio")]
struct Args {
    /// Prefix for generated asset urls.
    #[arg(long, default_value = DEFAULT_BASE_PATH)]
    base_path: String,

    /// Tab shown at startup (overview, tech-trends, global-impact, growth-analytics, about).
    #[arg(long, value_parser = parse_tab)]
    tab: Option<TabId>,

    /// Animation tick interval in milliseconds.
    #[arg(long = "tick-ms", value_parser = parse_tick)]
    tick: Option<Duration>,

    #[arg(long, value_parser = parse_window_edge, default_value_t = DEFAULT_WINDOW_WIDTH)]
    width: f32,

    #[arg(long, value_parser = parse_window_edge, default_value_t = DEFAULT_WINDOW_HEIGHT)]
    height: f32,

    /// Directory for the per-process log file.
    #[arg(long, default_value = viz_ui::logging::DEFAULT_LOG_DIR)]
    log_dir: PathBuf,

    /// Log filter directive, e.g. `debug` or `info,viz_core=trace`.
    #[arg(long, default_value = "info")]
    log_level: String,
}

impl Args {
    fn into_config(self) -> AppConfig {
        AppConfig {
            initial_tab: self.tab.unwrap_or_else(TabId::first),
            tick_interval: self.tick.unwrap_or(DEFAULT_TICK_INTERVAL),
            window_width: self.width,
            window_height: self.height,
            ..AppConfig::default()
        }
        .with_base_path(&self.base_path)
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let log_file = viz_ui::logging::init(&args.log_dir, &args.log_level);
    if let Some(path) = &log_file {
        info!(path = %path.display(), "logging to file");
    }

    if let Err(err) = catalog::validate() {
        warn!(%err, "chart catalog is inconsistent; affected charts render empty");
    }

    let config = args.into_config();
    info!(
        tab = %config.initial_tab,
        tick_ms = config.tick_interval.as_millis() as u64,
        "starting dashboard"
    );
    viz_ui::launch_dashboard(config);
    Ok(())
}
