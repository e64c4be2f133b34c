//! Dozenal face simulator
//!
//! Runs the dozenal watch face (and the plain clock face) on the desktop.
//! The host wall clock stands in for the RTC and the segment display is
//! drawn as a single terminal line.

use std::path::PathBuf;

use anyhow::Context;
use chrono::NaiveTime;
use clap::Parser;
use embassy_executor::Spawner;
use tracing::info;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt::SubscriberBuilder;

mod clock;
mod config;
mod render;
mod tasks;

use crate::config::SimConfig;
use crate::tasks::WatchSettings;

#[derive(Parser)]
#[command(name = "dozenal-sim")]
#[command(about = "Dozenal watch face simulator", long_about = None)]
struct Cli {
    /// Configuration file (defaults to the embedded dozenal.toml)
    #[arg(short, long, env = "DOZENAL_CONFIG")]
    config: Option<PathBuf>,
    /// Start the clock at this time of day (HH:MM:SS)
    #[arg(long, value_parser = parse_start)]
    start: Option<NaiveTime>,
    /// Face to show first (0 = dozenal, 1 = clock)
    #[arg(long, default_value_t = 0)]
    face: usize,
    /// Exit after this many ticks
    #[arg(long)]
    ticks: Option<u64>,
    /// Log level when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn parse_start(value: &str) -> Result<NaiveTime, String> {
    NaiveTime::parse_from_str(value, "%H:%M:%S").map_err(|e| e.to_string())
}

/// Initializes the tracing subscriber (logs go to stderr)
fn init_tracing(level: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    SubscriberBuilder::default()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!(err))?;

    Ok(())
}

fn prepare(cli: Cli) -> anyhow::Result<WatchSettings> {
    init_tracing(&cli.log_level)?;

    let config = SimConfig::load(cli.config.as_deref()).context("loading configuration")?;
    info!(
        "Face config: {} Hz, offset {}, subdigit {}",
        config.face.tick_rate.hz(),
        config.face.display_offset,
        config.face.show_subdigit
    );

    Ok(WatchSettings {
        config,
        start: cli.start,
        start_face: cli.face,
        tick_limit: cli.ticks,
    })
}

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let settings = match prepare(Cli::parse()) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("error: {:#}", e);
            std::process::exit(1);
        }
    };

    info!("Dozenal simulator starting...");
    spawner.spawn(tasks::watch_task(settings)).unwrap();
}
