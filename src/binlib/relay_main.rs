// CLASSIFICATION: COMMUNITY
// Filename: relay_main.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-18

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use crate::config::{RelayConfig, Settings};
use crate::driver::LoopDriver;
use crate::sensor::IioDht22;
use crate::transmit::HttpTransmitter;

/// CLI arguments for `dhtrelay`.
#[derive(Parser, Debug)]
#[command(
    name = "dhtrelay",
    about = "Forward DHT22 readings to an HTTP endpoint",
    version = "0.1"
)]
pub struct Cli {
    /// TOML settings file.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// URL readings are POSTed to.
    #[arg(long)]
    pub endpoint: Option<String>,
    /// Seconds between cycles.
    #[arg(long)]
    pub interval: Option<u64>,
    /// IIO device directory of the sensor.
    #[arg(long)]
    pub device: Option<PathBuf>,
    /// Root scanned for a dht11 IIO device.
    #[arg(long)]
    pub iio_root: Option<PathBuf>,
    /// Stop after this many cycles instead of running forever.
    #[arg(long)]
    pub cycles: Option<usize>,
}

/// Merge the settings file with command line overrides.
pub fn resolve(cli: &Cli) -> Result<RelayConfig> {
    let mut cfg = Settings::load_or_default(cli.config.as_deref())?.relay;
    if let Some(endpoint) = &cli.endpoint {
        cfg.endpoint = endpoint.clone();
    }
    if let Some(secs) = cli.interval {
        cfg.interval_secs = secs;
    }
    if let Some(device) = &cli.device {
        cfg.device = Some(device.clone());
    }
    if let Some(root) = &cli.iio_root {
        cfg.iio_root = root.clone();
    }
    cfg.validate()?;
    Ok(cfg)
}

/// Execute the relay.
pub fn run(cli: Cli) -> Result<()> {
    let cfg = resolve(&cli)?;
    let sensor = match &cfg.device {
        Some(dir) => IioDht22::open(dir),
        None => IioDht22::discover(&cfg.iio_root),
    }
    .context("no usable DHT22 sensor")?;
    let device = sensor.device().to_path_buf();
    let transmitter = HttpTransmitter::new(cfg.endpoint.clone());
    info!(
        "relaying {} -> {} every {:?}",
        device.display(),
        transmitter.endpoint(),
        cfg.interval()
    );
    let mut driver = LoopDriver::new(sensor, transmitter, cfg.interval());
    match cli.cycles {
        Some(n) => {
            let tally = driver.run_cycles(n);
            info!(
                "{}/{} cycles delivered ({} dropped, {} skipped)",
                tally.delivered,
                tally.total(),
                tally.dropped,
                tally.skipped
            );
            Ok(())
        }
        None => driver.run(),
    }
}
