// CLASSIFICATION: COMMUNITY
// Filename: collect_main.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-18

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::collector::Collector;
use crate::config::{CollectorConfig, Settings};

/// CLI arguments for `dhtcollect`.
#[derive(Parser, Debug)]
#[command(
    name = "dhtcollect",
    about = "Receive and serve DHT22 readings",
    version = "0.1"
)]
pub struct Cli {
    /// TOML settings file.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Address to listen on.
    #[arg(long)]
    pub listen: Option<String>,
    /// Device tag stored with each reading.
    #[arg(long)]
    pub device_tag: Option<String>,
    /// Readings kept in memory.
    #[arg(long)]
    pub capacity: Option<usize>,
}

pub fn resolve(cli: &Cli) -> Result<CollectorConfig> {
    let mut cfg = Settings::load_or_default(cli.config.as_deref())?.collector;
    if let Some(listen) = &cli.listen {
        cfg.listen = listen.clone();
    }
    if let Some(tag) = &cli.device_tag {
        cfg.device_tag = tag.clone();
    }
    if let Some(capacity) = cli.capacity {
        cfg.capacity = capacity;
    }
    cfg.validate()?;
    Ok(cfg)
}

/// Run the collector until the process is stopped.
pub fn run(cli: Cli) -> Result<()> {
    let cfg = resolve(&cli)?;
    let collector = Collector::bind(&cfg)?;
    collector.serve();
    Ok(())
}
