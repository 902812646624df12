// CLASSIFICATION: COMMUNITY
// Filename: dhtrelay.rs v0.1
// Date Modified: 2026-10-18
// Author: Lukas Bower

use clap::Parser;
use dht_relay::binlib::{init_logging, relay_main::{run, Cli}};

fn main() {
    init_logging();
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}
