// CLASSIFICATION: COMMUNITY
// Filename: dhtcollect.rs v0.1
// Date Modified: 2026-10-18
// Author: Lukas Bower

use clap::Parser;
use dht_relay::binlib::{collect_main::{run, Cli}, init_logging};

fn main() {
    init_logging();
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}
