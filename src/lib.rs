// CLASSIFICATION: COMMUNITY
// Filename: lib.rs v0.1
// Date Modified: 2026-10-18
// Author: Lukas Bower

//! DHT22 relay: read temperature/humidity, POST it as JSON, sleep, repeat.
//!
//! The companion collector receives those POSTs and serves recent readings.

/// Paired temperature/humidity sample.
pub mod reading;

/// Error types for sensor, transmit, config and collector.
pub mod error;

/// Sensor readers (Linux IIO DHT22).
pub mod sensor;

/// HTTP transmitter.
pub mod transmit;

/// Relay loop driver.
pub mod driver;

/// TOML settings with literal defaults.
pub mod config;

/// HTTP collector and its in-memory store.
pub mod collector;

/// Library wrappers for the binaries.
pub mod binlib;

pub use driver::{CycleOutcome, CycleTally, LoopDriver, Pause, ThreadPause};
pub use error::{ConfigError, SensorReadFailure, TransmitFailure};
pub use reading::Reading;
pub use sensor::SensorReader;
pub use transmit::{HttpTransmitter, Transmitter};
