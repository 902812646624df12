// CLASSIFICATION: COMMUNITY
// Filename: error.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-18

//! Error types shared across the relay and collector.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Why a sensor cycle produced no reading.
#[derive(Debug, Error)]
pub enum SensorReadFailure {
    #[error("sensor timed out")]
    Timeout,
    #[error("checksum mismatch in sensor frame")]
    Checksum,
    #[error("sensor device missing at {0}")]
    DeviceMissing(PathBuf),
    #[error("no dht sensor found under {0}")]
    NoDevice(PathBuf),
    #[error("sensor hardware error: {0}")]
    Hardware(#[source] io::Error),
    #[error("invalid sensor data: {0:?}")]
    InvalidData(String),
    #[error("reading out of range: temperature={temperature} humidity={humidity}")]
    OutOfRange { temperature: f64, humidity: f64 },
}

/// Why a reading could not be delivered.
#[derive(Debug, Error)]
pub enum TransmitFailure {
    #[error("failed to encode reading: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("transport error: {0}")]
    Transport(String),
    #[error("failed to read response body: {0}")]
    Body(#[source] io::Error),
}

/// Configuration loading and validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("endpoint must not be empty")]
    EmptyEndpoint,
    #[error("interval must be at least one second")]
    ZeroInterval,
    #[error("collector capacity must be non-zero")]
    ZeroCapacity,
}

/// Errors raised while starting or running the collector.
#[derive(Debug, Error)]
pub enum CollectorError {
    #[error("cannot bind {addr}: {reason}")]
    Bind { addr: String, reason: String },
    #[error("reading store lock poisoned")]
    LockPoisoned,
}
