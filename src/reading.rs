// CLASSIFICATION: COMMUNITY
// Filename: reading.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-18

//! A single paired temperature/humidity sample.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One DHT22 sample. Both fields are always finite.
///
/// Serializes to the flat wire body `{"temperature": .., "humidity": ..}`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    /// Temperature in degrees Celsius.
    pub temperature: f64,
    /// Relative humidity in percent.
    pub humidity: f64,
}

impl Reading {
    /// Build a reading, or `None` when either value is missing (NaN or infinite).
    pub fn new(temperature: f64, humidity: f64) -> Option<Self> {
        if temperature.is_finite() && humidity.is_finite() {
            Some(Self {
                temperature,
                humidity,
            })
        } else {
            None
        }
    }

    /// Encode as the JSON request body.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "temperature={} humidity={}",
            self.temperature, self.humidity
        )
    }
}
