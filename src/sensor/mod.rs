// CLASSIFICATION: COMMUNITY
// Filename: mod.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-18

//! Sensor readers.

pub mod iio;

pub use iio::IioDht22;

use crate::error::SensorReadFailure;
use crate::reading::Reading;

/// Source of temperature/humidity samples.
pub trait SensorReader {
    /// Trigger one measurement. A failure means no reading this cycle.
    fn read(&mut self) -> Result<Reading, SensorReadFailure>;
}

impl<S: SensorReader + ?Sized> SensorReader for Box<S> {
    fn read(&mut self) -> Result<Reading, SensorReadFailure> {
        (**self).read()
    }
}
