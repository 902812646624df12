// CLASSIFICATION: COMMUNITY
// Filename: iio.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-18

//! DHT22 exposed through the Linux IIO subsystem.
//!
//! The kernel `dht11` driver (which also drives the DHT22) binds the sensor to
//! one GPIO pin and publishes it as `/sys/bus/iio/devices/iio:deviceN`.
//! Reading `in_temp_input` or `in_humidityrelative_input` triggers a
//! measurement; values are in milli-degrees and milli-percent. A corrupt frame
//! or bad checksum surfaces as `EIO`, a missing response as `ETIMEDOUT`.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, info};

use super::SensorReader;
use crate::error::SensorReadFailure;
use crate::reading::Reading;

/// Default sysfs root for IIO devices.
pub const IIO_ROOT: &str = "/sys/bus/iio/devices";

const DRIVER_NAME: &str = "dht11";
const TEMP_FILE: &str = "in_temp_input";
const HUMIDITY_FILE: &str = "in_humidityrelative_input";

const TEMP_RANGE: (f64, f64) = (-40.0, 80.0);
const HUMIDITY_RANGE: (f64, f64) = (0.0, 100.0);

/// DHT22 sensor handle backed by an IIO sysfs directory.
#[derive(Debug)]
pub struct IioDht22 {
    device: PathBuf,
}

impl IioDht22 {
    /// Bind to an explicit device directory.
    pub fn open(device: impl Into<PathBuf>) -> Result<Self, SensorReadFailure> {
        let device = device.into();
        if !device.is_dir() {
            return Err(SensorReadFailure::DeviceMissing(device));
        }
        info!("using dht sensor at {}", device.display());
        Ok(Self { device })
    }

    /// Find the first `dht11` IIO device under `root`.
    pub fn discover(root: &Path) -> Result<Self, SensorReadFailure> {
        let entries =
            fs::read_dir(root).map_err(|_| SensorReadFailure::NoDevice(root.to_path_buf()))?;
        let mut candidates: Vec<PathBuf> = entries
            .flatten()
            .map(|e| e.path())
            .filter(|p| {
                p.file_name()
                    .and_then(|n| n.to_str())
                    .map(|n| n.starts_with("iio:device"))
                    .unwrap_or(false)
            })
            .collect();
        candidates.sort();
        for dir in candidates {
            let name = fs::read_to_string(dir.join("name")).unwrap_or_default();
            debug!("iio candidate {} name={:?}", dir.display(), name.trim());
            if name.trim().starts_with(DRIVER_NAME) {
                return Self::open(dir);
            }
        }
        Err(SensorReadFailure::NoDevice(root.to_path_buf()))
    }

    /// Sysfs directory of the bound device.
    pub fn device(&self) -> &Path {
        &self.device
    }

    fn read_milli(&self, file: &str) -> Result<f64, SensorReadFailure> {
        let path = self.device.join(file);
        let text = fs::read_to_string(&path).map_err(|e| map_io_error(&path, e))?;
        let milli: f64 = text
            .trim()
            .parse()
            .map_err(|_| SensorReadFailure::InvalidData(text.trim().to_string()))?;
        Ok(milli / 1000.0)
    }
}

impl SensorReader for IioDht22 {
    fn read(&mut self) -> Result<Reading, SensorReadFailure> {
        let temperature = self.read_milli(TEMP_FILE)?;
        let humidity = self.read_milli(HUMIDITY_FILE)?;
        let in_range = (TEMP_RANGE.0..=TEMP_RANGE.1).contains(&temperature)
            && (HUMIDITY_RANGE.0..=HUMIDITY_RANGE.1).contains(&humidity);
        if !in_range {
            return Err(SensorReadFailure::OutOfRange {
                temperature,
                humidity,
            });
        }
        Reading::new(temperature, humidity).ok_or_else(|| {
            SensorReadFailure::InvalidData(format!("{temperature}/{humidity}"))
        })
    }
}

/// Translate a sysfs read error into a sensor failure.
pub(crate) fn map_io_error(path: &Path, err: io::Error) -> SensorReadFailure {
    match err.raw_os_error() {
        Some(libc::EIO) => SensorReadFailure::Checksum,
        Some(libc::ETIMEDOUT) => SensorReadFailure::Timeout,
        Some(libc::ENOENT) | Some(libc::ENODEV) => {
            SensorReadFailure::DeviceMissing(path.to_path_buf())
        }
        _ if err.kind() == io::ErrorKind::TimedOut => SensorReadFailure::Timeout,
        _ => SensorReadFailure::Hardware(err),
    }
}
