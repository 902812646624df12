// CLASSIFICATION: COMMUNITY
// Filename: driver.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-18

//! Relay loop: read the sensor, forward the reading, wait, repeat.
//!
//! Failures on either side are logged and the cycle still ends with the full
//! interval wait. Nothing is retried or buffered.

use std::ops::ControlFlow;
use std::thread;
use std::time::Duration;

use log::{error, info, warn};

use crate::error::{SensorReadFailure, TransmitFailure};
use crate::reading::Reading;
use crate::sensor::SensorReader;
use crate::transmit::Transmitter;

/// Suspends the loop between cycles.
pub trait Pause {
    fn pause(&mut self, interval: Duration);
}

/// Blocks the current thread.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadPause;

impl Pause for ThreadPause {
    fn pause(&mut self, interval: Duration) {
        thread::sleep(interval);
    }
}

/// Result of a single cycle.
#[derive(Debug)]
pub enum CycleOutcome {
    /// Reading read and handed to the transmitter.
    Delivered(Reading),
    /// Reading read but the transmitter failed; the reading is dropped.
    Dropped(Reading, TransmitFailure),
    /// No reading this cycle; the transmitter was not called.
    Skipped(SensorReadFailure),
}

impl CycleOutcome {
    pub fn is_delivered(&self) -> bool {
        matches!(self, CycleOutcome::Delivered(_))
    }
}

/// Per-outcome counts of a bounded run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CycleTally {
    pub delivered: usize,
    pub dropped: usize,
    pub skipped: usize,
}

impl CycleTally {
    fn record(&mut self, outcome: &CycleOutcome) {
        match outcome {
            CycleOutcome::Delivered(_) => self.delivered += 1,
            CycleOutcome::Dropped(_, _) => self.dropped += 1,
            CycleOutcome::Skipped(_) => self.skipped += 1,
        }
    }

    /// Cycles run.
    pub fn total(&self) -> usize {
        self.delivered + self.dropped + self.skipped
    }
}

/// Owns the sensor, transmitter and pause for the lifetime of the loop.
pub struct LoopDriver<S, T, P = ThreadPause> {
    sensor: S,
    transmitter: T,
    pause: P,
    interval: Duration,
}

impl<S: SensorReader, T: Transmitter> LoopDriver<S, T, ThreadPause> {
    pub fn new(sensor: S, transmitter: T, interval: Duration) -> Self {
        Self::with_pause(sensor, transmitter, ThreadPause, interval)
    }
}

impl<S: SensorReader, T: Transmitter, P: Pause> LoopDriver<S, T, P> {
    pub fn with_pause(sensor: S, transmitter: T, pause: P, interval: Duration) -> Self {
        Self {
            sensor,
            transmitter,
            pause,
            interval,
        }
    }

    /// Wait applied after every cycle.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// One read/send cycle without the trailing wait.
    pub fn step(&mut self) -> CycleOutcome {
        let reading = match self.sensor.read() {
            Ok(r) => r,
            Err(e) => {
                warn!("Error reading sensor: {}", e);
                return CycleOutcome::Skipped(e);
            }
        };
        info!("Sensor Data: {}", reading);
        match self.transmitter.send(&reading) {
            Ok(()) => CycleOutcome::Delivered(reading),
            Err(e) => {
                error!("Error sending data to backend: {}", e);
                CycleOutcome::Dropped(reading, e)
            }
        }
    }

    /// Run `cycles` cycles, each followed by the interval wait.
    pub fn run_cycles(&mut self, cycles: usize) -> CycleTally {
        self.run_cycles_with(cycles, |_| ControlFlow::Continue(()))
    }

    /// Like [`run_cycles`](Self::run_cycles), handing each outcome to `inspect`
    /// before it is dropped. `Break` stops the run after that cycle's wait.
    pub fn run_cycles_with<F>(&mut self, cycles: usize, mut inspect: F) -> CycleTally
    where
        F: FnMut(&CycleOutcome) -> ControlFlow<()>,
    {
        let mut tally = CycleTally::default();
        for _ in 0..cycles {
            let outcome = self.step();
            tally.record(&outcome);
            self.pause.pause(self.interval);
            if inspect(&outcome).is_break() {
                break;
            }
        }
        tally
    }

    /// Run forever.
    pub fn run(&mut self) -> ! {
        info!("relay loop started, interval {:?}", self.interval());
        loop {
            self.step();
            self.pause.pause(self.interval);
        }
    }

    /// Give back the owned parts.
    pub fn into_parts(self) -> (S, T, P) {
        (self.sensor, self.transmitter, self.pause)
    }
}
