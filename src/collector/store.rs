// CLASSIFICATION: COMMUNITY
// Filename: store.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-18

//! Bounded in-memory history of received readings.

use std::collections::VecDeque;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::reading::Reading;

/// A reading as recorded by the collector.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StoredReading {
    /// Receipt time, RFC 3339 UTC.
    pub time: String,
    pub device: String,
    pub temperature: f64,
    pub humidity: f64,
}

/// Oldest entries are evicted once `capacity` is reached.
#[derive(Debug)]
pub struct ReadingStore {
    device_tag: String,
    capacity: usize,
    entries: VecDeque<StoredReading>,
}

impl ReadingStore {
    pub fn new(device_tag: impl Into<String>, capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            device_tag: device_tag.into(),
            capacity,
            entries: VecDeque::with_capacity(capacity.min(1024)),
        }
    }

    /// Record a reading received at `at`.
    pub fn push(&mut self, reading: Reading, at: DateTime<Utc>) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(StoredReading {
            time: at.to_rfc3339_opts(SecondsFormat::Millis, true),
            device: self.device_tag.clone(),
            temperature: reading.temperature,
            humidity: reading.humidity,
        });
    }

    /// Up to `limit` entries, newest first.
    pub fn recent(&self, limit: usize) -> Vec<StoredReading> {
        self.entries.iter().rev().take(limit).cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    #[test]
    fn recent_is_newest_first() {
        let mut store = ReadingStore::new("pi", 10);
        for i in 0..3 {
            store.push(Reading::new(20.0 + i as f64, 40.0).unwrap(), at(i));
        }
        let recent = store.recent(2);
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].temperature, 22.0);
        assert_eq!(recent[1].temperature, 21.0);
        assert_eq!(recent[0].device, "pi");
        assert_eq!(recent[0].time, "1970-01-01T00:00:02.000Z");
    }

    #[test]
    fn evicts_oldest_at_capacity() {
        let mut store = ReadingStore::new("pi", 2);
        for i in 0..5 {
            store.push(Reading::new(i as f64, 50.0).unwrap(), at(i));
        }
        assert_eq!(store.len(), 2);
        let temps: Vec<f64> = store.recent(10).iter().map(|r| r.temperature).collect();
        assert_eq!(temps, vec![4.0, 3.0]);
    }
}
