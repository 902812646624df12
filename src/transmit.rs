// CLASSIFICATION: COMMUNITY
// Filename: transmit.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-18

//! Outbound delivery of readings.

use log::{debug, info};
use ureq::Agent;

use crate::error::TransmitFailure;
use crate::reading::Reading;

/// Sink for readings produced by the loop.
pub trait Transmitter {
    /// Deliver one reading, best-effort.
    fn send(&mut self, reading: &Reading) -> Result<(), TransmitFailure>;
}

impl<T: Transmitter + ?Sized> Transmitter for Box<T> {
    fn send(&mut self, reading: &Reading) -> Result<(), TransmitFailure> {
        (**self).send(reading)
    }
}

/// POSTs each reading as JSON to a fixed endpoint.
///
/// The response status is never inspected: a 4xx/5xx reply counts as sent and
/// only its body is logged.
pub struct HttpTransmitter {
    agent: Agent,
    endpoint: String,
}

impl HttpTransmitter {
    /// Create a transmitter with a default agent.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_agent(Agent::new(), endpoint)
    }

    /// Create a transmitter around an existing agent.
    pub fn with_agent(agent: Agent, endpoint: impl Into<String>) -> Self {
        Self {
            agent,
            endpoint: endpoint.into(),
        }
    }

    /// URL readings are POSTed to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Transmitter for HttpTransmitter {
    fn send(&mut self, reading: &Reading) -> Result<(), TransmitFailure> {
        let body = reading.to_json()?;
        debug!("POST {} {}", self.endpoint, body);
        let response = match self
            .agent
            .post(&self.endpoint)
            .set("Content-Type", "application/json")
            .send_string(&body)
        {
            Ok(resp) => resp,
            Err(ureq::Error::Status(_, resp)) => resp,
            Err(e) => return Err(TransmitFailure::Transport(e.to_string())),
        };
        let text = response.into_string().map_err(TransmitFailure::Body)?;
        info!("Data sent to backend: {}", text);
        Ok(())
    }
}
