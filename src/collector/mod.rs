// CLASSIFICATION: COMMUNITY
// Filename: mod.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-18

//! HTTP collector receiving relay readings.
//!
//! `POST /data` (or `/api/data`) stores a reading, `GET` on the same paths
//! returns the latest [`RECENT_LIMIT`] entries newest first.

pub mod store;

pub use store::{ReadingStore, StoredReading};

use std::io::Read;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use chrono::Utc;
use log::{info, warn};
use serde_json::Value;
use tiny_http::{Header, Method, Request, Response, Server};

use crate::config::CollectorConfig;
use crate::error::CollectorError;
use crate::reading::Reading;

/// Entries returned by a `GET`.
pub const RECENT_LIMIT: usize = 20;

const MAX_BODY: u64 = 4096;

/// Status, body and whether the body is JSON.
#[derive(Debug, PartialEq)]
pub struct Reply {
    pub status: u16,
    pub body: String,
    pub json: bool,
}

impl Reply {
    fn text(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.into(),
            json: false,
        }
    }
}

/// Collector bound to a listening socket.
pub struct Collector {
    server: Server,
    store: Arc<Mutex<ReadingStore>>,
}

impl Collector {
    pub fn bind(config: &CollectorConfig) -> Result<Self, CollectorError> {
        let server = Server::http(config.listen.as_str()).map_err(|e| CollectorError::Bind {
            addr: config.listen.clone(),
            reason: e.to_string(),
        })?;
        let store = ReadingStore::new(config.device_tag.clone(), config.capacity);
        info!("collector listening on {}", config.listen);
        Ok(Self {
            server,
            store: Arc::new(Mutex::new(store)),
        })
    }

    /// Bound address, useful when listening on port 0.
    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.server.server_addr().to_ip()
    }

    pub fn store(&self) -> Arc<Mutex<ReadingStore>> {
        Arc::clone(&self.store)
    }

    /// Serve requests until the listener shuts down.
    pub fn serve(&self) {
        for req in self.server.incoming_requests() {
            self.handle(req);
        }
    }

    /// Serve exactly `n` requests.
    pub fn serve_requests(&self, n: usize) {
        for _ in 0..n {
            match self.server.recv() {
                Ok(req) => self.handle(req),
                Err(e) => {
                    warn!("collector recv failed: {}", e);
                    return;
                }
            }
        }
    }

    fn handle(&self, mut req: Request) {
        let body = if *req.method() == Method::Post {
            read_body(req.as_reader())
        } else {
            Ok(String::new())
        };
        let reply = match body {
            Ok(body) => route(&self.store, req.method(), req.url(), &body),
            Err(reply) => reply,
        };
        let mut response = Response::from_string(reply.body).with_status_code(reply.status);
        if reply.json {
            if let Ok(h) = Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..]) {
                response = response.with_header(h);
            }
        }
        if let Err(e) = req.respond(response) {
            warn!("failed to send response: {}", e);
        }
    }
}

/// Read a POST body of at most [`MAX_BODY`] bytes.
///
/// Oversize bodies are refused with 413 and unreadable ones with 400; neither
/// reaches the router.
fn read_body(reader: impl Read) -> Result<String, Reply> {
    let mut raw = Vec::new();
    if let Err(e) = reader.take(MAX_BODY + 1).read_to_end(&mut raw) {
        warn!("failed to read request body: {}", e);
        return Err(Reply::text(400, "Invalid data"));
    }
    if raw.len() as u64 > MAX_BODY {
        warn!("request body exceeds {} bytes", MAX_BODY);
        return Err(Reply::text(413, "Payload too large"));
    }
    String::from_utf8(raw).map_err(|_| Reply::text(400, "Invalid data"))
}

/// Dispatch one request against the store.
pub fn route(store: &Mutex<ReadingStore>, method: &Method, url: &str, body: &str) -> Reply {
    let path = url.split('?').next().unwrap_or(url);
    if path != "/data" && path != "/api/data" {
        return Reply::text(404, "Not found");
    }
    match method {
        Method::Post => store_reading(store, body),
        Method::Get => list_recent(store),
        _ => Reply::text(405, "Method not allowed"),
    }
}

fn store_reading(store: &Mutex<ReadingStore>, body: &str) -> Reply {
    let reading = match parse_reading(body) {
        Some(r) => r,
        None => return Reply::text(400, "Invalid data"),
    };
    let mut guard = match store.lock() {
        Ok(g) => g,
        Err(_) => return Reply::text(500, &CollectorError::LockPoisoned.to_string()),
    };
    guard.push(reading, Utc::now());
    info!(
        "Received: Temp={}, Humidity={}",
        reading.temperature, reading.humidity
    );
    Reply::text(200, "Data stored successfully")
}

fn list_recent(store: &Mutex<ReadingStore>) -> Reply {
    let recent = match store.lock() {
        Ok(g) => g.recent(RECENT_LIMIT),
        Err(_) => return Reply::text(500, &CollectorError::LockPoisoned.to_string()),
    };
    match serde_json::to_string(&recent) {
        Ok(body) => Reply {
            status: 200,
            body,
            json: true,
        },
        Err(e) => Reply::text(500, &e.to_string()),
    }
}

/// Both fields must be present and numeric.
fn parse_reading(body: &str) -> Option<Reading> {
    let value: Value = serde_json::from_str(body).ok()?;
    let temperature = value.get("temperature")?.as_f64()?;
    let humidity = value.get("humidity")?.as_f64()?;
    Reading::new(temperature, humidity)
}
