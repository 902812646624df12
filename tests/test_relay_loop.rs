// CLASSIFICATION: COMMUNITY
// Filename: test_relay_loop.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-18

use std::collections::VecDeque;
use std::io::Read;
use std::ops::ControlFlow;
use std::sync::{Arc, Mutex, Once};
use std::thread;
use std::time::Duration;

use log::{LevelFilter, Log, Metadata, Record};
use serial_test::serial;
use tiny_http::{Response, Server};

use dht_relay::{
    CycleOutcome, HttpTransmitter, LoopDriver, Pause, Reading, SensorReadFailure, SensorReader,
};

static LINES: Mutex<Vec<String>> = Mutex::new(Vec::new());

struct Capture;

impl Log for Capture {
    fn enabled(&self, _: &Metadata) -> bool {
        true
    }
    fn log(&self, record: &Record) {
        if record.target().starts_with("dht_relay") {
            LINES.lock().unwrap().push(record.args().to_string());
        }
    }
    fn flush(&self) {}
}

static LOGGER: Capture = Capture;

fn capture_logs() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        log::set_logger(&LOGGER).unwrap();
        log::set_max_level(LevelFilter::Info);
    });
    LINES.lock().unwrap().clear();
}

fn log_text() -> String {
    LINES.lock().unwrap().join("\n")
}

struct Scripted(VecDeque<Result<Reading, SensorReadFailure>>);

impl SensorReader for Scripted {
    fn read(&mut self) -> Result<Reading, SensorReadFailure> {
        self.0.pop_front().unwrap_or(Err(SensorReadFailure::Timeout))
    }
}

#[derive(Default)]
struct Waits(Vec<Duration>);

impl Pause for Waits {
    fn pause(&mut self, interval: Duration) {
        self.0.push(interval);
    }
}

type Bodies = Arc<Mutex<Vec<String>>>;

fn collecting_server(n: usize) -> Option<(String, Bodies, thread::JoinHandle<()>)> {
    let server = match Server::http("127.0.0.1:0") {
        Ok(s) => s,
        Err(_) => {
            eprintln!("skipping test: cannot bind local port");
            return None;
        }
    };
    let port = server.server_addr().to_ip().unwrap().port();
    let bodies = Arc::new(Mutex::new(Vec::new()));
    let srv_bodies = bodies.clone();
    let handle = thread::spawn(move || {
        for _ in 0..n {
            if let Ok(mut req) = server.recv() {
                let mut body = String::new();
                req.as_reader().read_to_string(&mut body).unwrap();
                srv_bodies.lock().unwrap().push(body);
                let _ = req.respond(Response::from_string("Data stored successfully"));
            }
        }
    });
    Some((format!("http://127.0.0.1:{port}/api/data"), bodies, handle))
}

#[test]
#[serial]
fn reading_is_posted_and_logged() {
    capture_logs();
    let Some((url, bodies, handle)) = collecting_server(1) else {
        return;
    };
    let sensor = Scripted(VecDeque::from(vec![Ok(Reading::new(23.5, 48.2).unwrap())]));
    let mut driver = LoopDriver::with_pause(
        sensor,
        HttpTransmitter::new(url),
        Waits::default(),
        Duration::from_secs(5),
    );
    let tally = driver.run_cycles(1);
    handle.join().unwrap();

    assert_eq!(tally.delivered, 1);
    assert_eq!(
        *bodies.lock().unwrap(),
        vec![r#"{"temperature":23.5,"humidity":48.2}"#.to_string()]
    );
    let text = log_text();
    assert!(text.contains("temperature=23.5 humidity=48.2"), "log output: {text}");
    assert!(text.contains("Data stored successfully"), "log output: {text}");
}

#[test]
#[serial]
fn checksum_error_skips_post_then_retries_after_interval() {
    capture_logs();
    let Some((url, bodies, handle)) = collecting_server(1) else {
        return;
    };
    let sensor = Scripted(VecDeque::from(vec![
        Err(SensorReadFailure::Checksum),
        Ok(Reading::new(19.0, 55.5).unwrap()),
    ]));
    let mut driver = LoopDriver::with_pause(
        sensor,
        HttpTransmitter::new(url),
        Waits::default(),
        Duration::from_secs(60),
    );
    let mut kinds = Vec::new();
    let tally = driver.run_cycles_with(2, |o| {
        kinds.push(match o {
            CycleOutcome::Skipped(SensorReadFailure::Checksum) => "checksum",
            CycleOutcome::Delivered(_) => "delivered",
            _ => "other",
        });
        ControlFlow::Continue(())
    });
    handle.join().unwrap();

    assert_eq!(kinds, vec!["checksum", "delivered"]);
    assert_eq!(tally.total(), 2);
    assert_eq!(bodies.lock().unwrap().len(), 1);
    let (_, _, waits) = driver.into_parts();
    assert_eq!(waits.0, vec![Duration::from_secs(60); 2]);
    assert!(log_text().contains("checksum mismatch"));
}

#[test]
#[serial]
fn unreachable_endpoint_does_not_stop_loop() {
    capture_logs();
    let port = match std::net::TcpListener::bind("127.0.0.1:0") {
        Ok(l) => l.local_addr().unwrap().port(),
        Err(_) => return,
    };
    let sensor = Scripted(VecDeque::from(vec![
        Ok(Reading::new(20.0, 40.0).unwrap()),
        Ok(Reading::new(20.5, 41.0).unwrap()),
    ]));
    let mut driver = LoopDriver::with_pause(
        sensor,
        HttpTransmitter::new(format!("http://127.0.0.1:{port}/api/data")),
        Waits::default(),
        Duration::from_secs(5),
    );
    let tally = driver.run_cycles(2);
    assert_eq!(tally.dropped, 2);
    let (_, _, waits) = driver.into_parts();
    assert_eq!(waits.0.len(), 2);
    assert!(log_text().contains("Error sending data to backend"));
}
