//! Logging
//!
//! Access log lines go to stdout, failures to stderr. One access line per
//! request, written before routing.

use chrono::{SecondsFormat, Utc};
use hyper::Method;
use std::net::SocketAddr;

use crate::config::Config;
use crate::error::HandlerError;

pub fn log_server_start(addr: &SocketAddr, config: &Config) {
    println!("======================================");
    println!("Async server started successfully");
    println!("Listening on: http://{addr}");
    println!("Environment: {}", config.environment);
    println!("Using Tokio runtime for concurrency");
    println!("======================================\n");
}

/// One access-log line: ISO-8601 timestamp, method, path.
pub fn log_access(method: &Method, path: &str) {
    println!("{} - {method} {path}", access_timestamp());
}

pub fn log_received_data(body: &serde_json::Value) {
    println!("Received data: {body}");
}

pub fn log_error(message: &str) {
    eprintln!("[ERROR] {message}");
}

pub fn log_handler_error(err: &HandlerError) {
    eprintln!("[ERROR] Request failed: {err:?} ({err})");
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    eprintln!("[ERROR] Failed to serve connection: {err:?}");
}

pub fn log_build_error(status: u16, error: &hyper::http::Error) {
    eprintln!("[ERROR] Failed to build {status} response: {error}");
}

fn access_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
