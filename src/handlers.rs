//! Endpoint handlers
//!
//! Each handler is pure with respect to request data: a constant or echoed
//! JSON body, no state shared between requests. Wire shapes stay
//! byte-compatible with the service this one replaces.

use hyper::StatusCode;
use serde::Serialize;
use serde_json::{json, Value};

use crate::config::Config;
use crate::logger;
use crate::request::{ApiRequest, ApiResponse};

#[derive(Debug, Serialize)]
struct DataRecord {
    id: u32,
    name: &'static str,
}

/// Fixed sample data set, rebuilt per call and never mutated.
fn sample_records() -> Vec<DataRecord> {
    vec![
        DataRecord { id: 1, name: "Node Item 1" },
        DataRecord { id: 2, name: "Node Item 2" },
        DataRecord { id: 3, name: "Node Item 3" },
    ]
}

pub fn root(config: &Config) -> ApiResponse {
    ApiResponse::ok(json!({
        "message": "Hello from Node.js Express App!",
        "status": "running",
        "environment": config.environment,
    }))
}

pub fn health() -> ApiResponse {
    ApiResponse::ok(json!({
        "status": "healthy",
        "service": "nodejs-app",
    }))
}

pub fn list_data() -> ApiResponse {
    ApiResponse::ok(json!({ "data": sample_records() }))
}

/// Echo the parsed body back, logging it first. A request without a
/// structured body echoes null.
pub fn receive_data(req: &ApiRequest) -> ApiResponse {
    let data = req.body.clone().unwrap_or(Value::Null);
    logger::log_received_data(&data);

    ApiResponse::with_status(
        StatusCode::CREATED,
        json!({
            "message": "Data received successfully",
            "data": data,
        }),
    )
}

pub fn status(config: &Config) -> ApiResponse {
    let hostname = gethostname::gethostname().to_string_lossy().into_owned();

    ApiResponse::ok(json!({
        "version": env!("CARGO_PKG_VERSION"),
        "hostname": hostname,
        "environment": config.environment,
        "platform": std::env::consts::OS,
        "arch": std::env::consts::ARCH,
    }))
}
