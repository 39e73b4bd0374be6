//! Request/response model
//!
//! Handlers operate on an already-collected request (`ApiRequest`) and
//! produce a status code plus JSON body (`ApiResponse`). Conversion to a
//! hyper response happens once, at the connection boundary.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Response, StatusCode};
use serde_json::Value;

use crate::response;

pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub content_type: Option<String>,
    pub raw_body: Bytes,
    /// Structured body attached by the body-parsing stage, absent otherwise.
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn new(
        method: Method,
        path: &str,
        content_type: Option<String>,
        raw_body: Bytes,
    ) -> Self {
        Self {
            method,
            path: path.to_string(),
            content_type,
            raw_body,
            body: None,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl ApiResponse {
    pub fn ok(body: Value) -> Self {
        Self {
            status: StatusCode::OK,
            body,
        }
    }

    pub const fn with_status(status: StatusCode, body: Value) -> Self {
        Self { status, body }
    }

    pub fn into_hyper(self) -> Response<Full<Bytes>> {
        response::build_json_response(self.status, &self.body)
    }
}
