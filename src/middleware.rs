//! Request pre-processing stages
//!
//! An explicit ordered stage list applied in sequence before routing. A
//! stage may short-circuit the request by returning an error, which the
//! connection layer maps to the 500 error response.

use std::collections::HashMap;

use serde_json::Value;

use crate::error::HandlerError;
use crate::logger;
use crate::request::ApiRequest;

pub type Stage = fn(&mut ApiRequest) -> Result<(), HandlerError>;

/// Stage order matters: a body parse failure must skip the remaining
/// stages and routing entirely.
pub const STAGES: &[Stage] = &[parse_body, log_access];

pub fn apply_stages(req: &mut ApiRequest) -> Result<(), HandlerError> {
    for stage in STAGES {
        stage(req)?;
    }
    Ok(())
}

/// Attach a structured body for JSON and urlencoded-form payloads. Other
/// content types (or no body at all) leave the parsed body absent.
fn parse_body(req: &mut ApiRequest) -> Result<(), HandlerError> {
    if req.raw_body.is_empty() {
        return Ok(());
    }

    let Some(content_type) = req.content_type.as_deref() else {
        return Ok(());
    };
    let content_type = content_type.to_ascii_lowercase();

    if content_type.starts_with("application/json") {
        let value: Value = serde_json::from_slice(&req.raw_body)
            .map_err(|e| HandlerError::Parse(format!("invalid JSON body: {e}")))?;
        req.body = Some(value);
    } else if content_type.starts_with("application/x-www-form-urlencoded") {
        let fields: HashMap<String, String> = serde_urlencoded::from_bytes(&req.raw_body)
            .map_err(|e| HandlerError::Parse(format!("invalid form body: {e}")))?;
        let value = serde_json::to_value(fields)
            .map_err(|e| HandlerError::Parse(format!("invalid form body: {e}")))?;
        req.body = Some(value);
    }

    Ok(())
}

/// Side effect only: never alters the request, never fails it.
fn log_access(req: &mut ApiRequest) -> Result<(), HandlerError> {
    logger::log_access(&req.method, &req.path);
    Ok(())
}
