//! HTTP response building
//!
//! JSON response builders decoupled from handler logic. Builders never
//! panic; a build failure falls back to a bare response.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use serde_json::{json, Value};

use crate::error::HandlerError;
use crate::logger;
use crate::request::ApiResponse;

/// Serialize a JSON value into a hyper response with the given status.
pub fn build_json_response(status: StatusCode, body: &Value) -> Response<Full<Bytes>> {
    Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .body(Full::new(Bytes::from(body.to_string())))
        .unwrap_or_else(|e| {
            logger::log_build_error(status.as_u16(), &e);
            Response::new(Full::new(Bytes::from("{}")))
        })
}

/// Fallback response for requests matching no route.
pub fn not_found() -> ApiResponse {
    ApiResponse::with_status(StatusCode::NOT_FOUND, json!({ "error": "Route not found" }))
}

/// Response for a failed stage or handler. The failure message is the only
/// detail exposed to the client.
pub fn internal_error(err: &HandlerError) -> ApiResponse {
    ApiResponse::with_status(
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({
            "error": "Something went wrong!",
            "message": err.to_string(),
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_shape() {
        let resp = not_found();
        assert_eq!(resp.status, StatusCode::NOT_FOUND);
        assert_eq!(resp.body, json!({ "error": "Route not found" }));
    }

    #[test]
    fn test_internal_error_carries_failure_message() {
        let err = HandlerError::Parse("invalid JSON body: trailing comma".to_string());
        let resp = internal_error(&err);
        assert_eq!(resp.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(resp.body["error"], "Something went wrong!");
        assert_eq!(resp.body["message"], "invalid JSON body: trailing comma");
    }
}
