//! Route dispatch
//!
//! Static (method, path) table resolved with a direct match; no runtime
//! registration. A request matching no entry falls through to the 404
//! response.

use hyper::Method;

use crate::config::Config;
use crate::error::HandlerError;
use crate::handlers;
use crate::request::{ApiRequest, ApiResponse};
use crate::response;

pub fn dispatch(req: &ApiRequest, config: &Config) -> Result<ApiResponse, HandlerError> {
    match (&req.method, req.path.as_str()) {
        (&Method::GET, "/") => Ok(handlers::root(config)),
        (&Method::GET, "/health") => Ok(handlers::health()),
        (&Method::GET, "/api/data") => Ok(handlers::list_data()),
        (&Method::POST, "/api/data") => Ok(handlers::receive_data(req)),
        (&Method::GET, "/api/status") => Ok(handlers::status(config)),
        _ => Ok(response::not_found()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hyper::body::Bytes;
    use hyper::StatusCode;
    use serde_json::json;

    fn make_config() -> Config {
        Config {
            port: 3000,
            environment: "test".to_string(),
        }
    }

    fn make_request(method: Method, path: &str) -> ApiRequest {
        ApiRequest::new(method, path, None, Bytes::new())
    }

    #[test]
    fn test_dispatch_known_routes() {
        let cfg = make_config();
        let routes = [
            (Method::GET, "/", StatusCode::OK),
            (Method::GET, "/health", StatusCode::OK),
            (Method::GET, "/api/data", StatusCode::OK),
            (Method::POST, "/api/data", StatusCode::CREATED),
            (Method::GET, "/api/status", StatusCode::OK),
        ];

        for (method, path, expected) in routes {
            let req = make_request(method.clone(), path);
            let resp = dispatch(&req, &cfg).expect("known routes do not fail");
            assert_eq!(resp.status, expected, "{method} {path}");
        }
    }

    #[test]
    fn test_unknown_path_is_404() {
        let cfg = make_config();
        let req = make_request(Method::GET, "/unknown/path");
        let resp = dispatch(&req, &cfg).expect("route miss is not a handler failure");
        assert_eq!(resp.status, StatusCode::NOT_FOUND);
        assert_eq!(resp.body, json!({ "error": "Route not found" }));
    }

    #[test]
    fn test_method_participates_in_match() {
        let cfg = make_config();

        let req = make_request(Method::POST, "/");
        let resp = dispatch(&req, &cfg).expect("route miss is not a handler failure");
        assert_eq!(resp.status, StatusCode::NOT_FOUND);

        let req = make_request(Method::DELETE, "/api/data");
        let resp = dispatch(&req, &cfg).expect("route miss is not a handler failure");
        assert_eq!(resp.status, StatusCode::NOT_FOUND);
    }
}
