//! TCP serving
//!
//! Listener setup and per-connection handling. Each accepted connection is
//! served on the current thread's `LocalSet`; the request pipeline runs
//! after the full body has been collected, so stages and handlers never
//! touch the wire.

use http_body_util::{BodyExt, Full};
use hyper::body::{Bytes, Incoming};
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Request, Response};
use hyper_util::rt::TokioIo;
use socket2::{Domain, Protocol, Socket, Type};
use std::convert::Infallible;
use std::sync::Arc;
use tokio::net::TcpListener;

use crate::config::Config;
use crate::error::HandlerError;
use crate::logger;
use crate::middleware;
use crate::request::{ApiRequest, ApiResponse};
use crate::response;
use crate::router;

/// Largest request body accepted, checked against Content-Length before
/// the body is collected.
const MAX_BODY_SIZE: u64 = 1_048_576;

/// Create a `TcpListener` with `SO_REUSEPORT` and `SO_REUSEADDR` enabled.
///
/// Allows rebinding the port immediately after a restart instead of waiting
/// out TIME_WAIT.
pub fn create_reusable_listener(addr: std::net::SocketAddr) -> std::io::Result<TcpListener> {
    let domain = if addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };

    let socket = Socket::new(domain, Type::STREAM, Some(Protocol::TCP))?;
    socket.set_reuse_port(true)?;
    socket.set_reuse_address(true)?;

    // Non-blocking mode for async compatibility
    socket.set_nonblocking(true)?;

    socket.bind(&addr.into())?;
    socket.listen(128)?;

    let std_listener: std::net::TcpListener = socket.into();
    TcpListener::from_std(std_listener)
}

/// Accept loop. Runs until the process is terminated; a failed accept is
/// logged and does not stop the loop.
pub async fn run(
    listener: TcpListener,
    config: Arc<Config>,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        match listener.accept().await {
            Ok((stream, _peer_addr)) => handle_connection(stream, Arc::clone(&config)),
            Err(e) => logger::log_error(&format!("Failed to accept connection: {e}")),
        }
    }
}

fn handle_connection(stream: tokio::net::TcpStream, config: Arc<Config>) {
    tokio::task::spawn_local(async move {
        let io = TokioIo::new(stream);

        let conn = http1::Builder::new().serve_connection(
            io,
            service_fn(move |req| {
                let config = Arc::clone(&config);
                async move { handle_request(req, &config).await }
            }),
        );

        if let Err(err) = conn.await {
            logger::log_connection_error(&err);
        }
    });
}

/// Collect the request body, then run the pipeline. Handlers never see a
/// transport error; every failure lands on the JSON 500 path and the
/// connection stays usable for subsequent requests.
async fn handle_request(
    req: Request<Incoming>,
    config: &Config,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let content_type = req
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string);

    let response = match collect_body(req).await {
        Ok(raw_body) => {
            let mut api_req = ApiRequest::new(method, &path, content_type, raw_body);
            run_pipeline(&mut api_req, config)
        }
        Err(err) => {
            logger::log_handler_error(&err);
            response::internal_error(&err)
        }
    };

    Ok(response.into_hyper())
}

/// Apply middleware stages in order, then route. A stage failure
/// short-circuits routing and goes straight to the error response.
fn run_pipeline(req: &mut ApiRequest, config: &Config) -> ApiResponse {
    let result = middleware::apply_stages(req).and_then(|()| router::dispatch(req, config));

    match result {
        Ok(resp) => resp,
        Err(err) => {
            logger::log_handler_error(&err);
            response::internal_error(&err)
        }
    }
}

async fn collect_body(req: Request<Incoming>) -> Result<Bytes, HandlerError> {
    check_body_limit(declared_content_length(&req))?;

    req.collect()
        .await
        .map(http_body_util::Collected::to_bytes)
        .map_err(|e| HandlerError::Body(format!("failed to read request body: {e}")))
}

/// Reject a request whose declared Content-Length exceeds the cap. An
/// absent or unparsable declaration passes; the body is then bounded only
/// by what the client actually sends.
const fn check_body_limit(declared: Option<u64>) -> Result<(), HandlerError> {
    match declared {
        Some(size) if size > MAX_BODY_SIZE => Err(HandlerError::BodyTooLarge {
            size,
            limit: MAX_BODY_SIZE,
        }),
        _ => Ok(()),
    }
}

fn declared_content_length(req: &Request<Incoming>) -> Option<u64> {
    req.headers()
        .get("content-length")?
        .to_str()
        .ok()?
        .parse()
        .ok()
}
