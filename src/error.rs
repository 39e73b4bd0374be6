//! Request failure types
//!
//! Two failure kinds are terminal for a request: a route miss (produced by
//! the router fallback) and a handler failure, represented here. A
//! `HandlerError` is mapped to the HTTP 500 response by the error stage;
//! its `Display` message is the only detail returned to the client.

use std::fmt;

#[derive(Debug)]
pub enum HandlerError {
    /// Request body could not be parsed (malformed JSON or form encoding).
    Parse(String),
    /// Request body could not be read from the connection.
    Body(String),
    /// Declared Content-Length exceeds the accepted cap.
    BodyTooLarge { size: u64, limit: u64 },
}

impl fmt::Display for HandlerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(msg) | Self::Body(msg) => write!(f, "{msg}"),
            Self::BodyTooLarge { size, limit } => {
                write!(f, "request body too large: {size} bytes (max: {limit})")
            }
        }
    }
}

impl std::error::Error for HandlerError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_message_passthrough() {
        let err = HandlerError::Parse("invalid JSON body: expected value".to_string());
        assert_eq!(err.to_string(), "invalid JSON body: expected value");
    }

    #[test]
    fn test_body_too_large_message() {
        let err = HandlerError::BodyTooLarge {
            size: 2_000_000,
            limit: 1_048_576,
        };
        let msg = err.to_string();
        assert!(msg.contains("2000000"));
        assert!(msg.contains("1048576"));
    }
}
