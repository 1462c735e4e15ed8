use std::{net::AddrParseError, num::ParseIntError};

use thiserror::Error;

/// Result type for client operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// A wire value that could not be decoded.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("invalid integer {value:?}")]
    Number {
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("invalid boolean {value:?}, expected \"true\" or \"false\"")]
    Boolean { value: String },

    #[error("invalid IP address {value:?}")]
    Ip {
        value: String,
        #[source]
        source: AddrParseError,
    },

    #[error("invalid CIDR {value:?}: {reason}")]
    Cidr { value: String, reason: &'static str },

    #[error("invalid range {value:?}: {reason}")]
    Range { value: String, reason: &'static str },

    #[error("malformed response: {0}")]
    Json(#[from] serde_json::Error),
}

/// A value that cannot be represented on the wire.
#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("string list element {index} ({element:?}) contains ',' or '\"'")]
    InvalidListElement { index: usize, element: String },

    #[error("failed to encode request: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failure of the transport collaborator.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request cancelled")]
    Cancelled,

    #[error("request deadline exceeded")]
    DeadlineExceeded,

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("invalid request URL: {0}")]
    Url(#[from] url::ParseError),

    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// An inclusive range whose upper bound is below its lower bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid range {lower}-{upper}")]
pub struct InvalidRange {
    pub lower: i64,
    pub upper: i64,
}

/// Any failure of a List or Patch operation.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Encode(#[from] EncodeError),

    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The device rejected a patch. Any resource fields in the response are discarded.
    #[error("server error: {message}: {detail}")]
    Server {
        code: i64,
        message: String,
        detail: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_error_message() {
        let err = Error::Server {
            code: 400,
            message: "Bad Request".to_string(),
            detail: "unknown parameter vlan-idss".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "server error: Bad Request: unknown parameter vlan-idss"
        );
    }

    #[test]
    fn test_invalid_range_message() {
        let err = InvalidRange {
            lower: 10,
            upper: 5,
        };
        assert_eq!(err.to_string(), "invalid range 10-5");
    }

    #[test]
    fn test_conversions() {
        let err: Error = TransportError::Cancelled.into();
        assert!(matches!(err, Error::Transport(TransportError::Cancelled)));

        let err: Error = DecodeError::Boolean {
            value: "yes".into(),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "invalid boolean \"yes\", expected \"true\" or \"false\""
        );
    }
}
