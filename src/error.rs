// Error types shared across the client.
//
// Gateway and configuration failures are typed so the UI can pick the
// right message; everything at the application edge is `anyhow`.

use reqwest::StatusCode;
use thiserror::Error;

/// Failure of a single request against the car service.
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Connection refused, DNS failure, timeout, broken pipe.
    #[error("transport failure: {0}")]
    Transport(String),

    #[error("resource not found")]
    NotFound,

    #[error("unexpected status {0}")]
    Status(StatusCode),

    /// The body could not be decoded as the expected JSON.
    #[error("malformed response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            GatewayError::Decode(err.to_string())
        } else {
            GatewayError::Transport(err.to_string())
        }
    }
}

/// Invalid runtime configuration, named by the offending variable.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must not be empty")]
    Empty { var: &'static str },

    #[error("{var} has invalid value {value:?}: {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: &'static str,
    },
}
