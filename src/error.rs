use std::io;

use bytes::Bytes;
use http::StatusCode;
use thiserror::Error;

/// Errors returned by FDC client operations
#[derive(Debug, Error)]
pub enum FdcError {
    /// Caller input was rejected before any network call was made
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Client construction failed
    #[error("Client build error: {0}")]
    Build(String),

    /// The remote API reported that the requested resource does not exist
    #[error("Not found: {resource}")]
    NotFound { resource: String },

    /// The supplied Data.gov API key was rejected by the remote API
    #[error(
        "Invalid Data.gov API key. Get one at https://fdc.nal.usda.gov/api-key-signup.html"
    )]
    InvalidApiKey,

    /// The API rate limit has been exceeded for the supplied key
    #[error("API rate limit exceeded for this key")]
    RateLimited,

    /// The remote API answered with a non-2xx status not covered above
    #[error("Remote error: status={status}")]
    Remote { status: StatusCode, body: Bytes },

    /// The response body was not valid JSON or did not match the expected shape
    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Timeout: {0}")]
    Timeout(String),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

impl From<serde_json::Error> for FdcError {
    fn from(err: serde_json::Error) -> Self {
        FdcError::Decode(err.to_string())
    }
}
