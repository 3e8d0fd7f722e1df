//! Error types for the classifier agent gateway.

use std::result;
use thiserror::Error;
use tonic::Status;

use crate::client::Operation;

/// A specialized Result type for gateway operations.
pub type Result<T> = result::Result<T, Error>;

/// Failure of a single round trip to the inference backend.
#[derive(Error, Debug)]
pub enum BackendError {
    /// The request body could not be serialized. Raised before any I/O.
    #[error("failed to encode request for {endpoint}: {source}")]
    Encoding {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },

    /// The backend could not be reached, or the exchange broke off midway.
    #[error("backend unavailable at {endpoint}: {source}")]
    Unavailable {
        endpoint: String,
        timed_out: bool,
        #[source]
        source: reqwest::Error,
    },

    /// The backend answered with something other than 200 OK.
    #[error("backend rejected {endpoint} with status {status}: {body}")]
    Rejected {
        endpoint: String,
        status: u16,
        body: String,
    },

    /// The backend answered 200 OK but the body did not match the expected shape.
    #[error("failed to decode response from {endpoint}: {source}")]
    Decoding {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },
}

impl BackendError {
    /// The backend URL the failed call was addressed to.
    pub fn endpoint(&self) -> &str {
        match self {
            BackendError::Encoding { endpoint, .. }
            | BackendError::Unavailable { endpoint, .. }
            | BackendError::Rejected { endpoint, .. }
            | BackendError::Decoding { endpoint, .. } => endpoint,
        }
    }
}

/// The error type for gateway operations.
#[derive(Error, Debug)]
pub enum Error {
    /// A backend call made on behalf of an RPC operation failed.
    #[error("{operation} failed: {source}")]
    Backend {
        operation: Operation,
        #[source]
        source: BackendError,
    },

    /// The caller cancelled the operation while the backend call was in flight.
    #[error("{operation} cancelled by caller")]
    Cancelled { operation: Operation },

    /// The caller's deadline elapsed before the backend answered.
    #[error("{operation} exceeded the caller deadline")]
    DeadlineExceeded { operation: Operation },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// The configured listen address could not be parsed.
    #[error("Invalid listen address '{0}'")]
    InvalidAddress(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// RPC transport errors
    #[error("Transport error: {0}")]
    Transport(#[from] tonic::transport::Error),
}

impl Error {
    pub fn backend(operation: Operation, source: BackendError) -> Self {
        Error::Backend { operation, source }
    }

    pub fn config<S: Into<String>>(msg: S) -> Self {
        Error::Config(msg.into())
    }
}

impl From<config::ConfigError> for Error {
    fn from(err: config::ConfigError) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<Error> for Status {
    fn from(err: Error) -> Self {
        let message = err.to_string();
        match err {
            Error::Backend { source, .. } => match source {
                BackendError::Unavailable { timed_out: true, .. } => {
                    Status::deadline_exceeded(message)
                }
                BackendError::Unavailable { .. } => Status::unavailable(message),
                BackendError::Encoding { .. }
                | BackendError::Rejected { .. }
                | BackendError::Decoding { .. } => Status::internal(message),
            },
            Error::Cancelled { .. } => Status::cancelled(message),
            Error::DeadlineExceeded { .. } => Status::deadline_exceeded(message),
            Error::Config(_) | Error::InvalidAddress(_) => Status::failed_precondition(message),
            Error::Io(_) | Error::Transport(_) => Status::internal(message),
        }
    }
}
