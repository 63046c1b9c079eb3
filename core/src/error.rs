//! Error types for the client.
//!
//! # Design
//! One enum covers every failure a call can produce. The split that matters
//! to callers is whether a response was received: [`ClientError::Decode`]
//! and [`ClientError::Api`] happen after one arrived and carry its metadata,
//! while [`ClientError::Transport`] means no response exists at all. Errors
//! are returned, never logged-and-swallowed, and nothing retries.

use thiserror::Error;

use crate::http::ResponseMeta;

/// Errors surfaced by [`crate::RestClient`] and the services built on it.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The base URL handed to the client is not an absolute URL.
    #[error("invalid base URL: {0}")]
    Config(String),

    /// A composed request URL is not valid.
    #[error("invalid request URL: {0}")]
    RequestBuild(String),

    /// The outgoing payload could not be encoded as JSON.
    #[error("failed to encode request body: {0}")]
    Serialization(#[source] serde_json::Error),

    /// A required argument was missing from the call.
    #[error("{0}")]
    InvalidArgument(&'static str),

    /// The transport failed before any response was produced.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// A response body was present but did not parse as the envelope or as
    /// the expected payload type.
    #[error("failed to decode response body: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
        response: ResponseMeta,
    },

    /// The server reported a failure through the envelope. The display form
    /// is the server's message, verbatim.
    #[error("{message}")]
    Api {
        message: String,
        response: ResponseMeta,
    },
}

impl ClientError {
    /// Metadata of the received response, when the failure happened after
    /// one arrived.
    pub fn response(&self) -> Option<&ResponseMeta> {
        match self {
            ClientError::Decode { response, .. } | ClientError::Api { response, .. } => {
                Some(response)
            }
            _ => None,
        }
    }

    /// HTTP status of the received response, if there was one.
    pub fn status(&self) -> Option<u16> {
        self.response().map(|response| response.status)
    }
}

/// Network-level failure: the request never produced a response.
#[derive(Debug, Error)]
#[error("transport error: {message}")]
pub struct TransportError {
    message: String,
    timed_out: bool,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            timed_out: false,
            source: None,
        }
    }

    pub fn timeout(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            timed_out: true,
            source: None,
        }
    }

    /// True when the failure was a deadline firing, before or during the
    /// request.
    pub fn timed_out(&self) -> bool {
        self.timed_out
    }
}

impl From<ureq::Error> for TransportError {
    fn from(err: ureq::Error) -> Self {
        Self {
            timed_out: matches!(err, ureq::Error::Timeout(_)),
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}
