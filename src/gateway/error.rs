//! Normalized request errors.

use std::time::Duration;

use serde_json::Value;
use thiserror::Error;

use crate::gateway::envelope;

/// Message shown when the backend gives no usable detail.
pub const FALLBACK_MESSAGE: &str = "请求失败，请检查后端是否启动";

/// What actually went wrong underneath a [`RequestError`].
#[derive(Debug, Error)]
pub enum FailureCause {
    /// The backend answered with a non-2xx status.
    #[error("backend returned status {status}")]
    Status { status: u16, body: Option<Value> },

    /// No complete response arrived within the configured timeout.
    #[error("no response within {0:?}")]
    Timeout(Duration),

    /// Connection refused, reset, DNS failure and the like.
    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),

    /// The path could not be joined onto the base origin.
    #[error("invalid request path '{0}'")]
    InvalidPath(String),

    /// The request body could not be serialized.
    #[error("could not encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// The payload did not have the expected shape.
    #[error("could not decode payload: {0}")]
    Decode(#[source] serde_json::Error),

    /// Refused on the client before anything was sent.
    #[error("rejected before sending")]
    Rejected,
}

/// A failed backend call, reshaped for calling code.
///
/// `message` is what the user was shown; the original cause stays available
/// for callers that need to branch on it.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct RequestError {
    message: String,
    #[source]
    cause: FailureCause,
}

impl RequestError {
    /// Build an error with an explicit message.
    pub fn new(message: impl Into<String>, cause: FailureCause) -> Self {
        Self {
            message: message.into(),
            cause,
        }
    }

    /// Derive the user-facing message from the cause: the backend's detail
    /// when present, the fallback otherwise.
    pub fn from_cause(cause: FailureCause) -> Self {
        let message = match &cause {
            FailureCause::Status { body, .. } => envelope::detail_message(body.as_ref()),
            _ => None,
        }
        .unwrap_or_else(|| FALLBACK_MESSAGE.to_string());

        Self { message, cause }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn original_cause(&self) -> &FailureCause {
        &self.cause
    }

    /// HTTP status, when the backend answered at all.
    pub fn status(&self) -> Option<u16> {
        match &self.cause {
            FailureCause::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self.cause, FailureCause::Timeout(_))
    }
}
