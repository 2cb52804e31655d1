//! Error types for the API client.
//!
//! Classifies failures the repository must translate into `Response::Error`
//! values: server-reported errors keep the structured body's message,
//! everything else surfaces without one.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur while talking to the story service.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The underlying HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("server returned {status}")]
    Server {
        status: StatusCode,
        /// `message` field of the structured error body, when parseable.
        message: Option<String>,
    },

    /// Connection, timeout, or body decoding failure.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

impl ApiError {
    /// Message to surface to the user, taken from the server's error body.
    ///
    /// Transport failures carry no structured body, so they yield `None`
    /// and render silently downstream.
    pub fn server_message(&self) -> Option<String> {
        match self {
            ApiError::Server { message, .. } => message.clone(),
            ApiError::Build(_) | ApiError::Transport(_) => None,
        }
    }
}
