//! Error taxonomy for submission requests

use reqwest::StatusCode;
use thiserror::Error;

/// Why a submission did not produce a usable server response
#[derive(Debug, Error)]
pub enum SubmitError {
    /// The request never reached the server or the response never came back
    #[error("{0}")]
    Transport(#[source] reqwest::Error),

    /// The server answered with a non-2xx status
    #[error("{message}")]
    Api { status: StatusCode, message: String },

    /// The server answered 2xx but the body was not JSON
    #[error("Malformed server response: {0}")]
    Protocol(#[source] serde_json::Error),
}

impl SubmitError {
    /// Message shown to the user after the "Error: " prefix
    pub fn user_message(&self) -> String {
        self.to_string()
    }

    /// HTTP status, when the server answered at all
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            SubmitError::Api { status, .. } => Some(*status),
            SubmitError::Transport(err) => err.status(),
            SubmitError::Protocol(_) => None,
        }
    }
}
