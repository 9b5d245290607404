use thiserror::Error;

/// Errors raised by the click handlers before anything is sent
#[derive(Debug, Error)]
pub enum RecorderError {
    #[error("page has no csrf token to attach to the time block request")]
    MissingCsrfToken,

    #[error("failed to encode time block: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Why a dispatched time block was not acknowledged
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("server rejected time block with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("server response was not valid JSON: {0}")]
    InvalidResponse(#[source] serde_json::Error),

    #[error("submission task ended unexpectedly: {0}")]
    Aborted(String),
}
