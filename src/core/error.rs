use thiserror::Error;

/// The error type returned by every fallible operation in this crate.
#[derive(Debug, Error)]
pub enum FmpError {
    /// The HTTP request itself failed (connect, timeout, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// An endpoint URL could not be assembled.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The server answered with a non-success HTTP status.
    #[error("Unexpected HTTP status {status} for {url}")]
    Status {
        /// The status code the server returned.
        status: u16,
        /// The URL that was requested.
        url: String,
    },

    /// The response body could not be parsed as the expected JSON shape.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}
