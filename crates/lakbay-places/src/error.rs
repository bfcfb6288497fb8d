use thiserror::Error;

/// Errors returned by the places search adapter.
///
/// All three kinds are terminal for the current attempt: the adapter never
/// retries, and the presentation layer translates them into a user-facing
/// "no results" message.
#[derive(Debug, Error)]
pub enum PlacesError {
    /// The provider answered with a status other than `OK`/`ZERO_RESULTS`
    /// (e.g. `OVER_QUERY_LIMIT`, `REQUEST_DENIED`).
    #[error("places API error {status}: {message}")]
    Provider { status: String, message: String },

    /// The request exceeded the configured deadline.
    #[error("places request timed out after {secs}s")]
    Timeout { secs: u64 },

    /// Any other transport-level failure: DNS, connection refused, non-2xx
    /// HTTP status, or a malformed response body.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),
}

/// The underlying cause of a [`PlacesError::Transport`].
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("malformed response body for {context}: {source}")]
    Decode {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid base URL {0}")]
    BaseUrl(String),
}
