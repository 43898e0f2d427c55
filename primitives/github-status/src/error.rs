//! Error type for the mutation flow.

/// A failed mutation call.
///
/// Every variant reads as "request failed"; callers are not expected to
/// branch on the cause.
#[derive(Debug, thiserror::Error)]
pub enum InvokeError {
    /// The token cannot be carried in an `Authorization` header value.
    #[error("request failed: invalid authorization header: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    /// Connection, TLS, or body transfer failure.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The request body could not be encoded or the response was not JSON.
    #[error("request failed: invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
