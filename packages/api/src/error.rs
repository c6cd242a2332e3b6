use thiserror::Error;

/// Failure of a backend call.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response, or the body could not be read
    /// or decoded.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("server returned HTTP {status}")]
    Status { status: u16 },
}
