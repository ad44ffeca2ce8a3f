//! Error types for the civic API client.

/// Errors that can occur when talking to the civic data provider.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The provider API key is absent or empty. Fatal at construction time,
    /// never raised per-request.
    #[error("Civic API key is not configured")]
    MissingApiKey,
    /// An HTTP request failed at the network level (DNS, connect, timeout).
    #[error("Civic API request failed")]
    RequestFailed,
    /// The provider returned a non-success status with a body snippet.
    #[error("Civic API error: status {status}: {body}")]
    HttpStatus { status: u16, body: String },
    /// The provider returned a body that could not be decoded as JSON.
    #[error("Civic API returned a malformed response")]
    MalformedResponse,
}
