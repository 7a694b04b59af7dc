//! Error types for the posts client.

/// Errors that can occur while fetching or decoding the posts document.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// An HTTP request failed (network error, timeout, or unreadable body).
    #[error("Request failed")]
    RequestFailed,
    /// The server returned a non-success status with a body snippet.
    #[error("Request failed with status {status}")]
    HttpStatus { status: u16, body: String },
    /// The configured document URL could not be parsed.
    #[error("Invalid document URL: {0}")]
    InvalidUrl(String),
    /// The body was not a JSON array of well-formed posts.
    #[error("Malformed posts document: {0}")]
    MalformedDocument(String),
}
