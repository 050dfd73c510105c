//! Error types for the API client.

use reqwest::header::HeaderMap;
use reqwest::{Method, StatusCode};

/// Errors that can occur when building or executing API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A request path could not be parsed or resolved against the base URL.
    #[error("invalid request URL: {0}")]
    Url(#[from] url::ParseError),
    /// A configured header value contains bytes that cannot be sent.
    #[error("invalid header value: {0}")]
    Header(#[from] reqwest::header::InvalidHeaderValue),
    /// The request body could not be represented as JSON.
    #[error("failed to serialize request body: {0}")]
    Serialization(#[source] serde_json::Error),
    /// The HTTP call itself failed (DNS, connect, TLS, timeout, cancellation).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    /// The server answered with a non-success status.
    #[error(transparent)]
    Api(#[from] ApiError),
    /// A success response carried a body that could not be decoded into the
    /// requested type. An empty body is not a decode failure.
    #[error("failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),
    /// The upload source file could not be inspected.
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// An upload was requested but no uploader is configured on the client.
    #[error("uploader is not configured")]
    UploaderNotConfigured,
    /// The server issued an upload ticket without an upload link.
    #[error("upload ticket is missing an upload link")]
    MissingUploadLink,
}

/// A non-success answer from the API.
///
/// Carries the failing method and URL (with `client_secret` redacted), the
/// status code, the response headers, and the server-supplied message when
/// one was present.
#[derive(thiserror::Error, Debug)]
#[error("{method} {url}: {status} {message}")]
pub struct ApiError {
    pub method: Method,
    pub url: String,
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub message: String,
}
