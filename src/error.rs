//! Standard errors used by all functions in the crate.

use std::fmt;

/// Error collecting all possible failures of the DDEX client.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Reqwest error.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),
    /// The server answered with an HTTP status other than `200 OK`.
    #[error("{0}")]
    ServerError(#[from] ServerError),
    /// The server answered `200 OK`, but the API rejected the request.
    #[error("{0}")]
    ApiError(#[from] ApiError),
    /// The response body did not match the expected envelope or payload shape.
    #[error("Invalid response body: {0}")]
    InvalidResponse(#[from] serde_json::Error),
    /// The request path could not be joined onto the base URL.
    #[error("Invalid request URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    /// The account or signature contains characters that are not allowed in an HTTP header.
    #[error("Invalid Hydro-Authentication header value: {0}")]
    InvalidAuthenticationHeader(#[from] reqwest::header::InvalidHeaderValue),
    /// Error returned by the [`Signer`](crate::signer::Signer), passed through untouched.
    #[error(transparent)]
    SigningError(anyhow::Error),
    /// Catch-all variant for unexpected errors.
    #[error(transparent)]
    Other(anyhow::Error),
}

impl From<reqwest_middleware::Error> for Error {
    fn from(e: reqwest_middleware::Error) -> Self {
        match e {
            reqwest_middleware::Error::Reqwest(e) => Error::HttpError(e),
            reqwest_middleware::Error::Middleware(e) => {
                e.downcast::<Error>().unwrap_or_else(Error::Other)
            }
        }
    }
}

impl From<Error> for reqwest_middleware::Error {
    fn from(e: Error) -> Self {
        reqwest_middleware::Error::Middleware(e.into())
    }
}

/// Transport-level failure: the HTTP status was not `200 OK`.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("Server Error {status}: {status_text}")]
pub struct ServerError {
    /// HTTP status returned by the server.
    pub status: u16,
    /// Reason phrase associated with `status`.
    pub status_text: String,
}

/// Application-level rejection reported inside a `200 OK` response.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// Non-zero status code from the response envelope.
    pub status: i64,
    /// Human readable description supplied by the API, if any.
    pub desc: Option<String>,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.desc {
            Some(ref desc) => write!(f, "API Error: {}", desc),
            None => write!(f, "API Error: status {}", self.status),
        }
    }
}
