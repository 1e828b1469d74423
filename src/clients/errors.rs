//! HTTP-specific error types for the WiziShop API SDK.
//!
//! This module contains error types for HTTP operations, including response
//! errors, decoding failures, and request validation failures.
//!
//! # Error Handling
//!
//! - [`HttpResponseError`]: Non-2xx HTTP responses from the API
//! - [`InvalidHttpRequestError`]: When a request fails validation before sending
//! - [`HttpError`]: Unified error type encompassing all HTTP-related errors
//!
//! # Example
//!
//! ```rust,ignore
//! use wizishop_api::clients::{HttpError, Transport};
//!
//! match transport.request(request).await {
//!     Ok(response) => println!("Success: {}", response.text()),
//!     Err(HttpError::Response(e)) => println!("API error {}", e.code),
//!     Err(HttpError::Decode(e)) => println!("Unreadable body: {e}"),
//!     Err(HttpError::InvalidRequest(e)) => println!("Invalid request: {e}"),
//!     Err(HttpError::Network(e)) => println!("Network error: {e}"),
//! }
//! ```

use crate::clients::http_response::HttpResponse;
use thiserror::Error;

/// Error returned when an HTTP request receives a non-successful response.
///
/// The full response is kept so callers can inspect headers and the
/// server's JSON error body.
///
/// # Example
///
/// ```rust
/// use wizishop_api::clients::{HttpResponse, HttpResponseError};
///
/// let error = HttpResponseError::new(HttpResponse::json_body(
///     422,
///     &serde_json::json!({"message": "Invalid stock"}),
/// ));
///
/// assert_eq!(error.code, 422);
/// assert_eq!(error.to_string(), "Server responded with status 422");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Server responded with status {code}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The response as received.
    pub response: HttpResponse,
}

impl HttpResponseError {
    /// Wraps a non-successful response.
    #[must_use]
    pub fn new(response: HttpResponse) -> Self {
        Self {
            code: response.code,
            response,
        }
    }
}

/// Error returned when an HTTP request fails validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// The request path is empty.
    #[error("Cannot send a request without a path.")]
    EmptyPath,

    /// A request that requires a body was made without one.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },
}

/// Unified error type for all HTTP-related errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// An HTTP response error (non-2xx status code).
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// A JSON body could not be encoded, or a successful response carried
    /// a body that is not valid JSON.
    #[error("Invalid JSON body: {0}")]
    Decode(#[from] serde_json::Error),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl HttpError {
    /// Returns the status code if the server answered.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Response(e) => Some(e.code),
            _ => None,
        }
    }

    /// Returns the response if the server answered with a non-2xx status.
    #[must_use]
    pub const fn response(&self) -> Option<&HttpResponse> {
        match self {
            Self::Response(e) => Some(&e.response),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_http_response_error_includes_status_code_in_message() {
        let error = HttpResponseError::new(HttpResponse::new(404, HashMap::new(), ""));
        assert_eq!(error.to_string(), "Server responded with status 404");
    }

    #[test]
    fn test_http_error_exposes_status_and_response() {
        let response = HttpResponse::new(500, HashMap::new(), "boom");
        let error = HttpError::from(HttpResponseError::new(response.clone()));

        assert_eq!(error.status(), Some(500));
        assert_eq!(error.response(), Some(&response));
    }

    #[test]
    fn test_non_response_errors_have_no_status() {
        let error = HttpError::from(InvalidHttpRequestError::EmptyPath);
        assert_eq!(error.status(), None);
        assert!(error.response().is_none());

        let decode_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error = HttpError::from(decode_error);
        assert!(error.to_string().starts_with("Invalid JSON body"));
    }

    #[test]
    fn test_invalid_request_error_missing_body() {
        let error = InvalidHttpRequestError::MissingBody {
            method: "patch".to_string(),
        };
        assert_eq!(error.to_string(), "Cannot use patch without specifying data.");
    }

    #[test]
    fn test_error_types_implement_std_error() {
        let http_error: &dyn std::error::Error =
            &HttpResponseError::new(HttpResponse::new(400, HashMap::new(), ""));
        let _ = http_error;

        let invalid_error: &dyn std::error::Error = &InvalidHttpRequestError::EmptyPath;
        let _ = invalid_error;
    }
}
