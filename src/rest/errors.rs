//! Error types for authenticated endpoint calls.
//!
//! - [`InvalidArgumentError`]: A caller-supplied parameter was rejected before any request
//! - [`ApiError`]: A request failed at the transport level
//! - [`ClientError`]: Either of the above, returned by every endpoint method
//!
//! # Example
//!
//! ```rust,ignore
//! use wizishop_api::rest::ClientError;
//!
//! match client.update_sku_stock("ABC-1", 10, "replace").await {
//!     Ok(sku) => println!("New stock: {}", sku["stock"]),
//!     Err(ClientError::InvalidArgument(e)) => eprintln!("Bad call: {e}"),
//!     Err(ClientError::Api(e)) => {
//!         eprintln!("{}", e.error_message().unwrap_or_else(|| e.to_string()));
//!     }
//! }
//! ```

use crate::clients::{HttpError, HttpRequest, HttpResponse};
use thiserror::Error;

/// A caller-supplied parameter violates a precondition.
///
/// Raised before any request is sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidArgumentError {
    /// The stock update method is not `replace`, `increase` or `decrease`.
    #[error("Update stock method cannot be {method}")]
    InvalidStockMethod {
        /// The rejected method.
        method: String,
    },

    /// The order status code filter is outside the known range.
    #[error("Order status code should be between 0 and 50, got {code}")]
    StatusCodeOutOfRange {
        /// The rejected status code.
        code: i64,
    },
}

/// An authenticated request failed at the transport level.
///
/// Carries the request that was sent and the transport error, which holds
/// the response when the server answered.
#[derive(Debug, Error)]
#[error("{} request to '{}' failed: {source}", .request.http_method, .request.path)]
pub struct ApiError {
    /// The request that failed.
    pub request: HttpRequest,
    /// The underlying transport error.
    pub source: HttpError,
}

impl ApiError {
    /// Wraps a transport error together with the request that caused it.
    #[must_use]
    pub const fn new(request: HttpRequest, source: HttpError) -> Self {
        Self { request, source }
    }

    /// Returns the status code if the server answered.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        self.source.status()
    }

    /// Returns the response if the server answered with a non-2xx status.
    #[must_use]
    pub const fn response(&self) -> Option<&HttpResponse> {
        self.source.response()
    }

    /// Returns `true` if the server answered `404 Not Found`.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Returns the `message` field of the server's JSON error body.
    ///
    /// Returns `None` when there is no response, the body is not a JSON
    /// object, or the object has no `message` field.
    #[must_use]
    pub fn error_message(&self) -> Option<String> {
        let body = self.response()?.json().ok()?;
        match body.get("message")? {
            serde_json::Value::String(message) => Some(message.clone()),
            serde_json::Value::Null => None,
            other => Some(other.to_string()),
        }
    }
}

/// Errors returned by endpoint methods.
#[derive(Debug, Error)]
pub enum ClientError {
    /// A parameter was rejected before any request was sent.
    #[error(transparent)]
    InvalidArgument(#[from] InvalidArgumentError),

    /// The request failed.
    #[error(transparent)]
    Api(#[from] ApiError),
}

// Verify ClientError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ClientError>();
};
