//! Authentication error types for the WiziShop API SDK.
//!
//! # Error Types
//!
//! - [`AuthError::Authentication`]: The login round-trip failed at the transport level
//! - [`AuthError::MalformedCredential`]: The server answered, but not with a usable token
//!
//! # Example
//!
//! ```rust,ignore
//! use wizishop_api::auth::{authenticate, AuthError};
//!
//! match authenticate(&username, &password, &config).await {
//!     Ok(client) => { /* ready for API calls */ }
//!     Err(AuthError::Authentication(e)) => {
//!         eprintln!("Login failed with status {:?}", e.status());
//!     }
//!     Err(AuthError::MalformedCredential(e)) => {
//!         eprintln!("Server issued an unusable token: {e}");
//!     }
//! }
//! ```

use crate::auth::credential::MalformedCredentialError;
use crate::clients::{HttpError, HttpRequest, HttpResponse};
use thiserror::Error;

/// The login request failed at the transport level.
///
/// Carries the request that was sent (with the password redacted) and the
/// transport error, which holds the response when the server answered.
#[derive(Debug, Error)]
#[error("Authentication problem: {source}")]
pub struct AuthenticationError {
    /// The login request, password redacted.
    pub request: HttpRequest,
    /// The underlying transport error.
    pub source: HttpError,
}

impl AuthenticationError {
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
}

/// Errors that can occur while authenticating.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The login round-trip failed.
    #[error(transparent)]
    Authentication(#[from] AuthenticationError),

    /// The issued token could not be parsed.
    #[error("Malformed credential: {0}")]
    MalformedCredential(#[from] MalformedCredentialError),
}

// Verify AuthError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AuthError>();
};
