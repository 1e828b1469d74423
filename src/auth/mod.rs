//! Authentication types for the WiziShop API SDK.
//!
//! This module provides the login flow and the bearer [`Credential`] it
//! yields.
//!
//! # Overview
//!
//! - [`authenticate`]: Logs in and returns an [`AuthenticatedApiClient`](crate::rest::AuthenticatedApiClient)
//! - [`request_credential`]: Logs in and returns only the [`Credential`]
//! - [`Credential`]: The parsed, immutable bearer token
//! - [`AuthError`]: Errors from the login flow
//!
//! # Credential Lifecycle
//!
//! A credential is issued once per login and lives as long as the client
//! session. Use [`Credential::expired`] (or [`Credential::is_expired`] with an
//! explicit instant) to decide when to log in again. The SDK never persists
//! credentials; `Credential` serializes to its raw token so callers can.
//!
//! ```rust
//! use wizishop_api::Credential;
//!
//! let token = "eyJhbGciOiJSUzI1NiIsInR5cCI6IkpXUyJ9.eyJleHAiOjQxMDI0NDQ4MDAsImlkX3Nob3AiOjEzMX0.Signature";
//! let credential: Credential = token.parse().unwrap();
//!
//! let stored = serde_json::to_string(&credential).unwrap();
//! let restored: Credential = serde_json::from_str(&stored).unwrap();
//! assert_eq!(restored.token(), token);
//! ```

pub mod credential;
mod errors;
pub mod login;

pub use credential::{Credential, MalformedCredentialError};
pub use errors::{AuthError, AuthenticationError};
pub use login::{authenticate, request_credential, request_credential_with, LOGIN_PATH};
