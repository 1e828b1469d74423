//! HTTP transport types for WiziShop API communication.
//!
//! This module provides the layer underneath the endpoint client: request and
//! response values, the [`Transport`] trait, and the reqwest-backed
//! [`HttpClient`].
//!
//! # Overview
//!
//! - [`Transport`]: The capability the endpoint client is built on
//! - [`HttpClient`]: The production transport (reqwest + rustls)
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A response from the API
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PATCH, DELETE)
//! - [`HttpError`]: Transport-level failures
//!
//! # Example
//!
//! ```rust,ignore
//! use wizishop_api::clients::{HttpClient, HttpMethod, HttpRequest, Transport};
//! use wizishop_api::WizishopConfig;
//!
//! let client = HttpClient::new("https://api.wizishop.com/", &WizishopConfig::default());
//!
//! let request = HttpRequest::builder(HttpMethod::Post, "auth/login")
//!     .body(serde_json::json!({"username": "john", "password": "secret"}))
//!     .build()?;
//!
//! let response = client.request(request).await?;
//! ```
//!
//! # Retry Behavior
//!
//! None. A failed request is reported to the caller as is.

mod errors;
mod http_client;
mod http_request;
mod http_response;
mod transport;

pub use errors::{HttpError, HttpResponseError, InvalidHttpRequestError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;
pub use transport::Transport;
