//! # WiziShop API Rust SDK
//!
//! A Rust SDK for the WiziShop REST API: log in with a merchant account,
//! then read and update the shop's brands, SKUs, customers, newsletter
//! subscribers and orders.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`WizishopConfig`] and [`WizishopConfigBuilder`]
//! - Validated newtypes for credentials and the API root URL
//! - Username/password login via [`authenticate`]
//! - Parsing and expiry checks of the issued bearer [`Credential`]
//! - An [`AuthenticatedApiClient`] with one method per endpoint
//! - Transparent pagination of list endpoints
//!
//! ## Quick Start
//!
//! ```rust
//! use wizishop_api::{ApiUrl, ApiVersion, NotFoundPolicy, WizishopConfig};
//!
//! // Defaults target https://api.wizishop.com/ and API v2
//! let config = WizishopConfig::builder()
//!     .api_url(ApiUrl::new("https://api.wizishop.com").unwrap())
//!     .api_version(ApiVersion::latest())
//!     .not_found_policy(NotFoundPolicy::EmptyResult)
//!     .build();
//!
//! assert_eq!(config.api_url().as_ref(), "https://api.wizishop.com/");
//! ```
//!
//! ## Authentication
//!
//! ```rust,ignore
//! use wizishop_api::{authenticate, Password, Username, WizishopConfig};
//!
//! let client = authenticate(
//!     &Username::new("merchant@example.com")?,
//!     &Password::new("secret")?,
//!     &WizishopConfig::default(),
//! )
//! .await?;
//!
//! if client.credential().expired() {
//!     // log in again
//! }
//! ```
//!
//! ## Making API Requests
//!
//! ```rust,ignore
//! use std::collections::HashMap;
//!
//! use wizishop_api::rest::{OrderQuery, OrderStatus, TrackingNumbers};
//!
//! // Every page is fetched and concatenated
//! let brands = client.get_brands(None).await?.into_items();
//!
//! // An explicit page comes back as the server sent it
//! let second = client
//!     .get_skus(Some(HashMap::from([("page".to_string(), "2".to_string())])))
//!     .await?;
//! let pages = second.total_pages();
//!
//! // Detail reads return None for unknown resources
//! let sku = client.get_sku("ABC-1", None).await?;
//!
//! // Validated before anything is sent
//! client.update_sku_stock("ABC-1", 5, "increase").await?;
//!
//! let orders = client
//!     .get_orders(OrderQuery::new().status(OrderStatus::PendingPreparation))
//!     .await?;
//!
//! for id in orders.iter().filter_map(|order| order["id"].as_i64()) {
//!     client.preparing_order(id).await?;
//! }
//!
//! client
//!     .ship_order(1042, &TrackingNumbers::new().add(39, "XVBFD-2"))
//!     .await?;
//! ```
//!
//! ## Logging
//!
//! The SDK emits `tracing` events at debug level (outgoing requests,
//! aggregated pages, successful logins). Install a subscriber to see them.
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: Newtypes and parameters validate before any request
//! - **Thread-safe**: The client is `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime
//! - **Pluggable transport**: Any [`clients::Transport`] can back the client

pub mod auth;
pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use auth::{authenticate, AuthError, AuthenticationError, Credential, MalformedCredentialError};
pub use config::{
    ApiUrl, ApiVersion, NotFoundPolicy, Password, Username, WizishopConfig, WizishopConfigBuilder,
};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    HttpResponseError, InvalidHttpRequestError, Transport,
};

// Re-export endpoint client types
pub use rest::{ApiError, AuthenticatedApiClient, ClientError, InvalidArgumentError};
