//! Configuration types for the WiziShop API SDK.
//!
//! This module provides the configuration types used to authenticate and
//! build clients for the WiziShop REST API.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`WizishopConfig`]: The configuration struct holding all SDK settings
//! - [`WizishopConfigBuilder`]: A builder for constructing [`WizishopConfig`] instances
//! - [`ApiUrl`]: A validated API root URL
//! - [`Username`] and [`Password`]: Validated login credentials
//! - [`ApiVersion`]: The WiziShop API version to use
//! - [`NotFoundPolicy`]: How single-resource reads treat a `404` response
//!
//! # Example
//!
//! ```rust
//! use wizishop_api::{ApiUrl, ApiVersion, NotFoundPolicy, WizishopConfig};
//!
//! let config = WizishopConfig::builder()
//!     .api_url(ApiUrl::new("https://api.wizishop.com").unwrap())
//!     .api_version(ApiVersion::V2)
//!     .not_found_policy(NotFoundPolicy::Error)
//!     .build();
//!
//! assert_eq!(config.not_found_policy(), NotFoundPolicy::Error);
//! ```

mod newtypes;
mod version;

pub use newtypes::{ApiUrl, Password, Username};
pub use version::ApiVersion;

/// How a single-resource read (for example `get_order`) treats a `404`.
///
/// Collection reads always interpret a `404` as an empty collection, since
/// that is how the API reports a query without results. For detail reads
/// the behavior is a choice: the API also answers `404` for an unknown
/// identifier, which callers may prefer to see as `None` or as an error.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NotFoundPolicy {
    /// A `404` on a detail read yields `Ok(None)`.
    #[default]
    EmptyResult,
    /// A `404` on a detail read yields an [`ApiError`](crate::rest::ApiError).
    Error,
}

/// Configuration for the WiziShop API SDK.
///
/// # Thread Safety
///
/// `WizishopConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Example
///
/// ```rust
/// use wizishop_api::WizishopConfig;
///
/// let config = WizishopConfig::default();
/// assert_eq!(config.api_url().as_ref(), "https://api.wizishop.com/");
/// assert_eq!(config.api_version().to_string(), "v2");
/// ```
#[derive(Clone, Debug, Default)]
pub struct WizishopConfig {
    api_url: ApiUrl,
    api_version: ApiVersion,
    user_agent_prefix: Option<String>,
    not_found_policy: NotFoundPolicy,
}

impl WizishopConfig {
    /// Creates a new builder for constructing a `WizishopConfig`.
    #[must_use]
    pub fn builder() -> WizishopConfigBuilder {
        WizishopConfigBuilder::new()
    }

    /// Returns the API root URL.
    #[must_use]
    pub const fn api_url(&self) -> &ApiUrl {
        &self.api_url
    }

    /// Returns the API version.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the `404` policy for single-resource reads.
    #[must_use]
    pub const fn not_found_policy(&self) -> NotFoundPolicy {
        self.not_found_policy
    }
}

// Verify WizishopConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<WizishopConfig>();
};

/// Builder for constructing [`WizishopConfig`] instances.
///
/// # Defaults
///
/// - `api_url`: `https://api.wizishop.com/`
/// - `api_version`: [`ApiVersion::V2`]
/// - `user_agent_prefix`: `None`
/// - `not_found_policy`: [`NotFoundPolicy::EmptyResult`]
#[derive(Debug, Default)]
pub struct WizishopConfigBuilder {
    api_url: Option<ApiUrl>,
    api_version: Option<ApiVersion>,
    user_agent_prefix: Option<String>,
    not_found_policy: Option<NotFoundPolicy>,
}

impl WizishopConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the API root URL (e.g., a staging host or a local mock).
    #[must_use]
    pub fn api_url(mut self, url: ApiUrl) -> Self {
        self.api_url = Some(url);
        self
    }

    /// Sets the API version.
    #[must_use]
    pub fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Sets a prefix for the `User-Agent` header.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Sets how single-resource reads treat a `404` response.
    #[must_use]
    pub const fn not_found_policy(mut self, policy: NotFoundPolicy) -> Self {
        self.not_found_policy = Some(policy);
        self
    }

    /// Builds the [`WizishopConfig`].
    ///
    /// Every field has a default and all values were validated when their
    /// newtypes were constructed, so building cannot fail.
    #[must_use]
    pub fn build(self) -> WizishopConfig {
        WizishopConfig {
            api_url: self.api_url.unwrap_or_default(),
            api_version: self.api_version.unwrap_or_default(),
            user_agent_prefix: self.user_agent_prefix,
            not_found_policy: self.not_found_policy.unwrap_or_default(),
        }
    }
}
