//! Username/password login against the WiziShop API.
//!
//! The login endpoint lives at the API root (`<api_url>auth/login`), outside
//! the versioned, shop-scoped tree. It answers `{"token": "<credential>"}`.
//!
//! # Example
//!
//! ```rust,ignore
//! use wizishop_api::auth::authenticate;
//! use wizishop_api::{Password, Username, WizishopConfig};
//!
//! let client = authenticate(
//!     &Username::new("merchant@example.com")?,
//!     &Password::new("secret")?,
//!     &WizishopConfig::default(),
//! )
//! .await?;
//!
//! let orders = client.get_orders(Default::default()).await?;
//! ```

use serde_json::{json, Value};

use crate::auth::credential::{Credential, MalformedCredentialError};
use crate::auth::errors::{AuthError, AuthenticationError};
use crate::clients::{HttpClient, HttpMethod, HttpRequest, Transport};
use crate::config::{Password, Username, WizishopConfig};
use crate::rest::AuthenticatedApiClient;

/// Login path, relative to the API root.
pub const LOGIN_PATH: &str = "auth/login";

/// Logs in and returns a client ready for authenticated calls.
///
/// # Errors
///
/// - [`AuthError::Authentication`] if the login request fails (network
///   error, non-2xx status, or a body that is not JSON)
/// - [`AuthError::MalformedCredential`] if the response has no `token`
///   string or the token cannot be parsed
pub async fn authenticate(
    username: &Username,
    password: &Password,
    config: &WizishopConfig,
) -> Result<AuthenticatedApiClient, AuthError> {
    let credential = request_credential(username, password, config).await?;
    Ok(AuthenticatedApiClient::new(credential, config))
}

/// Logs in and returns the issued [`Credential`] without building a client.
///
/// Useful when the caller persists credentials between runs.
///
/// # Errors
///
/// Same as [`authenticate`].
pub async fn request_credential(
    username: &Username,
    password: &Password,
    config: &WizishopConfig,
) -> Result<Credential, AuthError> {
    let transport = HttpClient::new(config.api_url().as_ref(), config);
    request_credential_with(&transport, username, password).await
}

/// Logs in through the given transport, which must resolve paths against
/// the API root.
///
/// # Errors
///
/// Same as [`authenticate`].
pub async fn request_credential_with<T: Transport + ?Sized>(
    transport: &T,
    username: &Username,
    password: &Password,
) -> Result<Credential, AuthError> {
    let request = login_request(username, password.as_ref());

    let response = match transport.request(request).await {
        Ok(response) => response,
        Err(source) => {
            return Err(AuthenticationError {
                request: login_request(username, "*****"),
                source,
            }
            .into())
        }
    };

    let body = response.json().map_err(|e| AuthenticationError {
        request: login_request(username, "*****"),
        source: e.into(),
    })?;

    let token = body
        .get("token")
        .and_then(Value::as_str)
        .ok_or(MalformedCredentialError::Empty)?;

    let credential = Credential::parse(token)?;

    tracing::debug!(
        shop_id = ?credential.shop_id(),
        expires_at = %credential.expires_at(),
        "Authenticated against WiziShop API"
    );

    Ok(credential)
}

fn login_request(username: &Username, password: &str) -> HttpRequest {
    HttpRequest {
        http_method: HttpMethod::Post,
        path: LOGIN_PATH.to_string(),
        body: Some(json!({
            "username": username.as_ref(),
            "password": password,
        })),
        query: None,
    }
}
