//! Authenticated client for the shop-scoped WiziShop API.
//!
//! This module provides [`AuthenticatedApiClient`] and the two read
//! policies every endpoint method is built on:
//!
//! - single-result reads return the decoded body, or `None` on `404`
//!   (subject to [`NotFoundPolicy`])
//! - all-results reads walk every page with
//!   [`assemble_results`](crate::rest::assemble_results), unless the
//!   caller already chose a `page` or `limit`, in which case that page is
//!   read as a single result
//!
//! Endpoint methods themselves live in [`crate::rest::resources`].

use std::collections::HashMap;

use serde::Serialize;
use serde_json::Value;

use crate::auth::Credential;
use crate::clients::{HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse, Transport};
use crate::config::{NotFoundPolicy, WizishopConfig};
use crate::rest::errors::ApiError;
use crate::rest::listing::Listing;
use crate::rest::pagination::{assemble_results, PAGE_SIZE};

/// Client for the endpoints of one shop, authenticated with a [`Credential`].
///
/// Every request is resolved against
/// `<api_url><version>/shops/<id_shop>/` and carries
/// `Authorization: Bearer <token>`. The `shops/<id_shop>/` part is left out
/// when the credential has no shop id.
///
/// The transport is pluggable: [`new`](Self::new) uses the reqwest-backed
/// [`HttpClient`], [`with_transport`](Self::with_transport) accepts any
/// [`Transport`] resolving paths against [`base_uri`](Self::base_uri).
///
/// # Thread Safety
///
/// `AuthenticatedApiClient<HttpClient>` is `Send + Sync` and holds no
/// mutable state; share it freely across tasks.
///
/// # Example
///
/// ```rust
/// use wizishop_api::{AuthenticatedApiClient, Credential, WizishopConfig};
///
/// let credential: Credential =
///     "eyJhbGciOiJSUzI1NiIsInR5cCI6IkpXUyJ9.eyJleHAiOjQxMDI0NDQ4MDAsImlkX3Nob3AiOjEzMX0.Signature"
///         .parse()
///         .unwrap();
///
/// let client = AuthenticatedApiClient::new(credential, &WizishopConfig::default());
/// assert_eq!(client.base_uri(), "https://api.wizishop.com/v2/shops/131/");
/// ```
#[derive(Debug)]
pub struct AuthenticatedApiClient<T: Transport = HttpClient> {
    credential: Credential,
    transport: T,
    base_uri: String,
    not_found_policy: NotFoundPolicy,
}

// Verify AuthenticatedApiClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AuthenticatedApiClient>();
};

impl AuthenticatedApiClient<HttpClient> {
    /// Creates a client sending requests over HTTP.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created (see
    /// [`HttpClient::new`]).
    #[must_use]
    pub fn new(credential: Credential, config: &WizishopConfig) -> Self {
        let base_uri = shop_base_uri(&credential, config);
        let transport = HttpClient::with_bearer_token(&base_uri, credential.token(), config);

        Self {
            credential,
            transport,
            base_uri,
            not_found_policy: config.not_found_policy(),
        }
    }
}

impl<T: Transport> AuthenticatedApiClient<T> {
    /// Creates a client sending requests through `transport`.
    ///
    /// The transport is responsible for resolving paths against
    /// [`base_uri`](Self::base_uri) and for the `Authorization` header.
    #[must_use]
    pub fn with_transport(credential: Credential, config: &WizishopConfig, transport: T) -> Self {
        Self {
            base_uri: shop_base_uri(&credential, config),
            credential,
            transport,
            not_found_policy: config.not_found_policy(),
        }
    }

    /// Returns the credential this client authenticates with.
    #[must_use]
    pub const fn credential(&self) -> &Credential {
        &self.credential
    }

    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Returns the shop-scoped base URI, ending with `/`.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    #[must_use]
    pub const fn not_found_policy(&self) -> NotFoundPolicy {
        self.not_found_policy
    }

    /// Reads a single resource.
    ///
    /// Returns `Ok(None)` when the server answers `404` under
    /// [`NotFoundPolicy::EmptyResult`], or answers with an empty body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for any other failure, and for `404` under
    /// [`NotFoundPolicy::Error`].
    pub async fn get_single_result(
        &self,
        path: &str,
        query: Option<HashMap<String, String>>,
    ) -> Result<Option<Value>, ApiError> {
        match self.read(path, query.unwrap_or_default()).await {
            Ok(Value::Null) => Ok(None),
            Ok(body) => Ok(Some(body)),
            Err(e) if e.is_not_found() && self.not_found_policy == NotFoundPolicy::EmptyResult => {
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// Reads every item of a collection.
    ///
    /// Pages of [`PAGE_SIZE`] items are requested until the last one and
    /// the items are returned as [`Listing::Items`]. A `404` during the walk
    /// yields an empty list.
    ///
    /// If `query` already holds `page` or `limit`, the caller is paging
    /// manually: the query is sent as is through
    /// [`get_single_result`](Self::get_single_result) and the body comes back
    /// unchanged as [`Listing::Page`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for any non-404 failure; items read before the
    /// failure are discarded. A single-page read follows the
    /// [`NotFoundPolicy`] on `404`.
    pub async fn get_all_results(
        &self,
        path: &str,
        query: Option<HashMap<String, String>>,
    ) -> Result<Listing, ApiError> {
        let query = query.unwrap_or_default();

        if query.contains_key("page") || query.contains_key("limit") {
            return self
                .get_single_result(path, Some(query))
                .await
                .map(Listing::Page);
        }

        let walked = assemble_results(
            |page| {
                let mut page_query = query.clone();
                page_query.insert("limit".to_string(), PAGE_SIZE.to_string());
                page_query.insert("page".to_string(), page.to_string());
                self.read(path, page_query)
            },
            extract_results,
        )
        .await;

        match walked {
            Ok(items) => Ok(Listing::Items(items)),
            Err(e) if e.is_not_found() => Ok(Listing::Items(Vec::new())),
            Err(e) => Err(e),
        }
    }

    /// Reads a resource as raw bytes (documents such as invoices).
    pub(crate) async fn get_bytes(
        &self,
        path: &str,
        query: Option<HashMap<String, String>>,
    ) -> Result<Vec<u8>, ApiError> {
        let request = new_request(HttpMethod::Get, path, None, query);
        let response = self.send(&request).await?;
        Ok(response.body)
    }

    /// Sends a `POST`, with `body` as JSON when given, and decodes the answer.
    pub(crate) async fn post<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: Option<&B>,
    ) -> Result<Value, ApiError> {
        let body = body
            .map(|body| json_body(HttpMethod::Post, path, body))
            .transpose()?;
        let request = new_request(HttpMethod::Post, path, body, None);
        let response = self.send(&request).await?;
        decode(&request, &response)
    }

    /// Sends a `PATCH` with `body` as JSON and decodes the answer.
    pub(crate) async fn patch<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Value, ApiError> {
        let body = json_body(HttpMethod::Patch, path, body)?;
        let request = new_request(HttpMethod::Patch, path, Some(body), None);
        let response = self.send(&request).await?;
        decode(&request, &response)
    }

    /// Sends a `DELETE` and returns the raw answer.
    pub(crate) async fn delete(&self, path: &str) -> Result<HttpResponse, ApiError> {
        let request = new_request(HttpMethod::Delete, path, None, None);
        self.send(&request).await
    }

    async fn read(&self, path: &str, query: HashMap<String, String>) -> Result<Value, ApiError> {
        let query = if query.is_empty() { None } else { Some(query) };
        let request = new_request(HttpMethod::Get, path, None, query);
        let response = self.send(&request).await?;
        decode(&request, &response)
    }

    async fn send(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        self.transport
            .request(request.clone())
            .await
            .map_err(|source| ApiError::new(request.clone(), source))
    }
}

/// Builds `<api_url><version>/shops/<id_shop>/`.
fn shop_base_uri(credential: &Credential, config: &WizishopConfig) -> String {
    let mut base_uri = config
        .api_url()
        .join(&format!("{}/", config.api_version().as_path_segment()));

    if let Some(shop_id) = credential.shop_id() {
        base_uri.push_str(&format!("shops/{}/", urlencoding::encode(&shop_id)));
    }

    base_uri
}

fn new_request(
    http_method: HttpMethod,
    path: &str,
    body: Option<Value>,
    query: Option<HashMap<String, String>>,
) -> HttpRequest {
    HttpRequest {
        http_method,
        path: path.to_string(),
        body,
        query,
    }
}

fn json_body<B: Serialize + ?Sized>(
    http_method: HttpMethod,
    path: &str,
    body: &B,
) -> Result<Value, ApiError> {
    serde_json::to_value(body).map_err(|e| {
        ApiError::new(new_request(http_method, path, None, None), HttpError::Decode(e))
    })
}

fn decode(request: &HttpRequest, response: &HttpResponse) -> Result<Value, ApiError> {
    response
        .json()
        .map_err(|e| ApiError::new(request.clone(), HttpError::Decode(e)))
}

/// Takes the `results` array out of a collection page.
fn extract_results(page: Value) -> Vec<Value> {
    match page {
        Value::Object(mut fields) => match fields.remove("results") {
            Some(Value::Array(items)) => items,
            _ => Vec::new(),
        },
        _ => Vec::new(),
    }
}

/// Builds `<collection>/<id>` with the identifier percent-encoded.
pub(crate) fn resource_path(collection: &str, id: &str) -> String {
    format!("{collection}/{}", urlencoding::encode(id))
}
