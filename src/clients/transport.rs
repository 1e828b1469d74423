//! The transport seam between endpoint logic and the network.

use async_trait::async_trait;

use crate::clients::errors::HttpError;
use crate::clients::http_request::HttpRequest;
use crate::clients::http_response::HttpResponse;

/// Sends [`HttpRequest`]s and returns their [`HttpResponse`]s.
///
/// [`HttpClient`](crate::clients::HttpClient) is the production
/// implementation. The endpoint client only depends on this trait, so tests
/// can substitute an in-memory fake.
///
/// Implementations are expected to resolve `request.path` against their own
/// base URI, to attach their own default headers, and to report any non-2xx
/// status as [`HttpError::Response`].
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends a request.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] for invalid requests, network failures and
    /// non-2xx responses.
    async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for std::sync::Arc<T> {
    async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        (**self).request(request).await
    }
}
