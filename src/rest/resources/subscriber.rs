use std::collections::HashMap;

use crate::clients::Transport;
use crate::rest::client::AuthenticatedApiClient;
use crate::rest::errors::ClientError;
use crate::rest::listing::Listing;

const SUBSCRIBERS_PATH: &str = "newsletter/subscribers";

impl<T: Transport> AuthenticatedApiClient<T> {
    /// Reads every newsletter subscriber of the shop.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Api`] if a page request fails with anything
    /// but `404`.
    pub async fn get_newsletter_subscribers(
        &self,
        params: Option<HashMap<String, String>>,
    ) -> Result<Listing, ClientError> {
        Ok(self.get_all_results(SUBSCRIBERS_PATH, params).await?)
    }
}
