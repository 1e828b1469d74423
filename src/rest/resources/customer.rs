use std::collections::HashMap;
use std::fmt;

use serde_json::Value;

use crate::clients::Transport;
use crate::rest::client::{resource_path, AuthenticatedApiClient};
use crate::rest::errors::ClientError;
use crate::rest::listing::Listing;

const CUSTOMERS_PATH: &str = "customers";

impl<T: Transport> AuthenticatedApiClient<T> {
    /// Reads one customer, or `None` if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Api`] if the request fails.
    pub async fn get_customer(
        &self,
        customer_id: impl fmt::Display,
        params: Option<HashMap<String, String>>,
    ) -> Result<Option<Value>, ClientError> {
        let path = resource_path(CUSTOMERS_PATH, &customer_id.to_string());
        Ok(self.get_single_result(&path, params).await?)
    }

    /// Reads every customer of the shop.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Api`] if a page request fails with anything
    /// but `404`.
    pub async fn get_customers(
        &self,
        params: Option<HashMap<String, String>>,
    ) -> Result<Listing, ClientError> {
        Ok(self.get_all_results(CUSTOMERS_PATH, params).await?)
    }
}
