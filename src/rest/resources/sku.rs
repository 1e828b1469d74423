use std::collections::HashMap;

use serde_json::{json, Value};

use crate::clients::Transport;
use crate::rest::client::{resource_path, AuthenticatedApiClient};
use crate::rest::errors::ClientError;
use crate::rest::listing::Listing;
use crate::rest::params::StockUpdateMethod;

const SKUS_PATH: &str = "skus";

impl<T: Transport> AuthenticatedApiClient<T> {
    /// Reads one SKU, or `None` if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Api`] if the request fails.
    pub async fn get_sku(
        &self,
        sku: &str,
        params: Option<HashMap<String, String>>,
    ) -> Result<Option<Value>, ClientError> {
        Ok(self
            .get_single_result(&resource_path(SKUS_PATH, sku), params)
            .await?)
    }

    /// Reads every SKU of the shop.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Api`] if a page request fails with anything
    /// but `404`.
    pub async fn get_skus(
        &self,
        params: Option<HashMap<String, String>>,
    ) -> Result<Listing, ClientError> {
        Ok(self.get_all_results(SKUS_PATH, params).await?)
    }

    /// Reads every SKU with its detailed fields (`detailed=1` is always sent).
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Api`] if a page request fails with anything
    /// but `404`.
    pub async fn get_detailed_skus(
        &self,
        params: Option<HashMap<String, String>>,
    ) -> Result<Listing, ClientError> {
        let mut params = params.unwrap_or_default();
        params.insert("detailed".to_string(), "1".to_string());
        Ok(self.get_all_results(SKUS_PATH, Some(params)).await?)
    }

    /// Updates the stock of a SKU and returns the SKU as stored.
    ///
    /// `method` is one of `replace`, `increase` or `decrease` (see
    /// [`StockUpdateMethod`]).
    ///
    /// # Errors
    ///
    /// - [`ClientError::InvalidArgument`] if `method` is unknown; nothing is sent
    /// - [`ClientError::Api`] if the request fails
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use wizishop_api::rest::StockUpdateMethod;
    ///
    /// client.update_sku_stock("ABC-1", 3, StockUpdateMethod::Decrease.as_str()).await?;
    /// ```
    pub async fn update_sku_stock(
        &self,
        sku: &str,
        stock: i64,
        method: &str,
    ) -> Result<Value, ClientError> {
        let method: StockUpdateMethod = method.parse()?;
        let body = json!({
            "method": method.as_str(),
            "stock": stock,
        });

        Ok(self.patch(&resource_path(SKUS_PATH, sku), &body).await?)
    }
}
