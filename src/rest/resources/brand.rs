use std::collections::HashMap;
use std::fmt;

use serde_json::Value;

use crate::clients::Transport;
use crate::rest::client::{resource_path, AuthenticatedApiClient};
use crate::rest::errors::ClientError;
use crate::rest::listing::Listing;
use crate::rest::params::{BrandUpdate, NewBrand};

const BRANDS_PATH: &str = "brands";

impl<T: Transport> AuthenticatedApiClient<T> {
    /// Reads one brand, or `None` if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Api`] if the request fails.
    pub async fn get_brand(
        &self,
        brand_id: impl fmt::Display,
        params: Option<HashMap<String, String>>,
    ) -> Result<Option<Value>, ClientError> {
        let path = resource_path(BRANDS_PATH, &brand_id.to_string());
        Ok(self.get_single_result(&path, params).await?)
    }

    /// Reads every brand of the shop.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Api`] if a page request fails with anything
    /// but `404`.
    pub async fn get_brands(
        &self,
        params: Option<HashMap<String, String>>,
    ) -> Result<Listing, ClientError> {
        Ok(self.get_all_results(BRANDS_PATH, params).await?)
    }

    /// Creates a brand and returns it as stored.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Api`] if the request fails.
    pub async fn create_brand(&self, brand: &NewBrand) -> Result<Value, ClientError> {
        Ok(self.post(BRANDS_PATH, Some(brand)).await?)
    }

    /// Updates a brand and returns it as stored.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Api`] if the request fails.
    pub async fn update_brand(
        &self,
        brand_id: impl fmt::Display,
        update: &BrandUpdate,
    ) -> Result<Value, ClientError> {
        let path = resource_path(BRANDS_PATH, &brand_id.to_string());
        Ok(self.patch(&path, update).await?)
    }

    /// Deletes a brand. Returns `true` if the server answered
    /// `204 No Content`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Api`] if the request fails.
    pub async fn delete_brand(&self, brand_id: impl fmt::Display) -> Result<bool, ClientError> {
        let path = resource_path(BRANDS_PATH, &brand_id.to_string());
        let response = self.delete(&path).await?;
        Ok(response.code == 204)
    }
}
