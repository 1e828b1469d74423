use std::collections::HashMap;
use std::fmt;

use serde_json::Value;

use crate::clients::Transport;
use crate::rest::client::{resource_path, AuthenticatedApiClient};
use crate::rest::errors::ClientError;
use crate::rest::listing::Listing;
use crate::rest::params::{OrderQuery, OrderTransition, TrackingNumbers};

const ORDERS_PATH: &str = "orders";

fn order_path(order_id: &impl fmt::Display, suffix: &str) -> String {
    format!("{}/{suffix}", resource_path(ORDERS_PATH, &order_id.to_string()))
}

impl<T: Transport> AuthenticatedApiClient<T> {
    /// Reads one order, or `None` if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Api`] if the request fails.
    pub async fn get_order(
        &self,
        order_id: impl fmt::Display,
        params: Option<HashMap<String, String>>,
    ) -> Result<Option<Value>, ClientError> {
        let path = resource_path(ORDERS_PATH, &order_id.to_string());
        Ok(self.get_single_result(&path, params).await?)
    }

    /// Reads every order matching `query`.
    ///
    /// # Errors
    ///
    /// - [`ClientError::InvalidArgument`] if the status code filter is out
    ///   of range; nothing is sent
    /// - [`ClientError::Api`] if a page request fails with anything but `404`
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use chrono::Utc;
    /// use wizishop_api::rest::{OrderQuery, OrderStatus};
    ///
    /// let to_prepare = client
    ///     .get_orders(
    ///         OrderQuery::new()
    ///             .status(OrderStatus::PendingPreparation)
    ///             .end_date(Utc::now()),
    ///     )
    ///     .await?;
    /// ```
    pub async fn get_orders(&self, query: OrderQuery) -> Result<Listing, ClientError> {
        let params = query.into_params()?;
        Ok(self.get_all_results(ORDERS_PATH, Some(params)).await?)
    }

    /// Downloads the invoice of an order (PDF bytes).
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Api`] if the request fails, `404` included.
    pub async fn get_invoice_for_order(
        &self,
        order_id: impl fmt::Display,
        params: Option<HashMap<String, String>>,
    ) -> Result<Vec<u8>, ClientError> {
        Ok(self.get_bytes(&order_path(&order_id, "invoice"), params).await?)
    }

    /// Downloads the picking slip of an order (PDF bytes).
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Api`] if the request fails, `404` included.
    pub async fn get_picking_slip_for_order(
        &self,
        order_id: impl fmt::Display,
        params: Option<HashMap<String, String>>,
    ) -> Result<Vec<u8>, ClientError> {
        Ok(self
            .get_bytes(&order_path(&order_id, "picking-slip"), params)
            .await?)
    }

    /// Downloads the delivery slip of an order (PDF bytes).
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Api`] if the request fails, `404` included.
    pub async fn get_delivery_slip_for_order(
        &self,
        order_id: impl fmt::Display,
        params: Option<HashMap<String, String>>,
    ) -> Result<Vec<u8>, ClientError> {
        Ok(self
            .get_bytes(&order_path(&order_id, "delivery-slip"), params)
            .await?)
    }

    /// Applies a status transition and returns the order with its new status.
    ///
    /// `tracking_numbers` is sent as the body when given; the `ship` and
    /// `partially-sent` transitions expect it.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Api`] if the request fails.
    pub async fn transition_order(
        &self,
        order_id: impl fmt::Display,
        transition: OrderTransition,
        tracking_numbers: Option<&TrackingNumbers>,
    ) -> Result<Value, ClientError> {
        let path = order_path(&order_id, transition.path_segment());
        Ok(self.post(&path, tracking_numbers).await?)
    }

    /// Moves an order to "pending payment" (status 5).
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Api`] if the request fails.
    pub async fn pending_payment_order(
        &self,
        order_id: impl fmt::Display,
    ) -> Result<Value, ClientError> {
        self.transition_order(order_id, OrderTransition::PendingPayment, None)
            .await
    }

    /// Moves an order to "payment awaiting verification" (status 10).
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Api`] if the request fails.
    pub async fn pending_payment_verification_order(
        &self,
        order_id: impl fmt::Display,
    ) -> Result<Value, ClientError> {
        self.transition_order(order_id, OrderTransition::PendingPaymentVerification, None)
            .await
    }

    /// Moves an order to "awaiting replenishment" (status 11).
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Api`] if the request fails.
    pub async fn pending_replenishment_order(
        &self,
        order_id: impl fmt::Display,
    ) -> Result<Value, ClientError> {
        self.transition_order(order_id, OrderTransition::PendingReplenishment, None)
            .await
    }

    /// Moves an order to "awaiting preparation" (status 20).
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Api`] if the request fails.
    pub async fn pending_preparation_order(
        &self,
        order_id: impl fmt::Display,
    ) -> Result<Value, ClientError> {
        self.transition_order(order_id, OrderTransition::PendingPreparation, None)
            .await
    }

    /// Moves an order to "preparing" (status 25).
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Api`] if the request fails.
    pub async fn preparing_order(&self, order_id: impl fmt::Display) -> Result<Value, ClientError> {
        self.transition_order(order_id, OrderTransition::Preparing, None)
            .await
    }

    /// Moves an order to "partially sent" (status 29).
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Api`] if the request fails.
    pub async fn partially_sent_order(
        &self,
        order_id: impl fmt::Display,
        tracking_numbers: &TrackingNumbers,
    ) -> Result<Value, ClientError> {
        self.transition_order(order_id, OrderTransition::PartiallySent, Some(tracking_numbers))
            .await
    }

    /// Moves an order to "sent" (status 30).
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Api`] if the request fails.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use wizishop_api::rest::TrackingNumbers;
    ///
    /// let order = client
    ///     .ship_order(1042, &TrackingNumbers::new().add(39, "XVBFD-2"))
    ///     .await?;
    /// assert_eq!(order["status_code"], 30);
    /// ```
    pub async fn ship_order(
        &self,
        order_id: impl fmt::Display,
        tracking_numbers: &TrackingNumbers,
    ) -> Result<Value, ClientError> {
        self.transition_order(order_id, OrderTransition::Ship, Some(tracking_numbers))
            .await
    }

    /// Moves an order to "delivered" (status 35).
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Api`] if the request fails.
    pub async fn delivered_order(&self, order_id: impl fmt::Display) -> Result<Value, ClientError> {
        self.transition_order(order_id, OrderTransition::Delivered, None)
            .await
    }

    /// Moves an order to "being returned" (status 40).
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Api`] if the request fails.
    pub async fn return_order(&self, order_id: impl fmt::Display) -> Result<Value, ClientError> {
        self.transition_order(order_id, OrderTransition::Return, None)
            .await
    }

    /// Moves an order to "returned" (status 45).
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Api`] if the request fails.
    pub async fn returned_order(&self, order_id: impl fmt::Display) -> Result<Value, ClientError> {
        self.transition_order(order_id, OrderTransition::Returned, None)
            .await
    }

    /// Moves an order to "refunded" (status 46).
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Api`] if the request fails.
    pub async fn refunded_order(&self, order_id: impl fmt::Display) -> Result<Value, ClientError> {
        self.transition_order(order_id, OrderTransition::Refunded, None)
            .await
    }
}
