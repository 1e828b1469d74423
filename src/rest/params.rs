//! Typed parameters and request bodies for endpoint methods.
//!
//! Query parameters travel as `HashMap<String, String>`; the types here
//! validate and format the few parameters the API constrains before they
//! are flattened into that map.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDateTime, TimeZone};
use serde::{Deserialize, Serialize};

use crate::rest::errors::InvalidArgumentError;

/// Lowest order status code accepted by the `status_code` filter.
pub const MIN_ORDER_STATUS_CODE: i64 = 0;

/// Highest order status code accepted by the `status_code` filter.
pub const MAX_ORDER_STATUS_CODE: i64 = 50;

/// Text form the API expects for date filters.
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Order lifecycle states and their numeric codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderStatus {
    Abandoned,
    PendingPayment,
    PendingPaymentVerification,
    PendingReplenishment,
    PendingPreparation,
    Preparing,
    PartiallySent,
    Sent,
    Delivered,
    BeingReturned,
    Returned,
    Refunded,
    Canceled,
}

impl OrderStatus {
    /// All statuses in code order.
    pub const ALL: [Self; 13] = [
        Self::Abandoned,
        Self::PendingPayment,
        Self::PendingPaymentVerification,
        Self::PendingReplenishment,
        Self::PendingPreparation,
        Self::Preparing,
        Self::PartiallySent,
        Self::Sent,
        Self::Delivered,
        Self::BeingReturned,
        Self::Returned,
        Self::Refunded,
        Self::Canceled,
    ];

    /// Returns the numeric code the API uses for this status.
    #[must_use]
    pub const fn code(self) -> i64 {
        match self {
            Self::Abandoned => 0,
            Self::PendingPayment => 5,
            Self::PendingPaymentVerification => 10,
            Self::PendingReplenishment => 11,
            Self::PendingPreparation => 20,
            Self::Preparing => 25,
            Self::PartiallySent => 29,
            Self::Sent => 30,
            Self::Delivered => 35,
            Self::BeingReturned => 40,
            Self::Returned => 45,
            Self::Refunded => 46,
            Self::Canceled => 50,
        }
    }

    /// Looks up the status for a numeric code.
    #[must_use]
    pub fn from_code(code: i64) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.code() == code)
    }
}

/// A date filter value: either pre-formatted text sent verbatim, or a
/// date/time formatted as `YYYY-MM-DD HH:MM:SS`.
///
/// Zoned date/times are formatted in their own offset, without conversion.
///
/// # Example
///
/// ```rust
/// use chrono::NaiveDate;
/// use wizishop_api::rest::DateFilter;
///
/// let at = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap().and_hms_opt(7, 5, 0).unwrap();
/// assert_eq!(DateFilter::from(at).to_string(), "2024-03-09 07:05:00");
/// assert_eq!(DateFilter::from("yesterday").to_string(), "yesterday");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateFilter {
    /// Sent as is.
    Text(String),
    /// Formatted with [`DATE_FORMAT`].
    DateTime(NaiveDateTime),
}

impl fmt::Display for DateFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::DateTime(at) => write!(f, "{}", at.format(DATE_FORMAT)),
        }
    }
}

impl From<&str> for DateFilter {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for DateFilter {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<NaiveDateTime> for DateFilter {
    fn from(at: NaiveDateTime) -> Self {
        Self::DateTime(at)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for DateFilter {
    fn from(at: DateTime<Tz>) -> Self {
        Self::DateTime(at.naive_local())
    }
}

/// Filters for [`get_orders`](crate::rest::AuthenticatedApiClient::get_orders).
///
/// # Example
///
/// ```rust
/// use wizishop_api::rest::{OrderQuery, OrderStatus};
///
/// let params = OrderQuery::new()
///     .status(OrderStatus::Sent)
///     .start_date("2024-01-01 00:00:00")
///     .into_params()
///     .unwrap();
///
/// assert_eq!(params["status_code"], "30");
/// assert_eq!(params["start_date"], "2024-01-01 00:00:00");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderQuery {
    status_code: Option<i64>,
    start_date: Option<DateFilter>,
    end_date: Option<DateFilter>,
    extra: HashMap<String, String>,
}

impl OrderQuery {
    /// Creates an empty query (all orders).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Filters on a raw status code, validated when the query is sent.
    #[must_use]
    pub const fn status_code(mut self, code: i64) -> Self {
        self.status_code = Some(code);
        self
    }

    /// Filters on a known status.
    #[must_use]
    pub const fn status(self, status: OrderStatus) -> Self {
        self.status_code(status.code())
    }

    #[must_use]
    pub fn start_date(mut self, date: impl Into<DateFilter>) -> Self {
        self.start_date = Some(date.into());
        self
    }

    #[must_use]
    pub fn end_date(mut self, date: impl Into<DateFilter>) -> Self {
        self.end_date = Some(date.into());
        self
    }

    /// Adds any other query parameter, such as `page` or `limit`.
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Validates the query and flattens it into query parameters.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgumentError::StatusCodeOutOfRange`] if the status
    /// code is outside `0..=50`.
    pub fn into_params(self) -> Result<HashMap<String, String>, InvalidArgumentError> {
        let mut params = self.extra;

        if let Some(code) = self.status_code {
            if !(MIN_ORDER_STATUS_CODE..=MAX_ORDER_STATUS_CODE).contains(&code) {
                return Err(InvalidArgumentError::StatusCodeOutOfRange { code });
            }
            params.insert("status_code".to_string(), code.to_string());
        }

        if let Some(date) = self.start_date {
            params.insert("start_date".to_string(), date.to_string());
        }

        if let Some(date) = self.end_date {
            params.insert("end_date".to_string(), date.to_string());
        }

        Ok(params)
    }
}

/// How a stock update applies the given value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockUpdateMethod {
    /// Stock becomes the value.
    #[default]
    Replace,
    /// Value is added to the stock.
    Increase,
    /// Value is subtracted from the stock.
    Decrease,
}

impl StockUpdateMethod {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Replace => "replace",
            Self::Increase => "increase",
            Self::Decrease => "decrease",
        }
    }
}

impl fmt::Display for StockUpdateMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StockUpdateMethod {
    type Err = InvalidArgumentError;

    /// Parses the exact lowercase method name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "replace" => Ok(Self::Replace),
            "increase" => Ok(Self::Increase),
            "decrease" => Ok(Self::Decrease),
            other => Err(InvalidArgumentError::InvalidStockMethod {
                method: other.to_string(),
            }),
        }
    }
}

/// Order status changes exposed by the API, each a `POST` to
/// `orders/<id>/<segment>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderTransition {
    PendingPayment,
    PendingPaymentVerification,
    PendingReplenishment,
    PendingPreparation,
    Preparing,
    PartiallySent,
    Ship,
    Delivered,
    Return,
    Returned,
    Refunded,
}

impl OrderTransition {
    /// Returns the last path segment of the transition endpoint.
    #[must_use]
    pub const fn path_segment(self) -> &'static str {
        match self {
            Self::PendingPayment => "pending-payment",
            Self::PendingPaymentVerification => "pending-payment-verification",
            Self::PendingReplenishment => "pending-replenishment",
            Self::PendingPreparation => "pending-preparation",
            Self::Preparing => "preparing",
            Self::PartiallySent => "partially-sent",
            Self::Ship => "ship",
            Self::Delivered => "delivered",
            Self::Return => "return",
            Self::Returned => "returned",
            Self::Refunded => "refunded",
        }
    }

    /// Returns the status the order is in after the transition.
    #[must_use]
    pub const fn target_status(self) -> OrderStatus {
        match self {
            Self::PendingPayment => OrderStatus::PendingPayment,
            Self::PendingPaymentVerification => OrderStatus::PendingPaymentVerification,
            Self::PendingReplenishment => OrderStatus::PendingReplenishment,
            Self::PendingPreparation => OrderStatus::PendingPreparation,
            Self::Preparing => OrderStatus::Preparing,
            Self::PartiallySent => OrderStatus::PartiallySent,
            Self::Ship => OrderStatus::Sent,
            Self::Delivered => OrderStatus::Delivered,
            Self::Return => OrderStatus::BeingReturned,
            Self::Returned => OrderStatus::Returned,
            Self::Refunded => OrderStatus::Refunded,
        }
    }
}

/// Body of a brand creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewBrand {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl NewBrand {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            image_url: None,
        }
    }

    #[must_use]
    pub fn image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }
}

/// Body of a brand update. The name is always sent; omitted fields are
/// left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandUpdate {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl BrandUpdate {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: None,
            image_url: None,
        }
    }

    #[must_use]
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    #[must_use]
    pub fn image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }
}

/// A tracking number for one shipping method of an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackingNumber {
    pub shipping_id: i64,
    pub tracking_number: String,
}

/// Body of the `ship` and `partially-sent` transitions.
///
/// ```rust
/// use wizishop_api::rest::TrackingNumbers;
///
/// let body = TrackingNumbers::new().add(39, "XVBFD-2");
/// assert_eq!(
///     serde_json::to_value(&body).unwrap(),
///     serde_json::json!({"tracking_numbers": [{"shipping_id": 39, "tracking_number": "XVBFD-2"}]})
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackingNumbers {
    pub tracking_numbers: Vec<TrackingNumber>,
}

impl TrackingNumbers {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn add(mut self, shipping_id: i64, tracking_number: impl Into<String>) -> Self {
        self.tracking_numbers.push(TrackingNumber {
            shipping_id,
            tracking_number: tracking_number.into(),
        });
        self
    }
}
