//! Authenticated access to the shop-scoped WiziShop REST API.
//!
//! - [`AuthenticatedApiClient`]: The endpoint client, one per credential
//! - [`assemble_results`]: The page walk behind every list method
//! - [`OrderQuery`], [`StockUpdateMethod`], [`TrackingNumbers`], ...: Typed
//!   parameters validated before a request is sent
//! - [`ClientError`]: Returned by every endpoint method
//!
//! # Example
//!
//! ```rust,ignore
//! use wizishop_api::rest::{NewBrand, OrderQuery, OrderStatus};
//!
//! let brand = client.create_brand(&NewBrand::new("Acme")).await?;
//! let sent = client
//!     .get_orders(OrderQuery::new().status(OrderStatus::Sent))
//!     .await?;
//!
//! // 404 on a detail read means "no such resource"
//! assert!(client.get_brand(999_999, None).await?.is_none());
//! ```
//!
//! # Pagination
//!
//! List methods return every item of the collection: pages of
//! [`PAGE_SIZE`] items are requested one after the other. Passing `page` or
//! `limit` in the parameters requests only that page, and the page body is
//! returned as is (see [`Listing`]).

mod client;
mod errors;
mod listing;
mod pagination;
mod params;
pub mod resources;

pub use client::AuthenticatedApiClient;
pub use errors::{ApiError, ClientError, InvalidArgumentError};
pub use listing::Listing;
pub use pagination::{assemble_results, ResultPage, PAGE_SIZE};
pub use params::{
    BrandUpdate, DateFilter, NewBrand, OrderQuery, OrderStatus, OrderTransition, StockUpdateMethod,
    TrackingNumber, TrackingNumbers, DATE_FORMAT, MAX_ORDER_STATUS_CODE, MIN_ORDER_STATUS_CODE,
};
