//! Endpoint methods of [`AuthenticatedApiClient`](crate::rest::AuthenticatedApiClient).
//!
//! Each submodule adds one resource's methods to the client:
//!
//! | Module | Paths |
//! |--------|-------|
//! | `brand` | `brands`, `brands/<id>` |
//! | `sku` | `skus`, `skus/<sku>` |
//! | `customer` | `customers`, `customers/<id>` |
//! | `subscriber` | `newsletter/subscribers` |
//! | `order` | `orders`, `orders/<id>`, `orders/<id>/<document or transition>` |
//!
//! Detail reads return `Option<Value>`, list reads a [`Listing`](crate::rest::Listing);
//! records are passed through as the server sends them.

mod brand;
mod customer;
mod order;
mod sku;
mod subscriber;
