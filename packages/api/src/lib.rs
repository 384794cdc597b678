//! # API crate: typed client for the storefront's proxy routes
//!
//! Pages never talk to the commerce backend directly. They call the same-origin
//! `/api/*` routes served by the `proxy` crate, through [`ApiClient`], and get back
//! the canonical types from `shop`.
//!
//! ## Modules
//!
//! | Module | Routes |
//! |--------|--------|
//! | [`account`] | `/api/auth/me`, `/api/auth/login`, `/api/auth/register`, `/api/auth/logout` |
//! | [`catalog`] | `/api/products`, `/api/articles`, `/api/konsultan` |
//! | [`cart`] | `/api/cart/*`, `/api/wishlist/*` |
//! | [`orders`] | `/api/orders`, `/api/payment/create`, `/api/appointment`, both status routes |
//! | [`shipping`] | `/api/shipping/*` |
//!
//! Every call returns `Result<_, ApiError>`. A 404 always surfaces as
//! [`ApiError::NotFound`] so callers can tell "absent" from "failed".

pub mod account;
pub mod cart;
pub mod catalog;
mod client;
pub mod error;
pub mod orders;
pub mod shipping;

pub use account::{LoginRequest, RegisterRequest};
pub use cart::{CartAddRequest, CartUpdateRequest, WishlistAddRequest};
pub use client::{ApiClient, DEFAULT_ORIGIN};
pub use error::ApiError;
pub use orders::{AppointmentRequest, AppointmentStatus, CheckoutRequest, OrderStatus, PaymentSession};
pub use shipping::ShippingCostRequest;
