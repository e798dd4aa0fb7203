//! Client for the OpenSea marketplace API: payment tokens, assets and the
//! Wyvern orderbook.

#![warn(
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    clippy::missing_const_for_fn,
    rustdoc::all
)]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![deny(unused_must_use, rust_2018_idioms)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod client;
pub use client::OpenSeaApi;

mod error;
pub use error::{ApiError, Result};

/// Request and response types of the [`OpenSeaApi`].
pub mod types;
pub use types::{
    OrderJson, OrderQuery, OrdersResponse, PaymentTokenQuery, PaymentTokensResponse,
    DEFAULT_PAGE_SIZE,
};
