//! OpenSea Orders Library
//!
//! Contains the [`OpenSeaPort`] client, which builds Wyvern buy and sell
//! orders for single assets and bundles, performs the on-chain approvals
//! they need, checks them against the exchange's matching rules, and signs
//! and posts them to the marketplace.
//!
//! The marketplace and the chain are reached through the [`MarketplaceApi`]
//! and [`ChainAccess`] traits. [`OpenSeaApi`] and [`ProviderChain`] are the
//! production implementations.
//!
//! [`OpenSeaApi`]: opensea_api::OpenSeaApi

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

mod error;
pub use error::OpenSeaPortError;

mod impls;
pub use impls::{ProviderChain, ProviderChainError};

mod params;
pub use params::{BundleBuyParams, BundleSellParams, BuyParams, SellParams};

mod port;
pub use port::OpenSeaPort;

mod traits;
pub use traits::{ChainAccess, MarketplaceApi};
