//! OpenSea marketplace constants.
//!
//! This crate contains the protocol constants used when building Wyvern
//! orders, including fee defaults, timing bounds, and the per-network
//! addresses of the exchange, atomicizer, proxy registry and fee recipient.
//!

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

mod chains;
pub use chains::mainnet;
pub use chains::rinkeby;
pub use chains::test_utils;

mod types;
pub use types::{KnownNetworks, NetworkConstants, ParseNetworkError};

use alloy::primitives::{Address, U256};

/// The null address. Used as the payment token for orders priced in the
/// native currency, and as the taker of public orders.
pub const NULL_ADDRESS: Address = Address::ZERO;

/// Basis points in 100%.
pub const INVERSE_BASIS_POINT: u64 = 10_000;

/// Buyer fee charged by OpenSea when no asset contract fees are known.
pub const DEFAULT_BUYER_FEE_BASIS_POINTS: u64 = 0;

/// Seller fee charged by OpenSea when no asset contract fees are known.
pub const DEFAULT_SELLER_FEE_BASIS_POINTS: u64 = 250;

/// Bounty OpenSea adds for referrers with OpenSea accounts. Counts against
/// the maximum total bounty of a sell order.
pub const OPENSEA_SELLER_BOUNTY_BASIS_POINTS: u64 = 100;

/// Maximum total bounty when no asset contract fees are known.
pub const DEFAULT_MAX_BOUNTY: u64 = DEFAULT_SELLER_FEE_BASIS_POINTS;

/// Minimum number of seconds between now and a non-zero expiration time.
pub const MIN_EXPIRATION_SECONDS: u64 = 10;

/// Seconds after an English auction ends during which the winning bid may
/// still be matched.
pub const ORDER_MATCHING_LATENCY_SECONDS: u64 = 60 * 60 * 24 * 7;

/// Orders are listed this many seconds in the past, so that they are
/// immediately settleable despite clock drift between clients and chain.
pub const LISTING_TIME_BUFFER_SECONDS: u64 = 100;

/// Decimals of the native currency.
pub const NATIVE_DECIMALS: u8 = 18;

/// Allowance granted by fungible token approvals.
pub const MAX_UINT_256: U256 = U256::MAX;
