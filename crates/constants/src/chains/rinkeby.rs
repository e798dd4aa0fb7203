//! Constants for the Rinkeby testnet.

use crate::NetworkConstants;
use alloy::primitives::{address, Address};
use std::borrow::Cow;

/// Name for the network.
pub const NAME: &str = "rinkeby";
/// Chain ID for rinkeby.
pub const CHAIN_ID: u64 = 4;
/// `WyvernExchange` contract address on rinkeby.
pub const EXCHANGE: Address = address!("0x5206e78b21ce315ce284fb24cf05e0585a93b1d9");
/// `WyvernAtomicizer` contract address on rinkeby.
pub const ATOMICIZER: Address = address!("0x613a51e9f5b3d1c3b7c8ec1a6e1c42ab43cc1e62");
/// `WyvernProxyRegistry` contract address on rinkeby.
pub const PROXY_REGISTRY: Address = address!("0xf57b2c51ded3a29e6891aba85459d600256cf317");
/// `WyvernTokenTransferProxy` contract address on rinkeby.
pub const TOKEN_TRANSFER_PROXY: Address = address!("0x82d102457854c985221249f86659c9d6cf12aa72");
/// OpenSea fee recipient on rinkeby.
pub const FEE_RECIPIENT: Address = address!("0x5b3256965e7c3cf26e11fcaf296dfc8807c01073");
/// WETH on rinkeby.
pub const WETH: Address = address!("0xc778417e063141139fce010982780140aa0cd5ab");
/// Marketplace API on rinkeby.
pub const API_BASE_URL: &str = "https://rinkeby-api.opensea.io";

/// Network constants for rinkeby.
pub const RINKEBY: NetworkConstants = NetworkConstants::new(
    CHAIN_ID,
    Cow::Borrowed(NAME),
    EXCHANGE,
    ATOMICIZER,
    PROXY_REGISTRY,
    TOKEN_TRANSFER_PROXY,
    FEE_RECIPIENT,
    WETH,
    Cow::Borrowed(API_BASE_URL),
);
