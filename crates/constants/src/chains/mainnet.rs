//! Constants for Ethereum mainnet.

use crate::NetworkConstants;
use alloy::primitives::{address, Address};
use std::borrow::Cow;

/// Name for the network.
pub const NAME: &str = "main";
/// Chain ID for mainnet.
pub const CHAIN_ID: u64 = 1;
/// `WyvernExchange` contract address on mainnet.
pub const EXCHANGE: Address = address!("0x7be8076f4ea4a4ad08075c2508e481d6c946d12b");
/// `WyvernAtomicizer` contract address on mainnet.
pub const ATOMICIZER: Address = address!("0xc99f70bfd82fb7c8f8191fdfbfb735606b15e5c5");
/// `WyvernProxyRegistry` contract address on mainnet.
pub const PROXY_REGISTRY: Address = address!("0xa5409ec958c83c3f309868babaca7c86dcb077c1");
/// `WyvernTokenTransferProxy` contract address on mainnet.
pub const TOKEN_TRANSFER_PROXY: Address = address!("0xe5c783ee536cf5e63e792988335c4255169be4e1");
/// OpenSea fee recipient on mainnet.
pub const FEE_RECIPIENT: Address = address!("0x5b3256965e7c3cf26e11fcaf296dfc8807c01073");
/// WETH on mainnet.
pub const WETH: Address = address!("0xc02aaa39b223fe8d0a0e5c4f27ead9083c756cc2");
/// Marketplace API on mainnet.
pub const API_BASE_URL: &str = "https://api.opensea.io";

/// Network constants for mainnet.
pub const MAINNET: NetworkConstants = NetworkConstants::new(
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
