//! Constants for local test networks.

use crate::NetworkConstants;
use alloy::primitives::Address;
use std::borrow::Cow;

/// Name for the network.
pub const NAME: &str = "test";
/// Test chain id.
pub const CHAIN_ID: u64 = 1337;
/// Test address for the exchange.
pub const EXCHANGE: Address = Address::repeat_byte(0x11);
/// Test address for the atomicizer.
pub const ATOMICIZER: Address = Address::repeat_byte(0x22);
/// Test address for the proxy registry.
pub const PROXY_REGISTRY: Address = Address::repeat_byte(0x33);
/// Test address for the token transfer proxy.
pub const TOKEN_TRANSFER_PROXY: Address = Address::repeat_byte(0x44);
/// Test address for the fee recipient.
pub const FEE_RECIPIENT: Address = Address::repeat_byte(0x55);
/// Test address for WETH.
pub const WETH: Address = Address::repeat_byte(0x66);
/// The URL of the marketplace API in tests.
pub const API_BASE_URL: &str = "http://localhost:8080";

/// Network constants for tests.
pub const TEST_NETWORK: NetworkConstants = NetworkConstants::new(
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
