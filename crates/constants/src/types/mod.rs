mod networks;
pub use networks::{KnownNetworks, ParseNetworkError};

use alloy::primitives::Address;
use std::borrow::Cow;

/// Contract addresses and other configuration details for one network.
///
/// These are the addresses the SDK needs to build orders that the Wyvern
/// exchange on that network will accept, and the marketplace API that
/// indexes those orders.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkConstants {
    /// Chain ID.
    chain_id: u64,
    /// Human-readable network name.
    name: Cow<'static, str>,
    /// Address of the Wyvern exchange contract.
    exchange: Address,
    /// Address of the Wyvern atomicizer, the target of bundle orders.
    atomicizer: Address,
    /// Address of the Wyvern proxy registry.
    proxy_registry: Address,
    /// Address of the Wyvern token transfer proxy, which moves payment
    /// tokens.
    token_transfer_proxy: Address,
    /// Recipient of OpenSea's relayer fees.
    fee_recipient: Address,
    /// Canonical wrapped ether.
    weth: Address,
    /// Base URL of the marketplace API.
    api_base_url: Cow<'static, str>,
}

impl core::fmt::Display for NetworkConstants {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{{ name: {}, chain_id: {}, exchange: {}, atomicizer: {} }}",
            self.name, self.chain_id, self.exchange, self.atomicizer
        )
    }
}

impl NetworkConstants {
    /// Create a new set of network constants.
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        chain_id: u64,
        name: Cow<'static, str>,
        exchange: Address,
        atomicizer: Address,
        proxy_registry: Address,
        token_transfer_proxy: Address,
        fee_recipient: Address,
        weth: Address,
        api_base_url: Cow<'static, str>,
    ) -> Self {
        Self {
            chain_id,
            name,
            exchange,
            atomicizer,
            proxy_registry,
            token_transfer_proxy,
            fee_recipient,
            weth,
            api_base_url,
        }
    }

    /// Get the hard-coded mainnet constants.
    pub const fn mainnet() -> Self {
        crate::chains::mainnet::MAINNET
    }

    /// Get the hard-coded rinkeby constants.
    pub const fn rinkeby() -> Self {
        crate::chains::rinkeby::RINKEBY
    }

    /// Get the hard-coded local test constants.
    #[cfg(any(test, feature = "test-utils"))]
    pub const fn test() -> Self {
        crate::chains::test_utils::TEST_NETWORK
    }

    /// Get the chain ID.
    pub const fn chain_id(&self) -> u64 {
        self.chain_id
    }

    /// Get the network name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the Wyvern exchange address.
    pub const fn exchange(&self) -> Address {
        self.exchange
    }

    /// Get the Wyvern atomicizer address.
    pub const fn atomicizer(&self) -> Address {
        self.atomicizer
    }

    /// Get the Wyvern proxy registry address.
    pub const fn proxy_registry(&self) -> Address {
        self.proxy_registry
    }

    /// Get the Wyvern token transfer proxy address.
    pub const fn token_transfer_proxy(&self) -> Address {
        self.token_transfer_proxy
    }

    /// Get the OpenSea fee recipient.
    pub const fn fee_recipient(&self) -> Address {
        self.fee_recipient
    }

    /// Get the canonical wrapped ether address.
    pub const fn weth(&self) -> Address {
        self.weth
    }

    /// Get the marketplace API base URL.
    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    /// Replace the marketplace API base URL.
    pub fn with_api_base_url(self, api_base_url: impl Into<Cow<'static, str>>) -> Self {
        Self { api_base_url: api_base_url.into(), ..self }
    }

    /// True if the address is the canonical wrapped ether of this network.
    pub fn is_weth(&self, address: Address) -> bool {
        address == self.weth
    }
}

impl From<KnownNetworks> for NetworkConstants {
    fn from(network: KnownNetworks) -> Self {
        match network {
            KnownNetworks::Main => Self::mainnet(),
            KnownNetworks::Rinkeby => Self::rinkeby(),
            #[cfg(any(test, feature = "test-utils"))]
            KnownNetworks::Test => Self::test(),
        }
    }
}

impl TryFrom<u64> for NetworkConstants {
    type Error = ParseNetworkError;

    fn try_from(chain_id: u64) -> Result<Self, Self::Error> {
        KnownNetworks::try_from(chain_id).map(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_networks_resolve() {
        assert_eq!(NetworkConstants::from(KnownNetworks::Main).chain_id(), 1);
        assert_eq!(NetworkConstants::from(KnownNetworks::Rinkeby).chain_id(), 4);
        assert_eq!(NetworkConstants::try_from(1u64).unwrap(), NetworkConstants::mainnet());
        assert!(NetworkConstants::try_from(1337u64).is_err());
    }

    #[test]
    fn serde_roundtrip_uses_camel_case() {
        let json = serde_json::to_value(NetworkConstants::mainnet()).unwrap();
        assert!(json.get("tokenTransferProxy").is_some());
        assert!(json.get("apiBaseUrl").is_some());
        let back: NetworkConstants = serde_json::from_value(json).unwrap();
        assert_eq!(back, NetworkConstants::mainnet());
    }

    #[test]
    fn api_base_url_override() {
        let constants = NetworkConstants::rinkeby().with_api_base_url("http://localhost:8000");
        assert_eq!(constants.api_base_url(), "http://localhost:8000");
        assert_eq!(constants.exchange(), NetworkConstants::rinkeby().exchange());
    }
}
