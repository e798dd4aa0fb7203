use std::str::FromStr;

/// The list of known networks as a string.
const KNOWN_NETWORKS: &str = "main, rinkeby, test";

/// Error type for parsing a network from a name or chain id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseNetworkError {
    /// The network name is not supported.
    #[error("network name {0} is not parseable. supported networks: {KNOWN_NETWORKS}")]
    NetworkNotSupported(String),
    /// The chain id is not supported.
    #[error("chain id {0} does not belong to a known network")]
    ChainIdNotSupported(u64),
}

/// Networks with hard-coded OpenSea deployments.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum KnownNetworks {
    /// Ethereum mainnet.
    Main,
    /// Rinkeby testnet.
    Rinkeby,
    /// Local test network.
    #[cfg(any(test, feature = "test-utils"))]
    Test,
}

impl KnownNetworks {
    /// The canonical name of the network.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Main => "main",
            Self::Rinkeby => "rinkeby",
            #[cfg(any(test, feature = "test-utils"))]
            Self::Test => "test",
        }
    }
}

impl core::fmt::Display for KnownNetworks {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for KnownNetworks {
    type Err = ParseNetworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();
        match s.as_str() {
            "main" | "mainnet" => Ok(Self::Main),
            "rinkeby" => Ok(Self::Rinkeby),
            #[cfg(any(test, feature = "test-utils"))]
            "test" => Ok(Self::Test),
            _ => Err(ParseNetworkError::NetworkNotSupported(s)),
        }
    }
}

impl TryFrom<u64> for KnownNetworks {
    type Error = ParseNetworkError;

    fn try_from(chain_id: u64) -> Result<Self, Self::Error> {
        match chain_id {
            crate::mainnet::CHAIN_ID => Ok(Self::Main),
            crate::rinkeby::CHAIN_ID => Ok(Self::Rinkeby),
            _ => Err(ParseNetworkError::ChainIdNotSupported(chain_id)),
        }
    }
}
