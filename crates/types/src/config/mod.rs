mod error;
pub use error::ConfigError;

pub mod env_utils;

use opensea_constants::{KnownNetworks, NetworkConstants};
use url::Url;

/// Environment variable naming the network.
const NETWORK: &str = "OPENSEA_NETWORK";
/// Environment variable holding the marketplace API key.
const API_KEY: &str = "OPENSEA_API_KEY";
/// Environment variable overriding the marketplace API URL.
const API_URL: &str = "OPENSEA_API_URL";
/// Environment variable holding the Ethereum RPC URL.
const RPC_URL: &str = "ETH_RPC_URL";

/// Configuration of an SDK client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SdkConfig {
    /// Contract addresses of the network.
    pub network: NetworkConstants,
    /// Marketplace API key.
    pub api_key: Option<String>,
    /// Marketplace API base URL, ending with `/`.
    pub api_url: Url,
    /// Ethereum JSON-RPC URL.
    pub rpc_url: Option<Url>,
}

impl SdkConfig {
    /// Configuration for a known network, with its default API URL and no
    /// credentials.
    pub fn new(network: KnownNetworks) -> Result<Self, ConfigError> {
        Self::for_constants(NetworkConstants::from(network))
    }

    /// Configuration for a set of network constants.
    pub fn for_constants(network: NetworkConstants) -> Result<Self, ConfigError> {
        let api_url = env_utils::parse_base_url(API_URL, network.api_base_url())?;
        Ok(Self { network, api_key: None, api_url, rpc_url: None })
    }

    /// Override the API URL.
    pub fn with_api_url(mut self, api_url: Url) -> Self {
        self.api_url = api_url;
        self
    }

    /// Set the API key.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the RPC URL.
    pub fn with_rpc_url(mut self, rpc_url: Url) -> Self {
        self.rpc_url = Some(rpc_url);
        self
    }

    /// Load the configuration from the environment.
    ///
    /// - `OPENSEA_NETWORK`: network name, defaults to `main`.
    /// - `OPENSEA_API_KEY`: optional API key.
    /// - `OPENSEA_API_URL`: optional override of the network's API URL.
    /// - `ETH_RPC_URL`: optional Ethereum JSON-RPC URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        let network = env_utils::optional_network(NETWORK)?.unwrap_or(KnownNetworks::Main);
        let mut config = Self::new(network)?;
        config.api_key = env_utils::optional(API_KEY);
        if let Some(api_url) = env_utils::optional_url(API_URL)? {
            config.api_url = api_url;
        }
        config.rpc_url = env_utils::optional_url(RPC_URL)?;
        Ok(config)
    }
}
