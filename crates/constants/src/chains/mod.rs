/// Mainnet constants.
pub mod mainnet;

/// Rinkeby testnet constants.
pub mod rinkeby;

/// Constants for local test networks.
pub mod test_utils;
