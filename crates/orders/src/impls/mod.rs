mod api;

mod provider;
pub use provider::{ProviderChain, ProviderChainError};
