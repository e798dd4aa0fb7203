use crate::ChainAccess;
use alloy::{
    primitives::{Address, TxHash, U256},
    providers::{PendingTransactionError, Provider},
};
use opensea_types::UnhashedOrder;
use opensea_wyvern::{ProxyRegistry, WyvernExchange, IERC1155, IERC20, IERC721};
use tracing::{debug, instrument};

/// Errors returned by [`ProviderChain`].
#[derive(Debug, thiserror::Error)]
pub enum ProviderChainError {
    /// A contract call or transaction submission failed.
    #[error("contract error: {0}")]
    Contract(#[from] alloy::contract::Error),
    /// A submitted transaction was not confirmed.
    #[error("transaction not confirmed: {0}")]
    Pending(#[from] PendingTransactionError),
}

/// A [`ChainAccess`] backed by an alloy [`Provider`].
///
/// Transactions are sent `from` the owner of the assets, so the provider
/// must be able to sign for that account, e.g. via
/// `ProviderBuilder::wallet()`.
#[derive(Debug, Clone)]
pub struct ProviderChain<P> {
    provider: P,
}

impl<P> ProviderChain<P> {
    /// Wrap a provider.
    pub const fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Get a reference to the provider.
    pub const fn provider(&self) -> &P {
        &self.provider
    }

    /// Unwrap the provider.
    pub fn into_inner(self) -> P {
        self.provider
    }
}

impl<P> ChainAccess for ProviderChain<P>
where
    P: Provider + Send + Sync,
{
    type Error = ProviderChainError;

    async fn proxy_for(&self, registry: Address, owner: Address) -> Result<Option<Address>, Self::Error> {
        let proxy = ProxyRegistry::new(registry, &self.provider).proxies(owner).call().await?;
        Ok((!proxy.is_zero()).then_some(proxy))
    }

    #[instrument(skip(self))]
    async fn register_proxy(&self, registry: Address, owner: Address) -> Result<TxHash, Self::Error> {
        let pending =
            ProxyRegistry::new(registry, &self.provider).registerProxy().from(owner).send().await?;
        debug!(tx_hash = %pending.tx_hash(), "sent proxy registration");
        pending.watch().await.map_err(Into::into)
    }

    async fn is_approved_for_all(
        &self,
        token: Address,
        owner: Address,
        operator: Address,
    ) -> Result<bool, Self::Error> {
        // ERC-1155 shares the ERC-721 signature.
        IERC721::new(token, &self.provider)
            .isApprovedForAll(owner, operator)
            .call()
            .await
            .map_err(Into::into)
    }

    #[instrument(skip(self))]
    async fn set_approval_for_all(
        &self,
        token: Address,
        owner: Address,
        operator: Address,
    ) -> Result<TxHash, Self::Error> {
        let pending = IERC721::new(token, &self.provider)
            .setApprovalForAll(operator, true)
            .from(owner)
            .send()
            .await?;
        debug!(tx_hash = %pending.tx_hash(), "sent approval for all");
        pending.watch().await.map_err(Into::into)
    }

    async fn allowance(
        &self,
        token: Address,
        owner: Address,
        spender: Address,
    ) -> Result<U256, Self::Error> {
        IERC20::new(token, &self.provider).allowance(owner, spender).call().await.map_err(Into::into)
    }

    #[instrument(skip(self))]
    async fn approve(
        &self,
        token: Address,
        owner: Address,
        spender: Address,
        amount: U256,
    ) -> Result<TxHash, Self::Error> {
        let pending =
            IERC20::new(token, &self.provider).approve(spender, amount).from(owner).send().await?;
        debug!(tx_hash = %pending.tx_hash(), "sent token approval");
        pending.watch().await.map_err(Into::into)
    }

    async fn erc20_balance(&self, token: Address, owner: Address) -> Result<U256, Self::Error> {
        IERC20::new(token, &self.provider).balanceOf(owner).call().await.map_err(Into::into)
    }

    async fn owner_of(&self, token: Address, token_id: U256) -> Result<Address, Self::Error> {
        IERC721::new(token, &self.provider).ownerOf(token_id).call().await.map_err(Into::into)
    }

    async fn erc1155_balance(
        &self,
        token: Address,
        owner: Address,
        token_id: U256,
    ) -> Result<U256, Self::Error> {
        IERC1155::new(token, &self.provider).balanceOf(owner, token_id).call().await.map_err(Into::into)
    }

    async fn validate_order_parameters(
        &self,
        exchange: Address,
        order: &UnhashedOrder,
    ) -> Result<bool, Self::Error> {
        let call = order.to_validate_parameters_call();
        WyvernExchange::new(exchange, &self.provider)
            .call_builder(&call)
            .call()
            .await
            .map_err(Into::into)
    }
}
