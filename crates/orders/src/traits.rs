use alloy::primitives::{Address, TxHash, U256};
use core::future::Future;
use opensea_api::types::{PaymentTokenQuery, PaymentTokensResponse};
use opensea_types::{OpenSeaAsset, SignedOrder, UnhashedOrder};

/// A trait for the marketplace backend.
///
/// Implementors look up payment tokens and assets, and accept signed orders
/// into the orderbook.
pub trait MarketplaceApi {
    /// The error type returned by marketplace operations.
    type Error: core::error::Error + Send + Sync + 'static;

    /// Fetch the payment tokens matching a query.
    fn get_payment_tokens(
        &self,
        query: &PaymentTokenQuery,
    ) -> impl Future<Output = Result<PaymentTokensResponse, Self::Error>> + Send;

    /// Fetch an asset and its contract's fee configuration.
    fn get_asset(
        &self,
        token_address: Address,
        token_id: Option<&str>,
    ) -> impl Future<Output = Result<OpenSeaAsset, Self::Error>> + Send;

    /// Post a signed order, returning the order as the marketplace stored
    /// it.
    fn post_order(
        &self,
        order: &SignedOrder,
    ) -> impl Future<Output = Result<SignedOrder, Self::Error>> + Send;
}

/// A trait for the on-chain state and transactions orders depend on.
///
/// Read methods query contract state. Write methods send a transaction from
/// `owner` and resolve once it is mined, returning its hash.
pub trait ChainAccess {
    /// The error type returned by chain operations.
    type Error: core::error::Error + Send + Sync + 'static;

    /// The proxy registered for `owner`, if any.
    fn proxy_for(
        &self,
        registry: Address,
        owner: Address,
    ) -> impl Future<Output = Result<Option<Address>, Self::Error>> + Send;

    /// Register a proxy for `owner`.
    fn register_proxy(
        &self,
        registry: Address,
        owner: Address,
    ) -> impl Future<Output = Result<TxHash, Self::Error>> + Send;

    /// Whether `operator` may move every ERC-721 or ERC-1155 token of
    /// `owner` in `token`.
    fn is_approved_for_all(
        &self,
        token: Address,
        owner: Address,
        operator: Address,
    ) -> impl Future<Output = Result<bool, Self::Error>> + Send;

    /// Let `operator` move every ERC-721 or ERC-1155 token of `owner` in
    /// `token`.
    fn set_approval_for_all(
        &self,
        token: Address,
        owner: Address,
        operator: Address,
    ) -> impl Future<Output = Result<TxHash, Self::Error>> + Send;

    /// The ERC-20 allowance of `spender` over the tokens of `owner`.
    fn allowance(
        &self,
        token: Address,
        owner: Address,
        spender: Address,
    ) -> impl Future<Output = Result<U256, Self::Error>> + Send;

    /// Set the ERC-20 allowance of `spender` over the tokens of `owner`.
    fn approve(
        &self,
        token: Address,
        owner: Address,
        spender: Address,
        amount: U256,
    ) -> impl Future<Output = Result<TxHash, Self::Error>> + Send;

    /// The ERC-20 balance of `owner`.
    fn erc20_balance(
        &self,
        token: Address,
        owner: Address,
    ) -> impl Future<Output = Result<U256, Self::Error>> + Send;

    /// The owner of an ERC-721 token.
    fn owner_of(
        &self,
        token: Address,
        token_id: U256,
    ) -> impl Future<Output = Result<Address, Self::Error>> + Send;

    /// The ERC-1155 balance of `owner` for one token id.
    fn erc1155_balance(
        &self,
        token: Address,
        owner: Address,
        token_id: U256,
    ) -> impl Future<Output = Result<U256, Self::Error>> + Send;

    /// Ask the exchange whether the order's parameters are valid.
    fn validate_order_parameters(
        &self,
        exchange: Address,
        order: &UnhashedOrder,
    ) -> impl Future<Output = Result<bool, Self::Error>> + Send;
}
