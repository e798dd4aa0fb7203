//! In-memory marketplace and chain for driving an
//! [`OpenSeaPort`](opensea_orders::OpenSeaPort) without a network.
use crate::{
    fixtures::{
        default_fee_contract, mana_token, mythereum_contract, weth_token, BENZENE_ADDRESS,
        DIGITAL_ART_CHAIN_ADDRESS, DIGITAL_ART_CHAIN_TOKEN_ID, DISSOLUTION_TOKEN_ID,
        ENJIN_ADDRESS, MANA_ADDRESS, MYTHEREUM_ADDRESS, MYTHEREUM_TOKEN_ID, MYTHEREUM_TOKEN_ID_2,
        SPIRIT_CLASH_TOKEN_ID,
    },
    test_constants::WETH,
    users::ALEX,
};
use alloy::primitives::{keccak256, Address, TxHash, U256};
use core::convert::Infallible;
use opensea_api::{
    types::{PaymentTokenQuery, PaymentTokensResponse},
    ApiError,
};
use opensea_constants::{NetworkConstants, NULL_ADDRESS};
use opensea_orders::{ChainAccess, MarketplaceApi, OpenSeaPort};
use opensea_types::{
    validate_order_parameters, AssetContract, OpenSeaAsset, PaymentToken, SignedOrder,
    UnhashedOrder, WyvernSchemaName,
};
use std::{
    collections::{HashMap, HashSet},
    str::FromStr,
    sync::{Arc, Mutex},
};

#[derive(Debug, Default)]
struct MarketplaceState {
    tokens: Vec<PaymentToken>,
    contracts: HashMap<Address, AssetContract>,
    posted: Vec<SignedOrder>,
}

/// A marketplace that serves fixed payment tokens and contracts and keeps
/// posted orders in memory.
#[derive(Debug, Clone, Default)]
pub struct MockMarketplaceApi {
    state: Arc<Mutex<MarketplaceState>>,
}

impl MockMarketplaceApi {
    /// An empty marketplace.
    pub fn new() -> Self {
        Self::default()
    }

    /// A marketplace knowing WETH, MANA and every fixture contract.
    pub fn seeded() -> Self {
        Self::new()
            .with_payment_token(weth_token())
            .with_payment_token(mana_token())
            .with_contract(mythereum_contract())
            .with_contract(default_fee_contract(
                DIGITAL_ART_CHAIN_ADDRESS,
                WyvernSchemaName::Erc721,
            ))
            .with_contract(default_fee_contract(ENJIN_ADDRESS, WyvernSchemaName::Erc1155))
            .with_contract(default_fee_contract(BENZENE_ADDRESS, WyvernSchemaName::Erc20))
    }

    /// Accept a payment token.
    pub fn with_payment_token(self, token: PaymentToken) -> Self {
        self.state.lock().unwrap().tokens.push(token);
        self
    }

    /// Index a contract.
    pub fn with_contract(self, contract: AssetContract) -> Self {
        self.state.lock().unwrap().contracts.insert(contract.address, contract);
        self
    }

    /// Orders posted so far, oldest first.
    pub fn posted_orders(&self) -> Vec<SignedOrder> {
        self.state.lock().unwrap().posted.clone()
    }
}

impl MarketplaceApi for MockMarketplaceApi {
    type Error = ApiError;

    async fn get_payment_tokens(
        &self,
        query: &PaymentTokenQuery,
    ) -> Result<PaymentTokensResponse, Self::Error> {
        let state = self.state.lock().unwrap();
        let tokens = state
            .tokens
            .iter()
            .filter(|t| query.address.is_none_or(|address| address == t.address))
            .filter(|t| query.symbol.as_ref().is_none_or(|symbol| symbol == &t.symbol))
            .cloned()
            .collect::<Vec<_>>();
        Ok(tokens.into())
    }

    async fn get_asset(
        &self,
        token_address: Address,
        token_id: Option<&str>,
    ) -> Result<OpenSeaAsset, Self::Error> {
        let state = self.state.lock().unwrap();
        let contract = state.contracts.get(&token_address).ok_or(ApiError::NotFound)?;
        Ok(OpenSeaAsset {
            token_id: token_id.unwrap_or_default().to_string(),
            name: None,
            description: None,
            image_url: None,
            asset_contract: contract.clone(),
        })
    }

    async fn post_order(&self, order: &SignedOrder) -> Result<SignedOrder, Self::Error> {
        order.validate().map_err(|err| ApiError::InvalidOrder(err.to_string()))?;
        self.state.lock().unwrap().posted.push(order.clone());
        Ok(order.clone())
    }
}

/// A transaction sent through a [`MockChain`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockTx {
    /// A proxy registration.
    RegisterProxy {
        /// The account the proxy acts for.
        owner: Address,
    },
    /// An ERC-721 or ERC-1155 operator approval.
    SetApprovalForAll {
        /// The token contract.
        token: Address,
        /// The approving account.
        owner: Address,
        /// The approved operator.
        operator: Address,
    },
    /// An ERC-20 approval.
    Approve {
        /// The token contract.
        token: Address,
        /// The approving account.
        owner: Address,
        /// The approved spender.
        spender: Address,
        /// The approved amount.
        amount: U256,
    },
}

#[derive(Debug, Default)]
struct ChainState {
    proxies: HashMap<Address, Address>,
    operators: HashSet<(Address, Address, Address)>,
    allowances: HashMap<(Address, Address, Address), U256>,
    erc20: HashMap<(Address, Address), U256>,
    erc721: HashMap<(Address, U256), Address>,
    erc1155: HashMap<(Address, Address, U256), U256>,
    txs: Vec<MockTx>,
}

impl ChainState {
    fn send(&mut self, tx: MockTx) -> TxHash {
        self.txs.push(tx);
        keccak256(self.txs.len().to_be_bytes())
    }
}

/// A chain of token balances, approvals and proxies held in memory.
///
/// Writes take effect immediately and are recorded as [`MockTx`]s. The
/// exchange accepts any order that passes the local parameter checks.
#[derive(Debug, Clone, Default)]
pub struct MockChain {
    state: Arc<Mutex<ChainState>>,
}

impl MockChain {
    /// An empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// A chain where [`ALEX`] owns every fixture asset, 10 WETH and 100
    /// MANA, and has no proxy or approvals yet.
    pub fn seeded() -> Self {
        let alex = *ALEX;
        let ether = U256::from(10).pow(U256::from(18));
        Self::new()
            .with_erc721(MYTHEREUM_ADDRESS, U256::from(MYTHEREUM_TOKEN_ID), alex)
            .with_erc721(MYTHEREUM_ADDRESS, U256::from(MYTHEREUM_TOKEN_ID_2), alex)
            .with_erc721(DIGITAL_ART_CHAIN_ADDRESS, U256::from(DIGITAL_ART_CHAIN_TOKEN_ID), alex)
            .with_erc20(BENZENE_ADDRESS, alex, U256::from(20))
            .with_erc1155(ENJIN_ADDRESS, alex, token_id(DISSOLUTION_TOKEN_ID), U256::from(5))
            .with_erc1155(ENJIN_ADDRESS, alex, token_id(SPIRIT_CLASH_TOKEN_ID), U256::from(5))
            .with_erc20(WETH, alex, U256::from(10) * ether)
            .with_erc20(MANA_ADDRESS, alex, U256::from(100) * ether)
    }

    /// Set an ERC-20 balance.
    pub fn with_erc20(self, token: Address, owner: Address, balance: U256) -> Self {
        self.state.lock().unwrap().erc20.insert((token, owner), balance);
        self
    }

    /// Set the owner of an ERC-721 token.
    pub fn with_erc721(self, token: Address, id: U256, owner: Address) -> Self {
        self.state.lock().unwrap().erc721.insert((token, id), owner);
        self
    }

    /// Set an ERC-1155 balance.
    pub fn with_erc1155(self, token: Address, owner: Address, id: U256, balance: U256) -> Self {
        self.state.lock().unwrap().erc1155.insert((token, owner, id), balance);
        self
    }

    /// Register a proxy without recording a transaction.
    pub fn with_proxy(self, owner: Address) -> Self {
        self.state.lock().unwrap().proxies.insert(owner, proxy_address(owner));
        self
    }

    /// Every transaction sent so far, oldest first.
    pub fn transactions(&self) -> Vec<MockTx> {
        self.state.lock().unwrap().txs.clone()
    }

    /// Number of operator approvals sent for `token`.
    pub fn approvals_for(&self, token: Address) -> usize {
        self.transactions()
            .iter()
            .filter(|tx| matches!(tx, MockTx::SetApprovalForAll { token: t, .. } if *t == token))
            .count()
    }

    /// Number of proxy registrations sent.
    pub fn proxy_registrations(&self) -> usize {
        self.transactions().iter().filter(|tx| matches!(tx, MockTx::RegisterProxy { .. })).count()
    }
}

/// A port over a [`MockMarketplaceApi::seeded`] marketplace and a
/// [`MockChain::seeded`] chain on the test network.
pub fn seeded_port() -> OpenSeaPort<MockMarketplaceApi, MockChain> {
    OpenSeaPort::new(MockMarketplaceApi::seeded(), MockChain::seeded(), NetworkConstants::test())
}

/// The proxy a [`MockChain`] registers for `owner`.
pub fn proxy_address(owner: Address) -> Address {
    Address::from_word(keccak256(owner))
}

fn token_id(raw: &str) -> U256 {
    U256::from_str(raw).unwrap()
}

impl ChainAccess for MockChain {
    type Error = Infallible;

    async fn proxy_for(
        &self,
        _registry: Address,
        owner: Address,
    ) -> Result<Option<Address>, Self::Error> {
        Ok(self.state.lock().unwrap().proxies.get(&owner).copied())
    }

    async fn register_proxy(
        &self,
        _registry: Address,
        owner: Address,
    ) -> Result<TxHash, Self::Error> {
        let mut state = self.state.lock().unwrap();
        state.proxies.insert(owner, proxy_address(owner));
        Ok(state.send(MockTx::RegisterProxy { owner }))
    }

    async fn is_approved_for_all(
        &self,
        token: Address,
        owner: Address,
        operator: Address,
    ) -> Result<bool, Self::Error> {
        Ok(self.state.lock().unwrap().operators.contains(&(token, owner, operator)))
    }

    async fn set_approval_for_all(
        &self,
        token: Address,
        owner: Address,
        operator: Address,
    ) -> Result<TxHash, Self::Error> {
        let mut state = self.state.lock().unwrap();
        state.operators.insert((token, owner, operator));
        Ok(state.send(MockTx::SetApprovalForAll { token, owner, operator }))
    }

    async fn allowance(
        &self,
        token: Address,
        owner: Address,
        spender: Address,
    ) -> Result<U256, Self::Error> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .allowances
            .get(&(token, owner, spender))
            .copied()
            .unwrap_or_default())
    }

    async fn approve(
        &self,
        token: Address,
        owner: Address,
        spender: Address,
        amount: U256,
    ) -> Result<TxHash, Self::Error> {
        let mut state = self.state.lock().unwrap();
        state.allowances.insert((token, owner, spender), amount);
        Ok(state.send(MockTx::Approve { token, owner, spender, amount }))
    }

    async fn erc20_balance(&self, token: Address, owner: Address) -> Result<U256, Self::Error> {
        Ok(self.state.lock().unwrap().erc20.get(&(token, owner)).copied().unwrap_or_default())
    }

    async fn owner_of(&self, token: Address, token_id: U256) -> Result<Address, Self::Error> {
        Ok(self.state.lock().unwrap().erc721.get(&(token, token_id)).copied().unwrap_or(NULL_ADDRESS))
    }

    async fn erc1155_balance(
        &self,
        token: Address,
        owner: Address,
        token_id: U256,
    ) -> Result<U256, Self::Error> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .erc1155
            .get(&(token, owner, token_id))
            .copied()
            .unwrap_or_default())
    }

    async fn validate_order_parameters(
        &self,
        exchange: Address,
        order: &UnhashedOrder,
    ) -> Result<bool, Self::Error> {
        Ok(validate_order_parameters(order, exchange, U256::ZERO, U256::ZERO).is_ok())
    }
}
