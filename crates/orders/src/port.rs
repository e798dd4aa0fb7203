use crate::{
    BundleBuyParams, BundleSellParams, BuyParams, ChainAccess, MarketplaceApi, OpenSeaPortError,
    SellParams,
};
use alloy::{
    primitives::{Address, Bytes, TxHash, U256},
    signers::Signer,
};
use opensea_api::types::{PaymentTokenQuery, PaymentTokensResponse};
use opensea_constants::{NetworkConstants, MAX_UINT_256, NULL_ADDRESS};
use opensea_types::{
    buy_fee_parameters, calculate_match_price, encode_atomicized_buy, encode_atomicized_sell,
    encode_buy, encode_sell, generate_salt, get_wyvern_bundle, orders_can_match, price_parameters,
    sell_fee_parameters, time_parameters, unix_now, validate_order_parameters, AssetContract,
    BundleError, CallParams, ComputedFees, EncodeError, FeeParameters, OpenSeaAsset, OrderAssets,
    OrderMetadata, PriceParameters, SaleKind, Side, SignedOrder, TimeParameters, UnhashedOrder,
    WyvernAsset, WyvernSchemaName,
};
use rust_decimal::Decimal;
use std::collections::BTreeSet;
use tracing::{debug, info, instrument};

type Result<T, E = OpenSeaPortError> = core::result::Result<T, E>;

/// Price, sale kind and listing window of a new order.
#[derive(Debug, Clone)]
struct Terms {
    price: PriceParameters,
    time: TimeParameters,
    sale_kind: SaleKind,
}

/// Everything that varies between the orders the port builds.
#[derive(Debug)]
struct OrderDraft {
    side: Side,
    maker: Address,
    taker: Address,
    quantity: U256,
    fees: FeeParameters,
    call: CallParams,
    terms: Terms,
    waiting_for_best_counter_order: bool,
    metadata: OrderMetadata,
}

impl OrderDraft {
    fn into_order(self, exchange: Address) -> UnhashedOrder {
        UnhashedOrder {
            exchange,
            maker: self.maker,
            taker: self.taker,
            quantity: self.quantity,
            maker_relayer_fee: self.fees.maker_relayer_fee,
            taker_relayer_fee: self.fees.taker_relayer_fee,
            maker_protocol_fee: self.fees.maker_protocol_fee,
            taker_protocol_fee: self.fees.taker_protocol_fee,
            maker_referrer_fee: self.fees.maker_referrer_fee,
            waiting_for_best_counter_order: self.waiting_for_best_counter_order,
            fee_method: self.fees.fee_method,
            fee_recipient: self.fees.fee_recipient,
            side: self.side,
            sale_kind: self.terms.sale_kind,
            target: self.call.target,
            how_to_call: self.call.how_to_call,
            calldata: self.call.calldata,
            replacement_pattern: self.call.replacement_pattern,
            static_target: NULL_ADDRESS,
            static_extradata: Bytes::new(),
            payment_token: self.terms.price.payment_token,
            base_price: self.terms.price.base_price,
            extra: self.terms.price.extra,
            listing_time: self.terms.time.listing_time,
            expiration_time: self.terms.time.expiration_time,
            salt: generate_salt(),
            metadata: self.metadata,
        }
    }
}

/// The OpenSea order client.
///
/// `OpenSeaPort` is generic over:
/// - `Api`: A [`MarketplaceApi`] for payment tokens, assets and posting
/// - `Chain`: A [`ChainAccess`] for balances, approvals and on-chain
///   order validation
///
/// Orders are built against the contracts of one network, given by its
/// [`NetworkConstants`].
#[derive(Debug, Clone)]
pub struct OpenSeaPort<Api, Chain> {
    api: Api,
    chain: Chain,
    constants: NetworkConstants,
}

impl<Api, Chain> OpenSeaPort<Api, Chain> {
    /// Create a new port.
    pub const fn new(api: Api, chain: Chain, constants: NetworkConstants) -> Self {
        Self { api, chain, constants }
    }

    /// Get a reference to the marketplace API.
    pub const fn api(&self) -> &Api {
        &self.api
    }

    /// Get a reference to the chain.
    pub const fn chain(&self) -> &Chain {
        &self.chain
    }

    /// Get a reference to the network constants.
    pub const fn constants(&self) -> &NetworkConstants {
        &self.constants
    }

    /// Build the counter-order that fills `order`.
    ///
    /// The counter-order is made by `account_address`. When it is a buy,
    /// the assets go to `recipient_address`. It pays the order's base price,
    /// so it also fills a Dutch auction at any point of its decay.
    pub fn make_matching_order(
        &self,
        order: &UnhashedOrder,
        account_address: Address,
        recipient_address: Address,
    ) -> Result<UnhashedOrder> {
        let side = order.side.opposite();
        let atomicizer = self.constants.atomicizer();
        let call = match (&order.metadata.assets, side) {
            (OrderAssets::Bundle { bundle }, Side::Sell) => {
                encode_atomicized_sell(bundle, account_address, atomicizer)?
            }
            (OrderAssets::Bundle { bundle }, Side::Buy) => {
                encode_atomicized_buy(bundle, recipient_address, atomicizer)?
            }
            (OrderAssets::Asset { asset, schema }, Side::Sell) => {
                encode_sell(asset, *schema, account_address)?
            }
            (OrderAssets::Asset { asset, schema }, Side::Buy) => {
                encode_buy(asset, *schema, recipient_address)?
            }
        };

        // Exactly one side of a match names the fee recipient.
        let fee_recipient = if order.fee_recipient == NULL_ADDRESS {
            self.constants.fee_recipient()
        } else {
            NULL_ADDRESS
        };
        let time = time_parameters(0, false, unix_now())?;

        Ok(UnhashedOrder {
            exchange: order.exchange,
            maker: account_address,
            taker: order.maker,
            quantity: order.quantity,
            maker_relayer_fee: order.maker_relayer_fee,
            taker_relayer_fee: order.taker_relayer_fee,
            maker_protocol_fee: order.maker_protocol_fee,
            taker_protocol_fee: order.taker_protocol_fee,
            maker_referrer_fee: order.maker_referrer_fee,
            waiting_for_best_counter_order: false,
            fee_method: order.fee_method,
            fee_recipient,
            side,
            sale_kind: SaleKind::FixedPrice,
            target: call.target,
            how_to_call: call.how_to_call,
            calldata: call.calldata,
            replacement_pattern: call.replacement_pattern,
            static_target: NULL_ADDRESS,
            static_extradata: Bytes::new(),
            payment_token: order.payment_token,
            base_price: order.base_price,
            extra: U256::ZERO,
            listing_time: time.listing_time,
            expiration_time: time.expiration_time,
            salt: generate_salt(),
            metadata: order.metadata.clone(),
        })
    }

    /// Check that a buy and a sell can be matched now, returning the price
    /// the match settles at.
    pub fn validate_match(&self, buy: &UnhashedOrder, sell: &UnhashedOrder) -> Result<U256> {
        self.validate_match_at(buy, sell, unix_now())
    }

    /// Check that a buy and a sell can be matched at time `now`, returning
    /// the price the match settles at.
    pub fn validate_match_at(
        &self,
        buy: &UnhashedOrder,
        sell: &UnhashedOrder,
        now: u64,
    ) -> Result<U256> {
        let exchange = self.constants.exchange();
        validate_order_parameters(buy, exchange, U256::ZERO, U256::ZERO)?;
        validate_order_parameters(sell, exchange, U256::ZERO, U256::ZERO)?;
        orders_can_match(buy, sell, now)?;
        calculate_match_price(buy, sell, now).map_err(Into::into)
    }
}

impl<Api, Chain> OpenSeaPort<Api, Chain>
where
    Api: MarketplaceApi + Send + Sync,
{
    /// Fetch the payment tokens matching a query.
    pub async fn get_payment_tokens(
        &self,
        query: &PaymentTokenQuery,
    ) -> Result<PaymentTokensResponse> {
        self.api.get_payment_tokens(query).await.map_err(OpenSeaPortError::api)
    }

    /// Fetch an asset and its contract's fee configuration.
    pub async fn get_asset(
        &self,
        token_address: Address,
        token_id: Option<&str>,
    ) -> Result<OpenSeaAsset> {
        self.api.get_asset(token_address, token_id).await.map_err(OpenSeaPortError::api)
    }

    /// Decimals of a payment token, or `None` for ether and for tokens the
    /// marketplace doesn't accept.
    async fn payment_token_decimals(&self, token: Address) -> Result<Option<u8>> {
        if token == NULL_ADDRESS {
            return Ok(None);
        }
        let response = self.get_payment_tokens(&PaymentTokenQuery::by_address(token)).await?;
        Ok(response.tokens.iter().find(|t| t.address == token).map(|t| t.decimals))
    }

    /// The fee configuration of an asset's contract. Only assets with a
    /// token id are looked up.
    async fn asset_contract(&self, asset: Option<&WyvernAsset>) -> Result<Option<AssetContract>> {
        let Some(WyvernAsset { address, id: Some(id), .. }) = asset else {
            return Ok(None);
        };
        let token_id = id.to_string();
        let asset = self.get_asset(*address, Some(&token_id)).await?;
        Ok(Some(asset.asset_contract))
    }

    /// Compute the fees of an order for `asset`.
    ///
    /// Assets with a token id use their contract's fees, fetched from the
    /// marketplace. Other orders, including heterogeneous bundles, use the
    /// default fees.
    pub async fn compute_fees(
        &self,
        asset: Option<&WyvernAsset>,
        side: Side,
        extra_bounty_basis_points: u64,
        is_private: bool,
    ) -> Result<ComputedFees> {
        let contract = self.asset_contract(asset).await?;
        opensea_types::compute_fees(contract.as_ref(), side, extra_bounty_basis_points, is_private)
            .map_err(Into::into)
    }

    async fn terms(
        &self,
        side: Side,
        payment_token: Address,
        expiration_time: u64,
        start_amount: Decimal,
        end_amount: Option<Decimal>,
        waiting_for_best_counter_order: bool,
    ) -> Result<Terms> {
        let decimals = self.payment_token_decimals(payment_token).await?;
        let price = price_parameters(
            side,
            payment_token,
            decimals,
            expiration_time,
            start_amount,
            end_amount,
            waiting_for_best_counter_order,
        )?;
        let time = time_parameters(expiration_time, waiting_for_best_counter_order, unix_now())?;
        let sale_kind = if end_amount.is_some_and(|end| end != start_amount) {
            SaleKind::DutchAuction
        } else {
            SaleKind::FixedPrice
        };
        Ok(Terms { price, time, sale_kind })
    }

    /// Build an offer on a bundle of assets.
    #[instrument(skip_all, fields(maker = %params.account_address, assets = params.assets.len()))]
    pub async fn make_bundle_buy_order(&self, params: BundleBuyParams) -> Result<UnhashedOrder> {
        let bundle = get_wyvern_bundle(&params.assets, &params.quantities)?;
        let fees = self
            .compute_fees(bundle.single_contract(), Side::Buy, params.extra_bounty_basis_points, false)
            .await?;
        let fees =
            buy_fee_parameters(&fees, params.sell_order.as_ref(), self.constants.fee_recipient())?;
        let call =
            encode_atomicized_buy(&bundle, params.account_address, self.constants.atomicizer())?;
        let terms = self
            .terms(
                Side::Buy,
                params.payment_token_address,
                params.expiration_time,
                params.start_amount,
                None,
                false,
            )
            .await?;

        let order = OrderDraft {
            side: Side::Buy,
            maker: params.account_address,
            taker: params.sell_order.as_ref().map_or(NULL_ADDRESS, |sell| sell.maker),
            quantity: U256::from(1),
            fees,
            call,
            terms,
            waiting_for_best_counter_order: false,
            metadata: OrderMetadata {
                assets: OrderAssets::Bundle { bundle },
                referrer_address: params.referrer_address,
            },
        }
        .into_order(self.constants.exchange());
        debug!(hash = %order.hash(), "built bundle buy order");
        Ok(order)
    }

    /// Build a listing for a bundle of assets.
    #[instrument(skip_all, fields(maker = %params.account_address, assets = params.assets.len()))]
    pub async fn make_bundle_sell_order(&self, params: BundleSellParams) -> Result<UnhashedOrder> {
        let bundle = get_wyvern_bundle(&params.assets, &params.quantities)?.with_metadata(
            Some(params.bundle_name),
            params.bundle_description,
            params.bundle_external_link,
        );
        let is_private = params.buyer_address != NULL_ADDRESS;
        let fees = self
            .compute_fees(
                bundle.single_contract(),
                Side::Sell,
                params.extra_bounty_basis_points,
                is_private,
            )
            .await?;
        let fees = sell_fee_parameters(
            &fees,
            params.wait_for_highest_bid,
            self.constants.fee_recipient(),
        )?;
        let call =
            encode_atomicized_sell(&bundle, params.account_address, self.constants.atomicizer())?;
        let terms = self
            .terms(
                Side::Sell,
                params.payment_token_address,
                params.expiration_time,
                params.start_amount,
                params.end_amount,
                params.wait_for_highest_bid,
            )
            .await?;

        let order = OrderDraft {
            side: Side::Sell,
            maker: params.account_address,
            taker: params.buyer_address,
            quantity: U256::from(1),
            fees,
            call,
            terms,
            waiting_for_best_counter_order: params.wait_for_highest_bid,
            metadata: OrderMetadata { assets: OrderAssets::Bundle { bundle }, referrer_address: None },
        }
        .into_order(self.constants.exchange());
        debug!(hash = %order.hash(), sale_kind = ?order.sale_kind, "built bundle sell order");
        Ok(order)
    }

    /// Build an offer on a single asset.
    #[instrument(skip_all, fields(maker = %params.account_address, token = %params.asset.token_address))]
    pub async fn make_buy_order(&self, params: BuyParams) -> Result<UnhashedOrder> {
        let (asset, schema) = single_asset(&params.asset, params.quantity)?;
        let fees = self.compute_fees(Some(&asset), Side::Buy, 0, false).await?;
        let fees =
            buy_fee_parameters(&fees, params.sell_order.as_ref(), self.constants.fee_recipient())?;
        let call = encode_buy(&asset, schema, params.account_address)?;
        let terms = self
            .terms(
                Side::Buy,
                params.payment_token_address,
                params.expiration_time,
                params.start_amount,
                None,
                false,
            )
            .await?;

        let order = OrderDraft {
            side: Side::Buy,
            maker: params.account_address,
            taker: params.sell_order.as_ref().map_or(NULL_ADDRESS, |sell| sell.maker),
            quantity: asset.quantity_or_one(),
            fees,
            call,
            terms,
            waiting_for_best_counter_order: false,
            metadata: OrderMetadata {
                assets: OrderAssets::Asset { asset, schema },
                referrer_address: params.referrer_address,
            },
        }
        .into_order(self.constants.exchange());
        debug!(hash = %order.hash(), "built buy order");
        Ok(order)
    }

    /// Build a listing for a single asset.
    #[instrument(skip_all, fields(maker = %params.account_address, token = %params.asset.token_address))]
    pub async fn make_sell_order(&self, params: SellParams) -> Result<UnhashedOrder> {
        let (asset, schema) = single_asset(&params.asset, params.quantity)?;
        let is_private = params.buyer_address != NULL_ADDRESS;
        let fees = self
            .compute_fees(Some(&asset), Side::Sell, params.extra_bounty_basis_points, is_private)
            .await?;
        let fees = sell_fee_parameters(
            &fees,
            params.wait_for_highest_bid,
            self.constants.fee_recipient(),
        )?;
        let call = encode_sell(&asset, schema, params.account_address)?;
        let terms = self
            .terms(
                Side::Sell,
                params.payment_token_address,
                params.expiration_time,
                params.start_amount,
                params.end_amount,
                params.wait_for_highest_bid,
            )
            .await?;

        let order = OrderDraft {
            side: Side::Sell,
            maker: params.account_address,
            taker: params.buyer_address,
            quantity: asset.quantity_or_one(),
            fees,
            call,
            terms,
            waiting_for_best_counter_order: params.wait_for_highest_bid,
            metadata: OrderMetadata {
                assets: OrderAssets::Asset { asset, schema },
                referrer_address: None,
            },
        }
        .into_order(self.constants.exchange());
        debug!(hash = %order.hash(), sale_kind = ?order.sale_kind, "built sell order");
        Ok(order)
    }
}

/// Convert a single user asset the same way bundle assets are converted.
fn single_asset(
    asset: &opensea_types::Asset,
    quantity: Decimal,
) -> Result<(WyvernAsset, WyvernSchemaName)> {
    let bundle = get_wyvern_bundle(core::slice::from_ref(asset), &[quantity])?;
    let first = bundle.iter().next().map(|(asset, schema)| (*asset, schema));
    first.ok_or_else(|| BundleError::Empty.into())
}

impl<Api, Chain> OpenSeaPort<Api, Chain>
where
    Chain: ChainAccess + Send + Sync,
{
    /// Get the proxy of `account_address`, registering one if needed.
    #[instrument(skip(self))]
    pub async fn get_or_create_proxy(&self, account_address: Address) -> Result<Address> {
        let registry = self.constants.proxy_registry();
        let proxy =
            self.chain.proxy_for(registry, account_address).await.map_err(OpenSeaPortError::chain)?;
        if let Some(proxy) = proxy {
            return Ok(proxy);
        }

        info!("no proxy registered, registering one");
        let tx_hash = self
            .chain
            .register_proxy(registry, account_address)
            .await
            .map_err(OpenSeaPortError::chain)?;
        debug!(%tx_hash, "proxy registration confirmed");

        self.chain
            .proxy_for(registry, account_address)
            .await
            .map_err(OpenSeaPortError::chain)?
            .ok_or(OpenSeaPortError::ProxyRegistrationFailed(account_address))
    }

    /// Let `proxy_address` move every token of `account_address` in an
    /// ERC-721 or ERC-1155 contract. Returns `None` if it already may.
    #[instrument(skip(self))]
    pub async fn approve_semi_or_non_fungible_token(
        &self,
        token_address: Address,
        account_address: Address,
        proxy_address: Address,
    ) -> Result<Option<TxHash>> {
        let approved = self
            .chain
            .is_approved_for_all(token_address, account_address, proxy_address)
            .await
            .map_err(OpenSeaPortError::chain)?;
        if approved {
            debug!("already approved");
            return Ok(None);
        }

        let tx_hash = self
            .chain
            .set_approval_for_all(token_address, account_address, proxy_address)
            .await
            .map_err(OpenSeaPortError::chain)?;
        info!(%tx_hash, "approved all tokens");
        Ok(Some(tx_hash))
    }

    /// Make sure `spender` may move at least `minimum_amount` of an ERC-20
    /// token of `account_address`. Approvals are for the maximum amount.
    /// Returns `None` if the allowance already suffices.
    #[instrument(skip(self))]
    pub async fn approve_fungible_token(
        &self,
        token_address: Address,
        account_address: Address,
        spender: Address,
        minimum_amount: U256,
    ) -> Result<Option<TxHash>> {
        let allowance = self
            .chain
            .allowance(token_address, account_address, spender)
            .await
            .map_err(OpenSeaPortError::chain)?;
        if allowance >= minimum_amount {
            debug!(%allowance, "allowance sufficient");
            return Ok(None);
        }

        let tx_hash = self
            .chain
            .approve(token_address, account_address, spender, MAX_UINT_256)
            .await
            .map_err(OpenSeaPortError::chain)?;
        info!(%tx_hash, "approved token");
        Ok(Some(tx_hash))
    }

    /// Approve the proxy of `account_address` for every asset. Each
    /// ERC-721 or ERC-1155 contract is approved once. The proxy is looked up
    /// or registered when not given.
    pub async fn approve_all(
        &self,
        assets: &[(WyvernAsset, WyvernSchemaName)],
        account_address: Address,
        proxy_address: Option<Address>,
    ) -> Result<Vec<TxHash>> {
        let proxy = match proxy_address {
            Some(proxy) => proxy,
            None => self.get_or_create_proxy(account_address).await?,
        };

        let mut contracts = BTreeSet::new();
        let mut tx_hashes = Vec::new();
        for (asset, schema) in assets {
            let tx_hash = if schema.is_fungible() {
                self.approve_fungible_token(
                    asset.address,
                    account_address,
                    proxy,
                    asset.quantity_or_one(),
                )
                .await?
            } else if contracts.insert(asset.address) {
                self.approve_semi_or_non_fungible_token(asset.address, account_address, proxy)
                    .await?
            } else {
                None
            };
            tx_hashes.extend(tx_hash);
        }
        Ok(tx_hashes)
    }

    /// Whether `from_address` holds enough of the asset to transfer it.
    pub async fn is_asset_transferrable(
        &self,
        asset: &WyvernAsset,
        schema: WyvernSchemaName,
        from_address: Address,
    ) -> Result<bool> {
        let address = asset.address;
        let id = || asset.id.ok_or(EncodeError::MissingTokenId { address, schema });

        let transferrable = match schema {
            WyvernSchemaName::Erc721 => {
                self.chain.owner_of(address, id()?).await.map_err(OpenSeaPortError::chain)?
                    == from_address
            }
            WyvernSchemaName::Erc1155 => {
                self.chain
                    .erc1155_balance(address, from_address, id()?)
                    .await
                    .map_err(OpenSeaPortError::chain)?
                    >= asset.quantity_or_one()
            }
            WyvernSchemaName::Erc20 => {
                self.chain.erc20_balance(address, from_address).await.map_err(OpenSeaPortError::chain)?
                    >= asset.quantity_or_one()
            }
        };
        Ok(transferrable)
    }

    /// Check an order's parameters locally and with the exchange.
    async fn validate_order_parameters(&self, order: &UnhashedOrder) -> Result<()> {
        let exchange = self.constants.exchange();
        validate_order_parameters(order, exchange, U256::ZERO, U256::ZERO)?;

        let valid = self
            .chain
            .validate_order_parameters(exchange, order)
            .await
            .map_err(OpenSeaPortError::chain)?;
        if !valid {
            return Err(OpenSeaPortError::InvalidOnChain);
        }
        Ok(())
    }

    /// Prepare the chain for a sell order of `account_address`: check that
    /// it holds every asset, approve its proxy for them, approve the
    /// payment token, and validate the order with the exchange.
    ///
    /// Returns the hashes of the approval transactions sent.
    #[instrument(skip_all, fields(account = %account_address, maker = %order.maker))]
    pub async fn sell_order_validation_and_approvals(
        &self,
        order: &UnhashedOrder,
        account_address: Address,
    ) -> Result<Vec<TxHash>> {
        let assets = order.metadata.assets.assets_and_schemas();
        for (asset, schema) in &assets {
            if !self.is_asset_transferrable(asset, *schema, account_address).await? {
                return Err(OpenSeaPortError::NotOwner {
                    account: account_address,
                    token: asset.address,
                    id: asset.id,
                    quantity: asset.quantity_or_one(),
                });
            }
        }

        let mut tx_hashes = self.approve_all(&assets, account_address, None).await?;

        // Fees of a sale matched against a bid are paid in the payment token.
        if order.payment_token != NULL_ADDRESS {
            let tx_hash = self
                .approve_fungible_token(
                    order.payment_token,
                    account_address,
                    self.constants.token_transfer_proxy(),
                    order.base_price,
                )
                .await?;
            tx_hashes.extend(tx_hash);
        }

        self.validate_order_parameters(order).await?;
        debug!(approvals = tx_hashes.len(), "sell order ready");
        Ok(tx_hashes)
    }

    /// Prepare the chain for a buy order of `account_address`: check that
    /// it can pay, approve the payment token, and validate the order with
    /// the exchange.
    ///
    /// Returns the hashes of the approval transactions sent.
    #[instrument(skip_all, fields(account = %account_address, maker = %order.maker))]
    pub async fn buy_order_validation_and_approvals(
        &self,
        order: &UnhashedOrder,
        account_address: Address,
    ) -> Result<Vec<TxHash>> {
        let mut tx_hashes = Vec::new();
        let token = order.payment_token;

        if token != NULL_ADDRESS {
            let required = order.base_price;
            let balance = self
                .chain
                .erc20_balance(token, account_address)
                .await
                .map_err(OpenSeaPortError::chain)?;
            if balance < required {
                return Err(OpenSeaPortError::InsufficientBalance {
                    token,
                    required,
                    balance,
                    wrapped_ether: self.constants.is_weth(token),
                });
            }

            let tx_hash = self
                .approve_fungible_token(
                    token,
                    account_address,
                    self.constants.token_transfer_proxy(),
                    required,
                )
                .await?;
            tx_hashes.extend(tx_hash);
        }

        self.validate_order_parameters(order).await?;
        debug!(approvals = tx_hashes.len(), "buy order ready");
        Ok(tx_hashes)
    }
}

impl<Api, Chain> OpenSeaPort<Api, Chain>
where
    Api: MarketplaceApi + Send + Sync,
    Chain: ChainAccess + Send + Sync,
{
    async fn sign_and_post<S>(&self, order: UnhashedOrder, signer: &S) -> Result<SignedOrder>
    where
        S: Signer + Send + Sync,
    {
        let signed = order.sign(signer).await?;
        let posted = self.api.post_order(&signed).await.map_err(OpenSeaPortError::api)?;
        info!(hash = %posted.hash(), "posted order");
        Ok(posted)
    }

    /// Build a bundle listing, prepare the chain for it, sign it and post
    /// it to the marketplace.
    pub async fn create_bundle_sell_order<S>(
        &self,
        params: BundleSellParams,
        signer: &S,
    ) -> Result<SignedOrder>
    where
        S: Signer + Send + Sync,
    {
        let account = params.account_address;
        let order = self.make_bundle_sell_order(params).await?;
        self.sell_order_validation_and_approvals(&order, account).await?;
        self.sign_and_post(order, signer).await
    }

    /// Build a bundle offer, prepare the chain for it, sign it and post it
    /// to the marketplace.
    pub async fn create_bundle_buy_order<S>(
        &self,
        params: BundleBuyParams,
        signer: &S,
    ) -> Result<SignedOrder>
    where
        S: Signer + Send + Sync,
    {
        let account = params.account_address;
        let order = self.make_bundle_buy_order(params).await?;
        self.buy_order_validation_and_approvals(&order, account).await?;
        self.sign_and_post(order, signer).await
    }

    /// Build a single-asset listing, prepare the chain for it, sign it and
    /// post it to the marketplace.
    pub async fn create_sell_order<S>(&self, params: SellParams, signer: &S) -> Result<SignedOrder>
    where
        S: Signer + Send + Sync,
    {
        let account = params.account_address;
        let order = self.make_sell_order(params).await?;
        self.sell_order_validation_and_approvals(&order, account).await?;
        self.sign_and_post(order, signer).await
    }

    /// Build a single-asset offer, prepare the chain for it, sign it and
    /// post it to the marketplace.
    pub async fn create_buy_order<S>(&self, params: BuyParams, signer: &S) -> Result<SignedOrder>
    where
        S: Signer + Send + Sync,
    {
        let account = params.account_address;
        let order = self.make_buy_order(params).await?;
        self.buy_order_validation_and_approvals(&order, account).await?;
        self.sign_and_post(order, signer).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use opensea_constants::test_utils::{ATOMICIZER, EXCHANGE, FEE_RECIPIENT};
    use opensea_types::{FeeMethod, HowToCall};

    const SELLER: Address = Address::repeat_byte(0xaa);
    const BUYER: Address = Address::repeat_byte(0xbb);

    fn port() -> OpenSeaPort<(), ()> {
        OpenSeaPort::new((), (), NetworkConstants::test())
    }

    fn kitty() -> WyvernAsset {
        WyvernAsset { address: Address::repeat_byte(0xc0), id: Some(U256::from(7)), quantity: None }
    }

    fn listing(now: u64) -> UnhashedOrder {
        let call = encode_sell(&kitty(), WyvernSchemaName::Erc721, SELLER).unwrap();
        UnhashedOrder {
            exchange: EXCHANGE,
            maker: SELLER,
            taker: NULL_ADDRESS,
            quantity: U256::from(1),
            maker_relayer_fee: U256::from(250),
            taker_relayer_fee: U256::ZERO,
            maker_protocol_fee: U256::ZERO,
            taker_protocol_fee: U256::ZERO,
            maker_referrer_fee: U256::ZERO,
            waiting_for_best_counter_order: false,
            fee_method: FeeMethod::SplitFee,
            fee_recipient: FEE_RECIPIENT,
            side: Side::Sell,
            sale_kind: SaleKind::DutchAuction,
            target: call.target,
            how_to_call: call.how_to_call,
            calldata: call.calldata,
            replacement_pattern: call.replacement_pattern,
            static_target: NULL_ADDRESS,
            static_extradata: Bytes::new(),
            payment_token: NULL_ADDRESS,
            base_price: U256::from(1_000_000),
            extra: U256::from(1_000_000),
            listing_time: now - 100,
            expiration_time: now + 900,
            salt: U256::from(1),
            metadata: OrderMetadata {
                assets: OrderAssets::Asset { asset: kitty(), schema: WyvernSchemaName::Erc721 },
                referrer_address: None,
            },
        }
    }

    #[test]
    fn matching_order_fills_a_dutch_listing() {
        let now = unix_now();
        let sell = listing(now);
        let buy = port().make_matching_order(&sell, BUYER, BUYER).unwrap();

        assert_eq!(buy.side, Side::Buy);
        assert_eq!(buy.taker, SELLER);
        assert_eq!(buy.fee_recipient, NULL_ADDRESS);
        assert_eq!(buy.sale_kind, SaleKind::FixedPrice);
        assert_eq!(buy.how_to_call, HowToCall::Call);

        // The listing has decayed by a tenth at most.
        let price = port().validate_match(&buy, &sell).unwrap();
        assert!(price <= sell.base_price);
        assert!(price >= U256::from(899_000));
    }

    #[test]
    fn matching_order_names_the_fee_recipient_when_missing() {
        let sell = UnhashedOrder { fee_recipient: NULL_ADDRESS, ..listing(unix_now()) };
        let buy = port().make_matching_order(&sell, BUYER, BUYER).unwrap();
        assert_eq!(buy.fee_recipient, FEE_RECIPIENT);
    }

    #[test]
    fn wrong_exchange_does_not_match() {
        let now = unix_now();
        let sell = listing(now);
        let buy = port().make_matching_order(&sell, BUYER, BUYER).unwrap();
        let sell = UnhashedOrder { exchange: ATOMICIZER, ..sell };
        assert!(matches!(
            port().validate_match_at(&buy, &sell, now),
            Err(OpenSeaPortError::Parameters(_))
        ));
    }
}
