//! Request and response types of the OpenSea API.
use crate::ApiError;
use alloy::primitives::{Address, Bytes, Signature, B256, U256};
use opensea_types::{
    FeeMethod, HowToCall, OrderMetadata, PaymentToken, SaleKind, Side, SignedOrder, UnhashedOrder,
};
use serde::{Deserialize, Serialize};

/// Number of items requested per page.
pub const DEFAULT_PAGE_SIZE: u64 = 20;

/// Serde helpers for numbers the API sends as base-10 strings.
mod dec_string {
    use serde::{de, Deserialize, Deserializer, Serializer};
    use std::{fmt::Display, str::FromStr};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StrOrNum {
        Str(String),
        Num(u64),
    }

    pub(super) fn serialize<T: Display, S: Serializer>(value: &T, s: S) -> Result<S::Ok, S::Error> {
        s.collect_str(value)
    }

    pub(super) fn deserialize<'de, T, D>(d: D) -> Result<T, D::Error>
    where
        T: FromStr,
        T::Err: Display,
        D: Deserializer<'de>,
    {
        match StrOrNum::deserialize(d)? {
            StrOrNum::Str(s) => s.parse().map_err(de::Error::custom),
            StrOrNum::Num(n) => n.to_string().parse().map_err(de::Error::custom),
        }
    }
}

/// Query parameters of the payment tokens endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentTokenQuery {
    /// Filter by symbol.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    /// Filter by token address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    /// Filter by name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Page size.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,
    /// Number of items to skip.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<u64>,
}

impl PaymentTokenQuery {
    /// Query tokens by address.
    pub const fn by_address(address: Address) -> Self {
        Self { symbol: None, address: Some(address), name: None, limit: None, offset: None }
    }

    /// Query tokens by symbol.
    pub fn by_symbol(symbol: impl Into<String>) -> Self {
        Self { symbol: Some(symbol.into()), ..Default::default() }
    }
}

/// Payment tokens known to the marketplace.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentTokensResponse {
    /// The tokens.
    pub tokens: Vec<PaymentToken>,
}

impl From<Vec<PaymentToken>> for PaymentTokensResponse {
    fn from(tokens: Vec<PaymentToken>) -> Self {
        Self { tokens }
    }
}

/// Query parameters of the orderbook endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderQuery {
    /// Orders made by this account.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maker: Option<Address>,
    /// Orders reserved for this account.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub taker: Option<Address>,
    /// Orders on this side.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub side: Option<Side>,
    /// Orders of this sale kind.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sale_kind: Option<SaleKind>,
    /// Orders for assets of this contract.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_contract_address: Option<Address>,
    /// Orders for this token id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_id: Option<String>,
    /// Orders paid in this token.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_token_address: Option<Address>,
    /// Only bundle orders, or only single-asset orders.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bundled: Option<bool>,
    /// Only English auctions, or only other orders.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_english: Option<bool>,
    /// Page size.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,
    /// Number of orders to skip.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<u64>,
}

impl OrderQuery {
    /// Set the page window.
    pub const fn with_page(mut self, offset: u64, limit: u64) -> Self {
        self.offset = Some(offset);
        self.limit = Some(limit);
        self
    }
}

/// A page of orders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrdersResponse {
    /// Total number of orders matching the query.
    pub count: u64,
    /// Orders of this page.
    pub orders: Vec<OrderJson>,
}

/// A signed order as the API exchanges it: amounts and times are base-10
/// strings, and the signature is split into `v`, `r` and `s`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct OrderJson {
    pub exchange: Address,
    pub maker: Address,
    pub taker: Address,
    #[serde(with = "dec_string")]
    pub maker_relayer_fee: U256,
    #[serde(with = "dec_string")]
    pub taker_relayer_fee: U256,
    #[serde(with = "dec_string")]
    pub maker_protocol_fee: U256,
    #[serde(with = "dec_string")]
    pub taker_protocol_fee: U256,
    #[serde(with = "dec_string")]
    pub maker_referrer_fee: U256,
    #[serde(default)]
    pub waiting_for_best_counter_order: bool,
    pub fee_method: FeeMethod,
    pub fee_recipient: Address,
    pub side: Side,
    pub sale_kind: SaleKind,
    pub target: Address,
    pub how_to_call: HowToCall,
    pub calldata: Bytes,
    pub replacement_pattern: Bytes,
    pub static_target: Address,
    pub static_extradata: Bytes,
    pub payment_token: Address,
    #[serde(with = "dec_string")]
    pub base_price: U256,
    #[serde(with = "dec_string")]
    pub extra: U256,
    #[serde(with = "dec_string")]
    pub listing_time: u64,
    #[serde(with = "dec_string")]
    pub expiration_time: u64,
    #[serde(with = "dec_string")]
    pub salt: U256,
    #[serde(with = "dec_string")]
    pub quantity: U256,
    pub metadata: OrderMetadata,
    pub hash: B256,
    pub v: u8,
    pub r: B256,
    pub s: B256,
}

impl From<&SignedOrder> for OrderJson {
    fn from(signed: &SignedOrder) -> Self {
        let order = signed.order().clone();
        let signature = signed.signature();
        Self {
            exchange: order.exchange,
            maker: order.maker,
            taker: order.taker,
            maker_relayer_fee: order.maker_relayer_fee,
            taker_relayer_fee: order.taker_relayer_fee,
            maker_protocol_fee: order.maker_protocol_fee,
            taker_protocol_fee: order.taker_protocol_fee,
            maker_referrer_fee: order.maker_referrer_fee,
            waiting_for_best_counter_order: order.waiting_for_best_counter_order,
            fee_method: order.fee_method,
            fee_recipient: order.fee_recipient,
            side: order.side,
            sale_kind: order.sale_kind,
            target: order.target,
            how_to_call: order.how_to_call,
            calldata: order.calldata,
            replacement_pattern: order.replacement_pattern,
            static_target: order.static_target,
            static_extradata: order.static_extradata,
            payment_token: order.payment_token,
            base_price: order.base_price,
            extra: order.extra,
            listing_time: order.listing_time,
            expiration_time: order.expiration_time,
            salt: order.salt,
            quantity: order.quantity,
            metadata: order.metadata,
            hash: signed.hash(),
            v: signed.v(),
            r: B256::from(signature.r().to_be_bytes::<32>()),
            s: B256::from(signature.s().to_be_bytes::<32>()),
        }
    }
}

impl TryFrom<OrderJson> for SignedOrder {
    type Error = ApiError;

    fn try_from(json: OrderJson) -> Result<Self, Self::Error> {
        let y_parity = match json.v {
            27 | 0 => false,
            28 | 1 => true,
            v => return Err(ApiError::InvalidOrder(format!("invalid signature v {v}"))),
        };
        let signature = Signature::new(U256::from_be_bytes(json.r.0), U256::from_be_bytes(json.s.0), y_parity);

        let order = UnhashedOrder {
            exchange: json.exchange,
            maker: json.maker,
            taker: json.taker,
            quantity: json.quantity,
            maker_relayer_fee: json.maker_relayer_fee,
            taker_relayer_fee: json.taker_relayer_fee,
            maker_protocol_fee: json.maker_protocol_fee,
            taker_protocol_fee: json.taker_protocol_fee,
            maker_referrer_fee: json.maker_referrer_fee,
            waiting_for_best_counter_order: json.waiting_for_best_counter_order,
            fee_method: json.fee_method,
            fee_recipient: json.fee_recipient,
            side: json.side,
            sale_kind: json.sale_kind,
            target: json.target,
            how_to_call: json.how_to_call,
            calldata: json.calldata,
            replacement_pattern: json.replacement_pattern,
            static_target: json.static_target,
            static_extradata: json.static_extradata,
            payment_token: json.payment_token,
            base_price: json.base_price,
            extra: json.extra,
            listing_time: json.listing_time,
            expiration_time: json.expiration_time,
            salt: json.salt,
            metadata: json.metadata,
        };

        let signed = SignedOrder::new(order, signature);
        if signed.hash() != json.hash {
            return Err(ApiError::InvalidOrder(format!(
                "hash {} does not match order fields ({})",
                json.hash,
                signed.hash()
            )));
        }
        Ok(signed)
    }
}
