mod kinds;
pub use kinds::{FeeMethod, HowToCall, SaleKind, Side, UnknownVariant};

use crate::{calculate_final_price, WyvernAsset, WyvernBundle, WyvernSchemaName};
use alloy::primitives::{eip191_hash_message, keccak256, Address, Bytes, B256, U256};
use opensea_constants::NULL_ADDRESS;
use opensea_wyvern::WyvernExchange::validateOrderParameters_Call;
use serde::{Deserialize, Serialize};

/// Addresses (7 * 20), uints (9 * 32) and enums (4 * 1) of the hash
/// pre-image, excluding the variable-length byte fields.
const FIXED_PRE_IMAGE_LEN: usize = 7 * 20 + 9 * 32 + 4;

/// Generate a fresh random 256-bit order salt.
///
/// The salt makes otherwise identical orders hash differently.
pub fn generate_salt() -> U256 {
    U256::from_be_bytes(B256::random().0)
}

/// The assets an order trades.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OrderAssets {
    /// A single asset.
    Asset {
        /// The asset.
        asset: WyvernAsset,
        /// Its schema.
        schema: WyvernSchemaName,
    },
    /// A bundle of assets.
    Bundle {
        /// The bundle.
        bundle: WyvernBundle,
    },
}

impl OrderAssets {
    /// Every traded asset paired with its schema.
    pub fn assets_and_schemas(&self) -> Vec<(WyvernAsset, WyvernSchemaName)> {
        match self {
            Self::Asset { asset, schema } => vec![(*asset, *schema)],
            Self::Bundle { bundle } => bundle.iter().map(|(a, s)| (*a, s)).collect(),
        }
    }

    /// True for bundles.
    pub const fn is_bundle(&self) -> bool {
        matches!(self, Self::Bundle { .. })
    }
}

/// Off-chain data carried alongside an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderMetadata {
    /// What the order trades.
    #[serde(flatten)]
    pub assets: OrderAssets,
    /// Account credited with the referral bounty, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub referrer_address: Option<Address>,
}

/// A Wyvern order before hashing and signing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnhashedOrder {
    /// The exchange contract that settles the order.
    pub exchange: Address,
    /// The account making the order.
    pub maker: Address,
    /// The only account allowed to take the order, or null for anyone.
    pub taker: Address,
    /// Number of assets traded. Always one for bundles.
    pub quantity: U256,
    /// Relayer fee paid by the maker, in basis points.
    pub maker_relayer_fee: U256,
    /// Relayer fee paid by the taker, in basis points.
    pub taker_relayer_fee: U256,
    /// Protocol fee paid by the maker.
    pub maker_protocol_fee: U256,
    /// Protocol fee paid by the taker.
    pub taker_protocol_fee: U256,
    /// Share of the maker relayer fee paid to the referrer, in basis points.
    pub maker_referrer_fee: U256,
    /// True for English auctions.
    pub waiting_for_best_counter_order: bool,
    /// How fees are charged.
    pub fee_method: FeeMethod,
    /// Recipient of the relayer fees. Exactly one side of a match sets it.
    pub fee_recipient: Address,
    /// Buy or sell.
    pub side: Side,
    /// Fixed price or Dutch auction.
    pub sale_kind: SaleKind,
    /// Contract called by the maker's proxy.
    pub target: Address,
    /// How the target is called.
    pub how_to_call: HowToCall,
    /// Calldata for the target.
    pub calldata: Bytes,
    /// Mask of calldata bytes the counter-order may replace.
    pub replacement_pattern: Bytes,
    /// Contract called to check the order, or null.
    pub static_target: Address,
    /// Calldata for the static target.
    pub static_extradata: Bytes,
    /// Token the price is paid in, null for ether.
    pub payment_token: Address,
    /// Starting price in base units of the payment token.
    pub base_price: U256,
    /// Price change over the listing window.
    pub extra: U256,
    /// Unix time at which the order becomes valid.
    pub listing_time: u64,
    /// Unix time at which the order expires, zero for never.
    pub expiration_time: u64,
    /// Random salt.
    pub salt: U256,
    /// Off-chain metadata.
    pub metadata: OrderMetadata,
}

impl UnhashedOrder {
    /// The Wyvern order hash.
    ///
    /// # Composition
    ///
    /// The tightly packed encoding of: exchange, maker, taker, the four
    /// relayer and protocol fees, fee recipient, fee method, side, sale
    /// kind, target, how-to-call, calldata, replacement pattern, static
    /// target, static extradata, payment token, base price, extra, listing
    /// time, expiration time and salt.
    pub fn hash(&self) -> B256 {
        keccak256(self.hash_pre_image())
    }

    /// The digest the maker signs: the order hash as an EIP-191 personal
    /// message.
    pub fn hash_to_sign(&self) -> B256 {
        eip191_hash_message(self.hash())
    }

    /// Compute the pre-image for the order hash.
    #[doc(hidden)]
    pub fn hash_pre_image(&self) -> Bytes {
        let mut buf = Vec::with_capacity(
            FIXED_PRE_IMAGE_LEN
                + self.calldata.len()
                + self.replacement_pattern.len()
                + self.static_extradata.len(),
        );

        buf.extend_from_slice(self.exchange.as_slice());
        buf.extend_from_slice(self.maker.as_slice());
        buf.extend_from_slice(self.taker.as_slice());
        buf.extend_from_slice(&self.maker_relayer_fee.to_be_bytes::<32>());
        buf.extend_from_slice(&self.taker_relayer_fee.to_be_bytes::<32>());
        buf.extend_from_slice(&self.maker_protocol_fee.to_be_bytes::<32>());
        buf.extend_from_slice(&self.taker_protocol_fee.to_be_bytes::<32>());
        buf.extend_from_slice(self.fee_recipient.as_slice());
        buf.push(self.fee_method.into());
        buf.push(self.side.into());
        buf.push(self.sale_kind.into());
        buf.extend_from_slice(self.target.as_slice());
        buf.push(self.how_to_call.into());
        buf.extend_from_slice(&self.calldata);
        buf.extend_from_slice(&self.replacement_pattern);
        buf.extend_from_slice(self.static_target.as_slice());
        buf.extend_from_slice(&self.static_extradata);
        buf.extend_from_slice(self.payment_token.as_slice());
        buf.extend_from_slice(&self.base_price.to_be_bytes::<32>());
        buf.extend_from_slice(&self.extra.to_be_bytes::<32>());
        buf.extend_from_slice(&U256::from(self.listing_time).to_be_bytes::<32>());
        buf.extend_from_slice(&U256::from(self.expiration_time).to_be_bytes::<32>());
        buf.extend_from_slice(&self.salt.to_be_bytes::<32>());

        buf.into()
    }

    /// True if the order names a taker.
    pub fn is_private(&self) -> bool {
        self.taker != NULL_ADDRESS
    }

    /// True if the exchange would settle the order at time `now`.
    pub const fn can_settle(&self, now: u64) -> bool {
        self.listing_time < now && (self.expiration_time == 0 || now < self.expiration_time)
    }

    /// The price of the order at time `now`.
    pub fn current_price(&self, now: u64) -> U256 {
        calculate_final_price(
            self.side,
            self.sale_kind,
            self.base_price,
            self.extra,
            self.listing_time,
            self.expiration_time,
            now,
        )
    }

    /// The address array used by the exchange's order entry points.
    pub const fn addrs(&self) -> [Address; 7] {
        [
            self.exchange,
            self.maker,
            self.taker,
            self.fee_recipient,
            self.target,
            self.static_target,
            self.payment_token,
        ]
    }

    /// The uint array used by the exchange's order entry points.
    pub fn uints(&self) -> [U256; 9] {
        [
            self.maker_relayer_fee,
            self.taker_relayer_fee,
            self.maker_protocol_fee,
            self.taker_protocol_fee,
            self.base_price,
            self.extra,
            U256::from(self.listing_time),
            U256::from(self.expiration_time),
            self.salt,
        ]
    }

    /// Build the exchange call that checks the order's parameters.
    pub fn to_validate_parameters_call(&self) -> validateOrderParameters_Call {
        validateOrderParameters_Call {
            addrs: self.addrs(),
            uints: self.uints(),
            feeMethod: self.fee_method.into(),
            side: self.side.into(),
            saleKind: self.sale_kind.into(),
            howToCall: self.how_to_call.into(),
            callData: self.calldata.clone(),
            replacementPattern: self.replacement_pattern.clone(),
            staticExtradata: self.static_extradata.clone(),
        }
    }
}

#[cfg(test)]
pub(crate) mod test {
    use super::*;

    pub(crate) const MAKER: Address = Address::repeat_byte(0xaa);

    /// A plain fixed-price sell of one ERC-721.
    pub(crate) fn sample_order() -> UnhashedOrder {
        UnhashedOrder {
            exchange: Address::repeat_byte(0x11),
            maker: MAKER,
            taker: NULL_ADDRESS,
            quantity: U256::from(1),
            maker_relayer_fee: U256::from(250),
            taker_relayer_fee: U256::ZERO,
            maker_protocol_fee: U256::ZERO,
            taker_protocol_fee: U256::ZERO,
            maker_referrer_fee: U256::ZERO,
            waiting_for_best_counter_order: false,
            fee_method: FeeMethod::SplitFee,
            fee_recipient: Address::repeat_byte(0x55),
            side: Side::Sell,
            sale_kind: SaleKind::FixedPrice,
            target: Address::repeat_byte(0xc0),
            how_to_call: HowToCall::Call,
            calldata: Bytes::from(vec![1u8; 100]),
            replacement_pattern: Bytes::from(vec![0u8; 100]),
            static_target: NULL_ADDRESS,
            static_extradata: Bytes::new(),
            payment_token: NULL_ADDRESS,
            base_price: U256::from(1_000_000),
            extra: U256::ZERO,
            listing_time: 1_000,
            expiration_time: 0,
            salt: U256::from(42),
            metadata: OrderMetadata {
                assets: OrderAssets::Asset {
                    asset: WyvernAsset {
                        address: Address::repeat_byte(0xc0),
                        id: Some(U256::from(7)),
                        quantity: None,
                    },
                    schema: WyvernSchemaName::Erc721,
                },
                referrer_address: None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{
        test::{sample_order, MAKER},
        *,
    };

    #[test]
    fn pre_image_layout() {
        let order = sample_order();
        let pre_image = order.hash_pre_image();
        assert_eq!(pre_image.len(), FIXED_PRE_IMAGE_LEN + 200);
        assert_eq!(&pre_image[..20], order.exchange.as_slice());
        assert_eq!(&pre_image[20..40], order.maker.as_slice());
        // salt closes the pre-image
        assert_eq!(&pre_image[pre_image.len() - 32..], &U256::from(42).to_be_bytes::<32>());
    }

    #[test]
    fn hash_covers_signed_fields_only() {
        let order = sample_order();
        let hash = order.hash();

        let mut other = order.clone();
        other.salt = U256::from(43);
        assert_ne!(other.hash(), hash);

        let mut other = order.clone();
        other.side = Side::Buy;
        assert_ne!(other.hash(), hash);

        // off-chain fields don't change the hash
        let mut other = order.clone();
        other.maker_referrer_fee = U256::from(100);
        other.quantity = U256::from(3);
        other.metadata.referrer_address = Some(Address::repeat_byte(9));
        assert_eq!(other.hash(), hash);
    }

    #[test]
    fn hash_to_sign_is_personal_message() {
        let order = sample_order();
        assert_eq!(order.hash_to_sign(), eip191_hash_message(order.hash()));
    }

    #[test]
    fn settlement_window() {
        let mut order = sample_order();
        assert!(!order.can_settle(1_000));
        assert!(order.can_settle(1_001));
        order.expiration_time = 2_000;
        assert!(order.can_settle(1_999));
        assert!(!order.can_settle(2_000));
    }

    #[test]
    fn validate_call_arrays() {
        let order = sample_order();
        let call = order.to_validate_parameters_call();
        assert_eq!(call.addrs[1], MAKER);
        assert_eq!(call.uints[0], U256::from(250));
        assert_eq!(call.uints[8], U256::from(42));
        assert_eq!(call.side, 1);
        assert_eq!(call.feeMethod, 1);
        assert_eq!(call.callData, order.calldata);
    }

    #[test]
    fn salts_are_unique() {
        let salts = (0..64).map(|_| generate_salt()).collect::<std::collections::HashSet<_>>();
        assert_eq!(salts.len(), 64);
        assert!(!salts.contains(&U256::ZERO));
    }

    #[test]
    fn serde_roundtrip_keeps_metadata() {
        let order = sample_order();
        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["metadata"]["schema"], "ERC721");
        assert_eq!(json["side"], 1);
        let back: UnhashedOrder = serde_json::from_value(json).unwrap();
        assert_eq!(back, order);
        assert_eq!(back.hash(), order.hash());
    }
}
