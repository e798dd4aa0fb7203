//! Assets, contracts and payment tokens of the scenario tests.
use crate::test_constants::WETH;
use alloy::primitives::{address, Address};
use opensea_types::{Asset, AssetContract, PaymentToken, WyvernSchemaName};

/// Test address for the Mythereum ERC-721 contract. The marketplace knows
/// its fees.
pub const MYTHEREUM_ADDRESS: Address = Address::repeat_byte(0xa1);
/// A Mythereum card.
pub const MYTHEREUM_TOKEN_ID: u64 = 4367;
/// A second Mythereum card.
pub const MYTHEREUM_TOKEN_ID_2: u64 = 4368;

/// Test address for the Digital Art Chain ERC-721 contract.
pub const DIGITAL_ART_CHAIN_ADDRESS: Address = Address::repeat_byte(0xa2);
/// A Digital Art Chain piece.
pub const DIGITAL_ART_CHAIN_TOKEN_ID: u64 = 189;

/// Test address for the Benzene ERC-20 token, which has no decimals.
pub const BENZENE_ADDRESS: Address = Address::repeat_byte(0xa3);

/// Test address for the Enjin ERC-1155 contract.
pub const ENJIN_ADDRESS: Address = Address::repeat_byte(0xa4);
/// The Enjin "Dissolution" item.
pub const DISSOLUTION_TOKEN_ID: &str =
    "0x8000000000000d56000000000000000000000000000000000000000000000000";
/// The Enjin "Spirit Clash" item.
pub const SPIRIT_CLASH_TOKEN_ID: &str =
    "0x800000000000076c000000000000000000000000000000000000000000000000";

/// Test address for the MANA payment token.
pub const MANA_ADDRESS: Address = address!("0x0f5d2fb29fb7d3cfee444a200298f468908cc942");

/// Fees the marketplace reports for Mythereum.
pub const MYTHEREUM_CONTRACT_FEES: (u64, u64, u64, u64) = (0, 250, 0, 100);

/// The two ERC-721 assets of the heterogeneous bundles.
pub fn assets_for_bundle_order() -> Vec<Asset> {
    vec![
        Asset::non_fungible(MYTHEREUM_ADDRESS, MYTHEREUM_TOKEN_ID),
        Asset::non_fungible(DIGITAL_ART_CHAIN_ADDRESS, DIGITAL_ART_CHAIN_TOKEN_ID),
    ]
}

/// Two Mythereum cards, a bundle of a single contract.
pub fn homogeneous_assets_for_bundle_order() -> Vec<Asset> {
    vec![
        Asset::non_fungible(MYTHEREUM_ADDRESS, MYTHEREUM_TOKEN_ID),
        Asset::non_fungible(MYTHEREUM_ADDRESS, MYTHEREUM_TOKEN_ID_2),
    ]
}

/// A fungible asset for mixed-schema bundles.
pub fn fungible_assets_for_bundle_order() -> Vec<Asset> {
    vec![Asset::fungible(BENZENE_ADDRESS).with_decimals(0)]
}

/// Two items of one ERC-1155 contract for mixed-schema bundles.
pub fn semi_fungible_assets_for_bundle_order() -> Vec<Asset> {
    vec![
        Asset::semi_fungible(ENJIN_ADDRESS, DISSOLUTION_TOKEN_ID),
        Asset::semi_fungible(ENJIN_ADDRESS, SPIRIT_CLASH_TOKEN_ID),
    ]
}

/// The Mythereum contract as the marketplace describes it.
pub fn mythereum_contract() -> AssetContract {
    let (opensea_buyer, opensea_seller, dev_buyer, dev_seller) = MYTHEREUM_CONTRACT_FEES;
    AssetContract {
        address: MYTHEREUM_ADDRESS,
        name: Some("Mythereum".into()),
        schema_name: WyvernSchemaName::Erc721,
        buyer_fee_basis_points: opensea_buyer + dev_buyer,
        seller_fee_basis_points: opensea_seller + dev_seller,
        opensea_buyer_fee_basis_points: opensea_buyer,
        opensea_seller_fee_basis_points: opensea_seller,
        dev_buyer_fee_basis_points: dev_buyer,
        dev_seller_fee_basis_points: dev_seller,
    }
}

/// An ERC-721 contract charging OpenSea's default fees.
pub fn default_fee_contract(address: Address, schema_name: WyvernSchemaName) -> AssetContract {
    AssetContract {
        address,
        name: None,
        schema_name,
        buyer_fee_basis_points: 0,
        seller_fee_basis_points: 250,
        opensea_buyer_fee_basis_points: 0,
        opensea_seller_fee_basis_points: 250,
        dev_buyer_fee_basis_points: 0,
        dev_seller_fee_basis_points: 0,
    }
}

/// Wrapped ether on the test network.
pub fn weth_token() -> PaymentToken {
    PaymentToken {
        symbol: "WETH".into(),
        address: WETH,
        decimals: 18,
        name: Some("Wrapped Ether".into()),
        image_url: None,
    }
}

/// Decentraland MANA.
pub fn mana_token() -> PaymentToken {
    PaymentToken {
        symbol: "MANA".into(),
        address: MANA_ADDRESS,
        decimals: 18,
        name: Some("Decentraland MANA".into()),
        image_url: None,
    }
}
