use alloy::primitives::{Address, U256};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Token standards understood by the Wyvern schemas.
#[derive(
    Debug, Default, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum WyvernSchemaName {
    /// Fungible tokens.
    #[serde(rename = "ERC20")]
    Erc20,
    /// Non-fungible tokens.
    #[default]
    #[serde(rename = "ERC721")]
    Erc721,
    /// Semi-fungible tokens.
    #[serde(rename = "ERC1155")]
    Erc1155,
}

/// Error returned when parsing an unknown schema name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown schema name {0}. supported schemas: ERC20, ERC721, ERC1155")]
pub struct ParseSchemaError(pub String);

impl WyvernSchemaName {
    /// The canonical name of the schema.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Erc20 => "ERC20",
            Self::Erc721 => "ERC721",
            Self::Erc1155 => "ERC1155",
        }
    }

    /// True for fungible tokens, which are identified by contract alone.
    pub const fn is_fungible(&self) -> bool {
        matches!(self, Self::Erc20)
    }

    /// True for schemas whose assets carry a token id.
    pub const fn has_token_id(&self) -> bool {
        !self.is_fungible()
    }

    /// True for schemas whose assets carry a quantity.
    pub const fn has_quantity(&self) -> bool {
        !matches!(self, Self::Erc721)
    }
}

impl core::fmt::Display for WyvernSchemaName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WyvernSchemaName {
    type Err = ParseSchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().replace('-', "").as_str() {
            "ERC20" => Ok(Self::Erc20),
            "ERC721" => Ok(Self::Erc721),
            "ERC1155" => Ok(Self::Erc1155),
            _ => Err(ParseSchemaError(s.to_string())),
        }
    }
}

/// A tradeable item, as supplied by users of the SDK.
///
/// Fungible assets have no token id. The schema defaults to ERC-721 when
/// absent, and decimals default to zero.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    /// Address of the token contract.
    pub token_address: Address,
    /// Token identifier, as a decimal or `0x`-prefixed hex string.
    #[serde(default)]
    pub token_id: Option<String>,
    /// Token standard of the contract.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema_name: Option<WyvernSchemaName>,
    /// Decimals used to scale quantities into base units.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decimals: Option<u8>,
}

impl Asset {
    /// A non-fungible (ERC-721) asset.
    pub fn non_fungible(token_address: Address, token_id: impl ToString) -> Self {
        Self {
            token_address,
            token_id: Some(token_id.to_string()),
            schema_name: Some(WyvernSchemaName::Erc721),
            decimals: None,
        }
    }

    /// A semi-fungible (ERC-1155) asset.
    pub fn semi_fungible(token_address: Address, token_id: impl ToString) -> Self {
        Self {
            token_address,
            token_id: Some(token_id.to_string()),
            schema_name: Some(WyvernSchemaName::Erc1155),
            decimals: None,
        }
    }

    /// A fungible (ERC-20) asset.
    pub const fn fungible(token_address: Address) -> Self {
        Self {
            token_address,
            token_id: None,
            schema_name: Some(WyvernSchemaName::Erc20),
            decimals: None,
        }
    }

    /// Set the decimals used to scale quantities.
    pub const fn with_decimals(mut self, decimals: u8) -> Self {
        self.decimals = Some(decimals);
        self
    }

    /// The schema of the asset, defaulting to ERC-721.
    pub fn schema(&self) -> WyvernSchemaName {
        self.schema_name.unwrap_or_default()
    }

    /// Parse the token id, if any.
    pub fn parsed_token_id(&self) -> Option<Result<U256, String>> {
        self.token_id
            .as_deref()
            .map(|id| U256::from_str(id.trim()).map_err(|_| id.to_string()))
    }
}

/// An asset in the shape the Wyvern schemas encode.
///
/// ERC-721 assets carry an id, ERC-1155 assets an id and a quantity, and
/// ERC-20 assets a quantity. Quantities are in base units.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WyvernAsset {
    /// Address of the token contract.
    pub address: Address,
    /// Token id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<U256>,
    /// Quantity in base units.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<U256>,
}

impl WyvernAsset {
    /// The quantity moved by a transfer of this asset. Non-fungible assets
    /// always move exactly one token.
    pub fn quantity_or_one(&self) -> U256 {
        self.quantity.unwrap_or(U256::from(1))
    }

    /// Convert back into a user-facing [`Asset`].
    pub fn to_asset(&self, schema: WyvernSchemaName) -> Asset {
        Asset {
            token_address: self.address,
            token_id: self.id.map(|id| id.to_string()),
            schema_name: Some(schema),
            decimals: None,
        }
    }
}

/// Fee configuration of an asset contract, as reported by the marketplace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetContract {
    /// Address of the contract.
    pub address: Address,
    /// Name of the collection.
    #[serde(default)]
    pub name: Option<String>,
    /// Token standard of the contract.
    #[serde(default)]
    pub schema_name: WyvernSchemaName,
    /// Total buyer fee (OpenSea + developer).
    pub buyer_fee_basis_points: u64,
    /// Total seller fee (OpenSea + developer).
    pub seller_fee_basis_points: u64,
    /// OpenSea's part of the buyer fee.
    pub opensea_buyer_fee_basis_points: u64,
    /// OpenSea's part of the seller fee.
    pub opensea_seller_fee_basis_points: u64,
    /// The developer's part of the buyer fee.
    pub dev_buyer_fee_basis_points: u64,
    /// The developer's part of the seller fee.
    pub dev_seller_fee_basis_points: u64,
}

/// An asset as indexed by the marketplace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenSeaAsset {
    /// Token id, as a decimal string.
    pub token_id: String,
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Description.
    #[serde(default)]
    pub description: Option<String>,
    /// Image URL.
    #[serde(default)]
    pub image_url: Option<String>,
    /// The contract the asset belongs to.
    pub asset_contract: AssetContract,
}

impl OpenSeaAsset {
    /// Address of the asset's contract.
    pub const fn token_address(&self) -> Address {
        self.asset_contract.address
    }
}

/// A token accepted as payment by the marketplace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PaymentToken {
    /// Ticker symbol.
    pub symbol: String,
    /// Token contract address, or the null address for ether.
    pub address: Address,
    /// Decimals of the token.
    pub decimals: u8,
    /// Full name of the token.
    #[serde(default)]
    pub name: Option<String>,
    /// Image URL.
    #[serde(default)]
    pub image_url: Option<String>,
}
