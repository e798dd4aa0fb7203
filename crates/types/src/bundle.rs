use crate::{to_base_units, Asset, PriceError, WyvernAsset, WyvernSchemaName};
use alloy::primitives::{Address, U256};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Errors raised while assembling a [`WyvernBundle`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BundleError {
    /// A bundle needs at least one asset.
    #[error("bundle must contain at least one asset")]
    Empty,
    /// Every asset needs exactly one quantity.
    #[error("bundle must have a quantity for every asset: {assets} assets, {quantities} quantities")]
    QuantityMismatch {
        /// Number of assets.
        assets: usize,
        /// Number of quantities.
        quantities: usize,
    },
    /// The same asset appears twice.
    #[error("bundle can't contain duplicate assets: {address} #{id}")]
    DuplicateAsset {
        /// Contract address.
        address: Address,
        /// Token id, zero for fungible assets.
        id: U256,
    },
    /// A non-fungible or semi-fungible asset has no token id.
    #[error("asset {0} of schema {1} has no token id")]
    MissingTokenId(Address, WyvernSchemaName),
    /// The token id could not be parsed.
    #[error("invalid token id {0}")]
    InvalidTokenId(String),
    /// Non-fungible assets are traded one at a time.
    #[error("non-fungible asset {address} #{id} must have quantity 1, got {quantity}")]
    NonFungibleQuantity {
        /// Contract address.
        address: Address,
        /// Token id.
        id: U256,
        /// Requested quantity.
        quantity: Decimal,
    },
    /// A quantity could not be converted into base units.
    #[error("invalid quantity: {0}")]
    Quantity(#[from] PriceError),
}

/// A set of assets traded together in one atomic order.
///
/// Assets are kept sorted by contract address and then token id, with
/// `schemas[i]` describing `assets[i]`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WyvernBundle {
    /// The assets, in canonical order.
    pub assets: Vec<WyvernAsset>,
    /// The schema of each asset.
    pub schemas: Vec<WyvernSchemaName>,
    /// Display name of the bundle.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Description of the bundle.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// External link for the bundle.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_link: Option<String>,
}

impl WyvernBundle {
    /// Attach descriptive metadata.
    pub fn with_metadata(
        mut self,
        name: Option<String>,
        description: Option<String>,
        external_link: Option<String>,
    ) -> Self {
        self.name = name;
        self.description = description;
        self.external_link = external_link;
        self
    }

    /// Iterate over assets paired with their schemas.
    pub fn iter(&self) -> impl Iterator<Item = (&WyvernAsset, WyvernSchemaName)> + '_ {
        self.assets.iter().zip(self.schemas.iter().copied())
    }

    /// Number of assets in the bundle.
    #[allow(clippy::missing_const_for_fn)] // false positive
    pub fn len(&self) -> usize {
        self.assets.len()
    }

    /// True if the bundle has no assets.
    #[allow(clippy::missing_const_for_fn)] // false positive
    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    /// The contract shared by every asset, if the bundle is homogeneous and
    /// made of identifiable tokens.
    pub fn single_contract(&self) -> Option<&WyvernAsset> {
        let first = self.assets.first()?;
        let same = self.assets.iter().all(|asset| asset.address == first.address && asset.id.is_some());
        same.then_some(first)
    }
}

/// Convert one user asset and quantity into a [`WyvernAsset`].
fn wyvern_asset(asset: &Asset, quantity: Decimal) -> Result<WyvernAsset, BundleError> {
    let schema = asset.schema();
    let id = match asset.parsed_token_id() {
        Some(Ok(id)) => Some(id),
        Some(Err(raw)) => return Err(BundleError::InvalidTokenId(raw)),
        None => None,
    };
    let base_quantity = to_base_units(quantity, asset.decimals.unwrap_or(0))?;

    match schema {
        WyvernSchemaName::Erc721 => {
            let id = id.ok_or(BundleError::MissingTokenId(asset.token_address, schema))?;
            if base_quantity != U256::from(1) {
                return Err(BundleError::NonFungibleQuantity {
                    address: asset.token_address,
                    id,
                    quantity,
                });
            }
            Ok(WyvernAsset { address: asset.token_address, id: Some(id), quantity: None })
        }
        WyvernSchemaName::Erc1155 => {
            let id = id.ok_or(BundleError::MissingTokenId(asset.token_address, schema))?;
            Ok(WyvernAsset {
                address: asset.token_address,
                id: Some(id),
                quantity: Some(base_quantity),
            })
        }
        WyvernSchemaName::Erc20 => {
            Ok(WyvernAsset { address: asset.token_address, id: None, quantity: Some(base_quantity) })
        }
    }
}

/// Assemble a bundle from assets and their quantities.
///
/// `quantities[i]` belongs to `assets[i]` and is scaled by that asset's
/// decimals. The resulting bundle is sorted by contract address and token
/// id, so callers may supply assets in any order.
pub fn get_wyvern_bundle(
    assets: &[Asset],
    quantities: &[Decimal],
) -> Result<WyvernBundle, BundleError> {
    if assets.len() != quantities.len() {
        return Err(BundleError::QuantityMismatch {
            assets: assets.len(),
            quantities: quantities.len(),
        });
    }
    if assets.is_empty() {
        return Err(BundleError::Empty);
    }

    let mut entries = assets
        .iter()
        .zip(quantities)
        .map(|(asset, quantity)| Ok((wyvern_asset(asset, *quantity)?, asset.schema())))
        .collect::<Result<Vec<_>, BundleError>>()?;

    let mut seen = HashSet::with_capacity(entries.len());
    for (asset, _) in &entries {
        let key = (asset.address, asset.id.unwrap_or_default());
        if !seen.insert(key) {
            return Err(BundleError::DuplicateAsset { address: key.0, id: key.1 });
        }
    }

    entries.sort_by_key(|(asset, _)| (asset.address, asset.id.unwrap_or_default()));
    let (assets, schemas) = entries.into_iter().unzip();

    Ok(WyvernBundle { assets, schemas, ..Default::default() })
}
