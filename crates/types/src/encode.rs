use crate::{HowToCall, WyvernAsset, WyvernBundle, WyvernSchemaName};
use alloy::{
    primitives::{Address, Bytes},
    sol_types::SolCall,
};
use opensea_constants::NULL_ADDRESS;
use opensea_wyvern::{WyvernAtomicizer::atomicizeCall, IERC1155, IERC20, IERC721};

/// Index of the `from` argument of every transfer call.
const FROM_PARAM: usize = 0;
/// Index of the `to` argument of every transfer call.
const TO_PARAM: usize = 1;

/// Errors raised while encoding transfer calldata.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EncodeError {
    /// The schema moves tokens by id but the asset has none.
    #[error("{schema} asset {address} has no token id")]
    MissingTokenId {
        /// Contract address.
        address: Address,
        /// Schema of the asset.
        schema: WyvernSchemaName,
    },
    /// The schema moves an amount but the asset has none.
    #[error("{schema} asset {address} has no quantity")]
    MissingQuantity {
        /// Contract address.
        address: Address,
        /// Schema of the asset.
        schema: WyvernSchemaName,
    },
    /// The bundle's schema list doesn't line up with its assets.
    #[error("bundle has {assets} assets but {schemas} schemas")]
    SchemaCountMismatch {
        /// Number of assets.
        assets: usize,
        /// Number of schemas.
        schemas: usize,
    },
}

/// The target, calldata and replacement pattern of an order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallParams {
    /// Contract called by the maker's proxy.
    pub target: Address,
    /// How the proxy calls it.
    pub how_to_call: HowToCall,
    /// Calldata for the target.
    pub calldata: Bytes,
    /// Bytes of `calldata` the counter-order fills in.
    pub replacement_pattern: Bytes,
}

/// Encode the call that moves `asset` from `from` to `to`.
pub fn encode_transfer(
    asset: &WyvernAsset,
    schema: WyvernSchemaName,
    from: Address,
    to: Address,
) -> Result<Bytes, EncodeError> {
    let address = asset.address;
    let id = || asset.id.ok_or(EncodeError::MissingTokenId { address, schema });
    let quantity = || asset.quantity.ok_or(EncodeError::MissingQuantity { address, schema });

    let calldata = match schema {
        WyvernSchemaName::Erc721 => {
            IERC721::transferFromCall { from, to, tokenId: id()? }.abi_encode()
        }
        WyvernSchemaName::Erc1155 => IERC1155::safeTransferFromCall {
            from,
            to,
            id: id()?,
            value: quantity()?,
            data: Bytes::new(),
        }
        .abi_encode(),
        WyvernSchemaName::Erc20 => {
            IERC20::transferFromCall { from, to, amount: quantity()? }.abi_encode()
        }
    };
    Ok(calldata.into())
}

/// A pattern over `len` bytes of calldata that marks argument `param` as
/// replaceable.
fn replacement_mask(len: usize, param: usize) -> Vec<u8> {
    let mut mask = vec![0u8; len];
    let start = 4 + 32 * param;
    if let Some(word) = mask.get_mut(start..start + 32) {
        word.fill(0xff);
    }
    mask
}

fn encode_single(
    asset: &WyvernAsset,
    schema: WyvernSchemaName,
    from: Address,
    to: Address,
    replaceable: usize,
) -> Result<CallParams, EncodeError> {
    let calldata = encode_transfer(asset, schema, from, to)?;
    let replacement_pattern = replacement_mask(calldata.len(), replaceable).into();
    Ok(CallParams { target: asset.address, how_to_call: HowToCall::Call, calldata, replacement_pattern })
}

/// Calldata for a sell of one asset: the maker sends, and the buyer fills
/// in the recipient.
pub fn encode_sell(
    asset: &WyvernAsset,
    schema: WyvernSchemaName,
    maker: Address,
) -> Result<CallParams, EncodeError> {
    encode_single(asset, schema, maker, NULL_ADDRESS, TO_PARAM)
}

/// Calldata for a buy of one asset: the maker receives, and the seller fills
/// in the sender.
pub fn encode_buy(
    asset: &WyvernAsset,
    schema: WyvernSchemaName,
    maker: Address,
) -> Result<CallParams, EncodeError> {
    encode_single(asset, schema, NULL_ADDRESS, maker, FROM_PARAM)
}

fn encode_atomicized(
    bundle: &WyvernBundle,
    atomicizer: Address,
    from: Address,
    to: Address,
    replaceable: usize,
) -> Result<CallParams, EncodeError> {
    if bundle.assets.len() != bundle.schemas.len() {
        return Err(EncodeError::SchemaCountMismatch {
            assets: bundle.assets.len(),
            schemas: bundle.schemas.len(),
        });
    }

    let calls = bundle
        .iter()
        .map(|(asset, schema)| Ok((asset.address, encode_transfer(asset, schema, from, to)?)))
        .collect::<Result<Vec<_>, EncodeError>>()?;

    let call = atomicizeCall::from_calls(&calls);
    let calldata = call.abi_encode();

    // Each transfer keeps its own mask, at the position its calldata
    // occupies inside the atomicizer's `calldatas` argument.
    let mut pattern = vec![0u8; calldata.len()];
    let mut offset = call.calldatas_offset();
    for (_, data) in &calls {
        let mask = replacement_mask(data.len(), replaceable);
        pattern[offset..offset + mask.len()].copy_from_slice(&mask);
        offset += mask.len();
    }

    Ok(CallParams {
        target: atomicizer,
        how_to_call: HowToCall::DelegateCall,
        calldata: calldata.into(),
        replacement_pattern: pattern.into(),
    })
}

/// Calldata for a bundle sell, executed through the atomicizer.
pub fn encode_atomicized_sell(
    bundle: &WyvernBundle,
    maker: Address,
    atomicizer: Address,
) -> Result<CallParams, EncodeError> {
    encode_atomicized(bundle, atomicizer, maker, NULL_ADDRESS, TO_PARAM)
}

/// Calldata for a bundle buy, executed through the atomicizer.
pub fn encode_atomicized_buy(
    bundle: &WyvernBundle,
    maker: Address,
    atomicizer: Address,
) -> Result<CallParams, EncodeError> {
    encode_atomicized(bundle, atomicizer, NULL_ADDRESS, maker, FROM_PARAM)
}
