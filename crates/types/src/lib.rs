//! Types used throughout the OpenSea SDK: assets and bundles, Wyvern orders
//! and their hashing and signing, fee and price computation, transfer
//! calldata encoding, and the order matching rules of the exchange.

#![warn(
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    clippy::missing_const_for_fn,
    rustdoc::all
)]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![deny(unused_must_use, rust_2018_idioms)]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

mod asset;
pub use asset::{
    Asset, AssetContract, OpenSeaAsset, ParseSchemaError, PaymentToken, WyvernAsset,
    WyvernSchemaName,
};

mod bundle;
pub use bundle::{get_wyvern_bundle, BundleError, WyvernBundle};

mod config;
pub use config::{env_utils, ConfigError, SdkConfig};

mod encode;
pub use encode::{
    encode_atomicized_buy, encode_atomicized_sell, encode_buy, encode_sell, encode_transfer,
    CallParams, EncodeError,
};

mod fees;
pub use fees::{
    buy_fee_parameters, compute_fees, sell_fee_parameters, ComputedFees, FeeError, FeeParameters,
};

mod matching;
pub use matching::{
    calculate_match_price, guarded_array_replace, order_calldata_can_match, orders_can_match,
    validate_order_parameters, MatchError, OrderParameterError,
};

mod order;
pub use order::{
    generate_salt, FeeMethod, HowToCall, OrderAssets, OrderMetadata, SaleKind, Side,
    UnhashedOrder, UnknownVariant,
};

mod pricing;
pub use pricing::{
    calculate_final_price, price_parameters, time_parameters, to_base_units, PriceError,
    PriceParameters, TimeError, TimeParameters,
};

mod signing;
pub use signing::{SignedOrder, SignedOrderError, SigningError};

/// Current unix timestamp in seconds.
pub fn unix_now() -> u64 {
    chrono::Utc::now().timestamp().max(0) as u64
}
