//! List a bundle of ERC-721 tokens for a fixed price in ether.
//!
//! Reads the network, API key and RPC URL from the environment (see
//! `SdkConfig::from_env`), e.g.
//!
//! ```sh
//! OPENSEA_NETWORK=rinkeby ETH_RPC_URL=http://localhost:8545 \
//!   cargo run --example bundle_sell -- --key $KEY \
//!   --asset 0x06012c8cf97bead5deae237070f9587f8e7a266d:7 --price 0.5 --dry-run
//! ```
use alloy::{
    primitives::Address,
    providers::ProviderBuilder,
    signers::{local::PrivateKeySigner, Signer},
};
use clap::Parser;
use eyre::{eyre, Result};
use opensea_api::OpenSeaApi;
use opensea_orders::{BundleSellParams, OpenSeaPort, ProviderChain};
use opensea_types::{Asset, SdkConfig};
use rust_decimal::Decimal;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
struct Args {
    /// Private key of the seller.
    #[arg(long, env = "SELLER_KEY")]
    key: String,
    /// An asset of the bundle, as `address:token_id`. Repeat for more.
    #[arg(long = "asset", required = true)]
    assets: Vec<String>,
    /// Price in ether.
    #[arg(long)]
    price: Decimal,
    /// Bundle name.
    #[arg(long, default_value = "Bundle")]
    name: String,
    /// Build, approve and print the order without posting it.
    #[arg(long)]
    dry_run: bool,
}

/// Parse an `address:token_id` pair.
fn parse_asset(raw: &str) -> Result<Asset> {
    let (address, token_id) =
        raw.split_once(':').ok_or_else(|| eyre!("expected address:token_id, got {raw}"))?;
    Ok(Asset::non_fungible(address.parse::<Address>()?, token_id))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let args = Args::parse();
    let config = SdkConfig::from_env()?;
    let signer: PrivateKeySigner = args.key.parse()?;
    let seller = signer.address();

    let rpc_url = config.rpc_url.clone().ok_or_else(|| eyre!("ETH_RPC_URL is not set"))?;
    let provider = ProviderBuilder::new().wallet(signer.clone()).connect_http(rpc_url);

    let api = OpenSeaApi::from_config(&config);
    let port = OpenSeaPort::new(api, ProviderChain::new(provider), config.network);

    let assets = args.assets.iter().map(|raw| parse_asset(raw)).collect::<Result<Vec<_>>>()?;
    let quantities = vec![Decimal::ONE; assets.len()];
    let params = BundleSellParams::new(seller, args.name, assets, quantities, args.price);

    if args.dry_run {
        let order = port.make_bundle_sell_order(params).await?;
        port.sell_order_validation_and_approvals(&order, seller).await?;
        println!("{}", serde_json::to_string_pretty(&order)?);
        return Ok(());
    }

    let signed = port.create_bundle_sell_order(params, &signer).await?;
    println!("posted bundle order {}", signed.hash());
    Ok(())
}
