use alloy::primitives::U256;
use opensea_api::types::PaymentTokenQuery;
use opensea_constants::NULL_ADDRESS;
use opensea_orders::{BundleBuyParams, BundleSellParams, OpenSeaPort};
use opensea_test_utils::{
    assertions::{assert_fees_maker_order, assert_matching_new_order},
    fixtures::{
        assets_for_bundle_order, fungible_assets_for_bundle_order,
        homogeneous_assets_for_bundle_order, semi_fungible_assets_for_bundle_order,
        BENZENE_ADDRESS, ENJIN_ADDRESS, MYTHEREUM_ADDRESS, MYTHEREUM_TOKEN_ID,
    },
    init_tracing,
    mocks::{proxy_address, seeded_port, MockChain, MockMarketplaceApi, MockTx},
    users::ALEX,
};
use opensea_types::{unix_now, AssetContract, PaymentToken, SaleKind, Side};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

async fn payment_token(
    port: &OpenSeaPort<MockMarketplaceApi, MockChain>,
    symbol: &str,
) -> PaymentToken {
    let response = port.get_payment_tokens(&PaymentTokenQuery::by_symbol(symbol)).await.unwrap();
    response.tokens[0].clone()
}

async fn mythereum_fees(port: &OpenSeaPort<MockMarketplaceApi, MockChain>) -> AssetContract {
    let token_id = MYTHEREUM_TOKEN_ID.to_string();
    let asset = port.get_asset(MYTHEREUM_ADDRESS, Some(&token_id)).await.unwrap();
    assert_eq!(asset.token_id, token_id);
    asset.asset_contract
}

fn base_units(amount: Decimal, decimals: u8) -> U256 {
    let mantissa = U256::from(amount.mantissa() as u128);
    mantissa * U256::from(10).pow(U256::from(decimals as u32 - amount.scale()))
}

#[tokio::test]
async fn heterogeneous_bundle_buy_order() {
    init_tracing();
    let port = seeded_port();
    let weth = payment_token(&port, "WETH").await;
    let assets = assets_for_bundle_order();
    let quantities = vec![Decimal::ONE; assets.len()];

    let params = BundleBuyParams::new(*ALEX, assets, quantities, dec!(0.01), weth.address);
    let order = port.make_bundle_buy_order(params).await.unwrap();

    assert_eq!(order.side, Side::Buy);
    assert_eq!(order.payment_token, weth.address);
    assert_eq!(order.base_price, U256::from(10_000_000_000_000_000u64));
    assert_eq!(order.base_price, base_units(dec!(0.01), weth.decimals));
    assert_eq!(order.extra, U256::ZERO);
    assert_eq!(order.expiration_time, 0);
    assert_fees_maker_order(&order, None, None);

    port.buy_order_validation_and_approvals(&order, *ALEX).await.unwrap();
    assert_matching_new_order(&port, &order, *ALEX).await;
}

#[tokio::test]
async fn homogeneous_bundle_buy_order() {
    init_tracing();
    let port = seeded_port();
    let mana = payment_token(&port, "MANA").await;
    let assets = homogeneous_assets_for_bundle_order();
    let quantities = vec![Decimal::ONE; assets.len()];

    let params = BundleBuyParams::new(*ALEX, assets, quantities, dec!(10), mana.address);
    let order = port.make_bundle_buy_order(params).await.unwrap();

    assert_eq!(order.payment_token, mana.address);
    assert_eq!(order.base_price, base_units(dec!(10), mana.decimals));
    assert_eq!(order.extra, U256::ZERO);
    assert_eq!(order.expiration_time, 0);
    let contract = mythereum_fees(&port).await;
    assert_fees_maker_order(&order, Some(&contract), None);

    port.buy_order_validation_and_approvals(&order, *ALEX).await.unwrap();
    assert_matching_new_order(&port, &order, *ALEX).await;
}

#[tokio::test]
async fn fixed_heterogeneous_bountied_bundle_sell_order() {
    init_tracing();
    let port = seeded_port();
    let assets = assets_for_bundle_order();
    let quantities = vec![Decimal::ONE; assets.len()];

    let params = BundleSellParams::new(*ALEX, "Test Bundle", assets, quantities, dec!(1))
        .with_description("This is a test with different types of assets")
        .with_extra_bounty_basis_points(150);
    let order = port.make_bundle_sell_order(params).await.unwrap();

    assert_eq!(order.payment_token, NULL_ADDRESS);
    assert_eq!(order.base_price, base_units(dec!(1), 18));
    assert_eq!(order.extra, U256::ZERO);
    assert_eq!(order.expiration_time, 0);
    assert_eq!(order.sale_kind, SaleKind::FixedPrice);
    assert_fees_maker_order(&order, None, Some(150));

    let bundle = match &order.metadata.assets {
        opensea_types::OrderAssets::Bundle { bundle } => bundle,
        other => panic!("expected a bundle, got {other:?}"),
    };
    assert_eq!(bundle.name.as_deref(), Some("Test Bundle"));
    assert_eq!(
        bundle.description.as_deref(),
        Some("This is a test with different types of assets")
    );

    port.sell_order_validation_and_approvals(&order, *ALEX).await.unwrap();
    assert_matching_new_order(&port, &order, *ALEX).await;
}

#[tokio::test]
async fn homogeneous_bountied_bundle_sell_order() {
    init_tracing();
    let port = seeded_port();
    let assets = homogeneous_assets_for_bundle_order();
    let quantities = vec![Decimal::ONE; assets.len()];

    let params = BundleSellParams::new(*ALEX, "Test Homogenous Bundle", assets, quantities, dec!(1))
        .with_extra_bounty_basis_points(80);
    let order = port.make_bundle_sell_order(params).await.unwrap();

    assert_eq!(order.payment_token, NULL_ADDRESS);
    assert_eq!(order.base_price, base_units(dec!(1), 18));
    let contract = mythereum_fees(&port).await;
    assert_fees_maker_order(&order, Some(&contract), Some(80));

    port.sell_order_validation_and_approvals(&order, *ALEX).await.unwrap();
    assert_matching_new_order(&port, &order, *ALEX).await;
}

#[tokio::test]
async fn bundle_sell_order_for_erc20_payment() {
    init_tracing();
    let port = seeded_port();
    let mana = payment_token(&port, "MANA").await;
    let assets = assets_for_bundle_order();
    let quantities = vec![Decimal::ONE; assets.len()];

    let params = BundleSellParams::new(*ALEX, "Test Bundle", assets, quantities, dec!(2.422))
        .with_payment_token(mana.address);
    let order = port.make_bundle_sell_order(params).await.unwrap();

    assert_eq!(order.payment_token, mana.address);
    assert_eq!(order.base_price, base_units(dec!(2.422), mana.decimals));
    assert_eq!(order.base_price, U256::from(2_422_000_000_000_000_000u128));
    assert_eq!(order.extra, U256::ZERO);
    assert_fees_maker_order(&order, None, None);

    port.sell_order_validation_and_approvals(&order, *ALEX).await.unwrap();
    assert_matching_new_order(&port, &order, *ALEX).await;
}

#[tokio::test]
async fn dutch_bundle_sell_order() {
    init_tracing();
    let port = seeded_port();
    let expiration_time = unix_now() + 60 * 60 * 24;
    let assets = assets_for_bundle_order();
    let quantities = vec![Decimal::ONE; assets.len()];

    let params = BundleSellParams::new(*ALEX, "Test Bundle", assets, quantities, dec!(1))
        .with_end_amount(Decimal::ZERO)
        .with_expiration_time(expiration_time);
    let order = port.make_bundle_sell_order(params).await.unwrap();

    assert_eq!(order.payment_token, NULL_ADDRESS);
    assert_eq!(order.sale_kind, SaleKind::DutchAuction);
    assert_eq!(order.base_price, base_units(dec!(1), 18));
    assert_eq!(order.extra, order.base_price);
    assert_eq!(order.expiration_time, expiration_time);
    assert_fees_maker_order(&order, None, None);

    port.sell_order_validation_and_approvals(&order, *ALEX).await.unwrap();
    let price = assert_matching_new_order(&port, &order, *ALEX).await;
    assert!(price <= order.base_price);
}

#[tokio::test]
async fn mixed_schema_bundle_sell_order() {
    init_tracing();
    let port = seeded_port();

    // Supplied out of the order the bundle sorts them into.
    let mut assets = fungible_assets_for_bundle_order();
    assets.extend(semi_fungible_assets_for_bundle_order());
    assets.extend(assets_for_bundle_order());
    assets.rotate_right(2);
    let quantities = vec![dec!(1), dec!(1), dec!(12), dec!(2), dec!(1)];
    assert_eq!(assets[2].token_address, BENZENE_ADDRESS);

    let params =
        BundleSellParams::new(*ALEX, "Test Mixed Bundle", assets.clone(), quantities, dec!(1));
    let order = port.make_bundle_sell_order(params).await.unwrap();
    assert_fees_maker_order(&order, None, None);

    let bundled = order.metadata.assets.assets_and_schemas();
    assert_eq!(bundled.len(), assets.len());
    let benzene = bundled.iter().find(|(a, _)| a.address == BENZENE_ADDRESS).unwrap();
    assert_eq!(benzene.0.quantity, Some(U256::from(12)));

    port.sell_order_validation_and_approvals(&order, *ALEX).await.unwrap();
    let chain = port.chain();
    assert_eq!(chain.proxy_registrations(), 1);
    assert_eq!(chain.approvals_for(ENJIN_ADDRESS), 1);
    assert!(chain.transactions().contains(&MockTx::Approve {
        token: BENZENE_ADDRESS,
        owner: *ALEX,
        spender: proxy_address(*ALEX),
        amount: opensea_constants::MAX_UINT_256,
    }));

    assert_matching_new_order(&port, &order, *ALEX).await;
}
