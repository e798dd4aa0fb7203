use alloy::primitives::U256;
use opensea_constants::NULL_ADDRESS;
use opensea_orders::{BundleSellParams, OpenSeaPortError, SellParams};
use opensea_test_utils::{
    assertions::{assert_fees_maker_order, assert_matching_new_order},
    fixtures::{
        assets_for_bundle_order, homogeneous_assets_for_bundle_order, mythereum_contract,
        MYTHEREUM_ADDRESS, MYTHEREUM_TOKEN_ID,
    },
    init_tracing,
    mocks::seeded_port,
    test_constants::WETH,
    users::{ALEX, ALEX_2},
};
use opensea_types::{unix_now, Asset, FeeError, Side, TimeError};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn bundle_listing(assets: Vec<Asset>) -> BundleSellParams {
    let quantities = vec![Decimal::ONE; assets.len()];
    BundleSellParams::new(*ALEX, "Test Bundle", assets, quantities, dec!(1))
}

#[tokio::test]
async fn bounty_above_default_maximum_is_rejected() {
    init_tracing();
    let port = seeded_port();
    let params = bundle_listing(assets_for_bundle_order()).with_extra_bounty_basis_points(200);

    let err = port.make_bundle_sell_order(params).await.unwrap_err();
    assert!(matches!(
        err,
        OpenSeaPortError::Fees(FeeError::BountyTooLarge { max: 250, bounty: 200 })
    ));
    assert!(err.to_string().contains("OpenSea will add 1%"));
}

#[tokio::test]
async fn bounty_above_contract_maximum_is_rejected() {
    init_tracing();
    let port = seeded_port();
    let params =
        bundle_listing(homogeneous_assets_for_bundle_order()).with_extra_bounty_basis_points(151);

    let err = port.make_bundle_sell_order(params).await.unwrap_err();
    assert!(matches!(err, OpenSeaPortError::Fees(FeeError::BountyTooLarge { max: 250, .. })));
}

#[tokio::test]
async fn single_asset_sell_uses_contract_fees() {
    init_tracing();
    let port = seeded_port();
    let asset = Asset::non_fungible(MYTHEREUM_ADDRESS, MYTHEREUM_TOKEN_ID);
    let params = SellParams::new(*ALEX, asset, dec!(0.5)).with_extra_bounty_basis_points(50);

    let order = port.make_sell_order(params).await.unwrap();
    assert_eq!(order.maker_relayer_fee, U256::from(350));
    assert_fees_maker_order(&order, Some(&mythereum_contract()), Some(50));

    port.sell_order_validation_and_approvals(&order, *ALEX).await.unwrap();
    assert_matching_new_order(&port, &order, *ALEX).await;
}

#[tokio::test]
async fn private_sell_is_free() {
    init_tracing();
    let port = seeded_port();
    let params = bundle_listing(assets_for_bundle_order()).with_buyer(*ALEX_2);

    let order = port.make_bundle_sell_order(params).await.unwrap();
    assert_eq!(order.taker, *ALEX_2);
    assert_eq!(order.maker_relayer_fee, U256::ZERO);
    assert_eq!(order.taker_relayer_fee, U256::ZERO);
    assert_fees_maker_order(&order, None, None);

    port.sell_order_validation_and_approvals(&order, *ALEX).await.unwrap();
    assert_matching_new_order(&port, &order, *ALEX_2).await;
}

#[tokio::test]
async fn private_sell_still_checks_the_bounty() {
    init_tracing();
    let port = seeded_port();
    let params = bundle_listing(assets_for_bundle_order())
        .with_buyer(*ALEX_2)
        .with_extra_bounty_basis_points(300);

    let err = port.make_bundle_sell_order(params).await.unwrap_err();
    assert!(matches!(err, OpenSeaPortError::Fees(FeeError::BountyTooLarge { .. })));
}

#[tokio::test]
async fn english_auction_swaps_fees_and_leaves_the_recipient() {
    init_tracing();
    let port = seeded_port();
    let expiration_time = unix_now() + 60 * 60 * 24;
    let params = bundle_listing(homogeneous_assets_for_bundle_order())
        .with_payment_token(WETH)
        .with_wait_for_highest_bid(true)
        .with_expiration_time(expiration_time);

    let order = port.make_bundle_sell_order(params).await.unwrap();
    assert_eq!(order.side, Side::Sell);
    assert!(order.waiting_for_best_counter_order);
    assert_eq!(order.fee_recipient, NULL_ADDRESS);
    assert_eq!(order.listing_time, expiration_time);
    assert!(order.expiration_time > expiration_time);
    assert_fees_maker_order(&order, Some(&mythereum_contract()), None);
}

#[tokio::test]
async fn english_auction_in_ether_is_rejected() {
    init_tracing();
    let port = seeded_port();
    let params = bundle_listing(assets_for_bundle_order())
        .with_wait_for_highest_bid(true)
        .with_expiration_time(unix_now() + 60 * 60 * 24);

    let err = port.make_bundle_sell_order(params).await.unwrap_err();
    assert!(matches!(err, OpenSeaPortError::Price(_)));
}

#[tokio::test]
async fn english_auction_ending_at_the_end_of_time_is_rejected() {
    init_tracing();
    let port = seeded_port();
    let params = bundle_listing(homogeneous_assets_for_bundle_order())
        .with_payment_token(WETH)
        .with_wait_for_highest_bid(true)
        .with_expiration_time(u64::MAX);

    let err = port.make_bundle_sell_order(params).await.unwrap_err();
    assert!(matches!(err, OpenSeaPortError::Time(TimeError::ExpirationOverflow(u64::MAX))));
}
