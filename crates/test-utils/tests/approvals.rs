use opensea_constants::{test_utils::TOKEN_TRANSFER_PROXY, MAX_UINT_256};
use opensea_orders::{BundleBuyParams, BundleSellParams, OpenSeaPortError};
use opensea_test_utils::{
    fixtures::{
        assets_for_bundle_order, semi_fungible_assets_for_bundle_order, DIGITAL_ART_CHAIN_ADDRESS,
        ENJIN_ADDRESS, MANA_ADDRESS, MYTHEREUM_ADDRESS,
    },
    init_tracing,
    mocks::{proxy_address, seeded_port, MockTx},
    test_constants::WETH,
    users::{ALEX, ALEX_2},
};
use opensea_types::get_wyvern_bundle;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

#[tokio::test]
async fn proxy_is_registered_once() {
    init_tracing();
    let port = seeded_port();

    let proxy = port.get_or_create_proxy(*ALEX).await.unwrap();
    assert_eq!(proxy, proxy_address(*ALEX));
    assert_eq!(port.get_or_create_proxy(*ALEX).await.unwrap(), proxy);
    assert_eq!(port.chain().proxy_registrations(), 1);
}

#[tokio::test]
async fn approvals_are_sent_once() {
    init_tracing();
    let port = seeded_port();
    let assets = assets_for_bundle_order();
    let quantities = vec![Decimal::ONE; assets.len()];
    let params = BundleSellParams::new(*ALEX, "Test Bundle", assets, quantities, dec!(1));
    let order = port.make_bundle_sell_order(params).await.unwrap();

    let first = port.sell_order_validation_and_approvals(&order, *ALEX).await.unwrap();
    assert_eq!(first.len(), 2);
    let second = port.sell_order_validation_and_approvals(&order, *ALEX).await.unwrap();
    assert!(second.is_empty());

    let chain = port.chain();
    assert_eq!(chain.approvals_for(MYTHEREUM_ADDRESS), 1);
    assert_eq!(chain.approvals_for(DIGITAL_ART_CHAIN_ADDRESS), 1);
    assert_eq!(chain.proxy_registrations(), 1);
}

#[tokio::test]
async fn one_contract_is_approved_once_per_bundle() {
    init_tracing();
    let port = seeded_port();
    let bundle =
        get_wyvern_bundle(&semi_fungible_assets_for_bundle_order(), &[dec!(1), dec!(1)]).unwrap();
    let bundle = bundle.iter().map(|(asset, schema)| (*asset, schema)).collect::<Vec<_>>();

    let sent = port.approve_all(&bundle, *ALEX, None).await.unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(port.chain().approvals_for(ENJIN_ADDRESS), 1);
}

#[tokio::test]
async fn selling_what_you_do_not_own_fails() {
    init_tracing();
    let port = seeded_port();
    let assets = assets_for_bundle_order();
    let quantities = vec![Decimal::ONE; assets.len()];
    let params = BundleSellParams::new(*ALEX_2, "Test Bundle", assets, quantities, dec!(1));
    let order = port.make_bundle_sell_order(params).await.unwrap();

    let err = port.sell_order_validation_and_approvals(&order, *ALEX_2).await.unwrap_err();
    assert!(matches!(err, OpenSeaPortError::NotOwner { account, .. } if account == *ALEX_2));
    assert!(port.chain().transactions().is_empty());
}

#[tokio::test]
async fn offer_above_weth_balance_suggests_wrapping() {
    init_tracing();
    let port = seeded_port();
    let assets = assets_for_bundle_order();
    let quantities = vec![Decimal::ONE; assets.len()];
    let params = BundleBuyParams::new(*ALEX, assets, quantities, dec!(11), WETH);
    let order = port.make_bundle_buy_order(params).await.unwrap();

    let err = port.buy_order_validation_and_approvals(&order, *ALEX).await.unwrap_err();
    assert!(matches!(err, OpenSeaPortError::InsufficientBalance { wrapped_ether: true, .. }));
    assert!(err.to_string().contains("You may need to wrap Ether."));
}

#[tokio::test]
async fn offer_above_token_balance_fails_without_hint() {
    init_tracing();
    let port = seeded_port();
    let assets = assets_for_bundle_order();
    let quantities = vec![Decimal::ONE; assets.len()];
    let params = BundleBuyParams::new(*ALEX_2, assets, quantities, dec!(1), MANA_ADDRESS);
    let order = port.make_bundle_buy_order(params).await.unwrap();

    let err = port.buy_order_validation_and_approvals(&order, *ALEX_2).await.unwrap_err();
    assert!(matches!(
        err,
        OpenSeaPortError::InsufficientBalance { wrapped_ether: false, balance, .. } if balance.is_zero()
    ));
    assert!(!err.to_string().contains("wrap"));
}

#[tokio::test]
async fn offer_approves_the_token_transfer_proxy() {
    init_tracing();
    let port = seeded_port();
    let assets = assets_for_bundle_order();
    let quantities = vec![Decimal::ONE; assets.len()];
    let params = BundleBuyParams::new(*ALEX, assets, quantities, dec!(0.01), WETH);
    let order = port.make_bundle_buy_order(params).await.unwrap();

    let sent = port.buy_order_validation_and_approvals(&order, *ALEX).await.unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(
        port.chain().transactions(),
        vec![MockTx::Approve {
            token: WETH,
            owner: *ALEX,
            spender: TOKEN_TRANSFER_PROXY,
            amount: MAX_UINT_256,
        }]
    );

    let again = port.buy_order_validation_and_approvals(&order, *ALEX).await.unwrap();
    assert!(again.is_empty());
}
