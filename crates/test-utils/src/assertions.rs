//! Checks shared by the order scenario tests.
use crate::{test_constants::FEE_RECIPIENT, users::ALEX_2};
use alloy::primitives::{Address, U256};
use opensea_constants::{
    DEFAULT_BUYER_FEE_BASIS_POINTS, DEFAULT_SELLER_FEE_BASIS_POINTS, NULL_ADDRESS,
};
use opensea_orders::{ChainAccess, OpenSeaPort};
use opensea_types::{AssetContract, FeeMethod, Side, UnhashedOrder};

/// Assert the fee fields of an order made through the port.
///
/// `contract` is the contract whose fees apply, or `None` for the defaults.
/// `extra_bounty_basis_points` is the bounty requested for a sell order.
pub fn assert_fees_maker_order(
    order: &UnhashedOrder,
    contract: Option<&AssetContract>,
    extra_bounty_basis_points: Option<u64>,
) {
    assert_eq!(order.maker_protocol_fee, U256::ZERO, "maker protocol fee");
    assert_eq!(order.taker_protocol_fee, U256::ZERO, "taker protocol fee");
    assert_eq!(order.fee_method, FeeMethod::SplitFee);

    if order.waiting_for_best_counter_order {
        assert_eq!(order.fee_recipient, NULL_ADDRESS, "English auctions leave the recipient");
    } else {
        assert_eq!(order.fee_recipient, FEE_RECIPIENT);
    }

    if order.side == Side::Sell && order.taker != NULL_ADDRESS {
        assert_eq!(order.maker_relayer_fee, U256::ZERO, "private sells are free");
        assert_eq!(order.taker_relayer_fee, U256::ZERO, "private sells are free");
        assert_eq!(order.maker_referrer_fee, U256::ZERO);
        return;
    }

    let (buyer, seller) = contract.map_or(
        (DEFAULT_BUYER_FEE_BASIS_POINTS, DEFAULT_SELLER_FEE_BASIS_POINTS),
        |c| {
            (
                c.opensea_buyer_fee_basis_points + c.dev_buyer_fee_basis_points,
                c.opensea_seller_fee_basis_points + c.dev_seller_fee_basis_points,
            )
        },
    );
    let (buyer, seller) = (U256::from(buyer), U256::from(seller));

    match order.side {
        Side::Sell if order.waiting_for_best_counter_order => {
            assert_eq!(order.maker_relayer_fee, buyer);
            assert_eq!(order.taker_relayer_fee, seller);
            assert_eq!(order.maker_referrer_fee, U256::ZERO);
        }
        Side::Sell => {
            assert_eq!(order.maker_relayer_fee, seller);
            assert_eq!(order.taker_relayer_fee, buyer);
            assert_eq!(
                order.maker_referrer_fee,
                U256::from(extra_bounty_basis_points.unwrap_or_default())
            );
        }
        Side::Buy => {
            assert_eq!(order.maker_relayer_fee, buyer);
            assert_eq!(order.taker_relayer_fee, seller);
            assert_eq!(order.maker_referrer_fee, U256::ZERO);
        }
    }
}

/// Assert that `order` can be filled by a counter-order of `account`, and
/// that the seller still holds every asset. Returns the settlement price.
///
/// Sell orders are filled for [`ALEX_2`].
pub async fn assert_matching_new_order<Api, Chain>(
    port: &OpenSeaPort<Api, Chain>,
    order: &UnhashedOrder,
    account: Address,
) -> U256
where
    Chain: ChainAccess + Send + Sync,
{
    let recipient = if order.side == Side::Sell { *ALEX_2 } else { account };
    let matching = port.make_matching_order(order, account, recipient).unwrap();
    assert_eq!(matching.side, order.side.opposite());
    assert_eq!(matching.taker, order.maker);

    let (buy, sell) = match order.side {
        Side::Buy => (order, &matching),
        Side::Sell => (&matching, order),
    };
    let price = port.validate_match(buy, sell).unwrap();

    for (asset, schema) in sell.metadata.assets.assets_and_schemas() {
        let transferrable = port.is_asset_transferrable(&asset, schema, sell.maker).await.unwrap();
        assert!(transferrable, "{} is not transferrable from {}", asset.address, sell.maker);
    }
    price
}
