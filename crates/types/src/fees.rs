use crate::{AssetContract, FeeMethod, Side, UnhashedOrder};
use alloy::primitives::{Address, U256};
use opensea_constants::{
    DEFAULT_BUYER_FEE_BASIS_POINTS, DEFAULT_MAX_BOUNTY, DEFAULT_SELLER_FEE_BASIS_POINTS,
    INVERSE_BASIS_POINT, NULL_ADDRESS, OPENSEA_SELLER_BOUNTY_BASIS_POINTS,
};

/// Errors raised while computing order fees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FeeError {
    /// The requested bounty, plus OpenSea's referrer bounty, exceeds what
    /// the asset allows.
    #[error(
        "Total bounty exceeds the maximum for this asset type ({}%).{}",
        percent(.max),
        referrer_hint(.max)
    )]
    BountyTooLarge {
        /// Maximum total bounty, in basis points.
        max: u64,
        /// Requested bounty, in basis points.
        bounty: u64,
    },
    /// Fees above 100% can't be settled.
    #[error("Invalid buyer/seller fees: must be less than 100%, got buyer {buyer} and seller {seller} basis points")]
    FeesTooLarge {
        /// Total buyer fee, in basis points.
        buyer: u64,
        /// Total seller fee, in basis points.
        seller: u64,
    },
}

fn percent(basis_points: &u64) -> f64 {
    *basis_points as f64 / 100.0
}

fn referrer_hint(max: &u64) -> String {
    if *max >= OPENSEA_SELLER_BOUNTY_BASIS_POINTS {
        format!(
            " Remember that OpenSea will add {}% for referrers with OpenSea accounts!",
            percent(&OPENSEA_SELLER_BOUNTY_BASIS_POINTS)
        )
    } else {
        String::new()
    }
}

/// Fees owed on an order, in basis points.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct ComputedFees {
    /// OpenSea and developer fees paid by the buyer.
    pub total_buyer_fee_basis_points: u64,
    /// OpenSea and developer fees paid by the seller.
    pub total_seller_fee_basis_points: u64,
    /// OpenSea's part of the buyer fee.
    pub opensea_buyer_fee_basis_points: u64,
    /// OpenSea's part of the seller fee.
    pub opensea_seller_fee_basis_points: u64,
    /// The developer's part of the buyer fee.
    pub dev_buyer_fee_basis_points: u64,
    /// The developer's part of the seller fee.
    pub dev_seller_fee_basis_points: u64,
    /// Bounty the seller pays referrers.
    pub seller_bounty_basis_points: u64,
}

/// The fee fields of an order.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FeeParameters {
    /// Relayer fee paid by the maker.
    pub maker_relayer_fee: U256,
    /// Relayer fee paid by the taker.
    pub taker_relayer_fee: U256,
    /// Protocol fee paid by the maker.
    pub maker_protocol_fee: U256,
    /// Protocol fee paid by the taker.
    pub taker_protocol_fee: U256,
    /// Referrer bounty paid out of the maker relayer fee.
    pub maker_referrer_fee: U256,
    /// Recipient of the relayer fees.
    pub fee_recipient: Address,
    /// How fees are charged.
    pub fee_method: FeeMethod,
}

/// Compute the fees of an order.
///
/// Fees come from the asset contract when one is known and from the
/// defaults otherwise. Only sell orders carry a bounty, and the bounty plus
/// OpenSea's own referrer bounty must fit within OpenSea's seller fee.
/// Private orders are free.
pub fn compute_fees(
    contract: Option<&AssetContract>,
    side: Side,
    extra_bounty_basis_points: u64,
    is_private: bool,
) -> Result<ComputedFees, FeeError> {
    let (opensea_buyer, opensea_seller, dev_buyer, dev_seller, max_bounty) = match contract {
        Some(c) => (
            c.opensea_buyer_fee_basis_points,
            c.opensea_seller_fee_basis_points,
            c.dev_buyer_fee_basis_points,
            c.dev_seller_fee_basis_points,
            c.opensea_seller_fee_basis_points,
        ),
        None => (
            DEFAULT_BUYER_FEE_BASIS_POINTS,
            DEFAULT_SELLER_FEE_BASIS_POINTS,
            0,
            0,
            DEFAULT_MAX_BOUNTY,
        ),
    };

    let bounty = if side == Side::Sell { extra_bounty_basis_points } else { 0 };
    if bounty > 0
        && bounty
            .checked_add(OPENSEA_SELLER_BOUNTY_BASIS_POINTS)
            .is_none_or(|total| total > max_bounty)
    {
        return Err(FeeError::BountyTooLarge { max: max_bounty, bounty });
    }

    if is_private {
        return Ok(ComputedFees::default());
    }

    Ok(ComputedFees {
        total_buyer_fee_basis_points: opensea_buyer + dev_buyer,
        total_seller_fee_basis_points: opensea_seller + dev_seller,
        opensea_buyer_fee_basis_points: opensea_buyer,
        opensea_seller_fee_basis_points: opensea_seller,
        dev_buyer_fee_basis_points: dev_buyer,
        dev_seller_fee_basis_points: dev_seller,
        seller_bounty_basis_points: bounty,
    })
}

const fn validate_fees(fees: &ComputedFees) -> Result<(), FeeError> {
    if fees.total_buyer_fee_basis_points > INVERSE_BASIS_POINT
        || fees.total_seller_fee_basis_points > INVERSE_BASIS_POINT
    {
        return Err(FeeError::FeesTooLarge {
            buyer: fees.total_buyer_fee_basis_points,
            seller: fees.total_seller_fee_basis_points,
        });
    }
    Ok(())
}

/// Fee fields of a sell order.
///
/// English auction sells are matched as takers, so their maker and taker
/// fees are swapped and they leave the fee recipient to the winning bid.
pub fn sell_fee_parameters(
    fees: &ComputedFees,
    waiting_for_best_counter_order: bool,
    opensea_fee_recipient: Address,
) -> Result<FeeParameters, FeeError> {
    validate_fees(fees)?;

    let buyer = U256::from(fees.total_buyer_fee_basis_points);
    let seller = U256::from(fees.total_seller_fee_basis_points);
    let (maker_relayer_fee, taker_relayer_fee, maker_referrer_fee, fee_recipient) =
        if waiting_for_best_counter_order {
            (buyer, seller, U256::ZERO, NULL_ADDRESS)
        } else {
            (seller, buyer, U256::from(fees.seller_bounty_basis_points), opensea_fee_recipient)
        };

    Ok(FeeParameters {
        maker_relayer_fee,
        taker_relayer_fee,
        maker_protocol_fee: U256::ZERO,
        taker_protocol_fee: U256::ZERO,
        maker_referrer_fee,
        fee_recipient,
        fee_method: FeeMethod::SplitFee,
    })
}

/// Fee fields of a buy order.
///
/// A buy made against a known sell order copies that order's fees, so that
/// only its maker can accept the bid.
pub fn buy_fee_parameters(
    fees: &ComputedFees,
    sell_order: Option<&UnhashedOrder>,
    opensea_fee_recipient: Address,
) -> Result<FeeParameters, FeeError> {
    validate_fees(fees)?;

    let (maker_relayer_fee, taker_relayer_fee) = match sell_order {
        Some(sell) if sell.waiting_for_best_counter_order => {
            (sell.maker_relayer_fee, sell.taker_relayer_fee)
        }
        Some(sell) => (sell.taker_relayer_fee, sell.maker_relayer_fee),
        None => (
            U256::from(fees.total_buyer_fee_basis_points),
            U256::from(fees.total_seller_fee_basis_points),
        ),
    };

    Ok(FeeParameters {
        maker_relayer_fee,
        taker_relayer_fee,
        maker_protocol_fee: U256::ZERO,
        taker_protocol_fee: U256::ZERO,
        maker_referrer_fee: U256::ZERO,
        fee_recipient: opensea_fee_recipient,
        fee_method: FeeMethod::SplitFee,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{order::test::sample_order, WyvernSchemaName};

    const RECIPIENT: Address = Address::repeat_byte(0x55);

    fn contract(opensea_seller: u64, dev_seller: u64) -> AssetContract {
        AssetContract {
            address: Address::repeat_byte(0xc0),
            name: None,
            schema_name: WyvernSchemaName::Erc721,
            buyer_fee_basis_points: 0,
            seller_fee_basis_points: opensea_seller + dev_seller,
            opensea_buyer_fee_basis_points: 0,
            opensea_seller_fee_basis_points: opensea_seller,
            dev_buyer_fee_basis_points: 0,
            dev_seller_fee_basis_points: dev_seller,
        }
    }

    #[test]
    fn defaults_without_contract() {
        let fees = compute_fees(None, Side::Sell, 0, false).unwrap();
        assert_eq!(fees.total_buyer_fee_basis_points, DEFAULT_BUYER_FEE_BASIS_POINTS);
        assert_eq!(fees.total_seller_fee_basis_points, DEFAULT_SELLER_FEE_BASIS_POINTS);
        assert_eq!(fees.dev_seller_fee_basis_points, 0);
    }

    #[test]
    fn contract_fees_are_summed() {
        let fees = compute_fees(Some(&contract(250, 100)), Side::Buy, 0, false).unwrap();
        assert_eq!(fees.total_seller_fee_basis_points, 350);
        assert_eq!(fees.opensea_seller_fee_basis_points, 250);
        assert_eq!(fees.dev_seller_fee_basis_points, 100);
    }

    #[test]
    fn bounty_only_on_sells() {
        let sell = compute_fees(None, Side::Sell, 150, false).unwrap();
        assert_eq!(sell.seller_bounty_basis_points, 150);
        let buy = compute_fees(None, Side::Buy, 150, false).unwrap();
        assert_eq!(buy.seller_bounty_basis_points, 0);
    }

    #[test]
    fn bounty_limit() {
        // 150 + 100 fits exactly in the default 250
        assert!(compute_fees(None, Side::Sell, 150, false).is_ok());
        let err = compute_fees(None, Side::Sell, 151, false).unwrap_err();
        assert_eq!(err, FeeError::BountyTooLarge { max: 250, bounty: 151 });
        assert!(err.to_string().contains("(2.5%)"));
        assert!(err.to_string().contains("Remember that OpenSea will add 1%"));

        let low = compute_fees(Some(&contract(50, 0)), Side::Sell, 10, false).unwrap_err();
        assert_eq!(low.to_string(), "Total bounty exceeds the maximum for this asset type (0.5%).");
    }

    #[test]
    fn huge_bounty_is_rejected() {
        let err = compute_fees(None, Side::Sell, u64::MAX, false).unwrap_err();
        assert_eq!(err, FeeError::BountyTooLarge { max: 250, bounty: u64::MAX });
        let err = compute_fees(Some(&contract(250, 0)), Side::Sell, u64::MAX - 50, true).unwrap_err();
        assert!(matches!(err, FeeError::BountyTooLarge { .. }));
    }

    #[test]
    fn private_orders_are_free() {
        let fees = compute_fees(Some(&contract(250, 100)), Side::Sell, 50, true).unwrap();
        assert_eq!(fees, ComputedFees::default());
    }

    #[test]
    fn sell_fee_parameters_by_auction_type() {
        let fees = compute_fees(Some(&contract(250, 100)), Side::Sell, 80, false).unwrap();

        let fixed = sell_fee_parameters(&fees, false, RECIPIENT).unwrap();
        assert_eq!(fixed.maker_relayer_fee, U256::from(350));
        assert_eq!(fixed.taker_relayer_fee, U256::ZERO);
        assert_eq!(fixed.maker_referrer_fee, U256::from(80));
        assert_eq!(fixed.fee_recipient, RECIPIENT);
        assert_eq!(fixed.fee_method, FeeMethod::SplitFee);

        let english = sell_fee_parameters(&fees, true, RECIPIENT).unwrap();
        assert_eq!(english.maker_relayer_fee, U256::ZERO);
        assert_eq!(english.taker_relayer_fee, U256::from(350));
        assert_eq!(english.maker_referrer_fee, U256::ZERO);
        assert_eq!(english.fee_recipient, NULL_ADDRESS);
    }

    #[test]
    fn buy_copies_sell_order_fees() {
        let fees = compute_fees(None, Side::Buy, 0, false).unwrap();
        let mut sell = sample_order();
        sell.maker_relayer_fee = U256::from(350);
        sell.taker_relayer_fee = U256::from(5);

        let buy = buy_fee_parameters(&fees, Some(&sell), RECIPIENT).unwrap();
        assert_eq!(buy.maker_relayer_fee, U256::from(5));
        assert_eq!(buy.taker_relayer_fee, U256::from(350));

        sell.waiting_for_best_counter_order = true;
        let bid = buy_fee_parameters(&fees, Some(&sell), RECIPIENT).unwrap();
        assert_eq!(bid.maker_relayer_fee, U256::from(350));

        let fresh = buy_fee_parameters(&fees, None, RECIPIENT).unwrap();
        assert_eq!(fresh.maker_relayer_fee, U256::ZERO);
        assert_eq!(fresh.taker_relayer_fee, U256::from(DEFAULT_SELLER_FEE_BASIS_POINTS));
        assert_eq!(fresh.fee_recipient, RECIPIENT);
    }

    #[test]
    fn fees_above_100_percent() {
        let fees = ComputedFees { total_seller_fee_basis_points: 10_001, ..Default::default() };
        assert_eq!(
            sell_fee_parameters(&fees, false, RECIPIENT).unwrap_err(),
            FeeError::FeesTooLarge { buyer: 0, seller: 10_001 }
        );
    }
}
