use crate::{SaleKind, Side};
use alloy::primitives::{Address, U256};
use opensea_constants::{
    LISTING_TIME_BUFFER_SECONDS, MIN_EXPIRATION_SECONDS, NATIVE_DECIMALS, NULL_ADDRESS,
    ORDER_MATCHING_LATENCY_SECONDS,
};
use rust_decimal::Decimal;

/// Errors raised while computing the price of an order.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PriceError {
    /// Amounts must not be negative.
    #[error("Starting price must be a number >= 0, got {0}")]
    NegativeAmount(Decimal),
    /// The amount has more decimal places than the token supports.
    #[error("Invalid unit amount {amount}: too many decimal places for a token with {decimals} decimals")]
    TooPrecise {
        /// The offending amount.
        amount: Decimal,
        /// Decimals of the token.
        decimals: u8,
    },
    /// The amount does not fit in 256 bits once scaled.
    #[error("amount {0} overflows once scaled into base units")]
    Overflow(Decimal),
    /// The payment token is not known to the marketplace.
    #[error("No ERC-20 token found for '{0}'")]
    UnknownPaymentToken(Address),
    /// English auctions can't be paid in ether.
    #[error("English auctions must use wrapped ETH or an ERC-20 token.")]
    EnglishAuctionNativeCurrency,
    /// Offers can't be paid in ether.
    #[error("Offers must use wrapped ETH or an ERC-20 token.")]
    NativeCurrencyOffer,
    /// Prices may only decline over time.
    #[error("End price must be less than or equal to the start price.")]
    EndAboveStart,
    /// A declining price needs an end date.
    #[error("Expiration time must be set if order will change in price.")]
    MissingExpiration,
}

/// Errors raised while computing the listing window of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TimeError {
    /// The expiration is set but too close to now.
    #[error("Expiration time must be at least {MIN_EXPIRATION_SECONDS} seconds from now, or zero (non-expiring).")]
    ExpirationTooSoon,
    /// English auctions end at their expiration.
    #[error("English auctions must have an expiration time.")]
    EnglishAuctionMissingExpiration,
    /// The matching window of an English auction ends past the last
    /// representable timestamp.
    #[error("Expiration time {0} is too far in the future.")]
    ExpirationOverflow(u64),
}

/// The price fields of an order, in base units of the payment token.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PriceParameters {
    /// Starting price.
    pub base_price: U256,
    /// Amount by which the price declines until expiration.
    pub extra: U256,
    /// The payment token.
    pub payment_token: Address,
}

/// The listing window of an order.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TimeParameters {
    /// When the order becomes valid.
    pub listing_time: u64,
    /// When the order stops being valid, zero for never.
    pub expiration_time: u64,
}

/// Scale a human amount into base units of a token with `decimals`
/// decimals.
///
/// The conversion is exact: amounts with more decimal places than the token
/// supports are rejected rather than rounded.
pub fn to_base_units(amount: Decimal, decimals: u8) -> Result<U256, PriceError> {
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(PriceError::NegativeAmount(amount));
    }

    let normalized = amount.normalize();
    let scale = normalized.scale();
    if scale > u32::from(decimals) {
        return Err(PriceError::TooPrecise { amount, decimals });
    }

    let mantissa = U256::from(normalized.mantissa().unsigned_abs());
    let exponent = U256::from(u32::from(decimals) - scale);
    U256::from(10)
        .checked_pow(exponent)
        .and_then(|factor| mantissa.checked_mul(factor))
        .ok_or(PriceError::Overflow(amount))
}

/// The price of an order at time `now`.
///
/// Fixed-price orders always cost `base_price`. Dutch auctions move `extra`
/// linearly over the listing window: down for sells, up for buys. Times
/// outside the window are clamped to it.
pub fn calculate_final_price(
    side: Side,
    sale_kind: SaleKind,
    base_price: U256,
    extra: U256,
    listing_time: u64,
    expiration_time: u64,
    now: u64,
) -> U256 {
    if sale_kind == SaleKind::FixedPrice || expiration_time <= listing_time {
        return base_price;
    }

    let elapsed = now.clamp(listing_time, expiration_time) - listing_time;
    let duration = expiration_time - listing_time;
    let diff = extra.saturating_mul(U256::from(elapsed)) / U256::from(duration);

    match side {
        Side::Sell => base_price.saturating_sub(diff),
        Side::Buy => base_price.saturating_add(diff),
    }
}

/// Compute the price fields of a new order.
///
/// `token_decimals` are the decimals of `payment_token` as reported by the
/// marketplace, or `None` if it doesn't know the token. Ether (the null
/// address) always uses 18 decimals.
pub fn price_parameters(
    side: Side,
    payment_token: Address,
    token_decimals: Option<u8>,
    expiration_time: u64,
    start_amount: Decimal,
    end_amount: Option<Decimal>,
    waiting_for_best_counter_order: bool,
) -> Result<PriceParameters, PriceError> {
    let is_ether = payment_token == NULL_ADDRESS;
    let price_diff = end_amount.map(|end| start_amount - end).unwrap_or_default();

    if start_amount.is_sign_negative() && !start_amount.is_zero() {
        return Err(PriceError::NegativeAmount(start_amount));
    }
    if price_diff.is_sign_negative() && !price_diff.is_zero() {
        return Err(PriceError::EndAboveStart);
    }
    if !price_diff.is_zero() && expiration_time == 0 {
        return Err(PriceError::MissingExpiration);
    }
    if waiting_for_best_counter_order && is_ether {
        return Err(PriceError::EnglishAuctionNativeCurrency);
    }
    if side == Side::Buy && is_ether {
        return Err(PriceError::NativeCurrencyOffer);
    }

    let decimals = if is_ether {
        NATIVE_DECIMALS
    } else {
        token_decimals.ok_or(PriceError::UnknownPaymentToken(payment_token))?
    };

    Ok(PriceParameters {
        base_price: to_base_units(start_amount, decimals)?,
        extra: to_base_units(price_diff, decimals)?,
        payment_token,
    })
}

/// Compute the listing window of a new order.
///
/// English auctions list at their expiration and stay matchable for a
/// week afterwards. Other orders list slightly in the past so that clock
/// skew doesn't make them invalid on arrival.
pub const fn time_parameters(
    expiration_time: u64,
    waiting_for_best_counter_order: bool,
    now: u64,
) -> Result<TimeParameters, TimeError> {
    if expiration_time != 0 && expiration_time < now.saturating_add(MIN_EXPIRATION_SECONDS) {
        return Err(TimeError::ExpirationTooSoon);
    }
    if waiting_for_best_counter_order {
        if expiration_time == 0 {
            return Err(TimeError::EnglishAuctionMissingExpiration);
        }
        let Some(matchable_until) = expiration_time.checked_add(ORDER_MATCHING_LATENCY_SECONDS)
        else {
            return Err(TimeError::ExpirationOverflow(expiration_time));
        };
        return Ok(TimeParameters { listing_time: expiration_time, expiration_time: matchable_until });
    }
    Ok(TimeParameters {
        listing_time: now.saturating_sub(LISTING_TIME_BUFFER_SECONDS),
        expiration_time,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    const MANA: Address = Address::repeat_byte(0x0f);
    const NOW: u64 = 1_700_000_000;

    #[test]
    fn base_units() {
        assert_eq!(to_base_units(dec!(0.01), 18).unwrap(), U256::from(10_000_000_000_000_000u64));
        assert_eq!(to_base_units(dec!(2.422), 18).unwrap(), U256::from(2_422_000_000_000_000_000u128));
        assert_eq!(to_base_units(dec!(12), 0).unwrap(), U256::from(12));
        assert_eq!(to_base_units(dec!(1.500), 1).unwrap(), U256::from(15));
        assert_eq!(to_base_units(Decimal::ZERO, 18).unwrap(), U256::ZERO);
    }

    #[test]
    fn base_units_rejects_bad_amounts() {
        assert_eq!(to_base_units(dec!(-1), 18).unwrap_err(), PriceError::NegativeAmount(dec!(-1)));
        assert_eq!(
            to_base_units(dec!(1.5), 0).unwrap_err(),
            PriceError::TooPrecise { amount: dec!(1.5), decimals: 0 }
        );
        assert_eq!(to_base_units(Decimal::MAX, 255).unwrap_err(), PriceError::Overflow(Decimal::MAX));
    }

    #[test]
    fn fixed_price_ignores_time() {
        let price = calculate_final_price(
            Side::Sell,
            SaleKind::FixedPrice,
            U256::from(1000),
            U256::from(1000),
            NOW,
            NOW + 100,
            NOW + 50,
        );
        assert_eq!(price, U256::from(1000));
    }

    #[test]
    fn dutch_auction_declines_for_sells_and_rises_for_buys() {
        let at = |side, now| {
            calculate_final_price(
                side,
                SaleKind::DutchAuction,
                U256::from(1000),
                U256::from(400),
                NOW,
                NOW + 100,
                now,
            )
        };
        assert_eq!(at(Side::Sell, NOW), U256::from(1000));
        assert_eq!(at(Side::Sell, NOW + 50), U256::from(800));
        assert_eq!(at(Side::Sell, NOW + 100), U256::from(600));
        assert_eq!(at(Side::Sell, NOW + 1000), U256::from(600));
        assert_eq!(at(Side::Buy, NOW + 25), U256::from(1100));
        assert_eq!(at(Side::Buy, NOW - 10), U256::from(1000));
    }

    #[test]
    fn price_for_native_sell() {
        let params =
            price_parameters(Side::Sell, NULL_ADDRESS, None, 0, dec!(1), None, false).unwrap();
        assert_eq!(params.base_price, U256::from(10).pow(U256::from(18)));
        assert_eq!(params.extra, U256::ZERO);
        assert_eq!(params.payment_token, NULL_ADDRESS);
    }

    #[test]
    fn price_for_dutch_auction() {
        let params = price_parameters(
            Side::Sell,
            MANA,
            Some(18),
            NOW + 86_400,
            dec!(1),
            Some(dec!(0)),
            false,
        )
        .unwrap();
        assert_eq!(params.extra, params.base_price);
    }

    #[test]
    fn price_errors() {
        let err = |side, token, decimals, expiration, start, end, waiting| {
            price_parameters(side, token, decimals, expiration, start, end, waiting).unwrap_err()
        };
        assert_eq!(
            err(Side::Sell, MANA, Some(18), 0, dec!(-1), None, false),
            PriceError::NegativeAmount(dec!(-1))
        );
        assert_eq!(
            err(Side::Sell, MANA, None, 0, dec!(1), None, false),
            PriceError::UnknownPaymentToken(MANA)
        );
        assert_eq!(
            err(Side::Sell, NULL_ADDRESS, None, NOW + 60, dec!(1), None, true),
            PriceError::EnglishAuctionNativeCurrency
        );
        assert_eq!(
            err(Side::Buy, NULL_ADDRESS, None, 0, dec!(1), None, false),
            PriceError::NativeCurrencyOffer
        );
        assert_eq!(
            err(Side::Sell, MANA, Some(18), NOW + 60, dec!(1), Some(dec!(2)), false),
            PriceError::EndAboveStart
        );
        assert_eq!(
            err(Side::Sell, MANA, Some(18), 0, dec!(2), Some(dec!(1)), false),
            PriceError::MissingExpiration
        );
    }

    #[test]
    fn listing_window() {
        assert_eq!(
            time_parameters(0, false, NOW).unwrap(),
            TimeParameters { listing_time: NOW - 100, expiration_time: 0 }
        );
        assert_eq!(
            time_parameters(NOW + 3600, true, NOW).unwrap(),
            TimeParameters {
                listing_time: NOW + 3600,
                expiration_time: NOW + 3600 + ORDER_MATCHING_LATENCY_SECONDS,
            }
        );
        assert_eq!(time_parameters(NOW + 5, false, NOW).unwrap_err(), TimeError::ExpirationTooSoon);
        assert_eq!(
            time_parameters(0, true, NOW).unwrap_err(),
            TimeError::EnglishAuctionMissingExpiration
        );
    }

    #[test]
    fn far_future_expirations() {
        assert_eq!(
            time_parameters(u64::MAX, true, NOW).unwrap_err(),
            TimeError::ExpirationOverflow(u64::MAX)
        );
        assert_eq!(
            time_parameters(u64::MAX, false, NOW).unwrap(),
            TimeParameters { listing_time: NOW - 100, expiration_time: u64::MAX }
        );
        assert_eq!(time_parameters(u64::MAX - 1, false, u64::MAX).unwrap_err(), TimeError::ExpirationTooSoon);
    }

    proptest! {
        #[test]
        fn dutch_sell_price_stays_within_bounds(
            base in 0u64..u64::MAX,
            extra_pct in 0u64..=100,
            duration in 1u64..1_000_000,
            offset in 0u64..2_000_000,
        ) {
            let base = U256::from(base);
            let extra = base * U256::from(extra_pct) / U256::from(100);
            let price = calculate_final_price(
                Side::Sell,
                SaleKind::DutchAuction,
                base,
                extra,
                NOW,
                NOW + duration,
                NOW + offset,
            );
            prop_assert!(price <= base);
            prop_assert!(price >= base - extra);
        }

        #[test]
        fn dutch_price_is_monotonic(
            elapsed_a in 0u64..1000,
            elapsed_b in 0u64..1000,
        ) {
            let (early, late) = (elapsed_a.min(elapsed_b), elapsed_a.max(elapsed_b));
            let at = |side, t| calculate_final_price(
                side,
                SaleKind::DutchAuction,
                U256::from(1_000_000),
                U256::from(999_999),
                NOW,
                NOW + 1000,
                NOW + t,
            );
            prop_assert!(at(Side::Sell, early) >= at(Side::Sell, late));
            prop_assert!(at(Side::Buy, early) <= at(Side::Buy, late));
        }

        #[test]
        fn whole_amounts_scale_exactly(amount in 0u64..1_000_000_000, decimals in 0u8..30) {
            let scaled = to_base_units(Decimal::from(amount), decimals).unwrap();
            prop_assert_eq!(scaled, U256::from(amount) * U256::from(10).pow(U256::from(decimals)));
        }
    }
}
