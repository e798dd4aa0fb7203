use crate::{FeeMethod, SaleKind, Side, UnhashedOrder};
use alloy::primitives::{Address, U256};
use opensea_constants::NULL_ADDRESS;

/// Reasons a buy and a sell order can't be matched, in the order the
/// exchange checks them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MatchError {
    /// The first order must be a buy and the second a sell.
    #[error("orders must be a buy and a sell, got {buy:?} and {sell:?}")]
    SideMismatch {
        /// Side of the order passed as the buy.
        buy: Side,
        /// Side of the order passed as the sell.
        sell: Side,
    },
    /// Both orders must charge fees the same way.
    #[error("fee methods differ: buy {buy:?}, sell {sell:?}")]
    FeeMethodMismatch {
        /// Fee method of the buy.
        buy: FeeMethod,
        /// Fee method of the sell.
        sell: FeeMethod,
    },
    /// Both orders must use the same payment token.
    #[error("payment tokens differ: buy {buy}, sell {sell}")]
    PaymentTokenMismatch {
        /// Payment token of the buy.
        buy: Address,
        /// Payment token of the sell.
        sell: Address,
    },
    /// The sell is reserved for someone other than the buyer.
    #[error("sell order is reserved for {taker}, not {buyer}")]
    SellTakerMismatch {
        /// Taker of the sell.
        taker: Address,
        /// Maker of the buy.
        buyer: Address,
    },
    /// The buy is reserved for someone other than the seller.
    #[error("buy order is reserved for {taker}, not {seller}")]
    BuyTakerMismatch {
        /// Taker of the buy.
        taker: Address,
        /// Maker of the sell.
        seller: Address,
    },
    /// Exactly one of the orders must name a fee recipient.
    #[error("exactly one order must have a fee recipient: buy {buy}, sell {sell}")]
    FeeRecipientConflict {
        /// Fee recipient of the buy.
        buy: Address,
        /// Fee recipient of the sell.
        sell: Address,
    },
    /// Both orders must call the same contract.
    #[error("targets differ: buy {buy}, sell {sell}")]
    TargetMismatch {
        /// Target of the buy.
        buy: Address,
        /// Target of the sell.
        sell: Address,
    },
    /// Both orders must call their target the same way.
    #[error("how-to-call differs between buy and sell")]
    HowToCallMismatch,
    /// The buy is outside its listing window.
    #[error("buy order can't be settled at {now}")]
    BuyNotSettleable {
        /// Time of the check.
        now: u64,
    },
    /// The sell is outside its listing window.
    #[error("sell order can't be settled at {now}")]
    SellNotSettleable {
        /// Time of the check.
        now: u64,
    },
    /// Calldata and replacement patterns must all have the same length.
    #[error("calldata lengths differ: buy {buy}, sell {sell}")]
    CalldataLengthMismatch {
        /// Calldata length of the buy.
        buy: usize,
        /// Calldata length of the sell.
        sell: usize,
    },
    /// The calldata differs after each side fills in the other's fields.
    #[error("calldata doesn't match after replacement")]
    CalldataMismatch,
    /// The buyer offers less than the seller asks.
    #[error("buy price {buy_price} is below sell price {sell_price}")]
    PriceTooLow {
        /// Current price of the buy.
        buy_price: U256,
        /// Current price of the sell.
        sell_price: U256,
    },
}

/// Reasons the exchange would reject an order's parameters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OrderParameterError {
    /// The order names another exchange.
    #[error("order is for exchange {actual}, expected {expected}")]
    WrongExchange {
        /// Exchange of the network.
        expected: Address,
        /// Exchange named by the order.
        actual: Address,
    },
    /// Auctions need an end.
    #[error("{0:?} orders must have an expiration time")]
    MissingExpiration(SaleKind),
    /// Split-fee orders must pay at least the exchange's protocol fees.
    #[error("protocol fees below the exchange minimum of maker {maker}, taker {taker}")]
    ProtocolFeeTooLow {
        /// Minimum maker protocol fee.
        maker: U256,
        /// Minimum taker protocol fee.
        taker: U256,
    },
}

/// Overwrite the bytes of `array` selected by `mask` with those of
/// `desired`.
///
/// Only the common prefix of the three slices is touched.
pub fn guarded_array_replace(array: &mut [u8], desired: &[u8], mask: &[u8]) {
    for ((byte, want), m) in array.iter_mut().zip(desired).zip(mask) {
        *byte = (*byte & !m) | (want & m);
    }
}

/// Check the exchange's parameter rules for a single order.
pub fn validate_order_parameters(
    order: &UnhashedOrder,
    exchange: Address,
    min_maker_protocol_fee: U256,
    min_taker_protocol_fee: U256,
) -> Result<(), OrderParameterError> {
    if order.exchange != exchange {
        return Err(OrderParameterError::WrongExchange { expected: exchange, actual: order.exchange });
    }
    if order.sale_kind != SaleKind::FixedPrice && order.expiration_time == 0 {
        return Err(OrderParameterError::MissingExpiration(order.sale_kind));
    }
    if order.fee_method == FeeMethod::SplitFee
        && (order.maker_protocol_fee < min_maker_protocol_fee
            || order.taker_protocol_fee < min_taker_protocol_fee)
    {
        return Err(OrderParameterError::ProtocolFeeTooLow {
            maker: min_maker_protocol_fee,
            taker: min_taker_protocol_fee,
        });
    }
    Ok(())
}

/// Check that the calldata of both orders agrees once the buy fills in the
/// sell's replaceable bytes and the sell fills in the buy's.
pub fn order_calldata_can_match(buy: &UnhashedOrder, sell: &UnhashedOrder) -> Result<(), MatchError> {
    let lengths_agree = buy.calldata.len() == sell.calldata.len()
        && (buy.replacement_pattern.is_empty()
            || buy.replacement_pattern.len() == buy.calldata.len())
        && (sell.replacement_pattern.is_empty()
            || sell.replacement_pattern.len() == sell.calldata.len());
    if !lengths_agree {
        return Err(MatchError::CalldataLengthMismatch {
            buy: buy.calldata.len(),
            sell: sell.calldata.len(),
        });
    }

    let mut buy_calldata = buy.calldata.to_vec();
    if !buy.replacement_pattern.is_empty() {
        guarded_array_replace(&mut buy_calldata, &sell.calldata, &buy.replacement_pattern);
    }
    let mut sell_calldata = sell.calldata.to_vec();
    if !sell.replacement_pattern.is_empty() {
        guarded_array_replace(&mut sell_calldata, &buy_calldata, &sell.replacement_pattern);
    }

    if buy_calldata != sell_calldata {
        return Err(MatchError::CalldataMismatch);
    }
    Ok(())
}

/// Check every condition the exchange requires of a buy and a sell before
/// matching them at time `now`. The first failing condition is returned.
pub fn orders_can_match(
    buy: &UnhashedOrder,
    sell: &UnhashedOrder,
    now: u64,
) -> Result<(), MatchError> {
    if buy.side != Side::Buy || sell.side != Side::Sell {
        return Err(MatchError::SideMismatch { buy: buy.side, sell: sell.side });
    }
    if buy.fee_method != sell.fee_method {
        return Err(MatchError::FeeMethodMismatch { buy: buy.fee_method, sell: sell.fee_method });
    }
    if buy.payment_token != sell.payment_token {
        return Err(MatchError::PaymentTokenMismatch {
            buy: buy.payment_token,
            sell: sell.payment_token,
        });
    }
    if sell.taker != NULL_ADDRESS && sell.taker != buy.maker {
        return Err(MatchError::SellTakerMismatch { taker: sell.taker, buyer: buy.maker });
    }
    if buy.taker != NULL_ADDRESS && buy.taker != sell.maker {
        return Err(MatchError::BuyTakerMismatch { taker: buy.taker, seller: sell.maker });
    }
    if (buy.fee_recipient == NULL_ADDRESS) == (sell.fee_recipient == NULL_ADDRESS) {
        return Err(MatchError::FeeRecipientConflict {
            buy: buy.fee_recipient,
            sell: sell.fee_recipient,
        });
    }
    if buy.target != sell.target {
        return Err(MatchError::TargetMismatch { buy: buy.target, sell: sell.target });
    }
    if buy.how_to_call != sell.how_to_call {
        return Err(MatchError::HowToCallMismatch);
    }
    if !buy.can_settle(now) {
        return Err(MatchError::BuyNotSettleable { now });
    }
    if !sell.can_settle(now) {
        return Err(MatchError::SellNotSettleable { now });
    }
    order_calldata_can_match(buy, sell)
}

/// The price a match settles at.
///
/// The buyer must offer at least the seller's current price. The order that
/// carries the fee recipient was made first, so its price wins.
pub fn calculate_match_price(
    buy: &UnhashedOrder,
    sell: &UnhashedOrder,
    now: u64,
) -> Result<U256, MatchError> {
    let sell_price = sell.current_price(now);
    let buy_price = buy.current_price(now);
    if buy_price < sell_price {
        return Err(MatchError::PriceTooLow { buy_price, sell_price });
    }
    Ok(if sell.fee_recipient != NULL_ADDRESS { sell_price } else { buy_price })
}
