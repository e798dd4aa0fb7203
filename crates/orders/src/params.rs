use alloy::primitives::Address;
use opensea_constants::NULL_ADDRESS;
use opensea_types::{Asset, UnhashedOrder};
use rust_decimal::Decimal;

/// Parameters of an offer on a bundle of assets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleBuyParams {
    /// The assets to buy.
    pub assets: Vec<Asset>,
    /// Quantity of each asset, in the asset's units.
    pub quantities: Vec<Decimal>,
    /// The account making the offer.
    pub account_address: Address,
    /// The offered price, in units of the payment token.
    pub start_amount: Decimal,
    /// Unix time at which the offer expires, zero for never.
    pub expiration_time: u64,
    /// The token the offer is paid in. Offers can't be paid in ether.
    pub payment_token_address: Address,
    /// Bounty for referrers, in basis points. Ignored for offers.
    pub extra_bounty_basis_points: u64,
    /// The sell order this offer answers, if any.
    pub sell_order: Option<UnhashedOrder>,
    /// Account credited with referring the buyer.
    pub referrer_address: Option<Address>,
}

impl BundleBuyParams {
    /// Create new offer parameters.
    pub const fn new(
        account_address: Address,
        assets: Vec<Asset>,
        quantities: Vec<Decimal>,
        start_amount: Decimal,
        payment_token_address: Address,
    ) -> Self {
        Self {
            assets,
            quantities,
            account_address,
            start_amount,
            expiration_time: 0,
            payment_token_address,
            extra_bounty_basis_points: 0,
            sell_order: None,
            referrer_address: None,
        }
    }

    /// Set the expiration time.
    pub const fn with_expiration_time(mut self, expiration_time: u64) -> Self {
        self.expiration_time = expiration_time;
        self
    }

    /// Set the referrer bounty.
    pub const fn with_extra_bounty_basis_points(mut self, basis_points: u64) -> Self {
        self.extra_bounty_basis_points = basis_points;
        self
    }

    /// Answer a specific sell order.
    pub fn with_sell_order(mut self, sell_order: UnhashedOrder) -> Self {
        self.sell_order = Some(sell_order);
        self
    }

    /// Set the referrer.
    pub const fn with_referrer(mut self, referrer: Address) -> Self {
        self.referrer_address = Some(referrer);
        self
    }
}

/// Parameters of a listing for a bundle of assets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleSellParams {
    /// Display name of the bundle.
    pub bundle_name: String,
    /// Description of the bundle.
    pub bundle_description: Option<String>,
    /// External link for the bundle.
    pub bundle_external_link: Option<String>,
    /// The assets to sell.
    pub assets: Vec<Asset>,
    /// Quantity of each asset, in the asset's units.
    pub quantities: Vec<Decimal>,
    /// The account listing the bundle.
    pub account_address: Address,
    /// The asking price, in units of the payment token.
    pub start_amount: Decimal,
    /// The final price of a Dutch auction.
    pub end_amount: Option<Decimal>,
    /// Unix time at which the listing expires, zero for never. English
    /// auctions end at this time.
    pub expiration_time: u64,
    /// Run an English auction, settled against the best bid.
    pub wait_for_highest_bid: bool,
    /// The token the price is paid in, null for ether.
    pub payment_token_address: Address,
    /// Bounty for referrers, in basis points.
    pub extra_bounty_basis_points: u64,
    /// The only account allowed to buy, null for anyone.
    pub buyer_address: Address,
}

impl BundleSellParams {
    /// Create new listing parameters for a fixed price in ether.
    pub fn new(
        account_address: Address,
        bundle_name: impl Into<String>,
        assets: Vec<Asset>,
        quantities: Vec<Decimal>,
        start_amount: Decimal,
    ) -> Self {
        Self {
            bundle_name: bundle_name.into(),
            bundle_description: None,
            bundle_external_link: None,
            assets,
            quantities,
            account_address,
            start_amount,
            end_amount: None,
            expiration_time: 0,
            wait_for_highest_bid: false,
            payment_token_address: NULL_ADDRESS,
            extra_bounty_basis_points: 0,
            buyer_address: NULL_ADDRESS,
        }
    }

    /// Set the bundle description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.bundle_description = Some(description.into());
        self
    }

    /// Set the bundle external link.
    pub fn with_external_link(mut self, link: impl Into<String>) -> Self {
        self.bundle_external_link = Some(link.into());
        self
    }

    /// Decay the price to `end_amount` by the expiration time.
    pub const fn with_end_amount(mut self, end_amount: Decimal) -> Self {
        self.end_amount = Some(end_amount);
        self
    }

    /// Set the expiration time.
    pub const fn with_expiration_time(mut self, expiration_time: u64) -> Self {
        self.expiration_time = expiration_time;
        self
    }

    /// Run an English auction.
    pub const fn with_wait_for_highest_bid(mut self, wait: bool) -> Self {
        self.wait_for_highest_bid = wait;
        self
    }

    /// Set the payment token.
    pub const fn with_payment_token(mut self, token: Address) -> Self {
        self.payment_token_address = token;
        self
    }

    /// Set the referrer bounty.
    pub const fn with_extra_bounty_basis_points(mut self, basis_points: u64) -> Self {
        self.extra_bounty_basis_points = basis_points;
        self
    }

    /// Reserve the listing for one buyer.
    pub const fn with_buyer(mut self, buyer: Address) -> Self {
        self.buyer_address = buyer;
        self
    }
}

/// Parameters of an offer on a single asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuyParams {
    /// The asset to buy.
    pub asset: Asset,
    /// Quantity, in the asset's units.
    pub quantity: Decimal,
    /// The account making the offer.
    pub account_address: Address,
    /// The offered price, in units of the payment token.
    pub start_amount: Decimal,
    /// Unix time at which the offer expires, zero for never.
    pub expiration_time: u64,
    /// The token the offer is paid in.
    pub payment_token_address: Address,
    /// The sell order this offer answers, if any.
    pub sell_order: Option<UnhashedOrder>,
    /// Account credited with referring the buyer.
    pub referrer_address: Option<Address>,
}

impl BuyParams {
    /// Create new offer parameters for one unit of an asset.
    pub const fn new(
        account_address: Address,
        asset: Asset,
        start_amount: Decimal,
        payment_token_address: Address,
    ) -> Self {
        Self {
            asset,
            quantity: Decimal::ONE,
            account_address,
            start_amount,
            expiration_time: 0,
            payment_token_address,
            sell_order: None,
            referrer_address: None,
        }
    }

    /// Set the quantity.
    pub const fn with_quantity(mut self, quantity: Decimal) -> Self {
        self.quantity = quantity;
        self
    }

    /// Set the expiration time.
    pub const fn with_expiration_time(mut self, expiration_time: u64) -> Self {
        self.expiration_time = expiration_time;
        self
    }

    /// Answer a specific sell order.
    pub fn with_sell_order(mut self, sell_order: UnhashedOrder) -> Self {
        self.sell_order = Some(sell_order);
        self
    }
}

/// Parameters of a listing for a single asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SellParams {
    /// The asset to sell.
    pub asset: Asset,
    /// Quantity, in the asset's units.
    pub quantity: Decimal,
    /// The account listing the asset.
    pub account_address: Address,
    /// The asking price, in units of the payment token.
    pub start_amount: Decimal,
    /// The final price of a Dutch auction.
    pub end_amount: Option<Decimal>,
    /// Unix time at which the listing expires, zero for never.
    pub expiration_time: u64,
    /// Run an English auction, settled against the best bid.
    pub wait_for_highest_bid: bool,
    /// The token the price is paid in, null for ether.
    pub payment_token_address: Address,
    /// Bounty for referrers, in basis points.
    pub extra_bounty_basis_points: u64,
    /// The only account allowed to buy, null for anyone.
    pub buyer_address: Address,
}

impl SellParams {
    /// Create new listing parameters for one unit of an asset, priced in
    /// ether.
    pub const fn new(account_address: Address, asset: Asset, start_amount: Decimal) -> Self {
        Self {
            asset,
            quantity: Decimal::ONE,
            account_address,
            start_amount,
            end_amount: None,
            expiration_time: 0,
            wait_for_highest_bid: false,
            payment_token_address: NULL_ADDRESS,
            extra_bounty_basis_points: 0,
            buyer_address: NULL_ADDRESS,
        }
    }

    /// Set the quantity.
    pub const fn with_quantity(mut self, quantity: Decimal) -> Self {
        self.quantity = quantity;
        self
    }

    /// Decay the price to `end_amount` by the expiration time.
    pub const fn with_end_amount(mut self, end_amount: Decimal) -> Self {
        self.end_amount = Some(end_amount);
        self
    }

    /// Set the expiration time.
    pub const fn with_expiration_time(mut self, expiration_time: u64) -> Self {
        self.expiration_time = expiration_time;
        self
    }

    /// Run an English auction.
    pub const fn with_wait_for_highest_bid(mut self, wait: bool) -> Self {
        self.wait_for_highest_bid = wait;
        self
    }

    /// Set the payment token.
    pub const fn with_payment_token(mut self, token: Address) -> Self {
        self.payment_token_address = token;
        self
    }

    /// Set the referrer bounty.
    pub const fn with_extra_bounty_basis_points(mut self, basis_points: u64) -> Self {
        self.extra_bounty_basis_points = basis_points;
        self
    }

    /// Reserve the listing for one buyer.
    pub const fn with_buyer(mut self, buyer: Address) -> Self {
        self.buyer_address = buyer;
        self
    }
}
