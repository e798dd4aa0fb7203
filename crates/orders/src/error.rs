use alloy::primitives::{Address, U256};
use opensea_types::{
    BundleError, EncodeError, FeeError, MatchError, OrderParameterError, PriceError, SigningError,
    TimeError,
};

/// Errors returned by [`OpenSeaPort`].
///
/// [`OpenSeaPort`]: crate::OpenSeaPort
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum OpenSeaPortError {
    /// The marketplace API failed.
    #[error("marketplace error: {0}")]
    Api(#[source] Box<dyn core::error::Error + Send + Sync>),
    /// Reading from or writing to the chain failed.
    #[error("chain error: {0}")]
    Chain(#[source] Box<dyn core::error::Error + Send + Sync>),

    /// The assets do not form a valid bundle.
    #[error(transparent)]
    Bundle(#[from] BundleError),
    /// The fees of the order are invalid.
    #[error(transparent)]
    Fees(#[from] FeeError),
    /// The price of the order is invalid.
    #[error(transparent)]
    Price(#[from] PriceError),
    /// The listing window of the order is invalid.
    #[error(transparent)]
    Time(#[from] TimeError),
    /// The transfer calldata could not be encoded.
    #[error(transparent)]
    Encode(#[from] EncodeError),
    /// The order breaks a parameter rule of the exchange.
    #[error(transparent)]
    Parameters(#[from] OrderParameterError),
    /// The orders can't be matched.
    #[error(transparent)]
    Match(#[from] MatchError),
    /// The order could not be signed.
    #[error(transparent)]
    Signing(#[from] SigningError),

    /// The registry returned no proxy after registration.
    #[error("failed to register a proxy for {0}")]
    ProxyRegistrationFailed(Address),
    /// The account doesn't hold the asset it is selling.
    #[error("{account} does not own {quantity} of token {id:?} in {token}")]
    NotOwner {
        /// The account.
        account: Address,
        /// The token contract.
        token: Address,
        /// The token id, if the token has ids.
        id: Option<U256>,
        /// The quantity that was needed.
        quantity: U256,
    },
    /// The account can't pay the price of its offer.
    #[error(
        "Insufficient balance of {token}: need {required}, have {balance}.{}",
        wrap_hint(.wrapped_ether)
    )]
    InsufficientBalance {
        /// The payment token.
        token: Address,
        /// Amount needed.
        required: U256,
        /// Current balance.
        balance: U256,
        /// True if the payment token is wrapped ether.
        wrapped_ether: bool,
    },
    /// The exchange rejected the order parameters.
    #[error("Failed to validate order parameters. Make sure you're on the right network!")]
    InvalidOnChain,
}

const fn wrap_hint(wrapped_ether: &bool) -> &'static str {
    if *wrapped_ether {
        " You may need to wrap Ether."
    } else {
        ""
    }
}

impl OpenSeaPortError {
    pub(crate) fn api<E: core::error::Error + Send + Sync + 'static>(error: E) -> Self {
        Self::Api(Box::new(error))
    }

    pub(crate) fn chain<E: core::error::Error + Send + Sync + 'static>(error: E) -> Self {
        Self::Chain(Box::new(error))
    }
}
