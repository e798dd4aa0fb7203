use serde::{Deserialize, Serialize};

/// Error returned when a byte does not name a variant of a Wyvern enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} variant {value}")]
pub struct UnknownVariant {
    /// The enum being decoded.
    pub kind: &'static str,
    /// The offending value.
    pub value: u8,
}

/// Declares a Wyvern enum, stored on chain and in the order hash as a
/// `uint8`, and serialized as that number.
macro_rules! wyvern_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($(#[$vmeta:meta])* $variant:ident = $value:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(into = "u8", try_from = "u8")]
        #[repr(u8)]
        pub enum $name {
            $($(#[$vmeta])* $variant = $value),+
        }

        impl From<$name> for u8 {
            fn from(value: $name) -> Self {
                value as Self
            }
        }

        impl TryFrom<u8> for $name {
            type Error = UnknownVariant;

            fn try_from(value: u8) -> Result<Self, Self::Error> {
                match value {
                    $($value => Ok(Self::$variant),)+
                    _ => Err(UnknownVariant { kind: stringify!($name), value }),
                }
            }
        }
    };
}

wyvern_enum! {
    /// Which side of the trade the maker is on.
    Side {
        /// The maker pays and receives the asset.
        Buy = 0,
        /// The maker delivers the asset and is paid.
        Sell = 1,
    }
}

impl Side {
    /// The other side.
    pub const fn opposite(self) -> Self {
        match self {
            Self::Buy => Self::Sell,
            Self::Sell => Self::Buy,
        }
    }
}

wyvern_enum! {
    /// How the price of an order evolves.
    SaleKind {
        /// The price never changes.
        FixedPrice = 0,
        /// The price moves linearly by `extra` until expiration.
        DutchAuction = 1,
    }
}

wyvern_enum! {
    /// How the maker's proxy invokes the order target.
    HowToCall {
        /// A regular call.
        Call = 0,
        /// A delegate call.
        DelegateCall = 1,
    }
}

wyvern_enum! {
    /// How fees are charged by the exchange.
    FeeMethod {
        /// Fees are paid in the exchange token.
        ProtocolFee = 0,
        /// Fees are split off the payment.
        SplitFee = 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialize_as_numbers() {
        assert_eq!(serde_json::to_string(&Side::Sell).unwrap(), "1");
        assert_eq!(serde_json::from_str::<SaleKind>("1").unwrap(), SaleKind::DutchAuction);
        assert_eq!(serde_json::from_str::<FeeMethod>("0").unwrap(), FeeMethod::ProtocolFee);
        assert!(serde_json::from_str::<HowToCall>("2").is_err());
    }

    #[test]
    fn unknown_variant_names_the_enum() {
        let err = Side::try_from(7).unwrap_err();
        assert_eq!(err, UnknownVariant { kind: "Side", value: 7 });
        assert_eq!(err.to_string(), "unknown Side variant 7");
    }

    #[test]
    fn opposite_side() {
        assert_eq!(Side::Buy.opposite(), Side::Sell);
        assert_eq!(Side::Sell.opposite().opposite(), Side::Sell);
    }
}
