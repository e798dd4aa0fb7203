use alloy::primitives::{Address, SignatureError, B256};

/// An error that can occur when signing an order.
#[derive(Debug, thiserror::Error)]
pub enum SigningError {
    /// Only the maker may sign an order.
    #[error("order maker is {maker} but the signer is {signer}")]
    WrongSigner {
        /// Maker of the order.
        maker: Address,
        /// Address of the signer.
        signer: Address,
    },
    /// Error signing the order hash.
    #[error(transparent)]
    Signer(#[from] alloy::signers::Error),
}

/// An error that can occur when validating a signed order.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SignedOrderError {
    /// The stored hash doesn't match the order fields.
    #[error("order hash mismatch: stored {stored}, computed {computed}")]
    HashMismatch {
        /// Hash carried by the signed order.
        stored: B256,
        /// Hash of the order fields.
        computed: B256,
    },
    /// The signature was made by someone other than the maker.
    #[error("signature recovers to {recovered}, expected maker {maker}")]
    WrongSigner {
        /// Maker of the order.
        maker: Address,
        /// Address recovered from the signature.
        recovered: Address,
    },
    /// No address could be recovered from the signature.
    #[error("invalid signature: {0}")]
    Signature(String),
}

impl From<SignatureError> for SignedOrderError {
    fn from(err: SignatureError) -> Self {
        Self::Signature(err.to_string())
    }
}
