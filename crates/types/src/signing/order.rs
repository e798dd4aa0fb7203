use crate::{SignedOrderError, SigningError, UnhashedOrder};
use alloy::{
    primitives::{Address, Signature, B256},
    signers::Signer,
};
use opensea_wyvern::WyvernExchange::validateOrder_Call;
use serde::{Deserialize, Serialize};

/// A Wyvern order together with its hash and the maker's signature.
///
/// This is the form in which orders are posted to the marketplace, and the
/// form the exchange needs to settle them.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct SignedOrder {
    /// The order.
    #[serde(flatten)]
    order: UnhashedOrder,
    /// The order hash.
    hash: B256,
    /// Signature of the hash as a personal message.
    signature: Signature,
}

impl SignedOrder {
    /// Creates a new signed order. The hash is computed from the order.
    pub fn new(order: UnhashedOrder, signature: Signature) -> Self {
        let hash = order.hash();
        Self { order, hash, signature }
    }

    /// Get the order.
    pub const fn order(&self) -> &UnhashedOrder {
        &self.order
    }

    /// Get the order hash.
    pub const fn hash(&self) -> B256 {
        self.hash
    }

    /// Get the signature.
    pub const fn signature(&self) -> &Signature {
        &self.signature
    }

    /// Decompose the SignedOrder into its parts.
    pub fn into_parts(self) -> (UnhashedOrder, B256, Signature) {
        (self.order, self.hash, self.signature)
    }

    /// The `v` value of the signature, as the exchange expects it.
    pub fn v(&self) -> u8 {
        27 + self.signature.v() as u8
    }

    /// Recover the address that signed the order hash.
    pub fn recover_signer(&self) -> Result<Address, SignedOrderError> {
        self.signature.recover_address_from_msg(self.hash).map_err(Into::into)
    }

    /// Check that the stored hash matches the order and that the maker
    /// signed it.
    pub fn validate(&self) -> Result<(), SignedOrderError> {
        let computed = self.order.hash();
        if computed != self.hash {
            return Err(SignedOrderError::HashMismatch { stored: self.hash, computed });
        }

        let recovered = self.recover_signer()?;
        if recovered != self.order.maker {
            return Err(SignedOrderError::WrongSigner { maker: self.order.maker, recovered });
        }
        Ok(())
    }

    /// Build the exchange call that checks the order and its signature.
    pub fn to_validate_call(&self) -> validateOrder_Call {
        let params = self.order.to_validate_parameters_call();
        validateOrder_Call {
            addrs: params.addrs,
            uints: params.uints,
            feeMethod: params.feeMethod,
            side: params.side,
            saleKind: params.saleKind,
            howToCall: params.howToCall,
            callData: params.callData,
            replacementPattern: params.replacementPattern,
            staticExtradata: params.staticExtradata,
            v: self.v(),
            r: B256::from(self.signature.r().to_be_bytes::<32>()),
            s: B256::from(self.signature.s().to_be_bytes::<32>()),
        }
    }
}

impl UnhashedOrder {
    /// Sign the order hash as a personal message, generating a
    /// [`SignedOrder`]. The signer must be the maker.
    pub async fn sign<S: Signer>(self, signer: &S) -> Result<SignedOrder, SigningError> {
        if signer.address() != self.maker {
            return Err(SigningError::WrongSigner { maker: self.maker, signer: signer.address() });
        }

        let signature = signer.sign_hash(&self.hash_to_sign()).await?;
        Ok(SignedOrder::new(self, signature))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::test::sample_order;
    use alloy::{
        primitives::U256,
        signers::{k256::ecdsa::SigningKey, local::PrivateKeySigner},
    };

    fn signer() -> PrivateKeySigner {
        PrivateKeySigner::from(SigningKey::from_slice(&[1u8; 32]).unwrap())
    }

    fn order_for(signer: &PrivateKeySigner) -> UnhashedOrder {
        UnhashedOrder { maker: signer.address(), ..sample_order() }
    }

    #[tokio::test]
    async fn sign_and_validate() {
        let signer = signer();
        let order = order_for(&signer);
        let hash = order.hash();

        let signed = order.sign(&signer).await.unwrap();
        assert_eq!(signed.hash(), hash);
        assert_eq!(signed.recover_signer().unwrap(), signer.address());
        signed.validate().unwrap();
        assert!(signed.v() == 27 || signed.v() == 28);
    }

    #[tokio::test]
    async fn only_the_maker_signs() {
        let signer = signer();
        let err = sample_order().sign(&signer).await.unwrap_err();
        assert!(matches!(err, SigningError::WrongSigner { .. }));
    }

    #[tokio::test]
    async fn tampering_is_detected() {
        let signer = signer();
        let signed = order_for(&signer).sign(&signer).await.unwrap();

        let (mut order, hash, signature) = signed.into_parts();
        order.base_price += U256::from(1);
        let tampered = SignedOrder { order, hash, signature };
        assert!(matches!(tampered.validate(), Err(SignedOrderError::HashMismatch { .. })));
    }

    #[tokio::test]
    async fn serde_roundtrip() {
        let signer = signer();
        let signed = order_for(&signer).sign(&signer).await.unwrap();
        let json = serde_json::to_value(&signed).unwrap();
        assert!(json.get("hash").is_some());
        assert!(json.get("maker").is_some());
        let back: SignedOrder = serde_json::from_value(json).unwrap();
        assert_eq!(back, signed);
    }

    #[tokio::test]
    async fn validate_call_carries_signature() {
        let signer = signer();
        let signed = order_for(&signer).sign(&signer).await.unwrap();
        let call = signed.to_validate_call();
        assert_eq!(call.v, signed.v());
        assert_eq!(call.addrs[1], signer.address());
        assert_eq!(B256::from(signed.signature().r().to_be_bytes::<32>()), call.r);
    }
}
