use crate::MarketplaceApi;
use alloy::primitives::Address;
use opensea_api::{
    types::{PaymentTokenQuery, PaymentTokensResponse},
    ApiError, OpenSeaApi,
};
use opensea_types::{OpenSeaAsset, SignedOrder};

impl MarketplaceApi for OpenSeaApi {
    type Error = ApiError;

    async fn get_payment_tokens(
        &self,
        query: &PaymentTokenQuery,
    ) -> Result<PaymentTokensResponse, Self::Error> {
        OpenSeaApi::get_payment_tokens(self, query).await
    }

    async fn get_asset(
        &self,
        token_address: Address,
        token_id: Option<&str>,
    ) -> Result<OpenSeaAsset, Self::Error> {
        OpenSeaApi::get_asset(self, token_address, token_id).await
    }

    async fn post_order(&self, order: &SignedOrder) -> Result<SignedOrder, Self::Error> {
        OpenSeaApi::post_order(self, order).await?.try_into()
    }
}
