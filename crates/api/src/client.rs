use crate::{
    types::{
        OrderJson, OrderQuery, OrdersResponse, PaymentTokenQuery, PaymentTokensResponse,
        DEFAULT_PAGE_SIZE,
    },
    ApiError, Result,
};
use alloy::primitives::Address;
use futures_util::{stream, Stream, TryStreamExt};
use opensea_constants::NetworkConstants;
use opensea_types::{OpenSeaAsset, PaymentToken, SdkConfig, SignedOrder};
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, instrument, warn};

/// The endpoints of the marketplace API.
const TOKENS: &str = "wyvern/v1/tokens/";
const ORDERS: &str = "wyvern/v1/orders";
const POST_ORDER: &str = "wyvern/v1/orders/post/";
const ASSET: &str = "api/v1/asset";

/// Query of requests without parameters.
const NO_QUERY: &[(&str, &str)] = &[];

/// Header carrying the API key.
const API_KEY_HEADER: &str = "X-API-KEY";

/// OpenSea marketplace API client.
/// Sends GET and POST requests to the API base URL.
#[derive(Debug, Clone)]
pub struct OpenSeaApi {
    /// The base URL of the API.
    url: reqwest::Url,
    /// The API key, if any.
    api_key: Option<String>,
    /// The reqwest client used to send requests.
    client: reqwest::Client,
}

impl OpenSeaApi {
    /// Create a new client with the given URL and reqwest client.
    pub const fn new_with_client(url: reqwest::Url, client: reqwest::Client) -> Self {
        Self { url, api_key: None, client }
    }

    /// Instantiate a new client with the given URL and a new reqwest client.
    pub fn new(url: reqwest::Url) -> Self {
        Self::new_with_client(url, reqwest::Client::new())
    }

    /// Create a new client given a string URL.
    pub fn new_from_string(url: &str) -> Result<Self> {
        let url = reqwest::Url::parse(url)?;
        Ok(Self::new(url))
    }

    /// Connect to the API of a network.
    pub fn for_network(network: &NetworkConstants) -> Result<Self> {
        Self::new_from_string(network.api_base_url())
    }

    /// Connect with the API URL and key of an [`SdkConfig`].
    pub fn from_config(config: &SdkConfig) -> Self {
        let api = Self::new(config.api_url.clone());
        match &config.api_key {
            Some(key) => api.with_api_key(key),
            None => api,
        }
    }

    /// Send requests with an API key.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Get the client used to send requests
    pub const fn client(&self) -> &reqwest::Client {
        &self.client
    }

    /// Get the base URL.
    pub const fn url(&self) -> &reqwest::Url {
        &self.url
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.api_key {
            Some(key) => request.header(API_KEY_HEADER, key),
            None => request,
        }
    }

    async fn get_inner<Q, T>(&self, join: &str, query: &Q) -> Result<T>
    where
        Q: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        // Append the path to the URL.
        let url = self
            .url
            .join(join)
            .inspect_err(|e| warn!(%e, "Failed to join URL. Not querying the API."))?;

        self.authorize(self.client.get(url).query(query))
            .send()
            .await
            .inspect_err(|e| warn!(%e, "Failed to get object from the API"))?
            .error_for_status()?
            .json::<T>()
            .await
            .map_err(Into::into)
    }

    async fn post_inner<B, T>(&self, join: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        // Append the path to the URL.
        let url = self
            .url
            .join(join)
            .inspect_err(|e| warn!(%e, "Failed to join URL. Not posting."))?;

        self.authorize(self.client.post(url).json(body))
            .send()
            .await?
            .error_for_status()?
            .json::<T>()
            .await
            .inspect_err(|e| warn!(%e, "Failed to parse response from the API"))
            .map_err(Into::into)
    }

    /// Fetch the payment tokens accepted by the marketplace.
    #[instrument(skip_all)]
    pub async fn get_payment_tokens(
        &self,
        query: &PaymentTokenQuery,
    ) -> Result<PaymentTokensResponse> {
        let tokens: Vec<PaymentToken> = self.get_inner(TOKENS, query).await?;
        debug!(count = tokens.len(), "fetched payment tokens");
        Ok(tokens.into())
    }

    /// Fetch an asset. Fungible assets are fetched with token id zero.
    #[instrument(skip_all, fields(%token_address, ?token_id))]
    pub async fn get_asset(
        &self,
        token_address: Address,
        token_id: Option<&str>,
    ) -> Result<OpenSeaAsset> {
        let path = format!("{ASSET}/{token_address:#x}/{}/", token_id.unwrap_or("0"));
        self.get_inner(&path, NO_QUERY).await
    }

    /// Post a signed order to the orderbook.
    #[instrument(skip_all, fields(hash = %order.hash()))]
    pub async fn post_order(&self, order: &SignedOrder) -> Result<OrderJson> {
        self.post_inner(POST_ORDER, &OrderJson::from(order)).await
    }

    /// Fetch one page of orders.
    #[instrument(skip_all)]
    pub async fn get_orders(&self, query: &OrderQuery) -> Result<OrdersResponse> {
        self.get_inner(ORDERS, query).await
    }

    /// Fetch the first order matching a query.
    pub async fn get_order(&self, query: &OrderQuery) -> Result<SignedOrder> {
        let query = query.clone().with_page(query.offset.unwrap_or_default(), 1);
        let order = self.get_orders(&query).await?.orders.into_iter().next();
        order.ok_or(ApiError::NotFound)?.try_into()
    }

    /// Stream every order matching a query, fetching pages as needed.
    pub fn orders_stream(
        &self,
        query: OrderQuery,
    ) -> impl Stream<Item = Result<OrderJson>> + Send + '_ {
        let limit = query.limit.unwrap_or(DEFAULT_PAGE_SIZE).max(1);
        let start = query.offset.unwrap_or_default();

        stream::try_unfold(Some(start), move |offset| {
            let query = query.clone();
            async move {
                let Some(offset) = offset else { return Ok::<_, ApiError>(None) };
                let page = self.get_orders(&query.with_page(offset, limit)).await?;
                let next = (page.orders.len() as u64 >= limit).then_some(offset + limit);
                let orders = stream::iter(page.orders.into_iter().map(Ok::<_, ApiError>));
                Ok(Some((orders, next)))
            }
        })
        .try_flatten()
    }
}
