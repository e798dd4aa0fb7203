/// Result type for [`OpenSeaApi`] operations.
///
/// [`OpenSeaApi`]: crate::OpenSeaApi
pub type Result<T> = std::result::Result<T, ApiError>;

/// Errors returned by the [`OpenSeaApi`] client.
///
/// [`OpenSeaApi`]: crate::OpenSeaApi
#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    /// The requested asset or order does not exist.
    #[error("Not found")]
    NotFound,
    /// The API key is missing, invalid or lacks access.
    #[error("Unauthorized. Check your API key")]
    Unauthorized,
    /// Too many requests were made with this API key.
    #[error("Rate limited by the OpenSea API")]
    RateLimited,

    /// An order returned by the API could not be decoded.
    #[error("Invalid order from the OpenSea API: {0}")]
    InvalidOrder(String),

    /// An error occurred while parsing the URL.
    #[error(transparent)]
    Url(#[from] url::ParseError),

    /// An error occurred while contacting the OpenSea API.
    #[error("Error contacting the OpenSea API: {0}")]
    Reqwest(reqwest::Error),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(reqwest::StatusCode::NOT_FOUND) => ApiError::NotFound,
            Some(reqwest::StatusCode::UNAUTHORIZED | reqwest::StatusCode::FORBIDDEN) => {
                ApiError::Unauthorized
            }
            Some(reqwest::StatusCode::TOO_MANY_REQUESTS) => ApiError::RateLimited,
            _ => ApiError::Reqwest(err),
        }
    }
}
