use opensea_constants::ParseNetworkError;

/// Errors raised while reading an [`SdkConfig`] from the environment.
///
/// [`SdkConfig`]: crate::SdkConfig
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A URL variable doesn't parse.
    #[error("{key} is not a valid URL ({value:?}): {source}")]
    InvalidUrl {
        /// The variable.
        key: String,
        /// Its value.
        value: String,
        /// The parse failure.
        #[source]
        source: url::ParseError,
    },
    /// A URL variable isn't HTTP(S).
    #[error("{key} must be an http(s) URL, got scheme {scheme:?}")]
    UnsupportedScheme {
        /// The variable.
        key: String,
        /// The scheme found.
        scheme: String,
    },
    /// The network name is unknown.
    #[error(transparent)]
    Network(#[from] ParseNetworkError),
}
