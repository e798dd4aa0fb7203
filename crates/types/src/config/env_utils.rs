//! Readers for the environment variables of [`SdkConfig`].
//!
//! Blank values count as unset.
//!
//! [`SdkConfig`]: super::SdkConfig
use crate::ConfigError;
use opensea_constants::KnownNetworks;
use std::env;
use url::Url;

/// Read `key`, if set to a non-blank value.
pub fn optional(key: &str) -> Option<String> {
    env::var(key).ok().map(|value| value.trim().to_string()).filter(|value| !value.is_empty())
}

/// Parse an HTTP(S) base URL. The path always ends with `/`, so relative
/// endpoint paths joined onto it keep any path prefix.
pub fn parse_base_url(key: &str, value: &str) -> Result<Url, ConfigError> {
    let mut url = Url::parse(value).map_err(|source| ConfigError::InvalidUrl {
        key: key.to_string(),
        value: value.to_string(),
        source,
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::UnsupportedScheme {
            key: key.to_string(),
            scheme: url.scheme().to_string(),
        });
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

/// Read an HTTP(S) base URL from `key`.
pub fn optional_url(key: &str) -> Result<Option<Url>, ConfigError> {
    optional(key).map(|value| parse_base_url(key, &value)).transpose()
}

/// Read a network name from `key`.
pub fn optional_network(key: &str) -> Result<Option<KnownNetworks>, ConfigError> {
    optional(key).map(|name| name.parse().map_err(Into::into)).transpose()
}
