use super::models::Config;
use crate::backends::ConfigKey;
use thiserror::Error;
use url::Url;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Backend base '{key}' is not an absolute url: {value}")]
    InvalidBaseUrl { key: ConfigKey, value: String },

    #[error("Backend base '{key}' must use http or https, got '{scheme}'")]
    UnsupportedScheme { key: ConfigKey, scheme: String },

    #[error("Backend base '{key}' must not carry a query or fragment: {value}")]
    BaseWithQueryOrFragment { key: ConfigKey, value: String },
}

/// Validate the entire configuration
pub fn validate(config: &Config) -> Result<(), ValidationError> {
    validate_backends(config)?;
    Ok(())
}

/// Base paths are optional, but when set they must be plain http(s) urls
/// that identifiers can be appended to as path segments
fn validate_backends(config: &Config) -> Result<(), ValidationError> {
    for key in ConfigKey::ALL {
        let Some(value) = config.backends.get(key) else {
            continue;
        };

        let url = Url::parse(value).map_err(|_| ValidationError::InvalidBaseUrl {
            key,
            value: value.to_string(),
        })?;

        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(ValidationError::UnsupportedScheme {
                key,
                scheme: url.scheme().to_string(),
            });
        }

        if url.query().is_some() || url.fragment().is_some() {
            return Err(ValidationError::BaseWithQueryOrFragment {
                key,
                value: value.to_string(),
            });
        }
    }

    Ok(())
}
