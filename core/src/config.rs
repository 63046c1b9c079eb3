//! Environment-based bootstrap.

use crate::error::ClientError;

/// Environment variable naming the API base URL,
/// e.g. `http://localhost:8080/v1`.
pub const API_URL_VAR: &str = "API_URL";

/// Connection settings resolved from the environment.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    /// Read [`API_URL_VAR`]. Missing or empty is a configuration error;
    /// whether the value parses as a URL is decided by
    /// [`crate::RestClient::new`].
    pub fn from_env() -> Result<Self, ClientError> {
        match std::env::var(API_URL_VAR) {
            Ok(value) if !value.trim().is_empty() => Ok(Self { base_url: value }),
            _ => Err(ClientError::Config(format!("{API_URL_VAR} is not set"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // One test covers all three states so parallel tests never race on the
    // process environment.
    #[test]
    fn from_env_requires_a_non_empty_value() {
        std::env::remove_var(API_URL_VAR);
        assert!(matches!(
            ApiConfig::from_env(),
            Err(ClientError::Config(_))
        ));

        std::env::set_var(API_URL_VAR, "");
        assert!(matches!(
            ApiConfig::from_env(),
            Err(ClientError::Config(_))
        ));

        std::env::set_var(API_URL_VAR, "http://localhost:8080/v1");
        let config = ApiConfig::from_env().unwrap();
        assert_eq!(config.base_url, "http://localhost:8080/v1");
        std::env::remove_var(API_URL_VAR);
    }
}
