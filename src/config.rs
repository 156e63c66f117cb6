use crate::error::ConfigError;

/// Default search endpoint; overridable through `Config` for tests.
pub const SEARCH_ENDPOINT: &str = "https://pixabay.com/api/";

/// Process-wide read-only configuration, resolved once at startup.
///
/// The config is passed explicitly to the code that performs the network
/// call rather than read from a global.
#[derive(Clone, Debug)]
pub struct Config {
    /// Pixabay API key.
    pub api_key: String,
    /// Base URL of the search endpoint.
    pub endpoint: String,
}

impl Config {
    /// Read the configuration from the environment.
    ///
    /// `PIXABAY_API_KEY` is required and must be non-blank.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = std::env::var("PIXABAY_API_KEY").map_err(|_| ConfigError::MissingApiKey)?;
        if api_key.trim().is_empty() {
            return Err(ConfigError::MissingApiKey);
        }

        Ok(Self {
            api_key,
            endpoint: SEARCH_ENDPOINT.to_owned(),
        })
    }

    /// Build a config with an explicit key and endpoint.
    pub fn new(api_key: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            endpoint: endpoint.into(),
        }
    }
}
