use crate::constants::TINYPASTE_API;
use crate::model::requests::ResponseFormat;
use crate::utils::config::{get_env_or_default, get_env_or_none};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, Default, PartialEq)]
/// Credentials for the paste API
///
/// Both fields are optional in practice: when either is empty, requests are
/// sent without authentication.
pub struct Credentials {
    /// Account name
    pub username: String,
    /// Plain-text account password, never serialized
    #[serde(skip_serializing, default)]
    pub password: String,
}

impl Credentials {
    /// Creates a credentials pair
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Whether both username and password are set
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.username.is_empty() && !self.password.is_empty()
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL of the paste API, without trailing slash
    pub base_url: String,
    /// Optional request timeout in seconds; `None` keeps the transport default
    pub timeout: Option<u64>,
}

impl Default for RestApiConfig {
    fn default() -> Self {
        Self {
            base_url: TINYPASTE_API.to_string(),
            timeout: None,
        }
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Main configuration for the paste API client
pub struct Config {
    /// Authentication credentials
    pub credentials: Credentials,
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// Format the API should answer in
    pub response_format: ResponseFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Builds the configuration from the environment
    ///
    /// A `.env` file is loaded first if present. Recognised variables:
    /// `TINYPASTE_USERNAME`, `TINYPASTE_PASSWORD`, `TINYPASTE_RESPONSE_FORMAT`,
    /// `TINYPASTE_BASE_URL` and `TINYPASTE_TIMEOUT`.
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let credentials = Credentials {
            username: get_env_or_default("TINYPASTE_USERNAME", String::new()),
            password: get_env_or_default("TINYPASTE_PASSWORD", String::new()),
        };
        if !credentials.is_complete() {
            debug!("TinyPaste credentials not configured, requests will be anonymous");
        }

        Config {
            credentials,
            rest_api: RestApiConfig {
                base_url: get_env_or_default("TINYPASTE_BASE_URL", TINYPASTE_API.to_string()),
                timeout: get_env_or_none("TINYPASTE_TIMEOUT"),
            },
            response_format: get_env_or_default("TINYPASTE_RESPONSE_FORMAT", ResponseFormat::Json),
        }
    }

    /// Anonymous configuration pointing at `base_url`, ignoring the environment
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Config {
            credentials: Credentials::default(),
            rest_api: RestApiConfig {
                base_url: base_url.into(),
                timeout: None,
            },
            response_format: ResponseFormat::Json,
        }
    }
}
