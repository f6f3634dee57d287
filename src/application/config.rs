use crate::constants::{BROKER_LIVE_URL, BROKER_SANDBOX_URL, DATA_URL, DEFAULT_TIMEOUT_SECS};
use crate::utils::config::{get_env_flag, get_env_or_default, get_env_or_none};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq, Eq)]
/// API credentials; the secret is never serialized
pub struct Credentials {
    /// API key id
    pub api_key: String,
    /// API secret key
    #[serde(skip_serializing, default)]
    pub secret_key: String,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq, Eq)]
/// Configuration for the REST APIs
pub struct RestApiConfig {
    /// Base URL of the Broker API
    pub broker_url: String,
    /// Base URL of the Market Data API
    pub data_url: String,
    /// Timeout in seconds passed through to the HTTP transport
    pub timeout: u64,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq, Eq)]
/// Main configuration for the Alpaca clients
pub struct Config {
    /// Authentication credentials
    pub credentials: Credentials,
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// Whether the broker URL points at the sandbox
    pub sandbox: bool,
    /// Return raw JSON instead of typed models
    pub raw_data: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Loads the configuration from the environment and an optional `.env` file
    ///
    /// | Variable | Default |
    /// |---|---|
    /// | `ALPACA_API_KEY` / `ALPACA_SECRET_KEY` | empty (logged) |
    /// | `ALPACA_SANDBOX` | `true` |
    /// | `ALPACA_BROKER_URL` | sandbox or live URL |
    /// | `ALPACA_DATA_URL` | `https://data.alpaca.markets` |
    /// | `ALPACA_TIMEOUT` | `30` |
    /// | `ALPACA_RAW_DATA` | `false` |
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let api_key = get_env_or_default("ALPACA_API_KEY", String::new());
        let secret_key = get_env_or_default("ALPACA_SECRET_KEY", String::new());
        if api_key.is_empty() {
            error!("ALPACA_API_KEY not found in environment variables or .env file");
        }
        if secret_key.is_empty() {
            error!("ALPACA_SECRET_KEY not found in environment variables or .env file");
        }

        let sandbox = get_env_flag("ALPACA_SANDBOX", true);
        let broker_url = get_env_or_none::<String>("ALPACA_BROKER_URL")
            .unwrap_or_else(|| default_broker_url(sandbox).to_string());

        Config {
            credentials: Credentials {
                api_key,
                secret_key,
            },
            rest_api: RestApiConfig {
                broker_url,
                data_url: get_env_or_default("ALPACA_DATA_URL", DATA_URL.to_string()),
                timeout: get_env_or_default("ALPACA_TIMEOUT", DEFAULT_TIMEOUT_SECS),
            },
            sandbox,
            raw_data: get_env_flag("ALPACA_RAW_DATA", false),
        }
    }

    /// Builds a sandbox configuration from explicit credentials, ignoring the environment
    pub fn with_credentials(api_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Config {
            credentials: Credentials {
                api_key: api_key.into(),
                secret_key: secret_key.into(),
            },
            rest_api: RestApiConfig {
                broker_url: BROKER_SANDBOX_URL.to_string(),
                data_url: DATA_URL.to_string(),
                timeout: DEFAULT_TIMEOUT_SECS,
            },
            sandbox: true,
            raw_data: false,
        }
    }

    /// Switches between sandbox and live broker URLs
    pub fn with_sandbox(mut self, sandbox: bool) -> Self {
        self.sandbox = sandbox;
        self.rest_api.broker_url = default_broker_url(sandbox).to_string();
        self
    }

    /// Enables or disables raw-data mode
    pub fn with_raw_data(mut self, raw_data: bool) -> Self {
        self.raw_data = raw_data;
        self
    }

    /// Overrides the broker base URL
    pub fn with_broker_url(mut self, url: impl Into<String>) -> Self {
        self.rest_api.broker_url = url.into();
        self
    }

    /// Overrides the market data base URL
    pub fn with_data_url(mut self, url: impl Into<String>) -> Self {
        self.rest_api.data_url = url.into();
        self
    }

    /// Overrides the transport timeout
    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.rest_api.timeout = timeout_secs;
        self
    }
}

fn default_broker_url(sandbox: bool) -> &'static str {
    if sandbox {
        BROKER_SANDBOX_URL
    } else {
        BROKER_LIVE_URL
    }
}
