/// Broker API base URL for the sandbox environment
pub const BROKER_SANDBOX_URL: &str = "https://broker-api.sandbox.alpaca.markets";
/// Broker API base URL for the live environment
pub const BROKER_LIVE_URL: &str = "https://broker-api.alpaca.markets";
/// Market Data API base URL
pub const DATA_URL: &str = "https://data.alpaca.markets";
/// Path version prefix for the Broker API
pub const BROKER_API_VERSION: &str = "v1";
/// Path version prefix for the stock bars endpoint
pub const STOCK_DATA_API_VERSION: &str = "v2";
/// Path version prefix for the crypto bars endpoint
pub const CRYPTO_DATA_API_VERSION: &str = "v1beta1";
/// Default timeout in seconds for REST requests
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// User agent string used in HTTP requests to identify this client
pub const USER_AGENT: &str = concat!("alpaca-client/", env!("CARGO_PKG_VERSION"));
/// Wire format for outgoing date-time fields (UTC, second precision)
pub const WIRE_DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";
/// Header carrying the key id on Market Data API requests
pub const API_KEY_HEADER: &str = "APCA-API-KEY-ID";
/// Header carrying the secret key on Market Data API requests
pub const API_SECRET_HEADER: &str = "APCA-API-SECRET-KEY";
