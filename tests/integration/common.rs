// Common utilities for integration tests

use alpaca_client::prelude::*;

pub const ACCOUNT_ID: &str = "2a87c088-ffb6-472b-a4a3-cd9305c8605c";
pub const ACCOUNT_JSON: &str = include_str!("../fixtures/account.json");

/// Config pointing both APIs at the mock server
pub fn mock_config(server_url: &str) -> Config {
    setup_logger();
    Config::with_credentials("key-id", "secret-key")
        .with_broker_url(server_url)
        .with_data_url(server_url)
        .with_timeout(5)
}

/// Broker client talking to the mock server
pub fn broker_client(server_url: &str, raw_data: bool) -> BrokerClient {
    BrokerClient::new(mock_config(server_url).with_raw_data(raw_data))
        .expect("Failed to create broker client")
}

/// Market data client talking to the mock server
pub fn market_client(server_url: &str) -> MarketDataClient {
    MarketDataClient::new(mock_config(server_url)).expect("Failed to create market data client")
}
