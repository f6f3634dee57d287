/// REST clients for the Broker and Market Data APIs
pub mod client;
/// Application configuration module
pub mod config;
/// Service interfaces implemented by the clients
pub mod interfaces;
