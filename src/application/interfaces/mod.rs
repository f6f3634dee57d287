/// Account service interface
pub mod account;
/// Market data service interface
pub mod market;
