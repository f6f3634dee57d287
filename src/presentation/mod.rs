/// Broker account models
pub mod account;
/// Market data enums and bar models
pub mod market;
/// Serialization helpers for API payloads
pub mod serialization;

pub use account::*;
pub use market::*;
