/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/

//! # Alpaca Client
//!
//! Typed client for the Alpaca Broker API and the Alpaca Market Data API.
//!
//! The crate is organised in layers:
//!
//! - [`model`]: the HTTP transport seam, request models and their
//!   non-empty validation, and serde helpers.
//! - [`presentation`]: domain enums and the typed response entities
//!   (accounts, bars).
//! - [`application`]: configuration, the REST clients and the service traits
//!   they implement.
//! - [`utils`]: environment helpers, logging setup and account id coercion.
//!
//! ## Example
//! ```ignore
//! use alpaca_client::prelude::*;
//!
//! let client = BrokerClient::new(Config::new())?;
//! let account = client
//!     .get_account_by_id("2a87c088-ffb6-472b-a4a3-cd9305c8605c")
//!     .await?
//!     .model()?;
//! println!("{}", account.account_number);
//! ```

/// Application layer: configuration, clients and service traits
pub mod application;
/// Global constants
pub mod constants;
/// Error types
pub mod error;
/// Transport, request models and validation
pub mod model;
/// Commonly used re-exports
pub mod prelude;
/// Domain entities returned by the API
pub mod presentation;
/// Utility helpers
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
pub fn version() -> &'static str {
    VERSION
}
