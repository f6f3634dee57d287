/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/

//! # Alpaca Client Prelude
//!
//! Brings the commonly used types and traits into scope.
//!
//! ## Usage
//!
//! ```rust
//! use alpaca_client::prelude::*;
//!
//! let request = GetStockBarsRequest::new("AAPL", TimeFrame::DAY);
//! assert!(request.is_ok());
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the Alpaca clients
pub use crate::application::config::{Config, Credentials, RestApiConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Error types for the library
pub use crate::error::{ApiError, AppError, AppResult};

// ============================================================================
// CLIENTS AND SERVICES
// ============================================================================

/// REST clients
pub use crate::application::client::{BrokerClient, MarketDataClient, RestClient};

/// Service traits
pub use crate::application::interfaces::account::AccountService;
pub use crate::application::interfaces::market::MarketDataService;

// ============================================================================
// TRANSPORT
// ============================================================================

/// HTTP transport seam and its reqwest implementation
pub use crate::model::http::{AuthScheme, HttpTransport, ReqwestTransport, TransportResponse};

// ============================================================================
// REQUESTS AND VALIDATION
// ============================================================================

/// Bar request models
pub use crate::model::requests::{
    BarsRequest, BaseBarsRequest, GetCryptoBarsRequest, GetCryptoBarsRequestBuilder,
    GetStockBarsRequest, GetStockBarsRequestBuilder, SymbolOrSymbols, TimeBound,
};

/// Non-empty request contract
pub use crate::model::validation::{NonEmptyRequest, Presence};

/// Response envelope
pub use crate::model::responses::Payload;

// ============================================================================
// DOMAIN MODELS
// ============================================================================

/// Account models
pub use crate::presentation::account::{
    Account, AccountDocument, AccountStatus, AccountType, Agreement, AgreementType, Contact,
    Disclosures, DocumentType, FundingSource, Identity, TaxIdType, TradingConfigurations,
    TrustedContact,
};

/// Market data models
pub use crate::presentation::market::{
    Adjustment, Bar, BarSet, DataFeed, Exchange, TimeFrame, TimeFrameUnit,
};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

/// Account id coercion
pub use crate::utils::id::{IntoAccountId, parse_uuid};

/// Wire date-time formatting
pub use crate::model::utils::datetime_to_wire;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

/// Re-export commonly used external types
pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use std::sync::Arc;
pub use tracing::{debug, error, info, warn};

/// Re-export chrono for date/time handling
pub use chrono::{DateTime, Utc};

/// Re-export uuid for account identifiers
pub use uuid::Uuid;
