/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
use crate::error::AppError;
use crate::model::utils::{datetime_to_wire, naive_datetime_to_wire};
use crate::model::validation::{NonEmptyRequest, Presence};
use crate::presentation::market::{Adjustment, DataFeed, Exchange, TimeFrame};
use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use pretty_simple_display::DisplaySimple;
use serde::{Serialize, Serializer};

/// One ticker or an ordered list of tickers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SymbolOrSymbols {
    /// A single identifier, e.g. `AAPL`
    Single(String),
    /// Several identifiers, order preserved
    Many(Vec<String>),
}

impl SymbolOrSymbols {
    /// Identifiers as a slice-like list
    pub fn symbols(&self) -> Vec<&str> {
        match self {
            SymbolOrSymbols::Single(s) => vec![s.as_str()],
            SymbolOrSymbols::Many(v) => v.iter().map(String::as_str).collect(),
        }
    }

    /// Comma separated form used by the `symbols` query parameter
    pub fn to_query_value(&self) -> String {
        self.symbols().join(",")
    }

    fn validate(&self) -> Result<(), AppError> {
        let symbols = self.symbols();
        if symbols.is_empty() || symbols.iter().any(|s| s.trim().is_empty()) {
            return Err(AppError::Validation(
                "symbol_or_symbols must contain at least one non-blank identifier".to_string(),
            ));
        }
        Ok(())
    }
}

impl From<&str> for SymbolOrSymbols {
    fn from(s: &str) -> Self {
        SymbolOrSymbols::Single(s.to_string())
    }
}

impl From<String> for SymbolOrSymbols {
    fn from(s: String) -> Self {
        SymbolOrSymbols::Single(s)
    }
}

impl From<Vec<String>> for SymbolOrSymbols {
    fn from(v: Vec<String>) -> Self {
        SymbolOrSymbols::Many(v)
    }
}

impl From<Vec<&str>> for SymbolOrSymbols {
    fn from(v: Vec<&str>) -> Self {
        SymbolOrSymbols::Many(v.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for SymbolOrSymbols {
    fn from(v: &[&str]) -> Self {
        SymbolOrSymbols::Many(v.iter().map(|s| s.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for SymbolOrSymbols {
    fn from(v: [&str; N]) -> Self {
        SymbolOrSymbols::Many(v.iter().map(|s| s.to_string()).collect())
    }
}

/// Start or end of a bar time range
///
/// Date-time values are rendered as `YYYY-MM-DDTHH:MM:SSZ`; pre-formatted
/// strings are sent untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeBound {
    /// Timezone aware instant, normalised to UTC
    At(DateTime<Utc>),
    /// Timezone naive date-time, taken as UTC
    Naive(NaiveDateTime),
    /// Caller formatted string
    Text(String),
}

impl TimeBound {
    /// Wire representation of the boundary
    pub fn to_wire(&self) -> String {
        match self {
            TimeBound::At(dt) => datetime_to_wire(dt),
            TimeBound::Naive(dt) => naive_datetime_to_wire(dt),
            TimeBound::Text(s) => s.clone(),
        }
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for TimeBound {
    fn from(dt: DateTime<Tz>) -> Self {
        TimeBound::At(dt.with_timezone(&Utc))
    }
}

impl From<NaiveDateTime> for TimeBound {
    fn from(dt: NaiveDateTime) -> Self {
        TimeBound::Naive(dt)
    }
}

impl From<&str> for TimeBound {
    fn from(s: &str) -> Self {
        TimeBound::Text(s.to_string())
    }
}

impl From<String> for TimeBound {
    fn from(s: String) -> Self {
        TimeBound::Text(s)
    }
}

impl Serialize for TimeBound {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_wire())
    }
}

/// Parameters shared by every bar request regardless of asset class
///
/// Not meant to be sent on its own; use [`GetStockBarsRequest`] or
/// [`GetCryptoBarsRequest`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BaseBarsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    symbol_or_symbols: Option<SymbolOrSymbols>,
    #[serde(skip_serializing_if = "Option::is_none")]
    timeframe: Option<TimeFrame>,
    #[serde(skip_serializing_if = "Option::is_none")]
    start: Option<TimeBound>,
    #[serde(skip_serializing_if = "Option::is_none")]
    end: Option<TimeBound>,
    #[serde(skip_serializing_if = "Option::is_none")]
    limit: Option<u32>,
}

impl BaseBarsRequest {
    /// Requested ticker(s)
    pub fn symbol_or_symbols(&self) -> Option<&SymbolOrSymbols> {
        self.symbol_or_symbols.as_ref()
    }

    /// Aggregation window
    pub fn timeframe(&self) -> Option<TimeFrame> {
        self.timeframe
    }

    /// Range start
    pub fn start(&self) -> Option<&TimeBound> {
        self.start.as_ref()
    }

    /// Range end
    pub fn end(&self) -> Option<&TimeBound> {
        self.end.as_ref()
    }

    /// Maximum number of bars
    pub fn limit(&self) -> Option<u32> {
        self.limit
    }

    fn field_presence(&self) -> Vec<(&'static str, bool)> {
        vec![
            ("symbol_or_symbols", self.symbol_or_symbols.is_present()),
            ("timeframe", self.timeframe.is_present()),
            ("start", self.start.is_present()),
            ("end", self.end.is_present()),
            ("limit", self.limit.is_present()),
        ]
    }

    fn validate_fields(&self) -> Result<(), AppError> {
        if let Some(symbols) = &self.symbol_or_symbols {
            symbols.validate()?;
        }
        if self.limit == Some(0) {
            return Err(AppError::Validation(
                "limit must be a positive integer".to_string(),
            ));
        }
        Ok(())
    }

    fn query_params(&self) -> Result<Vec<(String, String)>, AppError> {
        let symbols = self.symbol_or_symbols.as_ref().ok_or_else(|| {
            AppError::InvalidInput("symbol_or_symbols is required to fetch bars".to_string())
        })?;
        let timeframe = self.timeframe.ok_or_else(|| {
            AppError::InvalidInput("timeframe is required to fetch bars".to_string())
        })?;

        let mut params = vec![
            ("symbols".to_string(), symbols.to_query_value()),
            ("timeframe".to_string(), timeframe.to_string()),
        ];
        if let Some(start) = &self.start {
            params.push(("start".to_string(), start.to_wire()));
        }
        if let Some(end) = &self.end {
            params.push(("end".to_string(), end.to_wire()));
        }
        if let Some(limit) = self.limit {
            params.push(("limit".to_string(), limit.to_string()));
        }
        Ok(params)
    }
}

/// Behaviour shared by the asset class specific bar requests
pub trait BarsRequest: NonEmptyRequest + Send + Sync {
    /// Shared parameters
    fn base(&self) -> &BaseBarsRequest;

    /// Asset class specific query parameters
    fn asset_params(&self) -> Vec<(String, String)>;

    /// Full query string parameters
    ///
    /// Fails with [`AppError::InvalidInput`] when the symbols or the time
    /// frame are missing, since the endpoint cannot answer without them.
    fn query_params(&self) -> Result<Vec<(String, String)>, AppError> {
        let mut params = self.base().query_params()?;
        params.extend(self.asset_params());
        Ok(params)
    }
}

macro_rules! impl_base_bars_setters {
    () => {
        /// Sets the ticker or tickers
        pub fn with_symbol_or_symbols(mut self, symbols: impl Into<SymbolOrSymbols>) -> Self {
            self.base.symbol_or_symbols = Some(symbols.into());
            self
        }

        /// Sets the aggregation window
        pub fn with_timeframe(mut self, timeframe: TimeFrame) -> Self {
            self.base.timeframe = Some(timeframe);
            self
        }

        /// Sets the range start
        pub fn with_start(mut self, start: impl Into<TimeBound>) -> Self {
            self.base.start = Some(start.into());
            self
        }

        /// Sets the range end
        pub fn with_end(mut self, end: impl Into<TimeBound>) -> Self {
            self.base.end = Some(end.into());
            self
        }

        /// Sets the maximum number of bars
        pub fn with_limit(mut self, limit: u32) -> Self {
            self.base.limit = Some(limit);
            self
        }
    };
}

/// Request for equity bars
#[derive(Debug, Clone, PartialEq, Eq, DisplaySimple, Serialize)]
pub struct GetStockBarsRequest {
    #[serde(flatten)]
    base: BaseBarsRequest,
    #[serde(skip_serializing_if = "Option::is_none")]
    adjustment: Option<Adjustment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    feed: Option<DataFeed>,
}

impl GetStockBarsRequest {
    /// Starts building a request
    pub fn builder() -> GetStockBarsRequestBuilder {
        GetStockBarsRequestBuilder::default()
    }

    /// Shortcut for the common symbols + time frame request
    pub fn new(
        symbols: impl Into<SymbolOrSymbols>,
        timeframe: TimeFrame,
    ) -> Result<Self, AppError> {
        Self::builder()
            .with_symbol_or_symbols(symbols)
            .with_timeframe(timeframe)
            .build()
    }

    /// Corporate action adjustment
    pub fn adjustment(&self) -> Option<Adjustment> {
        self.adjustment
    }

    /// Source feed
    pub fn feed(&self) -> Option<DataFeed> {
        self.feed
    }
}

impl NonEmptyRequest for GetStockBarsRequest {
    fn field_presence(&self) -> Vec<(&'static str, bool)> {
        let mut fields = self.base.field_presence();
        fields.push(("adjustment", self.adjustment.is_present()));
        fields.push(("feed", self.feed.is_present()));
        fields
    }
}

impl BarsRequest for GetStockBarsRequest {
    fn base(&self) -> &BaseBarsRequest {
        &self.base
    }

    fn asset_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        if let Some(adjustment) = self.adjustment {
            params.push(("adjustment".to_string(), adjustment.as_str().to_string()));
        }
        if let Some(feed) = self.feed {
            params.push(("feed".to_string(), feed.as_str().to_string()));
        }
        params
    }
}

/// Builder for [`GetStockBarsRequest`]
#[derive(Debug, Clone, Default)]
pub struct GetStockBarsRequestBuilder {
    base: BaseBarsRequest,
    adjustment: Option<Adjustment>,
    feed: Option<DataFeed>,
}

impl GetStockBarsRequestBuilder {
    impl_base_bars_setters!();

    /// Sets the corporate action adjustment
    pub fn with_adjustment(mut self, adjustment: Adjustment) -> Self {
        self.adjustment = Some(adjustment);
        self
    }

    /// Sets the source feed
    pub fn with_feed(mut self, feed: DataFeed) -> Self {
        self.feed = Some(feed);
        self
    }

    /// Validates and freezes the request
    ///
    /// Fails with [`AppError::Validation`] when nothing was set, when an
    /// empty symbol list was supplied or when `limit` is zero.
    pub fn build(self) -> Result<GetStockBarsRequest, AppError> {
        let request = GetStockBarsRequest {
            base: self.base,
            adjustment: self.adjustment,
            feed: self.feed,
        };
        request.ensure_non_empty()?;
        request.base.validate_fields()?;
        Ok(request)
    }
}

/// Request for crypto bars
#[derive(Debug, Clone, PartialEq, Eq, DisplaySimple, Serialize)]
pub struct GetCryptoBarsRequest {
    #[serde(flatten)]
    base: BaseBarsRequest,
    #[serde(skip_serializing_if = "Option::is_none")]
    exchanges: Option<Vec<Exchange>>,
}

impl GetCryptoBarsRequest {
    /// Starts building a request
    pub fn builder() -> GetCryptoBarsRequestBuilder {
        GetCryptoBarsRequestBuilder::default()
    }

    /// Shortcut for the common symbols + time frame request
    pub fn new(
        symbols: impl Into<SymbolOrSymbols>,
        timeframe: TimeFrame,
    ) -> Result<Self, AppError> {
        Self::builder()
            .with_symbol_or_symbols(symbols)
            .with_timeframe(timeframe)
            .build()
    }

    /// Venues to restrict bars to
    pub fn exchanges(&self) -> Option<&[Exchange]> {
        self.exchanges.as_deref()
    }
}

impl NonEmptyRequest for GetCryptoBarsRequest {
    fn field_presence(&self) -> Vec<(&'static str, bool)> {
        let mut fields = self.base.field_presence();
        fields.push(("exchanges", self.exchanges.is_present()));
        fields
    }
}

impl BarsRequest for GetCryptoBarsRequest {
    fn base(&self) -> &BaseBarsRequest {
        &self.base
    }

    fn asset_params(&self) -> Vec<(String, String)> {
        match &self.exchanges {
            Some(exchanges) if !exchanges.is_empty() => {
                let joined = exchanges
                    .iter()
                    .map(Exchange::as_str)
                    .collect::<Vec<_>>()
                    .join(",");
                vec![("exchanges".to_string(), joined)]
            }
            _ => Vec::new(),
        }
    }
}

/// Builder for [`GetCryptoBarsRequest`]
#[derive(Debug, Clone, Default)]
pub struct GetCryptoBarsRequestBuilder {
    base: BaseBarsRequest,
    exchanges: Option<Vec<Exchange>>,
}

impl GetCryptoBarsRequestBuilder {
    impl_base_bars_setters!();

    /// Restricts bars to the given venues, order preserved
    pub fn with_exchanges(mut self, exchanges: impl IntoIterator<Item = Exchange>) -> Self {
        self.exchanges = Some(exchanges.into_iter().collect());
        self
    }

    /// Validates and freezes the request
    pub fn build(self) -> Result<GetCryptoBarsRequest, AppError> {
        let request = GetCryptoBarsRequest {
            base: self.base,
            exchanges: self.exchanges,
        };
        request.ensure_non_empty()?;
        request.base.validate_fields()?;
        Ok(request)
    }
}
