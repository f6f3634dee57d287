/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/

//! REST clients for the Broker and Market Data APIs
//!
//! Each call is a single request/response exchange through an
//! [`HttpTransport`]. Non-success statuses surface as [`AppError::Api`];
//! nothing is retried here.
//!
//! # Example
//! ```ignore
//! use alpaca_client::prelude::*;
//!
//! let client = BrokerClient::new(Config::new())?;
//! let account = client.get_account_by_id(account_id).await?.model()?;
//! ```

use crate::application::config::Config;
use crate::application::interfaces::account::AccountService;
use crate::application::interfaces::market::MarketDataService;
use crate::constants::{BROKER_API_VERSION, CRYPTO_DATA_API_VERSION, STOCK_DATA_API_VERSION};
use crate::error::{ApiError, AppError};
use crate::model::http::{AuthScheme, HttpTransport, ReqwestTransport, TransportResponse};
use crate::model::requests::{BarsRequest, GetCryptoBarsRequest, GetStockBarsRequest};
use crate::model::responses::{BarsPage, Payload};
use crate::presentation::account::Account;
use crate::presentation::market::BarSet;
use crate::utils::id::IntoAccountId;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::{debug, error, info};

/// Base URL, raw-data flag and transport shared by the API clients
pub struct RestClient<T: HttpTransport> {
    transport: Arc<T>,
    base_url: String,
    raw_data: bool,
}

impl<T: HttpTransport> RestClient<T> {
    /// Creates a client over `transport` rooted at `base_url`
    pub fn new(transport: T, base_url: impl Into<String>, raw_data: bool) -> Self {
        Self {
            transport: Arc::new(transport),
            base_url: base_url.into(),
            raw_data,
        }
    }

    /// Root URL of the API
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Whether responses are returned as raw JSON
    pub fn raw_data(&self) -> bool {
        self.raw_data
    }

    /// Builds `{base}/{version}/{path}`
    pub fn url(&self, version: &str, path: &str) -> String {
        format!(
            "{}/{}/{}",
            self.base_url.trim_end_matches('/'),
            version,
            path.trim_start_matches('/')
        )
    }

    /// GETs `path` and returns the success body
    pub async fn get_json(
        &self,
        version: &str,
        path: &str,
        query: &[(String, String)],
    ) -> Result<Value, AppError> {
        let url = self.url(version, path);
        debug!("GET {}", url);
        let response = self.transport.get(&url, query).await?;
        Self::check(response)
    }

    /// POSTs `body` to `path` and returns the success body
    pub async fn post_json(
        &self,
        version: &str,
        path: &str,
        body: &Value,
    ) -> Result<Value, AppError> {
        let url = self.url(version, path);
        debug!("POST {}", url);
        let response = self.transport.post(&url, body).await?;
        Self::check(response)
    }

    /// DELETEs `path` and returns the success body
    pub async fn delete_json(&self, version: &str, path: &str) -> Result<Value, AppError> {
        let url = self.url(version, path);
        debug!("DELETE {}", url);
        let response = self.transport.delete(&url).await?;
        Self::check(response)
    }

    /// Wraps a success body according to the raw-data flag
    pub fn payload<M: DeserializeOwned>(&self, body: Value) -> Result<Payload<M>, AppError> {
        if self.raw_data {
            Ok(Payload::Raw(body))
        } else {
            Ok(Payload::Model(serde_json::from_value(body)?))
        }
    }

    fn check(response: TransportResponse) -> Result<Value, AppError> {
        if response.is_success() {
            return Ok(response.body);
        }
        let err = ApiError::from_body(response.status.as_u16(), &response.body);
        error!("Request failed with status {}: {}", response.status, err.message);
        Err(AppError::Api(err))
    }
}

/// Client for the Broker API
pub struct BrokerClient<T: HttpTransport = ReqwestTransport> {
    rest: RestClient<T>,
}

impl BrokerClient<ReqwestTransport> {
    /// Creates a client using HTTP basic auth against the configured broker URL
    pub fn new(config: Config) -> Result<Self, AppError> {
        let transport = ReqwestTransport::new(
            config.credentials.clone(),
            AuthScheme::Basic,
            config.rest_api.timeout,
        )?;
        Ok(Self::with_transport(
            transport,
            config.rest_api.broker_url,
            config.raw_data,
        ))
    }
}

impl<T: HttpTransport> BrokerClient<T> {
    /// Creates a client over a custom transport
    pub fn with_transport(transport: T, base_url: impl Into<String>, raw_data: bool) -> Self {
        Self {
            rest: RestClient::new(transport, base_url, raw_data),
        }
    }

    /// Underlying REST client
    pub fn rest(&self) -> &RestClient<T> {
        &self.rest
    }
}

#[async_trait]
impl<T: HttpTransport + 'static> AccountService for BrokerClient<T> {
    async fn get_account_by_id<I>(&self, account_id: I) -> Result<Payload<Account>, AppError>
    where
        I: IntoAccountId + Send,
    {
        let account_id = account_id.into_account_id()?;
        info!("Getting account {}", account_id);

        let body = self
            .rest
            .get_json(BROKER_API_VERSION, &format!("accounts/{account_id}"), &[])
            .await?;
        self.rest.payload(body)
    }
}

/// Client for the Market Data API
pub struct MarketDataClient<T: HttpTransport = ReqwestTransport> {
    rest: RestClient<T>,
}

impl MarketDataClient<ReqwestTransport> {
    /// Creates a client using key headers against the configured data URL
    pub fn new(config: Config) -> Result<Self, AppError> {
        let transport = ReqwestTransport::new(
            config.credentials.clone(),
            AuthScheme::KeyHeaders,
            config.rest_api.timeout,
        )?;
        Ok(Self::with_transport(
            transport,
            config.rest_api.data_url,
            config.raw_data,
        ))
    }
}

impl<T: HttpTransport> MarketDataClient<T> {
    /// Creates a client over a custom transport
    pub fn with_transport(transport: T, base_url: impl Into<String>, raw_data: bool) -> Self {
        Self {
            rest: RestClient::new(transport, base_url, raw_data),
        }
    }

    /// Underlying REST client
    pub fn rest(&self) -> &RestClient<T> {
        &self.rest
    }

    /// Fetches every page of a bars query and merges them per symbol
    async fn fetch_bars<R: BarsRequest>(
        &self,
        version: &str,
        path: &str,
        request: &R,
    ) -> Result<Payload<BarSet>, AppError> {
        let params = request.query_params()?;
        let limit = request.base().limit().map(|l| l as usize);

        let mut merged: Map<String, Value> = Map::new();
        let mut collected = 0usize;
        let mut page_token: Option<String> = None;
        let mut pages = 0usize;

        loop {
            let mut query: Vec<(String, String)> =
                params.iter().filter(|(k, _)| k != "limit").cloned().collect();
            if let Some(limit) = limit {
                query.push(("limit".to_string(), (limit - collected).to_string()));
            }
            if let Some(token) = &page_token {
                query.push(("page_token".to_string(), token.clone()));
            }

            let body = self.rest.get_json(version, path, &query).await?;
            let page = BarsPage::from_value(body)?;
            pages += 1;
            collected += page.len();
            merge_bars(&mut merged, page.bars)?;

            page_token = page.next_page_token;
            let limit_reached = limit.is_some_and(|l| collected >= l);
            if page_token.is_none() || limit_reached {
                break;
            }
        }

        debug!(
            "Fetched {} bars for {} symbols in {} pages",
            collected,
            merged.len(),
            pages
        );

        if self.rest.raw_data() {
            return Ok(Payload::Raw(Value::Object(merged)));
        }
        Ok(Payload::Model(into_bar_set(merged)?))
    }
}

fn merge_bars(merged: &mut Map<String, Value>, page: Map<String, Value>) -> Result<(), AppError> {
    for (symbol, bars) in page {
        let Value::Array(items) = bars else {
            return Err(AppError::Deserialization(format!(
                "bars for {symbol} are not an array"
            )));
        };
        match merged.get_mut(&symbol) {
            Some(Value::Array(existing)) => existing.extend(items),
            _ => {
                merged.insert(symbol, Value::Array(items));
            }
        }
    }
    Ok(())
}

fn into_bar_set(merged: Map<String, Value>) -> Result<BarSet, AppError> {
    Ok(serde_json::from_value(Value::Object(merged))?)
}

#[async_trait]
impl<T: HttpTransport + 'static> MarketDataService for MarketDataClient<T> {
    async fn get_stock_bars(
        &self,
        request: &GetStockBarsRequest,
    ) -> Result<Payload<BarSet>, AppError> {
        info!("Getting stock bars");
        self.fetch_bars(STOCK_DATA_API_VERSION, "stocks/bars", request)
            .await
    }

    async fn get_crypto_bars(
        &self,
        request: &GetCryptoBarsRequest,
    ) -> Result<Payload<BarSet>, AppError> {
        info!("Getting crypto bars");
        self.fetch_bars(CRYPTO_DATA_API_VERSION, "crypto/bars", request)
            .await
    }
}
