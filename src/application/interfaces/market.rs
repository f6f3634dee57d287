use crate::error::AppError;
use crate::model::requests::{GetCryptoBarsRequest, GetStockBarsRequest};
use crate::model::responses::Payload;
use crate::presentation::market::BarSet;
use async_trait::async_trait;

/// Interface for historical market data
#[async_trait]
pub trait MarketDataService: Send + Sync {
    /// Gets equity bars for one or more symbols, following pagination
    async fn get_stock_bars(
        &self,
        request: &GetStockBarsRequest,
    ) -> Result<Payload<BarSet>, AppError>;

    /// Gets crypto bars for one or more symbols, following pagination
    async fn get_crypto_bars(
        &self,
        request: &GetCryptoBarsRequest,
    ) -> Result<Payload<BarSet>, AppError>;
}
