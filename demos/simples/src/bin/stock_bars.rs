use alpaca_client::prelude::*;
use chrono::Duration;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();

    let client = MarketDataClient::new(Config::new())?;

    let end = Utc::now() - Duration::days(1);
    let request = GetStockBarsRequest::builder()
        .with_symbol_or_symbols(["AAPL", "MSFT"])
        .with_timeframe(TimeFrame::DAY)
        .with_start(end - Duration::days(10))
        .with_end(end)
        .with_adjustment(Adjustment::All)
        .with_feed(DataFeed::Iex)
        .build()?;
    info!("Request: {}", request);

    let bars = client.get_stock_bars(&request).await?.model()?;
    for symbol in bars.symbols() {
        for bar in &bars[symbol] {
            info!(
                "{} {} o={} h={} l={} c={} v={}",
                symbol, bar.timestamp, bar.open, bar.high, bar.low, bar.close, bar.volume
            );
        }
    }

    Ok(())
}
