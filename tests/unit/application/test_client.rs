use alpaca_client::application::client::{BrokerClient, MarketDataClient, RestClient};
use alpaca_client::application::interfaces::account::AccountService;
use alpaca_client::application::interfaces::market::MarketDataService;
use alpaca_client::error::AppError;
use alpaca_client::model::http::{HttpTransport, TransportResponse};
use alpaca_client::model::requests::{GetCryptoBarsRequest, GetStockBarsRequest};
use alpaca_client::model::responses::Payload;
use alpaca_client::presentation::market::{Exchange, TimeFrame};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::{Value, json};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

const ACCOUNT_ID: &str = "2a87c088-ffb6-472b-a4a3-cd9305c8605c";
const ACCOUNT_JSON: &str = include_str!("../../fixtures/account.json");
const BASE_URL: &str = "https://stub.local";

#[derive(Debug, Clone, PartialEq)]
struct Call {
    method: &'static str,
    url: String,
    query: Vec<(String, String)>,
}

/// Transport returning queued responses and recording every call
#[derive(Clone, Default)]
struct StubTransport {
    responses: Arc<Mutex<VecDeque<TransportResponse>>>,
    calls: Arc<Mutex<Vec<Call>>>,
}

impl StubTransport {
    fn with_responses(responses: Vec<(u16, Value)>) -> Self {
        let stub = Self::default();
        {
            let mut queue = stub.responses.lock().unwrap();
            for (status, body) in responses {
                queue.push_back(TransportResponse {
                    status: StatusCode::from_u16(status).unwrap(),
                    body,
                });
            }
        }
        stub
    }

    fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn respond(&self, method: &'static str, url: &str, query: &[(String, String)]) -> TransportResponse {
        self.calls.lock().unwrap().push(Call {
            method,
            url: url.to_string(),
            query: query.to_vec(),
        });
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| TransportResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                body: json!({"code": 50000000, "message": "no stubbed response"}),
            })
    }
}

#[async_trait]
impl HttpTransport for StubTransport {
    async fn get(
        &self,
        url: &str,
        query: &[(String, String)],
    ) -> Result<TransportResponse, AppError> {
        Ok(self.respond("GET", url, query))
    }

    async fn post(&self, url: &str, _body: &Value) -> Result<TransportResponse, AppError> {
        Ok(self.respond("POST", url, &[]))
    }

    async fn delete(&self, url: &str) -> Result<TransportResponse, AppError> {
        Ok(self.respond("DELETE", url, &[]))
    }
}

fn account_body() -> Value {
    serde_json::from_str(ACCOUNT_JSON).unwrap()
}

fn bar(t: &str, close: f64) -> Value {
    json!({"t": t, "o": close, "h": close, "l": close, "c": close, "v": 100, "n": 3, "vw": close})
}

fn param<'a>(call: &'a Call, key: &str) -> Option<&'a str> {
    call.query
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

#[tokio::test]
async fn get_account_returns_typed_account() {
    let stub = StubTransport::with_responses(vec![(200, account_body())]);
    let client = BrokerClient::with_transport(stub.clone(), BASE_URL, false);

    let account = client
        .get_account_by_id(ACCOUNT_ID)
        .await
        .unwrap()
        .model()
        .unwrap();

    assert_eq!(account.id, Uuid::parse_str(ACCOUNT_ID).unwrap());
    let calls = stub.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].method, "GET");
    assert_eq!(calls[0].url, format!("{BASE_URL}/v1/accounts/{ACCOUNT_ID}"));
}

#[tokio::test]
async fn get_account_accepts_uuid_value() {
    let stub = StubTransport::with_responses(vec![(200, account_body())]);
    let client = BrokerClient::with_transport(stub.clone(), format!("{BASE_URL}/"), false);

    let id = Uuid::parse_str(ACCOUNT_ID).unwrap();
    let payload = client.get_account_by_id(id).await.unwrap();
    assert_eq!(payload.as_model().map(|a| a.id), Some(id));
    assert_eq!(stub.calls()[0].url, format!("{BASE_URL}/v1/accounts/{ACCOUNT_ID}"));
}

#[tokio::test]
async fn get_account_raw_mode_returns_json_unmodified() {
    let stub = StubTransport::with_responses(vec![(200, account_body())]);
    let client = BrokerClient::with_transport(stub, BASE_URL, true);

    let payload = client.get_account_by_id(ACCOUNT_ID).await.unwrap();
    assert!(payload.is_raw());
    assert_eq!(payload.raw().unwrap(), account_body());
}

#[tokio::test]
async fn get_account_maps_error_status() {
    let stub = StubTransport::with_responses(vec![(
        401,
        json!({"code": 40110000, "message": "request is not authorized"}),
    )]);
    let client = BrokerClient::with_transport(stub, BASE_URL, false);

    match client.get_account_by_id(ACCOUNT_ID).await {
        Err(AppError::Api(err)) => {
            assert_eq!(err.status_code, 401);
            assert_eq!(err.code, Some(40110000));
            assert_eq!(err.message, "request is not authorized");
        }
        other => panic!("expected api error, got {other:?}"),
    }
}

#[tokio::test]
async fn get_account_rejects_malformed_string_without_calling_transport() {
    let stub = StubTransport::default();
    let client = BrokerClient::with_transport(stub.clone(), BASE_URL, false);

    let result = client.get_account_by_id("not a valid uuid").await;
    assert!(matches!(result, Err(AppError::InvalidInput(_))));
    assert!(stub.calls().is_empty());
}

#[tokio::test]
async fn get_account_rejects_integer_without_calling_transport() {
    let stub = StubTransport::default();
    let client = BrokerClient::with_transport(stub.clone(), BASE_URL, false);

    let result = client.get_account_by_id(4).await;
    assert!(matches!(result, Err(AppError::InvalidInput(_))));
    assert!(stub.calls().is_empty());
}

#[test]
fn get_account_blocking_on_runtime_less_caller() {
    let stub = StubTransport::with_responses(vec![(200, account_body())]);
    let client = BrokerClient::with_transport(stub, BASE_URL, false);

    let account = tokio_test::block_on(client.get_account_by_id(ACCOUNT_ID))
        .unwrap()
        .model()
        .unwrap();
    assert_eq!(account.account_number, "601865070");
}

#[tokio::test]
async fn stock_bars_follow_pagination_and_merge_per_symbol() {
    let stub = StubTransport::with_responses(vec![
        (
            200,
            json!({
                "bars": {
                    "AAPL": [bar("2022-01-03T05:00:00Z", 182.01)],
                    "MSFT": [bar("2022-01-03T05:00:00Z", 334.75)]
                },
                "next_page_token": "page-2"
            }),
        ),
        (
            200,
            json!({
                "bars": {"AAPL": [bar("2022-01-04T05:00:00Z", 179.70)]},
                "next_page_token": null
            }),
        ),
    ]);
    let client = MarketDataClient::with_transport(stub.clone(), BASE_URL, false);
    let request = GetStockBarsRequest::new(vec!["AAPL", "MSFT"], TimeFrame::DAY).unwrap();

    let set = client.get_stock_bars(&request).await.unwrap().model().unwrap();

    assert_eq!(set.symbols(), vec!["AAPL", "MSFT"]);
    assert_eq!(set["AAPL"].len(), 2);
    assert_eq!(set["AAPL"][1].close, 179.70);
    assert!(set["AAPL"].iter().all(|b| b.symbol == "AAPL"));
    assert_eq!(set["MSFT"][0].symbol, "MSFT");

    let calls = stub.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].url, format!("{BASE_URL}/v2/stocks/bars"));
    assert_eq!(param(&calls[0], "symbols"), Some("AAPL,MSFT"));
    assert_eq!(param(&calls[0], "timeframe"), Some("1Day"));
    assert_eq!(param(&calls[0], "page_token"), None);
    assert_eq!(param(&calls[1], "page_token"), Some("page-2"));
}

#[tokio::test]
async fn stock_bars_stop_when_limit_is_reached() {
    let stub = StubTransport::with_responses(vec![(
        200,
        json!({
            "bars": {"AAPL": [bar("2022-01-03T05:00:00Z", 1.0), bar("2022-01-04T05:00:00Z", 2.0)]},
            "next_page_token": "more"
        }),
    )]);
    let client = MarketDataClient::with_transport(stub.clone(), BASE_URL, false);
    let request = GetStockBarsRequest::builder()
        .with_symbol_or_symbols("AAPL")
        .with_timeframe(TimeFrame::DAY)
        .with_limit(2)
        .build()
        .unwrap();

    let set = client.get_stock_bars(&request).await.unwrap().model().unwrap();
    assert_eq!(set.total_bars(), 2);

    let calls = stub.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(param(&calls[0], "limit"), Some("2"));
}

#[tokio::test]
async fn stock_bars_request_remaining_limit_on_next_page() {
    let stub = StubTransport::with_responses(vec![
        (
            200,
            json!({
                "bars": {"AAPL": [bar("2022-01-03T05:00:00Z", 1.0)]},
                "next_page_token": "more"
            }),
        ),
        (
            200,
            json!({
                "bars": {"AAPL": [bar("2022-01-04T05:00:00Z", 2.0), bar("2022-01-05T05:00:00Z", 3.0)]},
                "next_page_token": "even-more"
            }),
        ),
    ]);
    let client = MarketDataClient::with_transport(stub.clone(), BASE_URL, false);
    let request = GetStockBarsRequest::builder()
        .with_symbol_or_symbols("AAPL")
        .with_timeframe(TimeFrame::DAY)
        .with_limit(3)
        .build()
        .unwrap();

    let set = client.get_stock_bars(&request).await.unwrap().model().unwrap();
    assert_eq!(set.total_bars(), 3);

    let calls = stub.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(param(&calls[1], "limit"), Some("2"));
    assert_eq!(
        calls[1].query.iter().filter(|(k, _)| k == "limit").count(),
        1
    );
}

#[tokio::test]
async fn crypto_bars_hit_crypto_endpoint_with_exchanges() {
    let stub = StubTransport::with_responses(vec![(
        200,
        json!({"bars": {"BTC/USD": [bar("2022-01-03T00:00:00Z", 46000.0)]}, "next_page_token": null}),
    )]);
    let client = MarketDataClient::with_transport(stub.clone(), BASE_URL, false);
    let request = GetCryptoBarsRequest::builder()
        .with_symbol_or_symbols("BTC/USD")
        .with_timeframe(TimeFrame::HOUR)
        .with_exchanges([Exchange::Cbse])
        .build()
        .unwrap();

    let set = client.get_crypto_bars(&request).await.unwrap().model().unwrap();
    assert_eq!(set["BTC/USD"][0].close, 46000.0);

    let calls = stub.calls();
    assert_eq!(calls[0].url, format!("{BASE_URL}/v1beta1/crypto/bars"));
    assert_eq!(param(&calls[0], "exchanges"), Some("CBSE"));
    assert_eq!(param(&calls[0], "timeframe"), Some("1Hour"));
}

#[tokio::test]
async fn bars_raw_mode_returns_merged_json() {
    let stub = StubTransport::with_responses(vec![
        (
            200,
            json!({"bars": {"AAPL": [bar("2022-01-03T05:00:00Z", 1.0)]}, "next_page_token": "p2"}),
        ),
        (
            200,
            json!({"bars": {"AAPL": [bar("2022-01-04T05:00:00Z", 2.0)]}, "next_page_token": null}),
        ),
    ]);
    let client = MarketDataClient::with_transport(stub, BASE_URL, true);
    let request = GetStockBarsRequest::new("AAPL", TimeFrame::DAY).unwrap();

    let payload = client.get_stock_bars(&request).await.unwrap();
    let Payload::Raw(raw) = payload else {
        panic!("expected raw payload");
    };
    assert_eq!(
        raw,
        json!({"AAPL": [bar("2022-01-03T05:00:00Z", 1.0), bar("2022-01-04T05:00:00Z", 2.0)]})
    );
}

#[tokio::test]
async fn bars_without_timeframe_fail_before_any_call() {
    let stub = StubTransport::default();
    let client = MarketDataClient::with_transport(stub.clone(), BASE_URL, false);
    let request = GetStockBarsRequest::builder()
        .with_symbol_or_symbols("AAPL")
        .build()
        .unwrap();

    let result = client.get_stock_bars(&request).await;
    assert!(matches!(result, Err(AppError::InvalidInput(_))));
    assert!(stub.calls().is_empty());
}

#[tokio::test]
async fn bars_error_status_surfaces_api_error() {
    let stub = StubTransport::with_responses(vec![(
        422,
        json!({"code": 42210000, "message": "invalid timeframe"}),
    )]);
    let client = MarketDataClient::with_transport(stub, BASE_URL, false);
    let request = GetStockBarsRequest::new("AAPL", TimeFrame::DAY).unwrap();

    let err = client.get_stock_bars(&request).await.unwrap_err();
    assert_eq!(err.status_code(), Some(422));
}

#[tokio::test]
async fn rest_client_post_and_delete() {
    let stub = StubTransport::with_responses(vec![
        (200, json!({"ok": true})),
        (204, Value::Null),
    ]);
    let rest = RestClient::new(stub.clone(), BASE_URL, false);

    let created = rest
        .post_json("v1", "/accounts", &json!({"contact": {}}))
        .await
        .unwrap();
    assert_eq!(created, json!({"ok": true}));

    let deleted = rest.delete_json("v1", "accounts/abc").await.unwrap();
    assert_eq!(deleted, Value::Null);

    let calls = stub.calls();
    assert_eq!(calls[0].method, "POST");
    assert_eq!(calls[0].url, format!("{BASE_URL}/v1/accounts"));
    assert_eq!(calls[1].method, "DELETE");
    assert_eq!(calls[1].url, format!("{BASE_URL}/v1/accounts/abc"));
    assert!(!rest.raw_data());
    assert_eq!(rest.base_url(), BASE_URL);
}
