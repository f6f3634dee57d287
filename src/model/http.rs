/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
use crate::application::config::Credentials;
use crate::constants::{API_KEY_HEADER, API_SECRET_HEADER, USER_AGENT};
use crate::error::AppError;
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// Status and decoded body of an HTTP exchange
#[derive(Debug, Clone, PartialEq)]
pub struct TransportResponse {
    /// HTTP status
    pub status: StatusCode,
    /// JSON body; `Null` when empty, `String` when the body was not JSON
    pub body: Value,
}

impl TransportResponse {
    /// Builds a response from a status and raw body text
    pub fn from_text(status: StatusCode, text: &str) -> Self {
        let body = if text.trim().is_empty() {
            Value::Null
        } else {
            serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
        };
        Self { status, body }
    }

    /// True for 2xx statuses
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

/// HTTP transport used by the clients
///
/// Implementations perform exactly one exchange per call; they do not retry.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// GET `url` with query string parameters
    async fn get(&self, url: &str, query: &[(String, String)])
    -> Result<TransportResponse, AppError>;

    /// POST a JSON body to `url`
    async fn post(&self, url: &str, body: &Value) -> Result<TransportResponse, AppError>;

    /// DELETE `url`
    async fn delete(&self, url: &str) -> Result<TransportResponse, AppError>;
}

/// How credentials are attached to outgoing requests
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AuthScheme {
    /// HTTP basic auth with key id and secret (Broker API)
    Basic,
    /// `APCA-API-KEY-ID` / `APCA-API-SECRET-KEY` headers (Market Data API)
    KeyHeaders,
}

/// [`HttpTransport`] backed by `reqwest`
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http_client: Client,
    credentials: Credentials,
    auth: AuthScheme,
}

impl ReqwestTransport {
    /// Creates a transport with the given credentials, auth scheme and timeout
    pub fn new(
        credentials: Credentials,
        auth: AuthScheme,
        timeout_secs: u64,
    ) -> Result<Self, AppError> {
        let http_client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;
        Ok(Self {
            http_client,
            credentials,
            auth,
        })
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.auth {
            AuthScheme::Basic => request.basic_auth(
                &self.credentials.api_key,
                Some(&self.credentials.secret_key),
            ),
            AuthScheme::KeyHeaders => request
                .header(API_KEY_HEADER, &self.credentials.api_key)
                .header(API_SECRET_HEADER, &self.credentials.secret_key),
        }
    }

    async fn send(&self, request: RequestBuilder) -> Result<TransportResponse, AppError> {
        let response = self
            .authorize(request)
            .header("Accept", "application/json")
            .send()
            .await?;
        let status = response.status();
        let text = response.text().await?;
        debug!("Response status: {} ({} bytes)", status, text.len());
        Ok(TransportResponse::from_text(status, &text))
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(
        &self,
        url: &str,
        query: &[(String, String)],
    ) -> Result<TransportResponse, AppError> {
        let mut request = self.http_client.get(url);
        if !query.is_empty() {
            request = request.query(query);
        }
        self.send(request).await
    }

    async fn post(&self, url: &str, body: &Value) -> Result<TransportResponse, AppError> {
        self.send(self.http_client.post(url).json(body)).await
    }

    async fn delete(&self, url: &str) -> Result<TransportResponse, AppError> {
        self.send(self.http_client.delete(url)).await
    }
}
