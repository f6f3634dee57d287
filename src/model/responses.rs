/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
use crate::error::AppError;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Result of a client call: a typed model, or the untouched JSON when the
/// client runs in raw-data mode
#[derive(Debug, Clone, PartialEq)]
pub enum Payload<T> {
    /// Parsed model
    Model(T),
    /// JSON exactly as received
    Raw(Value),
}

impl<T> Payload<T> {
    /// True for [`Payload::Raw`]
    pub fn is_raw(&self) -> bool {
        matches!(self, Payload::Raw(_))
    }

    /// Borrows the model if this payload holds one
    pub fn as_model(&self) -> Option<&T> {
        match self {
            Payload::Model(m) => Some(m),
            Payload::Raw(_) => None,
        }
    }

    /// Borrows the JSON if this payload is raw
    pub fn as_raw(&self) -> Option<&Value> {
        match self {
            Payload::Model(_) => None,
            Payload::Raw(v) => Some(v),
        }
    }
}

impl<T: DeserializeOwned> Payload<T> {
    /// Returns the typed model, parsing raw JSON if needed
    pub fn model(self) -> Result<T, AppError> {
        match self {
            Payload::Model(m) => Ok(m),
            Payload::Raw(v) => Ok(serde_json::from_value(v)?),
        }
    }
}

impl<T: Serialize> Payload<T> {
    /// Returns the JSON form, serializing the model if needed
    pub fn raw(self) -> Result<Value, AppError> {
        match self {
            Payload::Model(m) => Ok(serde_json::to_value(m)?),
            Payload::Raw(v) => Ok(v),
        }
    }
}

/// One page of a bars response: `{"bars": {symbol: [...]}, "next_page_token": ...}`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BarsPage {
    /// Raw bars per symbol
    pub bars: Map<String, Value>,
    /// Token for the following page, if any
    pub next_page_token: Option<String>,
}

impl BarsPage {
    /// Splits a bars response body into its parts
    ///
    /// `bars` may be `null` when the range holds no data.
    pub fn from_value(body: Value) -> Result<Self, AppError> {
        let Value::Object(mut obj) = body else {
            return Err(AppError::Deserialization(
                "bars response is not a JSON object".to_string(),
            ));
        };
        let bars = match obj.remove("bars") {
            Some(Value::Object(map)) => map,
            Some(Value::Null) | None => Map::new(),
            Some(other) => {
                return Err(AppError::Deserialization(format!(
                    "unexpected bars field: {other}"
                )));
            }
        };
        let next_page_token = obj
            .remove("next_page_token")
            .and_then(|v| v.as_str().map(str::to_string))
            .filter(|t| !t.is_empty());
        Ok(Self {
            bars,
            next_page_token,
        })
    }

    /// Number of bars on this page
    pub fn len(&self) -> usize {
        self.bars
            .values()
            .map(|v| v.as_array().map_or(0, Vec::len))
            .sum()
    }

    /// True when the page carries no bars
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
