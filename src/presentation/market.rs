/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
use crate::error::AppError;
use chrono::{DateTime, Utc};
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;
use std::ops::Index;
use std::str::FromStr;

/// Unit of a bar aggregation window
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TimeFrameUnit {
    /// Minutes
    Minute,
    /// Hours
    Hour,
    /// Days
    Day,
    /// Weeks
    Week,
    /// Months
    Month,
}

impl TimeFrameUnit {
    fn suffix(self) -> &'static str {
        match self {
            TimeFrameUnit::Minute => "Min",
            TimeFrameUnit::Hour => "Hour",
            TimeFrameUnit::Day => "Day",
            TimeFrameUnit::Week => "Week",
            TimeFrameUnit::Month => "Month",
        }
    }
}

impl fmt::Display for TimeFrameUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

/// Aggregation window for bars, e.g. 5 minutes or 1 day
///
/// Rendered on the wire as `{amount}{unit}`: `5Min`, `1Hour`, `1Day`,
/// `1Week`, `3Month`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct TimeFrame {
    amount: u32,
    unit: TimeFrameUnit,
}

impl TimeFrame {
    /// One minute bars
    pub const MINUTE: TimeFrame = TimeFrame {
        amount: 1,
        unit: TimeFrameUnit::Minute,
    };
    /// One hour bars
    pub const HOUR: TimeFrame = TimeFrame {
        amount: 1,
        unit: TimeFrameUnit::Hour,
    };
    /// One day bars
    pub const DAY: TimeFrame = TimeFrame {
        amount: 1,
        unit: TimeFrameUnit::Day,
    };
    /// One week bars
    pub const WEEK: TimeFrame = TimeFrame {
        amount: 1,
        unit: TimeFrameUnit::Week,
    };
    /// One month bars
    pub const MONTH: TimeFrame = TimeFrame {
        amount: 1,
        unit: TimeFrameUnit::Month,
    };

    /// Creates a validated time frame
    ///
    /// Minutes accept 1-59, hours 1-23, days and weeks only 1, and months
    /// 1, 2, 3, 6 or 12.
    pub fn new(amount: u32, unit: TimeFrameUnit) -> Result<Self, AppError> {
        let valid = match unit {
            TimeFrameUnit::Minute => (1..=59).contains(&amount),
            TimeFrameUnit::Hour => (1..=23).contains(&amount),
            TimeFrameUnit::Day | TimeFrameUnit::Week => amount == 1,
            TimeFrameUnit::Month => matches!(amount, 1 | 2 | 3 | 6 | 12),
        };
        if !valid {
            return Err(AppError::Validation(format!(
                "invalid time frame amount {amount} for unit {unit}"
            )));
        }
        Ok(Self { amount, unit })
    }

    /// Number of units per bar
    pub fn amount(&self) -> u32 {
        self.amount
    }

    /// Unit of the window
    pub fn unit(&self) -> TimeFrameUnit {
        self.unit
    }
}

impl fmt::Display for TimeFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.amount, self.unit.suffix())
    }
}

impl FromStr for TimeFrame {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let split = s
            .find(|c: char| !c.is_ascii_digit())
            .ok_or_else(|| AppError::InvalidInput(format!("'{s}' has no time frame unit")))?;
        let (amount, unit) = s.split_at(split);
        let amount = amount
            .parse::<u32>()
            .map_err(|_| AppError::InvalidInput(format!("'{s}' has no time frame amount")))?;
        let unit = match unit {
            "Min" | "T" => TimeFrameUnit::Minute,
            "Hour" | "H" => TimeFrameUnit::Hour,
            "Day" | "D" => TimeFrameUnit::Day,
            "Week" | "W" => TimeFrameUnit::Week,
            "Month" | "M" => TimeFrameUnit::Month,
            other => {
                return Err(AppError::InvalidInput(format!(
                    "unknown time frame unit '{other}'"
                )));
            }
        };
        TimeFrame::new(amount, unit)
    }
}

impl Serialize for TimeFrame {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeFrame {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Corporate action normalisation applied to historical equity prices
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, DisplaySimple, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Adjustment {
    /// No adjustment
    Raw,
    /// Adjusted for splits only
    Split,
    /// Adjusted for dividends only
    Dividend,
    /// Adjusted for splits and dividends
    All,
}

impl Adjustment {
    /// Query string value
    pub fn as_str(&self) -> &'static str {
        match self {
            Adjustment::Raw => "raw",
            Adjustment::Split => "split",
            Adjustment::Dividend => "dividend",
            Adjustment::All => "all",
        }
    }
}

/// Equity market data feed
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, DisplaySimple, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataFeed {
    /// Investors Exchange feed
    Iex,
    /// Securities Information Processor (all US exchanges)
    Sip,
    /// Over-the-counter feed
    Otc,
}

impl DataFeed {
    /// Query string value
    pub fn as_str(&self) -> &'static str {
        match self {
            DataFeed::Iex => "iex",
            DataFeed::Sip => "sip",
            DataFeed::Otc => "otc",
        }
    }
}

/// Crypto venue
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, DisplaySimple, Serialize, Deserialize)]
pub enum Exchange {
    /// ErisX
    #[serde(rename = "ERSX")]
    Ersx,
    /// FTX US
    #[serde(rename = "FTXU")]
    Ftxu,
    /// Coinbase
    #[serde(rename = "CBSE")]
    Cbse,
}

impl Exchange {
    /// Query string value
    pub fn as_str(&self) -> &'static str {
        match self {
            Exchange::Ersx => "ERSX",
            Exchange::Ftxu => "FTXU",
            Exchange::Cbse => "CBSE",
        }
    }
}

/// A single OHLCV bar
#[derive(Debug, Clone, PartialEq, DisplaySimple, Serialize, Deserialize)]
pub struct Bar {
    /// Symbol the bar belongs to; filled in from the enclosing response
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub symbol: String,
    /// Start of the bar window
    #[serde(rename = "t")]
    pub timestamp: DateTime<Utc>,
    /// Opening price
    #[serde(rename = "o")]
    pub open: f64,
    /// Highest price
    #[serde(rename = "h")]
    pub high: f64,
    /// Lowest price
    #[serde(rename = "l")]
    pub low: f64,
    /// Closing price
    #[serde(rename = "c")]
    pub close: f64,
    /// Traded volume
    #[serde(rename = "v")]
    pub volume: f64,
    /// Number of trades
    #[serde(rename = "n", default, skip_serializing_if = "Option::is_none")]
    pub trade_count: Option<u64>,
    /// Volume weighted average price
    #[serde(rename = "vw", default, skip_serializing_if = "Option::is_none")]
    pub vwap: Option<f64>,
}

/// Bars keyed by symbol, one ordered list per requested symbol
///
/// Serializes as a plain `{symbol: [bar, ...]}` map. Deserializing fills
/// each bar's `symbol` from its map key.
#[derive(Debug, Clone, Default, PartialEq, DisplaySimple, Serialize)]
#[serde(transparent)]
pub struct BarSet {
    /// Bars per symbol in ascending time order
    pub data: HashMap<String, Vec<Bar>>,
}

impl<'de> Deserialize<'de> for BarSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let mut data = HashMap::<String, Vec<Bar>>::deserialize(deserializer)?;
        for (symbol, bars) in data.iter_mut() {
            for bar in bars.iter_mut() {
                bar.symbol.clone_from(symbol);
            }
        }
        Ok(BarSet { data })
    }
}

impl BarSet {
    /// Bars for `symbol`, if any were returned
    pub fn get(&self, symbol: &str) -> Option<&Vec<Bar>> {
        self.data.get(symbol)
    }

    /// Symbols present in the set, sorted
    pub fn symbols(&self) -> Vec<&str> {
        let mut symbols: Vec<&str> = self.data.keys().map(String::as_str).collect();
        symbols.sort_unstable();
        symbols
    }

    /// Total number of bars across every symbol
    pub fn total_bars(&self) -> usize {
        self.data.values().map(Vec::len).sum()
    }

    /// True when no bars were returned
    pub fn is_empty(&self) -> bool {
        self.total_bars() == 0
    }
}

impl Index<&str> for BarSet {
    type Output = Vec<Bar>;

    fn index(&self, symbol: &str) -> &Self::Output {
        &self.data[symbol]
    }
}
