/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
use crate::constants::WIRE_DATETIME_FORMAT;
use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};

/// Formats a date-time as `YYYY-MM-DDTHH:MM:SSZ` in UTC, truncated to seconds
///
/// # Examples
/// ```
/// use alpaca_client::model::utils::datetime_to_wire;
/// use chrono::{TimeZone, Utc};
///
/// let dt = Utc.with_ymd_and_hms(2022, 1, 21, 21, 25, 26).unwrap();
/// assert_eq!(datetime_to_wire(&dt), "2022-01-21T21:25:26Z");
/// ```
pub fn datetime_to_wire<Tz: TimeZone>(dt: &DateTime<Tz>) -> String {
    dt.with_timezone(&Utc)
        .format(WIRE_DATETIME_FORMAT)
        .to_string()
}

/// Formats a timezone-naive date-time, interpreting it as UTC
pub fn naive_datetime_to_wire(dt: &NaiveDateTime) -> String {
    dt.format(WIRE_DATETIME_FORMAT).to_string()
}
