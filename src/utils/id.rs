/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
use crate::error::AppError;
use serde_json::Value;
use uuid::Uuid;

/// Conversion of caller supplied identifiers into an account [`Uuid`]
///
/// Accepted inputs are UUID values and UUID formatted strings. Everything
/// else, integers included, is rejected with [`AppError::InvalidInput`] so
/// that a malformed id never reaches the network.
pub trait IntoAccountId {
    /// Validates and converts `self` into a UUID
    fn into_account_id(self) -> Result<Uuid, AppError>;
}

/// Parses a UUID formatted string
///
/// # Examples
/// ```
/// use alpaca_client::utils::id::parse_uuid;
/// assert!(parse_uuid("2a87c088-ffb6-472b-a4a3-cd9305c8605c").is_ok());
/// assert!(parse_uuid("not a valid uuid").is_err());
/// ```
pub fn parse_uuid(value: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(value)
        .map_err(|e| AppError::InvalidInput(format!("'{value}' is not a valid UUID: {e}")))
}

impl IntoAccountId for Uuid {
    fn into_account_id(self) -> Result<Uuid, AppError> {
        Ok(self)
    }
}

impl IntoAccountId for &Uuid {
    fn into_account_id(self) -> Result<Uuid, AppError> {
        Ok(*self)
    }
}

impl IntoAccountId for &str {
    fn into_account_id(self) -> Result<Uuid, AppError> {
        parse_uuid(self)
    }
}

impl IntoAccountId for String {
    fn into_account_id(self) -> Result<Uuid, AppError> {
        parse_uuid(&self)
    }
}

impl IntoAccountId for &String {
    fn into_account_id(self) -> Result<Uuid, AppError> {
        parse_uuid(self)
    }
}

impl IntoAccountId for &Value {
    fn into_account_id(self) -> Result<Uuid, AppError> {
        match self {
            Value::String(s) => parse_uuid(s),
            other => Err(AppError::InvalidInput(format!(
                "account id must be a UUID or UUID formatted string, got {other}"
            ))),
        }
    }
}

macro_rules! reject_integer_account_id {
    ($($t:ty),*) => {
        $(
            impl IntoAccountId for $t {
                fn into_account_id(self) -> Result<Uuid, AppError> {
                    Err(AppError::InvalidInput(format!(
                        "account id must be a UUID or UUID formatted string, got integer {self}"
                    )))
                }
            }
        )*
    };
}

reject_integer_account_id!(i8, i16, i32, i64, u8, u16, u32, u64, usize, isize);
