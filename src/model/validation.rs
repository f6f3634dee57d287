/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/

//! Non-empty request contract.
//!
//! A request that parameterizes a query must carry at least one field the
//! caller explicitly supplied. Presence is tracked per field through the
//! [`Presence`] trait instead of comparing values against their defaults, so
//! fields holding types without a meaningful equality still count as set
//! once supplied.

use crate::error::AppError;

/// Message carried by [`AppError::Validation`] for vacuous requests
pub const EMPTY_REQUEST_MESSAGE: &str = "empty request body";

/// Whether a field value was explicitly supplied
pub trait Presence {
    /// Returns `true` if the field holds a caller supplied value
    fn is_present(&self) -> bool;
}

impl<T> Presence for Option<T> {
    fn is_present(&self) -> bool {
        self.is_some()
    }
}

impl<T> Presence for Vec<T> {
    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

impl Presence for String {
    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

/// Requests that must not be sent with every field left at its default
pub trait NonEmptyRequest {
    /// Every declared field paired with whether it is present
    fn field_presence(&self) -> Vec<(&'static str, bool)>;

    /// Names of the fields that are present
    fn present_fields(&self) -> Vec<&'static str> {
        self.field_presence()
            .into_iter()
            .filter_map(|(name, present)| present.then_some(name))
            .collect()
    }

    /// True when no field is present
    fn is_empty(&self) -> bool {
        self.field_presence().iter().all(|(_, present)| !present)
    }

    /// Fails with [`AppError::Validation`] when the request is vacuous
    fn ensure_non_empty(&self) -> Result<(), AppError> {
        if self.is_empty() {
            Err(AppError::Validation(EMPTY_REQUEST_MESSAGE.to_string()))
        } else {
            Ok(())
        }
    }
}
