use crate::error::AppError;
use crate::model::responses::Payload;
use crate::presentation::account::Account;
use crate::utils::id::IntoAccountId;
use async_trait::async_trait;

/// Interface for the broker account service
#[async_trait]
pub trait AccountService: Send + Sync {
    /// Gets a single account by identifier
    ///
    /// # Arguments
    /// * `account_id` - A [`uuid::Uuid`] or a UUID formatted string
    ///
    /// # Returns
    /// * The account, typed or raw depending on the client mode
    /// * [`AppError::InvalidInput`] if the id is not a UUID; no request is sent
    /// * [`AppError::Api`] if the service answers with a non-success status
    async fn get_account_by_id<I>(&self, account_id: I) -> Result<Payload<Account>, AppError>
    where
        I: IntoAccountId + Send;
}
