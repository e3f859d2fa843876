use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::domain::user::LocalUserId;

#[cfg_attr(test, automock)]
#[async_trait]
pub trait SessionEstablisher {
    /// Finalizes an authenticated session for the resolved user. Returns
    /// `Ok(false)` when the id no longer resolves to a user.
    async fn establish(&self, user_id: &LocalUserId) -> Result<bool>;
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
