use std::collections::HashSet;
use std::fmt;

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use zeroize::Zeroizing;

use crate::domain::role::Role;

pub(crate) mod credential;
pub mod username;

pub use username::{AlphanumericUsernameFormatter, UsernameFormatter};

/// Store-assigned identifier of a local account. Opaque to this crate;
/// integer, UUID and ULID keyed stores all render into it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LocalUserId(String);

impl LocalUserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for LocalUserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The slice of the store's user record this crate reads and writes. The
/// account credential stays inside the store and is never read back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalUserRecord {
    pub id: LocalUserId,
    /// Set at most once; a non-empty value is never overwritten.
    pub external_uid: Option<String>,
    pub email: String,
    pub display_name: String,
    pub roles: HashSet<Role>,
    pub active: bool,
}

impl LocalUserRecord {
    pub(crate) fn is_linked(&self) -> bool {
        self.external_uid.as_deref().is_some_and(|external_uid| !external_uid.is_empty())
    }
}

/// Creation fields for a provisioned account. The external uid is absent
/// on purpose: linking is a separate write-once update, shared with the
/// email-matched path.
#[derive(Clone)]
pub struct NewLocalUser {
    pub display_name: String,
    pub email: String,
    pub credential: Zeroizing<String>,
    pub active: bool,
    pub roles: HashSet<Role>,
}

/// Field patch for `update_fields`; unset fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocalUserUpdate {
    pub external_uid: Option<String>,
    pub display_name: Option<String>,
    pub email: Option<String>,
    pub roles: Option<HashSet<Role>>,
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait LocalUserStore {
    async fn find_by_external_uid(&self, external_uid: &str) -> Result<Option<LocalUserRecord>>;

    async fn find_by_email(&self, email: &str) -> Result<Option<LocalUserRecord>>;

    async fn insert(&self, user: NewLocalUser) -> Result<LocalUserRecord>;

    async fn update_fields(&self, id: &LocalUserId, update: LocalUserUpdate) -> Result<()>;
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("user with a conflicting unique field already exists")]
    UserConflicted,
    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
