use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::domain::{
    identity::{AccessScope, IdentityRecord},
    role::RoleAssignmentPolicy,
    session::{self, SessionEstablisher},
    user::{
        self, credential, LocalUserId, LocalUserRecord, LocalUserStore, LocalUserUpdate, NewLocalUser,
        UsernameFormatter,
    },
};

use self::command::SignInCommand;

pub mod command;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReconciliationOutcome {
    Resolved(LocalUserId),
    /// No matching account and provisioning is not permitted. Ordinary
    /// control flow, distinguished from infrastructure failures.
    Denied,
}

#[async_trait]
pub trait SignInUseCase {
    async fn reconcile(&self, cmd: &SignInCommand) -> Result<ReconciliationOutcome>;

    async fn reconcile_and_establish_session(&self, cmd: &SignInCommand) -> Result<bool>;
}

pub struct SignInUseCaseImpl {
    user_store: Arc<dyn LocalUserStore + Sync + Send>,
    session_establisher: Arc<dyn SessionEstablisher + Sync + Send>,
    role_policy: Arc<dyn RoleAssignmentPolicy + Sync + Send>,
    username_formatter: Arc<dyn UsernameFormatter + Sync + Send>,
}

impl SignInUseCaseImpl {
    pub fn new(
        user_store: Arc<dyn LocalUserStore + Sync + Send>,
        session_establisher: Arc<dyn SessionEstablisher + Sync + Send>,
        role_policy: Arc<dyn RoleAssignmentPolicy + Sync + Send>,
        username_formatter: Arc<dyn UsernameFormatter + Sync + Send>,
    ) -> Self {
        Self { user_store, session_establisher, role_policy, username_formatter }
    }

    async fn provision_local_user(&self, identity: &IdentityRecord) -> Result<LocalUserRecord> {
        let user = NewLocalUser {
            display_name: self.username_formatter.format_display_name(identity),
            email: identity.email.to_owned(),
            credential: credential::generate_bootstrap_credential(),
            active: true,
            roles: self.role_policy.assign_roles(identity),
        };

        match self.user_store.insert(user).await {
            Ok(created) => {
                info!("local user(id: {}) provisioned for external uid({}).", created.id, identity.external_uid);
                Ok(created)
            }
            Err(user::Error::UserConflicted) => self.resolve_after_insert_conflict(identity).await,
            Err(e) => Err(e.into()),
        }
    }

    /// A conflicting insert means another callback for the same identity
    /// won the race; its record must now be visible to the lookups.
    async fn resolve_after_insert_conflict(&self, identity: &IdentityRecord) -> Result<LocalUserRecord> {
        warn!("insert conflicted for external uid({}); retrying correlation lookups.", identity.external_uid);

        if let Some(user) = self.user_store.find_by_external_uid(&identity.external_uid).await? {
            return Ok(user);
        }
        if let Some(user) = self.user_store.find_by_email(&identity.email).await? {
            return Ok(user);
        }

        Err(Error::UnresolvedAccountConflict { external_uid: identity.external_uid.to_owned() })
    }
}

#[async_trait]
impl SignInUseCase for SignInUseCaseImpl {
    async fn reconcile(&self, cmd: &SignInCommand) -> Result<ReconciliationOutcome> {
        let identity = &cmd.identity;

        let resolved = match self.user_store.find_by_external_uid(&identity.external_uid).await? {
            Some(user) => user,
            None => match self.user_store.find_by_email(&identity.email).await? {
                Some(user) => user,
                None => {
                    if cmd.access_scope != AccessScope::Private {
                        info!("sign-in denied for external uid({}): unknown identity.", identity.external_uid);
                        return Ok(ReconciliationOutcome::Denied);
                    }

                    self.provision_local_user(identity).await?
                }
            },
        };

        if !resolved.is_linked() {
            self.user_store
                .update_fields(
                    &resolved.id,
                    LocalUserUpdate { external_uid: Some(identity.external_uid.to_owned()), ..Default::default() },
                )
                .await?;

            info!("local user(id: {}) linked to external uid({}).", resolved.id, identity.external_uid);
        }

        self.user_store
            .update_fields(
                &resolved.id,
                LocalUserUpdate {
                    display_name: Some(self.username_formatter.format_display_name(identity)),
                    email: Some(identity.email.to_owned()),
                    roles: Some(self.role_policy.assign_roles(identity)),
                    ..Default::default()
                },
            )
            .await?;

        Ok(ReconciliationOutcome::Resolved(resolved.id))
    }

    async fn reconcile_and_establish_session(&self, cmd: &SignInCommand) -> Result<bool> {
        let user_id = match self.reconcile(cmd).await? {
            ReconciliationOutcome::Resolved(user_id) => user_id,
            ReconciliationOutcome::Denied => return Ok(false),
        };

        let established = self.session_establisher.establish(&user_id).await?;
        if !established {
            warn!("local user(id: {user_id}) disappeared before session establishment.");
        }

        Ok(established)
    }
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("conflicting local account for external uid({external_uid}) could not be resolved")]
    UnresolvedAccountConflict { external_uid: String },
    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl From<user::Error> for Error {
    fn from(value: user::Error) -> Self {
        match value {
            user::Error::UserConflicted => Self::Anyhow(value.into()),
            user::Error::Anyhow(e) => Self::Anyhow(e),
        }
    }
}

impl From<session::Error> for Error {
    fn from(value: session::Error) -> Self {
        match value {
            session::Error::Anyhow(e) => Self::Anyhow(e),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
