use std::sync::Arc;

use bon::Builder;

use crate::domain::{
    role::{OrganizationRolePolicy, RoleAssignmentPolicy},
    session::SessionEstablisher,
    user::{AlphanumericUsernameFormatter, LocalUserStore, UsernameFormatter},
};

use self::sign_in::{SignInUseCase, SignInUseCaseImpl};

pub mod sign_in;

/// Wiring point for the host. The user store and session establisher are
/// the host's collaborators; role policy and username formatter default
/// to the built-in implementations and can be swapped without
/// subclassing anything.
#[derive(Builder)]
pub struct Application {
    user_store: Arc<dyn LocalUserStore + Sync + Send>,
    session_establisher: Arc<dyn SessionEstablisher + Sync + Send>,
    #[builder(default = Arc::new(OrganizationRolePolicy))]
    role_policy: Arc<dyn RoleAssignmentPolicy + Sync + Send>,
    #[builder(default = Arc::new(AlphanumericUsernameFormatter))]
    username_formatter: Arc<dyn UsernameFormatter + Sync + Send>,
}

impl Application {
    pub fn sign_in(&self) -> impl SignInUseCase {
        SignInUseCaseImpl::new(
            self.user_store.clone(),
            self.session_establisher.clone(),
            self.role_policy.clone(),
            self.username_formatter.clone(),
        )
    }
}
