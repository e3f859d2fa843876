//! Application-side half of a SAML SSO integration: takes a verified
//! external identity, reconciles it against the host's user store
//! (lookup, link-or-provision, detail and role sync) and establishes the
//! authenticated local session through the host's session collaborator.

pub mod application;
pub mod domain;

pub use application::{
    sign_in::{command::SignInCommand, ReconciliationOutcome, SignInUseCase},
    Application,
};
pub use domain::{
    identity::{AccessScope, IdentityRecord, OrganizationMembership},
    role::{Role, RoleAssignmentPolicy},
    session::SessionEstablisher,
    user::{LocalUserId, LocalUserRecord, LocalUserStore, LocalUserUpdate, NewLocalUser, UsernameFormatter},
};
