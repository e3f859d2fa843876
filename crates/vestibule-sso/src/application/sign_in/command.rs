use crate::domain::identity::{AccessScope, IdentityRecord};

#[derive(Debug, Clone)]
pub struct SignInCommand {
    pub identity: IdentityRecord,
    pub access_scope: AccessScope,
}
