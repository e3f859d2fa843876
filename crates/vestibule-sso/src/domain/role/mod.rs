use std::collections::HashSet;

#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};

use crate::domain::identity::IdentityRecord;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    #[serde(rename = "user")]
    User,
    #[serde(rename = "admin")]
    Admin,
}

/// Organization role names that grant local admin access.
const ADMIN_ORGANIZATION_ROLES: [&str; 2] = ["Admin", "Super Admin"];

#[cfg_attr(test, automock)]
pub trait RoleAssignmentPolicy {
    fn assign_roles(&self, identity: &IdentityRecord) -> HashSet<Role>;
}

/// Derives the local role set from the identity's organization
/// memberships. An application owner is always an admin. Otherwise the
/// last membership in the sequence decides: an admin grant from an
/// earlier organization is dropped when a later membership carries a
/// non-admin role.
///
/// TODO: confirm with product whether any admin membership should grant
/// admin regardless of position; the current rule matches the shipped
/// behavior.
pub struct OrganizationRolePolicy;

impl RoleAssignmentPolicy for OrganizationRolePolicy {
    fn assign_roles(&self, identity: &IdentityRecord) -> HashSet<Role> {
        if identity.app_owner {
            return HashSet::from([Role::User, Role::Admin]);
        }

        let mut roles = HashSet::from([Role::User]);
        for organization in &identity.organizations {
            if ADMIN_ORGANIZATION_ROLES.contains(&organization.role.as_str()) {
                roles = HashSet::from([Role::User, Role::Admin]);
            } else {
                roles = HashSet::from([Role::User]);
            }
        }

        roles
    }
}

#[cfg(test)]
mod test {
    use maplit::hashset;

    use super::{OrganizationRolePolicy, Role, RoleAssignmentPolicy};
    use crate::domain::identity::{IdentityRecord, OrganizationMembership};

    fn identity_with_organizations(roles: &[&str]) -> IdentityRecord {
        IdentityRecord::builder()
            .external_uid("usr-1234")
            .email("john.doe@example.com")
            .organizations(roles.iter().map(|role| OrganizationMembership { role: (*role).to_owned() }).collect())
            .build()
    }

    #[test]
    fn when_identity_owns_the_application_then_policy_returns_admin_without_consulting_organizations() {
        let identity = IdentityRecord::builder()
            .external_uid("usr-1234")
            .email("john.doe@example.com")
            .app_owner(true)
            .organizations(vec![OrganizationMembership { role: "Member".to_owned() }])
            .build();

        let roles = OrganizationRolePolicy.assign_roles(&identity);

        assert_eq!(roles, hashset![Role::User, Role::Admin]);
    }

    #[test]
    fn when_identity_has_no_organizations_then_policy_returns_user_only() {
        let roles = OrganizationRolePolicy.assign_roles(&identity_with_organizations(&[]));

        assert_eq!(roles, hashset![Role::User]);
    }

    #[test]
    fn when_last_organization_is_admin_then_policy_returns_admin() {
        let roles = OrganizationRolePolicy.assign_roles(&identity_with_organizations(&["Member", "Super Admin"]));

        assert_eq!(roles, hashset![Role::User, Role::Admin]);
    }

    #[test]
    fn when_admin_organization_is_followed_by_member_then_policy_downgrades_to_user() {
        let roles = OrganizationRolePolicy.assign_roles(&identity_with_organizations(&["Admin", "Member"]));

        assert_eq!(roles, hashset![Role::User]);
    }

    #[test]
    fn when_called_twice_with_the_same_identity_then_policy_returns_the_same_roles() {
        let identity = identity_with_organizations(&["Admin"]);

        assert_eq!(OrganizationRolePolicy.assign_roles(&identity), OrganizationRolePolicy.assign_roles(&identity));
    }
}
