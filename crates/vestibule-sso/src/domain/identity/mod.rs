use bon::Builder;
use serde::{Deserialize, Serialize};

/// Verified identity attributes handed over by the assertion-handling
/// layer. Constructed once per authentication attempt.
#[derive(Debug, Clone, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
pub struct IdentityRecord {
    /// Identifier issued by the identity provider. Never empty; this is
    /// the durable correlation key into local accounts.
    pub external_uid: String,
    pub email: String,
    #[serde(default)]
    #[builder(default)]
    pub name: String,
    #[serde(default)]
    #[builder(default)]
    pub surname: String,
    /// Whether this identity owns the application instance.
    #[serde(default)]
    #[builder(default)]
    pub app_owner: bool,
    /// Memberships in provider-side organizations, in assertion order.
    #[serde(default)]
    #[builder(default)]
    pub organizations: Vec<OrganizationMembership>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrganizationMembership {
    pub role: String,
}

/// Gate for self-provisioning, supplied by the caller alongside the
/// identity. Only a private scope lets unknown identities create a local
/// account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccessScope {
    #[serde(rename = "private")]
    Private,
    #[serde(rename = "public")]
    Public,
}

#[cfg(test)]
mod test {
    use super::IdentityRecord;

    #[test]
    fn when_attribute_payload_is_complete_then_identity_record_deserializes_every_field() {
        let payload = r#"{
            "external_uid": "usr-1234",
            "email": "john.doe@example.com",
            "name": "John",
            "surname": "Doe",
            "app_owner": true,
            "organizations": [{"role": "Admin"}, {"role": "Member"}]
        }"#;

        let identity: IdentityRecord = serde_json::from_str(payload).expect("payload should deserialize");

        assert_eq!(identity.external_uid, "usr-1234");
        assert_eq!(identity.email, "john.doe@example.com");
        assert_eq!(identity.name, "John");
        assert_eq!(identity.surname, "Doe");
        assert!(identity.app_owner);
        assert_eq!(identity.organizations.len(), 2);
        assert_eq!(identity.organizations[1].role, "Member");
    }

    #[test]
    fn when_attribute_payload_omits_optional_fields_then_identity_record_deserializes_with_defaults() {
        let payload = r#"{"external_uid": "usr-1234", "email": "john.doe@example.com"}"#;

        let identity: IdentityRecord = serde_json::from_str(payload).expect("payload should deserialize");

        assert_eq!(identity.name, "");
        assert_eq!(identity.surname, "");
        assert!(!identity.app_owner);
        assert!(identity.organizations.is_empty());
    }
}
