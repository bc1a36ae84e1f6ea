//! The handful of IRIs the group trust checks rely on.

/// `acl:agentGroup` — a group granted access by an ACL rule.
pub const ACL_AGENT_GROUP: &str = "http://www.w3.org/ns/auth/acl#agentGroup";

/// `vcard:hasMember` — a WebID belonging to a group.
pub const VCARD_HAS_MEMBER: &str = "http://www.w3.org/2006/vcard/ns#hasMember";

/// `solid:oidcIssuer` — an identity provider allowed to authenticate a WebID.
pub const SOLID_OIDC_ISSUER: &str = "http://www.w3.org/ns/solid/terms#oidcIssuer";
