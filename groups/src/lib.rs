//! Group WebID trust checks.
//!
//! Two independent checks, both built on dereferencing a group document:
//!
//! - [`GroupMembershipChecker`]: an ACL rule names `acl:agentGroup` groups;
//!   a requesting WebID matches if it is one of them or a `vcard:hasMember`
//!   of one of them.
//! - [`GroupWebIdStore`]: a WebID not linked to an account may still be used
//!   with it if it is a group WebID whose document names this server as
//!   `solid:oidcIssuer` and lists a WebID the account already owns.
//!
//! Every failure (unreachable document, bad syntax, missing triples, store
//! errors) resolves to `false`.

pub mod client;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod link;
pub mod membership;
pub mod ntriples;

pub use client::HttpGraphFetcher;
pub use config::{GroupTrustConfig, LinkEntry};
pub use error::{ConfigError, FetchError};
pub use fetcher::GraphFetcher;
pub use link::{DirectWebIdStore, GroupWebIdStore, WebIdStore};
pub use membership::{AccessChecker, AccessRule, AclRule, GroupMembershipChecker};
