//! Group membership access checks.
//!
//! An ACL rule can grant access to `acl:agentGroup` objects. A requesting
//! WebID matches such a rule if it is one of those groups, or if the group
//! document lists it as `vcard:hasMember`.

use async_trait::async_trait;
use futures_util::stream::{FuturesUnordered, StreamExt};
use grouptrust_types::{vocab, Credentials, Graph, Term, WebId};

use crate::fetcher::GraphFetcher;

/// A rule handed over by the rule evaluation engine.
pub trait AccessRule: Send + Sync {
    /// The groups this rule grants access to.
    fn group_objects(&self) -> Vec<WebId>;
}

/// A rule node inside an ACL graph.
#[derive(Clone, Debug)]
pub struct AclRule {
    pub acl: Graph,
    pub rule: Term,
}

impl AclRule {
    pub fn new(acl: Graph, rule: Term) -> Self {
        Self { acl, rule }
    }
}

impl AccessRule for AclRule {
    /// Named-node objects of `(rule, acl:agentGroup, ?)`, first-seen order.
    fn group_objects(&self) -> Vec<WebId> {
        let predicate = Term::named(vocab::ACL_AGENT_GROUP);
        let mut groups: Vec<WebId> = Vec::new();
        for object in self.acl.objects(&self.rule, &predicate) {
            if let Some(iri) = object.as_named() {
                let group = WebId::new(iri);
                if !groups.contains(&group) {
                    groups.push(group);
                }
            }
        }
        groups
    }
}

/// Decides whether credentials satisfy a rule.
#[async_trait]
pub trait AccessChecker: Send + Sync {
    async fn check(&self, rule: &dyn AccessRule, credentials: &Credentials) -> bool;
}

/// Grants access to members of the groups named by a rule.
///
/// A WebID equal to one of the groups also matches, so a group WebID can
/// authenticate as itself.
pub struct GroupMembershipChecker<F> {
    fetcher: F,
}

impl<F: GraphFetcher> GroupMembershipChecker<F> {
    pub fn new(fetcher: F) -> Self {
        Self { fetcher }
    }

    /// `true` if the agent is one of the rule's groups or a member of any.
    ///
    /// Group documents are fetched concurrently; the first confirmed
    /// membership wins and the remaining fetches are dropped. A failed fetch
    /// only rules out that one group.
    pub async fn evaluate(&self, rule: &dyn AccessRule, credentials: &Credentials) -> bool {
        let Some(agent) = credentials.agent.as_ref() else {
            return false;
        };

        let groups = rule.group_objects();
        if groups.is_empty() {
            return false;
        }

        if groups.iter().any(|group| group == agent) {
            tracing::debug!(%agent, "agent is one of the rule's groups");
            return true;
        }

        let mut checks: FuturesUnordered<_> = groups
            .iter()
            .map(|group| self.is_member_of_group(agent, group))
            .collect();

        while let Some(is_member) = checks.next().await {
            if is_member {
                return true;
            }
        }
        false
    }

    /// Whether the group's document lists `agent` as `vcard:hasMember`.
    async fn is_member_of_group(&self, agent: &WebId, group: &WebId) -> bool {
        let document = group.document_url();
        match self.fetcher.fetch(document).await {
            Ok(graph) => {
                let found = graph.contains(
                    &Term::named(group.as_str()),
                    &Term::named(vocab::VCARD_HAS_MEMBER),
                    &Term::named(agent.as_str()),
                );
                tracing::trace!(%agent, %group, found, "group membership lookup");
                found
            }
            Err(e) => {
                tracing::debug!(%group, document, "unable to dereference group: {e}");
                false
            }
        }
    }
}

#[async_trait]
impl<F: GraphFetcher> AccessChecker for GroupMembershipChecker<F> {
    async fn check(&self, rule: &dyn AccessRule, credentials: &Credentials) -> bool {
        self.evaluate(rule, credentials).await
    }
}
