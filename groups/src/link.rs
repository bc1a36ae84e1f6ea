//! WebID/account link checks, including group WebIDs.

use async_trait::async_trait;
use grouptrust_store::LinkStore;
use grouptrust_types::{vocab, Graph, Term, WebId};

use crate::fetcher::GraphFetcher;

/// Decides whether a WebID may act for an account.
#[async_trait]
pub trait WebIdStore: Send + Sync {
    async fn is_linked(&self, web_id: &WebId, account_id: &str) -> bool;
}

/// Accepts only WebIDs stored as linked to the account.
pub struct DirectWebIdStore<S> {
    links: S,
}

impl<S: LinkStore> DirectWebIdStore<S> {
    pub fn new(links: S) -> Self {
        Self { links }
    }
}

#[async_trait]
impl<S: LinkStore> WebIdStore for DirectWebIdStore<S> {
    async fn is_linked(&self, web_id: &WebId, account_id: &str) -> bool {
        has_direct_link(&self.links, web_id, account_id).await
    }
}

async fn has_direct_link<S: LinkStore>(links: &S, web_id: &WebId, account_id: &str) -> bool {
    match links.find_direct_link(web_id, account_id).await {
        Ok(link) => link.is_some(),
        Err(e) => {
            tracing::warn!(%web_id, account_id, "link lookup failed: {e}");
            false
        }
    }
}

/// Accepts stored links and group WebIDs.
///
/// A WebID that is not linked directly is treated as a possible group. Its
/// document must name this server as `solid:oidcIssuer`, and it must list at
/// least one WebID already linked to the account as `vcard:hasMember`.
pub struct GroupWebIdStore<S, F> {
    links: S,
    fetcher: F,
    base_url: String,
}

impl<S: LinkStore, F: GraphFetcher> GroupWebIdStore<S, F> {
    /// `base_url` is compared verbatim against issuer triples.
    pub fn new(base_url: impl Into<String>, links: S, fetcher: F) -> Self {
        Self {
            links,
            fetcher,
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Whether `group_web_id` is a group WebID usable by the account.
    ///
    /// An unreachable or unparsable document yields `false`.
    pub async fn is_valid_group_web_id(&self, group_web_id: &WebId, account_id: &str) -> bool {
        let document = group_web_id.document_url();
        let graph = match self.fetcher.fetch(document).await {
            Ok(graph) => graph,
            Err(e) => {
                tracing::debug!(%group_web_id, "unable to dereference (group) WebID: {e}");
                return false;
            }
        };
        self.is_valid_group_web_id_data(&graph, group_web_id, account_id)
            .await
    }

    /// The graph half of [`Self::is_valid_group_web_id`].
    pub async fn is_valid_group_web_id_data(
        &self,
        graph: &Graph,
        group_web_id: &WebId,
        account_id: &str,
    ) -> bool {
        let subject = Term::named(group_web_id.as_str());

        if !graph.contains(
            &subject,
            &Term::named(vocab::SOLID_OIDC_ISSUER),
            &Term::named(self.base_url.as_str()),
        ) {
            tracing::debug!(
                "this server is not authorized to issue tokens for group WebID {group_web_id}. \
                 If it should be, add the triple <{group_web_id}> <{}> <{}>.",
                vocab::SOLID_OIDC_ISSUER,
                self.base_url
            );
            return false;
        }

        let member_predicate = Term::named(vocab::VCARD_HAS_MEMBER);
        let web_ids_in_group: Vec<&str> = graph
            .objects(&subject, &member_predicate)
            .filter_map(Term::as_named)
            .collect();
        if web_ids_in_group.is_empty() {
            tracing::debug!(%group_web_id, "group document lists no members");
            return false;
        }

        // Plain stored links only; going through `is_linked` here could recurse
        // through group documents that list each other.
        let links = match self.links.find_links_for_account(account_id).await {
            Ok(links) => links,
            Err(e) => {
                tracing::warn!(account_id, "link lookup failed: {e}");
                return false;
            }
        };
        let has_web_id_in_group = links
            .iter()
            .any(|link| web_ids_in_group.contains(&link.web_id.as_str()));
        if !has_web_id_in_group {
            tracing::debug!(
                account_id,
                "account has no linked WebIDs that are part of {group_web_id}"
            );
            return false;
        }
        true
    }
}

#[async_trait]
impl<S: LinkStore, F: GraphFetcher> WebIdStore for GroupWebIdStore<S, F> {
    async fn is_linked(&self, web_id: &WebId, account_id: &str) -> bool {
        if has_direct_link(&self.links, web_id, account_id).await {
            return true;
        }
        tracing::debug!(
            %web_id,
            account_id,
            "WebID is not linked directly to account, checking for group WebID"
        );
        self.is_valid_group_web_id(web_id, account_id).await
    }
}
