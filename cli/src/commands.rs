//! Subcommand implementations, independent of argument parsing.

use anyhow::{Context, Result};
use grouptrust_groups::{
    ntriples, AclRule, GraphFetcher, GroupMembershipChecker, GroupTrustConfig, GroupWebIdStore,
    WebIdStore,
};
use grouptrust_store::MemoryLinkStore;
use grouptrust_types::{Credentials, Term, WebId};
use serde::Serialize;
use std::path::Path;

/// Outcome of a check, printable as text or JSON.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct Verdict {
    pub check: &'static str,
    pub subject: Option<String>,
    pub granted: bool,
}

impl Verdict {
    pub fn render(&self, json: bool) -> Result<String> {
        if json {
            Ok(serde_json::to_string(self)?)
        } else if self.granted {
            Ok("granted".to_string())
        } else {
            Ok("denied".to_string())
        }
    }
}

/// Load the ACL document and evaluate `rule` for `agent`.
pub async fn check_access<F: GraphFetcher>(
    fetcher: F,
    acl_path: &Path,
    rule: &str,
    agent: Option<&str>,
) -> Result<Verdict> {
    let contents = std::fs::read_to_string(acl_path)
        .with_context(|| format!("failed to read ACL document {}", acl_path.display()))?;
    let acl = ntriples::parse(&contents)
        .with_context(|| format!("failed to parse ACL document {}", acl_path.display()))?;

    let credentials = match agent {
        Some(agent) => Credentials::agent(WebId::parse(agent)?),
        None => Credentials::anonymous(),
    };
    let rule = AclRule::new(acl, Term::named(rule));
    let granted = GroupMembershipChecker::new(fetcher)
        .evaluate(&rule, &credentials)
        .await;

    Ok(Verdict {
        check: "access",
        subject: agent.map(str::to_string),
        granted,
    })
}

/// Check `web_id` against `account` using the links from `config`.
pub async fn check_link<F: GraphFetcher>(
    config: &GroupTrustConfig,
    fetcher: F,
    web_id: &str,
    account: &str,
) -> Result<Verdict> {
    let web_id = WebId::parse(web_id)?;
    let links = MemoryLinkStore::from_links(
        config
            .links
            .iter()
            .map(|link| (link.web_id.as_str(), link.account_id.as_str())),
    )
    .await
    .context("invalid [[links]] in configuration")?;

    let store = GroupWebIdStore::new(config.base_url.clone(), links, fetcher);
    let granted = store.is_linked(&web_id, account).await;

    Ok(Verdict {
        check: "link",
        subject: Some(web_id.into_string()),
        granted,
    })
}
