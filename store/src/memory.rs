//! In-memory link store.

use async_trait::async_trait;
use grouptrust_types::{AccountLink, WebId};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;

use crate::{LinkStore, StoreError};

/// A link store held entirely in memory, keyed by WebID.
///
/// Suitable for a single process with a static set of links loaded from
/// configuration.
pub struct MemoryLinkStore {
    by_web_id: RwLock<HashMap<WebId, AccountLink>>,
    next_id: AtomicU64,
}

impl MemoryLinkStore {
    pub fn new() -> Self {
        Self {
            by_web_id: RwLock::new(HashMap::new()),
            next_id: AtomicU64::new(1),
        }
    }

    /// Build a store from `(web_id, account_id)` pairs.
    pub async fn from_links<I, W, A>(links: I) -> Result<Self, StoreError>
    where
        I: IntoIterator<Item = (W, A)>,
        W: Into<WebId>,
        A: Into<String>,
    {
        let store = Self::new();
        for (web_id, account_id) in links {
            store.create_link(web_id.into(), account_id.into()).await?;
        }
        Ok(store)
    }

    /// Link a WebID to an account.
    ///
    /// Linking the same pair twice returns the existing record. A WebID that
    /// already belongs to a different account is rejected.
    pub async fn create_link(
        &self,
        web_id: WebId,
        account_id: String,
    ) -> Result<AccountLink, StoreError> {
        let mut links = self.by_web_id.write().await;
        if let Some(existing) = links.get(&web_id) {
            if existing.account_id == account_id {
                return Ok(existing.clone());
            }
            return Err(StoreError::Duplicate {
                web_id: web_id.into_string(),
                account_id: existing.account_id.clone(),
            });
        }
        let link = AccountLink {
            id: self.next_id.fetch_add(1, Ordering::Relaxed).to_string(),
            web_id: web_id.clone(),
            account_id,
        };
        links.insert(web_id, link.clone());
        Ok(link)
    }

    /// Remove a link by its record id.
    pub async fn delete_link(&self, id: &str) -> Result<AccountLink, StoreError> {
        let mut links = self.by_web_id.write().await;
        let web_id = links
            .values()
            .find(|link| link.id == id)
            .map(|link| link.web_id.clone())
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        links
            .remove(&web_id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    pub async fn len(&self) -> usize {
        self.by_web_id.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.by_web_id.read().await.is_empty()
    }
}

impl Default for MemoryLinkStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LinkStore for MemoryLinkStore {
    async fn find_direct_link(
        &self,
        web_id: &WebId,
        account_id: &str,
    ) -> Result<Option<AccountLink>, StoreError> {
        Ok(self
            .by_web_id
            .read()
            .await
            .get(web_id)
            .filter(|link| link.account_id == account_id)
            .cloned())
    }

    async fn find_links_for_account(
        &self,
        account_id: &str,
    ) -> Result<Vec<AccountLink>, StoreError> {
        let mut links: Vec<AccountLink> = self
            .by_web_id
            .read()
            .await
            .values()
            .filter(|link| link.account_id == account_id)
            .cloned()
            .collect();
        links.sort_by(|a, b| a.web_id.cmp(&b.web_id));
        Ok(links)
    }
}
