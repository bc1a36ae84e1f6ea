//! Nullable link store — in-memory links with call accounting.

use async_trait::async_trait;
use grouptrust_store::{LinkStore, MemoryLinkStore, StoreError};
use grouptrust_types::{AccountLink, WebId};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// An in-memory link store for testing.
///
/// Counts every lookup so tests can assert which paths were taken, and can be
/// switched into a failing mode to exercise backend errors.
pub struct NullLinkStore {
    inner: MemoryLinkStore,
    direct_lookups: AtomicUsize,
    account_lookups: AtomicUsize,
    failing: AtomicBool,
}

impl NullLinkStore {
    pub fn new() -> Self {
        Self {
            inner: MemoryLinkStore::new(),
            direct_lookups: AtomicUsize::new(0),
            account_lookups: AtomicUsize::new(0),
            failing: AtomicBool::new(false),
        }
    }

    /// Store a link, panicking on a conflicting one.
    pub async fn link(&self, web_id: impl Into<WebId>, account_id: impl Into<String>) -> AccountLink {
        self.inner
            .create_link(web_id.into(), account_id.into())
            .await
            .expect("conflicting test link")
    }

    /// Make every lookup return a backend error.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Number of `find_direct_link` calls.
    pub fn direct_lookups(&self) -> usize {
        self.direct_lookups.load(Ordering::SeqCst)
    }

    /// Number of `find_links_for_account` calls.
    pub fn account_lookups(&self) -> usize {
        self.account_lookups.load(Ordering::SeqCst)
    }

    /// Total number of lookups of either kind.
    pub fn lookups(&self) -> usize {
        self.direct_lookups() + self.account_lookups()
    }

    fn check_failing(&self) -> Result<(), StoreError> {
        if self.failing.load(Ordering::SeqCst) {
            Err(StoreError::Backend("null store set to fail".into()))
        } else {
            Ok(())
        }
    }
}

impl Default for NullLinkStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LinkStore for NullLinkStore {
    async fn find_direct_link(
        &self,
        web_id: &WebId,
        account_id: &str,
    ) -> Result<Option<AccountLink>, StoreError> {
        self.direct_lookups.fetch_add(1, Ordering::SeqCst);
        self.check_failing()?;
        self.inner.find_direct_link(web_id, account_id).await
    }

    async fn find_links_for_account(
        &self,
        account_id: &str,
    ) -> Result<Vec<AccountLink>, StoreError> {
        self.account_lookups.fetch_add(1, Ordering::SeqCst);
        self.check_failing()?;
        self.inner.find_links_for_account(account_id).await
    }
}
