//! WebID-to-account link storage trait.

use async_trait::async_trait;
use grouptrust_types::{AccountLink, WebId};

use crate::StoreError;

/// Read access to persisted WebID/account links.
///
/// These are the plain lookups. They never dereference anything and never
/// consult group documents, so a group-aware caller can use them without
/// recursing into itself.
#[async_trait]
pub trait LinkStore: Send + Sync {
    /// The stored link for exactly this `(web_id, account_id)` pair.
    async fn find_direct_link(
        &self,
        web_id: &WebId,
        account_id: &str,
    ) -> Result<Option<AccountLink>, StoreError>;

    /// Every link stored for the account.
    async fn find_links_for_account(&self, account_id: &str)
        -> Result<Vec<AccountLink>, StoreError>;
}

#[async_trait]
impl<T: LinkStore + ?Sized> LinkStore for std::sync::Arc<T> {
    async fn find_direct_link(
        &self,
        web_id: &WebId,
        account_id: &str,
    ) -> Result<Option<AccountLink>, StoreError> {
        (**self).find_direct_link(web_id, account_id).await
    }

    async fn find_links_for_account(
        &self,
        account_id: &str,
    ) -> Result<Vec<AccountLink>, StoreError> {
        (**self).find_links_for_account(account_id).await
    }
}
