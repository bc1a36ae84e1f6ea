use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("link not found: {0}")]
    NotFound(String),

    #[error("WebID {web_id} is already linked to account {account_id}")]
    Duplicate { web_id: String, account_id: String },

    #[error("storage backend error: {0}")]
    Backend(String),
}
