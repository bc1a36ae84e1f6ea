//! Account links and request credentials.

use serde::{Deserialize, Serialize};

use crate::WebId;

/// A stored link saying `web_id` authenticates as `account_id`.
///
/// A WebID links to at most one account; the link store enforces this.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountLink {
    /// Store-assigned identifier of the link record.
    pub id: String,
    pub web_id: WebId,
    pub account_id: String,
}

/// The identity presented with a request.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    /// `None` for anonymous requests.
    pub agent: Option<WebId>,
}

impl Credentials {
    pub fn anonymous() -> Self {
        Self { agent: None }
    }

    pub fn agent(web_id: impl Into<WebId>) -> Self {
        Self {
            agent: Some(web_id.into()),
        }
    }

    pub fn is_anonymous(&self) -> bool {
        self.agent.is_none()
    }
}
