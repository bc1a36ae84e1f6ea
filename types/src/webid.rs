//! WebID type: a URI identifying an agent or a group.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::TypesError;

/// A WebID, i.e. a URI that identifies an agent (or a group of agents).
///
/// Opaque beyond string equality. The part before any `#` is the document
/// that has to be dereferenced to learn anything about the identity.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WebId(String);

impl WebId {
    /// Wrap a raw URI string without validation.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Parse a WebID, rejecting strings that cannot be dereferenced.
    pub fn parse(raw: impl Into<String>) -> Result<Self, TypesError> {
        let web_id = Self::new(raw);
        if web_id.is_valid() {
            Ok(web_id)
        } else {
            Err(TypesError::InvalidWebId(web_id.0))
        }
    }

    /// Return the raw URI string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The fetchable document location: the URI with any fragment stripped.
    ///
    /// `http://example.com/group#team` -> `http://example.com/group`
    pub fn document_url(&self) -> &str {
        match self.0.find('#') {
            Some(idx) => &self.0[..idx],
            None => &self.0,
        }
    }

    /// The fragment after the first `#`, if any.
    pub fn fragment(&self) -> Option<&str> {
        self.0.find('#').map(|idx| &self.0[idx + 1..])
    }

    /// Well-formed enough to be dereferenced: has a scheme and no whitespace.
    pub fn is_valid(&self) -> bool {
        match self.0.find("://") {
            Some(idx) => {
                idx > 0
                    && self.0.len() > idx + 3
                    && !self.0.chars().any(char::is_whitespace)
            }
            None => false,
        }
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for WebId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for WebId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for WebId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl AsRef<str> for WebId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
