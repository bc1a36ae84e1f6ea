//! Group trust configuration with TOML file support.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::client::DEFAULT_MAX_DOCUMENT_BYTES;
use crate::error::ConfigError;

/// A statically configured WebID/account link.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkEntry {
    pub web_id: String,
    pub account_id: String,
}

/// Configuration for the group trust checks.
///
/// Can be loaded from a TOML file via [`GroupTrustConfig::from_toml_file`]
/// or built programmatically (e.g. for tests).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GroupTrustConfig {
    /// This server's base URL. Group documents must name it verbatim as
    /// `solid:oidcIssuer`.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Whole-request timeout for fetching a group document.
    #[serde(default = "default_fetch_timeout_secs")]
    pub fetch_timeout_secs: u64,

    /// Connection timeout for fetching a group document.
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,

    /// Upper bound on a group document's size.
    #[serde(default = "default_max_document_bytes")]
    pub max_document_bytes: usize,

    /// Log format: "human" or "json".
    #[serde(default = "default_log_format")]
    pub log_format: String,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// WebIDs linked directly to accounts.
    #[serde(default)]
    pub links: Vec<LinkEntry>,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_base_url() -> String {
    "http://localhost:3000/".to_string()
}

fn default_fetch_timeout_secs() -> u64 {
    10
}

fn default_connect_timeout_secs() -> u64 {
    5
}

fn default_max_document_bytes() -> usize {
    DEFAULT_MAX_DOCUMENT_BYTES
}

fn default_log_format() -> String {
    "human".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

// ── Impl ───────────────────────────────────────────────────────────────

impl GroupTrustConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the configuration to a TOML string.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Reject values the checks cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_url.trim().is_empty() {
            return Err(ConfigError::Invalid("base_url must not be empty".into()));
        }
        if self.fetch_timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "fetch_timeout_secs must be positive".into(),
            ));
        }
        if self.max_document_bytes == 0 {
            return Err(ConfigError::Invalid(
                "max_document_bytes must be positive".into(),
            ));
        }
        Ok(())
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

impl Default for GroupTrustConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            fetch_timeout_secs: default_fetch_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
            max_document_bytes: default_max_document_bytes(),
            log_format: default_log_format(),
            log_level: default_log_level(),
            links: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config_round_trips_through_toml() {
        let config = GroupTrustConfig::default();
        let toml_str = config.to_toml_string().expect("should serialize");
        let parsed = GroupTrustConfig::from_toml_str(&toml_str).expect("should parse");
        assert_eq!(parsed.base_url, config.base_url);
        assert_eq!(parsed.fetch_timeout_secs, config.fetch_timeout_secs);
    }

    #[test]
    fn minimal_toml_uses_defaults() {
        let config = GroupTrustConfig::from_toml_str("").expect("empty toml should use defaults");
        assert_eq!(config.base_url, "http://localhost:3000/");
        assert_eq!(config.fetch_timeout(), Duration::from_secs(10));
        assert_eq!(config.max_document_bytes, 1024 * 1024);
        assert_eq!(config.log_format, "human");
        assert!(config.links.is_empty());
    }

    #[test]
    fn links_table_is_parsed() {
        let toml = r#"
            base_url = "http://example.com/"

            [[links]]
            web_id = "http://example.com/webID"
            account_id = "account-1"
        "#;
        let config = GroupTrustConfig::from_toml_str(toml).expect("should parse");
        assert_eq!(config.base_url, "http://example.com/");
        assert_eq!(
            config.links,
            vec![LinkEntry {
                web_id: "http://example.com/webID".into(),
                account_id: "account-1".into(),
            }]
        );
    }

    #[test]
    fn zero_timeout_is_invalid() {
        let err = GroupTrustConfig::from_toml_str("fetch_timeout_secs = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn empty_base_url_is_invalid() {
        let err = GroupTrustConfig::from_toml_str("base_url = \"  \"").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "base_url = \"https://idp.example/\"").unwrap();
        let config = GroupTrustConfig::from_toml_file(file.path()).expect("should load");
        assert_eq!(config.base_url, "https://idp.example/");
    }

    #[test]
    fn missing_file_returns_io_error() {
        let err = GroupTrustConfig::from_toml_file("/nonexistent/grouptrust.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
