use thiserror::Error;

/// Why a group document could not be turned into a graph.
///
/// The trust checks collapse every variant into "not verified"; the detail
/// only ends up in logs.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("document unreachable: {0}")]
    Unreachable(String),

    #[error("HTTP status {0}")]
    Status(u16),

    #[error("document exceeds {limit} bytes")]
    TooLarge { limit: usize },

    #[error("invalid response: {0}")]
    InvalidResponse(String),

    #[error("N-Triples syntax error on line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("{0}")]
    Other(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}
