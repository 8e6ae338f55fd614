use std::path::PathBuf;

/// Errors surfaced by the library.
///
/// Query preconditions (missing reverse trie, terms not collected, empty
/// input) are not errors; those operations return empty results instead.
#[derive(Debug, thiserror::Error)]
pub enum StreengError {
    /// The match pattern is not a valid regular expression
    #[error("invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// A local text source could not be read
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A remote text source could not be fetched
    #[cfg(feature = "remote")]
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// A remote text source answered with a non-success status
    #[error("unexpected HTTP status {0}")]
    HttpStatus(u16),

    /// A configuration file could not be parsed
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StreengError>;
