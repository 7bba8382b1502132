use thiserror::Error;

/// Unified error type for rss-reader operations
#[derive(Error, Debug)]
pub enum ReaderError {
    #[error("Release notes document error: {0}")]
    Document(String),

    #[error("Malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Settings file could not be parsed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Article error: {0}")]
    Article(String),

    #[error("Onboarding error: {0}")]
    Onboarding(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in rss-reader
pub type Result<T> = std::result::Result<T, ReaderError>;

impl ReaderError {
    /// Create a document shape error with context
    pub fn document(msg: impl Into<String>) -> Self {
        ReaderError::Document(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ReaderError::Config(msg.into())
    }

    /// Create an article error with context
    pub fn article(msg: impl Into<String>) -> Self {
        ReaderError::Article(msg.into())
    }

    /// Create an onboarding navigation error with context
    pub fn onboarding(msg: impl Into<String>) -> Self {
        ReaderError::Onboarding(msg.into())
    }
}
