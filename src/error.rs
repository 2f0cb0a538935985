use thiserror::Error;

/// Main error type for the playlist generator
///
/// Only configuration problems and output-sink failures surface as errors.
/// Remote-call failures are handled locally (empty catalog, dropped entry)
/// and never reach this type.
#[derive(Error, Debug)]
pub enum M3uError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, M3uError>;
