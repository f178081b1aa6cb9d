use thiserror::Error;

/// Why a script's text could not be obtained.
///
/// Both variants are terminal: there is no retry and no fallback to the
/// other source. A failed load leaves nothing partially initialized.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The path or bundle key did not resolve to a script.
    #[error("script not found: {name} ({detail})")]
    NotFound { name: &'static str, detail: String },

    /// The script resolved but its content could not be read as text.
    #[error("script unreadable: {name} ({detail})")]
    Unreadable { name: &'static str, detail: String },
}

pub type Result<T> = std::result::Result<T, LoadError>;

/// Errors from reading a `fixtures.yaml` configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    Parse(#[from] serde_yaml::Error),
}
