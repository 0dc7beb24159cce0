use std::path::PathBuf;
use thiserror::Error;

/// Application error type. Everything here is recoverable: errors are
/// surfaced to the user in a modal and the session continues.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Could not determine config directory")]
    ConfigDir,

    #[error("Invalid config file: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Could not write config: {0}")]
    ConfigWrite(#[from] toml::ser::Error),
}
