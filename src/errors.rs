use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    #[error("Password length must be at least {minimum} characters (got {requested}).")]
    InvalidLength { requested: usize, minimum: usize },

    #[error("No characters available for password generation.")]
    EmptyAlphabet,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not read config file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Could not serialize config: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("Could not determine a config directory for this platform")]
    NoConfigDir,
}

#[derive(Error, Debug)]
pub enum HistoryError {
    #[error("History I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not determine a data directory for this platform")]
    NoDataDir,
}

#[derive(Error, Debug)]
pub enum ClipboardError {
    #[error("No clipboard provider available")]
    Unavailable,

    #[error("Could not copy to clipboard: {0}")]
    Copy(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Generation(#[from] GenerationError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    History(#[from] HistoryError),

    #[error("Could not read password: {0}")]
    Prompt(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_length_message_names_both_lengths() {
        let e = GenerationError::InvalidLength { requested: 3, minimum: 6 };
        let msg = e.to_string();

        assert!(msg.contains("at least 6"));
        assert!(msg.contains("got 3"));
    }

    #[test]
    fn app_error_is_transparent_over_generation_error() {
        let e: AppError = GenerationError::EmptyAlphabet.into();

        assert_eq!(e.to_string(), "No characters available for password generation.");
    }
}
