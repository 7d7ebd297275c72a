use lib_boardgame::AgentError;
use lib_connect_four::BoardError;
use std::path::PathBuf;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("invalid configuration: {0}")]
    Validation(String),
}

/// Errors that stop a matchup before or while it runs.
#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    #[error("'{0}' is not a number of games (expected a positive integer)")]
    InvalidGameCount(String),

    #[error("input closed while waiting for {0}")]
    InputClosed(&'static str),

    #[error(transparent)]
    Board(#[from] BoardError),

    /// Unknown agent names surface here too, through `AgentError::UnknownAgent`.
    #[error(transparent)]
    Agent(#[from] AgentError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
