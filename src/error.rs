use crate::game::GameError;
use thiserror::Error;

/// Roster and board validation failures, raised before any match is played.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Board size must be at least 3, got {0}")]
    BoardTooSmall(usize),
    #[error("Board size must be at most 32, got {0}")]
    BoardTooLarge(usize),
    #[error("Player names must not be blank")]
    BlankName,
    #[error("Duplicate player name: {0}")]
    DuplicatePlayer(String),
}

#[derive(Debug, Error)]
pub enum ArenaError {
    #[error(transparent)]
    Game(#[from] GameError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Malformed input: expected an integer, got {0:?}")]
    MalformedInput(String),
    #[error("{0} is not on the roster")]
    UnknownPlayer(String),
    #[error("Move input ended before the match finished")]
    InputExhausted,
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
    #[error("Failed to serialize results: {0}")]
    Json(#[from] serde_json::Error),
}
