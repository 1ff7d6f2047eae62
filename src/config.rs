use crate::error::{ArenaError, ConfigError};
use crate::game::{MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

pub trait Validate {
    fn validate(&self) -> Result<(), ConfigError>;
}

/// Startup settings, fixed for the whole run.
///
/// ```yaml
/// players: [Alice, Bob, Carol, Dave]
/// board_size: 3
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TournamentConfig {
    pub players: Vec<String>,
    pub board_size: usize,
}

impl Default for TournamentConfig {
    fn default() -> Self {
        TournamentConfig {
            players: Vec::new(),
            board_size: MIN_BOARD_SIZE,
        }
    }
}

impl TournamentConfig {
    pub fn from_yaml(content: &str) -> Result<Self, ArenaError> {
        Ok(serde_yaml_ng::from_str(content)?)
    }

    pub fn to_yaml(&self) -> Result<String, ArenaError> {
        Ok(serde_yaml_ng::to_string(self)?)
    }

    pub fn load(path: &Path) -> Result<Self, ArenaError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }
}

impl Validate for TournamentConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        validate_board_size(self.board_size)?;
        validate_roster(&self.players)
    }
}

pub fn validate_board_size(size: usize) -> Result<(), ConfigError> {
    if size < MIN_BOARD_SIZE {
        return Err(ConfigError::BoardTooSmall(size));
    }
    if size > MAX_BOARD_SIZE {
        return Err(ConfigError::BoardTooLarge(size));
    }
    Ok(())
}

/// Names must be non-blank and unique; an empty roster is allowed.
pub fn validate_roster(players: &[String]) -> Result<(), ConfigError> {
    let mut seen = HashSet::new();
    for name in players {
        if name.trim().is_empty() {
            return Err(ConfigError::BlankName);
        }
        if !seen.insert(name.as_str()) {
            return Err(ConfigError::DuplicatePlayer(name.clone()));
        }
    }
    Ok(())
}
