//! Match script configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tictactoe_engine::Coord;
use tracing::{debug, info, instrument};

/// A sequence of games to play on one engine.
#[derive(Debug, Clone, Getters, Serialize, Deserialize)]
pub struct MatchScript {
    /// Abort the script on the first rejected move.
    #[serde(default)]
    stop_on_illegal: bool,

    /// Games in play order.
    games: Vec<ScriptedGame>,
}

/// Moves for a single game, X first.
#[derive(Debug, Clone, Getters, Serialize, Deserialize)]
pub struct ScriptedGame {
    /// Coordinates in play order.
    moves: Vec<Coord>,
}

impl MatchScript {
    /// Loads a match script from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading match script");
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::new(format!("Failed to read match script: {}", e))
        })?;

        let script = Self::from_toml(&content)?;
        info!(games = script.games.len(), "Match script loaded");
        Ok(script)
    }

    /// Parses a match script from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let script: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse match script: {}", e)))?;

        if script.games.is_empty() {
            return Err(ConfigError::new("Match script has no games".to_string()));
        }
        Ok(script)
    }
}

/// Parses a move written as `x,y`.
pub fn parse_coord(s: &str) -> Result<Coord, ConfigError> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| ConfigError::new(format!("Expected a move as x,y, got '{}'", s)))?;

    let component = |part: &str| {
        part.trim()
            .parse::<usize>()
            .map_err(|e| ConfigError::new(format!("Invalid coordinate '{}': {}", part.trim(), e)))
    };

    Ok(Coord::new(component(x)?, component(y)?))
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SCRIPT: &str = r#"
[[games]]
moves = [{ x = 0, y = 0 }, { x = 1, y = 0 }, { x = 0, y = 1 }]

[[games]]
moves = [{ x = 2, y = 2 }]
"#;

    #[test]
    fn test_parse_script() {
        let script = MatchScript::from_toml(SCRIPT).unwrap();
        assert!(!*script.stop_on_illegal());
        assert_eq!(script.games().len(), 2);
        assert_eq!(script.games()[0].moves()[2], Coord::new(0, 1));
    }

    #[test]
    fn test_stop_on_illegal_flag() {
        let script =
            MatchScript::from_toml(&format!("stop_on_illegal = true\n{}", SCRIPT)).unwrap();
        assert!(*script.stop_on_illegal());
    }

    #[test]
    fn test_empty_script_rejected() {
        let err = MatchScript::from_toml("games = []").unwrap_err();
        assert!(err.message.contains("no games"));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SCRIPT.as_bytes()).unwrap();

        let script = MatchScript::from_file(file.path()).unwrap();
        assert_eq!(script.games()[1].moves(), &vec![Coord::new(2, 2)]);
    }

    #[test]
    fn test_missing_file() {
        let err = MatchScript::from_file("/nonexistent/match.toml").unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }

    #[test]
    fn test_parse_coord() {
        assert_eq!(parse_coord("2,1").unwrap(), Coord::new(2, 1));
        assert_eq!(parse_coord(" 0 , 2 ").unwrap(), Coord::new(0, 2));
        assert!(parse_coord("1").is_err());
        assert!(parse_coord("a,1").is_err());
        assert!(parse_coord("-1,0").is_err());
    }
}
