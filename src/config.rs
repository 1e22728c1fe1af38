use std::fmt;
use std::path::Path;
use std::str::FromStr;

use tracing::warn;

use crate::ai::{DEFAULT_DEPTH, MAX_DEPTH};
use crate::error::ConfigError;
use crate::game::{Board, COLS, ROWS, TO_WIN};

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
    pub search: SearchConfig,
    pub players: PlayersConfig,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub height: usize,
    pub width: usize,
    pub to_win: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            height: ROWS,
            width: COLS,
            to_win: TO_WIN,
        }
    }
}

impl BoardConfig {
    pub fn build(&self) -> Result<Board, ConfigError> {
        Board::new(self.height, self.width, self.to_win)
            .map_err(|e| ConfigError::Validation(e.to_string()))
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Plies searched by the minimax strategy.
    pub depth: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            depth: DEFAULT_DEPTH,
        }
    }
}

/// Which strategy controls a side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    Human,
    Minimax,
    Random,
}

impl FromStr for StrategyKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "human" => Ok(StrategyKind::Human),
            "minimax" => Ok(StrategyKind::Minimax),
            "random" => Ok(StrategyKind::Random),
            other => Err(ConfigError::Validation(format!(
                "unknown strategy '{other}' (expected 'human', 'minimax', or 'random')"
            ))),
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StrategyKind::Human => "human",
            StrategyKind::Minimax => "minimax",
            StrategyKind::Random => "random",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlayersConfig {
    pub red: StrategyKind,
    pub yellow: StrategyKind,
    /// Seed for random strategies; OS entropy when absent.
    pub seed: Option<u64>,
}

impl Default for PlayersConfig {
    fn default() -> Self {
        PlayersConfig {
            red: StrategyKind::Human,
            yellow: StrategyKind::Minimax,
            seed: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board.height == 0 {
            return Err(ConfigError::Validation("board.height must be >= 1".into()));
        }
        if self.board.width == 0 {
            return Err(ConfigError::Validation("board.width must be >= 1".into()));
        }
        if self.board.to_win == 0 || self.board.to_win > self.board.height.max(self.board.width) {
            return Err(ConfigError::Validation(
                "board.to_win must be in [1, max(height, width)]".into(),
            ));
        }
        if self.search.depth == 0 || self.search.depth > MAX_DEPTH {
            return Err(ConfigError::Validation(format!(
                "search.depth must be in [1, {MAX_DEPTH}]"
            )));
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(&AppConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        config.validate().expect("default config should be valid");
        assert_eq!(config.board.build().unwrap(), Board::standard());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[search]
depth = 6
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.search.depth, 6);
        assert_eq!(config.board.width, COLS);
        assert_eq!(config.players.yellow, StrategyKind::Minimax);
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.search.depth, DEFAULT_DEPTH);
        assert_eq!(config.board.to_win, TO_WIN);
        assert_eq!(config.players.seed, None);
    }

    #[test]
    fn test_players_parse_lowercase() {
        let toml_str = r#"
[players]
red = "random"
yellow = "random"
seed = 9
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.players.red, StrategyKind::Random);
        assert_eq!(config.players.seed, Some(9));
    }

    #[test]
    fn test_unknown_player_kind_fails_to_parse() {
        let toml_str = r#"
[players]
red = "oracle"
"#;
        assert!(toml::from_str::<AppConfig>(toml_str).is_err());
    }

    #[test]
    fn test_strategy_kind_from_str() {
        assert_eq!("Minimax".parse::<StrategyKind>().unwrap(), StrategyKind::Minimax);
        assert_eq!("random".parse::<StrategyKind>().unwrap(), StrategyKind::Random);
        assert!("dqn".parse::<StrategyKind>().is_err());
        assert_eq!(StrategyKind::Human.to_string(), "human");
    }

    #[test]
    fn test_validation_rejects_zero_depth() {
        let mut config = AppConfig::default();
        config.search.depth = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_excessive_depth() {
        let mut config = AppConfig::default();
        config.search.depth = MAX_DEPTH;
        assert!(config.validate().is_ok());
        config.search.depth = MAX_DEPTH + 1;
        assert!(config.validate().is_err());
        config.search.depth = usize::MAX;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_zero_dimensions() {
        let mut config = AppConfig::default();
        config.board.height = 0;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.board.width = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_unreachable_win_length() {
        let mut config = AppConfig::default();
        config.board.to_win = 8;
        assert!(config.validate().is_err());

        config.board.to_win = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = AppConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert_eq!(config.search.depth, DEFAULT_DEPTH);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("connect_four.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[board]
height = 5
width = 5
to_win = 3
"#
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        let board = config.board.build().unwrap();
        assert_eq!((board.height(), board.width(), board.to_win()), (5, 5, 3));
        assert_eq!(config.search.depth, DEFAULT_DEPTH);
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[search]\ndepth = 0\n").unwrap();
        assert!(matches!(
            AppConfig::load(&path),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = AppConfig::default_toml().unwrap();
        let config: AppConfig = toml::from_str(&toml_str).unwrap();
        config.validate().expect("roundtripped config should be valid");
    }
}
