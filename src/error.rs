use std::path::PathBuf;

/// Errors raised by the board and game state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("column {column} is full")]
    ColumnFull { column: usize },

    #[error("column {column} is out of bounds (width {width})")]
    ColumnOutOfBounds { column: usize, width: usize },

    #[error("cell ({row}, {column}) is out of bounds")]
    OutOfBounds { row: usize, column: usize },

    #[error("invalid board {height}x{width} with {to_win} to win")]
    InvalidDimensions {
        height: usize,
        width: usize,
        to_win: usize,
    },

    #[error("game is already over")]
    GameOver,
}

/// Errors a strategy can return instead of a column.
#[derive(Debug, thiserror::Error)]
pub enum StrategyError {
    #[error("no playable column left")]
    NoPlayableColumn,

    #[error("input closed before a move was entered")]
    InputClosed,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("game error: {0}")]
    Game(#[from] GameError),
}

/// Errors that can occur while a match is being played.
#[derive(Debug, thiserror::Error)]
pub enum MatchError {
    #[error("{player} selected illegal column {column} (playable: {playable:?})")]
    IllegalAction {
        player: String,
        column: usize,
        playable: Vec<usize>,
    },

    #[error("strategy error: {0}")]
    Strategy(#[from] StrategyError),

    #[error("game error: {0}")]
    Game(#[from] GameError),
}

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

    #[error("config validation error: {0}")]
    Validation(String),
}
