use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    /// A maze or theme file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Resource {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid theme {}: {source}", path.display())]
    Theme {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid maze: {0}")]
    Maze(String),

    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),
}

pub type GameResult<T> = Result<T, GameError>;
