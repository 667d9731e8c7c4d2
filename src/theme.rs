use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{GameError, GameResult};

/// Display strings for each kind of cell, as stored in the theme JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub player: String,
    pub ghost: String,
    pub wall: String,
    #[serde(rename = "dot")]
    pub pellet: String,
    #[serde(rename = "pill")]
    pub power: String,
    pub death: String,
    #[serde(rename = "space")]
    pub empty: String,
    /// Emoji glyphs take two terminal columns.
    #[serde(default)]
    pub use_emoji: bool,
}

impl Theme {
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    pub fn load(path: &Path) -> GameResult<Self> {
        let text = fs::read_to_string(path).map_err(|source| GameError::Resource {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text).map_err(|source| GameError::Theme {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Terminal columns per maze column.
    pub fn cell_width(&self) -> usize {
        if self.use_emoji {
            2
        } else {
            1
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            player: "P".to_string(),
            ghost: "G".to_string(),
            wall: "#".to_string(),
            pellet: ".".to_string(),
            power: "X".to_string(),
            death: "X".to_string(),
            empty: " ".to_string(),
            use_emoji: false,
        }
    }
}
