use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::game::DEFAULT_LIVES;

pub const DEFAULT_TICK_MS: u64 = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn maze_file(self) -> &'static str {
        match self {
            Difficulty::Easy => "maze1.txt",
            Difficulty::Medium => "maze2.txt",
            Difficulty::Hard => "maze3.txt",
        }
    }
}

#[derive(Debug, Clone, Parser)]
#[command(name = "maze-chase", version, about = "Eat every dot before the ghosts catch you")]
pub struct Settings {
    /// Directory holding the maze and theme files.
    #[arg(long, env = "MAZE_CHASE_DATA_DIR", default_value = "assets")]
    pub data_dir: PathBuf,

    /// Theme file name inside the data directory.
    #[arg(long, default_value = "emojis.json")]
    pub theme: String,

    /// Skip the level prompt.
    #[arg(long, value_enum)]
    pub level: Option<Difficulty>,

    #[arg(
        long,
        env = "MAZE_CHASE_TICK_MS",
        default_value_t = DEFAULT_TICK_MS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub tick_ms: u64,

    #[arg(long, default_value_t = DEFAULT_LIVES, value_parser = clap::value_parser!(u32).range(1..))]
    pub lives: u32,

    /// Seed for ghost movement; random when absent.
    #[arg(long)]
    pub seed: Option<u64>,

    #[arg(long, default_value = "maze_chase.log")]
    pub log_file: PathBuf,
}

impl Settings {
    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    pub fn maze_path(&self, difficulty: Difficulty) -> PathBuf {
        self.data_dir.join(difficulty.maze_file())
    }

    pub fn theme_path(&self) -> PathBuf {
        self.data_dir.join(&self.theme)
    }
}
