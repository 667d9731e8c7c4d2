//! A terminal maze chase: eat every dot while randomly wandering ghosts try
//! to bump into you.
//!
//! The simulation ([`Game`]) is a plain value advanced one tick at a time by
//! [`Session`], which polls keyboard input from a reader thread without ever
//! waiting on it.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod game;
pub mod ghost;
pub mod input;
pub mod level;
pub mod menu;
pub mod movement;
pub mod player;
pub mod render;
pub mod terminal;
pub mod theme;

pub use app::Session;
pub use components::{Dir, Pos, Sprite};
pub use config::{Difficulty, Settings};
pub use error::{GameError, GameResult};
pub use game::{Game, GameState};
pub use ghost::{DirectionSource, RandomDirections, ScriptedDirections};
pub use input::InputEvent;
pub use level::{Grid, LevelData, Tile};
pub use render::Renderer;
pub use theme::Theme;
