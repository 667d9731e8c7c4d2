use std::fs;
use std::path::Path;

use tracing::debug;

use crate::components::Pos;
use crate::error::{GameError, GameResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Wall,
    Empty,
    Pellet,
    Power,
}

impl Tile {
    fn from_char(ch: char) -> Self {
        match ch {
            '#' => Tile::Wall,
            '.' => Tile::Pellet,
            'X' => Tile::Power,
            _ => Tile::Empty,
        }
    }
}

/// The maze. Rows may differ in width; anything outside a row reads as wall.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<Tile>>,
}

impl Grid {
    pub fn from_rows(rows: Vec<Vec<Tile>>) -> Self {
        Self { rows }
    }

    /// Parses maze text, returning the grid together with the sprite starts
    /// and the pellet count found along the way.
    pub fn parse(text: &str) -> GameResult<LevelData> {
        let mut rows = Vec::new();
        let mut player_start = None;
        let mut ghost_starts = Vec::new();

        for (row, line) in text.lines().enumerate() {
            let mut tiles = Vec::with_capacity(line.len());
            for (col, ch) in line.chars().enumerate() {
                match ch {
                    'P' => {
                        if let Some(first) = player_start.replace(Pos::new(row, col)) {
                            return Err(GameError::Maze(format!(
                                "second player start at {row},{col} (first at {},{})",
                                first.row, first.col
                            )));
                        }
                    }
                    'G' => ghost_starts.push(Pos::new(row, col)),
                    _ => {}
                }
                tiles.push(Tile::from_char(ch));
            }
            rows.push(tiles);
        }

        let player_start = player_start
            .ok_or_else(|| GameError::Maze("no player start marker 'P'".to_string()))?;
        let grid = Grid { rows };
        let pellets = count_pellets(&grid);
        debug!(
            rows = grid.height(),
            ghosts = ghost_starts.len(),
            pellets,
            "parsed maze"
        );
        Ok(LevelData {
            grid,
            player_start,
            ghost_starts,
            pellets,
        })
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn row_width(&self, row: usize) -> usize {
        self.rows.get(row).map_or(0, Vec::len)
    }

    /// Width of the widest row.
    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    pub fn get(&self, pos: Pos) -> Option<Tile> {
        self.rows.get(pos.row)?.get(pos.col).copied()
    }

    pub fn cell_at(&self, pos: Pos) -> Tile {
        self.get(pos).unwrap_or(Tile::Wall)
    }

    /// Writes a tile; positions outside the grid are ignored.
    pub fn set_cell(&mut self, pos: Pos, tile: Tile) {
        if let Some(cell) = self
            .rows
            .get_mut(pos.row)
            .and_then(|row| row.get_mut(pos.col))
        {
            *cell = tile;
        }
    }

    /// Turns a pellet or power pellet into floor. Anything else is left alone.
    pub fn clear_cell(&mut self, pos: Pos) {
        if matches!(self.get(pos), Some(Tile::Pellet | Tile::Power)) {
            self.set_cell(pos, Tile::Empty);
        }
    }
}

#[derive(Debug, Clone)]
pub struct LevelData {
    pub grid: Grid,
    pub player_start: Pos,
    pub ghost_starts: Vec<Pos>,
    pub pellets: usize,
}

impl LevelData {
    pub fn load(path: &Path) -> GameResult<Self> {
        let text = fs::read_to_string(path).map_err(|source| GameError::Resource {
            path: path.to_path_buf(),
            source,
        })?;
        Grid::parse(&text)
    }
}

/// Plain pellets only; power pellets do not count toward clearing the maze.
pub fn count_pellets(grid: &Grid) -> usize {
    grid.rows
        .iter()
        .flat_map(|row| row.iter())
        .filter(|&&cell| cell == Tile::Pellet)
        .count()
}
