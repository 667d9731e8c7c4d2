use crate::components::{Dir, Pos, Sprite};
use crate::level::{Grid, Tile};
use crate::movement::resolve;

pub const PELLET_SCORE: u32 = 1;
pub const POWER_SCORE: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pickup {
    Nothing,
    Pellet,
    Power,
}

impl Pickup {
    pub fn score(self) -> u32 {
        match self {
            Pickup::Nothing => 0,
            Pickup::Pellet => PELLET_SCORE,
            Pickup::Power => POWER_SCORE,
        }
    }
}

/// Steps the player in the held direction, if any.
pub fn move_player(grid: &Grid, player: &mut Sprite, dir: Option<Dir>) {
    player.pos = resolve(grid, player.pos, dir);
}

/// Eats whatever lies at `pos`, clearing the cell.
pub fn consume_tile(grid: &mut Grid, pos: Pos) -> Pickup {
    let pickup = match grid.cell_at(pos) {
        Tile::Pellet => Pickup::Pellet,
        Tile::Power => Pickup::Power,
        Tile::Wall | Tile::Empty => return Pickup::Nothing,
    };
    grid.clear_cell(pos);
    pickup
}
