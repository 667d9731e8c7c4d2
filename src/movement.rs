use crate::components::{Dir, Pos};
use crate::level::{Grid, Tile};

/// One cell over in `dir`, wrapping around the maze edges. Horizontal wrap
/// uses the width of the row being walked along.
pub fn step(grid: &Grid, pos: Pos, dir: Dir) -> Pos {
    let height = grid.height();
    let width = grid.row_width(pos.row);
    match dir {
        Dir::Up => Pos {
            row: if pos.row == 0 { height.saturating_sub(1) } else { pos.row - 1 },
            ..pos
        },
        Dir::Down => Pos {
            row: if pos.row + 1 >= height { 0 } else { pos.row + 1 },
            ..pos
        },
        Dir::Left => Pos {
            col: if pos.col == 0 { width.saturating_sub(1) } else { pos.col - 1 },
            ..pos
        },
        Dir::Right => Pos {
            col: if pos.col + 1 >= width { 0 } else { pos.col + 1 },
            ..pos
        },
    }
}

/// Where a sprite at `pos` ends up after trying to move in `dir`. Bumping
/// into a wall leaves it in place.
pub fn resolve(grid: &Grid, pos: Pos, dir: Option<Dir>) -> Pos {
    let Some(dir) = dir else {
        return pos;
    };
    let next = step(grid, pos, dir);
    if grid.cell_at(next) == Tile::Wall {
        pos
    } else {
        next
    }
}
