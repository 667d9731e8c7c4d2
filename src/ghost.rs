use std::collections::VecDeque;

use rand::Rng;

use crate::components::{Dir, Sprite};
use crate::level::Grid;
use crate::movement::resolve;

/// Supplies the direction each ghost tries on a tick. `None` holds the ghost
/// still.
pub trait DirectionSource {
    fn next_dir(&mut self) -> Option<Dir>;
}

/// Uniform choice over the four directions, no memory between draws.
#[derive(Debug)]
pub struct RandomDirections<R> {
    rng: R,
}

impl<R: Rng> RandomDirections<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> DirectionSource for RandomDirections<R> {
    fn next_dir(&mut self) -> Option<Dir> {
        Some(Dir::ALL[self.rng.gen_range(0..Dir::ALL.len())])
    }
}

/// Replays a fixed sequence, then holds every ghost still.
#[derive(Debug, Default, Clone)]
pub struct ScriptedDirections {
    moves: VecDeque<Option<Dir>>,
}

impl ScriptedDirections {
    pub fn new(moves: impl IntoIterator<Item = Option<Dir>>) -> Self {
        Self {
            moves: moves.into_iter().collect(),
        }
    }
}

impl DirectionSource for ScriptedDirections {
    fn next_dir(&mut self) -> Option<Dir> {
        self.moves.pop_front().flatten()
    }
}

/// Moves every ghost one step. Ghosts ignore each other and the player.
pub fn move_ghosts(grid: &Grid, ghosts: &mut [Sprite], source: &mut impl DirectionSource) {
    for ghost in ghosts.iter_mut() {
        ghost.pos = resolve(grid, ghost.pos, source.next_dir());
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    use super::*;
    use crate::components::Pos;
    use crate::level::Tile;

    #[test]
    fn random_directions_are_roughly_uniform() {
        let mut source = RandomDirections::new(SmallRng::seed_from_u64(7));
        let mut counts = [0usize; 4];
        for _ in 0..4000 {
            let dir = source.next_dir().unwrap();
            let idx = Dir::ALL.iter().position(|d| *d == dir).unwrap();
            counts[idx] += 1;
        }
        for count in counts {
            assert!((850..1150).contains(&count), "{counts:?}");
        }
    }

    #[test]
    fn ghosts_move_independently() {
        let grid = Grid::from_rows(vec![vec![Tile::Empty; 5]; 5]);
        let mut ghosts = vec![Sprite::new(Pos::new(2, 2)), Sprite::new(Pos::new(2, 2))];
        let mut source = ScriptedDirections::new([Some(Dir::Up), Some(Dir::Right)]);
        move_ghosts(&grid, &mut ghosts, &mut source);
        assert_eq!(ghosts[0].pos, Pos::new(1, 2));
        assert_eq!(ghosts[1].pos, Pos::new(2, 3));
    }

    #[test]
    fn ghosts_may_overlap() {
        let grid = Grid::from_rows(vec![vec![Tile::Empty; 3]]);
        let mut ghosts = vec![Sprite::new(Pos::new(0, 0)), Sprite::new(Pos::new(0, 2))];
        let mut source = ScriptedDirections::new([Some(Dir::Right), Some(Dir::Left)]);
        move_ghosts(&grid, &mut ghosts, &mut source);
        assert_eq!(ghosts[0].pos, ghosts[1].pos);
    }

    #[test]
    fn ghosts_do_not_eat_pellets() {
        let mut level = Grid::parse("G..P").unwrap();
        let before = level.grid.clone();
        let mut ghosts = vec![Sprite::new(level.ghost_starts[0])];
        let mut source = ScriptedDirections::new([Some(Dir::Right)]);
        move_ghosts(&level.grid, &mut ghosts, &mut source);
        assert_eq!(ghosts[0].pos, Pos::new(0, 1));
        assert_eq!(level.grid, before);
        level.grid.clear_cell(Pos::new(0, 1));
        assert_ne!(level.grid, before);
    }

    #[test]
    fn exhausted_script_holds_still() {
        let grid = Grid::from_rows(vec![vec![Tile::Empty; 3]]);
        let mut ghosts = vec![Sprite::new(Pos::new(0, 1))];
        let mut source = ScriptedDirections::default();
        move_ghosts(&grid, &mut ghosts, &mut source);
        assert_eq!(ghosts[0].pos, Pos::new(0, 1));
    }
}
