use tracing::{debug, info};

use crate::components::{Dir, Pos, Sprite};
use crate::ghost::{move_ghosts, DirectionSource};
use crate::input::InputEvent;
use crate::level::{Grid, LevelData};
use crate::player::{self, Pickup};

pub const DEFAULT_LIVES: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Running,
    Won,
    Lost,
}

impl GameState {
    pub fn is_over(self) -> bool {
        self != GameState::Running
    }
}

/// Everything a single run owns: the maze, the sprites and the counters.
#[derive(Debug, Clone)]
pub struct Game {
    grid: Grid,
    player: Sprite,
    ghosts: Vec<Sprite>,
    score: u32,
    lives: u32,
    pellets_left: usize,
    dir: Option<Dir>,
    state: GameState,
}

impl Game {
    pub fn new(level: LevelData, lives: u32) -> Self {
        Self {
            grid: level.grid,
            player: Sprite::new(level.player_start),
            ghosts: level.ghost_starts.into_iter().map(Sprite::new).collect(),
            score: 0,
            lives,
            pellets_left: level.pellets,
            dir: None,
            state: GameState::Running,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn player(&self) -> &Sprite {
        &self.player
    }

    pub fn ghosts(&self) -> &[Sprite] {
        &self.ghosts
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn pellets_left(&self) -> usize {
        self.pellets_left
    }

    pub fn dir(&self) -> Option<Dir> {
        self.dir
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    fn apply_input(&mut self, input: Option<InputEvent>) {
        match input {
            Some(InputEvent::Move(dir)) => self.dir = Some(dir),
            Some(InputEvent::Cancel) => self.cancel(),
            None => {}
        }
    }

    /// Ends the run as a loss at the next termination check.
    pub fn cancel(&mut self) {
        info!(lives = self.lives, "session cancelled");
        self.lives = 0;
    }

    fn move_player(&mut self) {
        player::move_player(&self.grid, &mut self.player, self.dir);
    }

    fn consume_tile(&mut self) {
        let pickup = player::consume_tile(&mut self.grid, self.player.pos);
        if pickup == Pickup::Nothing {
            return;
        }
        self.score += pickup.score();
        if pickup == Pickup::Pellet {
            self.pellets_left = self.pellets_left.saturating_sub(1);
        }
        debug!(
            ?pickup,
            score = self.score,
            pellets_left = self.pellets_left,
            "pickup eaten"
        );
    }

    fn update_ghosts(&mut self, source: &mut impl DirectionSource) {
        move_ghosts(&self.grid, &mut self.ghosts, source);
    }

    /// At most one life is lost per tick, however many ghosts share the cell.
    fn handle_collisions(&mut self) -> bool {
        let player = self.player.pos;
        if !self.ghosts.iter().any(|ghost| ghost.pos == player) {
            return false;
        }
        self.lives = self.lives.saturating_sub(1);
        self.player.respawn();
        info!(
            row = player.row,
            col = player.col,
            lives = self.lives,
            "caught by a ghost"
        );
        true
    }

    fn check_end(&mut self) {
        if self.lives == 0 {
            self.state = GameState::Lost;
        } else if self.pellets_left == 0 {
            self.state = GameState::Won;
        }
        if self.state.is_over() {
            info!(state = ?self.state, score = self.score, "game over");
        }
    }

    /// Advances one tick. Finished games are left untouched.
    pub fn tick(
        &mut self,
        input: Option<InputEvent>,
        source: &mut impl DirectionSource,
    ) -> GameState {
        if self.state.is_over() {
            return self.state;
        }
        self.apply_input(input);
        self.move_player();
        self.consume_tile();
        self.update_ghosts(source);
        self.handle_collisions();
        self.check_end();
        self.state
    }

    /// The cell drawn with the defeat glyph in the closing frame.
    pub fn defeat_cell(&self) -> Option<Pos> {
        (self.state == GameState::Lost).then_some(self.player.pos)
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;
    use crate::ghost::ScriptedDirections;
    use crate::level::Tile;

    fn game(maze: &str) -> Game {
        Game::new(Grid::parse(maze).unwrap(), DEFAULT_LIVES)
    }

    fn still() -> ScriptedDirections {
        ScriptedDirections::default()
    }

    #[test]
    fn single_pickup_scenario_wins() {
        let mut game = game("P    \n .   \n     \n     \n     ");
        assert_eq!(game.pellets_left(), 1);

        let state = game.tick(Some(InputEvent::Move(Dir::Right)), &mut still());
        assert_eq!(state, GameState::Running);
        assert_eq!(game.player().pos, Pos::new(0, 1));

        let state = game.tick(Some(InputEvent::Move(Dir::Down)), &mut still());
        assert_eq!(game.player().pos, Pos::new(1, 1));
        assert_eq!(game.score(), 1);
        assert_eq!(game.pellets_left(), 0);
        assert_eq!(state, GameState::Won);
        assert_eq!(game.grid().cell_at(Pos::new(1, 1)), Tile::Empty);
    }

    #[test]
    fn direction_persists_across_ticks() {
        let mut game = game("P.....");
        game.tick(Some(InputEvent::Move(Dir::Right)), &mut still());
        game.tick(None, &mut still());
        game.tick(None, &mut still());
        assert_eq!(game.player().pos, Pos::new(0, 3));
        assert_eq!(game.dir(), Some(Dir::Right));
        assert_eq!(game.score(), 3);
    }

    #[test]
    fn no_input_means_no_movement() {
        let mut game = game("P..");
        game.tick(None, &mut still());
        assert_eq!(game.player().pos, Pos::new(0, 0));
        assert_eq!(game.score(), 0);
    }

    #[test]
    fn power_pellet_scores_without_counting_toward_win() {
        let mut game = game("PX.");
        game.tick(Some(InputEvent::Move(Dir::Right)), &mut still());
        assert_eq!(game.score(), 10);
        assert_eq!(game.pellets_left(), 1);
        assert_eq!(game.state(), GameState::Running);
    }

    #[test]
    fn pellets_left_drops_by_one_per_pellet_only() {
        let mut game = game("P. X.");
        let mut seen = vec![game.pellets_left()];
        for _ in 0..4 {
            game.tick(Some(InputEvent::Move(Dir::Right)), &mut still());
            seen.push(game.pellets_left());
        }
        assert_eq!(seen, vec![2, 1, 1, 1, 0]);
        assert_eq!(game.score(), 12);
        assert_eq!(game.state(), GameState::Won);
    }

    #[test]
    fn revisiting_a_cleared_cell_scores_nothing() {
        let mut game = game("#####\n#P..#\n#####");
        game.tick(Some(InputEvent::Move(Dir::Right)), &mut still());
        assert_eq!(game.score(), 1);
        game.tick(Some(InputEvent::Move(Dir::Left)), &mut still());
        game.tick(Some(InputEvent::Move(Dir::Right)), &mut still());
        assert_eq!(game.score(), 1);
        assert_eq!(game.pellets_left(), 1);
    }

    #[test]
    fn ghost_stepping_onto_player_costs_a_life() {
        let mut game = game("#####\n#P G#\n#...#\n#####");
        let mut ghosts = ScriptedDirections::new([Some(Dir::Left)]);
        game.tick(Some(InputEvent::Move(Dir::Right)), &mut ghosts);
        assert_eq!(game.lives(), 2);
        assert_eq!(game.player().pos, game.player().spawn());
        assert_eq!(game.player().pos, Pos::new(1, 1));
        assert_eq!(game.state(), GameState::Running);
    }

    #[test]
    fn adjacent_ghost_moving_onto_idle_player() {
        let mut game = game("PG.");
        let mut ghosts = ScriptedDirections::new([Some(Dir::Left)]);
        game.tick(None, &mut ghosts);
        assert_eq!(game.lives(), 2);
        assert_eq!(game.player().pos, Pos::new(0, 0));
    }

    #[test]
    fn several_ghosts_on_the_player_cost_one_life() {
        let mut game = game("#####\n#G G#\n# P #\n#...#\n#####");
        game.tick(Some(InputEvent::Move(Dir::Up)), &mut still());
        let mut ghosts = ScriptedDirections::new([Some(Dir::Right), Some(Dir::Left)]);
        let before = game.lives();
        game.tick(None, &mut ghosts);
        assert_eq!(game.ghosts()[0].pos, game.ghosts()[1].pos);
        assert_eq!(game.lives(), before - 1);
        assert_eq!(game.player().pos, Pos::new(2, 2));
    }

    #[test]
    fn losing_the_last_life_ends_the_game() {
        let mut game = Game::new(Grid::parse("PG.").unwrap(), 1);
        let mut ghosts = ScriptedDirections::new([Some(Dir::Left)]);
        assert_eq!(game.tick(None, &mut ghosts), GameState::Lost);
        assert_eq!(game.lives(), 0);
        assert_eq!(game.defeat_cell(), Some(Pos::new(0, 0)));
    }

    #[test]
    fn loss_beats_win_in_the_same_tick() {
        let mut game = Game::new(Grid::parse("P.G").unwrap(), 1);
        let mut ghosts = ScriptedDirections::new([Some(Dir::Left)]);
        let state = game.tick(Some(InputEvent::Move(Dir::Right)), &mut ghosts);
        assert_eq!(game.pellets_left(), 0);
        assert_eq!(state, GameState::Lost);
    }

    #[test]
    fn cancel_forces_a_loss() {
        let mut game = game("P...");
        assert_eq!(game.lives(), 3);
        let state = game.tick(Some(InputEvent::Cancel), &mut still());
        assert_eq!(state, GameState::Lost);
        assert_eq!(game.lives(), 0);
        assert!(game.pellets_left() > 0);
    }

    #[test]
    fn finished_games_do_not_change() {
        let mut game = game("P.");
        game.tick(Some(InputEvent::Move(Dir::Right)), &mut still());
        assert_eq!(game.state(), GameState::Won);
        let snapshot = (game.player().pos, game.score(), game.lives());
        let state = game.tick(Some(InputEvent::Cancel), &mut still());
        assert_eq!(state, GameState::Won);
        assert_eq!((game.player().pos, game.score(), game.lives()), snapshot);
        assert_eq!(game.defeat_cell(), None);
    }
}
