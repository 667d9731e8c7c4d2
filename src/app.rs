use std::io::{self, Write};
use std::sync::mpsc::Receiver;
use std::thread;
use std::time::Duration;

use tracing::{info, trace};

use crate::error::GameResult;
use crate::game::{Game, GameState};
use crate::ghost::DirectionSource;
use crate::input::{self, InputEvent};
use crate::render::Renderer;

/// The tick loop: owns the game and drives it to a win or a loss.
#[derive(Debug)]
pub struct Session<D> {
    game: Game,
    directions: D,
    renderer: Renderer,
    tick: Duration,
}

impl<D: DirectionSource> Session<D> {
    pub fn new(game: Game, directions: D, renderer: Renderer, tick: Duration) -> Self {
        Self {
            game,
            directions,
            renderer,
            tick,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Runs until the game ends. Input is polled once per tick and never
    /// waited on, so ghosts keep moving while the player is idle.
    pub fn run<W, V>(
        &mut self,
        out: &mut W,
        events: &Receiver<InputEvent>,
        mut viewport: V,
    ) -> GameResult<GameState>
    where
        W: Write,
        V: FnMut() -> io::Result<(u16, u16)>,
    {
        info!(
            lives = self.game.lives(),
            pellets = self.game.pellets_left(),
            ghosts = self.game.ghosts().len(),
            tick_ms = self.tick.as_millis() as u64,
            "session started"
        );
        self.renderer.render(out, &self.game, viewport()?)?;

        let mut ticks: u64 = 0;
        loop {
            let event = input::poll(events);
            let state = self.game.tick(event, &mut self.directions);
            ticks += 1;
            trace!(ticks, ?event, score = self.game.score(), "tick");

            if state.is_over() {
                self.renderer.render_game_over(out, &self.game, viewport()?)?;
                info!(ticks, ?state, score = self.game.score(), "session finished");
                return Ok(state);
            }
            self.renderer.render(out, &self.game, viewport()?)?;
            thread::sleep(self.tick);
        }
    }
}
