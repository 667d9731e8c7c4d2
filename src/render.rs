use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};
use crossterm::QueueableCommand;
use unicode_width::UnicodeWidthStr;

use crate::components::Pos;
use crate::game::{Game, GameState};
use crate::level::Tile;
use crate::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Glyph {
    Player,
    Ghost,
    Defeat,
    Wall,
    Empty,
    Pellet,
    Power,
    /// Past the end of a short row.
    Blank,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Cell {
    glyph: Glyph,
    fg: Color,
    bg: Color,
}

impl Cell {
    const fn new(glyph: Glyph, fg: Color) -> Self {
        Self {
            glyph,
            fg,
            bg: Color::Reset,
        }
    }
}

/// Redraws only the cells and status line that changed since the last frame.
#[derive(Debug)]
pub struct Renderer {
    theme: Theme,
    width: usize,
    height: usize,
    last: Vec<Cell>,
    last_hud: String,
    needs_full: bool,
    origin_x: u16,
    origin_y: u16,
}

impl Renderer {
    pub fn new(theme: Theme, width: usize, height: usize) -> Self {
        Self {
            theme,
            width,
            height,
            last: vec![Cell::new(Glyph::Blank, Color::Reset); width * height],
            last_hud: String::new(),
            needs_full: true,
            origin_x: 0,
            origin_y: 1,
        }
    }

    pub fn for_game(theme: Theme, game: &Game) -> Self {
        Self::new(theme, game.grid().width(), game.grid().height())
    }

    fn needed_size(&self) -> (u16, u16) {
        let w = self.width * self.theme.cell_width();
        let h = self.height + 2;
        (clamp_u16(w), clamp_u16(h))
    }

    pub fn render<W: Write>(
        &mut self,
        out: &mut W,
        game: &Game,
        viewport: (u16, u16),
    ) -> io::Result<()> {
        let (needed_w, needed_h) = self.needed_size();
        let (term_w, term_h) = viewport;

        out.queue(MoveTo(0, 0))?;
        if term_w < needed_w || term_h < needed_h {
            out.queue(Clear(ClearType::All))?;
            out.queue(Print(format!(
                "Terminal too small. Need at least {}x{} (cols x rows). Current: {}x{}.",
                needed_w, needed_h, term_w, term_h
            )))?;
            out.flush()?;
            self.needs_full = true;
            return Ok(());
        }

        let origin_x = (term_w - needed_w) / 2;
        let origin_y = (term_h - needed_h) / 2 + 1;
        if origin_x != self.origin_x || origin_y != self.origin_y {
            self.origin_x = origin_x;
            self.origin_y = origin_y;
            self.needs_full = true;
        }
        if self.needs_full {
            out.queue(Clear(ClearType::All))?;
        }

        let hud = format!("Score: {}  Lives: {}", game.score(), game.lives());
        if self.needs_full || hud != self.last_hud {
            out.queue(MoveTo(self.origin_x, self.origin_y - 1))?;
            out.queue(SetForegroundColor(Color::White))?;
            out.queue(Clear(ClearType::CurrentLine))?;
            out.queue(Print(&hud))?;
            out.queue(ResetColor)?;
            self.last_hud = hud;
        }

        for row in 0..self.height {
            for col in 0..self.width {
                let cell = cell_for(game, Pos::new(row, col));
                let idx = row * self.width + col;
                if self.needs_full || cell != self.last[idx] {
                    self.last[idx] = cell;
                    self.draw_cell(out, row, col, cell)?;
                }
            }
        }
        self.needs_full = false;

        out.flush()
    }

    fn draw_cell<W: Write>(&self, out: &mut W, row: usize, col: usize, cell: Cell) -> io::Result<()> {
        let cell_w = self.theme.cell_width();
        let text = match cell.glyph {
            Glyph::Player => self.theme.player.as_str(),
            Glyph::Ghost => self.theme.ghost.as_str(),
            Glyph::Defeat => self.theme.death.as_str(),
            Glyph::Wall => self.theme.wall.as_str(),
            Glyph::Empty | Glyph::Blank => self.theme.empty.as_str(),
            Glyph::Pellet => self.theme.pellet.as_str(),
            Glyph::Power => self.theme.power.as_str(),
        };
        let x_pos = self.origin_x + clamp_u16(col * cell_w);
        let y_pos = self.origin_y + clamp_u16(row);
        out.queue(MoveTo(x_pos, y_pos))?;
        out.queue(SetForegroundColor(cell.fg))?;
        out.queue(SetBackgroundColor(cell.bg))?;
        out.queue(Print(text))?;
        let w = UnicodeWidthStr::width(text);
        if w < cell_w {
            for _ in 0..(cell_w - w) {
                out.queue(Print(' '))?;
            }
        }
        out.queue(ResetColor)?;
        Ok(())
    }

    /// Prints the closing message under the maze.
    pub fn render_game_over<W: Write>(
        &mut self,
        out: &mut W,
        game: &Game,
        viewport: (u16, u16),
    ) -> io::Result<()> {
        self.render(out, game, viewport)?;
        let (needed_w, needed_h) = self.needed_size();
        if viewport.0 < needed_w || viewport.1 < needed_h {
            out.queue(MoveTo(0, 1))?;
        } else {
            out.queue(MoveTo(self.origin_x, self.origin_y + clamp_u16(self.height)))?;
        }
        out.queue(Print(outcome_message(game.state())))?;
        out.flush()
    }
}

pub fn outcome_message(state: GameState) -> &'static str {
    match state {
        GameState::Won => "Congratulations! You collected all the coins!!",
        GameState::Lost => "GAME OVER!!",
        GameState::Running => "",
    }
}

fn cell_for(game: &Game, pos: Pos) -> Cell {
    if game.defeat_cell() == Some(pos) {
        return Cell::new(Glyph::Defeat, Color::Red);
    }
    if game.player().pos == pos {
        return Cell::new(Glyph::Player, Color::Yellow);
    }
    if game.ghosts().iter().any(|g| g.pos == pos) {
        return Cell::new(Glyph::Ghost, Color::Red);
    }
    match game.grid().get(pos) {
        Some(Tile::Wall) => Cell {
            glyph: Glyph::Wall,
            fg: Color::Blue,
            bg: Color::DarkBlue,
        },
        Some(Tile::Empty) => Cell::new(Glyph::Empty, Color::Reset),
        Some(Tile::Pellet) => Cell::new(Glyph::Pellet, Color::White),
        Some(Tile::Power) => Cell::new(Glyph::Power, Color::Magenta),
        None => Cell::new(Glyph::Blank, Color::Reset),
    }
}

fn clamp_u16(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}
