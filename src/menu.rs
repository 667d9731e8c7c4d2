use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::{Attribute, Print, SetAttribute};
use crossterm::terminal::{Clear, ClearType};
use crossterm::QueueableCommand;

use crate::config::Difficulty;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuAction {
    Prev,
    Next,
    Choose,
    Abort,
}

fn decode(key: KeyEvent) -> Option<MenuAction> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(MenuAction::Abort)
        }
        KeyCode::Up | KeyCode::Char('k') => Some(MenuAction::Prev),
        KeyCode::Down | KeyCode::Char('j') => Some(MenuAction::Next),
        KeyCode::Enter | KeyCode::Char(' ') => Some(MenuAction::Choose),
        KeyCode::Esc | KeyCode::Char('q') => Some(MenuAction::Abort),
        _ => None,
    }
}

fn draw<W: Write>(out: &mut W, selected: usize) -> io::Result<()> {
    out.queue(Clear(ClearType::All))?;
    out.queue(MoveTo(0, 0))?;
    out.queue(Print("Choose Level"))?;
    for (idx, difficulty) in Difficulty::ALL.iter().enumerate() {
        out.queue(MoveTo(2, idx as u16 + 2))?;
        if idx == selected {
            out.queue(SetAttribute(Attribute::Reverse))?;
            out.queue(Print(format!("> {}", difficulty.label())))?;
            out.queue(SetAttribute(Attribute::Reset))?;
        } else {
            out.queue(Print(format!("  {}", difficulty.label())))?;
        }
    }
    out.flush()
}

/// Asks for a difficulty. `None` means the player backed out.
pub fn select_level<W, F>(out: &mut W, mut read: F) -> io::Result<Option<Difficulty>>
where
    W: Write,
    F: FnMut() -> io::Result<Event>,
{
    let count = Difficulty::ALL.len();
    let mut selected = 0;
    loop {
        draw(out, selected)?;
        let Event::Key(key) = read()? else {
            continue;
        };
        match decode(key) {
            Some(MenuAction::Prev) => selected = (selected + count - 1) % count,
            Some(MenuAction::Next) => selected = (selected + 1) % count,
            Some(MenuAction::Choose) => return Ok(Some(Difficulty::ALL[selected])),
            Some(MenuAction::Abort) => return Ok(None),
            None => {}
        }
    }
}
