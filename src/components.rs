/// A cell coordinate on the maze grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dir {
    Up,
    Down,
    Left,
    Right,
}

impl Dir {
    pub const ALL: [Dir; 4] = [Dir::Up, Dir::Down, Dir::Left, Dir::Right];
}

/// Player or ghost. The spawn point never changes after creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sprite {
    pub pos: Pos,
    spawn: Pos,
}

impl Sprite {
    pub fn new(spawn: Pos) -> Self {
        Self { pos: spawn, spawn }
    }

    pub fn spawn(&self) -> Pos {
        self.spawn
    }

    pub fn respawn(&mut self) {
        self.pos = self.spawn;
    }
}
