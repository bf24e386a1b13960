use serde::Serialize;

/// A tile placed by the spawn step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Spawn {
    pub row: usize,
    pub col: usize,
    pub value: u32,
}

/// Read-only copy of everything the view layer draws.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct GameSnapshot {
    pub size: usize,
    /// Row-major tile values, `size * size` long.
    pub grid: Vec<u32>,
    pub score: u64,
    pub high_score: u64,
    pub game_over: bool,
    pub last_spawn: Option<Spawn>,
    pub moves: u32,
}

impl GameSnapshot {
    /// Value at (row, col), or 0 when out of range.
    pub fn tile(&self, row: usize, col: usize) -> u32 {
        if row >= self.size || col >= self.size {
            return 0;
        }
        self.grid[row * self.size + col]
    }

    pub fn max_tile(&self) -> u32 {
        self.grid.iter().copied().max().unwrap_or(0)
    }
}

