//! Board module - manages the tile grid
//!
//! The board is an N×N grid of tile values where 0 is empty and every other
//! value is a power of two. Uses a flat row-major `Vec` so that rows and
//! columns are both just index sequences.
//! Coordinates: (row, col) where row 0 is the top edge and col 0 the left edge.
//!
//! Moves never rotate storage. A [`Line`] names one row or column together with
//! the direction it is scanned in, and [`Board::line_indices`] yields the flat
//! indices of that line in forward order. The slide-and-merge routine is then
//! written once against a line.

use crate::error::CoreError;
use crate::types::{is_valid_tile, Direction, EMPTY, MIN_BOARD_SIZE};

/// One row or column of the board, scanned in a move's forward order.
///
/// For `Left` the line is row `index` read left to right; `Right` reads the
/// same row right to left. `Up` reads column `index` top to bottom and `Down`
/// bottom to top. Tiles always travel towards position 0 of the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line {
    pub direction: Direction,
    pub index: usize,
}

/// Outcome of sliding a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LineSlide {
    /// A tile changed position or a merge happened.
    pub moved: bool,
    /// Sum of the values produced by merges.
    pub gained: u64,
}

/// The game board - N columns x N rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    /// Flat array of cells, row-major order (row * size + col)
    cells: Vec<u32>,
}

impl Board {
    /// Create a new empty board
    pub fn new(size: usize) -> Result<Self, CoreError> {
        if size < MIN_BOARD_SIZE {
            return Err(CoreError::BoardTooSmall { size });
        }
        Ok(Self {
            size,
            cells: vec![EMPTY; size * size],
        })
    }

    /// Build a board from rows, validating shape and tile values.
    pub fn from_rows<R: AsRef<[u32]>>(rows: &[R]) -> Result<Self, CoreError> {
        let size = rows.len();
        let mut board = Self::new(size)?;
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != size {
                return Err(CoreError::RaggedBoard {
                    row,
                    len: values.len(),
                    size,
                });
            }
            for (col, &value) in values.iter().enumerate() {
                if !is_valid_tile(value) {
                    return Err(CoreError::InvalidTile { row, col, value });
                }
                board.cells[row * size + col] = value;
            }
        }
        Ok(board)
    }

    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.size || col >= self.size {
            return None;
        }
        Some(row * self.size + col)
    }

    /// Board dimension N
    pub fn size(&self) -> usize {
        self.size
    }

    /// Get cell at (row, col). Returns None if out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<u32> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell at (row, col). Returns false if out of bounds or `value` is
    /// neither empty nor a power of two.
    pub fn set(&mut self, row: usize, col: usize, value: u32) -> bool {
        if !is_valid_tile(value) {
            return false;
        }
        match self.index(row, col) {
            Some(idx) => {
                self.cells[idx] = value;
                true
            }
            None => false,
        }
    }

    /// Flat row-major view of the cells
    pub fn cells(&self) -> &[u32] {
        &self.cells
    }

    /// Row `row` as a slice
    pub fn row(&self, row: usize) -> &[u32] {
        let start = row * self.size;
        &self.cells[start..start + self.size]
    }

    /// Copy the grid out as nested rows
    pub fn to_rows(&self) -> Vec<Vec<u32>> {
        self.cells.chunks(self.size).map(<[u32]>::to_vec).collect()
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|&&v| v == EMPTY).count()
    }

    pub fn max_tile(&self) -> u32 {
        self.cells.iter().copied().max().unwrap_or(EMPTY)
    }

    /// Sum of every tile on the board
    pub fn tile_sum(&self) -> u64 {
        self.cells.iter().map(|&v| v as u64).sum()
    }

    /// Row/col of the `nth` empty cell in row-major order
    pub fn nth_empty(&self, nth: usize) -> Option<(usize, usize)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &v)| v == EMPTY)
            .nth(nth)
            .map(|(idx, _)| (idx / self.size, idx % self.size))
    }

    /// Flat index of the `pos`-th cell of `line`, counted from the edge tiles move towards.
    #[inline(always)]
    pub fn line_cell(&self, line: Line, pos: usize) -> usize {
        let n = self.size;
        let far = n - 1 - pos;
        match line.direction {
            Direction::Left => line.index * n + pos,
            Direction::Right => line.index * n + far,
            Direction::Up => pos * n + line.index,
            Direction::Down => far * n + line.index,
        }
    }

    /// Flat indices of `line` in forward order
    pub fn line_indices(&self, line: Line) -> impl Iterator<Item = usize> + '_ {
        (0..self.size).map(move |pos| self.line_cell(line, pos))
    }

    /// All lines a move in `direction` touches
    pub fn lines(&self, direction: Direction) -> impl Iterator<Item = Line> {
        (0..self.size).map(move |index| Line { direction, index })
    }

    /// Slide and merge one line towards its leading edge.
    ///
    /// `scratch` is reused across lines to avoid per-line allocation; its
    /// contents on entry are ignored.
    pub fn slide_line(&mut self, line: Line, scratch: &mut Vec<u32>) -> LineSlide {
        scratch.clear();
        scratch.resize(self.size, EMPTY);

        let mut out = LineSlide::default();
        let mut placed = 0usize;
        // A slot produced by a merge this pass must not merge again.
        let mut last_merged = false;

        for pos in 0..self.size {
            let value = self.cells[self.line_cell(line, pos)];
            if value == EMPTY {
                continue;
            }
            let merged = if placed > 0 && !last_merged && scratch[placed - 1] == value {
                merge_value(value)
            } else {
                None
            };
            if let Some(merged) = merged {
                scratch[placed - 1] = merged;
                out.gained += merged as u64;
                last_merged = true;
                out.moved = true;
            } else {
                scratch[placed] = value;
                placed += 1;
                last_merged = false;
                if pos != placed - 1 {
                    out.moved = true;
                }
            }
        }

        if out.moved {
            for (pos, &value) in scratch.iter().enumerate() {
                let idx = self.line_cell(line, pos);
                self.cells[idx] = value;
            }
        }
        out
    }

    /// Slide every line in `direction`. Returns whether anything moved and the merge total.
    pub fn slide(&mut self, direction: Direction) -> LineSlide {
        let mut scratch = Vec::with_capacity(self.size);
        let mut total = LineSlide::default();
        for line in self.lines(direction) {
            let slide = self.slide_line(line, &mut scratch);
            total.moved |= slide.moved;
            total.gained += slide.gained;
        }
        total
    }

    /// True if any row or column still has an equal neighbour pair.
    pub fn has_adjacent_pair(&self) -> bool {
        let n = self.size;
        for row in 0..n {
            for col in 0..n {
                let value = self.cells[row * n + col];
                if merge_value(value).is_none() {
                    continue;
                }
                if col + 1 < n && value == self.cells[row * n + col + 1] {
                    return true;
                }
                // Same column, next row.
                if row + 1 < n && value == self.cells[(row + 1) * n + col] {
                    return true;
                }
            }
        }
        false
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(EMPTY);
    }
}

/// Value of two merged `value` tiles, or None when the result does not fit a tile.
#[inline(always)]
fn merge_value(value: u32) -> Option<u32> {
    value.checked_mul(2)
}
