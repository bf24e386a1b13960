//! Game state module - the board engine
//!
//! Ties together the board, the spawn randomness and the high-score store.
//! Owns the grid, the running score and the best score, and exposes a move
//! operation plus a game-over query. Everything runs to completion on the
//! caller's thread; `&mut self` serializes moves.

use arrayvec::ArrayVec;
use log::{debug, info, warn};

use crate::board::Board;
use crate::error::CoreError;
use crate::rng::{SimpleRng, TileRng};
use crate::snapshot::{GameSnapshot, Spawn};
use crate::store::{HighScoreStore, MemoryStore};
use crate::types::{
    Direction, GameAction, INITIAL_TILES, SPAWN_HIGH_VALUE, SPAWN_LOW_PROBABILITY,
    SPAWN_LOW_VALUE,
};

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<R = SimpleRng, S = MemoryStore> {
    board: Board,
    score: u64,
    high_score: u64,
    rng: R,
    store: S,
    last_spawn: Option<Spawn>,
    /// Successful moves since the board was dealt.
    moves: u32,
}

impl GameState {
    /// Deterministic game with an in-memory store.
    pub fn seeded(size: usize, seed: u32) -> Result<Self, CoreError> {
        Self::new(size, SimpleRng::new(seed), MemoryStore::new())
    }
}

impl<R: TileRng, S: HighScoreStore> GameState<R, S> {
    /// Start a session: empty N×N board, stored best score, two spawned tiles.
    pub fn new(size: usize, rng: R, store: S) -> Result<Self, CoreError> {
        let mut state = Self::from_board(Board::new(size)?, rng, store);
        state.deal();
        Ok(state)
    }

    /// Wrap an existing board without spawning anything.
    ///
    /// The best score is still loaded from `store`.
    pub fn from_board(board: Board, rng: R, store: S) -> Self {
        let high_score = load_high_score(&store);
        Self {
            board,
            score: 0,
            high_score,
            rng,
            store,
            last_spawn: None,
            moves: 0,
        }
    }

    fn deal(&mut self) {
        for _ in 0..INITIAL_TILES {
            self.spawn_tile();
        }
    }

    pub fn size(&self) -> usize {
        self.board.size()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn high_score(&self) -> u64 {
        self.high_score
    }

    pub fn last_spawn(&self) -> Option<Spawn> {
        self.last_spawn
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn max_tile(&self) -> u32 {
        self.board.max_tile()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Slide every line towards `direction`.
    ///
    /// Returns true if any tile moved or merged. On success one tile is
    /// spawned and a new best score is saved before returning; otherwise the
    /// board and score are untouched.
    pub fn apply_move(&mut self, direction: Direction) -> bool {
        let slide = self.board.slide(direction);
        if !slide.moved {
            return false;
        }

        self.score += slide.gained;
        self.moves += 1;
        self.spawn_tile();

        if self.score > self.high_score {
            self.high_score = self.score;
            self.persist_high_score();
        }
        true
    }

    /// Apply a move given as a symbol such as `"UP"`.
    ///
    /// Unrecognized symbols are a no-op and return false.
    pub fn apply_symbol(&mut self, symbol: &str) -> bool {
        match Direction::from_str(symbol) {
            Some(direction) => self.apply_move(direction),
            None => {
                debug!("ignoring unknown direction symbol {:?}", symbol);
                false
            }
        }
    }

    /// Apply an input-layer action. Returns whether the board changed.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Move(direction) => self.apply_move(direction),
            GameAction::Restart => {
                self.restart();
                true
            }
        }
    }

    /// Deal a fresh board. The best score carries over.
    pub fn restart(&mut self) {
        self.board.clear();
        self.score = 0;
        self.moves = 0;
        self.last_spawn = None;
        self.deal();
    }

    /// Place a 2 (or rarely a 4) in a uniformly chosen empty cell.
    ///
    /// No-op when the board is full.
    fn spawn_tile(&mut self) -> Option<Spawn> {
        let empty = self.board.empty_count();
        if empty == 0 {
            return None;
        }

        let nth = self.rng.next_below(empty);
        let (row, col) = self.board.nth_empty(nth)?;
        let value = if self.rng.next_unit() < SPAWN_LOW_PROBABILITY {
            SPAWN_LOW_VALUE
        } else {
            SPAWN_HIGH_VALUE
        };
        self.board.set(row, col, value);

        let spawn = Spawn { row, col, value };
        debug!("spawned {} at ({}, {})", value, row, col);
        self.last_spawn = Some(spawn);
        Some(spawn)
    }

    fn persist_high_score(&mut self) {
        info!("new high score {}", self.high_score);
        if let Err(e) = self.store.save(self.high_score) {
            // The in-memory value stays authoritative for this session.
            warn!("failed to save high score {}: {}", self.high_score, e);
        }
    }

    /// No empty cell and no equal neighbour in any row or column.
    pub fn is_game_over(&self) -> bool {
        self.board.empty_count() == 0 && !self.board.has_adjacent_pair()
    }

    /// Would a move in `direction` change the board?
    pub fn can_move(&self, direction: Direction) -> bool {
        let mut scratch = self.board.clone();
        scratch.slide(direction).moved
    }

    /// Directions that would change the board, in `Direction::ALL` order.
    pub fn legal_moves(&self) -> ArrayVec<Direction, 4> {
        Direction::ALL
            .into_iter()
            .filter(|&d| self.can_move(d))
            .collect()
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }

    /// Fill `snap`, reusing its grid allocation.
    pub fn snapshot_into(&self, snap: &mut GameSnapshot) {
        snap.size = self.board.size();
        snap.grid.clear();
        snap.grid.extend_from_slice(self.board.cells());
        snap.score = self.score;
        snap.high_score = self.high_score;
        snap.game_over = self.is_game_over();
        snap.last_spawn = self.last_spawn;
        snap.moves = self.moves;
    }

    /// Replace the board, e.g. to set up a position. Score is unchanged.
    #[cfg(test)]
    pub fn set_board(&mut self, board: Board) {
        self.board = board;
    }
}

fn load_high_score<S: HighScoreStore>(store: &S) -> u64 {
    match store.load() {
        Ok(value) => value.unwrap_or(0),
        Err(e) => {
            warn!("could not read high score, starting from 0: {}", e);
            0
        }
    }
}
